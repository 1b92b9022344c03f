//! Lookup kinds and results for the explore screen.

use serde_json::Value;

use super::ChainError;

// ============================================================================
// Lookup Kind
// ============================================================================

/// What the explore lookup box searches for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LookupKind {
    /// Account by address (algod).
    #[default]
    Account,
    /// Transaction by id (indexer).
    Transaction,
    /// Application by id (algod).
    Application,
}

impl LookupKind {
    /// Cycles Account → Transaction → Application → Account.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Account => Self::Transaction,
            Self::Transaction => Self::Application,
            Self::Application => Self::Account,
        }
    }

    /// Display label.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Account => "Account",
            Self::Transaction => "Transaction",
            Self::Application => "Application",
        }
    }

    /// Placeholder text for the empty lookup box.
    #[must_use]
    pub const fn placeholder(&self) -> &'static str {
        match self {
            Self::Account => "Enter an address",
            Self::Transaction => "Enter a transaction ID",
            Self::Application => "Enter an application ID",
        }
    }

    /// Checks the query before any request is made.
    ///
    /// # Errors
    ///
    /// Returns [`ChainError::Validation`] for an empty query, a non-numeric
    /// application id, or an address or transaction id with characters
    /// outside `[A-Za-z0-9]`. The query becomes a URL path segment.
    pub fn validate(&self, query: &str) -> Result<(), ChainError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(ChainError::validation(format!(
                "{} lookup needs a value",
                self.as_str()
            )));
        }
        if *self == Self::Application && query.parse::<u64>().is_err() {
            return Err(ChainError::validation(format!(
                "invalid application ID '{query}'"
            )));
        }
        if !query.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(ChainError::validation(format!(
                "invalid {} '{query}'",
                self.as_str().to_lowercase()
            )));
        }
        Ok(())
    }
}

// ============================================================================
// Lookup Result
// ============================================================================

/// A rendered lookup: a title and key/value rows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LookupResult {
    /// Heading, e.g. "Account ABC...".
    pub title: String,
    /// Field name and value pairs in display order.
    pub rows: Vec<(String, String)>,
}

impl LookupResult {
    fn new(title: String) -> Self {
        Self {
            title,
            rows: Vec::new(),
        }
    }

    fn row(mut self, key: &str, value: Option<String>) -> Self {
        self.rows
            .push((key.to_string(), value.unwrap_or_else(|| "-".to_string())));
        self
    }

    /// Builds rows from an algod account response.
    #[must_use]
    pub fn from_account(address: &str, account: &Value) -> Self {
        Self::new(format!("Account {address}"))
            .row("Balance (μAlgo)", uint(&account["amount"]))
            .row("Min balance", uint(&account["min-balance"]))
            .row("Status", text(&account["status"]))
            .row("Round", uint(&account["round"]))
            .row("Assets opted in", uint(&account["total-assets-opted-in"]))
            .row("Apps opted in", uint(&account["total-apps-opted-in"]))
            .row("Created apps", uint(&account["total-created-apps"]))
            .row("Auth address", text(&account["auth-addr"]))
    }

    /// Builds rows from an indexer transaction response.
    ///
    /// # Errors
    ///
    /// Returns [`ChainError::Parse`] if the response has no `transaction` object.
    pub fn from_transaction(txid: &str, response: &Value) -> Result<Self, ChainError> {
        let txn = response
            .get("transaction")
            .filter(|t| t.is_object())
            .ok_or_else(|| ChainError::parse("response has no transaction"))?;
        Ok(Self::new(format!("Transaction {txid}"))
            .row("Type", text(&txn["tx-type"]))
            .row("Sender", text(&txn["sender"]))
            .row("Fee", uint(&txn["fee"]))
            .row("Confirmed round", uint(&txn["confirmed-round"]))
            .row("First valid", uint(&txn["first-valid"]))
            .row("Last valid", uint(&txn["last-valid"]))
            .row("Group", text(&txn["group"])))
    }

    /// Builds rows from an algod application response.
    #[must_use]
    pub fn from_application(app: &Value) -> Self {
        let params = &app["params"];
        let schema = |key: &str| {
            let s = &params[key];
            Some(format!(
                "{} uint / {} bytes",
                s["num-uint"].as_u64().unwrap_or(0),
                s["num-byte-slice"].as_u64().unwrap_or(0)
            ))
        };
        Self::new(format!(
            "Application {}",
            app["id"].as_u64().unwrap_or_default()
        ))
        .row("Creator", text(&params["creator"]))
        .row(
            "Global keys",
            Some(params["global-state"].as_array().map_or(0, Vec::len).to_string()),
        )
        .row("Global schema", schema("global-state-schema"))
        .row("Local schema", schema("local-state-schema"))
        .row("Extra pages", uint(&params["extra-program-pages"]))
    }
}

fn uint(value: &Value) -> Option<String> {
    value.as_u64().map(|n| n.to_string())
}

fn text(value: &Value) -> Option<String> {
    value.as_str().map(String::from)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[test]
    fn test_kind_cycle() {
        let kind = LookupKind::Account;
        assert_eq!(kind.next(), LookupKind::Transaction);
        assert_eq!(kind.next().next(), LookupKind::Application);
        assert_eq!(kind.next().next().next(), LookupKind::Account);
    }

    #[test]
    fn test_validate_query() {
        assert!(LookupKind::Account.validate("  ").is_err());
        assert!(LookupKind::Application.validate("abc").is_err());
        assert!(LookupKind::Application.validate(" 12 ").is_ok());
        assert!(LookupKind::Transaction.validate("TXID").is_ok());
    }

    #[rstest]
    #[case::path_separator(LookupKind::Account, "ABC/../../status")]
    #[case::query_string(LookupKind::Transaction, "TXID?format=msgpack")]
    #[case::inner_space(LookupKind::Account, "AB CD")]
    #[case::fragment(LookupKind::Transaction, "TX#1")]
    fn test_validate_rejects_non_alphanumeric(#[case] kind: LookupKind, #[case] query: &str) {
        let err = kind.validate(query).unwrap_err();
        assert!(matches!(err, ChainError::Validation(_)), "{err:?}");
    }

    #[test]
    fn test_account_rows_fill_missing_with_dash() {
        let result = LookupResult::from_account("ADDR", &json!({"amount": 5, "status": "Offline"}));
        assert_eq!(result.title, "Account ADDR");
        assert_eq!(result.rows[0], ("Balance (μAlgo)".to_string(), "5".to_string()));
        assert_eq!(result.rows[1].1, "-");
        assert_eq!(result.rows[2].1, "Offline");
    }

    #[test]
    fn test_transaction_requires_object() {
        assert!(LookupResult::from_transaction("T", &json!({})).is_err());
        let result = LookupResult::from_transaction(
            "T",
            &json!({"transaction": {"tx-type": "pay", "fee": 1000}}),
        )
        .unwrap();
        assert_eq!(result.rows[0].1, "pay");
        assert_eq!(result.rows[2].1, "1000");
    }

    #[test]
    fn test_application_rows() {
        let result = LookupResult::from_application(&json!({
            "id": 5,
            "params": {
                "creator": "C",
                "global-state-schema": {"num-uint": 2, "num-byte-slice": 1}
            }
        }));
        assert_eq!(result.title, "Application 5");
        assert_eq!(result.rows[2].1, "2 uint / 1 bytes");
        assert_eq!(result.rows[3].1, "0 uint / 0 bytes");
    }
}
