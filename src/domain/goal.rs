//! Command builders for the `goal` command-line tool.
//!
//! Each [`BuilderKind`] knows its form fields, how to validate the entered
//! values and how to turn them into an argument vector. Values are passed as a
//! slice indexed like [`BuilderKind::fields`].

use super::ChainError;

// ============================================================================
// Form Fields
// ============================================================================

/// One input field of a builder form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Label shown next to the input, including the flag it maps to.
    pub label: &'static str,
    /// Short usage hint.
    pub hint: &'static str,
}

const fn field(label: &'static str, hint: &'static str) -> FieldSpec {
    FieldSpec { label, hint }
}

const PAYMENT_FIELDS: &[FieldSpec] = &[
    field("From (-f)", "address (or default)"),
    field("To (-t)", "recipient address"),
    field("Amount μAlgos (-a)", "e.g. 1000000 = 1 Algo"),
    field("Fee μAlgos (--fee)", "optional; empty for suggested"),
    field("FirstValid (--firstvalid)", "optional"),
    field("LastValid (--lastvalid)", "optional"),
    field("Note (-n)", "plain text note (optional)"),
    field("Out file (-o)", "write txn to file (optional)"),
    field("Sign (-s)", "true/false, with -o"),
    field("No Wait (-N)", "true/false"),
    field("Rekey (--rekey-to)", "optional"),
];

const ASSET_FIELDS: &[FieldSpec] = &[
    field("Asset ID (--assetid)", "numeric asset id"),
    field("From (-f)", "address (or default)"),
    field("To (-t)", "recipient address"),
    field("Amount (-a)", "base units"),
    field("Note (-n)", "plain text note (optional)"),
    field("Out file (-o)", "write txn to file (optional)"),
];

const APP_CALL_FIELDS: &[FieldSpec] = &[
    field("App ID (--app-id)", "numeric application id"),
    field("From (-f)", "address (or default)"),
    field("App args (--app-arg)", "comma separated, e.g. str:hello,int:1"),
    field("Out file (-o)", "write txn to file (optional)"),
];

const GROUP_FIELDS: &[FieldSpec] = &[
    field("Input (-i)", "concatenated unsigned txns"),
    field("Output (-o)", "grouped txn file"),
];

const SIGN_FIELDS: &[FieldSpec] = &[
    field("Input (-i)", "unsigned txn file"),
    field("Output (-o)", "signed txn file"),
];

const INSPECT_FIELDS: &[FieldSpec] = &[field("Files", "space separated txn files")];

// ============================================================================
// Builder Kind
// ============================================================================

/// The available command builders, in menu order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BuilderKind {
    /// `goal clerk send`
    #[default]
    Payment,
    /// `goal asset send`
    AssetTransfer,
    /// `goal app call`
    AppCall,
    /// `goal clerk group`
    Group,
    /// `goal clerk sign`
    SignSend,
    /// `goal clerk inspect`
    Inspect,
}

impl BuilderKind {
    /// All builders in menu order.
    pub const ALL: [Self; 6] = [
        Self::Payment,
        Self::AssetTransfer,
        Self::AppCall,
        Self::Group,
        Self::SignSend,
        Self::Inspect,
    ];

    /// Short label for the builder menu.
    #[must_use]
    pub const fn menu_label(&self) -> &'static str {
        match self {
            Self::Payment => "Payment (clerk send)",
            Self::AssetTransfer => "ASA Transfer (asset send)",
            Self::AppCall => "App Call (app call)",
            Self::Group => "Atomic Group (clerk group)",
            Self::SignSend => "Sign / Send (clerk sign)",
            Self::Inspect => "Inspect (clerk inspect)",
        }
    }

    /// Title shown above the form.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::Payment => "Payment (goal clerk send)",
            Self::AssetTransfer => "ASA Transfer (goal asset send)",
            Self::AppCall => "App Call (goal app call)",
            Self::Group => "Atomic Group (goal clerk group)",
            Self::SignSend => "Sign / Send (goal clerk sign)",
            Self::Inspect => "Inspect (goal clerk inspect)",
        }
    }

    /// Form fields in display order.
    #[must_use]
    pub const fn fields(&self) -> &'static [FieldSpec] {
        match self {
            Self::Payment => PAYMENT_FIELDS,
            Self::AssetTransfer => ASSET_FIELDS,
            Self::AppCall => APP_CALL_FIELDS,
            Self::Group => GROUP_FIELDS,
            Self::SignSend => SIGN_FIELDS,
            Self::Inspect => INSPECT_FIELDS,
        }
    }

    /// Checks that the required values are present and well-formed.
    ///
    /// # Errors
    ///
    /// Returns [`ChainError::Validation`] describing the first bad field.
    pub fn validate(&self, values: &[String]) -> Result<(), ChainError> {
        let v = |i: usize| value(values, i);
        match self {
            Self::Payment => {
                require(v(1), "recipient (-t) is required")?;
                require_uint(v(2), "amount (-a) must be a positive integer μAlgos")
            }
            Self::AssetTransfer => {
                require_uint(v(0), "asset id (--assetid) must be an integer")?;
                require(v(2), "recipient (-t) is required")?;
                require_uint(v(3), "amount (-a) must be an integer")
            }
            Self::AppCall => require_uint(v(0), "app id (--app-id) must be an integer"),
            Self::Group | Self::SignSend => {
                require(v(0), "input file (-i) is required")?;
                require(v(1), "output file (-o) is required")
            }
            Self::Inspect => require(v(0), "at least one file is required"),
        }
    }

    /// Builds the argument vector for `goal`, without the base flags.
    ///
    /// Optional fields are omitted when blank. Call [`Self::validate`] first;
    /// required fields are emitted as-is.
    #[must_use]
    pub fn args(&self, values: &[String]) -> Vec<String> {
        let v = |i: usize| value(values, i);
        let mut argv = ArgVec::default();
        match self {
            Self::Payment => {
                argv.push_all(["clerk", "send"]);
                argv.optional("-f", v(0));
                argv.flag("-t", v(1));
                argv.flag("-a", v(2));
                argv.optional("--fee", v(3));
                argv.optional("--firstvalid", v(4));
                argv.optional("--lastvalid", v(5));
                argv.optional("-n", v(6));
                argv.optional("-o", v(7));
                argv.switch("-s", v(8));
                argv.switch("-N", v(9));
                argv.optional("--rekey-to", v(10));
            }
            Self::AssetTransfer => {
                argv.push_all(["asset", "send"]);
                argv.flag("--assetid", v(0));
                argv.optional("-f", v(1));
                argv.flag("-t", v(2));
                argv.flag("-a", v(3));
                argv.optional("-n", v(4));
                argv.optional("-o", v(5));
            }
            Self::AppCall => {
                argv.push_all(["app", "call"]);
                argv.flag("--app-id", v(0));
                argv.optional("-f", v(1));
                for arg in v(2).split(',').map(str::trim).filter(|a| !a.is_empty()) {
                    argv.flag("--app-arg", arg);
                }
                argv.optional("-o", v(3));
            }
            Self::Group => {
                argv.push_all(["clerk", "group"]);
                argv.flag("-i", v(0));
                argv.flag("-o", v(1));
            }
            Self::SignSend => {
                argv.push_all(["clerk", "sign"]);
                argv.flag("-i", v(0));
                argv.flag("-o", v(1));
            }
            Self::Inspect => {
                argv.push_all(["clerk", "inspect"]);
                argv.push_all(v(0).split_whitespace());
            }
        }
        argv.0
    }
}

// ============================================================================
// Helpers
// ============================================================================

fn value(values: &[String], index: usize) -> &str {
    values.get(index).map_or("", |s| s.trim())
}

fn require(value: &str, message: &str) -> Result<(), ChainError> {
    if value.is_empty() {
        return Err(ChainError::validation(message));
    }
    Ok(())
}

fn require_uint(value: &str, message: &str) -> Result<(), ChainError> {
    value
        .parse::<u64>()
        .map(|_| ())
        .map_err(|_| ChainError::validation(message))
}

#[derive(Default)]
struct ArgVec(Vec<String>);

impl ArgVec {
    fn push_all<'a>(&mut self, items: impl IntoIterator<Item = &'a str>) {
        self.0.extend(items.into_iter().map(String::from));
    }

    fn flag(&mut self, flag: &str, value: &str) {
        self.push_all([flag, value]);
    }

    fn optional(&mut self, flag: &str, value: &str) {
        if !value.is_empty() {
            self.flag(flag, value);
        }
    }

    fn switch(&mut self, flag: &str, value: &str) {
        if value.eq_ignore_ascii_case("true") {
            self.push_all([flag]);
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn values(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn test_field_counts_match_menu() {
        let counts: Vec<usize> = BuilderKind::ALL.iter().map(|k| k.fields().len()).collect();
        assert_eq!(counts, vec![11, 6, 4, 2, 2, 1]);
    }

    #[test]
    fn test_payment_args_minimal() {
        let form = values(&["", "RCV", "1000", "", "", "", "", "", "", "", ""]);
        assert!(BuilderKind::Payment.validate(&form).is_ok());
        assert_eq!(
            BuilderKind::Payment.args(&form),
            vec!["clerk", "send", "-t", "RCV", "-a", "1000"]
        );
    }

    #[test]
    fn test_payment_args_full() {
        let form = values(&[
            "SND", "RCV", "5", "1000", "10", "20", "hi", "out.txn", "TRUE", "false", "NEW",
        ]);
        assert_eq!(
            BuilderKind::Payment.args(&form).join(" "),
            "clerk send -f SND -t RCV -a 5 --fee 1000 --firstvalid 10 --lastvalid 20 \
             -n hi -o out.txn -s --rekey-to NEW"
        );
    }

    #[rstest]
    #[case::missing_recipient(&["", "", "5"], "recipient")]
    #[case::negative_amount(&["", "RCV", "-5"], "amount")]
    #[case::text_amount(&["", "RCV", "lots"], "amount")]
    fn test_payment_validation(#[case] form: &[&str], #[case] expected: &str) {
        let err = BuilderKind::Payment.validate(&values(form)).unwrap_err();
        assert!(err.to_string().contains(expected));
    }

    #[test]
    fn test_asset_transfer() {
        let form = values(&["31566704", "", "RCV", "10", "", ""]);
        assert!(BuilderKind::AssetTransfer.validate(&form).is_ok());
        assert_eq!(
            BuilderKind::AssetTransfer.args(&form).join(" "),
            "asset send --assetid 31566704 -t RCV -a 10"
        );
        let bad = values(&["abc", "", "RCV", "10"]);
        assert!(BuilderKind::AssetTransfer.validate(&bad).is_err());
    }

    #[test]
    fn test_app_call_repeats_app_args() {
        let form = values(&["42", "SND", "str:a, int:1,", ""]);
        assert!(BuilderKind::AppCall.validate(&form).is_ok());
        assert_eq!(
            BuilderKind::AppCall.args(&form).join(" "),
            "app call --app-id 42 -f SND --app-arg str:a --app-arg int:1"
        );
    }

    #[test]
    fn test_group_and_sign_require_both_files() {
        for kind in [BuilderKind::Group, BuilderKind::SignSend] {
            assert!(kind.validate(&values(&["in.txn", ""])).is_err());
            assert!(kind.validate(&values(&["in.txn", "out.txn"])).is_ok());
        }
        assert_eq!(
            BuilderKind::SignSend.args(&values(&["in.txn", "out.stxn"])),
            vec!["clerk", "sign", "-i", "in.txn", "-o", "out.stxn"]
        );
    }

    #[test]
    fn test_inspect_splits_files() {
        let form = values(&["a.stxn  b.stxn"]);
        assert_eq!(
            BuilderKind::Inspect.args(&form),
            vec!["clerk", "inspect", "a.stxn", "b.stxn"]
        );
        assert!(BuilderKind::Inspect.validate(&values(&["  "])).is_err());
    }
}
