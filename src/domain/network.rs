//! Network profiles and the registry of known profiles.
//!
//! A [`NetworkProfile`] describes how to reach one network: an algod endpoint
//! (required) and an optional indexer endpoint. The [`NetworkRegistry`] holds
//! the built-in profiles overlaid with user-defined ones, keyed by name and
//! listed in insertion order.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::ChainError;
use crate::constants::{LOCALNET_API_TOKEN, LOCALNET_ALGOD_PORT, LOCALNET_INDEXER_PORT};

// ============================================================================
// Network Profile
// ============================================================================

/// One reachable network endpoint set.
///
/// All fields are strings because they come straight from the edit form and
/// the JSON configuration file; ports are validated for presence, not range.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkProfile {
    /// Unique profile name.
    #[serde(default)]
    pub name: String,
    /// Algod base URL, with or without scheme.
    #[serde(default)]
    pub algod_url: String,
    /// Algod port.
    #[serde(default)]
    pub algod_port: String,
    /// Algod API token (may be empty).
    #[serde(default)]
    pub algod_token: String,
    /// Indexer base URL; empty when no indexer is configured.
    #[serde(default)]
    pub indexer_url: String,
    /// Indexer port.
    #[serde(default)]
    pub indexer_port: String,
    /// Indexer API token (may be empty).
    #[serde(default)]
    pub indexer_token: String,
}

impl NetworkProfile {
    /// Creates a profile with only the algod endpoint set.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        algod_url: impl Into<String>,
        algod_port: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            algod_url: algod_url.into(),
            algod_port: algod_port.into(),
            ..Self::default()
        }
    }

    /// Sets the indexer endpoint.
    #[must_use]
    pub fn with_indexer(mut self, url: impl Into<String>, port: impl Into<String>) -> Self {
        self.indexer_url = url.into();
        self.indexer_port = port.into();
        self
    }

    /// Sets both API tokens.
    #[must_use]
    pub fn with_tokens(mut self, algod: impl Into<String>, indexer: impl Into<String>) -> Self {
        self.algod_token = algod.into();
        self.indexer_token = indexer.into();
        self
    }

    /// Returns `true` if an indexer endpoint is configured.
    #[must_use]
    pub fn has_indexer(&self) -> bool {
        !self.indexer_url.is_empty()
    }

    /// Checks the structural invariants of a profile.
    ///
    /// # Errors
    ///
    /// Returns [`ChainError::Validation`] naming the first missing field.
    pub fn validate(&self) -> Result<(), ChainError> {
        if self.name.is_empty() {
            return Err(ChainError::validation("network name cannot be empty"));
        }
        if self.algod_url.is_empty() {
            return Err(ChainError::validation("algod URL cannot be empty"));
        }
        if self.algod_port.is_empty() {
            return Err(ChainError::validation("algod port cannot be empty"));
        }
        if self.has_indexer() && self.indexer_port.is_empty() {
            return Err(ChainError::validation(
                "indexer port required when indexer URL is provided",
            ));
        }
        Ok(())
    }

    /// Seed values for the "create new profile" form.
    #[must_use]
    pub fn new_custom() -> Self {
        Self::new("custom", "http://localhost", LOCALNET_ALGOD_PORT)
            .with_indexer("http://localhost", LOCALNET_INDEXER_PORT)
    }
}

// ============================================================================
// Built-in Profiles
// ============================================================================

/// Names of the built-in profiles, in display order.
pub const BUILTIN_NETWORKS: [&str; 3] = ["localnet", "testnet", "mainnet"];

/// Returns the built-in profile with the given name.
#[must_use]
pub fn builtin_profile(name: &str) -> Option<NetworkProfile> {
    let profile = match name {
        "localnet" => NetworkProfile::new("localnet", "http://localhost", LOCALNET_ALGOD_PORT)
            .with_indexer("http://localhost", LOCALNET_INDEXER_PORT)
            .with_tokens(LOCALNET_API_TOKEN, LOCALNET_API_TOKEN),
        "testnet" => NetworkProfile::new("testnet", "https://testnet-api.4160.nodely.dev", "443")
            .with_indexer("https://testnet-idx.4160.nodely.dev", "443"),
        "mainnet" => NetworkProfile::new("mainnet", "https://mainnet-api.4160.nodely.dev", "443")
            .with_indexer("https://mainnet-idx.4160.nodely.dev", "443"),
        _ => return None,
    };
    Some(profile)
}

// ============================================================================
// Network Registry
// ============================================================================

/// Result of inserting a profile into the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Upsert {
    /// Position of the profile in the ordered name list.
    pub index: usize,
    /// Whether the name was unknown before the insert.
    pub is_new: bool,
}

/// All known profiles: a name-keyed map plus the ordered list of names.
///
/// Invariant: every key of `profiles` appears exactly once in `order`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkRegistry {
    profiles: HashMap<String, NetworkProfile>,
    order: Vec<String>,
}

impl Default for NetworkRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}

impl NetworkRegistry {
    /// Creates a registry holding only the built-in profiles.
    #[must_use]
    pub fn with_builtins() -> Self {
        let mut registry = Self {
            profiles: HashMap::new(),
            order: Vec::new(),
        };
        for profile in BUILTIN_NETWORKS.iter().filter_map(|n| builtin_profile(n)) {
            registry.upsert(profile);
        }
        registry
    }

    /// Creates the built-in registry overlaid with user-defined profiles.
    #[must_use]
    pub fn from_custom(custom: &[NetworkProfile]) -> Self {
        let mut registry = Self::with_builtins();
        registry.overlay(custom);
        registry
    }

    /// Overlays user-defined profiles; they win on name collision.
    pub fn overlay(&mut self, custom: &[NetworkProfile]) {
        for profile in custom {
            self.upsert(profile.clone());
        }
    }

    /// Inserts or overwrites a profile keyed by name.
    ///
    /// New names are appended to the ordered list; existing names keep their
    /// position.
    pub fn upsert(&mut self, profile: NetworkProfile) -> Upsert {
        let upsert = match self.position(&profile.name) {
            Some(index) => Upsert {
                index,
                is_new: false,
            },
            None => {
                self.order.push(profile.name.clone());
                Upsert {
                    index: self.order.len() - 1,
                    is_new: true,
                }
            }
        };
        self.profiles.insert(profile.name.clone(), profile);
        upsert
    }

    /// Looks up a profile by name.
    #[cfg(test)]
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&NetworkProfile> {
        self.profiles.get(name)
    }

    /// Looks up the profile at a list position.
    #[must_use]
    pub fn get_index(&self, index: usize) -> Option<&NetworkProfile> {
        self.order.get(index).and_then(|name| self.profiles.get(name))
    }

    /// Returns the profile names in display order.
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.order
    }

    /// Returns the list position of a name.
    #[must_use]
    pub fn position(&self, name: &str) -> Option<usize> {
        self.order.iter().position(|n| n == name)
    }

    /// Number of known profiles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::missing_name(NetworkProfile::new("", "http://localhost", "4001"), "network name")]
    #[case::missing_algod_url(NetworkProfile::new("n", "", "4001"), "algod URL")]
    #[case::missing_algod_port(NetworkProfile::new("n", "http://localhost", ""), "algod port")]
    #[case::indexer_without_port(
        NetworkProfile::new("n", "http://localhost", "4001").with_indexer("http://localhost", ""),
        "indexer port required"
    )]
    fn test_validate_rejects(#[case] profile: NetworkProfile, #[case] expected: &str) {
        let err = profile.validate().unwrap_err();
        assert!(matches!(err, ChainError::Validation(_)));
        assert!(
            err.to_string().contains(expected),
            "expected '{expected}' in '{err}'"
        );
    }

    #[test]
    fn test_validate_accepts_profile_without_indexer() {
        let profile = NetworkProfile::new("custom1", "http://localhost", "4001");
        assert!(profile.validate().is_ok());
        assert!(!profile.has_indexer());
    }

    #[test]
    fn test_builtin_profiles_are_valid() {
        for name in BUILTIN_NETWORKS {
            let profile = builtin_profile(name).expect("built-in exists");
            assert_eq!(profile.name, name);
            assert!(profile.validate().is_ok());
            assert!(profile.has_indexer());
        }
        assert!(builtin_profile("devnet").is_none());
    }

    #[test]
    fn test_localnet_uses_default_token() {
        let localnet = builtin_profile("localnet").unwrap();
        assert_eq!(localnet.algod_token.len(), 64);
        assert!(localnet.algod_token.chars().all(|c| c == 'a'));
        assert_eq!(localnet.algod_port, "4001");
        assert_eq!(localnet.indexer_port, "8980");
    }

    #[test]
    fn test_registry_builtin_order() {
        let registry = NetworkRegistry::with_builtins();
        assert_eq!(registry.names(), ["localnet", "testnet", "mainnet"]);
        assert_eq!(registry.len(), 3);
        assert_eq!(registry.position("testnet"), Some(1));
    }

    #[test]
    fn test_overlay_custom_wins_and_appends() {
        let custom = vec![
            NetworkProfile::new("testnet", "http://my-testnet", "8080"),
            NetworkProfile::new("custom1", "http://localhost", "4001"),
        ];
        let registry = NetworkRegistry::from_custom(&custom);

        assert_eq!(
            registry.names(),
            ["localnet", "testnet", "mainnet", "custom1"]
        );
        assert_eq!(registry.get("testnet").unwrap().algod_url, "http://my-testnet");
        assert_eq!(registry.get_index(3).unwrap().name, "custom1");
    }

    #[test]
    fn test_upsert_reports_new_and_existing() {
        let mut registry = NetworkRegistry::with_builtins();

        let first = registry.upsert(NetworkProfile::new("custom1", "http://a", "1"));
        assert_eq!(first, Upsert { index: 3, is_new: true });

        let second = registry.upsert(NetworkProfile::new("custom1", "http://b", "2"));
        assert_eq!(second, Upsert { index: 3, is_new: false });
        assert_eq!(registry.get("custom1").unwrap().algod_url, "http://b");

        let names = registry.names();
        assert_eq!(names.iter().filter(|n| *n == "custom1").count(), 1);
    }

    #[test]
    fn test_new_custom_seed() {
        let seed = NetworkProfile::new_custom();
        assert_eq!(seed.name, "custom");
        assert_eq!(seed.algod_port, "4001");
        assert_eq!(seed.indexer_port, "8980");
        assert!(seed.algod_token.is_empty());
    }

    #[test]
    fn test_profile_json_field_names() {
        let profile = NetworkProfile::new("n", "http://a", "1").with_indexer("http://i", "2");
        let json = serde_json::to_value(&profile).unwrap();
        for key in [
            "name",
            "algod_url",
            "algod_port",
            "algod_token",
            "indexer_url",
            "indexer_port",
            "indexer_token",
        ] {
            assert!(json.get(key).is_some(), "missing key {key}");
        }
    }
}
