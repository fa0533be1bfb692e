//! Core value types and configuration for the contagion monitor.

use serde::de::Error;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A logged fact that two computers communicated at a given time.
///
/// Contacts are immutable once created. The monitor only accepts contacts
/// whose ids and timestamp are all non-negative; anything else is dropped at
/// the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub c1: i64,
    pub c2: i64,
    pub timestamp: i64,
}

impl Contact {
    pub fn new(c1: i64, c2: i64, timestamp: i64) -> Self {
        Self { c1, c2, timestamp }
    }

    /// True when every field is non-negative.
    pub fn is_valid(&self) -> bool {
        self.c1 >= 0 && self.c2 >= 0 && self.timestamp >= 0
    }
}

/// Identity of a timeline node: one computer at one timestamp.
///
/// Equality, hashing, and ordering are structural, so two keys with the same
/// id and timestamp denote the same logical node wherever they were created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeKey {
    pub id: i64,
    pub timestamp: i64,
}

impl NodeKey {
    pub fn new(id: i64, timestamp: i64) -> Self {
        Self { id, timestamp }
    }
}

impl fmt::Display for NodeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.id, self.timestamp)
    }
}

/// Monitor configuration.
///
/// Designed to be easily serializable and loadable from JSON or TOML while
/// keeping complexity minimal.
///
/// # Example
///
/// ```rust
/// use contagion::Config;
///
/// let config = Config::default();
///
/// let json = r#"{
///     "max_contacts": 100000,
///     "sort_seed": 42
/// }"#;
/// let config: Config = Config::from_json(json).unwrap();
/// assert_eq!(config.sort_seed, Some(42));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Pre-allocation hint for the contact accumulation buffer.
    #[serde(default)]
    pub contact_capacity: usize,

    /// Upper bound on accumulated contacts (None means unbounded). Contacts
    /// recorded past the bound are silently dropped, like any other invalid
    /// record.
    #[serde(default)]
    pub max_contacts: Option<usize>,

    /// Fixed seed for the quicksort pivot RNG, for reproducible construction.
    #[serde(default)]
    pub sort_seed: Option<u64>,
}

impl Config {
    pub fn with_contact_capacity(mut self, capacity: usize) -> Self {
        self.contact_capacity = capacity;
        self
    }

    pub fn with_max_contacts(mut self, max: usize) -> Self {
        assert!(max > 0, "Contact bound must be greater than zero");
        self.max_contacts = Some(max);
        self
    }

    pub fn with_sort_seed(mut self, seed: u64) -> Self {
        self.sort_seed = Some(seed);
        self
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), String> {
        if let Some(max) = self.max_contacts {
            if max == 0 {
                return Err("Contact bound must be greater than zero".to_string());
            }
            if max < self.contact_capacity {
                return Err("Contact bound is smaller than the capacity hint".to_string());
            }
        }
        Ok(())
    }

    /// Load configuration from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let config: Config = serde_json::from_str(json)?;
        if let Err(e) = config.validate() {
            return Err(Error::custom(e));
        }
        Ok(config)
    }

    /// Save configuration as a JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load configuration from a TOML string (requires the toml feature).
    #[cfg(feature = "toml")]
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        let config: Config = toml::from_str(toml_str)?;
        if let Err(e) = config.validate() {
            return Err(toml::de::Error::custom(e));
        }
        Ok(config)
    }

    /// Save configuration as a TOML string (requires the toml feature).
    #[cfg(feature = "toml")]
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

/// Monitor statistics.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MonitorStats {
    /// Contacts accepted into the accumulation buffer.
    pub contacts_recorded: u64,
    /// Contacts dropped at the boundary (negative fields, post-build calls,
    /// or capacity bound reached).
    pub contacts_dropped: u64,
    /// Distinct computer ids present in the built graph.
    pub computer_count: usize,
    /// Timeline nodes in the built graph.
    pub node_count: usize,
    /// Directed edges in the built graph (parallel edges counted).
    pub edge_count: usize,
    /// Whether construction has been finalized.
    pub built: bool,
}

impl MonitorStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_contact(&mut self) {
        self.contacts_recorded += 1;
    }

    pub fn record_dropped(&mut self) {
        self.contacts_dropped += 1;
    }
}
