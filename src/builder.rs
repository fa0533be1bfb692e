//! Monitor builder for validated configuration.
//!
//! This module provides a builder pattern for creating monitors with a
//! checked configuration and optionally a pre-seeded contact log.

use crate::error::{MonitorError, Result};
use crate::monitor::Monitor;
use crate::types::{Config, Contact};

/// Builder for monitor configuration and initial contacts.
#[derive(Debug, Default)]
pub struct MonitorBuilder {
    config: Config,
    contacts: Vec<Contact>,
}

impl MonitorBuilder {
    /// Create a new builder with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the monitor configuration.
    pub fn config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Fix the quicksort pivot seed for reproducible construction.
    pub fn sort_seed(mut self, seed: u64) -> Self {
        self.config = self.config.with_sort_seed(seed);
        self
    }

    /// Seed the accumulation buffer with contacts.
    ///
    /// Seeded contacts go through the same validation as
    /// [`Monitor::record`], so invalid entries are dropped, not errors.
    pub fn contacts(mut self, contacts: impl IntoIterator<Item = Contact>) -> Self {
        self.contacts.extend(contacts);
        self
    }

    /// Build the monitor, in the accumulating state, ready to record.
    pub fn build(self) -> Result<Monitor> {
        self.config
            .validate()
            .map_err(MonitorError::InvalidConfig)?;

        let mut monitor = Monitor::with_config(self.config);
        for contact in self.contacts {
            monitor.record(contact.c1, contact.c2, contact.timestamp);
        }
        Ok(monitor)
    }
}
