//! Thread-safe wrapper for concurrent monitor access.
//!
//! This module provides `SyncMonitor`, a thread-safe wrapper around
//! [`Monitor`] that uses `Arc<RwLock<Monitor>>` internally to allow safe
//! concurrent access from multiple threads.
//!
//! # Features
//!
//! Enable the `sync` feature to use this module:
//!
//! ```toml
//! [dependencies]
//! contagion = { version = "0.1", features = ["sync"] }
//! ```
//!
//! # Examples
//!
//! ```rust
//! use contagion::SyncMonitor;
//! use std::thread;
//!
//! let monitor = SyncMonitor::new();
//! let writer = monitor.clone();
//!
//! let handle = thread::spawn(move || {
//!     writer.record(1, 2, 4);
//!     writer.record(2, 3, 8);
//!     writer.build();
//! });
//! handle.join().unwrap();
//!
//! assert!(monitor.query(1, 3, 4, 8).is_some());
//! ```

use crate::monitor::Monitor;
use crate::types::{Config, MonitorStats, NodeKey};
use parking_lot::RwLock;
use std::sync::Arc;

/// Thread-safe wrapper around [`Monitor`] using `Arc<RwLock<Monitor>>`.
///
/// `record` and `build` take the write lock, so construction is one-shot
/// under concurrency: exactly one thread performs it, the rest block briefly
/// and then observe the monitor as already built (their `build` is a no-op).
/// Queries keep all traversal scratch local to the call, so they run under
/// the read lock and may proceed in parallel.
#[derive(Clone)]
pub struct SyncMonitor {
    inner: Arc<RwLock<Monitor>>,
}

impl SyncMonitor {
    /// Create an empty monitor with default configuration.
    pub fn new() -> Self {
        Self::from_monitor(Monitor::new())
    }

    /// Create an empty monitor with custom configuration.
    pub fn with_config(config: Config) -> Self {
        Self::from_monitor(Monitor::with_config(config))
    }

    /// Wrap an existing monitor.
    pub fn from_monitor(monitor: Monitor) -> Self {
        Self {
            inner: Arc::new(RwLock::new(monitor)),
        }
    }

    /// Record a communication event. See [`Monitor::record`].
    pub fn record(&self, c1: i64, c2: i64, timestamp: i64) {
        self.inner.write().record(c1, c2, timestamp);
    }

    /// Freeze the contact log into the temporal graph. See [`Monitor::build`].
    pub fn build(&self) {
        self.inner.write().build();
    }

    /// Whether construction has been finalized.
    pub fn is_built(&self) -> bool {
        self.inner.read().is_built()
    }

    /// Run a reachability query. See [`Monitor::query`].
    pub fn query(&self, c1: i64, c2: i64, x: i64, y: i64) -> Option<Vec<NodeKey>> {
        self.inner.read().query(c1, c2, x, y)
    }

    /// The ordered timeline of one computer. See [`Monitor::timeline`].
    pub fn timeline(&self, id: i64) -> Option<Vec<NodeKey>> {
        self.inner.read().timeline(id)
    }

    /// Monitor statistics.
    pub fn stats(&self) -> MonitorStats {
        self.inner.read().stats()
    }
}

impl Default for SyncMonitor {
    fn default() -> Self {
        Self::new()
    }
}
