//! Embedded temporal contact graph answering infection-spread reachability
//! queries over a log of pairwise communication events.
//!
//! ```rust
//! use contagion::Monitor;
//!
//! let mut monitor = Monitor::new();
//! monitor.record(1, 2, 4);
//! monitor.record(2, 4, 8);
//! monitor.record(4, 3, 8);
//! monitor.build();
//!
//! let path = monitor.query(1, 3, 4, 8).expect("infection path exists");
//! assert_eq!(path.first().map(|n| n.id), Some(1));
//! assert_eq!(path.last().map(|n| n.id), Some(3));
//! ```

pub mod builder;
pub mod error;
pub mod graph;
pub mod monitor;
pub mod search;
pub mod sort;
pub mod types;

#[cfg(feature = "sync")]
pub mod sync;

pub use builder::MonitorBuilder;
pub use error::{MonitorError, Result};
pub use monitor::Monitor;

pub type Contagion = Monitor;

pub use graph::{TemporalGraph, TimelineNode};

pub use types::{Config, Contact, MonitorStats, NodeKey};

#[cfg(feature = "sync")]
pub use sync::SyncMonitor;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common imports
pub mod prelude {

    pub use crate::{Monitor, MonitorBuilder, MonitorError, Result};

    pub use crate::{Config, Contact, MonitorStats, NodeKey};

    #[cfg(feature = "sync")]
    pub use crate::SyncMonitor;
}
