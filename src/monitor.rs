//! The communications monitor: record, build, query.
//!
//! A [`Monitor`] moves through exactly two lifecycle states: it starts out
//! Accumulating, where [`Monitor::record`] appends contacts, and transitions
//! to Built the first time [`Monitor::build`] runs. The transition is
//! one-way and one-shot; after it, `record` is a silent no-op and `build` is
//! idempotent, while [`Monitor::query`] answers any number of read-only
//! reachability questions.

use crate::graph::TemporalGraph;
use crate::search::find_path;
use crate::sort::quicksort_by_timestamp;
use crate::types::{Config, Contact, MonitorStats, NodeKey};

/// Lifecycle state: contacts either still accumulate, or the graph is frozen.
#[derive(Debug)]
enum Phase {
    Accumulating { contacts: Vec<Contact> },
    Built { graph: TemporalGraph },
}

/// Infection-spread monitor over a log of pairwise communication events.
///
/// # Examples
///
/// ```rust
/// use contagion::Monitor;
///
/// let mut monitor = Monitor::new();
/// monitor.record(1, 2, 4);
/// monitor.record(2, 4, 8);
/// monitor.record(4, 3, 8);
/// monitor.build();
///
/// // Could computer 3 be infected by time 8 if computer 1 was infected at 4?
/// let path = monitor.query(1, 3, 4, 8).unwrap();
/// assert_eq!(path.len(), 5);
/// ```
///
/// # Thread safety
///
/// `Monitor` itself is single-threaded: `record` and `build` take `&mut
/// self`. Queries take `&self` and keep all traversal scratch local, so once
/// the monitor is built and shared behind any `&`-producing wrapper,
/// concurrent queries are safe. For a lock-managed wrapper, enable the
/// `sync` feature and use `SyncMonitor`.
#[derive(Debug)]
pub struct Monitor {
    phase: Phase,
    config: Config,
    stats: MonitorStats,
}

impl Default for Monitor {
    fn default() -> Self {
        Self::new()
    }
}

impl Monitor {
    /// Create an empty monitor with default configuration.
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Create an empty monitor with the given configuration.
    ///
    /// The configuration is taken as-is; use [`Monitor::builder`] for
    /// validated construction.
    pub fn with_config(config: Config) -> Self {
        Self {
            phase: Phase::Accumulating {
                contacts: Vec::with_capacity(config.contact_capacity),
            },
            config,
            stats: MonitorStats::new(),
        }
    }

    /// Create a monitor builder for validated configuration.
    pub fn builder() -> crate::builder::MonitorBuilder {
        crate::builder::MonitorBuilder::new()
    }

    /// Record that computers `c1` and `c2` communicated at `timestamp`.
    ///
    /// O(1) amortized. The call is silently ignored (never an error) when any
    /// field is negative, when the graph has already been built, or when the
    /// configured contact bound has been reached; dropped calls are counted
    /// in [`MonitorStats::contacts_dropped`].
    pub fn record(&mut self, c1: i64, c2: i64, timestamp: i64) {
        let contact = Contact::new(c1, c2, timestamp);

        let Phase::Accumulating { contacts } = &mut self.phase else {
            log::debug!("dropping contact {:?}: graph already built", contact);
            self.stats.record_dropped();
            return;
        };

        if !contact.is_valid() {
            log::debug!("dropping contact {:?}: negative field", contact);
            self.stats.record_dropped();
            return;
        }

        if let Some(max) = self.config.max_contacts {
            if contacts.len() >= max {
                log::debug!("dropping contact {:?}: bound {} reached", contact, max);
                self.stats.record_dropped();
                return;
            }
        }

        contacts.push(contact);
        self.stats.record_contact();
    }

    /// Freeze the contact log into the temporal graph.
    ///
    /// Sorts the accumulated contacts by timestamp and builds per-computer
    /// timelines, continuity edges, and symmetric communication edges in
    /// O(n log n + m). The first call transitions the monitor to the Built
    /// state; every further call is a no-op.
    pub fn build(&mut self) {
        let Phase::Accumulating { contacts } = &mut self.phase else {
            return;
        };

        let mut contacts = std::mem::take(contacts);
        quicksort_by_timestamp(&mut contacts, self.config.sort_seed);
        let graph = TemporalGraph::build(&contacts);

        log::info!(
            "built temporal graph: {} contacts, {} computers, {} nodes, {} edges",
            contacts.len(),
            graph.computer_count(),
            graph.node_count(),
            graph.edge_count()
        );

        self.stats.computer_count = graph.computer_count();
        self.stats.node_count = graph.node_count();
        self.stats.edge_count = graph.edge_count();
        self.stats.built = true;
        self.phase = Phase::Built { graph };
    }

    /// Whether construction has been finalized.
    pub fn is_built(&self) -> bool {
        matches!(self.phase, Phase::Built { .. })
    }

    /// Determine whether `c2` could be infected by time `y` if `c1` was
    /// infected at time `x`.
    ///
    /// Returns the transmission path, from `c1` at its first observable
    /// timestamp >= `x` to `c2` at a timestamp <= `y`. Returns `None`
    /// uniformly when the graph is not built, when `x > y`, when `c1` never
    /// appears at or after `x`, or when no path exists; callers cannot
    /// distinguish these cases. O(m) per query, no rebuilding.
    pub fn query(&self, c1: i64, c2: i64, x: i64, y: i64) -> Option<Vec<NodeKey>> {
        let Phase::Built { graph } = &self.phase else {
            return None;
        };
        if x > y {
            return None;
        }

        let root = graph.first_at_or_after(c1, x)?;
        find_path(graph, root, c2, y)
    }

    /// The ordered (id, timestamp) timeline of one computer, or `None` if the
    /// id never appeared. Available once built; inspection aid only.
    pub fn timeline(&self, id: i64) -> Option<Vec<NodeKey>> {
        let Phase::Built { graph } = &self.phase else {
            return None;
        };
        graph.timeline_keys(id)
    }

    /// Monitor statistics.
    pub fn stats(&self) -> MonitorStats {
        self.stats.clone()
    }

    /// The active configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }
}
