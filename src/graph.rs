//! Temporal contact graph: timeline nodes, continuity and communication edges.
//!
//! Every vertex is one computer at one timestamp. Vertices live in a single
//! arena and are addressed by index; a per-computer map points at that
//! computer's timeline, ordered by strictly increasing timestamp. The graph
//! is built once from a timestamp-sorted contact slice and never mutated
//! afterward, so queries can share it freely.

use crate::types::{Contact, NodeKey};
use rustc_hash::FxHashMap;
use smallvec::SmallVec;

/// Arena index of a timeline node.
pub type NodeIdx = usize;

/// One computer at one timestamp, with its outgoing edges.
///
/// Edges do not distinguish kind: continuity edges (same computer, next
/// timestamp) and communication edges (other computer, same timestamp) are
/// traversed uniformly.
#[derive(Debug, Clone)]
pub struct TimelineNode {
    pub key: NodeKey,
    pub out: SmallVec<[NodeIdx; 4]>,
}

impl TimelineNode {
    fn new(key: NodeKey) -> Self {
        Self {
            key,
            out: SmallVec::new(),
        }
    }

    pub fn id(&self) -> i64 {
        self.key.id
    }

    pub fn timestamp(&self) -> i64 {
        self.key.timestamp
    }
}

/// The frozen temporal graph.
///
/// Invariants after [`TemporalGraph::build`]:
/// - each computer's timeline is strictly increasing in timestamp, with at
///   most one node per (id, timestamp) pair;
/// - every outgoing edge points at a live arena index (no dangling edges).
#[derive(Debug, Default)]
pub struct TemporalGraph {
    nodes: Vec<TimelineNode>,
    timelines: FxHashMap<i64, Vec<NodeIdx>>,
    edge_count: usize,
}

impl TemporalGraph {
    /// Build the graph from contacts sorted by non-decreasing timestamp.
    ///
    /// For each contact (c1, c2, t): look up or append the (c1, t) and
    /// (c2, t) timeline nodes, merging with the timeline tail when the
    /// timestamp matches (one node per (id, t)), adding a continuity edge
    /// from the previous tail otherwise; then add the symmetric pair of
    /// communication edges. Runs in O(n) over the sorted slice.
    pub fn build(sorted: &[Contact]) -> Self {
        let mut graph = Self::default();

        for contact in sorted {
            let a = graph.intern(contact.c1, contact.timestamp);
            let b = graph.intern(contact.c2, contact.timestamp);
            graph.add_edge(a, b);
            graph.add_edge(b, a);
        }

        graph
    }

    /// Look up the timeline node for (id, timestamp), appending it when the
    /// timeline does not end at that timestamp.
    ///
    /// Contacts arrive in non-decreasing timestamp order, so only the
    /// timeline tail can collide: equal tail timestamp means the node already
    /// exists, anything else is a strictly later timestamp and gets a
    /// continuity edge from the old tail.
    fn intern(&mut self, id: i64, timestamp: i64) -> NodeIdx {
        let timeline = self.timelines.entry(id).or_default();

        if let Some(&tail) = timeline.last() {
            if self.nodes[tail].key.timestamp == timestamp {
                return tail;
            }
        }

        let idx = self.nodes.len();
        self.nodes.push(TimelineNode::new(NodeKey::new(id, timestamp)));

        if let Some(&tail) = timeline.last() {
            self.nodes[tail].out.push(idx);
            self.edge_count += 1;
        }
        timeline.push(idx);

        idx
    }

    fn add_edge(&mut self, from: NodeIdx, to: NodeIdx) {
        self.nodes[from].out.push(to);
        self.edge_count += 1;
    }

    /// The node at an arena index.
    pub fn node(&self, idx: NodeIdx) -> &TimelineNode {
        &self.nodes[idx]
    }

    /// Total timeline nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Total directed edges, parallel edges included.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Distinct computer ids present.
    pub fn computer_count(&self) -> usize {
        self.timelines.len()
    }

    /// Arena indices of one computer's timeline, ordered by timestamp.
    pub fn timeline(&self, id: i64) -> Option<&[NodeIdx]> {
        self.timelines.get(&id).map(Vec::as_slice)
    }

    /// One computer's timeline as (id, timestamp) keys.
    pub fn timeline_keys(&self, id: i64) -> Option<Vec<NodeKey>> {
        self.timeline(id)
            .map(|idxs| idxs.iter().map(|&i| self.nodes[i].key).collect())
    }

    /// First node of `id`'s timeline with timestamp >= `from`, if any.
    ///
    /// Timelines are short relative to the event log and already ordered; a
    /// linear scan stays within the query engine's O(m) bound.
    pub fn first_at_or_after(&self, id: i64, from: i64) -> Option<NodeIdx> {
        self.timeline(id)?
            .iter()
            .copied()
            .find(|&idx| self.nodes[idx].key.timestamp >= from)
    }
}
