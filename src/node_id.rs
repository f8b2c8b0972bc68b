//! Sequential identifiers for nodes in a [`Pipeline`](crate::pipeline::Pipeline) graph.
//!
//! Every [`Node`](crate::node::Node) added to a pipeline gets the next
//! `NodeId` in sequence. The ids are opaque handles; only the runner walks
//! them when it builds an execution chain. Being small and `Copy`, they work
//! as map keys when snapshotting a graph.

/// Unique numeric identifier for a pipeline node.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct NodeId(u64);

impl NodeId {
    pub(crate) fn new(v: u64) -> Self {
        Self(v)
    }

    /// The underlying counter value, mainly for debugging output.
    pub fn raw(&self) -> u64 {
        self.0
    }
}
