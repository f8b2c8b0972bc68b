//! Pipeline construction and scoped execution.

use crate::node::Node;
use crate::node_id::NodeId;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Container for a computation graph.
///
/// A `Pipeline` holds nodes and edges behind an `Arc<Mutex<_>>`, so handles
/// are cheap to clone and every [`PCollection`](crate::PCollection) attached
/// to the same pipeline sees the same graph. Building is lock-and-insert;
/// execution snapshots the graph and walks it without holding the lock.
pub struct Pipeline {
    pub(crate) inner: Arc<Mutex<PipelineInner>>,
}

pub(crate) struct PipelineInner {
    next_id: u64,
    nodes: HashMap<NodeId, Node>,
    edges: Vec<(NodeId, NodeId)>,
}

impl Default for Pipeline {
    fn default() -> Self {
        Self {
            inner: Arc::new(Mutex::new(PipelineInner {
                next_id: 0,
                nodes: HashMap::new(),
                edges: Vec::new(),
            })),
        }
    }
}

impl Clone for Pipeline {
    fn clone(&self) -> Self {
        Pipeline {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl Pipeline {
    /// Run `f` against a fresh pipeline that lives only for the call.
    ///
    /// The graph and any payloads it holds are dropped when the closure
    /// returns, whether it succeeds, errors, or unwinds. This is the analog
    /// of a `with`-scoped pipeline context in other frameworks:
    ///
    /// ```
    /// use girder::{Pipeline, from_vec};
    ///
    /// let doubled = Pipeline::scope(|p| {
    ///     from_vec(p, vec![1u32, 2, 3])
    ///         .map(|n: &u32| n * 2)
    ///         .collect_seq()
    /// }).unwrap();
    /// assert_eq!(doubled, vec![2, 4, 6]);
    /// ```
    pub fn scope<R>(f: impl FnOnce(&Pipeline) -> R) -> R {
        let p = Pipeline::default();
        f(&p)
    }

    pub(crate) fn insert_node(&self, node: Node) -> NodeId {
        let mut g = self.inner.lock().unwrap();
        let id = NodeId::new(g.next_id);
        g.next_id += 1;
        g.nodes.insert(id, node);
        id
    }

    pub(crate) fn connect(&self, from: NodeId, to: NodeId) {
        let mut g = self.inner.lock().unwrap();
        g.edges.push((from, to));
    }

    /// Clone out the current nodes and edges.
    ///
    /// Used by the runner before executing and by tests inspecting graph
    /// shape; the lock is released before any of it is walked.
    pub fn snapshot(&self) -> (HashMap<NodeId, Node>, Vec<(NodeId, NodeId)>) {
        let g = self.inner.lock().unwrap();
        (g.nodes.clone(), g.edges.clone())
    }
}
