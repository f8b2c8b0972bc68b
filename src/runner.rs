//! Pipeline execution.
//!
//! The runner snapshots the graph, walks backwards from the terminal node to
//! its source to recover the linear chain, then evaluates the chain either
//! on the current thread or partitioned across a rayon pool. Stateful nodes
//! carry their own local/merge closures, so execution here is shape-driven:
//! the runner decides *where* work runs, the nodes decide *what* runs.

use crate::node::{DynOp, Node};
use crate::node_id::NodeId;
use crate::pipeline::Pipeline;
use crate::type_token::Partition;
use anyhow::{Result, anyhow, bail};
use rayon::prelude::*;
use std::mem::take;
use std::sync::Arc;

#[derive(Clone, Copy, Debug)]
pub enum ExecMode {
    /// Single partition on the calling thread, in input order.
    Sequential,
    /// Partitioned execution on the global rayon pool.
    Parallel {
        threads: Option<usize>,
        partitions: Option<usize>,
    },
}

pub struct Runner {
    pub mode: ExecMode,
    pub default_partitions: usize,
}

impl Default for Runner {
    fn default() -> Self {
        Self {
            mode: ExecMode::Parallel {
                threads: None,
                partitions: None,
            },
            default_partitions: 2 * num_cpus::get().max(2),
        }
    }
}

impl Runner {
    /// Execute the chain ending at `terminal` and materialize it as `Vec<T>`.
    pub fn run_collect<T: 'static + Send + Sync + Clone>(
        &self,
        p: &Pipeline,
        terminal: NodeId,
    ) -> Result<Vec<T>> {
        let (mut nodes, edges) = p.snapshot();

        // Linear backwalk: terminal -> ... -> source
        let mut chain: Vec<Node> = Vec::new();
        let mut cur = terminal;
        loop {
            let n = nodes
                .remove(&cur)
                .ok_or_else(|| anyhow!("missing node {cur:?} in pipeline graph"))?;
            chain.push(n);
            if let Some(&(from, _)) = edges.iter().find(|(_, to)| *to == cur) {
                cur = from;
            } else {
                break;
            }
        }
        chain.reverse();

        match self.mode {
            ExecMode::Sequential => exec_seq::<T>(chain),
            ExecMode::Parallel { threads, partitions } => {
                if let Some(t) = threads {
                    // ok(): the global pool can only be sized once per process
                    rayon::ThreadPoolBuilder::new()
                        .num_threads(t)
                        .build_global()
                        .ok();
                }
                exec_par::<T>(chain, partitions.unwrap_or(self.default_partitions))
            }
        }
    }
}

/// Run a fused chain of stateless operators over one partition.
fn fuse_stateless(ops: &[Arc<dyn DynOp>], input: Partition) -> Partition {
    ops.iter().fold(input, |acc, op| op.apply(acc))
}

fn take_input(buf: &mut Option<Partition>) -> Result<Partition> {
    buf.take()
        .ok_or_else(|| anyhow!("operator applied before any source"))
}

/// Sequential executor: one partition end to end.
fn exec_seq<T: 'static + Send + Sync + Clone>(plan: Vec<Node>) -> Result<Vec<T>> {
    let mut buf: Option<Partition> = None;

    for node in plan {
        let next = match node {
            Node::Source {
                payload,
                vec_ops,
                elem_tag,
            } => {
                if buf.is_some() {
                    bail!("plan has more than one source node");
                }
                vec_ops.clone_any(payload.as_ref()).ok_or_else(|| {
                    anyhow!("source payload does not match element type {}", elem_tag.name)
                })?
            }
            Node::Stateless(ops) => fuse_stateless(&ops, take_input(&mut buf)?),
            Node::GroupByKey { local, merge } => merge(vec![local(take_input(&mut buf)?)]),
            Node::CombineValues {
                local_pairs,
                local_groups,
                merge,
            } => {
                let local = local_groups.unwrap_or(local_pairs);
                merge(vec![local(take_input(&mut buf)?)])
            }
            Node::CombineGlobal {
                local,
                merge,
                finish,
                ..
            } => finish(merge(vec![local(take_input(&mut buf)?)])),
        };
        buf = Some(next);
    }

    let out = take_input(&mut buf)?;
    out.downcast::<Vec<T>>()
        .map(|v| *v)
        .map_err(|_| anyhow!("terminal type mismatch"))
}

/// Parallel executor: split the source, fuse stateless stages per partition,
/// barrier at each stateful node.
fn exec_par<T: 'static + Send + Sync + Clone>(plan: Vec<Node>, partitions: usize) -> Result<Vec<T>> {
    let mut iter = plan.into_iter();
    let (payload, vec_ops, elem_tag) = match iter.next() {
        Some(Node::Source {
            payload,
            vec_ops,
            elem_tag,
        }) => (payload, vec_ops, elem_tag),
        _ => bail!("plan must start with a source node"),
    };
    let rest: Vec<Node> = iter.collect();

    let total = vec_ops.len(payload.as_ref()).unwrap_or(0);
    let parts = partitions.max(1).min(total.max(1));
    let mut current: Vec<Partition> =
        vec_ops.split(payload.as_ref(), parts).ok_or_else(|| {
            anyhow!("source payload does not match element type {}", elem_tag.name)
        })?;

    let mut i = 0usize;
    while i < rest.len() {
        match &rest[i] {
            Node::Stateless(_) => {
                // Fuse every contiguous stateless node into one pass
                let mut ops: Vec<Arc<dyn DynOp>> = Vec::new();
                while let Some(Node::Stateless(more)) = rest.get(i) {
                    ops.extend(more.iter().cloned());
                    i += 1;
                }
                current = current
                    .into_par_iter()
                    .map(|chunk| fuse_stateless(&ops, chunk))
                    .collect();
            }
            Node::GroupByKey { local, merge } => {
                let locals: Vec<Partition> =
                    current.into_par_iter().map(|chunk| local(chunk)).collect();
                current = vec![merge(locals)];
                i += 1;
            }
            Node::CombineValues {
                local_pairs,
                local_groups,
                merge,
            } => {
                let local = local_groups.as_ref().unwrap_or(local_pairs);
                let locals: Vec<Partition> =
                    current.into_par_iter().map(|chunk| local(chunk)).collect();
                current = vec![merge(locals)];
                i += 1;
            }
            Node::CombineGlobal {
                local,
                merge,
                finish,
                fanout,
            } => {
                let mut accs: Vec<Partition> =
                    current.into_par_iter().map(|chunk| local(chunk)).collect();
                let acc = match fanout {
                    None => merge(accs),
                    Some(width) => {
                        // Merge in rounds of at most `width` accumulators
                        let width = (*width).max(2);
                        while accs.len() > 1 {
                            let mut rounds: Vec<Vec<Partition>> = Vec::new();
                            let mut group: Vec<Partition> = Vec::new();
                            for a in accs {
                                group.push(a);
                                if group.len() == width {
                                    rounds.push(take(&mut group));
                                }
                            }
                            if !group.is_empty() {
                                rounds.push(group);
                            }
                            accs = rounds.into_par_iter().map(|g| merge(g)).collect();
                        }
                        accs
                            .pop()
                            .ok_or_else(|| anyhow!("global combine produced no accumulator"))?
                    }
                };
                current = vec![finish(acc)];
                i += 1;
            }
            Node::Source { .. } => bail!("unexpected extra source node in plan"),
        }
    }

    // Materialize terminal partitions as one Vec<T>
    let mut out = Vec::<T>::new();
    for part in current {
        let v = *part
            .downcast::<Vec<T>>()
            .map_err(|_| anyhow!("terminal type mismatch"))?;
        out.extend(v);
    }
    Ok(out)
}
