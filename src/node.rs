//! Execution graph nodes.
//!
//! Each variant carries its work as type-erased closures over [`Partition`]
//! buffers, so the runner never needs the element types. Stateful transforms
//! follow a two-phase shape: a `local` step that folds one partition into an
//! intermediate value, and a `merge` step that coalesces the intermediates
//! from every partition.

use crate::type_token::{Partition, TypeTag, VecOps};
use std::any::Any;
use std::sync::Arc;

/// A stateless, element-wise operator (map, filter, flat_map, ...).
///
/// Adjacent stateless operators are fused into a single pass by the runner.
pub trait DynOp: Send + Sync {
    fn apply(&self, input: Partition) -> Partition;
}

type LocalFn = Arc<dyn Fn(Partition) -> Partition + Send + Sync>;
type MergeFn = Arc<dyn Fn(Vec<Partition>) -> Partition + Send + Sync>;

#[derive(Clone)]
pub enum Node {
    /// In-memory source payload, with a type-erased vector handler and the
    /// element tag recorded at construction.
    Source {
        payload: Arc<dyn Any + Send + Sync>,
        vec_ops: Arc<dyn VecOps>,
        elem_tag: TypeTag,
    },

    /// A fusable chain of element-wise operators.
    Stateless(Vec<Arc<dyn DynOp>>),

    /// Group-by-key barrier.
    /// - `local`: `Vec<(K, V)>` -> `HashMap<K, Vec<V>>`
    /// - `merge`: per-partition maps -> `Vec<(K, Vec<V>)>`
    GroupByKey { local: LocalFn, merge: MergeFn },

    /// Combine-by-key barrier.
    /// - `local_pairs`: `Vec<(K, V)>` -> `HashMap<K, A>`
    /// - `local_groups`: optional lifted local consuming pre-grouped input,
    ///   `Vec<(K, Vec<V>)>` -> `HashMap<K, A>`
    /// - `merge`: per-partition maps -> `Vec<(K, O)>`
    CombineValues {
        local_pairs: LocalFn,
        local_groups: Option<LocalFn>,
        merge: MergeFn,
    },

    /// Global (ungrouped) combine over the whole collection.
    /// - `local`: `Vec<T>` -> accumulator `A`
    /// - `merge`: accumulators -> one accumulator, applied in rounds of at
    ///   most `fanout` when set
    /// - `finish`: accumulator -> singleton `Vec<O>`
    CombineGlobal {
        local: LocalFn,
        merge: MergeFn,
        finish: LocalFn,
        fanout: Option<usize>,
    },
}
