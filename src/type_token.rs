//! Type-erased payload handling for the execution graph.
//!
//! Element types are known where a pipeline is *built* but not where it is
//! *run*: the runner only sees opaque buffers flowing between nodes. This
//! module supplies the pieces that bridge the gap:
//!
//! - [`Partition`]: the boxed buffer carried between nodes at runtime.
//! - [`TypeTag`]: a runtime identifier for a source's element type, attached
//!   to `Source` nodes for diagnostics.
//! - [`VecOps`]: a type-erased view of `Vec<T>` that lets the runner measure,
//!   split, and clone a source payload without naming `T`.

use std::any::{Any, TypeId, type_name};
use std::marker::PhantomData;
use std::sync::Arc;

/// A buffer of elements carried between nodes at runtime.
///
/// Nodes downcast a partition to the concrete type they expect (usually a
/// `Vec<T>` or an accumulator) before doing any work.
pub type Partition = Box<dyn Any + Send + Sync>;

/// Runtime identifier for a source's element type.
///
/// Carries the [`TypeId`] plus a readable name so graph dumps and error
/// messages can say *which* type a node produces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TypeTag {
    /// Stable Rust type identifier.
    pub id: TypeId,
    /// Best-effort human-readable type name.
    pub name: &'static str,
}

impl TypeTag {
    /// Tag for the type `T`.
    pub fn of<T: 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: type_name::<T>(),
        }
    }
}

/// Type-erased operations over a source's `Vec<T>` payload.
///
/// The runner needs three things from a source it cannot name the type of:
/// its length, a way to split it into partitions for parallel execution, and
/// a clone of the whole thing for sequential execution. Implementations
/// return `None` when handed a payload that is not the `Vec<T>` they were
/// built for.
pub trait VecOps: Send + Sync {
    /// Number of elements, if `data` is the expected `Vec<T>`.
    fn len(&self, data: &dyn Any) -> Option<usize>;

    /// Split `data` into at most `n` contiguous chunks, preserving order.
    ///
    /// Small inputs and `n <= 1` collapse to a single chunk.
    fn split(&self, data: &dyn Any, n: usize) -> Option<Vec<Partition>>;

    /// Clone the whole `Vec<T>` into a fresh [`Partition`].
    fn clone_any(&self, data: &dyn Any) -> Option<Partition>;
}

struct VecOpsImpl<T>(PhantomData<T>);

impl<T: Clone + Send + Sync + 'static> VecOps for VecOpsImpl<T> {
    fn len(&self, data: &dyn Any) -> Option<usize> {
        data.downcast_ref::<Vec<T>>().map(Vec::len)
    }

    fn split(&self, data: &dyn Any, n: usize) -> Option<Vec<Partition>> {
        let v = data.downcast_ref::<Vec<T>>()?;
        if n <= 1 || v.len() <= 1 {
            return Some(vec![Box::new(v.clone())]);
        }
        let chunk = v.len().div_ceil(n);
        Some(
            v.chunks(chunk)
                .map(|c| Box::new(c.to_vec()) as Partition)
                .collect(),
        )
    }

    fn clone_any(&self, data: &dyn Any) -> Option<Partition> {
        data.downcast_ref::<Vec<T>>()
            .map(|v| Box::new(v.clone()) as Partition)
    }
}

/// Build the [`VecOps`] handler for sources of element type `T`.
pub fn vec_ops_for<T: Clone + Send + Sync + 'static>() -> Arc<dyn VecOps> {
    Arc::new(VecOpsImpl::<T>(PhantomData))
}
