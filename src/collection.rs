//! The [`PCollection`] handle and the combiner contracts.

use crate::node::DynOp;
use crate::node_id::NodeId;
use crate::pipeline::Pipeline;
use crate::type_token::Partition;
use serde::{Serialize, de::DeserializeOwned};
use std::marker::PhantomData;

/// Bound every pipeline element type must satisfy.
///
/// Elements cross thread boundaries during parallel execution and flow
/// through type-erased buffers, hence `Send + Sync + Clone`; the serde
/// bounds keep every element type representable as plain data.
pub trait Element: 'static + Send + Sync + Clone + Serialize + DeserializeOwned {}
impl<T> Element for T where T: 'static + Send + Sync + Clone + Serialize + DeserializeOwned {}

/// A lazy, immutable collection of elements of type `T`.
///
/// A `PCollection` is a handle into a [`Pipeline`] graph: transformations
/// append nodes and return new handles, and nothing runs until a `collect`
/// method is called. Cloning the handle does not copy data.
#[derive(Clone)]
pub struct PCollection<T> {
    pub(crate) pipeline: Pipeline,
    pub(crate) id: NodeId,
    pub(crate) _t: PhantomData<T>,
}

/* ---- stateless operator implementations ---- */

pub(crate) struct MapOp<I, O, F>(pub(crate) F, pub(crate) PhantomData<fn(I) -> O>);

impl<I, O, F> DynOp for MapOp<I, O, F>
where
    I: Element,
    O: Element,
    F: 'static + Send + Sync + Fn(&I) -> O,
{
    fn apply(&self, input: Partition) -> Partition {
        let v = *input.downcast::<Vec<I>>().expect("map: input type");
        Box::new(v.iter().map(|i| self.0(i)).collect::<Vec<O>>())
    }
}

pub(crate) struct FilterOp<T, P>(pub(crate) P, pub(crate) PhantomData<fn(T)>);

impl<T, P> DynOp for FilterOp<T, P>
where
    T: Element,
    P: 'static + Send + Sync + Fn(&T) -> bool,
{
    fn apply(&self, input: Partition) -> Partition {
        let v = *input.downcast::<Vec<T>>().expect("filter: input type");
        Box::new(v.into_iter().filter(|t| self.0(t)).collect::<Vec<T>>())
    }
}

pub(crate) struct FlatMapOp<I, O, F>(pub(crate) F, pub(crate) PhantomData<fn(I) -> O>);

impl<I, O, F> DynOp for FlatMapOp<I, O, F>
where
    I: Element,
    O: Element,
    F: 'static + Send + Sync + Fn(&I) -> Vec<O>,
{
    fn apply(&self, input: Partition) -> Partition {
        let v = *input.downcast::<Vec<I>>().expect("flat_map: input type");
        let mut out: Vec<O> = Vec::new();
        for i in &v {
            out.extend(self.0(i));
        }
        Box::new(out)
    }
}

pub(crate) struct MapValuesOp<K, V, O, F>(pub(crate) F, pub(crate) PhantomData<fn(K, V) -> O>);

impl<K, V, O, F> DynOp for MapValuesOp<K, V, O, F>
where
    K: Element,
    V: Element,
    O: Element,
    F: 'static + Send + Sync + Fn(&V) -> O,
{
    fn apply(&self, input: Partition) -> Partition {
        let kv = *input.downcast::<Vec<(K, V)>>().expect("map_values: input type");
        Box::new(
            kv.into_iter()
                .map(|(k, v)| {
                    let o = self.0(&v);
                    (k, o)
                })
                .collect::<Vec<(K, O)>>(),
        )
    }
}

pub(crate) struct FilterValuesOp<K, V, P>(pub(crate) P, pub(crate) PhantomData<fn(K, V)>);

impl<K, V, P> DynOp for FilterValuesOp<K, V, P>
where
    K: Element,
    V: Element,
    P: 'static + Send + Sync + Fn(&V) -> bool,
{
    fn apply(&self, input: Partition) -> Partition {
        let kv = *input
            .downcast::<Vec<(K, V)>>()
            .expect("filter_values: input type");
        Box::new(
            kv.into_iter()
                .filter(|(_, v)| self.0(v))
                .collect::<Vec<(K, V)>>(),
        )
    }
}

/* ---- combiner contracts ---- */

/// Contract for incrementally computing an aggregate over a stream of values.
///
/// A combiner folds values `V` into an accumulator `A` and extracts an output
/// `O` at the end. Accumulators from different partitions must merge into an
/// equivalent accumulator, which is what lets the runner evaluate combines in
/// two phases (per-partition fold, then merge).
pub trait CombineFn<V, A, O>: Send + Sync + 'static {
    /// Fresh, empty accumulator.
    fn create(&self) -> A;
    /// Fold one value into the accumulator.
    fn add_input(&self, acc: &mut A, v: V);
    /// Absorb another accumulator produced for a disjoint set of inputs.
    fn merge(&self, acc: &mut A, other: A);
    /// Extract the final output.
    fn finish(&self, acc: A) -> O;
}

/// Combiners that can also build an accumulator directly from a whole group.
///
/// Used by the lifted combine paths to skip per-element `add_input` calls
/// when the input is already materialized as a slice.
pub trait LiftableCombiner<V, A, O>: CombineFn<V, A, O> {
    fn build_from_group(&self, values: &[V]) -> A;
}

/// Counts values, ignoring their content.
#[derive(Clone, Copy, Debug, Default)]
pub struct Count;

impl<V> CombineFn<V, u64, u64> for Count {
    fn create(&self) -> u64 {
        0
    }
    fn add_input(&self, acc: &mut u64, _v: V) {
        *acc += 1;
    }
    fn merge(&self, acc: &mut u64, other: u64) {
        *acc += other;
    }
    fn finish(&self, acc: u64) -> u64 {
        acc
    }
}

impl<V> LiftableCombiner<V, u64, u64> for Count {
    fn build_from_group(&self, values: &[V]) -> u64 {
        values.len() as u64
    }
}
