//! Float combiners: `MeanF64`, `MinF64`, `MaxF64`.
//!
//! `f64` has no `Ord`, so the extremes here compare through
//! [`OrderedFloat`], which totally orders floats (NaN ordered greatest).

use crate::collection::{CombineFn, LiftableCombiner};
use crate::Element;
use ordered_float::OrderedFloat;

/* ===================== MeanF64 ===================== */

/// Arithmetic mean of values as `f64`.
///
/// Values must be convertible into `f64`.
///
/// - Accumulator: `(sum, count)`
/// - Output: `f64`
///
/// Empty inputs finish to `0.0`.
#[derive(Clone, Copy, Debug, Default)]
pub struct MeanF64;

impl<V> CombineFn<V, (f64, u64), f64> for MeanF64
where
    V: Element + Into<f64>,
{
    fn create(&self) -> (f64, u64) {
        (0.0, 0)
    }

    fn add_input(&self, acc: &mut (f64, u64), v: V) {
        acc.0 += v.into();
        acc.1 += 1;
    }

    fn merge(&self, acc: &mut (f64, u64), other: (f64, u64)) {
        acc.0 += other.0;
        acc.1 += other.1;
    }

    #[allow(clippy::cast_precision_loss)]
    fn finish(&self, acc: (f64, u64)) -> f64 {
        if acc.1 == 0 { 0.0 } else { acc.0 / (acc.1 as f64) }
    }
}

impl<V> LiftableCombiner<V, (f64, u64), f64> for MeanF64
where
    V: Element + Into<f64>,
{
    fn build_from_group(&self, values: &[V]) -> (f64, u64) {
        let sum: f64 = values.iter().map(|v| v.clone().into()).sum();
        (sum, values.len() as u64)
    }
}

/* ===================== MinF64 ===================== */

/// Minimum of `f64` values under total order.
///
/// - Accumulator: `Option<OrderedFloat<f64>>`
/// - Output: `f64`
///
/// Same empty-input behavior as [`Min`](crate::combiners::Min): finishing
/// with no observed values panics.
#[derive(Clone, Copy, Debug, Default)]
pub struct MinF64;

impl CombineFn<f64, Option<OrderedFloat<f64>>, f64> for MinF64 {
    fn create(&self) -> Option<OrderedFloat<f64>> {
        None
    }

    fn add_input(&self, acc: &mut Option<OrderedFloat<f64>>, v: f64) {
        let v = OrderedFloat(v);
        match acc {
            Some(cur) => {
                if v < *cur {
                    *cur = v;
                }
            }
            None => *acc = Some(v),
        }
    }

    fn merge(&self, acc: &mut Option<OrderedFloat<f64>>, other: Option<OrderedFloat<f64>>) {
        if let Some(v) = other {
            self.add_input(acc, v.into_inner());
        }
    }

    fn finish(&self, acc: Option<OrderedFloat<f64>>) -> f64 {
        acc.expect("MinF64::finish on empty input").into_inner()
    }
}

impl LiftableCombiner<f64, Option<OrderedFloat<f64>>, f64> for MinF64 {
    fn build_from_group(&self, values: &[f64]) -> Option<OrderedFloat<f64>> {
        values.iter().copied().map(OrderedFloat).min()
    }
}

/* ===================== MaxF64 ===================== */

/// Maximum of `f64` values under total order; mirror image of [`MinF64`].
#[derive(Clone, Copy, Debug, Default)]
pub struct MaxF64;

impl CombineFn<f64, Option<OrderedFloat<f64>>, f64> for MaxF64 {
    fn create(&self) -> Option<OrderedFloat<f64>> {
        None
    }

    fn add_input(&self, acc: &mut Option<OrderedFloat<f64>>, v: f64) {
        let v = OrderedFloat(v);
        match acc {
            Some(cur) => {
                if v > *cur {
                    *cur = v;
                }
            }
            None => *acc = Some(v),
        }
    }

    fn merge(&self, acc: &mut Option<OrderedFloat<f64>>, other: Option<OrderedFloat<f64>>) {
        if let Some(v) = other {
            self.add_input(acc, v.into_inner());
        }
    }

    fn finish(&self, acc: Option<OrderedFloat<f64>>) -> f64 {
        acc.expect("MaxF64::finish on empty input").into_inner()
    }
}

impl LiftableCombiner<f64, Option<OrderedFloat<f64>>, f64> for MaxF64 {
    fn build_from_group(&self, values: &[f64]) -> Option<OrderedFloat<f64>> {
        values.iter().copied().map(OrderedFloat).max()
    }
}
