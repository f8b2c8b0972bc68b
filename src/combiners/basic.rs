//! Arithmetic combiners over `Ord` values: Sum, Min, Max.

use crate::collection::{CombineFn, LiftableCombiner};
use crate::Element;
use std::marker::PhantomData;
use std::mem::take;
use std::ops::Add;

/* ===================== Sum<T> ===================== */

/// Sum of values.
///
/// - Accumulator: `T`
/// - Output: `T`
#[derive(Clone, Copy, Debug, Default)]
pub struct Sum<T>(PhantomData<T>);

impl<T> Sum<T> {
    pub fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T> CombineFn<T, T, T> for Sum<T>
where
    T: Element + Add<Output = T> + Default,
{
    fn create(&self) -> T {
        T::default()
    }

    fn add_input(&self, acc: &mut T, v: T) {
        *acc = take(acc) + v;
    }

    fn merge(&self, acc: &mut T, other: T) {
        *acc = take(acc) + other;
    }

    fn finish(&self, acc: T) -> T {
        acc
    }
}

impl<T> LiftableCombiner<T, T, T> for Sum<T>
where
    T: Element + Add<Output = T> + Default,
{
    fn build_from_group(&self, values: &[T]) -> T {
        values.iter().cloned().fold(T::default(), |a, v| a + v)
    }
}

/* ===================== Min<T> ===================== */

/// Minimum of `Ord` values.
///
/// - Accumulator: `Option<T>`
/// - Output: `T`
///
/// Finishing an accumulator that never saw a value panics; global combines
/// over empty input hit this, keyed combines cannot (keys only exist for
/// observed values). Use [`OrdF64`](crate::OrdF64) to apply this to floats,
/// or reach for [`MinF64`](crate::combiners::MinF64) directly.
#[derive(Clone, Copy, Debug, Default)]
pub struct Min<T>(PhantomData<T>);

impl<T> Min<T> {
    pub fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T> CombineFn<T, Option<T>, T> for Min<T>
where
    T: Element + Ord,
{
    fn create(&self) -> Option<T> {
        None
    }

    fn add_input(&self, acc: &mut Option<T>, v: T) {
        match acc {
            Some(cur) => {
                if v < *cur {
                    *cur = v;
                }
            }
            None => *acc = Some(v),
        }
    }

    fn merge(&self, acc: &mut Option<T>, other: Option<T>) {
        if let Some(v) = other {
            self.add_input(acc, v);
        }
    }

    fn finish(&self, acc: Option<T>) -> T {
        acc.expect("Min::finish on empty input")
    }
}

impl<T> LiftableCombiner<T, Option<T>, T> for Min<T>
where
    T: Element + Ord,
{
    fn build_from_group(&self, values: &[T]) -> Option<T> {
        values.iter().cloned().min()
    }
}

/* ===================== Max<T> ===================== */

/// Maximum of `Ord` values.
///
/// Mirror image of [`Min`]; the same empty-input caveat applies.
#[derive(Clone, Copy, Debug, Default)]
pub struct Max<T>(PhantomData<T>);

impl<T> Max<T> {
    pub fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T> CombineFn<T, Option<T>, T> for Max<T>
where
    T: Element + Ord,
{
    fn create(&self) -> Option<T> {
        None
    }

    fn add_input(&self, acc: &mut Option<T>, v: T) {
        match acc {
            Some(cur) => {
                if v > *cur {
                    *cur = v;
                }
            }
            None => *acc = Some(v),
        }
    }

    fn merge(&self, acc: &mut Option<T>, other: Option<T>) {
        if let Some(v) = other {
            self.add_input(acc, v);
        }
    }

    fn finish(&self, acc: Option<T>) -> T {
        acc.expect("Max::finish on empty input")
    }
}

impl<T> LiftableCombiner<T, Option<T>, T> for Max<T>
where
    T: Element + Ord,
{
    fn build_from_group(&self, values: &[T]) -> Option<T> {
        values.iter().cloned().max()
    }
}
