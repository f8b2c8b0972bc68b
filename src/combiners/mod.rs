//! Built-in combiners for keyed and global combines.
//!
//! Reusable [`CombineFn`](crate::CombineFn) implementations (most also
//! implement [`LiftableCombiner`](crate::LiftableCombiner)):
//!
//! - [`Sum<T>`] -- sum of values.
//! - [`Min<T>`] / [`Max<T>`] -- extremes of `Ord` values.
//! - [`MinF64`] / [`MaxF64`] -- extremes of `f64` values under total order.
//! - [`MeanF64`] -- arithmetic mean as `f64`.
//!
//! Each combiner fixes its accumulator type `A` and output type `O`; see
//! [`CombineFn`](crate::CombineFn) for the create/add/merge/finish contract.
//! For `f64` data the float-specific combiners avoid the `Ord` detour:
//!
//! ```
//! use girder::combiners::{MaxF64, MeanF64, MinF64};
//! use girder::{Pipeline, from_vec};
//!
//! let p = Pipeline::default();
//! let lo = from_vec(&p, vec![3.5f64, 4.0, 2.0])
//!     .combine_globally(MinF64, None)
//!     .collect_seq()
//!     .unwrap();
//! assert_eq!(lo, vec![2.0]);
//! ```

mod basic;
mod statistical;

pub use basic::{Max, Min, Sum};
pub use statistical::{MaxF64, MeanF64, MinF64};
