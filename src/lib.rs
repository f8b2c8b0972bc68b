//! # Girder
//!
//! A small **batch data pipeline library** for Rust in the spirit of Apache
//! Beam: build a computation graph declaratively, then run it sequentially or
//! in parallel over in-memory data.
//!
//! The headline feature is named-field aggregation: group a collection
//! (globally or by key), declare aggregates over a numeric field, and get
//! one row of named results per group.
//!
//! ## Quick start
//!
//! ```
//! use girder::combiners::{MaxF64, MeanF64, MinF64};
//! use girder::{Pipeline, from_vec};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Clone, Serialize, Deserialize)]
//! struct GroceryItem {
//!     recipe: String,
//!     fruit: String,
//!     quantity: u32,
//!     unit_price: f64,
//! }
//!
//! # fn main() -> anyhow::Result<()> {
//! let items = vec![
//!     GroceryItem { recipe: "pie".into(), fruit: "raspberry".into(), quantity: 1, unit_price: 3.50 },
//!     GroceryItem { recipe: "muffin".into(), fruit: "banana".into(), quantity: 3, unit_price: 1.00 },
//! ];
//!
//! let rows = Pipeline::scope(|p| {
//!     from_vec(p, items)
//!         .group_globally()
//!         .aggregate_field(|g: &GroceryItem| g.unit_price, MinF64, "min_price")
//!         .aggregate_field(|g: &GroceryItem| g.unit_price, MeanF64, "mean_price")
//!         .aggregate_field(|g: &GroceryItem| g.unit_price, MaxF64, "max_price")
//!         .apply()
//!         .collect_seq()
//! })?;
//!
//! assert_eq!(rows.len(), 1);
//! assert_eq!(rows[0].get("min_price"), Some(1.00));
//! # Ok(())
//! # }
//! ```
//!
//! ## Core concepts
//!
//! ### Pipeline
//!
//! A [`Pipeline`] holds the computation graph. Create one with
//! `Pipeline::default()`, or use [`Pipeline::scope`] for a context that is
//! guaranteed to be released when the closure exits.
//!
//! ### PCollection
//!
//! A [`PCollection<T>`] is a lazy, immutable, typed handle to a collection
//! inside the graph. Transformations return new handles; nothing runs until
//! a `collect` method is called.
//!
//! Stateless transforms: [`map`](PCollection::map),
//! [`filter`](PCollection::filter), [`flat_map`](PCollection::flat_map).
//! Keyed transforms: [`key_by`](PCollection::key_by),
//! [`map_values`](PCollection::map_values),
//! [`filter_values`](PCollection::filter_values),
//! [`group_by_key`](PCollection::group_by_key),
//! [`combine_values`](PCollection::combine_values).
//! Global combines: [`combine_globally`](PCollection::combine_globally).
//!
//! ### Combiners
//!
//! A combiner ([`CombineFn`]) computes an aggregate incrementally:
//! `create` an accumulator, `add_input` values, `merge` accumulators from
//! different partitions, `finish` into the output. Built-ins live in
//! [`combiners`]: [`Sum`], [`Min`], [`Max`], [`MinF64`], [`MaxF64`],
//! [`MeanF64`], plus [`Count`].
//!
//! ### GroupBy aggregation
//!
//! [`group_globally`](PCollection::group_globally) and
//! [`group_by`](PCollection::group_by) start an aggregation builder;
//! each `aggregate_field(field, combiner, name)` call declares one named
//! output, and `apply()` yields an [`AggregateRow`] per group.
//!
//! ### Execution
//!
//! [`collect_seq`](PCollection::collect_seq) runs single-threaded and
//! in-order; [`collect_par`](PCollection::collect_par) partitions the source
//! and runs on rayon. Both produce the same results (up to ordering of
//! grouped output).

pub mod collection;
pub mod combiners;
pub mod group_by;
pub mod helpers;
pub mod node;
pub mod node_id;
pub mod pipeline;
pub mod runner;
pub mod testing;
pub mod type_token;
pub mod utils;

pub use collection::{CombineFn, Count, Element, LiftableCombiner, PCollection};
pub use combiners::{Max, MaxF64, MeanF64, Min, MinF64, Sum};
pub use group_by::{AggregateRow, GlobalGroupBy, KeyedGroupBy};
pub use helpers::*;
pub use node_id::NodeId;
pub use pipeline::Pipeline;
pub use runner::{ExecMode, Runner};
pub use type_token::Partition;
pub use utils::OrdF64;
