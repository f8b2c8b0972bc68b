//! `GroupBy`-style aggregation with named output fields.
//!
//! This is the declarative front end over the combine machinery: pick a
//! grouping (the whole collection, or a derived key), declare any number of
//! named aggregates over numeric fields, and apply. Each group yields one
//! [`AggregateRow`] holding the declared fields in declaration order.
//!
//! ```
//! use girder::combiners::{MaxF64, MeanF64, MinF64};
//! use girder::{Pipeline, from_vec};
//!
//! let p = Pipeline::default();
//! let rows = from_vec(&p, vec![3.50f64, 4.00, 2.00, 2.00, 1.00])
//!     .group_globally()
//!     .aggregate_field(|price: &f64| *price, MinF64, "min_price")
//!     .aggregate_field(|price: &f64| *price, MeanF64, "mean_price")
//!     .aggregate_field(|price: &f64| *price, MaxF64, "max_price")
//!     .apply()
//!     .collect_seq()
//!     .unwrap();
//!
//! assert_eq!(rows.len(), 1);
//! assert_eq!(rows[0].get("min_price"), Some(1.00));
//! assert_eq!(rows[0].get("mean_price"), Some(2.50));
//! assert_eq!(rows[0].get("max_price"), Some(4.00));
//! ```
//!
//! Grouping by a key instead produces one `(K, AggregateRow)` per key; see
//! [`PCollection::group_by`].

use crate::collection::CombineFn;
use crate::{Element, PCollection};
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::any::Any;
use std::fmt;
use std::hash::Hash;
use std::marker::PhantomData;
use std::sync::Arc;

/// One output record of named aggregate fields.
///
/// Fields keep their declaration order. Serializes as a JSON-style map
/// (`{"min_price": 1.0, ...}`).
#[derive(Debug, Clone, PartialEq)]
pub struct AggregateRow {
    fields: Vec<(String, f64)>,
}

impl AggregateRow {
    /// Value of the first field named `name`, if any.
    pub fn get(&self, name: &str) -> Option<f64> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| *v)
    }

    /// Iterate `(name, value)` in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.fields.iter().map(|(n, v)| (n.as_str(), *v))
    }

    /// Field names in declaration order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(n, _)| n.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl Serialize for AggregateRow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (name, value) in &self.fields {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for AggregateRow {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct RowVisitor;

        impl<'de> Visitor<'de> for RowVisitor {
            type Value = AggregateRow;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of aggregate field names to numbers")
            }

            fn visit_map<M: MapAccess<'de>>(self, mut access: M) -> Result<Self::Value, M::Error> {
                let mut fields = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((name, value)) = access.next_entry::<String, f64>()? {
                    fields.push((name, value));
                }
                Ok(AggregateRow { fields })
            }
        }

        deserializer.deserialize_map(RowVisitor)
    }
}

/* ---- type-erased per-field aggregation ---- */

type DynAcc = Box<dyn Any + Send + Sync>;

/// One declared aggregate: a field accessor, a combiner, and an output name,
/// erased so declarations with different accumulator types can share a row.
trait FieldAggregate<T>: Send + Sync {
    fn name(&self) -> &str;
    fn create(&self) -> DynAcc;
    fn add(&self, acc: &mut DynAcc, row: &T);
    fn merge(&self, acc: &mut DynAcc, other: DynAcc);
    fn finish(&self, acc: DynAcc) -> f64;
}

struct NamedField<T, C, A> {
    name: String,
    field: Box<dyn Fn(&T) -> f64 + Send + Sync>,
    comb: C,
    _acc: PhantomData<fn() -> A>,
}

impl<T, C, A> FieldAggregate<T> for NamedField<T, C, A>
where
    T: 'static,
    C: CombineFn<f64, A, f64>,
    A: 'static + Send + Sync,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn create(&self) -> DynAcc {
        Box::new(self.comb.create())
    }

    fn add(&self, acc: &mut DynAcc, row: &T) {
        let a = acc.downcast_mut::<A>().expect("aggregate_field: accumulator type");
        self.comb.add_input(a, (self.field)(row));
    }

    fn merge(&self, acc: &mut DynAcc, other: DynAcc) {
        let a = acc.downcast_mut::<A>().expect("aggregate_field: accumulator type");
        let b = *other.downcast::<A>().expect("aggregate_field: accumulator type");
        self.comb.merge(a, b);
    }

    fn finish(&self, acc: DynAcc) -> f64 {
        self.comb
            .finish(*acc.downcast::<A>().expect("aggregate_field: accumulator type"))
    }
}

fn named_field<T, F, C, A>(field: F, comb: C, as_name: impl Into<String>) -> Arc<dyn FieldAggregate<T>>
where
    T: Element,
    F: 'static + Send + Sync + Fn(&T) -> f64,
    C: CombineFn<f64, A, f64>,
    A: 'static + Send + Sync,
{
    Arc::new(NamedField::<T, C, A> {
        name: as_name.into(),
        field: Box::new(field),
        comb,
        _acc: PhantomData,
    })
}

/// Composite combiner running every declared field aggregate side by side.
///
/// Accumulator: one erased accumulator per declared field, in declaration
/// order.
struct RowCombine<T> {
    aggs: Arc<[Arc<dyn FieldAggregate<T>>]>,
}

impl<T: Element> CombineFn<T, Vec<DynAcc>, AggregateRow> for RowCombine<T> {
    fn create(&self) -> Vec<DynAcc> {
        self.aggs.iter().map(|a| a.create()).collect()
    }

    fn add_input(&self, acc: &mut Vec<DynAcc>, v: T) {
        for (slot, agg) in acc.iter_mut().zip(self.aggs.iter()) {
            agg.add(slot, &v);
        }
    }

    fn merge(&self, acc: &mut Vec<DynAcc>, other: Vec<DynAcc>) {
        for ((slot, b), agg) in acc.iter_mut().zip(other).zip(self.aggs.iter()) {
            agg.merge(slot, b);
        }
    }

    fn finish(&self, acc: Vec<DynAcc>) -> AggregateRow {
        AggregateRow {
            fields: self
                .aggs
                .iter()
                .zip(acc)
                .map(|(agg, a)| (agg.name().to_string(), agg.finish(a)))
                .collect(),
        }
    }
}

/* ---- builders ---- */

/// Builder for a global aggregation: the whole collection is one implicit
/// group. Created by [`PCollection::group_globally`].
pub struct GlobalGroupBy<T> {
    coll: PCollection<T>,
    aggs: Vec<Arc<dyn FieldAggregate<T>>>,
}

/// Builder for a keyed aggregation: one group per derived key. Created by
/// [`PCollection::group_by`].
pub struct KeyedGroupBy<K, T> {
    keyed: PCollection<(K, T)>,
    aggs: Vec<Arc<dyn FieldAggregate<T>>>,
}

impl<T: Element> PCollection<T> {
    /// Start a global aggregation over all elements.
    pub fn group_globally(self) -> GlobalGroupBy<T> {
        GlobalGroupBy {
            coll: self,
            aggs: Vec::new(),
        }
    }

    /// Start a per-key aggregation, grouping elements by `key_fn`.
    pub fn group_by<K, F>(self, key_fn: F) -> KeyedGroupBy<K, T>
    where
        K: Element + Eq + Hash,
        F: 'static + Send + Sync + Fn(&T) -> K,
    {
        KeyedGroupBy {
            keyed: self.key_by(key_fn),
            aggs: Vec::new(),
        }
    }
}

impl<T: Element> GlobalGroupBy<T> {
    /// Declare a named aggregate of `field` under `comb`, output as `as_name`.
    ///
    /// May be called repeatedly; the output row carries one field per call,
    /// in call order. Duplicate names are kept as declared.
    pub fn aggregate_field<F, C, A>(mut self, field: F, comb: C, as_name: impl Into<String>) -> Self
    where
        F: 'static + Send + Sync + Fn(&T) -> f64,
        C: CombineFn<f64, A, f64>,
        A: 'static + Send + Sync,
    {
        self.aggs.push(named_field(field, comb, as_name));
        self
    }

    /// Run the declared aggregates as a single global combine.
    ///
    /// Always produces exactly one row. With no declared fields the row is
    /// empty; otherwise each field holds its aggregate over every element.
    pub fn apply(self) -> PCollection<AggregateRow> {
        let comb = RowCombine {
            aggs: self.aggs.into(),
        };
        self.coll.combine_globally(comb, None)
    }
}

impl<K, T> KeyedGroupBy<K, T>
where
    K: Element + Eq + Hash,
    T: Element,
{
    /// Declare a named aggregate; see [`GlobalGroupBy::aggregate_field`].
    pub fn aggregate_field<F, C, A>(mut self, field: F, comb: C, as_name: impl Into<String>) -> Self
    where
        F: 'static + Send + Sync + Fn(&T) -> f64,
        C: CombineFn<f64, A, f64>,
        A: 'static + Send + Sync,
    {
        self.aggs.push(named_field(field, comb, as_name));
        self
    }

    /// Run the declared aggregates per key, producing one `(K, AggregateRow)`
    /// for each key observed in the input.
    pub fn apply(self) -> PCollection<(K, AggregateRow)> {
        let comb = RowCombine {
            aggs: self.aggs.into(),
        };
        self.keyed.combine_values(comb)
    }
}
