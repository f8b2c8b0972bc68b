//! Value-side transforms for keyed collections.
//!
//! Analogs of [`map`](crate::PCollection::map) and
//! [`filter`](crate::PCollection::filter) that touch only the value of each
//! `(K, V)` pair, leaving keys in place.

use crate::collection::{FilterValuesOp, MapValuesOp};
use crate::node::{DynOp, Node};
use crate::{Element, PCollection};
use std::hash::Hash;
use std::marker::PhantomData;
use std::sync::Arc;

impl<K: Element + Eq + Hash, V: Element> PCollection<(K, V)> {
    /// Apply `f` to each value, keeping its key: `(K, V)` -> `(K, O)`.
    ///
    /// ```
    /// use girder::{Pipeline, from_vec};
    ///
    /// let p = Pipeline::default();
    /// let kv = from_vec(&p, vec![("x".to_string(), 1u32), ("y".to_string(), 2)]);
    /// let out = kv.map_values(|v: &u32| v + 1).collect_seq().unwrap();
    /// assert_eq!(out, vec![("x".to_string(), 2u32), ("y".to_string(), 3)]);
    /// ```
    pub fn map_values<O, F>(self, f: F) -> PCollection<(K, O)>
    where
        O: Element,
        F: 'static + Send + Sync + Fn(&V) -> O,
    {
        let op: Arc<dyn DynOp> = Arc::new(MapValuesOp::<K, V, O, F>(f, PhantomData));
        let id = self.pipeline.insert_node(Node::Stateless(vec![op]));
        self.pipeline.connect(self.id, id);
        PCollection {
            pipeline: self.pipeline,
            id,
            _t: PhantomData,
        }
    }

    /// Keep pairs whose value satisfies `pred`.
    pub fn filter_values<F>(self, pred: F) -> PCollection<(K, V)>
    where
        F: 'static + Send + Sync + Fn(&V) -> bool,
    {
        let op: Arc<dyn DynOp> = Arc::new(FilterValuesOp::<K, V, F>(pred, PhantomData));
        let id = self.pipeline.insert_node(Node::Stateless(vec![op]));
        self.pipeline.connect(self.id, id);
        PCollection {
            pipeline: self.pipeline,
            id,
            _t: PhantomData,
        }
    }
}
