//! Combine-by-key.

use crate::collection::LiftableCombiner;
use crate::node::Node;
use crate::type_token::Partition;
use crate::{CombineFn, Element, PCollection};
use std::collections::HashMap;
use std::hash::Hash;
use std::marker::PhantomData;
use std::sync::Arc;

impl<K: Element + Eq + Hash, V: Element> PCollection<(K, V)> {
    /// Aggregate the values of each key with a [`CombineFn`].
    ///
    /// Evaluated in two phases: each partition folds its pairs into per-key
    /// accumulators, then the per-partition maps are merged and finished into
    /// one `(K, O)` per key.
    pub fn combine_values<C, A, O>(self, comb: C) -> PCollection<(K, O)>
    where
        C: CombineFn<V, A, O>,
        A: 'static + Send + Sync,
        O: Element,
    {
        let comb = Arc::new(comb);

        let local_pairs = {
            let comb = Arc::clone(&comb);
            Arc::new(move |p: Partition| -> Partition {
                let kv = *p
                    .downcast::<Vec<(K, V)>>()
                    .expect("combine_values local: input type");
                let mut map: HashMap<K, A> = HashMap::new();
                for (k, v) in kv {
                    comb.add_input(map.entry(k).or_insert_with(|| comb.create()), v);
                }
                Box::new(map) as Partition
            })
        };

        let merge = {
            let comb = Arc::clone(&comb);
            Arc::new(move |parts: Vec<Partition>| -> Partition {
                let mut accs: HashMap<K, A> = HashMap::new();
                for p in parts {
                    let m = *p
                        .downcast::<HashMap<K, A>>()
                        .expect("combine_values merge: partition type");
                    for (k, a) in m {
                        comb.merge(accs.entry(k).or_insert_with(|| comb.create()), a);
                    }
                }
                let out: Vec<(K, O)> = accs.into_iter().map(|(k, a)| (k, comb.finish(a))).collect();
                Box::new(out) as Partition
            })
        };

        let id = self.pipeline.insert_node(Node::CombineValues {
            local_pairs,
            local_groups: None,
            merge,
        });
        self.pipeline.connect(self.id, id);
        PCollection {
            pipeline: self.pipeline,
            id,
            _t: PhantomData,
        }
    }
}

impl<K, V> PCollection<(K, Vec<V>)>
where
    K: Element + Eq + Hash,
    V: Element,
{
    /// Lifted combine for use directly after [`group_by_key`](PCollection::group_by_key).
    ///
    /// Builds each key's accumulator from the group's full value slice via
    /// [`LiftableCombiner::build_from_group`] instead of re-folding element
    /// by element.
    pub fn combine_values_lifted<C, A, O>(self, comb: C) -> PCollection<(K, O)>
    where
        C: LiftableCombiner<V, A, O>,
        A: 'static + Send + Sync,
        O: Element,
    {
        let comb = Arc::new(comb);

        // plain local, in case the runner sees ungrouped pairs
        let local_pairs = {
            let comb = Arc::clone(&comb);
            Arc::new(move |p: Partition| -> Partition {
                let kv = *p
                    .downcast::<Vec<(K, V)>>()
                    .expect("lifted combine local: input type");
                let mut map: HashMap<K, A> = HashMap::new();
                for (k, v) in kv {
                    comb.add_input(map.entry(k).or_insert_with(|| comb.create()), v);
                }
                Box::new(map) as Partition
            })
        };

        let local_groups = {
            let comb = Arc::clone(&comb);
            Arc::new(move |p: Partition| -> Partition {
                let groups = *p
                    .downcast::<Vec<(K, Vec<V>)>>()
                    .expect("lifted combine local_groups: input type");
                let mut map: HashMap<K, A> = HashMap::new();
                for (k, vs) in groups {
                    map.insert(k, comb.build_from_group(&vs));
                }
                Box::new(map) as Partition
            })
        };

        let merge = {
            let comb = Arc::clone(&comb);
            Arc::new(move |parts: Vec<Partition>| -> Partition {
                let mut accs: HashMap<K, A> = HashMap::new();
                for p in parts {
                    let m = *p
                        .downcast::<HashMap<K, A>>()
                        .expect("lifted combine merge: partition type");
                    for (k, a) in m {
                        comb.merge(accs.entry(k).or_insert_with(|| comb.create()), a);
                    }
                }
                let out: Vec<(K, O)> = accs.into_iter().map(|(k, a)| (k, comb.finish(a))).collect();
                Box::new(out) as Partition
            })
        };

        let id = self.pipeline.insert_node(Node::CombineValues {
            local_pairs,
            local_groups: Some(local_groups),
            merge,
        });
        self.pipeline.connect(self.id, id);
        PCollection {
            pipeline: self.pipeline,
            id,
            _t: PhantomData,
        }
    }
}
