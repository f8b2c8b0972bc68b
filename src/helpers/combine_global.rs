//! Global (non-keyed) combines.
//!
//! [`combine_globally`](PCollection::combine_globally) folds every element of
//! a collection into a single output through a [`CombineFn`], treating the
//! whole input as one implicit group. The optional `fanout` bounds how many
//! accumulators are merged per round during parallel execution, which keeps
//! merge critical paths short on heavily partitioned inputs.

use crate::collection::LiftableCombiner;
use crate::node::Node;
use crate::type_token::Partition;
use crate::{CombineFn, Element, PCollection};
use std::marker::PhantomData;
use std::sync::Arc;

fn merge_accs<V, A, O, C>(comb: &Arc<C>) -> Arc<dyn Fn(Vec<Partition>) -> Partition + Send + Sync>
where
    C: CombineFn<V, A, O>,
    A: 'static + Send + Sync,
    V: 'static,
    O: 'static,
{
    let comb = Arc::clone(comb);
    Arc::new(move |parts: Vec<Partition>| -> Partition {
        let mut it = parts.into_iter();
        let mut acc = match it.next() {
            Some(first) => *first
                .downcast::<A>()
                .expect("global combine merge: accumulator type"),
            None => comb.create(),
        };
        for p in it {
            let a = *p
                .downcast::<A>()
                .expect("global combine merge: accumulator type");
            comb.merge(&mut acc, a);
        }
        Box::new(acc) as Partition
    })
}

fn finish_singleton<V, A, O, C>(
    comb: &Arc<C>,
) -> Arc<dyn Fn(Partition) -> Partition + Send + Sync>
where
    C: CombineFn<V, A, O>,
    A: 'static + Send + Sync,
    V: 'static,
    O: Element,
{
    let comb = Arc::clone(comb);
    Arc::new(move |p: Partition| -> Partition {
        let acc = *p
            .downcast::<A>()
            .expect("global combine finish: accumulator type");
        Box::new(vec![comb.finish(acc)]) as Partition
    })
}

impl<T: Element> PCollection<T> {
    /// Fold all elements into a single output with a [`CombineFn`].
    ///
    /// Produces exactly one element, even for empty inputs (the output of
    /// `finish(create())`).
    ///
    /// ```
    /// use girder::combiners::Sum;
    /// use girder::{Pipeline, from_vec};
    ///
    /// let p = Pipeline::default();
    /// let total = from_vec(&p, vec![1u64, 2, 3, 4])
    ///     .combine_globally(Sum::<u64>::default(), None)
    ///     .collect_seq()
    ///     .unwrap();
    /// assert_eq!(total, vec![10]);
    /// ```
    pub fn combine_globally<C, A, O>(self, comb: C, fanout: Option<usize>) -> PCollection<O>
    where
        C: CombineFn<T, A, O>,
        A: 'static + Send + Sync,
        O: Element,
    {
        let comb = Arc::new(comb);

        // local: Vec<T> -> A via create + add_input
        let local = {
            let comb = Arc::clone(&comb);
            Arc::new(move |p: Partition| -> Partition {
                let rows = *p
                    .downcast::<Vec<T>>()
                    .expect("global combine local: input type");
                let mut acc = comb.create();
                for v in rows {
                    comb.add_input(&mut acc, v);
                }
                Box::new(acc) as Partition
            })
        };

        let merge = merge_accs::<T, A, O, C>(&comb);
        let finish = finish_singleton::<T, A, O, C>(&comb);

        let id = self.pipeline.insert_node(Node::CombineGlobal {
            local,
            merge,
            finish,
            fanout,
        });
        self.pipeline.connect(self.id, id);
        PCollection {
            pipeline: self.pipeline,
            id,
            _t: PhantomData,
        }
    }

    /// Like [`combine_globally`](PCollection::combine_globally), but builds
    /// each partition's accumulator from its full slice via
    /// [`LiftableCombiner::build_from_group`].
    pub fn combine_globally_lifted<C, A, O>(self, comb: C, fanout: Option<usize>) -> PCollection<O>
    where
        C: LiftableCombiner<T, A, O>,
        A: 'static + Send + Sync,
        O: Element,
    {
        let comb = Arc::new(comb);

        let local = {
            let comb = Arc::clone(&comb);
            Arc::new(move |p: Partition| -> Partition {
                let rows = *p
                    .downcast::<Vec<T>>()
                    .expect("lifted global combine local: input type");
                Box::new(comb.build_from_group(&rows)) as Partition
            })
        };

        let merge = merge_accs::<T, A, O, C>(&comb);
        let finish = finish_singleton::<T, A, O, C>(&comb);

        let id = self.pipeline.insert_node(Node::CombineGlobal {
            local,
            merge,
            finish,
            fanout,
        });
        self.pipeline.connect(self.id, id);
        PCollection {
            pipeline: self.pipeline,
            id,
            _t: PhantomData,
        }
    }
}
