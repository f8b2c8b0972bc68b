use crate::collection::{FilterOp, FlatMapOp, MapOp};
use crate::node::{DynOp, Node};
use crate::runner::{ExecMode, Runner};
use crate::{Element, PCollection};
use std::marker::PhantomData;
use std::sync::Arc;

impl<T: Element> PCollection<T> {
    /// Transform each element with `f`.
    pub fn map<O, F>(self, f: F) -> PCollection<O>
    where
        O: Element,
        F: 'static + Send + Sync + Fn(&T) -> O,
    {
        let op: Arc<dyn DynOp> = Arc::new(MapOp::<T, O, F>(f, PhantomData));
        let id = self.pipeline.insert_node(Node::Stateless(vec![op]));
        self.pipeline.connect(self.id, id);
        PCollection {
            pipeline: self.pipeline,
            id,
            _t: PhantomData,
        }
    }

    /// Keep elements for which `pred` returns true.
    pub fn filter<F>(self, pred: F) -> PCollection<T>
    where
        F: 'static + Send + Sync + Fn(&T) -> bool,
    {
        let op: Arc<dyn DynOp> = Arc::new(FilterOp::<T, F>(pred, PhantomData));
        let id = self.pipeline.insert_node(Node::Stateless(vec![op]));
        self.pipeline.connect(self.id, id);
        PCollection {
            pipeline: self.pipeline,
            id,
            _t: PhantomData,
        }
    }

    /// Transform each element into zero or more outputs.
    pub fn flat_map<O, F>(self, f: F) -> PCollection<O>
    where
        O: Element,
        F: 'static + Send + Sync + Fn(&T) -> Vec<O>,
    {
        let op: Arc<dyn DynOp> = Arc::new(FlatMapOp::<T, O, F>(f, PhantomData));
        let id = self.pipeline.insert_node(Node::Stateless(vec![op]));
        self.pipeline.connect(self.id, id);
        PCollection {
            pipeline: self.pipeline,
            id,
            _t: PhantomData,
        }
    }
}

impl<T: Element> PCollection<T> {
    /// Alias for [`collect_seq`](PCollection::collect_seq).
    pub fn collect(self) -> anyhow::Result<Vec<T>> {
        self.collect_seq()
    }

    /// Execute the pipeline on a single thread and materialize the results.
    pub fn collect_seq(self) -> anyhow::Result<Vec<T>> {
        Runner {
            mode: ExecMode::Sequential,
            ..Default::default()
        }
        .run_collect::<T>(&self.pipeline, self.id)
    }

    /// Execute the pipeline with partitioned parallel execution.
    ///
    /// `threads` caps the rayon pool size (global, first caller wins);
    /// `partitions` overrides how many chunks the source is split into.
    pub fn collect_par(
        self,
        threads: Option<usize>,
        partitions: Option<usize>,
    ) -> anyhow::Result<Vec<T>> {
        Runner {
            mode: ExecMode::Parallel { threads, partitions },
            ..Default::default()
        }
        .run_collect::<T>(&self.pipeline, self.id)
    }
}
