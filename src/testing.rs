//! Testing utilities for girder pipelines.
//!
//! - **Assertions** for comparing pipeline output with expected results,
//!   ordered or not.
//! - **Fixtures**: small pre-built datasets, including the grocery list used
//!   by the aggregation tests.
//! - [`TestPipeline`]: a [`Pipeline`] wrapper that exposes graph counts for
//!   asserting on pipeline shape.
//!
//! ```
//! use girder::from_vec;
//! use girder::testing::*;
//!
//! let p = TestPipeline::new();
//! let out = from_vec(&p, vec![1i32, 2, 3])
//!     .map(|x: &i32| x * 2)
//!     .collect_seq()
//!     .unwrap();
//! assert_collections_equal(&out, &[2, 4, 6]);
//! ```

pub mod assertions;
pub mod fixtures;

pub use assertions::*;
pub use fixtures::*;

use crate::Pipeline;

/// A test-focused wrapper around [`Pipeline`].
///
/// Derefs to [`Pipeline`], so it drops into any API taking `&Pipeline`, and
/// adds graph introspection for tests that assert on pipeline shape.
#[derive(Clone, Default)]
pub struct TestPipeline {
    pipeline: Pipeline,
}

impl TestPipeline {
    #[must_use]
    pub fn new() -> Self {
        Self {
            pipeline: Pipeline::default(),
        }
    }

    /// Number of nodes currently in the graph.
    #[must_use]
    pub fn node_count(&self) -> usize {
        let (nodes, _) = self.pipeline.snapshot();
        nodes.len()
    }

    /// Number of edges currently in the graph.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        let (_, edges) = self.pipeline.snapshot();
        edges.len()
    }
}

impl std::ops::Deref for TestPipeline {
    type Target = Pipeline;

    fn deref(&self) -> &Self::Target {
        &self.pipeline
    }
}

impl AsRef<Pipeline> for TestPipeline {
    fn as_ref(&self) -> &Pipeline {
        &self.pipeline
    }
}
