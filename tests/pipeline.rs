//! Pipeline graph shape and scoping.

use girder::testing::TestPipeline;
use girder::{Pipeline, from_vec};

#[test]
fn fresh_pipeline_is_empty() {
    let p = TestPipeline::new();
    assert_eq!(p.node_count(), 0);
    assert_eq!(p.edge_count(), 0);
}

#[test]
fn clones_share_the_graph() {
    let p1 = TestPipeline::new();
    let _data = from_vec(&p1, vec![1, 2, 3]);

    let p2 = p1.clone();
    assert_eq!(p1.node_count(), p2.node_count());

    let _more = from_vec(&p2, vec![4, 5, 6]);
    assert_eq!(p1.node_count(), 2);
}

#[test]
fn transforms_append_nodes_and_edges() {
    let p = TestPipeline::new();

    let data = from_vec(&p, vec![1i32, 2, 3, 4, 5]);
    let mapped = data.map(|x: &i32| x * 2);
    let _filtered = mapped.filter(|x: &i32| *x > 2);

    // source + map + filter
    assert_eq!(p.node_count(), 3);
    assert_eq!(p.edge_count(), 2);
}

#[test]
fn grouping_adds_a_barrier_node() {
    let p = TestPipeline::new();

    let _grouped = from_vec(&p, vec![1i32, 2, 3, 4])
        .key_by(|x: &i32| x % 2)
        .group_by_key();

    // source + key_by map + group_by_key
    assert_eq!(p.node_count(), 3);
    assert_eq!(p.edge_count(), 2);
}

#[test]
fn scope_returns_the_closure_result() {
    let total: i64 = Pipeline::scope(|p| {
        from_vec(p, vec![1i64, 2, 3])
            .collect_seq()
            .map(|v| v.iter().sum())
    })
    .unwrap();
    assert_eq!(total, 6);
}

#[test]
fn independent_chains_on_one_pipeline() -> anyhow::Result<()> {
    let p = TestPipeline::new();

    let a = from_vec(&p, vec![1u32, 2, 3]).map(|x: &u32| x + 1);
    let b = from_vec(&p, vec![10u32, 20]).map(|x: &u32| x * 10);

    assert_eq!(a.collect_seq()?, vec![2, 3, 4]);
    assert_eq!(b.collect_seq()?, vec![100, 200]);
    Ok(())
}
