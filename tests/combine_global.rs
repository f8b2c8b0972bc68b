use girder::combiners::{MeanF64, Sum};
use girder::{Count, Pipeline, from_vec};

#[test]
fn global_sum_sequential() -> anyhow::Result<()> {
    let p = Pipeline::default();
    let input: Vec<u64> = (0..100).collect(); // 4950

    let out = from_vec(&p, input)
        .combine_globally(Sum::<u64>::default(), None)
        .collect_seq()?;

    assert_eq!(out, vec![4950]);
    Ok(())
}

#[test]
fn global_sum_parallel_with_fanout() -> anyhow::Result<()> {
    let p = Pipeline::default();
    let input: Vec<u64> = (0..10_000).collect(); // 49_995_000

    // small fanout over many partitions exercises multi-round merging
    let out = from_vec(&p, input)
        .combine_globally(Sum::<u64>::default(), Some(3))
        .collect_par(None, Some(32))?;

    assert_eq!(out, vec![49_995_000]);
    Ok(())
}

#[test]
fn global_mean() -> anyhow::Result<()> {
    let p = Pipeline::default();
    let out = from_vec(&p, vec![1u32, 2, 3, 4])
        .combine_globally(MeanF64, None)
        .collect_seq()?;

    assert_eq!(out.len(), 1);
    assert!((out[0] - 2.5).abs() < 1e-12);
    Ok(())
}

#[test]
fn global_count_produces_singleton_even_when_empty() -> anyhow::Result<()> {
    let p = Pipeline::default();
    let out = from_vec(&p, Vec::<u64>::new())
        .combine_globally(Count, None)
        .collect_seq()?;

    assert_eq!(out, vec![0u64]);
    Ok(())
}

#[test]
fn global_lifted_count() -> anyhow::Result<()> {
    let p = Pipeline::default();
    let input: Vec<u32> = (0..500).collect();

    let out = from_vec(&p, input)
        .combine_globally_lifted(Count, Some(4))
        .collect_par(None, Some(8))?;

    assert_eq!(out, vec![500u64]);
    Ok(())
}
