use girder::combiners::{Max, MaxF64, MeanF64, Min, MinF64, Sum};
use girder::testing::assert_kv_collections_equal;
use girder::{Count, OrdF64, Pipeline, from_vec};

#[test]
fn sum_min_max_per_key() -> anyhow::Result<()> {
    let p = Pipeline::default();
    let xs: Vec<i64> = (0..100).collect();

    let sums = from_vec(&p, xs.clone())
        .key_by(|x: &i64| x % 2)
        .combine_values(Sum::<i64>::new())
        .collect_par_sorted_by_key(Some(4), None)?;
    // evens 0+2+..+98 = 2450, odds 1+3+..+99 = 2500
    assert_kv_collections_equal(sums, vec![(0i64, 2450i64), (1, 2500)]);

    let mins = from_vec(&p, xs.clone())
        .key_by(|x: &i64| x % 2)
        .combine_values(Min::<i64>::new())
        .collect_seq_sorted_by_key()?;
    assert_kv_collections_equal(mins, vec![(0i64, 0i64), (1, 1)]);

    let maxs = from_vec(&p, xs)
        .key_by(|x: &i64| x % 2)
        .combine_values(Max::<i64>::new())
        .collect_seq_sorted_by_key()?;
    assert_kv_collections_equal(maxs, vec![(0i64, 98i64), (1, 99)]);
    Ok(())
}

#[test]
fn count_per_key() -> anyhow::Result<()> {
    let p = Pipeline::default();
    let words = vec!["a", "b", "a", "c", "b", "a"]
        .into_iter()
        .map(str::to_string)
        .collect::<Vec<_>>();

    let counts = from_vec(&p, words)
        .key_by(|w: &String| w.clone())
        .map_values(|_: &String| 1u64)
        .combine_values(Count)
        .collect_seq_sorted_by_key()?;

    assert_kv_collections_equal(
        counts,
        vec![
            ("a".to_string(), 3u64),
            ("b".to_string(), 2),
            ("c".to_string(), 1),
        ],
    );
    Ok(())
}

#[test]
fn mean_per_key() -> anyhow::Result<()> {
    let p = Pipeline::default();
    let xs: Vec<u32> = (1..=10).collect();

    let means = from_vec(&p, xs)
        .key_by(|x: &u32| x % 2)
        .combine_values(MeanF64)
        .collect_seq_sorted_by_key()?;

    // evens: (2+4+6+8+10)/5 = 6, odds: (1+3+5+7+9)/5 = 5
    assert_kv_collections_equal(means, vec![(0u32, 6.0f64), (1, 5.0)]);
    Ok(())
}

#[test]
fn min_max_with_ordf64_wrapper() -> anyhow::Result<()> {
    let p = Pipeline::default();
    let prices = vec![3.50f64, 4.00, 2.00, 2.00, 1.00];

    let lo = from_vec(&p, prices.clone())
        .map(|v: &f64| OrdF64::from(*v))
        .combine_globally(Min::<OrdF64>::new(), None)
        .collect_seq()?;
    assert_eq!(lo, vec![OrdF64::from(1.00)]);

    let hi = from_vec(&p, prices)
        .map(|v: &f64| OrdF64::from(*v))
        .combine_globally(Max::<OrdF64>::new(), None)
        .collect_seq()?;
    assert_eq!(hi, vec![OrdF64::from(4.00)]);
    Ok(())
}

#[test]
fn float_min_max_without_wrapper() -> anyhow::Result<()> {
    let p = Pipeline::default();
    let prices = vec![3.50f64, 4.00, 2.00, 2.00, 1.00];

    let lo = from_vec(&p, prices.clone())
        .combine_globally(MinF64, None)
        .collect_seq()?;
    let hi = from_vec(&p, prices)
        .combine_globally(MaxF64, None)
        .collect_seq()?;

    assert_eq!(lo, vec![1.00]);
    assert_eq!(hi, vec![4.00]);
    Ok(())
}

#[test]
fn lifted_combine_after_group_by_key() -> anyhow::Result<()> {
    let p = Pipeline::default();
    let xs: Vec<u32> = (1..=12).collect();

    let sums = from_vec(&p, xs)
        .key_by(|x: &u32| x % 3)
        .group_by_key()
        .combine_values_lifted(Sum::<u32>::new())
        .collect_seq_sorted_by_key()?;

    // 3+6+9+12 = 30, 1+4+7+10 = 22, 2+5+8+11 = 26
    assert_kv_collections_equal(sums, vec![(0u32, 30u32), (1, 22), (2, 26)]);
    Ok(())
}
