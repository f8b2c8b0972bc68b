use girder::from_vec;
use girder::testing::*;
use std::collections::HashMap;

#[test]
fn map_filter_flatmap_chain() -> anyhow::Result<()> {
    let p = TestPipeline::new();
    let lines = from_vec(
        &p,
        vec![
            "the quick brown fox".to_string(),
            "jumps over the lazy dog".to_string(),
        ],
    );

    let out = lines
        .flat_map(|s: &String| s.split_whitespace().map(str::to_string).collect::<Vec<_>>())
        .filter(|w: &String| w.len() >= 4)
        .map(|w: &String| w.to_uppercase())
        .collect_seq()?;

    assert_collections_equal(
        &out,
        &[
            "QUICK".to_string(),
            "BROWN".to_string(),
            "JUMPS".to_string(),
            "OVER".to_string(),
            "LAZY".to_string(),
        ],
    );
    Ok(())
}

#[test]
fn key_by_and_group_by_key() -> anyhow::Result<()> {
    let p = TestPipeline::new();
    let words = from_vec(&p, word_count_data());

    let grouped = words
        .flat_map(|s: &String| s.split_whitespace().map(str::to_string).collect::<Vec<_>>())
        .key_by(|w: &String| w.clone())
        .group_by_key()
        .collect_seq()?;

    let mut counts: HashMap<String, usize> = HashMap::new();
    for (k, vs) in grouped {
        counts.insert(k, vs.len());
    }
    assert_eq!(counts.get("hello"), Some(&3));
    assert_eq!(counts.get("world"), Some(&3));
    assert_eq!(counts.get("rust"), Some(&2));
    assert_eq!(counts.get("programming"), Some(&1));
    Ok(())
}

#[test]
fn map_values_and_filter_values() -> anyhow::Result<()> {
    let p = TestPipeline::new();
    let kv = from_vec(
        &p,
        vec![
            ("a".to_string(), 1u32),
            ("b".to_string(), 5),
            ("c".to_string(), 8),
        ],
    );

    let out = kv
        .map_values(|v: &u32| v * 2)
        .filter_values(|v: &u32| *v > 4)
        .collect_seq()?;

    assert_collections_equal(
        &out,
        &[("b".to_string(), 10u32), ("c".to_string(), 16u32)],
    );
    Ok(())
}

#[test]
fn stateless_seq_vs_par_equivalent() -> anyhow::Result<()> {
    let p = TestPipeline::new();
    let lines = from_vec(
        &p,
        (0..1000).map(|i| format!("w{i} w{i}")).collect::<Vec<_>>(),
    );
    let words = lines
        .flat_map(|s: &String| s.split_whitespace().map(str::to_string).collect::<Vec<_>>())
        .filter(|w: &String| w.len() >= 2);

    let a = words.clone().collect_seq()?;
    let b = words.collect_par(Some(4), Some(8))?;
    assert_collections_equal(&a, &b);
    Ok(())
}

#[test]
fn collect_is_collect_seq() -> anyhow::Result<()> {
    let p = TestPipeline::new();
    let out = from_vec(&p, vec![3i64, 1, 2]).collect()?;
    assert_collections_equal(&out, &[3, 1, 2]);
    Ok(())
}
