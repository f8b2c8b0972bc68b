//! Assertions for comparing pipeline outputs against expected results.
//!
//! These panic with messages that show both collections in full, which makes
//! pipeline test failures readable without re-running under a debugger.

use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;

/// Assert two collections are equal element by element, in order.
///
/// ```
/// use girder::testing::assert_collections_equal;
///
/// assert_collections_equal(&[1, 2, 3], &[1, 2, 3]);
/// ```
pub fn assert_collections_equal<T: Debug + PartialEq>(actual: &[T], expected: &[T]) {
    assert_eq!(
        actual.len(),
        expected.len(),
        "collection length mismatch:\n  expected ({}): {expected:?}\n  actual ({}): {actual:?}",
        expected.len(),
        actual.len()
    );
    for (i, (a, e)) in actual.iter().zip(expected.iter()).enumerate() {
        assert_eq!(
            a, e,
            "collection mismatch at index {i}:\n  expected: {e:?}\n  actual: {a:?}\n  full expected: {expected:?}\n  full actual: {actual:?}"
        );
    }
}

/// Assert two collections hold the same elements, ignoring order.
///
/// Useful after parallel execution or hash-based grouping, where output
/// order is not promised.
pub fn assert_collections_unordered_equal<T: Debug + Eq + Hash>(actual: &[T], expected: &[T]) {
    assert_eq!(
        actual.len(),
        expected.len(),
        "collection length mismatch:\n  expected ({}): {expected:?}\n  actual ({}): {actual:?}",
        expected.len(),
        actual.len()
    );

    let actual_set: HashSet<_> = actual.iter().collect();
    let expected_set: HashSet<_> = expected.iter().collect();
    if actual_set != expected_set {
        let missing: Vec<_> = expected_set.difference(&actual_set).collect();
        let extra: Vec<_> = actual_set.difference(&expected_set).collect();
        panic!(
            "collection content mismatch:\n  missing: {missing:?}\n  extra: {extra:?}\n  expected: {expected:?}\n  actual: {actual:?}"
        );
    }
}

/// Assert two `(K, V)` collections are equal after sorting by key.
///
/// The usual comparison for grouped or combined output, where key order
/// varies between runs.
pub fn assert_kv_collections_equal<K, V>(mut actual: Vec<(K, V)>, mut expected: Vec<(K, V)>)
where
    K: Debug + Ord,
    V: Debug + PartialEq,
{
    actual.sort_by(|a, b| a.0.cmp(&b.0));
    expected.sort_by(|a, b| a.0.cmp(&b.0));

    assert_eq!(
        actual.len(),
        expected.len(),
        "collection length mismatch:\n  expected ({}): {expected:?}\n  actual ({}): {actual:?}",
        expected.len(),
        actual.len()
    );
    for (i, ((ak, av), (ek, ev))) in actual.iter().zip(expected.iter()).enumerate() {
        assert!(
            ak == ek && av == ev,
            "key-value mismatch at sorted index {i}:\n  expected: ({ek:?}, {ev:?})\n  actual: ({ak:?}, {av:?})"
        );
    }
}

/// Assert a collection has exactly `expected` elements.
pub fn assert_collection_size<T: Debug>(actual: &[T], expected: usize) {
    assert_eq!(
        actual.len(),
        expected,
        "collection size mismatch: expected {expected}, got {}:\n  {actual:?}",
        actual.len()
    );
}

/// Assert every element satisfies `pred`.
pub fn assert_all<T: Debug>(actual: &[T], pred: impl Fn(&T) -> bool) {
    for (i, item) in actual.iter().enumerate() {
        assert!(pred(item), "predicate failed at index {i}: {item:?}");
    }
}
