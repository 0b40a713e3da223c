#![cfg(feature = "persistent")]
//! Unit tests for PersistentOrderedSet.

use lexitree::persistent::{InvariantViolation, PersistentOrderedSet};
use rstest::rstest;
use std::collections::HashSet;
use std::ops::Bound;

fn set_of(elements: &[i32]) -> PersistentOrderedSet<i32> {
    elements.iter().copied().collect()
}

// =============================================================================
// Basic Construction Tests
// =============================================================================

#[rstest]
fn test_new_creates_empty_set() {
    let set: PersistentOrderedSet<i32> = PersistentOrderedSet::new();
    assert!(set.is_empty());
    assert_eq!(set.len(), 0);
    assert_eq!(set.to_sorted_vec(), Vec::<i32>::new());
    assert_eq!(set.iter().next(), None);
}

#[rstest]
fn test_default_creates_empty_set() {
    let set: PersistentOrderedSet<String> = PersistentOrderedSet::default();
    assert!(set.is_empty());
    assert_eq!(set.validate(), Ok(0));
}

#[rstest]
fn test_singleton_creates_set_with_one_element() {
    let set = PersistentOrderedSet::singleton(42);
    assert_eq!(set.len(), 1);
    assert!(set.contains(&42));
    assert_eq!(set.validate(), Ok(1));
}

// =============================================================================
// Insert Tests
// =============================================================================

#[rstest]
fn test_insert_with_duplicate_yields_sorted_unique_elements() {
    let set = PersistentOrderedSet::new().insert(5).insert(3).insert(7).insert(3);
    assert_eq!(set.to_sorted_vec(), vec![3, 5, 7]);
    assert_eq!(set.len(), 3);
}

#[rstest]
fn test_insert_strings() {
    let set = PersistentOrderedSet::new()
        .insert("banana".to_string())
        .insert("apple".to_string())
        .insert("cherry".to_string())
        .insert("apple".to_string());

    assert_eq!(set.to_sorted_vec(), vec!["apple", "banana", "cherry"]);
    assert!(set.contains("banana"));
    assert!(!set.contains("durian"));
}

#[rstest]
fn test_insert_leaves_previous_version_unchanged() {
    let version1 = PersistentOrderedSet::new().insert(10).insert(20);
    let version2 = version1.insert(15);

    assert_eq!(version1.to_sorted_vec(), vec![10, 20]);
    assert_eq!(version2.to_sorted_vec(), vec![10, 15, 20]);
    assert_eq!(version1.len(), 2);
    assert_eq!(version2.len(), 3);
}

#[rstest]
fn test_duplicate_insert_returns_same_version() {
    let set = set_of(&[4, 2, 6, 1, 3, 5, 7]);
    let again = set.insert(3);

    assert!(again.ptr_eq(&set));
    assert_eq!(again, set);
}

#[rstest]
fn test_branching_versions_are_independent() {
    let base = set_of(&[1, 2, 3]);
    let left = base.insert(0);
    let right = base.insert(4);

    assert_eq!(base.to_sorted_vec(), vec![1, 2, 3]);
    assert_eq!(left.to_sorted_vec(), vec![0, 1, 2, 3]);
    assert_eq!(right.to_sorted_vec(), vec![1, 2, 3, 4]);
    assert!(!left.contains(&4));
    assert!(!right.contains(&0));
}

#[rstest]
fn test_every_intermediate_version_is_retained() {
    let versions: Vec<PersistentOrderedSet<i32>> = (1..=50)
        .scan(PersistentOrderedSet::new(), |set, element| {
            *set = set.insert(element);
            Some(set.clone())
        })
        .collect();

    for (index, version) in versions.iter().enumerate() {
        let expected: Vec<i32> = (1..=i32::try_from(index + 1).unwrap()).collect();
        assert_eq!(version.to_sorted_vec(), expected);
        assert!(version.validate().is_ok());
    }
}

// =============================================================================
// Balance Tests
// =============================================================================

#[rstest]
#[case(1)]
#[case(7)]
#[case(100)]
#[case(1000)]
#[case(10_000)]
fn test_ascending_inserts_stay_balanced(#[case] count: u32) {
    let set: PersistentOrderedSet<u32> = (1..=count).collect();
    let bound = 2.0 * f64::from(count + 1).log2();

    assert_eq!(set.len(), count as usize);
    assert!(set.validate().is_ok());
    assert!(
        f64::from(u32::try_from(set.height()).unwrap()) <= bound,
        "height {} exceeds {bound}",
        set.height()
    );
}

#[rstest]
fn test_descending_inserts_stay_balanced() {
    let set: PersistentOrderedSet<i32> = (1..=1000).rev().collect();
    let black_height = set.validate().unwrap();

    assert_eq!(black_height, set.black_height());
    assert!(set.height() <= 2 * black_height);
}

#[rstest]
fn test_validate_passes_after_every_insert() {
    let mut set = PersistentOrderedSet::new();
    for element in [50, 25, 75, 10, 30, 60, 90, 5, 15, 27, 35, 55, 65, 85, 95, 1] {
        set = set.insert(element);
        assert_eq!(set.validate().map(|_| ()), Ok::<(), InvariantViolation>(()));
    }
}

// =============================================================================
// Query Tests
// =============================================================================

#[rstest]
fn test_min_and_max() {
    let set = set_of(&[8, 3, 11, 1, 6]);
    assert_eq!(set.min(), Some(&1));
    assert_eq!(set.max(), Some(&11));

    let empty: PersistentOrderedSet<i32> = PersistentOrderedSet::new();
    assert_eq!(empty.min(), None);
    assert_eq!(empty.max(), None);
}

#[rstest]
#[case(Bound::Included(3), Bound::Included(6), vec![3, 4, 5, 6])]
#[case(Bound::Excluded(3), Bound::Excluded(6), vec![4, 5])]
#[case(Bound::Unbounded, Bound::Excluded(3), vec![1, 2])]
#[case(Bound::Included(8), Bound::Unbounded, vec![8, 9])]
#[case(Bound::Included(20), Bound::Unbounded, vec![])]
#[case(Bound::Included(6), Bound::Included(3), vec![])]
fn test_range(#[case] start: Bound<i32>, #[case] end: Bound<i32>, #[case] expected: Vec<i32>) {
    let set: PersistentOrderedSet<i32> = (1..=9).collect();
    let collected: Vec<i32> = set.range((start, end)).copied().collect();
    assert_eq!(collected, expected);
}

// =============================================================================
// Iterator Tests
// =============================================================================

#[rstest]
fn test_iter_is_strictly_increasing() {
    let set = set_of(&[9, 2, 7, 4, 5, 1, 8, 3, 6, 2, 9]);
    let elements: Vec<&i32> = set.iter().collect();

    assert!(elements.windows(2).all(|pair| pair[0] < pair[1]));
    assert_eq!(set.iter().len(), 9);
}

#[rstest]
fn test_iter_reversed() {
    let set = set_of(&[3, 1, 2]);
    let reversed: Vec<i32> = set.iter().rev().copied().collect();
    assert_eq!(reversed, vec![3, 2, 1]);
}

#[rstest]
fn test_into_iter_owned_and_borrowed_agree() {
    let set = set_of(&[5, 1, 3]);
    let borrowed: Vec<i32> = (&set).into_iter().copied().collect();
    let owned: Vec<i32> = set.clone().into_iter().collect();

    assert_eq!(borrowed, owned);
    assert_eq!(set.len(), 3);
}

// =============================================================================
// Trait Implementation Tests
// =============================================================================

#[rstest]
fn test_equality_ignores_insertion_order() {
    let forward = set_of(&[1, 2, 3, 4]);
    let backward = set_of(&[4, 3, 2, 1]);

    assert_eq!(forward, backward);
    assert_ne!(forward, set_of(&[1, 2, 3]));
}

#[rstest]
fn test_equal_sets_hash_equally() {
    let mut sets = HashSet::new();
    sets.insert(set_of(&[1, 2, 3]));
    sets.insert(set_of(&[3, 2, 1]));
    sets.insert(set_of(&[1, 2]));

    assert_eq!(sets.len(), 2);
}

#[rstest]
fn test_display_and_debug() {
    let set = set_of(&[2, 1, 3]);
    assert_eq!(format!("{set}"), "{1, 2, 3}");
    assert_eq!(format!("{set:?}"), "{1, 2, 3}");

    let empty: PersistentOrderedSet<i32> = PersistentOrderedSet::new();
    assert_eq!(format!("{empty}"), "{}");
}
