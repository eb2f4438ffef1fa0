#![cfg(feature = "rayon")]

//! Integration tests for rayon-driven split iteration.

use rayon::prelude::*;
use rstest::rstest;
use seqlist::prelude::*;

// =============================================================================
// Agreement with sequential traversal
// =============================================================================

#[rstest]
#[case(0)]
#[case(1)]
#[case(1000)]
#[case(100_000)]
fn test_array_list_parallel_sum(#[case] length: u64) {
    let list: ArrayList<u64> = (0..length).collect();
    let sum: u64 = par_split(&list).copied().sum();
    assert_eq!(sum, list.iter().sum::<u64>());
}

#[rstest]
#[case(0)]
#[case(1)]
#[case(1000)]
#[case(100_000)]
fn test_linked_list_parallel_sum(#[case] length: u64) {
    let list: LinkedList<u64> = (0..length).collect();
    let sum: u64 = par_split(&list).copied().sum();
    assert_eq!(sum, list.iter().sum::<u64>());
}

#[rstest]
fn test_parallel_count_matches_length() {
    let list: LinkedList<i32> = (0..50_000).collect();
    assert_eq!(par_split(&list).count(), 50_000);
}

#[rstest]
fn test_parallel_collect_keeps_order() {
    let list: LinkedList<i32> = (0..20_000).collect();
    let mut collected: Vec<i32> = par_split(&list).copied().collect();
    let sequential: Vec<i32> = list.iter().copied().collect();
    collected.sort_unstable();
    assert_eq!(collected, sequential);
}

#[rstest]
fn test_parallel_over_view() {
    let mut list: ArrayList<u64> = (0..10_000).collect();
    let view = list.subview(100, 200).unwrap();
    let sum: u64 = par_split(&view).copied().sum();
    assert_eq!(sum, (100..200).sum::<u64>());
}

#[rstest]
fn test_parallel_with_custom_policy() {
    let list: LinkedList<u64> = (1..=4096).collect();
    let split = list.split_iter_with(SplitPolicy::new(16, 256));
    let maximum = ParallelSplit::new(split).copied().max();
    assert_eq!(maximum, Some(4096));
}

#[rstest]
fn test_parallel_any_finds_element() {
    let list: ImmutableList<i32> = (0..10_000).collect();
    assert!(par_split(&list).any(|element| *element == 9_999));
    assert!(!par_split(&list).any(|element| *element < 0));
}
