#![cfg(test)]

use std::cmp::Ordering;
use std::panic::{self, AssertUnwindSafe};

use super::heap::*;
use super::search::*;
use super::sort::*;
use super::*;
use crate::collections::contiguous::Vector;
#[cfg(feature = "linked")]
use crate::collections::linked::LinkedList;

type Sort = fn(&mut [i32]);

const SORTS: [(&str, Sort); 6] = [
    ("bubble_sort", bubble_sort),
    ("selection_sort", selection_sort),
    ("insertion_sort", insertion_sort),
    ("merge_sort", merge_sort),
    ("quick_sort", quick_sort),
    ("heap_sort", heap_sort),
];

fn samples() -> Vec<Vec<i32>> {
    vec![
        vec![],
        vec![42],
        vec![2, 1],
        vec![1, 2, 3, 4, 5, 6, 7],
        vec![7, 6, 5, 4, 3, 2, 1],
        vec![0, 0, 0, 0, 0],
        vec![9, 2, 0, 1, 2, 3, 2, 4, 8, 7, 6, 0],
        vec![-50, 65, 0, 0, 35, 145, -100, -15, 100, -100, 200],
        vec![80, 75, -10, 20, 50, -60, -70, 75, 45, -10, -15, -10],
    ]
}

#[test]
fn test_child_and_parent_indices() {
    assert_eq!(left_child_of(0), 1);
    assert_eq!(right_child_of(0), 2);
    assert_eq!(left_child_of(3), 7);
    assert_eq!(right_child_of(3), 8);
    for n in 1..20 {
        assert_eq!(parent_of(left_child_of(n)), n);
        assert_eq!(parent_of(right_child_of(n)), n);
    }
}

#[test]
fn test_is_heap() {
    let empty: [i32; 0] = [];
    assert!(is_heap(&empty, 0), "An empty sequence is a heap.");
    assert!(is_heap(&[1], 0));
    assert!(is_heap(&[6, 5, 4, 3, 2, 1, 0], 0));
    assert!(is_heap(&[0, 0, 0, 0], 0));
    assert!(is_heap(&[2, 1], 0));
    assert!(!is_heap(&[1, 2], 0));
    assert!(!is_heap(&[6, 5, 4, 3, 2, 1, 7], 0), "A violation on the last level should be found.");

    assert!(is_heap_by(&[0, 2, 1, 4, 3, 6, 5], 0, &MinFirst));
    assert!(is_heap_by(&[2, 10, 3, 11, 12, 3, 12], 0, &MinFirst));
    assert!(!is_heap_by(&[1, 3, 2, 2, 4, 6, 5], 0, &MinFirst));
    assert!(!is_heap_by(&[1, 2, 3, 4, 5, 6, 0], 0, &MinFirst));
}

#[test]
fn test_is_heap_of_subtree() {
    // The root is out of order, but the subtree at 1 (holding 5, 3 and 2) is fine.
    let seq = [0, 5, 4, 3, 2, 1, 0];
    assert!(!is_heap(&seq, 0));
    assert!(is_heap(&seq, 1));
    assert!(is_heap(&seq, 2));
    assert!(is_heap(&seq, 100), "An out of range start is an empty subtree.");

    // A violation deep inside the subtree at 1: 9 is the child of 3, which descends from 1.
    let seq = [10, 8, 7, 3, 6, 5, 4, 9];
    assert!(!is_heap(&seq, 1));
    assert!(is_heap(&seq, 2), "The subtree at 2 doesn't contain index 7.");
}

#[test]
fn test_create_heap() {
    let mut seq = [9, 2, 0, 1, 2, 3, 2, 4, 8, 7, 6, 0];
    create_heap(&mut seq);
    assert!(is_heap(&seq, 0));
    assert_eq!(seq[0], 9, "The maximum should be at the root.");

    for mut sample in samples() {
        create_heap_by(&mut sample, &MinFirst);
        assert!(is_heap_by(&sample, 0, &MinFirst), "{sample:?} should be a min-heap.");
        if let Some(&top) = sample.first() {
            assert_eq!(Some(&top), sample.iter().min());
        }
    }
}

#[test]
fn test_heapify_restores_root() {
    let mut seq = [1, 9, 8, 7, 6, 5, 4];
    heapify(&mut seq, 0);
    assert!(is_heap(&seq, 0));
    assert_eq!(seq[0], 9);

    let mut seq = [3, 2, 1];
    heapify(&mut seq, 5);
    assert_eq!(seq, [3, 2, 1], "An out of range index should be ignored.");
}

#[test]
fn test_huge_indices_are_out_of_range() {
    let mut seq = [3, 2, 1];
    for n in [usize::MAX / 2, usize::MAX / 2 + 1, usize::MAX] {
        heapify(&mut seq, n);
        assert_eq!(seq, [3, 2, 1], "An index whose children overflow should be ignored.");
        assert!(is_heap(&seq, n), "A subtree past the end is always a heap.");
    }

    let mut seq = [1, 2, 3];
    heapify_by(&mut seq, usize::MAX, &MinFirst);
    assert_eq!(seq, [1, 2, 3]);
}

#[test]
fn test_insert_last() {
    for sample in samples() {
        let mut seq = sample.clone();
        create_heap(&mut seq);
        seq.push(1000);
        insert_last(&mut seq);
        assert!(is_heap(&seq, 0));
        assert_eq!(seq[0], 1000, "A new maximum should rise to the root.");
    }

    let mut empty: [u8; 0] = [];
    insert_last(&mut empty);
}

#[test]
fn test_extract_top() {
    for sample in samples() {
        let mut seq = sample.clone();
        create_heap_by(&mut seq, &MinFirst);

        let expected = sample.iter().min().copied();
        assert_eq!(extract_top_by(&mut seq, &MinFirst).copied(), expected);
        assert_eq!(seq.last().copied(), expected, "The old top should be moved to the end.");

        seq.pop();
        assert!(is_heap_by(&seq, 0, &MinFirst));
    }

    let mut empty: [u8; 0] = [];
    assert_eq!(extract_top(&mut empty), None);
}

#[test]
fn test_closure_comparator() {
    let by_len = |a: &&str, b: &&str| a.len() > b.len();
    let mut words = ["a", "abcd", "ab", "abc"];
    create_heap_by(&mut words, &by_len);
    assert_eq!(words[0], "abcd");

    heap_sort_by(&mut words, &by_len);
    assert_eq!(words, ["a", "ab", "abc", "abcd"]);
}

#[test]
fn test_sorts_match_reference() {
    for (name, sort) in SORTS {
        for sample in samples() {
            let mut expected = sample.clone();
            expected.sort();

            let mut actual = sample.clone();
            sort(&mut actual);
            assert_eq!(actual, expected, "{name} failed to sort {sample:?}.");
        }
    }
}

#[test]
fn test_sorts_on_vector_and_strings() {
    let mut vec = Vector::from(["pear", "apple", "fig", "apple"]);
    merge_sort(&mut vec);
    assert_eq!(&*vec, &["apple", "apple", "fig", "pear"]);

    let mut owned: Vec<String> = ["c", "a", "b"].map(String::from).into();
    quick_sort(&mut owned);
    assert_eq!(owned, ["a", "b", "c"]);
}

/// Orders by `key` only, so that `tag` can show whether equal keys kept their order.
#[derive(Debug, Clone, Copy)]
struct Keyed {
    key: u8,
    tag: usize,
}

impl PartialEq for Keyed {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for Keyed {}

impl PartialOrd for Keyed {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Keyed {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

#[test]
fn test_stable_sorts_keep_order_of_equal_keys() {
    let keys = [3, 1, 2, 1, 3, 2, 1, 0, 2];
    let input: Vec<Keyed> = keys.iter().enumerate().map(|(tag, &key)| Keyed { key, tag }).collect();

    let stable: [(&str, fn(&mut [Keyed])); 3] = [
        ("bubble_sort", bubble_sort),
        ("insertion_sort", insertion_sort),
        ("merge_sort", merge_sort),
    ];

    for (name, sort) in stable {
        let mut actual = input.clone();
        sort(&mut actual);

        let tags: Vec<(u8, usize)> = actual.iter().map(|k| (k.key, k.tag)).collect();
        assert_eq!(
            tags,
            [(0, 7), (1, 1), (1, 3), (1, 6), (2, 2), (2, 5), (2, 8), (3, 0), (3, 4)],
            "{name} should be stable."
        );
    }
}

/// Panics when compared once a shared budget of comparisons has run out.
#[derive(Debug)]
struct Fragile<'a> {
    value: i32,
    budget: &'a std::cell::Cell<usize>,
}

impl PartialEq for Fragile<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for Fragile<'_> {}

impl PartialOrd for Fragile<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Fragile<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        let left = self.budget.get();
        assert!(left > 0, "comparison budget exhausted");
        self.budget.set(left - 1);
        self.value.cmp(&other.value)
    }
}

#[test]
fn test_merge_sort_is_panic_safe() {
    let values = [9, 4, 7, 1, 8, 2, 6, 3, 5, 0];

    for budget in 0..25 {
        let budget = std::cell::Cell::new(budget);
        let mut seq: Vec<Fragile> = values.iter().map(|&value| Fragile { value, budget: &budget }).collect();

        let _ = panic::catch_unwind(AssertUnwindSafe(|| merge_sort(&mut seq)));

        let mut seen: Vec<i32> = seq.iter().map(|f| f.value).collect();
        seen.sort();
        assert_eq!(seen, [0, 1, 2, 3, 4, 5, 6, 7, 8, 9], "Every item should still be present once.");
    }
}

#[test]
fn test_linear_search() {
    let cases: [(i32, &[i32]); 9] = [
        (0, &[]),
        (10, &[10]),
        (30, &[20]),
        (15, &[15, 10]),
        (45, &[10, 30]),
        (0, &[-10, 0, -30]),
        (-10, &[90, -35, 15]),
        (0, &[-50, 65, 0, 0, 35, 145, -100, -15, 100, -100, 200]),
        (10, &[80, 75, -10, 20, 50, -60, -70, 75, 45, -10, -15, -10]),
    ];

    for (key, data) in cases {
        match linear_search(data, &key) {
            Some(at) => {
                assert_eq!(data[at], key);
                assert!(!data[..at].contains(&key), "The first match should be returned.");
            },
            None => assert!(!data.contains(&key), "{key} is in {data:?} but wasn't found."),
        }
    }

    let words = Vector::from([String::from("to"), String::from("be")]);
    assert_eq!(linear_search(words, "be"), Some(1), "Owned items should be compared via Borrow.");
}

#[cfg(feature = "linked")]
#[test]
fn test_linear_search_list() {
    let list = LinkedList::from([4, 8, 15, 16, 23, 42]);
    assert_eq!(linear_search(&list, &16), Some(3));
    assert_eq!(linear_search(&list, &5), None);
}

#[test]
fn test_binary_search() {
    let cases: [(i32, &[i32]); 5] = [
        (0, &[]),
        (10, &[10]),
        (30, &[20]),
        (-5, &[-55, -15, -10, -5, -5, 0, 0, 0, 15, 20, 30, 45, 70]),
        (-5, &[-70, -60, -40, 0, 15, 40, 80, 80, 85, 85, 90, 100]),
    ];

    for (key, data) in cases {
        match binary_search(data, &key) {
            Some(at) => assert_eq!(data[at], key),
            None => assert!(!data.contains(&key), "{key} is in {data:?} but wasn't found."),
        }
    }

    let sorted: Vec<i32> = (0..100).map(|i| i * 2).collect();
    for (at, value) in sorted.iter().enumerate() {
        assert_eq!(binary_search(&sorted, value), Some(at));
        assert_eq!(binary_search(&sorted, &(value + 1)), None);
    }
}

// proptest doesn't run under miri with default config
#[cfg(all(not(miri), test))]
mod proptests {
    use proptest::prelude::*;

    use super::*;

    proptest! {
        #[test]
        fn sorts_match_reference(sample in prop::collection::vec(-50_i32..50, 0..64)) {
            let mut expected = sample.clone();
            expected.sort();

            for (name, sort) in SORTS {
                let mut actual = sample.clone();
                sort(&mut actual);
                prop_assert_eq!(&actual, &expected, "{} failed", name);
            }
        }

        #[test]
        fn create_heap_holds_property(sample in prop::collection::vec(any::<i16>(), 0..64)) {
            let mut max = sample.clone();
            create_heap(&mut max);
            prop_assert!(is_heap(&max, 0));
            prop_assert_eq!(max.first(), sample.iter().max());

            let mut min = sample.clone();
            create_heap_by(&mut min, &MinFirst);
            prop_assert!(is_heap_by(&min, 0, &MinFirst));
            prop_assert_eq!(min.first(), sample.iter().min());
        }

        #[test]
        fn search_finds_present_keys(mut sample in prop::collection::vec(0_u8..32, 0..32), key in 0_u8..32) {
            let linear = linear_search(&sample, &key);
            prop_assert_eq!(linear, sample.iter().position(|&v| v == key));

            sample.sort();
            match binary_search(&sample, &key) {
                Some(at) => {
                    prop_assert_eq!(sample[at], key);
                },
                None => {
                    prop_assert!(!sample.contains(&key));
                },
            }
        }
    }
}
