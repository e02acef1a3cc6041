#![cfg(test)]

use std::iter;

use super::*;
use crate::algorithms::heap::is_heap;
use crate::util::alloc::{CountedDrop, ZeroSizedType};

#[test]
fn test_push_and_pop() {
    let mut heap = Heap::new();
    assert!(heap.is_empty());
    assert_eq!(heap.top(), None, "An empty heap has no top.");
    assert_eq!(heap.pop(), None, "Popping an empty heap should return None.");

    heap.push(47);
    heap.push(48);
    assert_eq!(heap.len(), 2);
    assert_eq!(heap.top(), Some(&48));
    assert_eq!(heap.pop(), Some(48));
    assert_eq!(heap.top(), Some(&47));
    assert_eq!(heap.pop(), Some(47));
    assert!(heap.is_empty());
}

#[test]
fn test_pops_in_order() {
    let mut heap: MaxHeap<_> = [9, 2, 0, 1, 2, 3, 2, 4, 8, 7, 6, 0].into_iter().collect();
    assert!(is_heap(heap.as_slice(), 0), "Collecting should build a heap.");

    let popped: Vec<_> = iter::from_fn(|| heap.pop()).collect();
    assert_eq!(popped, [9, 8, 7, 6, 4, 3, 2, 2, 2, 1, 0, 0]);
}

#[test]
fn test_min_heap() {
    let mut heap = MinHeap::default();
    heap.extend([5, -1, 12, 3, -1]);
    assert_eq!(heap.top(), Some(&-1), "A min-heap should keep the smallest value on top.");

    let popped: Vec<_> = iter::from_fn(|| heap.pop()).collect();
    assert_eq!(popped, [-1, -1, 3, 5, 12]);
}

#[test]
fn test_closure_comparator() {
    let mut heap = Heap::with_comparator(|a: &(u8, &str), b: &(u8, &str)| a.0 < b.0);
    heap.push((3, "third"));
    heap.push((1, "first"));
    heap.push((2, "second"));

    assert_eq!(heap.pop().map(|(_, name)| name), Some("first"));
    assert_eq!(heap.pop().map(|(_, name)| name), Some("second"));
    assert_eq!(heap.pop().map(|(_, name)| name), Some("third"));
}

#[test]
fn test_vec_backing_store() {
    let mut heap: Heap<i32, MaxFirst, Vec<i32>> = Heap::from(vec![1, 5, 3]);
    assert_eq!(heap.top(), Some(&5));

    heap.push(7);
    assert_eq!(heap.pop(), Some(7));

    let store = heap.into_inner();
    assert_eq!(store.len(), 3);
    assert_eq!(store[0], 5, "The backing store should still be in heap order.");
}

#[test]
fn test_into_sorted() {
    let heap: MaxHeap<_> = [4, 1, 3, 1, 5, 9, 2, 6].into_iter().collect();
    assert_eq!(&*heap.into_sorted(), &[1, 1, 2, 3, 4, 5, 6, 9]);

    let heap: MinHeap<_> = [4, 1, 3, 1, 5].into_iter().collect();
    assert_eq!(&*heap.into_sorted(), &[5, 4, 3, 1, 1], "A min-heap sorts into descending order.");

    let empty: MaxHeap<u8> = Heap::new();
    assert!(empty.into_sorted().is_empty());
}

#[test]
fn test_clear_and_drop() {
    let counter = CountedDrop::new();
    let mut heap = Heap::with_comparator(|_: &CountedDrop, _: &CountedDrop| false);
    heap.extend(iter::repeat_with(|| counter.clone()).take(6));

    drop(heap.pop());
    assert_eq!(counter.drops(), 1, "A popped element should be moved out, then dropped once.");

    heap.clear();
    assert_eq!(counter.drops(), 6, "Clearing should drop every remaining element.");

    heap.extend(iter::repeat_with(|| counter.clone()).take(3));
    drop(heap);
    assert_eq!(counter.drops(), 9, "Dropping the heap should drop its elements.");
}

#[test]
fn test_zst_support() {
    let mut heap = Heap::new();
    for _ in 0..5 {
        heap.push(ZeroSizedType);
    }
    assert_eq!(heap.len(), 5);
    assert_eq!(heap.pop(), Some(ZeroSizedType));
    assert_eq!(heap.len(), 4);
}

#[test]
fn test_clone_and_debug() {
    let heap: MaxHeap<_> = [1, 3, 2].into_iter().collect();
    let mut copy = heap.clone();
    copy.push(10);

    assert_eq!(heap.top(), Some(&3), "Pushing to a clone shouldn't affect the original.");
    assert_eq!(copy.top(), Some(&10));
    assert_eq!(format!("{heap:?}"), "Heap { contents: [3, 1, 2], len: 3 }");
}

// proptest doesn't run under miri with default config
#[cfg(all(not(miri), test))]
mod proptests {
    use proptest::prelude::*;

    use super::*;

    #[derive(Debug, Clone)]
    enum Transition {
        Push(i16),
        Pop,
    }

    fn transition() -> impl Strategy<Value = Transition> {
        prop_oneof![
            3 => any::<i16>().prop_map(Transition::Push),
            2 => Just(Transition::Pop),
        ]
    }

    proptest! {
        #[test]
        fn heap_matches_sorted_model(
            transitions in prop::collection::vec(transition(), 0..200),
        ) {
            let mut heap = MinHeap::default();
            let mut model: Vec<i16> = Vec::new();

            for transition in transitions {
                match transition {
                    Transition::Push(value) => {
                        heap.push(value);
                        model.push(value);
                    },
                    Transition::Pop => {
                        model.sort_unstable_by(|a, b| b.cmp(a));
                        prop_assert_eq!(heap.pop(), model.pop());
                    },
                }

                prop_assert_eq!(heap.len(), model.len());
                prop_assert_eq!(heap.top(), model.iter().min());
                prop_assert!(crate::algorithms::heap::is_heap_by(heap.as_slice(), 0, &MinFirst));
            }
        }

        #[test]
        fn into_sorted_sorts(values in prop::collection::vec(any::<u32>(), 0..100)) {
            let heap: MaxHeap<_> = values.iter().copied().collect();
            let mut expected = values;
            expected.sort();

            prop_assert_eq!(&*heap.into_sorted(), expected.as_slice());
        }
    }
}
