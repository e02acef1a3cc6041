//! Maintenance operations for an implicit binary heap stored in a slice.
//!
//! Element `n` has its children at `2n + 1` and `2n + 2`. A slice is a heap when no child
//! [outranks](Compare::outranks) its parent. Every operation comes in two forms: a `*_by` form
//! taking any [`Compare`], and a plain form using [`MaxFirst`], which keeps the largest element at
//! index 0.
//!
//! # Examples
//! ```
//! # use dsa_lib::algorithms::heap;
//! let mut values = vec![3, 1, 4, 1, 5];
//! heap::create_heap(&mut values);
//! assert_eq!(values[0], 5);
//!
//! values.push(9);
//! heap::insert_last(&mut values);
//! assert_eq!(values[0], 9);
//!
//! assert_eq!(heap::extract_top(&mut values), Some(&mut 9));
//! values.pop();
//! assert!(heap::is_heap(&values, 0));
//! ```

use super::compare::{Compare, MaxFirst};

/// Returns the index of the parent of `n`. `n` must not be the root.
pub const fn parent_of(n: usize) -> usize {
    (n - 1) / 2
}

pub const fn left_child_of(n: usize) -> usize {
    2 * n + 1
}

pub const fn right_child_of(n: usize) -> usize {
    2 * n + 2
}

/// Returns the children of `n` that exist in a heap of `len` elements. A child whose index would
/// overflow a `usize` doesn't exist.
fn children_of(n: usize, len: usize) -> impl Iterator<Item = usize> {
    let left = n.checked_mul(2).and_then(|i| i.checked_add(1));
    let right = left.and_then(|i| i.checked_add(1));
    [left, right].into_iter().flatten().filter(move |&child| child < len)
}

/// Rearranges `seq` into a heap in `O(n)`, by sifting down every non-leaf from the last one to the
/// root.
pub fn create_heap_by<T, C: Compare<T>>(seq: &mut [T], cmp: &C) {
    if seq.len() < 2 {
        return;
    }

    for n in (0..=parent_of(seq.len() - 1)).rev() {
        heapify_by(seq, n, cmp);
    }

    debug_assert!(is_heap_by(seq, 0, cmp));
}

pub fn create_heap<T: Ord>(seq: &mut [T]) {
    create_heap_by(seq, &MaxFirst)
}

/// Sifts the element at `n` down until neither of its children outranks it. Both subtrees of `n`
/// must already be heaps. An out of range `n` is ignored.
pub fn heapify_by<T, C: Compare<T>>(seq: &mut [T], mut n: usize, cmp: &C) {
    loop {
        let mut top = n;

        for child in children_of(n, seq.len()) {
            if cmp.outranks(&seq[child], &seq[top]) {
                top = child;
            }
        }

        if top == n {
            return;
        }

        seq.swap(n, top);
        n = top;
    }
}

pub fn heapify<T: Ord>(seq: &mut [T], n: usize) {
    heapify_by(seq, n, &MaxFirst)
}

/// Sifts the last element of `seq` up into place, after it has been appended to a heap.
pub fn insert_last_by<T, C: Compare<T>>(seq: &mut [T], cmp: &C) {
    let Some(mut n) = seq.len().checked_sub(1) else {
        return;
    };

    while n > 0 && cmp.outranks(&seq[n], &seq[parent_of(n)]) {
        seq.swap(n, parent_of(n));
        n = parent_of(n);
    }
}

pub fn insert_last<T: Ord>(seq: &mut [T]) {
    insert_last_by(seq, &MaxFirst)
}

/// Moves the top of the heap into the last slot and restores the heap over every slot before it.
/// Returns a reference to the old top in its new position, or [`None`] if `seq` is empty.
///
/// The caller is expected to remove the last slot afterwards (or, as heap sort does, to stop
/// treating it as part of the heap).
pub fn extract_top_by<'a, T, C: Compare<T>>(seq: &'a mut [T], cmp: &C) -> Option<&'a mut T> {
    let last = seq.len().checked_sub(1)?;

    seq.swap(0, last);
    let (heap, top) = seq.split_at_mut(last);
    heapify_by(heap, 0, cmp);

    top.first_mut()
}

pub fn extract_top<T: Ord>(seq: &mut [T]) -> Option<&mut T> {
    extract_top_by(seq, &MaxFirst)
}

/// Returns true if the subtree rooted at `start` is a heap. An empty subtree (including an out of
/// range `start`) is a heap.
///
/// The subtree is walked one level at a time: the descendants of `start` at each depth occupy a
/// single contiguous range of indices.
pub fn is_heap_by<T, C: Compare<T>>(seq: &[T], start: usize, cmp: &C) -> bool {
    let (mut lo, mut hi) = (start, start.saturating_add(1));

    while lo < seq.len() {
        for n in lo..hi.min(seq.len()) {
            for child in children_of(n, seq.len()) {
                if cmp.outranks(&seq[child], &seq[n]) {
                    return false;
                }
            }
        }

        (lo, hi) = (lo.saturating_mul(2).saturating_add(1), hi.saturating_mul(2).saturating_add(1));
    }

    true
}

pub fn is_heap<T: Ord>(seq: &[T], start: usize) -> bool {
    is_heap_by(seq, start, &MaxFirst)
}
