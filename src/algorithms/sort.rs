//! Comparison sorts. Every function sorts a slice in place into ascending order.
//!
//! # Time Complexity
//! For this analysis of time complexity, variables are defined as follows:
//! - `n`: The number of items in the slice.
//!
//! | Function | Complexity | Stable | Extra Memory |
//! |-|-|-|-|
//! | `bubble_sort` | `O(n^2)`, `O(n)` when sorted | yes | `O(1)` |
//! | `selection_sort` | `O(n^2)` | no | `O(1)` |
//! | `insertion_sort` | `O(n^2)`, `O(n)` when sorted | yes | `O(1)` |
//! | `merge_sort` | `O(n log n)` | yes | `O(n)` |
//! | `quick_sort` | `O(n log n)` average, `O(n^2)` worst | no | `O(log n)` |
//! | `heap_sort` | `O(n log n)` | no | `O(1)` |

use std::mem;
use std::ptr;

use super::compare::{Compare, MaxFirst};
use super::heap;
use crate::collections::contiguous::Vector;

/// Repeatedly swaps adjacent items that are out of order, stopping as soon as a pass makes no
/// swaps.
///
/// # Examples
/// ```
/// # use dsa_lib::algorithms::sort::bubble_sort;
/// let mut values = [4, 2, 5, 1, 3];
/// bubble_sort(&mut values);
/// assert_eq!(values, [1, 2, 3, 4, 5]);
/// ```
pub fn bubble_sort<T: Ord>(seq: &mut [T]) {
    for end in (1..seq.len()).rev() {
        let mut swapped = false;

        for i in 0..end {
            if seq[i + 1] < seq[i] {
                seq.swap(i, i + 1);
                swapped = true;
            }
        }

        if !swapped {
            break;
        }
    }
}

/// Swaps the smallest remaining item into each position in turn.
pub fn selection_sort<T: Ord>(seq: &mut [T]) {
    for i in 0..seq.len() {
        let mut min = i;
        for j in (i + 1)..seq.len() {
            if seq[j] < seq[min] {
                min = j;
            }
        }
        seq.swap(i, min);
    }
}

/// Grows a sorted prefix one item at a time, rotating each new item back to its place.
pub fn insertion_sort<T: Ord>(seq: &mut [T]) {
    for i in 1..seq.len() {
        let mut at = i;
        while at > 0 && seq[i] < seq[at - 1] {
            at -= 1;
        }
        seq[at..=i].rotate_right(1);
    }
}

/// Sorts both halves recursively, then merges them. A single buffer of `n / 2` slots is allocated
/// up front and shared by every merge.
///
/// If a comparison panics, every item is still in the slice exactly once, although in an
/// unspecified order.
///
/// # Examples
/// ```
/// # use dsa_lib::algorithms::sort::merge_sort;
/// let mut values = [5, 3, 9, 3, 1];
/// merge_sort(&mut values);
/// assert_eq!(values, [1, 3, 3, 5, 9]);
/// ```
pub fn merge_sort<T: Ord>(seq: &mut [T]) {
    if seq.len() < 2 {
        return;
    }

    let mut buf: Vector<T> = Vector::with_cap(seq.len() / 2);
    // The buffer keeps a length of 0 throughout, so it only ever frees its allocation.
    merge_sort_into(seq, buf.as_mut_ptr());
}

fn merge_sort_into<T: Ord>(seq: &mut [T], buf: *mut T) {
    if seq.len() < 2 {
        return;
    }

    let mid = seq.len() / 2;
    merge_sort_into(&mut seq[..mid], buf);
    merge_sort_into(&mut seq[mid..], buf);

    // SAFETY: buf has room for seq.len() / 2 == mid items and doesn't overlap seq.
    unsafe { merge(seq, mid, buf); }
}

/// The part of a merge that is still waiting in the buffer, along with the gap in the slice that
/// it will fill. Dropping it moves the buffered items into the gap, which also happens when a
/// comparison panics.
struct MergeHole<T> {
    src: *const T,
    dest: *mut T,
    len: usize,
}

impl<T> Drop for MergeHole<T> {
    fn drop(&mut self) {
        // SAFETY: src holds len items that were moved out of the slice, and dest is the start of a
        // gap of exactly len slots that they belong in.
        unsafe { ptr::copy_nonoverlapping(self.src, self.dest, self.len); }
    }
}

/// Merges the sorted runs `seq[..mid]` and `seq[mid..]`.
///
/// # Safety
/// `buf` must be valid for writes of `mid` items and must not overlap `seq`.
unsafe fn merge<T: Ord>(seq: &mut [T], mid: usize, buf: *mut T) {
    let base = seq.as_mut_ptr();
    let mut right_len = seq.len() - mid;

    // SAFETY: The left run is moved into buf, and from then on every slot of seq is either filled
    // or part of the hole. dest + hole.len always equals right, so every copy targets a slot whose
    // item has already been moved.
    unsafe {
        ptr::copy_nonoverlapping(base, buf, mid);

        let mut hole = MergeHole {
            src: buf,
            dest: base,
            len: mid,
        };
        let mut right = base.add(mid);

        while hole.len > 0 && right_len > 0 {
            // Taking from the left on ties keeps the sort stable.
            if *right < *hole.src {
                ptr::copy_nonoverlapping(right, hole.dest, 1);
                right = right.add(1);
                right_len -= 1;
            } else {
                ptr::copy_nonoverlapping(hole.src, hole.dest, 1);
                hole.src = hole.src.add(1);
                hole.len -= 1;
            }
            hole.dest = hole.dest.add(1);
        }

        // Any remaining right items are already in place. Dropping hole moves the remaining left
        // items in front of them.
    }
}

/// Partitions around the last item, then sorts the smaller side recursively and the larger side
/// in a loop, so the recursion depth stays at `O(log n)`.
///
/// # Examples
/// ```
/// # use dsa_lib::algorithms::sort::quick_sort;
/// let mut values = [0, -3, 7, 7, 2, -3];
/// quick_sort(&mut values);
/// assert_eq!(values, [-3, -3, 0, 2, 7, 7]);
/// ```
pub fn quick_sort<T: Ord>(mut seq: &mut [T]) {
    while seq.len() > 1 {
        let split = partition(seq);
        let (less, rest) = mem::take(&mut seq).split_at_mut(split);
        // rest[0] is the pivot, which is already in its final place.
        let greater = &mut rest[1..];

        if less.len() < greater.len() {
            quick_sort(less);
            seq = greater;
        } else {
            quick_sort(greater);
            seq = less;
        }
    }
}

/// Moves every item less than the last one to the front, then places the last one directly after
/// them. Returns its new index.
fn partition<T: Ord>(seq: &mut [T]) -> usize {
    let pivot = seq.len() - 1;
    let mut store = 0;

    for i in 0..pivot {
        if seq[i] < seq[pivot] {
            seq.swap(i, store);
            store += 1;
        }
    }

    seq.swap(store, pivot);
    store
}

/// Builds a max-heap, then repeatedly extracts the top into the tail of the shrinking heap.
pub fn heap_sort<T: Ord>(seq: &mut [T]) {
    heap_sort_by(seq, &MaxFirst);
}

/// Heap sort ordered by `cmp`: the item that would be at the top of the heap ends up last.
pub fn heap_sort_by<T, C: Compare<T>>(seq: &mut [T], cmp: &C) {
    heap::create_heap_by(seq, cmp);

    for end in (2..=seq.len()).rev() {
        heap::extract_top_by(&mut seq[..end], cmp);
    }
}
