//! Searching for a single key.

use std::borrow::Borrow;
use std::cmp::Ordering;

/// Returns the position of the first item of `iter` equal to `key`, or [`None`] if there is no
/// such item. Works on anything that iterates over values or references to values, such as a
/// slice, a [`Vector`](crate::collections::contiguous::Vector) or a borrowed
/// [`LinkedList`](crate::collections::linked::LinkedList).
///
/// # Examples
/// ```
/// # use dsa_lib::algorithms::search::linear_search;
/// # use dsa_lib::collections::linked::LinkedList;
/// let list = LinkedList::from([15, 10, 15]);
/// assert_eq!(linear_search(&list, &15), Some(0));
/// assert_eq!(linear_search(&list, &20), None);
/// assert_eq!(linear_search([1, 2, 3], &3), Some(2));
/// ```
pub fn linear_search<I, T>(iter: I, key: &T) -> Option<usize>
where
    I: IntoIterator,
    I::Item: Borrow<T>,
    T: PartialEq + ?Sized,
{
    iter.into_iter().position(|item| item.borrow() == key)
}

/// Returns the position of some item of `seq` equal to `key`, or [`None`] if there is no such item.
/// When several items are equal to `key`, any one of their positions may be returned.
///
/// `seq` must be sorted in ascending order, otherwise the result is unspecified (but still a valid
/// position or [`None`]). Takes `O(log n)` comparisons.
///
/// # Examples
/// ```
/// # use dsa_lib::algorithms::search::binary_search;
/// let sorted = [-55, -15, -10, -5, 0, 15, 20];
/// assert_eq!(binary_search(&sorted, &-5), Some(3));
/// assert_eq!(binary_search(&sorted, &10), None);
/// ```
pub fn binary_search<T: Ord>(seq: &[T], key: &T) -> Option<usize> {
    // Searches the half-open range lo..hi.
    let (mut lo, mut hi) = (0, seq.len());

    while lo < hi {
        let mid = lo + (hi - lo) / 2;

        match seq[mid].cmp(key) {
            Ordering::Less => lo = mid + 1,
            Ordering::Greater => hi = mid,
            Ordering::Equal => return Some(mid),
        }
    }

    None
}
