/// A strict ordering that decides which of two values belongs nearer the top of a heap.
///
/// `outranks(a, b)` must behave like a strict "greater than" for the orientation being modelled:
/// it is never true for `a == b`, and it is transitive. Any `Fn(&T, &T) -> bool` closure can be
/// used as a comparator directly.
///
/// # Examples
/// ```
/// # use dsa_lib::algorithms::{Compare, MaxFirst, MinFirst};
/// assert!(MaxFirst.outranks(&2, &1));
/// assert!(MinFirst.outranks(&1, &2));
///
/// let by_len = |a: &&str, b: &&str| a.len() > b.len();
/// assert!(by_len.outranks(&"three", &"two"));
/// ```
pub trait Compare<T: ?Sized> {
    /// Returns true if `a` belongs strictly nearer the top than `b`.
    fn outranks(&self, a: &T, b: &T) -> bool;
}

/// Orders larger values first, producing a max-heap.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MaxFirst;

/// Orders smaller values first, producing a min-heap.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MinFirst;

impl<T: Ord + ?Sized> Compare<T> for MaxFirst {
    fn outranks(&self, a: &T, b: &T) -> bool {
        a > b
    }
}

impl<T: Ord + ?Sized> Compare<T> for MinFirst {
    fn outranks(&self, a: &T, b: &T) -> bool {
        a < b
    }
}

impl<T: ?Sized, F> Compare<T> for F
where
    F: Fn(&T, &T) -> bool,
{
    fn outranks(&self, a: &T, b: &T) -> bool {
        self(a, b)
    }
}
