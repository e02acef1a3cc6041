use std::fmt::{self, Debug, Formatter};
use std::marker::PhantomData;

#[doc(inline)]
pub use crate::algorithms::compare::{Compare, MaxFirst, MinFirst};
use crate::algorithms::heap::{create_heap_by, extract_top_by, insert_last_by, is_heap_by};
use crate::collections::contiguous::Vector;
use crate::collections::traits::Sequence;

/// A heap that always gives access to its top element: the largest one for a [`MaxHeap`], the
/// smallest for a [`MinHeap`], or whichever one [outranks](Compare::outranks) all others for a
/// custom comparator `C`.
///
/// The elements are stored in a backing [`Sequence`] `S`, a [`Vector`] unless otherwise specified.
/// All of the ordering work is delegated to the functions in [`algorithms::heap`].
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the Heap.
///
/// | Method | Complexity |
/// |-|-|
/// | `top` | `O(1)` |
/// | `push` | `O(log n)`* |
/// | `pop` | `O(log n)` |
/// | `from_parts` | `O(n)` |
/// | `into_sorted` | `O(n log n)` |
///
/// \* Amortized, when the backing store is a [`Vector`].
///
/// In debug builds, `push` and `pop` also validate the whole heap afterwards, which makes each of
/// them `O(n)`.
///
/// # Examples
/// ```
/// # use dsa_lib::collections::heap::{Heap, MinHeap};
/// let mut heap = Heap::new();
/// heap.push(47);
/// heap.push(48);
/// assert_eq!(heap.top(), Some(&48));
/// assert_eq!(heap.pop(), Some(48));
/// assert_eq!(heap.top(), Some(&47));
///
/// let min: MinHeap<_> = [5, 1, 3].into_iter().collect();
/// assert_eq!(min.top(), Some(&1));
/// ```
///
/// [`algorithms::heap`]: crate::algorithms::heap
pub struct Heap<T, C = MaxFirst, S = Vector<T>> {
    pub(crate) store: S,
    pub(crate) cmp: C,
    pub(crate) _phantom: PhantomData<T>,
}

/// A Heap with the largest element on top.
pub type MaxHeap<T> = Heap<T, MaxFirst>;

/// A Heap with the smallest element on top.
pub type MinHeap<T> = Heap<T, MinFirst>;

impl<T: Ord> Heap<T> {
    /// Creates an empty max-heap backed by a [`Vector`]. See [`Heap::with_comparator`] for other
    /// orderings.
    pub const fn new() -> Heap<T> {
        Heap {
            store: Vector::new(),
            cmp: MaxFirst,
            _phantom: PhantomData,
        }
    }
}

impl<T, C: Compare<T>> Heap<T, C> {
    /// Creates an empty heap backed by a [`Vector`], ordered by `cmp`.
    ///
    /// # Examples
    /// ```
    /// # use dsa_lib::collections::heap::Heap;
    /// let mut heap = Heap::with_comparator(|a: &&str, b: &&str| a.len() > b.len());
    /// heap.extend(["fig", "banana", "kiwi"]);
    /// assert_eq!(heap.pop(), Some("banana"));
    /// ```
    pub const fn with_comparator(cmp: C) -> Heap<T, C> {
        Heap {
            store: Vector::new(),
            cmp,
            _phantom: PhantomData,
        }
    }
}

impl<T, C: Compare<T>, S: Sequence<T>> Heap<T, C, S> {
    /// Creates a heap from the elements already in `store`, rearranging them in `O(n)`.
    pub fn from_parts(mut store: S, cmp: C) -> Heap<T, C, S> {
        create_heap_by(&mut store, &cmp);
        Heap {
            store,
            cmp,
            _phantom: PhantomData,
        }
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Returns the top element, if the heap isn't empty.
    pub fn top(&self) -> Option<&T> {
        self.store.first()
    }

    /// Adds `value` to the heap.
    ///
    /// # Panics
    /// Panics if the backing store panics when growing.
    pub fn push(&mut self, value: T) {
        self.store.push_back(value);
        insert_last_by(&mut self.store, &self.cmp);
        self.debug_check();
    }

    /// Removes and returns the top element, if the heap isn't empty.
    pub fn pop(&mut self) -> Option<T> {
        extract_top_by(&mut self.store, &self.cmp)?;
        let top = self.store.pop_back();
        self.debug_check();
        top
    }

    pub fn clear(&mut self) {
        self.store.clear();
    }

    /// Returns the elements in heap order. Only the first one is guaranteed to be the top.
    pub fn as_slice(&self) -> &[T] {
        &self.store
    }

    pub const fn comparator(&self) -> &C {
        &self.cmp
    }

    /// Returns the backing store, in heap order.
    pub fn into_inner(self) -> S {
        self.store
    }

    /// Returns the backing store, sorted so that the top element is last. For a [`MaxHeap`] this
    /// is ascending order.
    ///
    /// # Examples
    /// ```
    /// # use dsa_lib::collections::heap::{MaxHeap, MinHeap};
    /// let max: MaxHeap<_> = [3, 1, 2].into_iter().collect();
    /// assert_eq!(&*max.into_sorted(), &[1, 2, 3]);
    ///
    /// let min: MinHeap<_> = [3, 1, 2].into_iter().collect();
    /// assert_eq!(&*min.into_sorted(), &[3, 2, 1]);
    /// ```
    pub fn into_sorted(self) -> S {
        let Heap { mut store, cmp, .. } = self;

        // The store is already a heap, so this is the second half of heap sort.
        for end in (2..=store.len()).rev() {
            extract_top_by(&mut store[..end], &cmp);
        }

        store
    }

    /// Checks the heap order over every element. Only runs in debug builds, where it costs `O(n)`.
    fn debug_check(&self) {
        debug_assert!(is_heap_by(&self.store, 0, &self.cmp), "Heap order was violated");
    }
}

impl<T, C, S> Default for Heap<T, C, S>
where
    C: Compare<T> + Default,
    S: Sequence<T> + Default,
{
    fn default() -> Self {
        Heap {
            store: S::default(),
            cmp: C::default(),
            _phantom: PhantomData,
        }
    }
}

impl<T, C, S> From<S> for Heap<T, C, S>
where
    C: Compare<T> + Default,
    S: Sequence<T>,
{
    fn from(value: S) -> Self {
        Heap::from_parts(value, C::default())
    }
}

impl<T, C, S> FromIterator<T> for Heap<T, C, S>
where
    C: Compare<T> + Default,
    S: Sequence<T> + FromIterator<T>,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Heap::from_parts(iter.into_iter().collect(), C::default())
    }
}

impl<T, C: Compare<T>, S: Sequence<T>> Extend<T> for Heap<T, C, S> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

impl<T, C: Clone, S: Clone> Clone for Heap<T, C, S> {
    fn clone(&self) -> Self {
        Heap {
            store: self.store.clone(),
            cmp: self.cmp.clone(),
            _phantom: PhantomData,
        }
    }
}

impl<T: Debug, C, S: Sequence<T>> Debug for Heap<T, C, S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Heap")
            .field("contents", &&*self.store)
            .field("len", &self.store.len())
            .finish()
    }
}
