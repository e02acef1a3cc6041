use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

use super::{Iter, IterMut, Node, NodeRef};
use crate::collections::linked::cursor::{Cursor, CursorMut, RawCursor};
#[doc(inline)]
pub use crate::util::error::CapacityOverflow;
use crate::util::fmt::DebugIter;
use crate::util::result::ResultExtension;

/// A list with links in both directions, built as a ring around a sentinel node. See also:
/// [`Cursor`] and [`CursorMut`] for bi-directional traversal.
///
/// The sentinel holds no value. Its `next` link is the first element and its `prev` link is the
/// last, and an empty list is a sentinel linked to itself. Because every real node always has a
/// neighbour on both sides, insertion and removal at either end (or anywhere a cursor points) share
/// one code path with no special cases.
///
/// The sentinel is allocated separately from the LinkedList itself, so moving a LinkedList is a
/// plain `O(1)` copy of a pointer and a length; no links need to be repaired.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the LinkedList.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `front/back` | `O(1)` |
/// | `push_front/back` | `O(1)` |
/// | `pop_front/back` | `O(1)` |
/// | `append` | `O(1)` |
/// | `clear` | `O(n)` |
/// | `contains` | `O(n)` |
/// | `clone` | `O(n)` |
/// | `eq` | `O(n)` |
///
/// As a general note, modern computer architecture isn't kind to linked lists, because all `O(n)`
/// operations will consist primarily of cache misses. For this reason,
/// [`Vector`](crate::collections::contiguous::Vector) should be preferred unless the `O(1)`
/// operations of the LinkedList and its cursors are being heavily utilized.
pub struct LinkedList<T> {
    pub(crate) ghost: NodeRef<T>,
    pub(crate) len: usize,
    pub(crate) _phantom: PhantomData<Box<Node<T>>>,
}

impl<T> LinkedList<T> {
    /// Creates a new LinkedList with no elements.
    ///
    /// # Examples
    /// ```
    /// # use dsa_lib::collections::linked::LinkedList;
    /// let list: LinkedList<u8> = LinkedList::new();
    /// assert!(list.is_empty());
    /// assert_eq!(list.front(), None);
    /// ```
    pub fn new() -> LinkedList<T> {
        LinkedList {
            ghost: NodeRef::sentinel(),
            len: 0,
            _phantom: PhantomData,
        }
    }

    /// Returns the length of the LinkedList.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the LinkedList contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns a reference to the first element in the list, if it exists.
    pub fn front(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }
        // SAFETY: The list isn't empty, so the node after the sentinel is a real node. The
        // borrow of self prevents it from being mutated or freed.
        Some(unsafe { self.ghost.next().value() })
    }

    /// Returns a mutable reference to the first element in the list, if it exists.
    pub fn front_mut(&mut self) -> Option<&mut T> {
        if self.is_empty() {
            return None;
        }
        // SAFETY: The list isn't empty, so the node after the sentinel is a real node. The
        // mutable borrow of self makes the returned reference unique.
        Some(unsafe { self.ghost.next().value_mut() })
    }

    /// Returns a reference to the last element in the list, if it exists.
    pub fn back(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }
        // SAFETY: The list isn't empty, so the node before the sentinel is a real node. The
        // borrow of self prevents it from being mutated or freed.
        Some(unsafe { self.ghost.prev().value() })
    }

    /// Returns a mutable reference to the last element in the list, if it exists.
    pub fn back_mut(&mut self) -> Option<&mut T> {
        if self.is_empty() {
            return None;
        }
        // SAFETY: The list isn't empty, so the node before the sentinel is a real node. The
        // mutable borrow of self makes the returned reference unique.
        Some(unsafe { self.ghost.prev().value_mut() })
    }

    /// Add the provided element to the front of the LinkedList.
    ///
    /// # Panics
    /// Panics if the length of the LinkedList would overflow a [`usize`].
    ///
    /// # Examples
    /// ```
    /// # use dsa_lib::collections::linked::LinkedList;
    /// let mut list = LinkedList::from([2, 3]);
    /// list.push_front(1);
    /// assert_eq!(list, LinkedList::from([1, 2, 3]));
    /// ```
    pub fn push_front(&mut self, value: T) {
        // SAFETY: The sentinel and the node after it are adjacent positions of this list.
        unsafe { self.attach_node(self.ghost, self.ghost.next(), NodeRef::from_value(value)); }
    }

    /// Add the provided element to the back of the LinkedList.
    ///
    /// # Panics
    /// Panics if the length of the LinkedList would overflow a [`usize`].
    pub fn push_back(&mut self, value: T) {
        // SAFETY: The node before the sentinel and the sentinel are adjacent positions of this
        // list.
        unsafe { self.attach_node(self.ghost.prev(), self.ghost, NodeRef::from_value(value)); }
    }

    /// Removes the first element from the list and returns it, if the list isn't empty.
    ///
    /// # Examples
    /// ```
    /// # use dsa_lib::collections::linked::LinkedList;
    /// let mut list = LinkedList::from([1, 2, 3]);
    /// assert_eq!(list.pop_front(), Some(1));
    /// assert_eq!(list.len(), 2);
    /// assert_eq!(list.front(), Some(&2));
    /// ```
    pub fn pop_front(&mut self) -> Option<T> {
        match self.is_empty() {
            true => None,
            // SAFETY: The list isn't empty, so the node after the sentinel is a real node of this
            // list.
            false => Some(unsafe { self.detach_node(self.ghost.next()) }),
        }
    }

    /// Removes the last element from the list and returns it, if the list isn't empty.
    ///
    /// # Examples
    /// ```
    /// # use dsa_lib::collections::linked::LinkedList;
    /// let mut list = LinkedList::from([1, 2, 3]);
    /// assert_eq!(list.pop_back(), Some(3));
    /// assert_eq!(list.len(), 2);
    /// assert_eq!(list.back(), Some(&2));
    /// ```
    pub fn pop_back(&mut self) -> Option<T> {
        match self.is_empty() {
            true => None,
            // SAFETY: The list isn't empty, so the node before the sentinel is a real node of this
            // list.
            false => Some(unsafe { self.detach_node(self.ghost.prev()) }),
        }
    }

    /// Removes and drops every element, starting from the back.
    pub fn clear(&mut self) {
        while self.pop_back().is_some() {}
    }

    /// Moves every element of `other` onto the back of self, leaving `other` empty. No nodes are
    /// reallocated; the two rings are spliced together at their sentinels.
    ///
    /// # Panics
    /// Panics if the combined length would overflow a [`usize`].
    ///
    /// # Examples
    /// ```
    /// # use dsa_lib::collections::linked::LinkedList;
    /// let mut list = LinkedList::from([1, 2]);
    /// let mut other = LinkedList::from([3, 4]);
    /// list.append(&mut other);
    /// assert_eq!(list, LinkedList::from([1, 2, 3, 4]));
    /// assert!(other.is_empty());
    /// ```
    pub fn append(&mut self, other: &mut LinkedList<T>) {
        if other.is_empty() {
            return;
        }

        self.len = self.len.checked_add(other.len).ok_or(CapacityOverflow).throw();

        // SAFETY: Both rings are well-formed and other isn't empty, so its first and last nodes are
        // real. After relinking, other's sentinel is reset to the empty ring so that no position
        // is reachable from both lists.
        unsafe {
            let first = other.ghost.next();
            let last = other.ghost.prev();

            NodeRef::connect(self.ghost.prev(), first);
            NodeRef::connect(last, self.ghost);
            NodeRef::connect(other.ghost, other.ghost);
        }

        other.len = 0;
    }

    /// Returns a [`Cursor`] positioned on the first element, or on the end position if the list is
    /// empty.
    pub fn cursor_begin(&self) -> Cursor<'_, T> {
        // SAFETY: The sentinel of a live list is always valid.
        Cursor::from_raw(RawCursor::new(unsafe { self.ghost.next() }, self.ghost))
    }

    /// Returns a [`Cursor`] positioned on the end position, one past the last element.
    pub fn cursor_end(&self) -> Cursor<'_, T> {
        Cursor::from_raw(RawCursor::new(self.ghost, self.ghost))
    }

    /// Returns a [`CursorMut`] positioned on the first element, or on the end position if the list
    /// is empty.
    pub fn cursor_begin_mut(&mut self) -> CursorMut<'_, T> {
        // SAFETY: The sentinel of a live list is always valid.
        let raw = RawCursor::new(unsafe { self.ghost.next() }, self.ghost);
        CursorMut::from_raw(raw, self)
    }

    /// Returns a [`CursorMut`] positioned on the end position, one past the last element.
    pub fn cursor_end_mut(&mut self) -> CursorMut<'_, T> {
        let raw = RawCursor::new(self.ghost, self.ghost);
        CursorMut::from_raw(raw, self)
    }

    /// Returns an iterator over references to the elements, front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    /// Returns an iterator over mutable references to the elements, front to back.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.into_iter()
    }
}

impl<T: PartialEq> LinkedList<T> {
    /// Returns the index of the first element equal to `item`.
    pub fn index_of(&self, item: &T) -> Option<usize> {
        self.iter().position(|element| element == item)
    }

    pub fn contains(&self, item: &T) -> bool {
        self.iter().any(|element| element == item)
    }
}

impl<T> LinkedList<T> {
    /// Links `node` into the ring between `prev` and `next`, taking ownership of it.
    ///
    /// # Safety
    /// `prev` and `next` must be adjacent positions (in that order) of this list, and `node` must
    /// be a freshly allocated node that belongs to no list.
    ///
    /// # Panics
    /// Panics if the length of the LinkedList would overflow a [`usize`].
    pub(crate) unsafe fn attach_node(&mut self, prev: NodeRef<T>, next: NodeRef<T>, node: NodeRef<T>) {
        let new_len = match self.len.checked_add(1) {
            Some(len) => len,
            None => {
                // SAFETY: node was never attached, so this is its only handle.
                drop(unsafe { node.take_value() });
                Err(CapacityOverflow).throw()
            },
        };

        // SAFETY: The caller guarantees that prev and next are live and adjacent.
        unsafe {
            debug_assert!(prev.next() == next && next.prev() == prev, "Attaching between non-adjacent nodes");
            NodeRef::connect(prev, node);
            NodeRef::connect(node, next);
        }

        self.len = new_len;
    }

    /// Unlinks `node` from the ring and frees it, returning its value.
    ///
    /// # Safety
    /// `node` must be a real node of this list (not the sentinel). All handles to it are dangling
    /// afterwards.
    pub(crate) unsafe fn detach_node(&mut self, node: NodeRef<T>) -> T {
        debug_assert!(node != self.ghost, "Detaching the sentinel of a list");

        // SAFETY: node is a live real node of this well-formed ring, so its neighbours are live and
        // once they are connected, node is unreachable and can be freed.
        unsafe {
            NodeRef::connect(node.prev(), node.next());
            self.len -= 1;
            node.take_value()
        }
    }

    /// Walks the entire ring in both directions, asserting that every pair of neighbours agrees on
    /// their links and that the tracked length matches the number of real nodes.
    #[cfg(test)]
    pub(crate) fn verify_links(&self) {
        let mut count = 0;
        // SAFETY: Only link fields are read, and the ring is expected to be well-formed. A broken
        // ring is reported by the assertions before any dangling link is followed.
        unsafe {
            let mut curr = self.ghost;
            loop {
                let next = curr.next();
                assert!(next.prev() == curr, "next.prev should link back to the node");
                curr = next;
                if curr == self.ghost { break; }
                count += 1;
                assert!(count <= self.len, "the ring holds more nodes than the tracked length");
            }

            let mut back_count = 0;
            let mut curr = self.ghost.prev();
            while curr != self.ghost {
                assert!(curr.next().prev() == curr, "prev.next should link back to the node");
                back_count += 1;
                curr = curr.prev();
            }
            assert_eq!(back_count, count, "both directions should visit the same nodes");
        }
        assert_eq!(count, self.len, "the tracked length should match the ring");
    }
}

impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        self.clear();
        // SAFETY: The ring is now just the sentinel, which is owned by self and never used again.
        unsafe { self.ghost.drop_sentinel(); }
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for LinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }

    fn clone_from(&mut self, source: &Self) {
        self.clear();
        self.extend(source.iter().cloned());
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = LinkedList::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<'a, T: Copy + 'a> Extend<&'a T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T, const N: usize> From<[T; N]> for LinkedList<T> {
    fn from(value: [T; N]) -> Self {
        value.into_iter().collect()
    }
}

// SAFETY: A LinkedList uniquely owns all of its nodes, so sending it sends every T with it.
unsafe impl<T: Send> Send for LinkedList<T> {}
// SAFETY: LinkedList's safe API obeys all rules of the borrow checker, so no interior mutability
// occurs through a shared reference.
unsafe impl<T: Sync> Sync for LinkedList<T> {}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

impl<T: Hash> Hash for LinkedList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len.hash(state);
        for value in self.iter() {
            value.hash(state);
        }
    }
}

impl<T: Debug> Debug for LinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinkedList")
            .field("contents", &DebugIter(self.iter()))
            .field("len", &self.len)
            .finish()
    }
}

impl<T: Display> Display for LinkedList<T> {
    /// Writes the elements in order between braces, each followed by a space: `{ 1 2 3 }`.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{{ ")?;
        for value in self.iter() {
            write!(f, "{value} ")?;
        }
        write!(f, "}}")
    }
}
