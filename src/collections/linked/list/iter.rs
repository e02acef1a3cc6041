use std::fmt::{self, Debug, Formatter};
use std::iter::FusedIterator;
use std::marker::PhantomData;

use super::LinkedList;
use crate::collections::linked::cursor::RawCursor;
use crate::util::fmt::DebugIter;

impl<T> IntoIterator for LinkedList<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            list: self,
        }
    }
}

pub struct IntoIter<T> {
    // There is no point rewriting all of this when the iterator can just hold the list and call
    // pop front/back.
    pub(crate) list: LinkedList<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.list.pop_back()
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.list.len()
    }
}

impl<T: Debug> Debug for IntoIter<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&DebugIter(self.list.iter())).finish()
    }
}

// Both borrowed iterators walk the list with two raw cursors, one from each end, and use `len` to
// track how many items are left to yield so that the cursors never cross.

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            front: self.cursor_begin().raw,
            back: self.cursor_end().raw,
            len: self.len,
            _phantom: PhantomData,
        }
    }
}

pub struct Iter<'a, T> {
    pub(crate) front: RawCursor<T>,
    // Positioned one past the next item to yield from the back.
    pub(crate) back: RawCursor<T>,
    pub(crate) len: usize,
    pub(crate) _phantom: PhantomData<&'a T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;

        // SAFETY: There is at least one item left between the cursors, so front is on a real node.
        // The list is borrowed immutably for 'a.
        unsafe {
            let value = self.front.node.value();
            self.front.advance();
            Some(value)
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;

        // SAFETY: There is at least one item left between the cursors, so the node before back is
        // a real node. The list is borrowed immutably for 'a.
        unsafe {
            self.back.retreat();
            Some(self.back.node.value())
        }
    }
}

impl<'a, T> FusedIterator for Iter<'a, T> {}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {
    fn len(&self) -> usize {
        self.len
    }
}

impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Iter {
            front: self.front,
            back: self.back,
            len: self.len,
            _phantom: PhantomData,
        }
    }
}

impl<'a, T: Debug> Debug for Iter<'a, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Iter").field(&DebugIter(self.clone())).finish()
    }
}

impl<'a, T> IntoIterator for &'a mut LinkedList<T> {
    type Item = &'a mut T;

    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        IterMut {
            front: self.cursor_begin().raw,
            back: self.cursor_end().raw,
            len: self.len,
            _phantom: PhantomData,
        }
    }
}

pub struct IterMut<'a, T> {
    pub(crate) front: RawCursor<T>,
    pub(crate) back: RawCursor<T>,
    pub(crate) len: usize,
    pub(crate) _phantom: PhantomData<&'a mut T>,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;

        // SAFETY: front is on a real node. Each node is yielded at most once because len stops the
        // cursors from crossing, so the mutable references never alias.
        unsafe {
            let value = self.front.node.value_mut();
            self.front.advance();
            Some(value)
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<'a, T> DoubleEndedIterator for IterMut<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;

        // SAFETY: The node before back is a real node, yielded at most once for the same reason as
        // in next.
        unsafe {
            self.back.retreat();
            Some(self.back.node.value_mut())
        }
    }
}

impl<'a, T> FusedIterator for IterMut<'a, T> {}

impl<'a, T> ExactSizeIterator for IterMut<'a, T> {
    fn len(&self) -> usize {
        self.len
    }
}

// SAFETY: IterMut only hands out unique references to T, exactly like &mut LinkedList<T>.
unsafe impl<'a, T: Send> Send for IterMut<'a, T> {}
// SAFETY: A shared IterMut gives no access to the items at all.
unsafe impl<'a, T: Sync> Sync for IterMut<'a, T> {}
// SAFETY: Iter only hands out shared references to T, exactly like &LinkedList<T>.
unsafe impl<'a, T: Sync> Send for Iter<'a, T> {}
// SAFETY: As above.
unsafe impl<'a, T: Sync> Sync for Iter<'a, T> {}
