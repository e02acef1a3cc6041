use std::fmt::{self, Debug, Formatter};
use std::iter::FusedIterator;
use std::ptr;
use std::slice;

use super::Vector;

impl<T> IntoIterator for Vector<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(mut self) -> Self::IntoIter {
        let end = self.len;
        // The iterator takes over ownership of the elements, the Vector keeps only the allocation.
        self.len = 0;

        IntoIter {
            buf: self,
            start: 0,
            end,
        }
    }
}

impl<'a, T> IntoIterator for &'a Vector<T> {
    type Item = &'a T;

    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Vector<T> {
    type Item = &'a mut T;

    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

/// An owned iterator over the elements of a [`Vector`]. See [`Vector::into_iter`].
pub struct IntoIter<T> {
    // Always has len 0, so dropping it only frees the allocation.
    pub(crate) buf: Vector<T>,
    pub(crate) start: usize,
    pub(crate) end: usize,
}

impl<T> IntoIter<T> {
    /// Returns the remaining elements as a slice.
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: Slots start..end are initialized and haven't been yielded yet.
        unsafe { slice::from_raw_parts(self.buf.ptr.add(self.start).as_ptr(), self.end - self.start) }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.start == self.end {
            return None;
        }

        // SAFETY: start < end, so the slot is initialized. Incrementing start afterwards means it
        // is never read again, so the value is effectively moved off of the heap.
        let value = unsafe { self.buf.ptr.add(self.start).read() };
        self.start += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.start == self.end {
            return None;
        }

        self.end -= 1;
        // SAFETY: The slot at the decremented end is initialized and no longer in range.
        Some(unsafe { self.buf.ptr.add(self.end).read() })
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.end - self.start
    }
}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        let len = self.len();
        let start = self.start;
        self.start = self.end;

        // SAFETY: Slots start..start + len are initialized and are no longer reachable through
        // self. The allocation itself is freed by buf afterwards.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.buf.ptr.add(start).as_ptr(), len));
        }
    }
}

impl<T: Debug> Debug for IntoIter<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}
