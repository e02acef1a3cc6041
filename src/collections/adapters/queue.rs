use std::fmt::{self, Debug, Formatter};

use crate::collections::linked::LinkedList;
use crate::util::fmt::DebugIter;

/// A first in, first out collection. Every operation is `O(1)`.
///
/// # Examples
/// ```
/// # use dsa_lib::collections::adapters::Queue;
/// let mut queue: Queue<_> = [1, 2].into_iter().collect();
/// queue.push(3);
/// assert_eq!(queue.front(), Some(&1));
/// assert_eq!(queue.back(), Some(&3));
/// assert_eq!(queue.pop(), Some(1));
/// assert_eq!(queue.len(), 2);
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Queue<T> {
    inner: LinkedList<T>,
}

impl<T> Queue<T> {
    pub fn new() -> Queue<T> {
        Queue {
            inner: LinkedList::new(),
        }
    }

    pub const fn len(&self) -> usize {
        self.inner.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Adds `value` at the back of the queue.
    pub fn push(&mut self, value: T) {
        self.inner.push_back(value);
    }

    /// Removes and returns the element at the front of the queue, if there is one.
    pub fn pop(&mut self) -> Option<T> {
        self.inner.pop_front()
    }

    /// Returns the element that will be popped next.
    pub fn front(&self) -> Option<&T> {
        self.inner.front()
    }

    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.inner.front_mut()
    }

    /// Returns the most recently pushed element.
    pub fn back(&self) -> Option<&T> {
        self.inner.back()
    }

    pub fn back_mut(&mut self) -> Option<&mut T> {
        self.inner.back_mut()
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Queue::new()
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Queue {
            inner: LinkedList::from_iter(iter),
        }
    }
}

impl<T> Extend<T> for Queue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.inner.extend(iter);
    }
}

impl<T: Debug> Debug for Queue<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Queue")
            .field("contents", &DebugIter(self.inner.iter()))
            .field("len", &self.len())
            .finish()
    }
}
