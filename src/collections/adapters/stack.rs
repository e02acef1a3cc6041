use std::fmt::{self, Debug, Formatter};

use crate::collections::contiguous::Vector;

/// A last in, first out collection. Pushing and popping are amortized `O(1)`.
///
/// # Examples
/// ```
/// # use dsa_lib::collections::adapters::Stack;
/// let mut stack = Stack::new();
/// stack.push('a');
/// stack.push('b');
/// assert_eq!(stack.top(), Some(&'b'));
/// assert_eq!(stack.pop(), Some('b'));
/// assert_eq!(stack.pop(), Some('a'));
/// assert_eq!(stack.pop(), None);
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Stack<T> {
    inner: Vector<T>,
}

impl<T> Stack<T> {
    pub const fn new() -> Stack<T> {
        Stack {
            inner: Vector::new(),
        }
    }

    pub const fn len(&self) -> usize {
        self.inner.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn push(&mut self, value: T) {
        self.inner.push(value);
    }

    /// Removes and returns the most recently pushed element, if there is one.
    pub const fn pop(&mut self) -> Option<T> {
        self.inner.pop()
    }

    pub fn top(&self) -> Option<&T> {
        self.inner.back()
    }

    pub fn top_mut(&mut self) -> Option<&mut T> {
        self.inner.back_mut()
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Stack::new()
    }
}

/// Collects into a Stack with the last item on top.
impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Stack {
            inner: Vector::from_iter(iter),
        }
    }
}

impl<T> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.inner.extend(iter);
    }
}

impl<T: Debug> Debug for Stack<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stack")
            .field("contents", &&*self.inner)
            .field("top", &self.top())
            .finish()
    }
}
