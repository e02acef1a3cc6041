use std::ops::DerefMut;

#[cfg(feature = "contiguous")]
use crate::collections::contiguous::Vector;

/// An owned, resizable sequence that can be viewed as a slice and grown or shrunk at its back.
///
/// This is the backing store of a [`Heap`](crate::collections::heap::Heap). Everything that works
/// on positions is done through the slice, so only the operations that change the length are part
/// of the trait.
pub trait Sequence<T>: DerefMut<Target = [T]> {
    /// Appends `value` after the last element.
    fn push_back(&mut self, value: T);

    /// Removes and returns the last element, if there is one.
    fn pop_back(&mut self) -> Option<T>;

    /// Removes and drops every element.
    fn clear(&mut self) {
        while self.pop_back().is_some() {}
    }
}

#[cfg(feature = "contiguous")]
impl<T> Sequence<T> for Vector<T> {
    fn push_back(&mut self, value: T) {
        self.push(value);
    }

    fn pop_back(&mut self) -> Option<T> {
        self.pop()
    }

    fn clear(&mut self) {
        Vector::clear(self);
    }
}

impl<T> Sequence<T> for Vec<T> {
    fn push_back(&mut self, value: T) {
        self.push(value);
    }

    fn pop_back(&mut self) -> Option<T> {
        self.pop()
    }

    fn clear(&mut self) {
        Vec::clear(self);
    }
}
