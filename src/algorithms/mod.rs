//! Free-standing algorithms over slices and iterators.
//!
//! # Contents
//! - [`heap`]: the maintenance operations of an implicit binary heap, stored in a slice. These are
//!   what [`Heap`](crate::collections::heap::Heap) is built from.
//! - [`search`]: linear search over any iterator and binary search over sorted slices.
//! - [`sort`]: the textbook comparison sorts, each sorting a slice in ascending order.
//!
//! The heap operations are ordered by a [`Compare`] implementation, so that one set of functions
//! serves both max and min heaps.

pub mod compare;
pub mod heap;
pub mod search;
pub mod sort;
mod tests;

#[doc(inline)]
pub use compare::{Compare, MaxFirst, MinFirst};
