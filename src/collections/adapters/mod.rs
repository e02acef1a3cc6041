//! Abstract data types built on top of the concrete collections in this crate.
//!
//! - [`Stack`]: last in, first out, backed by a [`Vector`](super::contiguous::Vector).
//! - [`Queue`]: first in, first out, backed by a [`LinkedList`](super::linked::LinkedList).
//!
//! Neither exposes its backing store, so only the operations of the abstract type are available.

mod queue;
mod stack;

pub use queue::*;
pub use stack::*;
