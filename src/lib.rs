//! A small library of canonical data structures and algorithms, written to be read.
//!
//! # Purpose
//! This crate exists to learn from. Each container and algorithm is the textbook version, kept as
//! plain as possible while still being correct, and every one of them is covered by tests. None of
//! it is tuned beyond its asymptotic guarantees.
//!
//! # Contents
//! - [`LinkedList`](collections::linked::LinkedList): a doubly linked list built as a ring around a
//!   sentinel node, with [`Cursor`](collections::linked::Cursor)s for bi-directional traversal.
//! - [`Heap`](collections::heap::Heap): a binary heap adapter over any [`Sequence`], driven by the
//!   free-standing utilities in [`algorithms::heap`].
//! - [`Vector`](collections::contiguous::Vector): a growable contiguous collection, used as the
//!   default backing store for the heap.
//! - [`Stack`](collections::adapters::Stack) and [`Queue`](collections::adapters::Queue)
//!   adapters.
//! - Searching and sorting over slices in [`algorithms`].
//!
//! # Error Handling
//! Reading from an empty container is answered with [`None`] rather than a panic, because that is
//! the cheapest honest answer. Operations that can fail for other reasons (a bad index, a cursor
//! pushed past the end of its list) come in pairs: a `try_` method that returns a strongly typed
//! [`Result`], and a plain method that panics with that error's message. The error types are plain
//! structs and enums implementing [`Error`](std::error::Error).
//!
//! # Features
//! Every module can be switched off independently. `collections-all` and `algorithms` are enabled
//! by default.
//!
//! [`Sequence`]: collections::traits::Sequence

#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

#[cfg(feature = "algorithms")]
pub mod algorithms;
#[cfg(feature = "collections")]
pub mod collections;

pub(crate) mod util;
