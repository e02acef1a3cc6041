//! Various general-purpose collection types.
//!
//! # Purpose
//! These types exist to learn about each of the data structures themselves, but also about the
//! concepts underneath them: pointers, allocations, ownership and iteration.
//!
//! # Method
//! Contiguous types implement [`Deref<Target = [T]>`](std::ops::Deref) (and DerefMut), which saves
//! writing a lot of the more repetitive functionality. Adapters are thin wrappers that only expose
//! the operations of the abstract type they model.

#[cfg(feature = "adapters")]
pub mod adapters;
#[cfg(feature = "contiguous")]
pub mod contiguous;
#[cfg(feature = "heap")]
pub mod heap;
#[cfg(feature = "linked")]
pub mod linked;
#[cfg(feature = "traits")]
pub mod traits;
