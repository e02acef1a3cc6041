//! Collections whose elements live in a single contiguous allocation.

pub mod vector;

#[doc(inline)]
pub use vector::Vector;
