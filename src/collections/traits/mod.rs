//! Traits shared between collection types.

pub mod sequence;

#[doc(inline)]
pub use sequence::Sequence;
