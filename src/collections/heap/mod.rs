//! A binary heap, stored implicitly in any [`Sequence`](super::traits::Sequence).

mod heap;
mod tests;

pub use heap::*;
