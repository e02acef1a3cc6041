use std::error::Error;
use std::fmt::{self, Display, Formatter};

use derive_more::{Display, Error, From, IsVariant, TryInto};

/// An index was outside of the initialized elements of a collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexOutOfBounds {
    pub index: usize,
    pub len: usize,
}

impl Display for IndexOutOfBounds {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Index {} out of bounds for collection with {} elements!", self.index, self.len)
    }
}

impl Error for IndexOutOfBounds {}

/// A requested capacity would produce an allocation larger than [`isize::MAX`] bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityOverflow;

impl Display for CapacityOverflow {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Capacity overflow!")
    }
}

impl Error for CapacityOverflow {}

/// The ways an insertion into a contiguous collection can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From, TryInto, IsVariant)]
pub enum IndexOrCapOverflow {
    IndexOutOfBounds(IndexOutOfBounds),
    CapacityOverflow(CapacityOverflow),
}

/// A cursor was used outside of the positions it is allowed to occupy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, IsVariant)]
pub enum CursorError {
    /// The cursor was at the end position and was asked to move forward.
    #[display("Attempting to move a cursor beyond the end of a list!")]
    BeyondEnd,
    /// The cursor was at the first element (or the end of an empty list) and was asked to move
    /// backward.
    #[display("Attempting to move a cursor before the beginning of a list!")]
    BeforeBegin,
    /// The cursor was at the end position, which holds no value, and was read.
    #[display("Attempting to dereference a cursor at the end of a list!")]
    EndDereference,
}
