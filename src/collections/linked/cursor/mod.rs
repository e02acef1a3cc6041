//! Cursors over a [`LinkedList`](super::LinkedList), which can be stepped in both directions and
//! compared by the node they are positioned on.

mod cursor;

pub use cursor::*;
#[doc(inline)]
pub use crate::util::error::CursorError;
