//! A module containing [`LinkedList`] and its borrowed and owned iterators.

mod iter;
mod linked_list;
mod node;

pub use iter::*;
pub use linked_list::*;
pub(crate) use node::*;
