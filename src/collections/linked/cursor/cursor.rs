use std::fmt::{self, Debug, Formatter};
use std::marker::PhantomData;

use crate::collections::linked::list::{LinkedList, NodeRef};
use crate::util::error::CursorError;
use crate::util::result::ResultExtension;

/// The position shared by every cursor and borrowed iterator: the node being viewed and the
/// sentinel of the list it belongs to. The sentinel doubles as the end position.
pub(crate) struct RawCursor<T> {
    pub node: NodeRef<T>,
    pub ghost: NodeRef<T>,
}

impl<T> RawCursor<T> {
    pub const fn new(node: NodeRef<T>, ghost: NodeRef<T>) -> RawCursor<T> {
        RawCursor {
            node,
            ghost,
        }
    }

    pub fn is_end(&self) -> bool {
        self.node == self.ghost
    }

    pub fn is_begin(&self) -> bool {
        // SAFETY: A RawCursor only exists while its list (and so its sentinel) is alive.
        self.node == unsafe { self.ghost.next() }
    }

    /// Steps to the next position in the ring, wrapping from the end position to the front.
    ///
    /// # Safety
    /// The list must still be alive and `node` must still be one of its positions.
    pub unsafe fn advance(&mut self) {
        // SAFETY: Upheld by the caller.
        self.node = unsafe { self.node.next() };
    }

    /// Steps to the previous position in the ring, wrapping from the front to the end position.
    ///
    /// # Safety
    /// The list must still be alive and `node` must still be one of its positions.
    pub unsafe fn retreat(&mut self) {
        // SAFETY: Upheld by the caller.
        self.node = unsafe { self.node.prev() };
    }

    pub fn try_move_next(&mut self) -> Result<(), CursorError> {
        if self.is_end() {
            return Err(CursorError::BeyondEnd);
        }
        // SAFETY: Cursors are bound to a borrow of their list, so node is one of its positions.
        unsafe { self.advance(); }
        Ok(())
    }

    pub fn try_move_prev(&mut self) -> Result<(), CursorError> {
        if self.is_begin() {
            return Err(CursorError::BeforeBegin);
        }
        // SAFETY: Cursors are bound to a borrow of their list, so node is one of its positions.
        unsafe { self.retreat(); }
        Ok(())
    }

    /// # Safety
    /// The value must not be mutated or freed for the chosen lifetime `'a`.
    pub unsafe fn try_value<'a>(&self) -> Result<&'a T, CursorError> {
        if self.is_end() {
            return Err(CursorError::EndDereference);
        }
        // SAFETY: node isn't the sentinel, so it is a real node. Aliasing is upheld by the caller.
        Ok(unsafe { self.node.value() })
    }

    /// # Safety
    /// No other reference to the value may exist for the chosen lifetime `'a`.
    pub unsafe fn try_value_mut<'a>(&self) -> Result<&'a mut T, CursorError> {
        if self.is_end() {
            return Err(CursorError::EndDereference);
        }
        // SAFETY: node isn't the sentinel, so it is a real node. Aliasing is upheld by the caller.
        Ok(unsafe { self.node.value_mut() })
    }
}

impl<T> Clone for RawCursor<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for RawCursor<T> {}

/// A read-only cursor over a [`LinkedList`], created with [`LinkedList::cursor_begin`] or
/// [`LinkedList::cursor_end`].
///
/// A cursor is either on one of the list's elements or on the end position, one past the last
/// element. Moving forward from the end position or backward from the first element is a contract
/// violation: the `move_*` methods panic, the `try_move_*` methods return a [`CursorError`]
/// instead. The same applies to reading the value at the end position.
///
/// Two cursors are equal if they are positioned on the same node, regardless of which list they
/// came from.
///
/// # Examples
/// ```
/// # use dsa_lib::collections::linked::LinkedList;
/// let list = LinkedList::from([1, 2, 3]);
/// let mut cursor = list.cursor_begin();
/// assert_eq!(cursor.current(), &1);
/// cursor.move_next().move_next();
/// assert_eq!(cursor.current(), &3);
/// cursor.move_next();
/// assert_eq!(cursor, list.cursor_end());
/// assert!(cursor.try_move_next().is_err());
/// ```
pub struct Cursor<'a, T> {
    pub(crate) raw: RawCursor<T>,
    pub(crate) _phantom: PhantomData<&'a LinkedList<T>>,
}

impl<'a, T> Cursor<'a, T> {
    pub(crate) const fn from_raw(raw: RawCursor<T>) -> Cursor<'a, T> {
        Cursor {
            raw,
            _phantom: PhantomData,
        }
    }

    /// Returns true if the cursor is on the end position.
    pub fn is_end(&self) -> bool {
        self.raw.is_end()
    }

    /// Returns true if the cursor is on the first element, or on the end position of an empty
    /// list.
    pub fn is_begin(&self) -> bool {
        self.raw.is_begin()
    }

    /// Moves the cursor to the next position.
    ///
    /// # Panics
    /// Panics if the cursor is on the end position.
    #[track_caller]
    pub fn move_next(&mut self) -> &mut Self {
        self.raw.try_move_next().throw();
        self
    }

    /// Moves the cursor to the next position, or returns [`CursorError::BeyondEnd`] if it is on
    /// the end position.
    pub fn try_move_next(&mut self) -> Result<&mut Self, CursorError> {
        self.raw.try_move_next()?;
        Ok(self)
    }

    /// Moves the cursor to the previous position.
    ///
    /// # Panics
    /// Panics if the cursor is on the first element.
    #[track_caller]
    pub fn move_prev(&mut self) -> &mut Self {
        self.raw.try_move_prev().throw();
        self
    }

    /// Moves the cursor to the previous position, or returns [`CursorError::BeforeBegin`] if it is
    /// on the first element.
    pub fn try_move_prev(&mut self) -> Result<&mut Self, CursorError> {
        self.raw.try_move_prev()?;
        Ok(self)
    }

    /// Returns the element the cursor is positioned on.
    ///
    /// # Panics
    /// Panics if the cursor is on the end position.
    #[track_caller]
    pub fn current(&self) -> &'a T {
        self.try_current().throw()
    }

    /// Returns the element the cursor is positioned on, or [`CursorError::EndDereference`] if it is
    /// on the end position.
    pub fn try_current(&self) -> Result<&'a T, CursorError> {
        // SAFETY: The list is borrowed immutably for 'a.
        unsafe { self.raw.try_value() }
    }

    /// Returns the element the cursor is positioned on, if there is one.
    pub fn peek(&self) -> Option<&'a T> {
        self.try_current().ok()
    }
}

impl<'a, T> Clone for Cursor<'a, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T> Copy for Cursor<'a, T> {}

impl<'a, 'b, T> PartialEq<Cursor<'b, T>> for Cursor<'a, T> {
    fn eq(&self, other: &Cursor<'b, T>) -> bool {
        self.raw.node == other.raw.node
    }
}

impl<'a, T> Eq for Cursor<'a, T> {}

impl<'a, T: Debug> Debug for Cursor<'a, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("current", &self.peek())
            .finish()
    }
}

/// A cursor over a [`LinkedList`] with mutable access, created with
/// [`LinkedList::cursor_begin_mut`] or [`LinkedList::cursor_end_mut`].
///
/// A CursorMut can do everything a [`Cursor`] can, and can also write to the current element,
/// insert before it and remove it. It holds the list's unique borrow for as long as it exists.
///
/// # Examples
/// ```
/// # use dsa_lib::collections::linked::LinkedList;
/// let mut list = LinkedList::from([1, 2, 4]);
/// let mut cursor = list.cursor_begin_mut();
/// *cursor.current_mut() *= 10;
/// cursor.move_next().move_next();
/// cursor.insert_before(3);
/// assert_eq!(cursor.remove_current(), Some(4));
/// assert!(cursor.is_end());
/// assert_eq!(list, LinkedList::from([10, 2, 3]));
/// ```
pub struct CursorMut<'a, T> {
    pub(crate) raw: RawCursor<T>,
    pub(crate) list: &'a mut LinkedList<T>,
}

impl<'a, T> CursorMut<'a, T> {
    pub(crate) const fn from_raw(raw: RawCursor<T>, list: &'a mut LinkedList<T>) -> CursorMut<'a, T> {
        CursorMut {
            raw,
            list,
        }
    }

    /// Returns a read-only cursor at the same position, borrowing from self.
    pub fn as_cursor(&self) -> Cursor<'_, T> {
        Cursor::from_raw(self.raw)
    }

    /// Converts self into a read-only cursor at the same position, keeping the list borrowed for
    /// `'a`.
    pub fn into_cursor(self) -> Cursor<'a, T> {
        Cursor::from_raw(self.raw)
    }

    /// Returns true if the cursor is on the end position.
    pub fn is_end(&self) -> bool {
        self.raw.is_end()
    }

    /// Returns true if the cursor is on the first element, or on the end position of an empty
    /// list.
    pub fn is_begin(&self) -> bool {
        self.raw.is_begin()
    }

    /// Moves the cursor to the next position.
    ///
    /// # Panics
    /// Panics if the cursor is on the end position.
    #[track_caller]
    pub fn move_next(&mut self) -> &mut Self {
        self.raw.try_move_next().throw();
        self
    }

    /// Moves the cursor to the next position, or returns [`CursorError::BeyondEnd`] if it is on
    /// the end position.
    pub fn try_move_next(&mut self) -> Result<&mut Self, CursorError> {
        self.raw.try_move_next()?;
        Ok(self)
    }

    /// Moves the cursor to the previous position.
    ///
    /// # Panics
    /// Panics if the cursor is on the first element.
    #[track_caller]
    pub fn move_prev(&mut self) -> &mut Self {
        self.raw.try_move_prev().throw();
        self
    }

    /// Moves the cursor to the previous position, or returns [`CursorError::BeforeBegin`] if it is
    /// on the first element.
    pub fn try_move_prev(&mut self) -> Result<&mut Self, CursorError> {
        self.raw.try_move_prev()?;
        Ok(self)
    }

    /// Returns the element the cursor is positioned on.
    ///
    /// # Panics
    /// Panics if the cursor is on the end position.
    #[track_caller]
    pub fn current(&self) -> &T {
        self.try_current().throw()
    }

    /// Returns the element the cursor is positioned on, or [`CursorError::EndDereference`].
    pub fn try_current(&self) -> Result<&T, CursorError> {
        // SAFETY: The returned reference borrows self, which holds the list's unique borrow.
        unsafe { self.raw.try_value() }
    }

    /// Returns the element the cursor is positioned on, if there is one.
    pub fn peek(&self) -> Option<&T> {
        self.try_current().ok()
    }

    /// Returns the element the cursor is positioned on, mutably.
    ///
    /// # Panics
    /// Panics if the cursor is on the end position.
    #[track_caller]
    pub fn current_mut(&mut self) -> &mut T {
        self.try_current_mut().throw()
    }

    /// Mutable form of [`CursorMut::try_current`].
    pub fn try_current_mut(&mut self) -> Result<&mut T, CursorError> {
        // SAFETY: The returned reference mutably borrows self, which holds the list's unique
        // borrow, so it is the only reference to the value.
        unsafe { self.raw.try_value_mut() }
    }

    /// Returns the element the cursor is positioned on mutably, if there is one.
    pub fn peek_mut(&mut self) -> Option<&mut T> {
        self.try_current_mut().ok()
    }

    /// Inserts `value` immediately before the cursor's position. The cursor stays on the same
    /// element. On the end position this is equivalent to [`LinkedList::push_back`].
    ///
    /// # Panics
    /// Panics if the length of the LinkedList would overflow a [`usize`].
    pub fn insert_before(&mut self, value: T) {
        // SAFETY: node is a position of the borrowed list, so it and its predecessor are adjacent.
        unsafe {
            let prev = self.raw.node.prev();
            self.list.attach_node(prev, self.raw.node, NodeRef::from_value(value));
        }
    }

    /// Removes the element the cursor is positioned on and returns it, moving the cursor to the
    /// following position. Returns [`None`] on the end position.
    pub fn remove_current(&mut self) -> Option<T> {
        if self.is_end() {
            return None;
        }

        let node = self.raw.node;
        // SAFETY: node is a real node of the borrowed list. The cursor is moved off of it before it
        // is freed.
        unsafe {
            self.raw.advance();
            Some(self.list.detach_node(node))
        }
    }
}

impl<'a, 'b, T> PartialEq<Cursor<'b, T>> for CursorMut<'a, T> {
    fn eq(&self, other: &Cursor<'b, T>) -> bool {
        self.raw.node == other.raw.node
    }
}

impl<'a, T: Debug> Debug for CursorMut<'a, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("CursorMut")
            .field("current", &self.peek())
            .finish()
    }
}
