use std::alloc::{self, Layout};
use std::borrow::{Borrow, BorrowMut};
use std::cmp;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::mem;
use std::ops::{Deref, DerefMut};
use std::ptr::{self, NonNull};
use std::slice;

#[doc(inline)]
pub use crate::util::error::{CapacityOverflow, IndexOrCapOverflow, IndexOutOfBounds};
use crate::util::fmt::DebugIter;
use crate::util::result::ResultExtension;

const MIN_CAP: usize = 1;

const GROWTH_FACTOR: usize = 2;

/// A variable size contiguous collection, which owns a single heap allocation of `cap` slots, the
/// first `len` of which are initialized.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the Vector.
/// - `i`: The index of the item in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `get` | `O(1)` |
/// | `len` | `O(1)` |
/// | `push` | `O(1)`*, `O(n)` |
/// | `pop` | `O(1)` |
/// | `insert` | `O(n-i)` |
/// | `remove` | `O(n-i)` |
/// | `replace` | `O(1)` |
/// | `reserve` | `O(n)`**, `O(1)` |
/// | `shrink_to_fit` | `O(n)` |
/// | `clear` | `O(n)` |
///
/// \* If the Vector doesn't have enough capacity for the new element, `push` will take `O(n)`. The
/// capacity doubles each time this happens, so `push` is amortized `O(1)`.
///
/// \** If the Vector has enough capacity already, `reserve` is `O(1)`.
pub struct Vector<T> {
    pub(crate) ptr: NonNull<T>,
    pub(crate) cap: usize,
    pub(crate) len: usize,
    pub(crate) _phantom: PhantomData<T>,
}

impl<T> Vector<T> {
    /// Creates a new Vector with length and capacity 0. Memory will be allocated when the capacity
    /// changes.
    ///
    /// # Examples
    /// ```
    /// # use dsa_lib::collections::contiguous::Vector;
    /// let vec: Vector<u8> = Vector::new();
    /// assert_eq!(vec.len(), 0);
    /// assert_eq!(vec.cap(), 0);
    /// ```
    pub const fn new() -> Vector<T> {
        Vector {
            ptr: NonNull::dangling(),
            cap: 0,
            len: 0,
            _phantom: PhantomData,
        }
    }

    /// Creates a new Vector with capacity exactly equal to the provided value, allowing values to
    /// be added without reallocation.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use dsa_lib::collections::contiguous::Vector;
    /// let mut vec: Vector<u8> = Vector::with_cap(5);
    /// assert_eq!(vec.cap(), 5);
    /// vec.extend([1_u8, 2, 3, 4, 5]);
    /// assert_eq!(vec.cap(), 5);
    /// ```
    pub fn with_cap(cap: usize) -> Vector<T> {
        let mut vec = Vector::new();
        vec.realloc(cap).throw();
        vec
    }

    /// Returns the length of the Vector.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the Vector contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the current capacity of the Vector. The capacity only ever changes through `push`
    /// (doubling when full), `insert`, `reserve`, `shrink_to_fit` and `with_cap`.
    pub const fn cap(&self) -> usize {
        self.cap
    }

    /// Push the provided value onto the end of the Vector, increasing the capacity if required.
    ///
    /// # Panics
    /// Panics if the memory layout of the Vector would have a size that exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use dsa_lib::collections::contiguous::Vector;
    /// let mut vec = Vector::<u8>::new();
    /// for i in 0..=5 {
    ///     vec.push(i);
    /// }
    /// assert_eq!(&*vec, &[0, 1, 2, 3, 4, 5]);
    /// ```
    pub fn push(&mut self, value: T) {
        if self.len == self.cap {
            self.grow().throw();
        }

        // SAFETY: There is at least one slot of spare capacity at index len.
        unsafe { self.ptr.add(self.len).write(value); }
        self.len += 1;
    }

    /// Pops the last value off the end of the Vector, returning an owned value if the Vector has
    /// length greater than 0.
    ///
    /// # Examples
    /// ```
    /// # use dsa_lib::collections::contiguous::Vector;
    /// let mut vec = Vector::from_iter(0..5);
    /// for i in (0..vec.len()).rev() {
    ///     assert_eq!(vec.pop(), Some(i));
    /// }
    /// assert_eq!(vec.pop(), None);
    /// ```
    pub const fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            None
        } else {
            // Decrement len before reading, so that the slot is treated as uninitialized.
            self.len -= 1;

            // SAFETY: The slot at the old last index is initialized and in bounds. Once len has
            // been decremented, the bitwise copy that is returned is the only owner of the value.
            Some(unsafe { self.ptr.add(self.len).read() })
        }
    }

    /// Inserts the provided value at the given index, growing and shifting items as necessary. An
    /// index equal to the length appends the value.
    ///
    /// # Panics
    /// Panics if the provided index is greater than the length, or if the memory layout of the
    /// Vector would have a size that exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use dsa_lib::collections::contiguous::Vector;
    /// let mut vec = Vector::from_iter(0..3);
    /// vec.insert(1, 100);
    /// vec.insert(1, 200);
    /// vec.insert(5, 300);
    /// assert_eq!(&*vec, &[0, 200, 100, 1, 2, 300]);
    /// ```
    #[track_caller]
    pub fn insert(&mut self, index: usize, value: T) {
        self.try_insert(index, value).throw()
    }

    /// Inserts the provided value at the given index. On an error, the value is dropped and the
    /// Vector is unchanged.
    pub fn try_insert(&mut self, index: usize, value: T) -> Result<(), IndexOrCapOverflow> {
        if index > self.len {
            return Err(IndexOutOfBounds { index, len: self.len }.into());
        }

        if self.len == self.cap {
            self.grow()?;
        }

        // SAFETY: index <= len < cap, so both the shifted range and the written slot are within
        // the allocation. ptr::copy handles the overlap.
        unsafe {
            let at = self.ptr.add(index);
            ptr::copy(at.as_ptr(), at.add(1).as_ptr(), self.len - index);
            at.write(value);
        }
        self.len += 1;

        Ok(())
    }

    /// Removes the element at the provided index, shifting all following values to fill in the
    /// gap.
    ///
    /// # Panics
    /// Panics if the provided index is out of bounds.
    ///
    /// # Examples
    /// ```
    /// # use dsa_lib::collections::contiguous::Vector;
    /// let mut vec: Vector<_> = "Hello world!".chars().collect();
    /// assert_eq!(vec.remove(1), 'e');
    /// assert_eq!(vec.remove(4), ' ');
    /// assert_eq!(vec, "Hlloworld!".chars().collect());
    /// ```
    #[track_caller]
    pub fn remove(&mut self, index: usize) -> T {
        self.try_remove(index).throw()
    }

    pub fn try_remove(&mut self, index: usize) -> Result<T, IndexOutOfBounds> {
        self.check_index(index)?;

        // SAFETY: index < len, so the value is initialized. After it is read out, the tail is
        // shifted down over its slot and len is reduced, so it has exactly one owner.
        unsafe {
            let at = self.ptr.add(index);
            let value = at.read();
            ptr::copy(at.add(1).as_ptr(), at.as_ptr(), self.len - index - 1);
            self.len -= 1;
            Ok(value)
        }
    }

    /// Replaces the element at the provided index with `new_value`, returning the old value.
    ///
    /// # Panics
    /// Panics if the provided index is out of bounds.
    #[track_caller]
    pub fn replace(&mut self, index: usize, new_value: T) -> T {
        self.try_replace(index, new_value).throw()
    }

    pub fn try_replace(&mut self, index: usize, new_value: T) -> Result<T, IndexOutOfBounds> {
        self.check_index(index)?;
        Ok(mem::replace(&mut self[index], new_value))
    }

    /// Returns a reference to the first element, if there is one.
    pub fn front(&self) -> Option<&T> {
        self.first()
    }

    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.first_mut()
    }

    /// Returns a reference to the last element, if there is one.
    pub fn back(&self) -> Option<&T> {
        self.last()
    }

    pub fn back_mut(&mut self) -> Option<&mut T> {
        self.last_mut()
    }

    /// Drops every element, keeping the allocation.
    pub fn clear(&mut self) {
        let len = self.len;
        // Set len first, so that a panicking drop can't cause a double drop.
        self.len = 0;

        // SAFETY: The first len slots were initialized and are no longer reachable through self.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.ptr.as_ptr(), len));
        }
    }

    /// Ensures that the Vector has a total capacity of at least `cap`. Does nothing if the
    /// capacity is already large enough, so this never shrinks the Vector.
    ///
    /// # Panics
    /// Panics if the memory layout of the Vector would have a size that exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use dsa_lib::collections::contiguous::Vector;
    /// let mut vec: Vector<u8> = Vector::with_cap(8);
    /// vec.reserve(4);
    /// assert_eq!(vec.cap(), 8);
    /// vec.reserve(16);
    /// assert_eq!(vec.cap(), 16);
    /// ```
    #[track_caller]
    pub fn reserve(&mut self, cap: usize) {
        self.try_reserve(cap).throw()
    }

    pub fn try_reserve(&mut self, cap: usize) -> Result<(), CapacityOverflow> {
        if cap <= self.cap {
            return Ok(());
        }
        self.realloc(cap)
    }

    /// Shrinks the Vector so that its capacity is equal to its length.
    pub fn shrink_to_fit(&mut self) {
        // A capacity equal to len always fits in a layout, because the current one does.
        self.realloc(self.len).throw();
    }

    /// Returns a raw pointer to the start of the allocation. Unlike the slice method of the same
    /// name, the pointer is valid for the whole capacity, so spare slots can be written through it.
    pub const fn as_mut_ptr(&mut self) -> *mut T {
        self.ptr.as_ptr()
    }

    /// Sets the length of the Vector without touching its contents.
    ///
    /// # Safety
    /// `len` must be at most `cap`, and the first `len` slots must be initialized.
    pub const unsafe fn set_len(&mut self, len: usize) {
        self.len = len;
    }

    /// Grows the allocation so that at least one more element fits, doubling the capacity.
    pub(crate) fn grow(&mut self) -> Result<(), CapacityOverflow> {
        let doubled = self.cap.checked_mul(GROWTH_FACTOR).ok_or(CapacityOverflow)?;
        self.realloc(cmp::max(doubled, MIN_CAP))
    }

    /// Moves the contents of the Vector into an allocation with exactly `new_cap` slots. Zero
    /// sized types never allocate, only the tracked capacity changes.
    pub(crate) fn realloc(&mut self, new_cap: usize) -> Result<(), CapacityOverflow> {
        debug_assert!(new_cap >= self.len, "Reallocating would lose initialized elements");

        let new_layout = Self::make_layout(new_cap)?;

        let new_ptr = match (self.cap, new_cap) {
            _ if size_of::<T>() == 0 => self.ptr,
            (old, new) if old == new => return Ok(()),
            (0, _) => Self::make_ptr(new_layout),
            (_, 0) => {
                // SAFETY: ptr was allocated by the global allocator with the layout for cap.
                unsafe { alloc::dealloc(self.ptr.as_ptr().cast(), Self::make_layout(self.cap)?); }
                NonNull::dangling()
            },
            (_, _) => {
                let old_layout = Self::make_layout(self.cap)?;

                // SAFETY: ptr was allocated by the global allocator with old_layout, and the new
                // size is non-zero and fits in isize::MAX because new_layout exists.
                let raw_ptr = unsafe {
                    alloc::realloc(self.ptr.as_ptr().cast(), old_layout, new_layout.size())
                };

                NonNull::new(raw_ptr.cast()).unwrap_or_else(|| alloc::handle_alloc_error(new_layout))
            },
        };

        self.ptr = new_ptr;
        self.cap = new_cap;
        Ok(())
    }

    fn make_layout(cap: usize) -> Result<Layout, CapacityOverflow> {
        Layout::array::<T>(cap).map_err(|_| CapacityOverflow)
    }

    fn make_ptr(layout: Layout) -> NonNull<T> {
        if layout.size() == 0 {
            return NonNull::dangling();
        }

        // SAFETY: Zero-sized layouts have been guarded against.
        let raw_ptr = unsafe { alloc::alloc(layout) };
        NonNull::new(raw_ptr.cast()).unwrap_or_else(|| alloc::handle_alloc_error(layout))
    }

    fn check_index(&self, index: usize) -> Result<(), IndexOutOfBounds> {
        match index < self.len {
            true => Ok(()),
            false => Err(IndexOutOfBounds { index, len: self.len }),
        }
    }
}

impl<T> Drop for Vector<T> {
    fn drop(&mut self) {
        self.clear();

        if self.cap != 0 && size_of::<T>() != 0 {
            // SAFETY: ptr was allocated by the global allocator with the layout for cap, which is
            // known to be valid because the allocation exists.
            unsafe {
                alloc::dealloc(self.ptr.as_ptr().cast(), Layout::array::<T>(self.cap).unwrap_unchecked());
            }
        }
    }
}

impl<T> Extend<T> for Vector<T> {
    fn extend<A: IntoIterator<Item = T>>(&mut self, iter: A) {
        let iter = iter.into_iter();
        let needed = self.len.saturating_add(iter.size_hint().0);
        if needed > self.cap {
            // Grow at least as much as a push would, so repeated extends stay amortized.
            self.reserve(cmp::max(needed, self.cap.saturating_mul(GROWTH_FACTOR)));
        }

        for item in iter {
            self.push(item);
        }
    }
}

impl<'a, T: Copy + 'a> Extend<&'a T> for Vector<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut vec = Vector::new();
        vec.extend(iter);
        vec
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T> {
    fn from(value: [T; N]) -> Self {
        value.into_iter().collect()
    }
}

impl<T> Default for Vector<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Deref for Vector<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        // SAFETY: The first len slots are initialized, properly aligned and within a single
        // allocation no larger than isize::MAX bytes. The borrow of self prevents mutation.
        unsafe { slice::from_raw_parts(self.ptr.as_ptr(), self.len) }
    }
}

impl<T> DerefMut for Vector<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        // SAFETY: As for deref, and the mutable borrow of self makes the slice unique.
        unsafe { slice::from_raw_parts_mut(self.ptr.as_ptr(), self.len) }
    }
}

impl<T> AsRef<[T]> for Vector<T> {
    fn as_ref(&self) -> &[T] {
        self.deref()
    }
}

impl<T> AsMut<[T]> for Vector<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.deref_mut()
    }
}

impl<T> Borrow<[T]> for Vector<T> {
    fn borrow(&self) -> &[T] {
        self.as_ref()
    }
}

impl<T> BorrowMut<[T]> for Vector<T> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut()
    }
}

// SAFETY: Vectors, when used safely rely on unique pointers and are therefore safe for Send when T:
// Send.
unsafe impl<T: Send> Send for Vector<T> {}
// SAFETY: Vector's safe API obeys all rules of the borrow checker, so no interior mutability
// occurs. This means that Vector<T> can safely implement Sync when T: Sync.
unsafe impl<T: Sync> Sync for Vector<T> {}

impl<T: Clone> Clone for Vector<T> {
    fn clone(&self) -> Self {
        let mut vec = Self::with_cap(self.len);
        vec.extend(self.iter().cloned());
        vec
    }
}

impl<T: PartialEq> PartialEq for Vector<T> {
    fn eq(&self, other: &Self) -> bool {
        **self == **other
    }
}

impl<T: Eq> Eq for Vector<T> {}

impl<T: Hash> Hash for Vector<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (**self).hash(state);
    }
}

impl<T: Debug> Debug for Vector<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vector")
            .field("contents", &DebugIter(self.iter()))
            .field("len", &self.len)
            .field("cap", &self.cap)
            .finish()
    }
}

impl<T: Display> Display for Vector<T> {
    /// Writes the elements in order, comma separated between square brackets: `[1, 2, 3]`.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (index, value) in self.iter().enumerate() {
            if index != 0 {
                write!(f, ", ")?;
            }
            write!(f, "{value}")?;
        }
        write!(f, "]")
    }
}
