use std::fmt::{self, Debug, Formatter};
use std::marker::PhantomData;
use std::ptr::NonNull;

// NOTE: Nodes are allocated with Box<T> rather than alloc, because Box<T> has the special property
// that dereferencing it allows a value to be moved out of the heap.

/// The pair of links shared by every position in the ring. The sentinel is a bare `Links`, a real
/// node is a [`Node<T>`] which starts with one.
pub(crate) struct Links {
    pub prev: NonNull<Links>,
    pub next: NonNull<Links>,
}

#[repr(C)]
pub(crate) struct Node<T> {
    // Must stay the first field, so that a pointer to a Node<T> is also a pointer to its Links.
    pub links: Links,
    pub value: T,
}

/// A copyable handle to one position in a list's ring, either the sentinel or a real node.
///
/// None of the accessors check which kind of position they are handed. Reading a value through a
/// handle to the sentinel is undefined behavior, which is why every accessor is `unsafe`.
pub(crate) struct NodeRef<T> {
    ptr: NonNull<Links>,
    _phantom: PhantomData<*const Node<T>>,
}

impl<T> NodeRef<T> {
    /// Allocates a new sentinel, linked to itself in both directions.
    pub fn sentinel() -> NodeRef<T> {
        let ptr = NonNull::from(Box::leak(Box::new(Links {
            prev: NonNull::dangling(),
            next: NonNull::dangling(),
        })));

        // SAFETY: ptr was just leaked from a Box, so it is valid and uniquely owned here.
        unsafe {
            (*ptr.as_ptr()).prev = ptr;
            (*ptr.as_ptr()).next = ptr;
        }

        NodeRef::from_links(ptr)
    }

    /// Allocates a new node holding `value`. Its links are dangling until it is attached.
    pub fn from_value(value: T) -> NodeRef<T> {
        let node = Box::leak(Box::new(Node {
            links: Links {
                prev: NonNull::dangling(),
                next: NonNull::dangling(),
            },
            value,
        }));

        NodeRef::from_links(NonNull::from(node).cast())
    }

    const fn from_links(ptr: NonNull<Links>) -> NodeRef<T> {
        NodeRef {
            ptr,
            _phantom: PhantomData,
        }
    }

    /// Frees a real node, returning its value.
    ///
    /// # Safety
    /// `self` must refer to a live real node (not a sentinel) that is no longer reachable from any
    /// list. The handle, and all copies of it, are dangling afterwards.
    pub unsafe fn take_value(self) -> T {
        // SAFETY: The caller guarantees that this pointer came from NodeRef::from_value and hasn't
        // been freed yet.
        let node = unsafe { Box::from_raw(self.ptr.cast::<Node<T>>().as_ptr()) };
        node.value
    }

    /// Frees a sentinel.
    ///
    /// # Safety
    /// `self` must refer to a live sentinel created by [`NodeRef::sentinel`], which no other
    /// handle will be used to access afterwards.
    pub unsafe fn drop_sentinel(self) {
        // SAFETY: The caller guarantees that this pointer came from NodeRef::sentinel and hasn't
        // been freed yet.
        drop(unsafe { Box::from_raw(self.ptr.as_ptr()) });
    }

    /// Returns the handle that follows this one in the ring.
    ///
    /// # Safety
    /// `self` must refer to a live position in a well-formed ring.
    pub unsafe fn next(self) -> NodeRef<T> {
        // SAFETY: The caller guarantees the pointer is live.
        NodeRef::from_links(unsafe { (*self.ptr.as_ptr()).next })
    }

    /// Returns the handle that precedes this one in the ring.
    ///
    /// # Safety
    /// `self` must refer to a live position in a well-formed ring.
    pub unsafe fn prev(self) -> NodeRef<T> {
        // SAFETY: The caller guarantees the pointer is live.
        NodeRef::from_links(unsafe { (*self.ptr.as_ptr()).prev })
    }

    /// Links `prev` and `next` so that they are adjacent, `prev` first.
    ///
    /// # Safety
    /// Both handles must refer to live positions. Whatever was previously adjacent to them in the
    /// relinked directions is no longer reachable through them.
    pub unsafe fn connect(prev: NodeRef<T>, next: NodeRef<T>) {
        // SAFETY: The caller guarantees that both pointers are live. No references to the links
        // are held across these writes.
        unsafe {
            (*prev.ptr.as_ptr()).next = next.ptr;
            (*next.ptr.as_ptr()).prev = prev.ptr;
        }
    }

    /// Returns a reference to the value held by this node.
    ///
    /// # Safety
    /// `self` must refer to a live real node (not the sentinel), and the value must not be mutated
    /// or freed for the chosen lifetime `'a`.
    pub unsafe fn value<'a>(self) -> &'a T {
        // SAFETY: Real nodes are always Node<T> allocations and the caller upholds aliasing.
        unsafe { &(*self.ptr.cast::<Node<T>>().as_ptr()).value }
    }

    /// Returns a mutable reference to the value held by this node.
    ///
    /// # Safety
    /// `self` must refer to a live real node (not the sentinel), and no other reference to the
    /// value may exist for the chosen lifetime `'a`.
    pub unsafe fn value_mut<'a>(self) -> &'a mut T {
        // SAFETY: Real nodes are always Node<T> allocations and the caller upholds aliasing.
        unsafe { &mut (*self.ptr.cast::<Node<T>>().as_ptr()).value }
    }
}

impl<T> Clone for NodeRef<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NodeRef<T> {}

impl<T> PartialEq for NodeRef<T> {
    fn eq(&self, other: &Self) -> bool {
        self.ptr == other.ptr
    }
}

impl<T> Eq for NodeRef<T> {}

impl<T> Debug for NodeRef<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "NodeRef({:p})", self.ptr)
    }
}
