#![cfg(test)]

use std::borrow::Borrow;
use std::hash::{BuildHasher, RandomState};
use std::iter;

use super::*;
use crate::util::alloc::{CountedDrop, ZeroSizedType};
use crate::util::panic::assert_panics;

#[test]
fn test_growth_doubles_capacity() {
    let mut vec = Vector::new();
    assert_eq!(vec.cap(), 0, "A new Vector shouldn't allocate.");

    vec.push(0_u32);
    assert_eq!(vec.cap(), 1, "The first push should allocate a single slot.");

    let mut caps = Vec::new();
    for i in 1..9 {
        vec.push(i);
        caps.push(vec.cap());
    }
    assert_eq!(caps, [2, 4, 4, 8, 8, 8, 8, 16], "The capacity should double when full.");
    assert_eq!(&*vec, &[0, 1, 2, 3, 4, 5, 6, 7, 8]);
}

#[test]
fn test_repeated_extends_grow_geometrically() {
    let mut vec = Vector::new();
    let mut reallocs = 0;

    for i in 0..1000_u32 {
        let old_cap = vec.cap();
        vec.extend([i]);
        if vec.cap() != old_cap {
            reallocs += 1;
        }
    }

    assert_eq!(reallocs, 11, "Extending one item at a time should double like push.");
    assert_eq!(vec.cap(), 1024);
    assert_eq!(vec.len(), 1000);

    let mut vec: Vector<u8> = Vector::with_cap(2);
    vec.extend([1, 2, 3, 4, 5]);
    assert_eq!(vec.cap(), 5, "A larger batch should reserve exactly what it needs.");
}

#[test]
fn test_reserve_and_shrink() {
    let mut vec: Vector<u16> = Vector::with_cap(4);
    vec.reserve(2);
    assert_eq!(vec.cap(), 4, "Reserving less than the capacity shouldn't shrink.");

    vec.reserve(10);
    assert_eq!(vec.cap(), 10, "Reserving more should set the capacity exactly.");

    vec.extend([1, 2, 3]);
    vec.shrink_to_fit();
    assert_eq!(vec.cap(), 3);
    assert_eq!(&*vec, &[1, 2, 3], "Shrinking should keep every element.");

    vec.clear();
    vec.shrink_to_fit();
    assert_eq!(vec.cap(), 0);
    vec.push(4);
    assert_eq!(&*vec, &[4], "A Vector shrunk to zero should still be usable.");

    assert!(
        Vector::<u16>::new().try_reserve(usize::MAX).is_err(),
        "A layout over isize::MAX bytes should be reported."
    );
    assert_panics!({
        Vector::<u16>::new().reserve(isize::MAX as usize + 1);
    });
}

#[test]
fn test_zst_support() {
    let mut vec = Vector::new();
    for _ in 0..10 {
        vec.push(ZeroSizedType);
    }
    assert_eq!(vec.len(), 10);
    assert_eq!(vec[9], ZeroSizedType, "Indexing with an in-bounds offset should work.");

    let old_ptr = vec.ptr;
    vec.reserve(1000);
    assert_eq!(vec.ptr, old_ptr, "Pointer shouldn't change when reallocated for a ZST.");
    assert_eq!(vec.pop(), Some(ZeroSizedType));
    assert_eq!(vec.into_iter().count(), 9);
}

#[test]
fn test_insert_remove_replace() {
    let mut vec = Vector::from([1, 3]);
    vec.insert(1, 2);
    vec.insert(0, 0);
    vec.insert(4, 4);
    assert_eq!(&*vec, &[0, 1, 2, 3, 4], "Inserting at len should append.");

    assert_eq!(vec.remove(0), 0);
    assert_eq!(vec.remove(3), 4);
    assert_eq!(&*vec, &[1, 2, 3]);

    assert_eq!(vec.replace(1, 20), 2);
    assert_eq!(&*vec, &[1, 20, 3]);

    assert_eq!(
        vec.try_insert(5, 0),
        Err(IndexOrCapOverflow::IndexOutOfBounds(IndexOutOfBounds { index: 5, len: 3 }))
    );
    assert_eq!(vec.try_remove(3), Err(IndexOutOfBounds { index: 3, len: 3 }));
    assert_eq!(vec.try_replace(7, 0), Err(IndexOutOfBounds { index: 7, len: 3 }));
    assert_eq!(&*vec, &[1, 20, 3], "Failed operations shouldn't change the Vector.");

    assert_panics!({
        vec.clone().insert(4, 0);
    });
    assert_panics!({
        vec.clone().remove(3);
    });
    assert_panics!({
        vec.clone().replace(3, 0);
    });
}

#[test]
fn test_front_and_back() {
    let mut vec = Vector::from(['a', 'b', 'c']);
    assert_eq!(vec.front(), Some(&'a'));
    assert_eq!(vec.back(), Some(&'c'));

    if let Some(back) = vec.back_mut() {
        *back = 'z';
    }
    assert_eq!(vec.pop(), Some('z'));

    let mut empty: Vector<char> = Vector::new();
    assert_eq!(empty.front(), None);
    assert_eq!(empty.back_mut(), None);
    assert_eq!(empty.pop(), None);
}

#[test]
fn test_drop() {
    let counter = CountedDrop::new();
    let vec: Vector<_> = iter::repeat_with(|| counter.clone()).take(10).collect();

    drop(vec);
    assert_eq!(counter.drops(), 10, "10 elements should have been dropped.");

    let mut vec: Vector<_> = iter::repeat_with(|| counter.clone()).take(4).collect();
    drop(vec.remove(1));
    vec.clear();
    assert_eq!(counter.drops(), 14, "Removed and cleared elements should each drop once.");
    drop(vec);
    assert_eq!(counter.drops(), 14, "A cleared Vector shouldn't drop anything again.");
}

#[test]
fn test_equality_and_hash() {
    let vec = Vector::from_iter(0_usize..5);

    assert_eq!(
        vec,
        Vector::from([0, 1, 2, 3, 4]),
        "Different construction methods should produce equal results."
    );
    assert_ne!(Vector::from([0, 1, 2, 5, 4]), vec);

    assert_eq!(
        Borrow::<[usize]>::borrow(&vec),
        &[0, 1, 2, 3, 4],
        "Borrow equality should be upheld."
    );
    assert_eq!(&*vec, &[0, 1, 2, 3, 4], "Deref equality should be upheld.");

    let state = RandomState::new();
    assert_eq!(
        state.hash_one(&vec),
        state.hash_one(Vector::from_iter(0_usize..5)),
        "Equal vectors should produce the same hash."
    );
    assert_eq!(
        state.hash_one(&vec),
        state.hash_one([0_usize, 1, 2, 3, 4]),
        "Borrow hash equality should be upheld."
    );
}

#[test]
fn test_iterators() {
    let mut vec = Vector::from_iter(0_usize..5);
    let collected: Vector<_> = vec.iter().cloned().collect();
    assert_eq!(vec, collected, "Collected iter should be equal.");

    for i in &mut vec {
        *i *= 2;
    }
    assert_eq!(*vec, [0_usize, 2, 4, 6, 8], "Vector mutated by iterator should equal this slice.");

    let mut iter = vec.clone().into_iter();
    assert_eq!(iter.next(), Some(0));
    assert_eq!(iter.next_back(), Some(8));
    assert_eq!(iter.as_slice(), &[2, 4, 6]);
    assert_eq!(iter.next_back(), Some(6));
    assert_eq!(iter.next(), Some(2));
    assert_eq!(iter.next_back(), Some(4));
    assert_eq!(iter.next(), None);

    let counter = CountedDrop::new();
    let vec: Vector<_> = iter::repeat_with(|| counter.clone()).take(10).collect();
    let mut iter = vec.into_iter();
    drop(iter.next());
    drop(iter);
    assert_eq!(counter.drops(), 10, "Dropping an owned iterator should drop all elements.");
}

#[test]
fn test_clone_is_independent() {
    let original = Vector::from([String::from("a"), String::from("b")]);
    let mut copy = original.clone();
    copy[0].push('!');
    copy.push(String::from("c"));

    assert_eq!(&*original, &["a", "b"]);
    assert_eq!(&*copy, &["a!", "b", "c"]);
}

#[test]
fn test_display_and_debug() {
    assert_eq!(Vector::from([1, 2, 3]).to_string(), "[1, 2, 3]");
    assert_eq!(Vector::<u8>::new().to_string(), "[]");

    let mut vec = Vector::with_cap(4);
    vec.extend([1, 2]);
    assert_eq!(format!("{vec:?}"), "Vector { contents: [1, 2], len: 2, cap: 4 }");
}
