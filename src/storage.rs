//! Owned slot buffers backing [`RingDeque`](crate::RingDeque).
//!
//! A buffer is a boxed slice of possibly uninitialized slots. Which slots hold
//! live values is tracked entirely by the owning data structure; dropping a
//! buffer never drops any of its contents.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::mem::MaybeUninit;

/// Shorthand for [`alloc::Box<[MaybeUninit<T>]>`](alloc::boxed::Box).
pub(crate) type HeapStorage<T> = Box<[MaybeUninit<T>]>;

/// Allocates a buffer of exactly `capacity` uninitialized slots.
pub(crate) fn allocate<T>(capacity: usize) -> HeapStorage<T> {
    let mut slots = Vec::with_capacity(capacity);
    slots.resize_with(capacity, MaybeUninit::uninit);
    slots.into_boxed_slice()
}

/// Returns a pointer to the slot at position `index`.
///
/// The resulting pointer does not need to be in bounds but it is potentially
/// hazardous to dereference (which requires `unsafe`). Even when in bounds,
/// the value it points to may not be initialized.
#[inline(always)]
pub(crate) fn ptr_at_index<T>(buf: &HeapStorage<T>, index: usize) -> *const T {
    debug_assert!(index <= buf.len());
    buf.as_ptr().wrapping_add(index).cast::<T>()
}

/// Returns a mutable pointer to the slot at position `index`.
///
/// Same caveats as [`ptr_at_index`].
#[inline(always)]
pub(crate) fn mut_ptr_at_index<T>(buf: &mut HeapStorage<T>, index: usize) -> *mut T {
    debug_assert!(index <= buf.len());
    buf.as_mut_ptr().wrapping_add(index).cast::<T>()
}

#[inline(never)]
#[cold]
#[track_caller]
pub(crate) fn capacity_overflow() -> ! {
    panic!("capacity overflow")
}
