//! The inline half of [`InlineVec`](crate::InlineVec): a fixed-capacity
//! buffer of raw (possibly uninitialized) element slots.
//!
//! Elements are constructed and destroyed one slot at a time; the buffer is
//! never default-initialized as a whole. All length bookkeeping lives here,
//! the capacity checks live in the caller.

use alloc::vec::Vec;
use core::{
    mem::{ManuallyDrop, MaybeUninit},
    ptr, slice,
};

pub(crate) struct InlineBuf<T, const N: usize> {
    data: [MaybeUninit<T>; N],
    len: usize,
}

impl<T, const N: usize> Drop for InlineBuf<T, N> {
    // Slots are `MaybeUninit`, so the live prefix must be dropped by hand.
    fn drop(&mut self) {
        if self.len > 0 {
            // SAFETY: the first `len` slots hold initialized elements.
            unsafe {
                ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.as_mut_ptr(), self.len));
            }
        }
    }
}

impl<T, const N: usize> InlineBuf<T, N> {
    #[inline]
    pub(crate) const fn new() -> Self {
        Self {
            // SAFETY: an uninitialized array of `MaybeUninit` is itself
            // a valid value.
            data: unsafe { MaybeUninit::<[MaybeUninit<T>; N]>::uninit().assume_init() },
            len: 0,
        }
    }

    #[inline(always)]
    pub(crate) const fn len(&self) -> usize {
        self.len
    }

    #[inline(always)]
    pub(crate) const fn as_ptr(&self) -> *const T {
        self.data.as_ptr().cast::<T>()
    }

    #[inline(always)]
    pub(crate) fn as_mut_ptr(&mut self) -> *mut T {
        self.data.as_mut_ptr().cast::<T>()
    }

    #[inline]
    pub(crate) fn as_slice(&self) -> &[T] {
        // SAFETY: the first `len` slots are initialized.
        unsafe { slice::from_raw_parts(self.as_ptr(), self.len) }
    }

    #[inline]
    pub(crate) fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: the first `len` slots are initialized.
        unsafe { slice::from_raw_parts_mut(self.as_mut_ptr(), self.len) }
    }

    /// # Safety
    /// - `new_len <= N`.
    /// - On growth the new slots must already hold initialized elements;
    ///   on shrink the abandoned elements must not need dropping here.
    #[inline(always)]
    pub(crate) unsafe fn set_len(&mut self, new_len: usize) {
        debug_assert!(new_len <= N);
        self.len = new_len;
    }

    /// # Safety
    /// `len < N` before the call.
    #[inline(always)]
    pub(crate) unsafe fn push_unchecked(&mut self, value: T) {
        debug_assert!(self.len < N);
        unsafe {
            ptr::write(self.as_mut_ptr().add(self.len), value);
        }
        self.len += 1;
    }

    #[inline]
    pub(crate) fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            None
        } else {
            self.len -= 1;
            // SAFETY: slot `len` was initialized and is now out of the live
            // prefix, so it is read exactly once.
            unsafe { Some(ptr::read(self.as_ptr().add(self.len))) }
        }
    }

    /// Shifts `[index, len)` right by one and writes `element` at `index`.
    ///
    /// # Safety
    /// `index <= len` and `len < N` before the call.
    #[inline]
    pub(crate) unsafe fn insert_unchecked(&mut self, index: usize, element: T) {
        debug_assert!(index <= self.len);
        debug_assert!(self.len < N);
        unsafe {
            let p = self.as_mut_ptr().add(index);
            if index < self.len {
                ptr::copy(p, p.add(1), self.len - index);
            }
            ptr::write(p, element);
        }
        self.len += 1;
    }

    /// Removes the element at `index`, shifting the tail left by one.
    ///
    /// # Panics
    /// Panics if `index >= len`.
    #[inline]
    pub(crate) fn remove(&mut self, index: usize) -> T {
        assert!(index < self.len, "removal index should be < len");
        unsafe {
            let p = self.as_mut_ptr().add(index);
            let value = ptr::read(p);
            ptr::copy(p.add(1), p, self.len - index - 1);
            self.len -= 1;
            value
        }
    }

    /// Removes the element at `index`, replacing it with the last element.
    ///
    /// # Panics
    /// Panics if `index >= len`.
    #[inline]
    pub(crate) fn swap_remove(&mut self, index: usize) -> T {
        assert!(index < self.len, "removal index should be < len");
        unsafe {
            let base = self.as_mut_ptr();
            let value = ptr::read(base.add(index));
            ptr::copy(base.add(self.len - 1), base.add(index), 1);
            self.len -= 1;
            value
        }
    }

    pub(crate) fn truncate(&mut self, len: usize) {
        if self.len > len {
            let dropped = self.len - len;
            // Update the length first so a panicking destructor cannot
            // cause a double drop.
            self.len = len;
            unsafe {
                ptr::drop_in_place(ptr::slice_from_raw_parts_mut(
                    self.as_mut_ptr().add(len),
                    dropped,
                ));
            }
        }
    }

    #[inline]
    pub(crate) fn clear(&mut self) {
        self.truncate(0);
    }

    pub(crate) fn retain_mut<F: FnMut(&mut T) -> bool>(&mut self, mut f: F) {
        struct FillGapGuard<'a, T, const N: usize> {
            buf: &'a mut InlineBuf<T, N>,
            processed: usize,
            deleted: usize,
            original_len: usize,
        }

        // Runs on normal exit and on unwind out of the predicate or a
        // destructor: shifts the unprocessed tail over the gap left by
        // deleted elements and publishes a length covering exactly the live
        // ones, so the buffer's own `Drop` cannot free a slot twice.
        impl<T, const N: usize> Drop for FillGapGuard<'_, T, N> {
            fn drop(&mut self) {
                unsafe {
                    let base = self.buf.as_mut_ptr();
                    ptr::copy(
                        base.add(self.processed),
                        base.add(self.processed - self.deleted),
                        self.original_len - self.processed,
                    );
                }
                self.buf.len = self.original_len - self.deleted;
            }
        }

        let original_len = self.len;
        // The raw slots are inconsistent while the loop runs; the zero
        // length keeps `Drop` away from them until the guard restores it.
        self.len = 0;
        let mut guard = FillGapGuard {
            buf: self,
            processed: 0,
            deleted: 0,
            original_len,
        };
        while guard.processed < original_len {
            unsafe {
                let base = guard.buf.as_mut_ptr();
                let cur = base.add(guard.processed);
                if f(&mut *cur) {
                    if guard.deleted > 0 {
                        ptr::copy_nonoverlapping(cur, base.add(guard.processed - guard.deleted), 1);
                    }
                    guard.processed += 1;
                } else {
                    // Count the slot as dead before running its destructor,
                    // so a panicking destructor does not run twice.
                    guard.processed += 1;
                    guard.deleted += 1;
                    ptr::drop_in_place(cur);
                }
            }
        }
    }

    /// Relocates every element into a fresh heap buffer of at least
    /// `capacity` slots, leaving `self` empty.
    ///
    /// The elements are moved as one contiguous block, in index order, and
    /// only forgotten here once they live in the new region.
    pub(crate) fn spill_into_vec(&mut self, capacity: usize) -> Vec<T> {
        debug_assert!(capacity >= self.len);
        let mut vec: Vec<T> = Vec::with_capacity(capacity);
        unsafe {
            ptr::copy_nonoverlapping(self.as_ptr(), vec.as_mut_ptr(), self.len);
            vec.set_len(self.len);
            self.len = 0;
        }
        vec
    }
}

/// By-value iterator over the inline buffer.
///
/// `buf` is wrapped in `ManuallyDrop` because ownership of the elements is
/// split: `[index, len)` still belongs to the iterator, everything before
/// `index` has been handed out.
pub(crate) struct IntoIter<T, const N: usize> {
    buf: ManuallyDrop<InlineBuf<T, N>>,
    index: usize,
}

impl<T, const N: usize> IntoIter<T, N> {
    #[inline]
    pub(crate) fn new(buf: InlineBuf<T, N>) -> Self {
        Self {
            buf: ManuallyDrop::new(buf),
            index: 0,
        }
    }

    pub(crate) fn as_slice(&self) -> &[T] {
        let len = self.buf.len - self.index;
        unsafe { slice::from_raw_parts(self.buf.as_ptr().add(self.index), len) }
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [T] {
        let len = self.buf.len - self.index;
        unsafe { slice::from_raw_parts_mut(self.buf.as_mut_ptr().add(self.index), len) }
    }
}

impl<T, const N: usize> Default for IntoIter<T, N> {
    fn default() -> Self {
        Self::new(InlineBuf::new())
    }
}

impl<T, const N: usize> Iterator for IntoIter<T, N> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        if self.index < self.buf.len {
            self.index += 1;
            unsafe { Some(ptr::read(self.buf.as_ptr().add(self.index - 1))) }
        } else {
            None
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.buf.len - self.index;
        (remaining, Some(remaining))
    }
}

impl<T, const N: usize> DoubleEndedIterator for IntoIter<T, N> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        if self.index < self.buf.len {
            self.buf.len -= 1;
            unsafe { Some(ptr::read(self.buf.as_ptr().add(self.buf.len))) }
        } else {
            None
        }
    }
}

impl<T, const N: usize> ExactSizeIterator for IntoIter<T, N> {
    #[inline]
    fn len(&self) -> usize {
        self.buf.len - self.index
    }
}

impl<T, const N: usize> core::iter::FusedIterator for IntoIter<T, N> {}

impl<T, const N: usize> Drop for IntoIter<T, N> {
    fn drop(&mut self) {
        if self.index < self.buf.len {
            unsafe {
                ptr::drop_in_place(slice::from_raw_parts_mut(
                    self.buf.as_mut_ptr().add(self.index),
                    self.buf.len - self.index,
                ));
            }
        }
    }
}
