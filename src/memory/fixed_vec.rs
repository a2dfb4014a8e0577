/*!
 * Fixed-Capacity Vector
 * Sequence whose storage is one block taken from a region at construction
 */

use super::align::aligned_item_size;
use super::traits::BlockAllocator;
use super::types::MemoryError;
use std::alloc::Layout;
use std::mem::{align_of, MaybeUninit};

/// Vector with storage reserved once, up front, and never reallocated
///
/// Pushing past the capacity is a contract breach and panics. Elements are
/// never dropped: like everything else in the region, they are reclaimed
/// only when the region's pages are released.
pub struct FixedVec<'r, T> {
    slots: &'r mut [MaybeUninit<T>],
    len: usize,
}

impl<'r, T> FixedVec<'r, T> {
    /// Reserve room for `max_size` elements in `allocator`
    ///
    /// # Panics
    ///
    /// Panics if the backing block is larger than the allocator serves.
    pub fn new_in<A>(allocator: &'r A, max_size: usize) -> Self
    where
        A: BlockAllocator + ?Sized,
    {
        let stride = aligned_item_size::<T>();
        let bytes = match max_size.checked_mul(stride) {
            Some(bytes) => bytes,
            None => super::contract_breach(MemoryError::BlockTooLarge {
                requested: usize::MAX,
                max: crate::core::limits::MAX_SMALL_BLOCK_SIZE,
            }),
        };
        let layout = match Layout::from_size_align(bytes, align_of::<T>()) {
            Ok(layout) => layout,
            Err(_) => super::contract_breach(MemoryError::InvalidAlignment(align_of::<T>())),
        };
        let block = allocator.allocate(layout).cast::<MaybeUninit<T>>();

        // SAFETY: the block holds max_size properly aligned slots, is not
        // shared with any other allocation, and outlives 'r.
        let slots = unsafe { std::slice::from_raw_parts_mut(block.as_ptr(), max_size) };
        Self { slots, len: 0 }
    }

    /// Append `value` in place
    ///
    /// # Panics
    ///
    /// Panics if the vector is full.
    #[inline]
    pub fn push(&mut self, value: T) {
        if self.len == self.slots.len() {
            super::contract_breach(MemoryError::CapacityExceeded {
                capacity: self.slots.len(),
            });
        }
        self.slots[self.len].write(value);
        self.len += 1;
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: the first `len` slots were initialized by `push`.
        unsafe { std::slice::from_raw_parts(self.slots.as_ptr().cast::<T>(), self.len) }
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: the first `len` slots were initialized by `push`.
        unsafe { std::slice::from_raw_parts_mut(self.slots.as_mut_ptr().cast::<T>(), self.len) }
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    #[inline]
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.len == self.slots.len()
    }

    /// Address of the backing block
    pub fn as_ptr(&self) -> *const T {
        self.slots.as_ptr().cast::<T>()
    }
}

impl<'a, 'r, T> IntoIterator for &'a FixedVec<'r, T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, 'r, T> IntoIterator for &'a mut FixedVec<'r, T> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for FixedVec<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
