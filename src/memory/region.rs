/*!
 * Region Allocator
 * Bump allocation of small blocks out of pooled pages, released all at once
 *
 * # Performance
 *
 * - **Allocation**: O(1), bumps an offset within the active page
 * - **Deallocation**: none per block; every page is freed when the region drops
 *
 * Values placed in a region never have their destructors run.
 */

use super::align::padding_for;
use super::page::PagePool;
use super::traits::BlockAllocator;
use super::types::{MemoryError, MemoryResult, RegionStats};
use crate::core::limits::{MAX_SMALL_BLOCK_SIZE, PAGE_ALIGN, PAGE_SIZE};
use crate::core::types::Size;
use std::alloc::Layout;
use std::cell::{Cell, RefCell};
use std::ptr::NonNull;
use tracing::{debug, trace};

/// Region-style allocator
///
/// Hands out small blocks from 64KB pages through a shared reference so
/// callers can keep earlier blocks borrowed while allocating more. Not
/// thread-safe: one builder allocates at a time.
pub struct Region {
    pool: RefCell<PagePool>,
    /// Base of the active page, `None` when a fresh page is needed
    active: Cell<Option<NonNull<u8>>>,
    /// First free byte of the active page, relative to its base
    offset: Cell<Size>,
    /// Bytes left in the active page
    remaining: Cell<Size>,
    stats: Cell<RegionStats>,
}

impl Region {
    pub fn new() -> Self {
        Self::with_pool(PagePool::new())
    }

    /// Region whose pool starts with `pages` pages already created
    pub fn with_pages(pages: usize) -> Self {
        Self::with_pool(PagePool::with_pages(pages))
    }

    fn with_pool(pool: PagePool) -> Self {
        Self {
            pool: RefCell::new(pool),
            active: Cell::new(None),
            offset: Cell::new(0),
            remaining: Cell::new(0),
            stats: Cell::new(RegionStats::default()),
        }
    }

    /// Allocate `size` bytes aligned to `align`
    ///
    /// # Panics
    ///
    /// Panics when `size` exceeds [`MAX_SMALL_BLOCK_SIZE`] or `align` is not
    /// a power of two no larger than [`PAGE_ALIGN`].
    #[inline]
    pub fn allocate_block(&self, size: Size, align: Size) -> NonNull<u8> {
        match self.try_allocate_block(size, align) {
            Ok(block) => block,
            Err(err) => super::contract_breach(err),
        }
    }

    /// Fallible form of [`Region::allocate_block`]
    pub fn try_allocate_block(&self, size: Size, align: Size) -> MemoryResult<NonNull<u8>> {
        if size > MAX_SMALL_BLOCK_SIZE {
            return Err(MemoryError::BlockTooLarge {
                requested: size,
                max: MAX_SMALL_BLOCK_SIZE,
            });
        }
        let layout =
            Layout::from_size_align(size, align).map_err(|_| MemoryError::InvalidAlignment(align))?;
        self.try_allocate(layout)
    }

    /// Move `value` into the region
    #[inline]
    #[allow(clippy::mut_from_ref)]
    pub fn alloc<T>(&self, value: T) -> &mut T {
        self.alloc_with(|| value)
    }

    /// Reserve a block for `T`, then construct the value in it
    ///
    /// The block is carved before `f` runs, so anything `f` allocates from
    /// this region lands after it.
    #[inline]
    #[allow(clippy::mut_from_ref)]
    pub fn alloc_with<T, F>(&self, f: F) -> &mut T
    where
        F: FnOnce() -> T,
    {
        let slot = self.allocate(Layout::new::<T>()).cast::<T>();
        let value = f();
        // SAFETY: slot is a fresh, exclusively owned block sized and aligned
        // for T that lives as long as the region borrow.
        unsafe {
            slot.as_ptr().write(value);
            &mut *slot.as_ptr()
        }
    }

    /// Rewind to the first page, keeping every page for reuse
    ///
    /// Taking `&mut self` guarantees no block is still borrowed.
    pub fn reset(&mut self) {
        let pool = self.pool.get_mut();
        pool.rewind();
        let pages = pool.created();
        self.invalidate_cursor();
        self.stats.set(RegionStats::default());
        debug!(pages, "Region reset");
    }

    /// Snapshot of allocation statistics
    pub fn stats(&self) -> RegionStats {
        let pool = self.pool.borrow();
        RegionStats {
            pages_created: pool.created(),
            pages_in_use: pool.in_use(),
            ..self.stats.get()
        }
    }

    /// Whether `ptr` points into one of this region's pages
    pub fn owns<T>(&self, ptr: *const T) -> bool {
        self.pool.borrow().owns(ptr as usize)
    }

    /// Carve `layout` from the active page, if it fits
    #[inline(always)]
    fn carve(&self, layout: Layout) -> Option<NonNull<u8>> {
        let base = self.active.get()?;
        let offset = self.offset.get();
        let cursor = base.as_ptr() as usize + offset;
        let padding = padding_for(cursor, layout.align());
        let needed = padding + layout.size();
        let remaining = self.remaining.get();
        if needed > remaining {
            return None;
        }

        self.offset.set(offset + needed);
        self.remaining.set(remaining - needed);

        let mut stats = self.stats.get();
        stats.blocks_allocated += 1;
        stats.bytes_requested += layout.size();
        stats.bytes_consumed += needed;
        self.stats.set(stats);

        // SAFETY: offset + padding + size <= PAGE_SIZE, so the block stays
        // inside the active page.
        Some(unsafe { NonNull::new_unchecked(base.as_ptr().add(offset + padding)) })
    }

    #[cold]
    fn activate_page(&self) {
        let base = self.pool.borrow_mut().acquire();
        self.active.set(Some(base));
        self.offset.set(0);
        self.remaining.set(PAGE_SIZE);
    }

    #[inline(always)]
    fn invalidate_cursor(&self) {
        self.active.set(None);
        self.offset.set(0);
        self.remaining.set(0);
    }
}

impl BlockAllocator for Region {
    fn try_allocate(&self, layout: Layout) -> MemoryResult<NonNull<u8>> {
        if layout.size() > MAX_SMALL_BLOCK_SIZE {
            return Err(MemoryError::BlockTooLarge {
                requested: layout.size(),
                max: MAX_SMALL_BLOCK_SIZE,
            });
        }
        if layout.align() > PAGE_ALIGN {
            return Err(MemoryError::AlignmentTooLarge {
                align: layout.align(),
                max: PAGE_ALIGN,
            });
        }

        if let Some(block) = self.carve(layout) {
            return Ok(block);
        }

        // No room in the active page (or none active): retire it and retry once.
        self.invalidate_cursor();
        self.activate_page();
        match self.carve(layout) {
            Some(block) => Ok(block),
            // A fresh page is PAGE_ALIGN-aligned and larger than any small block.
            None => unreachable!("fresh page rejected a {} byte block", layout.size()),
        }
    }
}

impl Default for Region {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Region {
    fn drop(&mut self) {
        trace!(pages = self.pool.get_mut().created(), "Region released");
    }
}

impl std::fmt::Debug for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_struct("Region")
            .field("offset", &self.offset.get())
            .field("remaining", &self.remaining.get())
            .field("stats", &self.stats())
            .finish()
    }
}
