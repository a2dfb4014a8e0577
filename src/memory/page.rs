/*!
 * Region Pages
 * Fixed-size, fixed-alignment buffers and the append-only pool that owns them
 */

use crate::core::limits::{PAGE_ALIGN, PAGE_SIZE};
use std::alloc::{alloc, dealloc, handle_alloc_error, Layout};
use std::ptr::NonNull;
use tracing::trace;

/// Layout shared by every page
const PAGE_LAYOUT: Layout = match Layout::from_size_align(PAGE_SIZE, PAGE_ALIGN) {
    Ok(layout) => layout,
    Err(_) => panic!("invalid page layout"),
};

/// One page of opaque, uninitialized bytes
///
/// Obtained from the global allocator so allocation counters observe it,
/// and returned to it exactly once, on drop.
pub struct Page {
    base: NonNull<u8>,
}

impl Page {
    pub fn new() -> Self {
        // SAFETY: PAGE_LAYOUT has non-zero size.
        let ptr = unsafe { alloc(PAGE_LAYOUT) };
        let base = match NonNull::new(ptr) {
            Some(base) => base,
            None => handle_alloc_error(PAGE_LAYOUT),
        };
        Self { base }
    }

    /// First byte of the page
    #[inline(always)]
    pub fn base(&self) -> NonNull<u8> {
        self.base
    }

    /// Page capacity in bytes
    #[inline(always)]
    pub const fn capacity(&self) -> usize {
        PAGE_SIZE
    }

    /// Whether `addr` falls inside this page
    pub fn contains(&self, addr: usize) -> bool {
        let start = self.base.as_ptr() as usize;
        addr >= start && addr < start + PAGE_SIZE
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Page {
    fn drop(&mut self) {
        // SAFETY: base was allocated in `new` with PAGE_LAYOUT and is freed only here.
        unsafe { dealloc(self.base.as_ptr(), PAGE_LAYOUT) }
    }
}

impl std::fmt::Debug for Page {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_struct("Page").field("base", &self.base).finish()
    }
}

/// Append-only sequence of pages
///
/// Pages are handed out in creation order. After a rewind the pool hands
/// out its existing pages again before creating new ones; it never shrinks.
#[derive(Debug, Default)]
pub struct PagePool {
    pages: Vec<Page>,
    next: usize,
}

impl PagePool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pool pre-populated with `count` pages
    pub fn with_pages(count: usize) -> Self {
        let mut pages = Vec::with_capacity(count);
        pages.resize_with(count, Page::new);
        Self { pages, next: 0 }
    }

    /// Take the next unused page, creating one if the pool is exhausted
    pub fn acquire(&mut self) -> NonNull<u8> {
        if self.next == self.pages.len() {
            self.pages.push(Page::new());
            trace!(pages = self.pages.len(), "Region page created");
        }
        let base = self.pages[self.next].base();
        self.next += 1;
        base
    }

    /// Make every page available again
    ///
    /// The caller guarantees nothing still refers to page contents.
    pub fn rewind(&mut self) {
        self.next = 0;
    }

    /// Pages ever created
    pub fn created(&self) -> usize {
        self.pages.len()
    }

    /// Pages acquired since creation or the last rewind
    pub fn in_use(&self) -> usize {
        self.next
    }

    /// Whether `addr` lies inside any page of the pool
    pub fn owns(&self, addr: usize) -> bool {
        self.pages.iter().any(|page| page.contains(addr))
    }
}
