/*!
 * Allocation Counting
 * Global-allocator decorator observing every heap allocation
 */

use serde::{Deserialize, Serialize};
use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicU64, Ordering};

/// Counting wrapper around a global allocator
///
/// Install with `#[global_allocator]`. All counters use relaxed ordering:
/// they are statistics, not synchronization.
///
/// ```ignore
/// #[global_allocator]
/// static ALLOC: CountingAllocator = CountingAllocator::system();
/// ```
#[repr(C, align(64))]
pub struct CountingAllocator<A = System> {
    inner: A,
    allocations: AtomicU64,
    deallocations: AtomicU64,
    reallocations: AtomicU64,
    bytes_allocated: AtomicU64,
    bytes_deallocated: AtomicU64,
}

impl CountingAllocator<System> {
    /// Decorator around the system allocator
    pub const fn system() -> Self {
        Self::new(System)
    }
}

impl<A> CountingAllocator<A> {
    pub const fn new(inner: A) -> Self {
        Self {
            inner,
            allocations: AtomicU64::new(0),
            deallocations: AtomicU64::new(0),
            reallocations: AtomicU64::new(0),
            bytes_allocated: AtomicU64::new(0),
            bytes_deallocated: AtomicU64::new(0),
        }
    }

    /// Read-only snapshot of the counters
    pub fn snapshot(&self) -> AllocationStats {
        AllocationStats {
            allocations: self.allocations.load(Ordering::Relaxed),
            deallocations: self.deallocations.load(Ordering::Relaxed),
            reallocations: self.reallocations.load(Ordering::Relaxed),
            bytes_allocated: self.bytes_allocated.load(Ordering::Relaxed),
            bytes_deallocated: self.bytes_deallocated.load(Ordering::Relaxed),
        }
    }

    /// Zero every counter
    pub fn reset(&self) {
        self.allocations.store(0, Ordering::Relaxed);
        self.deallocations.store(0, Ordering::Relaxed);
        self.reallocations.store(0, Ordering::Relaxed);
        self.bytes_allocated.store(0, Ordering::Relaxed);
        self.bytes_deallocated.store(0, Ordering::Relaxed);
    }

    #[inline(always)]
    fn record_alloc(&self, size: usize) {
        self.allocations.fetch_add(1, Ordering::Relaxed);
        self.bytes_allocated.fetch_add(size as u64, Ordering::Relaxed);
    }

    #[inline(always)]
    fn record_dealloc(&self, size: usize) {
        self.deallocations.fetch_add(1, Ordering::Relaxed);
        self.bytes_deallocated.fetch_add(size as u64, Ordering::Relaxed);
    }
}

// SAFETY: every call is forwarded unchanged to the inner allocator.
unsafe impl<A: GlobalAlloc> GlobalAlloc for CountingAllocator<A> {
    #[inline]
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        self.record_alloc(layout.size());
        self.inner.alloc(layout)
    }

    #[inline]
    unsafe fn alloc_zeroed(&self, layout: Layout) -> *mut u8 {
        self.record_alloc(layout.size());
        self.inner.alloc_zeroed(layout)
    }

    #[inline]
    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        self.record_dealloc(layout.size());
        self.inner.dealloc(ptr, layout)
    }

    /// Counted as a reallocation; only growth adds to `bytes_allocated`
    #[inline]
    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        self.reallocations.fetch_add(1, Ordering::Relaxed);
        if new_size > layout.size() {
            self.bytes_allocated
                .fetch_add((new_size - layout.size()) as u64, Ordering::Relaxed);
        } else {
            self.bytes_deallocated
                .fetch_add((layout.size() - new_size) as u64, Ordering::Relaxed);
        }
        self.inner.realloc(ptr, layout, new_size)
    }
}

/// Anything that can report allocation counters
pub trait AllocationSource {
    fn snapshot(&self) -> AllocationStats;
}

impl<A> AllocationSource for CountingAllocator<A> {
    fn snapshot(&self) -> AllocationStats {
        CountingAllocator::snapshot(self)
    }
}

/// Source for hosts without a counting allocator; always reports zero
#[derive(Debug, Default, Clone, Copy)]
pub struct NoCounting;

impl AllocationSource for NoCounting {
    fn snapshot(&self) -> AllocationStats {
        AllocationStats::default()
    }
}

/// Snapshot of allocation counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocationStats {
    pub allocations: u64,
    pub deallocations: u64,
    pub reallocations: u64,
    pub bytes_allocated: u64,
    pub bytes_deallocated: u64,
}

impl AllocationStats {
    /// Counter movement from `earlier` to `self`
    pub fn since(&self, earlier: &AllocationStats) -> AllocationStats {
        AllocationStats {
            allocations: self.allocations.saturating_sub(earlier.allocations),
            deallocations: self.deallocations.saturating_sub(earlier.deallocations),
            reallocations: self.reallocations.saturating_sub(earlier.reallocations),
            bytes_allocated: self.bytes_allocated.saturating_sub(earlier.bytes_allocated),
            bytes_deallocated: self.bytes_deallocated.saturating_sub(earlier.bytes_deallocated),
        }
    }

    /// Live bytes according to the counters
    pub fn bytes_outstanding(&self) -> i64 {
        self.bytes_allocated as i64 - self.bytes_deallocated as i64
    }
}
