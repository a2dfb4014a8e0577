/*!
 * Region Allocator Tests
 * Page lifecycle, alignment, reuse and contract breaches
 */

use pretty_assertions::assert_eq;
use region_tree::core::limits::{MAX_SMALL_BLOCK_SIZE, PAGE_ALIGN, PAGE_SIZE};
use region_tree::memory::{BlockAllocator, MemoryError, Region, RegionStats};
use std::alloc::Layout;

#[test]
fn test_new_region_is_empty() {
    let region = Region::new();
    assert_eq!(region.stats(), RegionStats::default());
    assert_eq!(region.stats().reserved_bytes(), 0);
}

#[test]
fn test_blocks_come_from_one_page_until_full() {
    let region = Region::new();
    let mut addrs = Vec::new();
    for _ in 0..100 {
        addrs.push(region.allocate_block(64, 8).as_ptr() as usize);
    }

    assert_eq!(region.stats().pages_created, 1);
    for pair in addrs.windows(2) {
        assert_eq!(pair[1] - pair[0], 64);
    }
}

#[test]
fn test_retired_page_tail_is_skipped() {
    let region = Region::new();
    let full_blocks = PAGE_SIZE / MAX_SMALL_BLOCK_SIZE - 1;
    for _ in 0..full_blocks {
        region.allocate_block(MAX_SMALL_BLOCK_SIZE, 1);
    }
    region.allocate_block(MAX_SMALL_BLOCK_SIZE - 100, 1);
    let stats = region.stats();
    assert_eq!(stats.pages_created, 1);

    // 100 bytes left: a 128-byte block must open a new page
    let block = region.allocate_block(128, 1);
    let stats = region.stats();
    assert_eq!(stats.pages_created, 2);
    assert_eq!(block.as_ptr() as usize % PAGE_ALIGN, 0);
    assert_eq!(stats.bytes_consumed, PAGE_SIZE - 100 + 128);
}

#[test]
fn test_exact_fit_uses_whole_page() {
    let region = Region::new();
    for _ in 0..(PAGE_SIZE / MAX_SMALL_BLOCK_SIZE) {
        region.allocate_block(MAX_SMALL_BLOCK_SIZE, PAGE_ALIGN);
    }
    let stats = region.stats();
    assert_eq!(stats.pages_created, 1);
    assert_eq!(stats.bytes_consumed, PAGE_SIZE);
    assert_eq!(stats.padding_bytes(), 0);
}

#[test]
fn test_typed_allocation() {
    let region = Region::new();
    let a = region.alloc(0xdead_beef_u64);
    let b = region.alloc([1u8, 2, 3]);
    *a += 1;
    assert_eq!(*a, 0xdead_beef_u64 + 1);
    assert_eq!(*b, [1, 2, 3]);
    assert_eq!(a as *const u64 as usize % std::mem::align_of::<u64>(), 0);
}

#[test]
fn test_block_allocator_trait() {
    fn grab(allocator: &dyn BlockAllocator) -> usize {
        allocator
            .allocate(Layout::from_size_align(24, 8).unwrap())
            .as_ptr() as usize
    }

    let region = Region::new();
    let a = grab(&region);
    let b = grab(&region);
    assert_eq!(b - a, 24);
    assert!(region.owns(a as *const u8));
}

#[test]
fn test_try_allocate_reports_breaches() {
    let region = Region::new();
    let too_big = Layout::from_size_align(MAX_SMALL_BLOCK_SIZE + 1, 8).unwrap();
    assert_eq!(
        region.try_allocate(too_big).unwrap_err(),
        MemoryError::BlockTooLarge {
            requested: MAX_SMALL_BLOCK_SIZE + 1,
            max: MAX_SMALL_BLOCK_SIZE,
        }
    );

    let over_aligned = Layout::from_size_align(8, PAGE_ALIGN * 2).unwrap();
    assert!(matches!(
        region.try_allocate(over_aligned),
        Err(MemoryError::AlignmentTooLarge { .. })
    ));
    assert_eq!(region.stats().pages_created, 0);
}

#[test]
#[should_panic(expected = "is not implemented")]
fn test_oversized_block_panics() {
    let region = Region::new();
    region.allocate(Layout::from_size_align(MAX_SMALL_BLOCK_SIZE * 2, 8).unwrap());
}

#[test]
fn test_preallocated_pages_are_used_first() {
    let region = Region::with_pages(3);
    assert_eq!(region.stats().pages_created, 3);
    assert_eq!(region.stats().pages_in_use, 0);

    for _ in 0..(2 * PAGE_SIZE / MAX_SMALL_BLOCK_SIZE + 1) {
        region.allocate_block(MAX_SMALL_BLOCK_SIZE, 8);
    }
    let stats = region.stats();
    assert_eq!(stats.pages_in_use, 3);
    assert_eq!(stats.pages_created, 3);
}

#[test]
fn test_reset_keeps_pool() {
    let mut region = Region::new();
    for _ in 0..1000 {
        region.alloc([0u64; 16]);
    }
    let created = region.stats().pages_created;
    assert!(created > 1);

    region.reset();
    for _ in 0..1000 {
        region.alloc([0u64; 16]);
    }
    assert_eq!(region.stats().pages_created, created);
    assert_eq!(region.stats().pages_in_use, created);
}
