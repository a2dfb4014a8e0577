/*!
 * Fixed-Capacity Vector Tests
 */

use pretty_assertions::assert_eq;
use region_tree::memory::{FixedVec, Region};

#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(align(32))]
struct Wide {
    value: u32,
}

#[test]
fn test_push_order_is_preserved() {
    let region = Region::new();
    let mut vec = FixedVec::new_in(&region, 64);
    for i in 0..50u32 {
        vec.push(i * 3);
    }
    let collected: Vec<u32> = vec.iter().copied().collect();
    let expected: Vec<u32> = (0..50).map(|i| i * 3).collect();
    assert_eq!(collected, expected);
    assert_eq!(vec.len(), 50);
}

#[test]
fn test_storage_never_moves() {
    let region = Region::new();
    let mut vec = FixedVec::new_in(&region, 8);
    let before = vec.as_ptr();
    for i in 0..8u64 {
        vec.push(i);
        // Unrelated allocations must not disturb the vector
        region.alloc(i);
    }
    assert_eq!(vec.as_ptr(), before);
    assert!(vec.is_full());
    assert_eq!(vec.as_slice(), &[0, 1, 2, 3, 4, 5, 6, 7]);
}

#[test]
fn test_over_aligned_elements() {
    let region = Region::new();
    region.alloc(1u8);
    let mut vec = FixedVec::new_in(&region, 4);
    for value in 0..4 {
        vec.push(Wide { value });
    }
    assert_eq!(vec.as_ptr() as usize % 32, 0);
    for (i, item) in vec.iter().enumerate() {
        assert_eq!(item.value, i as u32);
        assert_eq!(item as *const Wide as usize % 32, 0);
    }
    assert_eq!(region.stats().bytes_requested, 1 + 4 * 32);
}

#[test]
fn test_references_to_region_values() {
    let region = Region::new();
    let mut vec: FixedVec<'_, &u64> = FixedVec::new_in(&region, 3);
    vec.push(region.alloc(10u64));
    vec.push(region.alloc(20u64));
    vec.push(region.alloc(30u64));
    let total: u64 = vec.iter().map(|v| **v).sum();
    assert_eq!(total, 60);
}

#[test]
#[should_panic(expected = "Fixed-capacity container is full")]
fn test_push_beyond_capacity_panics() {
    let region = Region::new();
    let mut vec = FixedVec::new_in(&region, 1);
    vec.push(1u8);
    vec.push(2u8);
}
