/*!
 * Memory Traits
 * Raw block allocation abstraction
 */

use super::types::MemoryResult;
use std::alloc::Layout;
use std::ptr::NonNull;

/// Source of raw, never-individually-freed blocks
///
/// Blocks stay valid for as long as the allocator is borrowed.
pub trait BlockAllocator {
    /// Allocate a block, reporting contract breaches as errors
    fn try_allocate(&self, layout: Layout) -> MemoryResult<NonNull<u8>>;

    /// Allocate a block, treating any breach as fatal
    #[inline]
    fn allocate(&self, layout: Layout) -> NonNull<u8> {
        match self.try_allocate(layout) {
            Ok(block) => block,
            Err(err) => super::contract_breach(err),
        }
    }
}
