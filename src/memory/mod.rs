/*!
 * Memory Module
 * Region allocation and region-backed containers
 *
 * # Performance
 *
 * - Region: O(1) bump allocation, one bulk release per page on drop
 * - FixedVec: one block reserved up front, never reallocated
 */

pub mod align;
pub mod fixed_vec;
pub mod page;
pub mod region;
pub mod traits;
pub mod types;

// Re-export for convenience
pub use align::{align_up, aligned_item_size};
pub use fixed_vec::FixedVec;
pub use page::{Page, PagePool};
pub use region::Region;
pub use traits::*;
pub use types::*;

/// Report a broken allocation contract and stop
///
/// Continuing would write past a block, so this never returns. Test and
/// dev builds unwind; the release profile sets `panic = "abort"`.
#[cold]
#[inline(never)]
pub(crate) fn contract_breach(err: MemoryError) -> ! {
    tracing::error!(error = %err, "Memory contract violated");
    panic!("{err}")
}
