/*!
 * Memory Types
 * Common types for region allocation
 */

use crate::core::types::Size;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Memory operation result
pub type MemoryResult<T> = Result<T, MemoryError>;

/// Memory errors
///
/// Every variant is a contract breach: the panicking entry points render
/// these as their diagnostic.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MemoryError {
    #[error("Allocating more than {max} bytes is not implemented (requested {requested} bytes)")]
    BlockTooLarge { requested: Size, max: Size },

    #[error("Alignment error: {0} is not a power of two")]
    InvalidAlignment(Size),

    #[error("Alignment error: {align} exceeds the page alignment of {max}")]
    AlignmentTooLarge { align: Size, max: Size },

    #[error("Fixed-capacity container is full: capacity {capacity}")]
    CapacityExceeded { capacity: Size },
}

/// Region statistics
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionStats {
    /// Pages ever created by this region
    pub pages_created: usize,
    /// Pages handed to the cursor since creation or the last reset
    pub pages_in_use: usize,
    /// Successful block allocations
    pub blocks_allocated: usize,
    /// Sum of requested block sizes
    pub bytes_requested: Size,
    /// Requested bytes plus alignment padding
    pub bytes_consumed: Size,
}

impl RegionStats {
    /// Bytes owned by the page pool
    pub fn reserved_bytes(&self) -> Size {
        self.pages_created * crate::core::limits::PAGE_SIZE
    }

    /// Padding lost to alignment
    pub fn padding_bytes(&self) -> Size {
        self.bytes_consumed - self.bytes_requested
    }
}
