/*!
 * Core Types
 * Common types used across the crate
 */

use super::limits::{N_CHILDREN, TREE_DEPTH};
use serde::{Deserialize, Serialize};

/// Node identifier, assigned in construction order
pub type NodeId = u32;

/// Size type for memory operations
pub type Size = usize;

/// Checksum produced by a tree traversal
pub type Checksum = u64;

/// Shape of the benchmark tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeShape {
    /// Children per non-leaf node
    pub children: usize,
    /// Levels below the root
    pub depth: usize,
}

impl TreeShape {
    /// Shape compiled into the benchmark
    pub const DEFAULT: TreeShape = TreeShape {
        children: N_CHILDREN,
        depth: TREE_DEPTH,
    };

    pub const fn new(children: usize, depth: usize) -> Self {
        Self { children, depth }
    }

    /// Nodes in a full tree of this shape: `1 + k + k^2 + ... + k^d`
    ///
    /// Returns `None` on overflow.
    pub fn node_count(&self) -> Option<u64> {
        let k = self.children as u64;
        let mut level: u64 = 1;
        let mut total: u64 = 1;
        for _ in 0..self.depth {
            level = level.checked_mul(k)?;
            total = total.checked_add(level)?;
        }
        Some(total)
    }
}

impl Default for TreeShape {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl std::fmt::Display for TreeShape {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} levels, {} children/node", self.depth, self.children)
    }
}
