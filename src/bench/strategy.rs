/*!
 * Storage Strategies
 * Pairs of allocator and node type the runner can measure
 */

use crate::memory::Region;
use crate::tree::{BumpNode, Heap, OwnedNode, RegionNode, TreeNode};
use bumpalo::Bump;

/// Allocator/node pairing under test
pub trait Strategy {
    /// Column name in the report
    const NAME: &'static str;

    /// Created fresh for every run and dropped at the end of it
    type Allocator: Default + 'static;

    /// Node type built from [`Strategy::Allocator`]
    type Node<'a>: TreeNode<'a, Allocator = Self::Allocator>;

    /// Bytes the allocator reserved from the heap, if it tracks them
    fn arena_bytes(_allocator: &Self::Allocator) -> Option<usize> {
        None
    }
}

/// Per-node ownership, recursive release
pub struct OwnedStrategy;

impl Strategy for OwnedStrategy {
    const NAME: &'static str = "RAII";
    type Allocator = Heap;
    type Node<'a> = OwnedNode;
}

/// Region pages, bulk release
pub struct RegionStrategy;

impl Strategy for RegionStrategy {
    const NAME: &'static str = "Region";
    type Allocator = Region;
    type Node<'a> = RegionNode<'a>;

    fn arena_bytes(region: &Region) -> Option<usize> {
        Some(region.stats().reserved_bytes())
    }
}

/// bumpalo chunks, bulk release
pub struct BumpStrategy;

impl Strategy for BumpStrategy {
    const NAME: &'static str = "Bumpalo";
    type Allocator = Bump;
    type Node<'a> = BumpNode<'a>;

    fn arena_bytes(arena: &Bump) -> Option<usize> {
        Some(arena.allocated_bytes())
    }
}
