/*!
 * Region Tree Library
 *
 * Region-style allocation compared against per-node ownership:
 * - Region allocator carving small blocks out of pooled pages
 * - Fixed-capacity vectors backed by a single region block
 * - Tree construction and checksum traversal shared across strategies
 * - Allocation counting and phase timing for the benchmark driver
 */

pub mod bench;
pub mod core;
pub mod memory;
pub mod monitoring;
pub mod tree;

// Re-exports
pub use crate::core::{BenchError, BenchResult, Checksum, NodeId, TreeShape};
pub use bench::{compare_all, BenchConfig, Comparison, Runner, StrategyReport};
pub use memory::{FixedVec, MemoryError, MemoryResult, Region, RegionStats};
pub use monitoring::{init_tracing, AllocationStats, CountingAllocator};
pub use tree::{build_tree, checksum, count_nodes, OwnedNode, RegionNode, TreeNode};
