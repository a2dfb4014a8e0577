/*!
 * System Limits and Constants
 *
 * Centralized location for the allocator geometry and the benchmark's
 * tree shape. Organized by domain.
 *
 * - Performance-critical constants are marked with [PERF]
 * - Values that must agree across strategies are marked with [ORACLE]
 */

// =============================================================================
// REGION ALLOCATOR
// =============================================================================

/// Size of a single region page (64KB)
/// [PERF] Large enough that page creation is rare relative to block carving
pub const PAGE_SIZE: usize = 64 * 1024;

/// Alignment of every region page (1KB)
/// Blocks with alignment up to this value never need padding at page start
pub const PAGE_ALIGN: usize = 1024;

/// Largest block the region serves (4KB)
/// Larger requests are a configuration error, not a fallback path
pub const MAX_SMALL_BLOCK_SIZE: usize = 4 * 1024;

// =============================================================================
// TREE SHAPE
// =============================================================================

/// Children per non-leaf node
/// [ORACLE]
pub const N_CHILDREN: usize = 3;

/// Levels below the root
/// [ORACLE] 3^0 + 3^1 + ... + 3^15 = 21,523,360 nodes
pub const TREE_DEPTH: usize = 15;

/// Deepest tree the driver accepts
/// Construction, traversal and owned teardown recurse once per level
pub const MAX_TREE_DEPTH: usize = 256;

/// Modulus applied while folding child checksums (a Mersenne prime exponent)
/// [ORACLE]
pub const CHECKSUM_MODULUS: u64 = 43_112_609;

// =============================================================================
// STARTUP OVERRIDES
// =============================================================================

/// Environment variable overriding [`N_CHILDREN`] for the driver
pub const ENV_CHILDREN: &str = "REGION_BENCH_CHILDREN";

/// Environment variable overriding [`TREE_DEPTH`] for the driver
pub const ENV_DEPTH: &str = "REGION_BENCH_DEPTH";

/// Environment variable switching the report to JSON
pub const ENV_JSON: &str = "REGION_BENCH_JSON";

/// Environment variable switching log output to JSON
pub const ENV_TRACE_JSON: &str = "REGION_BENCH_TRACE_JSON";
