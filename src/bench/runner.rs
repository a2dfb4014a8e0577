/*!
 * Benchmark Runner
 * Times build, traversal and teardown of one tree per strategy
 */

use super::report::{PhaseTimings, StrategyReport};
use super::strategy::Strategy;
use crate::core::types::TreeShape;
use crate::monitoring::{AllocationSource, PhaseSpan};
use crate::tree::{build_tree, checksum, nodes_created, reset_node_ids};
use tracing::info;

/// Runs strategies against one shape, observing a shared allocation source
pub struct Runner<'p> {
    shape: TreeShape,
    probe: &'p dyn AllocationSource,
}

impl<'p> Runner<'p> {
    pub fn new(shape: TreeShape, probe: &'p dyn AllocationSource) -> Self {
        Self { shape, probe }
    }

    /// Build, traverse and drop one tree
    ///
    /// Deallocation time covers leaving the scope that owns the allocator
    /// and the root: page release for arenas, the destructor cascade for
    /// owned nodes.
    pub fn run<S: Strategy>(&self) -> StrategyReport {
        info!(strategy = S::NAME, shape = %self.shape, "Testing strategy");
        reset_node_ids();
        let before = self.probe.snapshot();

        let build;
        let traversal;
        let sum;
        let node_count;
        let arena_bytes;
        let teardown;
        {
            let allocator = S::Allocator::default();

            let phase = PhaseSpan::new(S::NAME, "build");
            let root: S::Node<'_> = build_tree(&allocator, self.shape);
            build = phase.finish();

            let phase = PhaseSpan::new(S::NAME, "traversal");
            sum = checksum(&root);
            traversal = phase.finish();

            node_count = u64::from(nodes_created());
            arena_bytes = S::arena_bytes(&allocator);
            teardown = PhaseSpan::new(S::NAME, "deallocation");
        }
        let deallocation = teardown.finish();

        let allocations = self.probe.snapshot().since(&before);
        info!(
            strategy = S::NAME,
            checksum = sum,
            nodes = node_count,
            allocations = allocations.allocations,
            deallocations = allocations.deallocations,
            "Strategy finished"
        );

        StrategyReport {
            name: S::NAME.to_string(),
            timings: PhaseTimings {
                build,
                traversal,
                deallocation,
            },
            checksum: sum,
            node_count,
            allocations,
            arena_bytes,
        }
    }
}
