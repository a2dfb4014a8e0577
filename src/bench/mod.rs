/*!
 * Bench Module
 * Strategy runner, reports and driver configuration
 */

pub mod config;
pub mod report;
pub mod runner;
pub mod strategy;

pub use config::BenchConfig;
pub use report::{Comparison, PhaseTimings, StrategyReport};
pub use runner::Runner;
pub use strategy::{BumpStrategy, OwnedStrategy, RegionStrategy, Strategy};

use crate::core::errors::BenchResult;
use crate::monitoring::AllocationSource;

/// Run every strategy and check they built the same tree
///
/// The region strategy goes first and is the reference column.
pub fn compare_all(config: &BenchConfig, probe: &dyn AllocationSource) -> BenchResult<Comparison> {
    let runner = Runner::new(config.shape, probe);
    let region = runner.run::<RegionStrategy>();
    let owned = runner.run::<OwnedStrategy>();
    let bump = runner.run::<BumpStrategy>();
    Comparison::new(config.shape, vec![owned, bump, region])
}
