/*!
 * Benchmark Reports
 * Per-strategy measurements and the cross-strategy comparison table
 */

use crate::core::errors::{BenchError, BenchResult};
use crate::core::types::{Checksum, TreeShape};
use crate::monitoring::AllocationStats;
use serde::Serialize;
use std::fmt::{self, Write as _};
use std::time::Duration;

/// Wall time of each phase
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct PhaseTimings {
    pub build: Duration,
    pub traversal: Duration,
    pub deallocation: Duration,
}

impl PhaseTimings {
    pub fn total(&self) -> Duration {
        self.build + self.traversal + self.deallocation
    }
}

/// Outcome of running one strategy
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StrategyReport {
    pub name: String,
    pub timings: PhaseTimings,
    pub checksum: Checksum,
    pub node_count: u64,
    pub allocations: AllocationStats,
    /// Heap bytes held by the arena at the end of the build, if any
    pub arena_bytes: Option<usize>,
}

/// Reports that agree on node count and checksum
///
/// The last report is the reference column (shown as 100%).
#[derive(Debug, Clone, Serialize)]
pub struct Comparison {
    pub shape: TreeShape,
    pub node_count: u64,
    pub checksum: Checksum,
    pub reports: Vec<StrategyReport>,
}

impl Comparison {
    /// Check every report against the first one
    ///
    /// # Errors
    ///
    /// [`BenchError::Mismatch`] if any node count or checksum differs.
    ///
    /// # Panics
    ///
    /// If `reports` is empty.
    pub fn new(shape: TreeShape, reports: Vec<StrategyReport>) -> BenchResult<Self> {
        let Some(first) = reports.first() else {
            panic!("a comparison needs at least one strategy report");
        };

        if let Some(bad) = reports
            .iter()
            .find(|r| r.node_count != first.node_count || r.checksum != first.checksum)
        {
            tracing::error!(
                left = %first.name,
                right = %bad.name,
                "Strategies disagree on the tree they built"
            );
            return Err(BenchError::Mismatch {
                left: first.name.clone(),
                left_nodes: first.node_count,
                left_checksum: first.checksum,
                right: bad.name.clone(),
                right_nodes: bad.node_count,
                right_checksum: bad.checksum,
            });
        }

        Ok(Self {
            shape,
            node_count: first.node_count,
            checksum: first.checksum,
            reports,
        })
    }

    /// Column everything else is compared against
    pub fn reference(&self) -> &StrategyReport {
        // new() panics on an empty report list
        &self.reports[self.reports.len() - 1]
    }

    fn time_row(
        &self,
        out: &mut String,
        label: &str,
        pick: impl Fn(&PhaseTimings) -> Duration,
    ) -> fmt::Result {
        let reference = pick(&self.reference().timings).as_secs_f64();
        write!(out, "{label:>18}:")?;
        let last = self.reports.len() - 1;
        for (i, report) in self.reports.iter().enumerate() {
            let secs = pick(&report.timings).as_secs_f64();
            let pct = if reference > 0.0 {
                100.0 * secs / reference
            } else {
                0.0
            };
            write!(out, " {secs:6.3}s ({pct:4.0}%)")?;
            if i != last {
                write!(out, " |")?;
            }
        }
        writeln!(out)
    }

    fn count_row(
        &self,
        out: &mut String,
        label: &str,
        pick: impl Fn(&StrategyReport) -> String,
    ) -> fmt::Result {
        write!(out, "{label:>18}:")?;
        let last = self.reports.len() - 1;
        for (i, report) in self.reports.iter().enumerate() {
            write!(out, " {:>15}", pick(report))?;
            if i != last {
                write!(out, " |")?;
            }
        }
        writeln!(out)
    }

    fn render(&self) -> Result<String, fmt::Error> {
        let mut out = String::new();
        writeln!(out, "Tree node count: {} ({})", self.node_count, self.shape)?;
        writeln!(out, "Checksum: {}", self.checksum)?;
        writeln!(out)?;

        write!(out, "{:>19}", "")?;
        let headers: Vec<String> = self
            .reports
            .iter()
            .map(|r| format!("{:>15}", r.name))
            .collect();
        writeln!(out, " {}", headers.join(" | "))?;

        self.time_row(&mut out, "Build time", |t| t.build)?;
        self.time_row(&mut out, "Traversal time", |t| t.traversal)?;
        self.time_row(&mut out, "Deallocation time", |t| t.deallocation)?;
        self.time_row(&mut out, "Total time", |t| t.total())?;
        self.count_row(&mut out, "Heap allocations", |r| {
            r.allocations.allocations.to_string()
        })?;
        self.count_row(&mut out, "Heap deallocations", |r| {
            r.allocations.deallocations.to_string()
        })?;
        self.count_row(&mut out, "Bytes allocated", |r| {
            format!("{:.3}MB", r.allocations.bytes_allocated as f64 / 1e6)
        })?;
        Ok(out)
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.render()?)
    }
}
