/*!
 * Region Benchmark - Main Entry Point
 *
 * Builds, traverses and drops the same tree with:
 * - The usual, RAII-style storage (node holds a vector of owning pointers)
 * - A region allocator whose pages are all released when it goes out of scope
 * - bumpalo, as a reference arena
 */

use miette::IntoDiagnostic;
use tracing::info;

use region_tree::{compare_all, init_tracing, BenchConfig, CountingAllocator};

#[global_allocator]
static ALLOC: CountingAllocator = CountingAllocator::system();

fn main() -> miette::Result<()> {
    init_tracing();

    let config = BenchConfig::from_env()?;
    info!(
        shape = %config.shape,
        nodes = ?config.shape.node_count(),
        "Benchmarking the building, traversal and deallocation of a tree"
    );

    let comparison = compare_all(&config, &ALLOC)?;

    if config.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&comparison).into_diagnostic()?
        );
    } else {
        println!("{comparison}");
    }
    Ok(())
}
