/*!
 * Monitoring Module
 * Structured tracing and allocation instrumentation
 */

pub mod alloc_counter;
pub mod tracer;

pub use alloc_counter::{AllocationSource, AllocationStats, CountingAllocator, NoCounting};
pub use tracer::{init_tracing, PhaseSpan};
