/*!
 * Node ID Generation
 * Process-wide, construction-ordered node identifiers
 */

use crate::core::types::NodeId;
use std::sync::atomic::{AtomicU32, Ordering};

/// Nodes created since the last reset; also the next id to hand out
static NODES_CREATED: AtomicU32 = AtomicU32::new(0);

/// Take the next node id
#[inline(always)]
pub fn next_node_id() -> NodeId {
    NODES_CREATED.fetch_add(1, Ordering::Relaxed)
}

/// Number of nodes created since the last reset
#[inline]
pub fn nodes_created() -> u32 {
    NODES_CREATED.load(Ordering::Relaxed)
}

/// Restart numbering at zero
///
/// Call at the start of every run so runs with the same shape assign the
/// same ids.
pub fn reset_node_ids() {
    NODES_CREATED.store(0, Ordering::Relaxed);
}
