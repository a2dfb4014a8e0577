/*!
 * Tree Module
 * Fixed-shape trees over interchangeable storage strategies
 *
 * - **OwnedNode**: children owned through `Box`, released recursively
 * - **RegionNode**: children referenced from a `Region`, released with it
 * - **BumpNode**: children referenced from a `bumpalo::Bump`
 */

pub mod algorithms;
pub mod bump;
pub mod id;
pub mod owned;
pub mod region;
pub mod traits;

// Re-export for convenience
pub use algorithms::{build_subtree, build_tree, checksum, count_nodes, preorder_ids};
pub use bump::BumpNode;
pub use id::{next_node_id, nodes_created, reset_node_ids};
pub use owned::{Heap, OwnedNode};
pub use region::RegionNode;
pub use traits::TreeNode;
