/*!
 * Tree Algorithms
 * Strategy-agnostic construction and traversal
 */

use super::traits::TreeNode;
use crate::core::limits::CHECKSUM_MODULUS;
use crate::core::types::{Checksum, NodeId, TreeShape};

/// Give `node` a full set of children, then expand each child in turn
///
/// All direct children exist before any grandchild is created, so ids are
/// handed out level by level within each subtree.
pub fn build_subtree<'a, N>(
    allocator: &'a N::Allocator,
    node: &mut N,
    shape: TreeShape,
    levels_left: usize,
) where
    N: TreeNode<'a>,
{
    for _ in 0..shape.children {
        node.add_child(allocator, shape.children);
    }
    let levels_left = levels_left.saturating_sub(1);
    if levels_left == 0 {
        return;
    }
    for child in node.children_mut() {
        build_subtree(allocator, child, shape, levels_left);
    }
}

/// Build a full tree of `shape` through `allocator`
///
/// A depth of zero yields a lone root.
pub fn build_tree<'a, N>(allocator: &'a N::Allocator, shape: TreeShape) -> N
where
    N: TreeNode<'a>,
{
    let mut root = N::create(allocator, shape.children);
    if shape.depth > 0 {
        build_subtree(allocator, &mut root, shape, shape.depth);
    }
    root
}

/// Depth-first, order-sensitive checksum
///
/// Starts from the node's own id and folds in each child's checksum
/// modulo [`CHECKSUM_MODULUS`].
pub fn checksum<'a, N>(node: &N) -> Checksum
where
    N: TreeNode<'a>,
{
    let mut sum = Checksum::from(node.id());
    for child in node.children() {
        sum = (sum + checksum(child)) % CHECKSUM_MODULUS;
    }
    sum
}

/// Nodes reachable from `node`, itself included
pub fn count_nodes<'a, N>(node: &N) -> u64
where
    N: TreeNode<'a>,
{
    1 + node.children().map(count_nodes).sum::<u64>()
}

/// Ids in pre-order
pub fn preorder_ids<'a, N>(node: &N) -> Vec<NodeId>
where
    N: TreeNode<'a>,
{
    let mut ids = Vec::new();
    collect_ids(node, &mut ids);
    ids
}

fn collect_ids<'a, N>(node: &N, ids: &mut Vec<NodeId>)
where
    N: TreeNode<'a>,
{
    ids.push(node.id());
    for child in node.children() {
        collect_ids(child, ids);
    }
}
