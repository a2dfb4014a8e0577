/*!
 * Tree Traits
 * Capability interface shared by every storage strategy
 */

use crate::core::types::NodeId;

/// Node that can be built and walked by the shared tree algorithms
///
/// `'a` is how long the node may borrow its allocator. Owning strategies
/// ignore it.
pub trait TreeNode<'a>: Sized {
    /// Storage the node and its children come from
    type Allocator: 'a;

    /// Create a node with room for `max_children` children
    fn create(allocator: &'a Self::Allocator, max_children: usize) -> Self;

    /// Create a child through `allocator` and append it
    fn add_child(&mut self, allocator: &'a Self::Allocator, max_children: usize);

    /// Identifier assigned at construction
    fn id(&self) -> NodeId;

    /// Direct children in insertion order
    fn children(&self) -> impl Iterator<Item = &Self>;

    /// Direct children in insertion order, mutably
    fn children_mut(&mut self) -> impl Iterator<Item = &mut Self>;
}
