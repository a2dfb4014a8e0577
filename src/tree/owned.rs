/*!
 * Owned Tree Nodes
 * RAII-style storage: each node owns its children through `Box`
 */

use super::id::next_node_id;
use super::traits::TreeNode;
use crate::core::types::NodeId;

/// Global heap; a placeholder so owned nodes share the allocator-taking API
#[derive(Debug, Default, Clone, Copy)]
pub struct Heap;

/// Node holding a vector of owning pointers to its children
///
/// Dropping the root releases the tree recursively, one deallocation per
/// box and per child vector.
#[derive(Debug)]
pub struct OwnedNode {
    children: Vec<Box<OwnedNode>>,
    id: NodeId,
}

impl OwnedNode {
    pub fn new(max_children: usize) -> Self {
        Self {
            children: Vec::with_capacity(max_children),
            id: next_node_id(),
        }
    }
}

impl<'a> TreeNode<'a> for OwnedNode {
    type Allocator = Heap;

    #[inline]
    fn create(_: &'a Heap, max_children: usize) -> Self {
        Self::new(max_children)
    }

    #[inline]
    fn add_child(&mut self, _: &'a Heap, max_children: usize) {
        self.children.push(Box::new(Self::new(max_children)));
    }

    #[inline]
    fn id(&self) -> NodeId {
        self.id
    }

    fn children(&self) -> impl Iterator<Item = &Self> {
        self.children.iter().map(|child| child.as_ref())
    }

    fn children_mut(&mut self) -> impl Iterator<Item = &mut Self> {
        self.children.iter_mut().map(|child| child.as_mut())
    }
}
