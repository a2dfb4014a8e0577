/*!
 * Bump Tree Nodes
 * Reference arena strategy backed by bumpalo
 *
 * Same shape as the region strategy, with bumpalo's chunked bump allocator
 * in place of the region. Useful as a yardstick for the region's numbers.
 */

use super::id::next_node_id;
use super::traits::TreeNode;
use crate::core::types::NodeId;
use bumpalo::collections::Vec as BumpVec;
use bumpalo::Bump;

/// Node whose child list is a bumpalo vector in the same arena
pub struct BumpNode<'b> {
    children: BumpVec<'b, &'b mut BumpNode<'b>>,
    id: NodeId,
}

impl<'b> BumpNode<'b> {
    pub fn new(arena: &'b Bump, max_children: usize) -> Self {
        Self {
            children: BumpVec::with_capacity_in(max_children, arena),
            id: next_node_id(),
        }
    }
}

impl<'b> TreeNode<'b> for BumpNode<'b> {
    type Allocator = Bump;

    #[inline]
    fn create(arena: &'b Bump, max_children: usize) -> Self {
        Self::new(arena, max_children)
    }

    #[inline]
    fn add_child(&mut self, arena: &'b Bump, max_children: usize) {
        let child = arena.alloc_with(|| Self::new(arena, max_children));
        self.children.push(child);
    }

    #[inline]
    fn id(&self) -> NodeId {
        self.id
    }

    fn children(&self) -> impl Iterator<Item = &Self> {
        self.children.iter().map(|child| &**child)
    }

    fn children_mut(&mut self) -> impl Iterator<Item = &mut Self> {
        self.children.iter_mut().map(|child| &mut **child)
    }
}

impl std::fmt::Debug for BumpNode<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_struct("BumpNode")
            .field("id", &self.id)
            .field("children", &self.children.len())
            .finish()
    }
}
