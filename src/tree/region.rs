/*!
 * Region Tree Nodes
 * Nodes and their child lists live in a Region and are freed with it
 */

use super::id::next_node_id;
use super::traits::TreeNode;
use crate::core::types::NodeId;
use crate::memory::{FixedVec, Region};

/// Node storing non-owning references to region-allocated children
///
/// The region owns every node; there is no per-node teardown.
pub struct RegionNode<'r> {
    children: FixedVec<'r, &'r mut RegionNode<'r>>,
    id: NodeId,
}

impl<'r> RegionNode<'r> {
    pub fn new(region: &'r Region, max_children: usize) -> Self {
        Self {
            children: FixedVec::new_in(region, max_children),
            id: next_node_id(),
        }
    }
}

impl<'r> TreeNode<'r> for RegionNode<'r> {
    type Allocator = Region;

    #[inline]
    fn create(region: &'r Region, max_children: usize) -> Self {
        Self::new(region, max_children)
    }

    #[inline]
    fn add_child(&mut self, region: &'r Region, max_children: usize) {
        let child = region.alloc_with(|| Self::new(region, max_children));
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

impl std::fmt::Debug for RegionNode<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_struct("RegionNode")
            .field("id", &self.id)
            .field("children", &self.children.len())
            .finish()
    }
}
