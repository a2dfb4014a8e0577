/*!
 * Tree Construction Tests
 * Shape, id assignment and checksum of region-built trees
 */

use pretty_assertions::assert_eq;
use region_tree::core::limits::CHECKSUM_MODULUS;
use region_tree::memory::Region;
use region_tree::tree::{
    build_tree, checksum, count_nodes, nodes_created, preorder_ids, reset_node_ids, RegionNode,
    TreeNode,
};
use region_tree::TreeShape;
use serial_test::serial;

#[test]
#[serial]
fn test_two_by_two_tree() {
    reset_node_ids();
    let region = Region::new();
    let root: RegionNode<'_> = build_tree(&region, TreeShape::new(2, 2));

    assert_eq!(root.id(), 0);
    assert_eq!(preorder_ids(&root), vec![0, 1, 3, 4, 2, 5, 6]);
    assert_eq!(checksum(&root), (0 + (1 + (3 + 4)) + (2 + (5 + 6))) % CHECKSUM_MODULUS);
    assert_eq!(checksum(&root), 21);
}

#[test]
#[serial]
fn test_node_count_matches_formula() {
    for (children, depth) in [(1, 1), (1, 7), (2, 5), (3, 4), (4, 3), (5, 2), (7, 1)] {
        reset_node_ids();
        let shape = TreeShape::new(children, depth);
        let region = Region::new();
        let root: RegionNode<'_> = build_tree(&region, shape);

        let expected = shape.node_count().unwrap();
        assert_eq!(count_nodes(&root), expected, "{shape}");
        assert_eq!(u64::from(nodes_created()), expected, "{shape}");
    }
}

#[test]
#[serial]
fn test_direct_children_precede_grandchildren() {
    reset_node_ids();
    let region = Region::new();
    let root: RegionNode<'_> = build_tree(&region, TreeShape::new(3, 3));

    let child_ids: Vec<u32> = root.children().map(|c| c.id()).collect();
    assert_eq!(child_ids, vec![1, 2, 3]);

    let first = root.children().next().unwrap();
    let grandchild_ids: Vec<u32> = first.children().map(|c| c.id()).collect();
    assert_eq!(grandchild_ids, vec![4, 5, 6]);
}

#[test]
#[serial]
fn test_traversal_is_read_only_and_repeatable() {
    reset_node_ids();
    let region = Region::new();
    let root: RegionNode<'_> = build_tree(&region, TreeShape::new(3, 5));
    let stats = region.stats();

    let first = checksum(&root);
    let second = checksum(&root);
    assert_eq!(first, second);
    assert_eq!(region.stats(), stats);
}

#[test]
#[serial]
fn test_checksum_stays_below_modulus() {
    reset_node_ids();
    let region = Region::new();
    let root: RegionNode<'_> = build_tree(&region, TreeShape::new(4, 8));
    assert!(checksum(&root) < CHECKSUM_MODULUS);
}

#[test]
#[serial]
fn test_region_holds_every_node() {
    reset_node_ids();
    let region = Region::new();
    let shape = TreeShape::new(3, 6);
    let root: RegionNode<'_> = build_tree(&region, shape);

    // Root lives on the stack; its child list and every other node are region blocks
    let nodes = shape.node_count().unwrap() as usize;
    let stats = region.stats();
    assert_eq!(stats.blocks_allocated, 2 * nodes - 1);
    assert!(stats.pages_created >= 1);
    assert!(stats.bytes_consumed <= stats.reserved_bytes());
    assert!(root.children().all(|c| region.owns(c as *const RegionNode<'_>)));
}
