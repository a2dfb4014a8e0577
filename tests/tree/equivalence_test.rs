/*!
 * Cross-Strategy Equivalence
 * Every storage strategy must build the same tree
 */

use bumpalo::Bump;
use pretty_assertions::assert_eq;
use region_tree::memory::Region;
use region_tree::tree::{
    build_tree, checksum, count_nodes, preorder_ids, reset_node_ids, BumpNode, Heap, OwnedNode,
    RegionNode,
};
use region_tree::TreeShape;
use serial_test::serial;

fn owned(shape: TreeShape) -> (u64, u64, Vec<u32>) {
    reset_node_ids();
    let root: OwnedNode = build_tree(&Heap, shape);
    (checksum(&root), count_nodes(&root), preorder_ids(&root))
}

fn region(shape: TreeShape) -> (u64, u64, Vec<u32>) {
    reset_node_ids();
    let region = Region::new();
    let root: RegionNode<'_> = build_tree(&region, shape);
    (checksum(&root), count_nodes(&root), preorder_ids(&root))
}

fn bump(shape: TreeShape) -> (u64, u64, Vec<u32>) {
    reset_node_ids();
    let arena = Bump::new();
    let root: BumpNode<'_> = build_tree(&arena, shape);
    (checksum(&root), count_nodes(&root), preorder_ids(&root))
}

#[test]
#[serial]
fn test_strategies_agree() {
    for shape in [
        TreeShape::new(2, 2),
        TreeShape::new(3, 6),
        TreeShape::new(2, 12),
        TreeShape::new(6, 4),
    ] {
        let expected = owned(shape);
        assert_eq!(region(shape), expected, "region vs owned, {shape}");
        assert_eq!(bump(shape), expected, "bump vs owned, {shape}");
    }
}

#[test]
#[serial]
fn test_counter_reset_makes_runs_repeatable() {
    let shape = TreeShape::new(3, 5);
    let first = region(shape);
    let second = region(shape);
    assert_eq!(first, second);
}

#[test]
#[serial]
fn test_without_reset_ids_continue() {
    let shape = TreeShape::new(2, 2);
    reset_node_ids();
    let region_a = Region::new();
    let _first: RegionNode<'_> = build_tree(&region_a, shape);

    let region_b = Region::new();
    let second: RegionNode<'_> = build_tree(&region_b, shape);
    assert_eq!(preorder_ids(&second)[0], 7);
}
