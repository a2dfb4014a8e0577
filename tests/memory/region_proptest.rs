/*!
 * Region Allocator Properties
 * Alignment, disjointness and page accounting over arbitrary request streams
 */

use proptest::prelude::*;
use region_tree::core::limits::{MAX_SMALL_BLOCK_SIZE, PAGE_SIZE};
use region_tree::memory::Region;

fn request() -> impl Strategy<Value = (usize, usize)> {
    (0..=MAX_SMALL_BLOCK_SIZE, 0u32..=10).prop_map(|(size, shift)| (size, 1usize << shift))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn blocks_are_aligned_and_disjoint(requests in prop::collection::vec(request(), 1..400)) {
        let region = Region::new();
        let mut spans = Vec::with_capacity(requests.len());
        let mut consumed = 0;

        for &(size, align) in &requests {
            let start = region.allocate_block(size, align).as_ptr() as usize;
            prop_assert_eq!(start % align, 0);
            if size > 0 {
                prop_assert!(region.owns(start as *const u8));
                prop_assert!(region.owns((start + size - 1) as *const u8));
            }
            spans.push((start, start + size));

            let stats = region.stats();
            prop_assert!(stats.bytes_consumed >= consumed);
            prop_assert!(stats.bytes_consumed <= stats.pages_created * PAGE_SIZE);
            consumed = stats.bytes_consumed;
        }

        spans.retain(|(start, end)| end > start);
        spans.sort_unstable();
        for pair in spans.windows(2) {
            prop_assert!(pair[0].1 <= pair[1].0, "overlap: {:?} and {:?}", pair[0], pair[1]);
        }

        let stats = region.stats();
        prop_assert_eq!(stats.blocks_allocated, requests.len());
        prop_assert_eq!(
            stats.bytes_requested,
            requests.iter().map(|(size, _)| size).sum::<usize>()
        );
    }

    #[test]
    fn reset_replays_identical_addresses(requests in prop::collection::vec(request(), 1..100)) {
        let mut region = Region::new();
        let first: Vec<usize> = requests
            .iter()
            .map(|&(size, align)| region.allocate_block(size, align).as_ptr() as usize)
            .collect();
        let pages = region.stats().pages_created;

        region.reset();
        let second: Vec<usize> = requests
            .iter()
            .map(|&(size, align)| region.allocate_block(size, align).as_ptr() as usize)
            .collect();

        prop_assert_eq!(first, second);
        prop_assert_eq!(region.stats().pages_created, pages);
    }
}
