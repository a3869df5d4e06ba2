//! Invariants every layout must satisfy.

use memlayout::layout::{place_in_stacks, scale};
use memlayout::{compute_layout, Category, LaidOutRegion, LayoutConfig};

use crate::common::{ids, mcu_tree, region, ROUNDING_TOLERANCE};

fn assert_main_lane_contiguous(lane: &[LaidOutRegion]) {
    for pair in lane.windows(2) {
        let top = pair[0].offset + pair[0].size_percentage;
        assert!(
            top <= pair[1].offset + ROUNDING_TOLERANCE,
            "region {} ends at {} past the start of region {} at {}",
            pair[0].id,
            top,
            pair[1].id,
            pair[1].offset
        );
    }
}

#[test]
fn main_lane_never_overlaps() {
    let config = LayoutConfig::default();
    let matrix = compute_layout(&mcu_tree(), &config);
    assert_main_lane_contiguous(&matrix[0]);

    let sections = mcu_tree()[1].children.clone();
    let matrix = compute_layout(&sections, &config);
    assert_main_lane_contiguous(&matrix[0]);
}

#[test]
fn main_lane_respects_floor() {
    let config = LayoutConfig::default();
    let matrix = compute_layout(&mcu_tree(), &config);
    for lane_region in &matrix[0] {
        assert!(
            lane_region.size_percentage >= config.min_size_percentage - 1e-9,
            "{:?}",
            lane_region
        );
    }
}

#[test]
fn layout_is_deterministic() {
    let config = LayoutConfig::default();
    let input = mcu_tree();
    let first = compute_layout(&input, &config);
    let second = compute_layout(&input, &config);

    assert_eq!(first.len(), second.len());
    for (a_lane, b_lane) in first.iter().zip(&second) {
        assert_eq!(ids(a_lane), ids(b_lane));
        for (a, b) in a_lane.iter().zip(b_lane) {
            assert_eq!(a.offset.to_bits(), b.offset.to_bits());
            assert_eq!(a.size_percentage.to_bits(), b.size_percentage.to_bits());
            assert_eq!(a.category, b.category);
        }
    }
}

#[test]
fn gap_at_threshold_is_not_synthesized() {
    // 2000 bytes used -> threshold 70
    let regions = vec![region(1, 0, 1000), region(2, 1070, 1000)];
    let matrix = compute_layout(&regions, &LayoutConfig::default());
    assert_eq!(matrix.len(), 1);
    assert_eq!(ids(&matrix[0]), vec![1, 2]);
}

#[test]
fn gap_above_threshold_is_synthesized() {
    let regions = vec![region(1, 0, 1000), region(2, 1071, 1000)];
    let matrix = compute_layout(&regions, &LayoutConfig::default());
    assert_eq!(matrix.len(), 1);
    let main = &matrix[0];
    assert_eq!(main.len(), 3);
    assert_eq!(main[1].category, Category::Unused);
    assert_eq!(main[0].category, Category::Main);
    assert_eq!(main[2].category, Category::Main);
}

#[test]
fn single_region_fills_the_lane() {
    let mut regions = vec![LaidOutRegion::from_region(&region(1, 0x1000, 100))];
    let matrix = place_in_stacks(&mut regions);
    assert_eq!(matrix.len(), 1);
    assert_eq!(matrix[0].len(), 1);
    assert_eq!(matrix[0][0].category, Category::Main);

    scale(&mut regions, 0x1000 as f64, 100.0);
    assert_eq!(regions[0].offset, 0.0);
    assert_eq!(regions[0].size_percentage, 100.0);
}

#[test]
fn zero_sized_regions_never_reach_the_layout() {
    let matrix = compute_layout(&mcu_tree(), &LayoutConfig::default());
    assert!(matrix.iter().flatten().all(|r| r.label != "noload"));
    assert!(matrix.iter().flatten().all(|r| r.size > 0.0));
}
