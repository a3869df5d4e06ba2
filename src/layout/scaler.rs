//! Proportional scaling of laid-out regions into render percentages.
//!
//! Offsets and heights are expressed in percent of the corrected address
//! range. The main lane additionally gets a visibility floor: regions too
//! thin to see are clamped up to the floor and the remaining height is shared
//! out among the others in proportion to their original size.

use tracing::{debug, warn};

use crate::core::region::LaidOutRegion;
use crate::layout::round2;

const FULL_HEIGHT: f64 = 100.0;

/// Base offset/height computation for every region.
///
/// `smallest` is the lowest corrected address and `total_range` the corrected
/// address span; both values are rounded to hundredths.
pub fn scale(regions: &mut [LaidOutRegion], smallest: f64, total_range: f64) {
    if total_range <= 0.0 {
        warn!(total_range, "Degenerate address range, skipping scaling");
        return;
    }

    for region in regions.iter_mut() {
        region.offset = round2((region.computed_start - smallest) / total_range * FULL_HEIGHT);
        region.size_percentage = round2(region.size / total_range * FULL_HEIGHT);
    }
}

/// Whether any region of the lane sits at or below the floor.
pub fn needs_floor(lane: &[LaidOutRegion], min_percentage: f64) -> bool {
    lane.iter().any(|r| r.size_percentage <= min_percentage)
}

/// Clamp small main-lane regions to `min_percentage`, redistribute the rest
/// and recompute offsets so the lane stays contiguous.
///
/// The lane must be in address order. Returns `false` and leaves the lane
/// untouched when no region is at or below the floor.
///
/// Redistribution is repeated until no region is pushed under the floor by
/// the shrink of the others. If the lane holds more regions than the floor
/// allows, every region ends up at the floor.
pub fn enforce_floor(lane: &mut [LaidOutRegion], min_percentage: f64) -> bool {
    if !needs_floor(lane, min_percentage) {
        return false;
    }

    let original: Vec<f64> = lane.iter().map(|r| r.size_percentage).collect();
    let mut floored: Vec<bool> = original.iter().map(|&p| p <= min_percentage).collect();

    loop {
        let floored_count = floored.iter().filter(|&&f| f).count();
        let remaining = FULL_HEIGHT - floored_count as f64 * min_percentage;
        let large_total: f64 = original
            .iter()
            .zip(&floored)
            .filter_map(|(p, f)| (!*f).then_some(*p))
            .sum();

        let mut newly_floored = false;
        for (i, region) in lane.iter_mut().enumerate() {
            if floored[i] {
                region.size_percentage = min_percentage;
                continue;
            }
            let resized = original[i] / large_total * remaining;
            if resized < min_percentage {
                floored[i] = true;
                newly_floored = true;
            }
            region.size_percentage = resized;
        }

        if !newly_floored {
            break;
        }
    }

    recompute_offsets(lane);

    debug!(
        regions = lane.len(),
        floored = floored.iter().filter(|&&f| f).count(),
        min_percentage,
        "Enforced main-lane visibility floor"
    );

    true
}

/// Re-lay offsets after heights changed: each region starts where the
/// previous one ends, plus its corrected address gap to it.
fn recompute_offsets(lane: &mut [LaidOutRegion]) {
    let Some(first) = lane.first() else {
        return;
    };
    let smallest = first.computed_start;

    // Region with the largest raw end address; first wins ties
    let mut largest = first;
    for region in lane.iter() {
        if region.end() > largest.end() {
            largest = region;
        }
    }
    let total_range = largest.computed_start + largest.size - smallest;
    if total_range <= 0.0 {
        return;
    }

    for i in 0..lane.len() {
        if i == 0 {
            lane[0].offset = 0.0;
            continue;
        }
        let (prev_top, prev_end) = {
            let prev = &lane[i - 1];
            (
                prev.offset + prev.size_percentage,
                prev.computed_start + prev.size,
            )
        };
        let gap = lane[i].computed_start - prev_end;
        lane[i].offset = prev_top + gap / total_range * FULL_HEIGHT;
    }
}
