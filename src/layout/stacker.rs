//! Interval stacking: assigns every region to a visual lane.
//!
//! Lane 0 is the main lane and holds the non-overlapping backbone of the
//! address-ordered regions. A region that collides with the last region of a
//! lane, or that overruns the lane's upper bound, is categorized as
//! overlapping and retried one lane further out.

use tracing::debug;

use crate::core::region::{Category, LaidOutRegion};

/// Lanes of laid-out regions; index 0 is the main lane.
pub type StackMatrix = Vec<Vec<LaidOutRegion>>;

/// Address window of the region with the largest end address.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StackReference {
    pub start: f64,
    pub end: f64,
}

impl StackReference {
    /// Pick the region whose end address is maximal. On ties the earliest
    /// region wins.
    pub fn from_regions(regions: &[LaidOutRegion]) -> Option<Self> {
        let mut iter = regions.iter();
        let first = iter.next()?;
        let largest = iter.fold(first, |max, region| {
            if region.end() > max.end() {
                region
            } else {
                max
            }
        });
        Some(Self {
            start: largest.start as f64,
            end: largest.end(),
        })
    }

    /// Upper bound a region must not exceed to stay in `lane`.
    ///
    /// For the main lane this is the reference start, so anything reaching
    /// past the start of the largest region is pushed out, unless the region
    /// starts exactly there (it is the reference itself or shares its start).
    fn upper_bound(&self, lane: usize, region_start: f64) -> f64 {
        let bound = if lane == 0 { self.start } else { self.end };
        if bound == region_start {
            self.end
        } else {
            bound
        }
    }
}

/// Place `regions` (sorted by start address) into lanes.
///
/// Categories are updated in place: a collision marks a region
/// `Overlapping` unless it is `Unused`, and an existing `Overlapping` or
/// `Unused` category is never demoted back to `Main`.
pub fn place_in_stacks(regions: &mut [LaidOutRegion]) -> StackMatrix {
    match StackReference::from_regions(regions) {
        Some(reference) => place_with_reference(regions, reference),
        None => Vec::new(),
    }
}

/// Same as [`place_in_stacks`] but against an explicit reference window.
pub fn place_with_reference(
    regions: &mut [LaidOutRegion],
    reference: StackReference,
) -> StackMatrix {
    let lanes = assign_lanes(regions, reference);

    let matrix: StackMatrix = lanes
        .iter()
        .map(|lane| lane.iter().map(|&i| regions[i].clone()).collect())
        .collect();

    debug!(
        regions = regions.len(),
        lanes = matrix.len(),
        overlapping = regions
            .iter()
            .filter(|r| r.category == Category::Overlapping)
            .count(),
        "Placed regions in stacks"
    );

    matrix
}

/// Returns, per lane, the indices into `regions` placed there.
pub(crate) fn assign_lanes(
    regions: &mut [LaidOutRegion],
    reference: StackReference,
) -> Vec<Vec<usize>> {
    let mut lanes: Vec<Vec<usize>> = Vec::new();
    // End address of the last region placed in each lane
    let mut lane_ends: Vec<f64> = Vec::new();

    for (index, region) in regions.iter_mut().enumerate() {
        let start = region.start as f64;
        let end = region.end();
        let mut lane = 0;

        loop {
            let collides = match lane_ends.get(lane) {
                Some(&last_end) => start < last_end || end > reference.upper_bound(lane, start),
                None => false,
            };

            if collides {
                if region.category != Category::Unused {
                    region.category = Category::Overlapping;
                }
                lane += 1;
                continue;
            }

            if lane == lanes.len() {
                lanes.push(Vec::new());
                lane_ends.push(end);
            } else {
                lane_ends[lane] = end;
            }
            lanes[lane].push(index);
            // Main is the default; Overlapping and Unused take precedence
            break;
        }
    }

    lanes
}
