//! Memory-layout computation.
//!
//! Turns one drill-down level's regions into a stack matrix the renderer can
//! draw directly:
//!
//! 1. drop zero-sized regions and sort by start address
//! 2. stack once to categorize regions as main or overlapping
//! 3. replace wide address gaps with fixed-size unused regions
//! 4. scale every region into offset/height percentages
//! 5. stack again, now including the unused regions
//! 6. apply the visibility floor to the main lane
//!
//! Each call is a pure function of its input; nothing is cached between
//! passes.

pub mod gaps;
pub mod scaler;
pub mod stacker;
pub mod style;

use tracing::debug;

use crate::config::LayoutConfig;
use crate::core::region::{LaidOutRegion, Region};
use crate::span_trace;

pub use gaps::{fill_gaps, GapSummary};
pub use scaler::{enforce_floor, scale};
pub use stacker::{place_in_stacks, StackMatrix, StackReference};

/// Round to two decimal places.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Regions with a size of zero have no visual representation.
pub fn remove_items_without_size(regions: &[Region]) -> Vec<&Region> {
    regions.iter().filter(|r| r.size != 0).collect()
}

/// Stable sort by raw start address.
pub fn sort_by_start(regions: &mut [LaidOutRegion]) {
    regions.sort_by_key(|r| r.start);
}

/// Run the full layout pipeline over one level's regions.
///
/// An empty result means there is nothing to draw.
pub fn compute_layout(regions: &[Region], config: &LayoutConfig) -> StackMatrix {
    let span = span_trace!("compute_layout", regions = regions.len());
    let _guard = span.enter();

    let mut laid_out: Vec<LaidOutRegion> = remove_items_without_size(regions)
        .into_iter()
        .map(LaidOutRegion::from_region)
        .collect();

    if laid_out.is_empty() {
        debug!("No sized regions, nothing to lay out");
        return Vec::new();
    }

    sort_by_start(&mut laid_out);

    let Some(reference) = StackReference::from_regions(&laid_out) else {
        return Vec::new();
    };
    let mut smallest = laid_out[0].start as f64;
    let mut total_range = reference.end - smallest;

    // First pass only categorizes; its lanes are discarded
    stacker::assign_lanes(&mut laid_out, reference);

    let summary = fill_gaps(&mut laid_out, config);
    if let Some(leading) = summary.leading_gap_size {
        smallest -= leading;
        total_range += leading;
    }
    // fill_gaps keeps address order, no re-sort needed
    total_range -= summary.cumulative_gap;

    scale(&mut laid_out, smallest, total_range);

    let mut matrix = stacker::place_with_reference(&mut laid_out, reference);
    if let Some(main) = matrix.first_mut() {
        enforce_floor(main, config.min_size_percentage);
    }

    debug!(
        lanes = matrix.len(),
        main = matrix.first().map_or(0, Vec::len),
        total_range,
        "Computed memory layout"
    );

    matrix
}
