//! Gap synthesis: shrinks large unused address ranges to a fixed visual size.
//!
//! Without this, a few kilobytes of bootloader next to a flash region
//! megabytes away would render as an invisible sliver. Every gap wider than
//! the threshold is replaced by one synthetic `Unused` region of the
//! threshold size, and later regions are shifted down by the removed amount.
//! Real address ranges are therefore not linearly preserved.

use tracing::{debug, trace};

use crate::config::LayoutConfig;
use crate::core::region::{Category, LaidOutRegion};
use crate::layout::round2;

/// Bookkeeping produced by [`fill_gaps`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GapSummary {
    /// Total address space removed across all synthesized gaps
    pub cumulative_gap: f64,
    /// Size of the region inserted before the first one, if any
    pub leading_gap_size: Option<f64>,
    /// Visual size given to each synthetic region
    pub threshold: f64,
}

/// Visual size of a synthetic gap: a fraction of the total used size,
/// rounded to hundredths.
pub fn unused_space_size(regions: &[LaidOutRegion], factor: f64) -> f64 {
    let used: f64 = regions.iter().map(|r| r.size).sum();
    round2(used * factor)
}

/// Insert synthetic unused regions into `regions` and set every region's
/// corrected (`computed_*`) addresses.
///
/// `regions` must be sorted by start address and already categorized by a
/// stacking pass. The vector is rebuilt rather than spliced, so the result
/// stays in address order.
pub fn fill_gaps(regions: &mut Vec<LaidOutRegion>, config: &LayoutConfig) -> GapSummary {
    let threshold = unused_space_size(regions, config.unused_space_factor);
    let mut summary = GapSummary {
        cumulative_gap: 0.0,
        leading_gap_size: None,
        threshold,
    };

    if regions.is_empty() {
        return summary;
    }

    let mut next_id = regions
        .iter()
        .map(|r| r.id)
        .max()
        .unwrap_or(0)
        .saturating_add(1);
    let mut out = Vec::with_capacity(regions.len() * 2);
    let mut last_main_end = 0.0;

    for index in 0..regions.len() {
        let start = regions[index].start as f64;
        let end = regions[index].end();

        if index == 0 {
            if start > threshold {
                out.push(LaidOutRegion::unused(
                    next_id,
                    0,
                    threshold,
                    start - threshold,
                    config.address_width,
                ));
                next_id = next_id.saturating_add(1);
                summary.leading_gap_size = Some(threshold);
            }
            last_main_end = end;
        } else {
            let prev = &regions[index - 1];
            let mut prev_end = prev.end();

            // An overlap nested inside the last main region does not move the frontier
            if prev.category == Category::Overlapping && prev_end < last_main_end {
                prev_end = last_main_end;
            }

            let gap = start - prev_end;
            if gap > threshold {
                trace!(at = prev_end, gap, "Synthesizing unused region");
                out.push(LaidOutRegion::unused(
                    next_id,
                    prev_end as u64,
                    threshold,
                    prev_end - summary.cumulative_gap,
                    config.address_width,
                ));
                next_id = next_id.saturating_add(1);
                summary.cumulative_gap += gap - threshold;
            }

            if regions[index].category == Category::Main {
                last_main_end = end;
            }
        }

        let mut region = regions[index].clone();
        region.computed_start = start - summary.cumulative_gap;
        region.computed_end = end - summary.cumulative_gap;
        out.push(region);
    }

    debug!(
        inserted = out.len() - regions.len(),
        threshold,
        cumulative_gap = summary.cumulative_gap,
        leading = ?summary.leading_gap_size,
        "Filled address gaps"
    );

    *regions = out;
    summary
}
