//! Render hints derived from a laid-out region.
//!
//! The UI layer owns the actual drawing; these helpers only decide the
//! numbers and classes it needs so every renderer draws the same picture.

use serde::{Deserialize, Serialize};

use crate::config::LayoutConfig;
use crate::core::address::decimal_to_hex_padded;
use crate::core::region::{Category, LaidOutRegion};

/// Hover name for synthetic regions.
pub const UNUSED_HOVER_NAME: &str = "Unused space";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StyleClass {
    Unused,
    ReadOnly,
    ReadWriteExec,
}

/// Height and bottom position in percent, plus the style class.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RegionStyle {
    pub height: f64,
    pub bottom: f64,
    pub class: StyleClass,
    /// Whether label and size fit inside the drawn box
    pub shows_details: bool,
}

/// Tooltip content for a hovered region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoverInfo {
    pub id: u32,
    pub name: String,
    pub size: f64,
    pub start: String,
    /// `None` for a trailing unused region with nothing after it
    pub end: Option<String>,
}

pub fn style_class(region: &LaidOutRegion) -> StyleClass {
    if region.is_unused() {
        StyleClass::Unused
    } else if region.read_only {
        StyleClass::ReadOnly
    } else {
        StyleClass::ReadWriteExec
    }
}

pub fn region_style(region: &LaidOutRegion, config: &LayoutConfig) -> RegionStyle {
    let mut height = region.size_percentage;
    // Thin overlaps would vanish next to the main lane
    if region.category == Category::Overlapping && height < config.overlap_min_height {
        height = config.overlap_min_height;
    }

    RegionStyle {
        height,
        bottom: region.offset,
        class: style_class(region),
        shows_details: !region.is_unused()
            && region.size_percentage >= config.min_size_percentage,
    }
}

/// The region following `id` in the lane, if any.
pub fn next_region(lane: &[LaidOutRegion], id: u32) -> Option<&LaidOutRegion> {
    let index = lane.iter().position(|r| r.id == id)?;
    lane.get(index + 1)
}

/// Hover details for region `id` of `lane`.
///
/// An unused region spans up to the start of the region after it.
pub fn hover_info(lane: &[LaidOutRegion], id: u32, config: &LayoutConfig) -> Option<HoverInfo> {
    let region = lane.iter().find(|r| r.id == id)?;

    if region.is_unused() {
        return Some(HoverInfo {
            id: region.id,
            name: UNUSED_HOVER_NAME.to_string(),
            size: region.size,
            start: region.address.clone(),
            end: next_region(lane, id)
                .map(|next| decimal_to_hex_padded(next.start, config.address_width)),
        });
    }

    let end = region.start.saturating_add(region.size as u64);
    Some(HoverInfo {
        id: region.id,
        name: region.label.clone(),
        size: region.size,
        start: region.address.clone(),
        end: Some(decimal_to_hex_padded(end, config.address_width)),
    })
}
