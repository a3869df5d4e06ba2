//! Region types for memory-layout visualization.
//!
//! A `Region` is the input record delivered by the ELF collaborator and
//! generalizes segments, sections and symbols: segments hold sections in
//! `children`, sections hold symbols, and symbols are leaves. A
//! `LaidOutRegion` is the engine-owned view of one region inside a layout
//! pass, carrying the derived fields the renderer consumes.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::path::Path;

use crate::core::address::{decimal_to_hex_padded, hex_to_decimal};
use crate::error::{LayoutError, Result};

/// Label given to synthetic unused regions.
pub const UNUSED_REGION_LABEL: &str = "UNUSED SEGMENT";

/// One address-range record at any drill-down level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Region {
    /// Identifier, unique among siblings
    pub id: u32,
    /// Start address as a `0x`-prefixed hex string (symbols call it `value`)
    #[serde(alias = "value")]
    pub address: String,
    /// Size in bytes
    pub size: u64,
    /// Flag string, e.g. `"R"` or `"RWX"`
    #[serde(default)]
    pub flags: String,
    /// Collaborator-defined type (`LOAD`, `PROGBITS`, `FUNC`, ...)
    #[serde(rename = "type", default)]
    pub region_type: String,
    /// Display name (sections and symbols call it `name`)
    #[serde(alias = "name", default)]
    pub label: String,
    /// Optional grouping bucket (`Text`, `Data`, `BSS`, ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bucket: Option<String>,
    /// Next level down: sections of a segment, symbols of a section
    #[serde(default, alias = "sections", alias = "symbols")]
    pub children: Vec<Region>,
}

impl Region {
    pub fn new(id: u32, address: impl Into<String>, size: u64) -> Self {
        Self {
            id,
            address: address.into(),
            size,
            flags: String::new(),
            region_type: String::new(),
            label: String::new(),
            bucket: None,
            children: Vec::new(),
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn with_type(mut self, region_type: impl Into<String>) -> Self {
        self.region_type = region_type.into();
        self
    }

    pub fn with_flags(mut self, flags: impl Into<String>) -> Self {
        self.flags = flags.into();
        self
    }

    pub fn with_children(mut self, children: Vec<Region>) -> Self {
        self.children = children;
        self
    }

    /// Start address in decimal (malformed addresses read as `0`).
    pub fn start(&self) -> u64 {
        hex_to_decimal(&self.address)
    }

    /// Exclusive end address in decimal.
    pub fn end(&self) -> u64 {
        self.start().saturating_add(self.size)
    }

    /// Only a bare `R` flag counts as read-only; anything else renders as
    /// read-write-exec.
    pub fn is_read_only(&self) -> bool {
        self.flags.trim().eq_ignore_ascii_case("R")
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Region {} '{}' at {} ({} bytes)",
            self.id, self.label, self.address, self.size
        )
    }
}

/// Parse a segment tree from the collaborator's JSON response.
pub fn load_region_tree(json: &str) -> Result<Vec<Region>> {
    let tree: Vec<Region> = serde_json::from_str(json)?;
    check_unique_ids(&tree)?;
    Ok(tree)
}

/// Read and parse a segment tree from a JSON file.
pub fn load_region_tree_file<P: AsRef<Path>>(path: P) -> Result<Vec<Region>> {
    let text = std::fs::read_to_string(path)?;
    load_region_tree(&text)
}

fn check_unique_ids(siblings: &[Region]) -> Result<()> {
    let mut seen = HashSet::with_capacity(siblings.len());
    for region in siblings {
        if !seen.insert(region.id) {
            return Err(LayoutError::InvalidInput(format!(
                "duplicate region id {} among siblings",
                region.id
            )));
        }
        check_unique_ids(&region.children)?;
    }
    Ok(())
}

/// Stack category assigned during layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    /// Part of the non-overlapping backbone in lane 0
    Main,
    /// Collides with the backbone; rendered in a secondary lane
    Overlapping,
    /// Synthetic placeholder for an address gap
    Unused,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Main => write!(f, "MAIN"),
            Category::Overlapping => write!(f, "OVERLAPPING"),
            Category::Unused => write!(f, "UNUSED"),
        }
    }
}

/// A region as placed by one layout pass.
///
/// `start` and `size` are in raw address space. For synthetic unused regions
/// `size` is the fixed visual gap size rather than the real gap, so it may be
/// fractional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaidOutRegion {
    pub id: u32,
    pub label: String,
    pub region_type: String,
    pub address: String,
    pub read_only: bool,
    pub start: u64,
    pub size: f64,
    pub computed_start: f64,
    pub computed_end: f64,
    pub category: Category,
    pub offset: f64,
    pub size_percentage: f64,
}

impl LaidOutRegion {
    pub fn from_region(region: &Region) -> Self {
        let start = region.start();
        let size = region.size as f64;
        Self {
            id: region.id,
            label: region.label.clone(),
            region_type: region.region_type.clone(),
            address: region.address.clone(),
            read_only: region.is_read_only(),
            start,
            size,
            computed_start: start as f64,
            computed_end: start as f64 + size,
            category: Category::Main,
            offset: 0.0,
            size_percentage: 0.0,
        }
    }

    /// A synthetic placeholder for an address gap starting at `start`.
    pub fn unused(id: u32, start: u64, size: f64, computed_start: f64, width: usize) -> Self {
        Self {
            id,
            label: UNUSED_REGION_LABEL.to_string(),
            region_type: "0".to_string(),
            address: decimal_to_hex_padded(start, width),
            read_only: false,
            start,
            size,
            computed_start,
            computed_end: computed_start + size,
            category: Category::Unused,
            offset: 0.0,
            size_percentage: 0.0,
        }
    }

    /// Exclusive end in raw address space.
    pub fn end(&self) -> f64 {
        self.start as f64 + self.size
    }

    pub fn is_unused(&self) -> bool {
        self.category == Category::Unused
    }
}
