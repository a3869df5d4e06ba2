//! Three-level drill-down navigation over a segment tree.
//!
//! The navigator starts at the segment level. Selecting a segment with
//! sections shows those sections, selecting a section with symbols shows the
//! symbols. The path taken is kept as a breadcrumb stack of region ids, so
//! going back is a pop rather than a search for the parent.

use serde::Serialize;
use std::fmt;
use tracing::{debug, trace};

use crate::core::region::{LaidOutRegion, Region};

/// Drill-down level. Serializes as its layer number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(into = "u8")]
pub enum Layer {
    Segments = 1,
    Sections = 2,
    Symbols = 3,
}

impl Layer {
    /// Layer number as shown to the user, starting at 1.
    pub fn number(self) -> u8 {
        self as u8
    }

    fn from_depth(depth: usize) -> Self {
        match depth {
            0 => Layer::Segments,
            1 => Layer::Sections,
            _ => Layer::Symbols,
        }
    }

    fn depth(self) -> usize {
        self as usize - 1
    }
}

impl From<Layer> for u8 {
    fn from(layer: Layer) -> Self {
        layer.number()
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Layer::Segments => write!(f, "Segments"),
            Layer::Sections => write!(f, "Sections"),
            Layer::Symbols => write!(f, "Symbols"),
        }
    }
}

/// Navigation state handed to the renderer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NavigationState {
    pub layer: Layer,
    pub current_data: Vec<Region>,
    pub parent_layer: Option<Region>,
    pub breadcrumb: String,
}

/// Drill-down state machine over one segment tree snapshot.
#[derive(Debug, Clone)]
pub struct DrillDownNavigator {
    tree: Vec<Region>,
    /// Ids of the selected segment and section, outermost first
    breadcrumbs: Vec<u32>,
    current: Vec<Region>,
}

impl DrillDownNavigator {
    pub fn new(tree: Vec<Region>) -> Self {
        let current = tree.clone();
        Self {
            tree,
            breadcrumbs: Vec::new(),
            current,
        }
    }

    pub fn layer(&self) -> Layer {
        Layer::from_depth(self.breadcrumbs.len())
    }

    pub fn tree(&self) -> &[Region] {
        &self.tree
    }

    pub fn breadcrumbs(&self) -> &[u32] {
        &self.breadcrumbs
    }

    /// Regions shown at the current layer.
    ///
    /// Sections are ordered by ascending size, symbols by ascending address.
    pub fn current_data(&self) -> &[Region] {
        &self.current
    }

    /// The segment or section whose children are being shown.
    pub fn parent_layer(&self) -> Option<&Region> {
        resolve_path(&self.tree, &self.breadcrumbs)
    }

    /// Drill into the region `id` of the current data.
    ///
    /// Returns `false`, leaving the state unchanged, at the symbol level, for
    /// unknown ids and for regions without children.
    pub fn select(&mut self, id: u32) -> bool {
        if self.layer() == Layer::Symbols {
            trace!(id, "Symbols are leaves, ignoring selection");
            return false;
        }

        let Some(region) = self.current.iter().find(|r| r.id == id) else {
            trace!(id, layer = %self.layer(), "Selected region not in current data");
            return false;
        };
        if !region.has_children() {
            trace!(id, "Selected region has no children");
            return false;
        }

        self.breadcrumbs.push(id);
        self.refresh();
        debug!(id, layer = %self.layer(), "Drilled down");
        true
    }

    /// Drill into a region picked from the rendered layout.
    ///
    /// Synthetic unused regions are never selectable.
    pub fn select_laid_out(&mut self, region: &LaidOutRegion) -> bool {
        if region.is_unused() {
            trace!(id = region.id, "Ignoring click on unused region");
            return false;
        }
        self.select(region.id)
    }

    /// Go up one layer. Returns `false` when already at the segment level.
    pub fn back(&mut self) -> bool {
        if self.breadcrumbs.pop().is_none() {
            return false;
        }
        self.refresh();
        debug!(layer = %self.layer(), "Navigated back");
        true
    }

    /// Go up to `layer`. Returns `false` if that would not move up.
    pub fn back_to(&mut self, layer: Layer) -> bool {
        let depth = layer.depth();
        if depth >= self.breadcrumbs.len() {
            return false;
        }
        self.breadcrumbs.truncate(depth);
        self.refresh();
        debug!(layer = %self.layer(), "Navigated back");
        true
    }

    /// Return to the segment level.
    pub fn reset(&mut self) {
        self.breadcrumbs.clear();
        self.refresh();
    }

    /// Swap in a fresh snapshot, keeping as much of the current path as still
    /// resolves to regions with children.
    pub fn replace_tree(&mut self, tree: Vec<Region>) {
        self.tree = tree;
        let mut kept = 0;
        while kept < self.breadcrumbs.len()
            && resolve_path(&self.tree, &self.breadcrumbs[..=kept]).is_some_and(Region::has_children)
        {
            kept += 1;
        }
        if kept < self.breadcrumbs.len() {
            debug!(
                from = self.breadcrumbs.len(),
                to = kept,
                "Path no longer resolves, truncating"
            );
        }
        self.breadcrumbs.truncate(kept);
        self.refresh();
    }

    /// Human-readable label for the back button.
    pub fn breadcrumb_label(&self) -> String {
        match (self.layer(), self.parent_layer()) {
            (Layer::Sections, Some(segment)) => format!(
                "Sections for Segment \"{} - {}\"",
                segment.id, segment.region_type
            ),
            (Layer::Symbols, Some(section)) => {
                format!("Symbols for Section \"{}\"", section.label)
            }
            _ => Layer::Segments.to_string(),
        }
    }

    pub fn snapshot(&self) -> NavigationState {
        NavigationState {
            layer: self.layer(),
            current_data: self.current.clone(),
            parent_layer: self.parent_layer().cloned(),
            breadcrumb: self.breadcrumb_label(),
        }
    }

    fn refresh(&mut self) {
        let layer = self.layer();
        self.current = match self.parent_layer() {
            None => self.tree.clone(),
            Some(parent) => {
                let mut children = parent.children.clone();
                match layer {
                    Layer::Sections => children.sort_by_key(|r| r.size),
                    _ => children.sort_by_key(Region::start),
                }
                children
            }
        };
    }
}

fn resolve_path<'a>(tree: &'a [Region], path: &[u32]) -> Option<&'a Region> {
    let (first, rest) = path.split_first()?;
    let mut node = tree.iter().find(|r| r.id == *first)?;
    for id in rest {
        node = node.children.iter().find(|r| r.id == *id)?;
    }
    Some(node)
}
