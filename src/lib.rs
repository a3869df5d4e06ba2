//! Memory-layout visualization engine.
//!
//! Takes the possibly-overlapping segments, sections and symbols of an
//! executable and produces a non-overlapping, proportionally scaled, layered
//! layout for a renderer, plus the segment → section → symbol drill-down
//! built on top of it.
//!
//! ```
//! use memlayout::{compute_layout, LayoutConfig, Region};
//!
//! let regions = vec![
//!     Region::new(0, "0x00000000", 0x4000).with_flags("RX"),
//!     Region::new(1, "0x20000000", 0x1000).with_flags("RW"),
//! ];
//! let matrix = compute_layout(&regions, &LayoutConfig::default());
//! assert_eq!(matrix.len(), 1);
//! ```

/// Core data types module
pub mod core;
pub mod config;
pub mod error;
pub mod layout;
pub mod logging;
pub mod navigation;

pub use crate::config::LayoutConfig;
pub use crate::core::address::{decimal_to_hex, format_bytes, hex_to_decimal, parse_hex_address};
pub use crate::core::region::{load_region_tree, Category, LaidOutRegion, Region};
pub use crate::error::{LayoutError, Result};
pub use crate::layout::{compute_layout, StackMatrix};
pub use crate::navigation::{DrillDownNavigator, Layer, NavigationState};
