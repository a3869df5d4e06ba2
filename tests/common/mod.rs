//! Common test fixtures and helpers.
//!
//! Shared by the pipeline tests in `tests/lib.rs` and the standalone
//! integration test files.
#![allow(dead_code)]

pub mod test_utils;

use memlayout::{LaidOutRegion, Region};

/// Slack allowed between adjacent main-lane regions when offsets come
/// straight from the rounded base computation.
pub const ROUNDING_TOLERANCE: f64 = 0.01 + 1e-9;

/// Shorthand for a region at `start` with `size` bytes.
pub fn region(id: u32, start: u64, size: u64) -> Region {
    Region::new(id, format!("0x{:08X}", start), size)
}

/// A small microcontroller image: boot ROM, flash with a nested
/// read-only island, RAM, and an empty NOLOAD segment.
pub fn mcu_tree() -> Vec<Region> {
    vec![
        region(0, 0x0000_0000, 0x200)
            .with_type("LOAD")
            .with_flags("R")
            .with_label("boot"),
        region(1, 0x1000_0000, 0x4_0000)
            .with_type("LOAD")
            .with_flags("RX")
            .with_label("flash")
            .with_children(vec![
                region(10, 0x1000_0000, 0x3_0000)
                    .with_type("PROGBITS")
                    .with_label(".text")
                    .with_children(vec![
                        region(102, 0x1000_2000, 0x80).with_type("FUNC").with_label("uart_init"),
                        region(100, 0x1000_0000, 0x200).with_type("FUNC").with_label("reset_handler"),
                        region(101, 0x1000_0400, 0x1000).with_type("FUNC").with_label("main"),
                    ]),
                region(11, 0x1003_0000, 0x8000)
                    .with_type("PROGBITS")
                    .with_label(".rodata"),
                region(12, 0x1003_8000, 0x100).with_type("ARM_EXIDX").with_label(".ARM.exidx"),
            ]),
        region(2, 0x1000_4000, 0x1000)
            .with_type("LOAD")
            .with_flags("R")
            .with_label("island"),
        region(3, 0x2000_0000, 0x8000)
            .with_type("LOAD")
            .with_flags("RW")
            .with_label("ram")
            .with_children(vec![
                region(30, 0x2000_0000, 0x400).with_type("PROGBITS").with_label(".data"),
                region(31, 0x2000_0400, 0x2000).with_type("NOBITS").with_label(".bss"),
            ]),
        region(4, 0x2000_8000, 0).with_type("LOAD").with_flags("RW").with_label("noload"),
    ]
}

pub fn ids(regions: &[LaidOutRegion]) -> Vec<u32> {
    regions.iter().map(|r| r.id).collect()
}

pub fn region_ids(regions: &[Region]) -> Vec<u32> {
    regions.iter().map(|r| r.id).collect()
}
