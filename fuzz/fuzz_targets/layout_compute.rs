#![no_main]
use libfuzzer_sys::fuzz_target;
use memlayout::{compute_layout, LayoutConfig, Region};

// Every 6 bytes: 4-byte start address, 2-byte size
fuzz_target!(|data: &[u8]| {
    let regions: Vec<Region> = data
        .chunks_exact(6)
        .enumerate()
        .map(|(id, chunk)| {
            let start = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
            let size = u16::from_le_bytes([chunk[4], chunk[5]]);
            Region::new(id as u32, format!("0x{:08X}", start), u64::from(size))
        })
        .collect();
    let matrix = compute_layout(&regions, &LayoutConfig::default());
    for lane in &matrix {
        for region in lane {
            assert!(region.size_percentage.is_finite());
            assert!(region.offset.is_finite());
        }
    }
});
