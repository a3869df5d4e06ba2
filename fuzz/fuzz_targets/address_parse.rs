#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        if let Ok(value) = memlayout::parse_hex_address(text) {
            assert_eq!(memlayout::hex_to_decimal(&memlayout::decimal_to_hex(value)), value);
        }
    }
});
