//! Address math for the layout engine.
//!
//! Region addresses arrive from the ELF collaborator as `0x`-prefixed,
//! uppercase hex strings. The engine works in decimal, so every conversion
//! in either direction goes through here.

use tracing::warn;

use crate::config::DEFAULT_ADDRESS_WIDTH;
use crate::error::{LayoutError, Result};

const KIB: u64 = 1024;
const MIB: u64 = 1024 * 1024;

/// Parse a hex address string, with or without a `0x` prefix.
///
/// # Errors
/// Returns `LayoutError::InvalidAddress` for empty or non-hex input, or when
/// the value does not fit in 64 bits.
pub fn parse_hex_address(hex: &str) -> Result<u64> {
    let trimmed = hex.trim();
    let digits = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);

    if digits.is_empty() {
        return Err(LayoutError::InvalidAddress(format!("empty address {:?}", hex)));
    }

    u64::from_str_radix(digits, 16)
        .map_err(|e| LayoutError::InvalidAddress(format!("{:?}: {}", hex, e)))
}

/// Convert a hex address string to decimal, failing closed to `0`.
///
/// A single malformed region must not abort the layout of all the others,
/// so parse failures are logged and mapped to address zero.
pub fn hex_to_decimal(hex: &str) -> u64 {
    match parse_hex_address(hex) {
        Ok(value) => value,
        Err(err) => {
            warn!(address = %hex, error = %err, "Malformed address, using 0");
            0
        }
    }
}

/// Render a decimal address as `0x`-prefixed uppercase hex, padded to 8 digits.
pub fn decimal_to_hex(value: u64) -> String {
    decimal_to_hex_padded(value, DEFAULT_ADDRESS_WIDTH)
}

/// Render a decimal address as `0x`-prefixed uppercase hex, padded to `width` digits.
pub fn decimal_to_hex_padded(value: u64, width: usize) -> String {
    format!("0x{:0width$X}", value, width = width)
}

/// Group the digits of a byte count with commas, e.g. `1,048,576`.
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Human-readable byte size: `B` below 1 KiB, otherwise `KB`/`MB` with two decimals.
pub fn format_bytes(size: u64) -> String {
    if size >= MIB {
        format!("{:.2} MB", size as f64 / MIB as f64)
    } else if size >= KIB {
        format!("{:.2} KB", size as f64 / KIB as f64)
    } else {
        format!("{} B", size)
    }
}
