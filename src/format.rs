use byte_unit::{AdjustedByte, Byte, Unit, UnitType};

/// Format bytes into a human-readable string, e.g. `1.50 KB`.
///
/// Steps are powers of 1024 and stop at PB; anything larger stays in PB.
pub fn format_bytes(size: u64) -> String {
    let byte = Byte::from_u64(size);
    let adjusted = byte.get_appropriate_unit(UnitType::Binary);
    let (value, label) = match short_label(&adjusted) {
        Some(label) => (adjusted.get_value(), label),
        None => (byte.get_adjusted_unit(Unit::PiB).get_value(), "PB"),
    };
    format!("{value:.2} {label}")
}

fn short_label(adjusted: &AdjustedByte) -> Option<&'static str> {
    match adjusted.get_unit() {
        Unit::B => Some("B"),
        Unit::KiB => Some("KB"),
        Unit::MiB => Some("MB"),
        Unit::GiB => Some("GB"),
        Unit::TiB => Some("TB"),
        Unit::PiB => Some("PB"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::format_bytes;

    #[test]
    fn formats_with_binary_steps() {
        assert_eq!(format_bytes(0), "0.00 B");
        assert_eq!(format_bytes(1023), "1023.00 B");
        assert_eq!(format_bytes(1024), "1.00 KB");
        assert_eq!(format_bytes(1536), "1.50 KB");
        assert_eq!(format_bytes(5 * 1024 * 1024), "5.00 MB");
        assert_eq!(format_bytes(1_073_741_824), "1.00 GB");
        assert_eq!(format_bytes(1u64 << 40), "1.00 TB");
    }

    #[test]
    fn caps_at_petabytes() {
        assert_eq!(format_bytes(1u64 << 50), "1.00 PB");
        assert_eq!(format_bytes(1u64 << 60), "1024.00 PB");
    }
}
