// Color conversion helpers

use crate::host::Rgb;

/// Scale a [0, 1] channel to a byte, rounding to nearest (half away from zero)
///
/// Out-of-range input is clamped and NaN reads as 0, so the result always fits
/// in two hex digits.
pub fn channel_to_byte(channel: f64) -> u8 {
    if channel.is_nan() {
        return 0;
    }
    (channel.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Convert an RGB color to an uppercase `#RRGGBB` string
pub fn rgb_to_hex(color: &Rgb) -> String {
    format!(
        "#{:02X}{:02X}{:02X}",
        channel_to_byte(color.r),
        channel_to_byte(color.g),
        channel_to_byte(color.b)
    )
}
