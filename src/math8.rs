/// Scale an 8-bit value by a factor (0-255 = 0.0-1.0)
///
/// Uses integer math for efficiency on embedded systems.
#[inline]
#[allow(clippy::cast_lossless)]
pub const fn scale8(value: u8, scale: u8) -> u8 {
    ((value as u16 * (1 + scale as u16)) >> 8) as u8
}

/// Calculate progress (0-255) based on elapsed and total milliseconds
///
/// A zero duration reports instant completion, so zero-length phases are
/// skipped rather than divided by.
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub const fn progress8(elapsed_ms: u32, duration_ms: u32) -> u8 {
    if duration_ms == 0 || elapsed_ms >= duration_ms {
        return 255;
    }
    ((elapsed_ms as u64 * 255) / duration_ms as u64) as u8
}
