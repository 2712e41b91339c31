//! Color helpers shared by the effects and the background animator.

use smart_leds::{RGB8, hsv::Hsv as HSV};

pub use smart_leds::hsv::hsv2rgb;

use crate::clock::Millis;
use crate::math8::scale8;

pub type Rgb = RGB8;
pub type Hsv = HSV;

/// Scale all three channels of a color by `scale` (0-255 = 0.0-1.0).
#[inline]
pub const fn scale_color(color: Rgb, scale: u8) -> Rgb {
    Rgb {
        r: scale8(color.r, scale),
        g: scale8(color.g, scale),
        b: scale8(color.b, scale),
    }
}

/// Hue (0-255) of a rotating color wheel at `now`, shifted by `offset_ms`.
///
/// All pixels share one `period_ms` revolution; per-pixel offsets produce
/// the traveling-rainbow look across a strip.
#[allow(clippy::cast_possible_truncation)]
pub const fn wheel_hue(now: Millis, offset_ms: u32, period_ms: u32) -> u8 {
    let period = if period_ms == 0 { 1 } else { period_ms };
    let phase = now.ticks().wrapping_add(offset_ms) % period;
    ((phase as u64 * 255) / period as u64) as u8
}
