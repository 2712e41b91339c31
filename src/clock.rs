//! Wrapping millisecond timestamps.
//!
//! The radio callback and the render loop both measure elapsed time against
//! a 32-bit millisecond counter that wraps after roughly 49 days. Every
//! comparison goes through [`Millis::since`], which uses wrapping
//! subtraction; absolute timestamps are never compared directly.

use embassy_time::Instant;

/// A point in time on the wrapping 32-bit millisecond counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Millis(u32);

impl Millis {
    pub const ZERO: Self = Self(0);

    /// Create a timestamp from a raw millisecond tick value.
    pub const fn from_ticks(ms: u32) -> Self {
        Self(ms)
    }

    /// Raw millisecond tick value.
    pub const fn ticks(self) -> u32 {
        self.0
    }

    /// Truncate an [`Instant`] onto the wrapping counter.
    #[allow(clippy::cast_possible_truncation)]
    pub fn from_instant(now: Instant) -> Self {
        Self(now.as_millis() as u32)
    }

    /// Milliseconds elapsed since `earlier`.
    ///
    /// Wraparound-safe: correct even when the counter has wrapped between
    /// `earlier` and `self`.
    pub const fn since(self, earlier: Self) -> u32 {
        self.0.wrapping_sub(earlier.0)
    }
}
