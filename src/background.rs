//! Idle background animation.
//!
//! Every pixel's idle color is a hue that rotates with wall-clock time,
//! offset per pixel so the strip shows a traveling rainbow. While effects
//! are active the background stays dark; after a quiet period it fades
//! back in.

use embassy_time::Duration;

use crate::clock::Millis;
use crate::color::{Hsv, Rgb, hsv2rgb, scale_color, wheel_hue};
use crate::math8::{progress8, scale8};

const DEFAULT_PERIOD_MS: u64 = 5000;
const DEFAULT_BRIGHTNESS: u8 = 32;
const DEFAULT_QUIET_MS: u64 = 3000;
const DEFAULT_FADE_IN_MS: u64 = 1000;

/// Configuration for the idle background.
#[derive(Clone, Copy)]
pub struct BackgroundConfig {
    /// Duration of one full hue revolution
    pub period: Duration,
    /// Idle brightness ceiling
    pub brightness: u8,
    /// Quiet time after the last effect before the idle pattern returns
    pub quiet_period: Duration,
    /// Ramp from dark back to full idle brightness
    pub fade_in: Duration,
}

impl Default for BackgroundConfig {
    fn default() -> Self {
        Self {
            period: Duration::from_millis(DEFAULT_PERIOD_MS),
            brightness: DEFAULT_BRIGHTNESS,
            quiet_period: Duration::from_millis(DEFAULT_QUIET_MS),
            fade_in: Duration::from_millis(DEFAULT_FADE_IN_MS),
        }
    }
}

/// Continuously rotating idle pattern with a fade-in after activity.
pub struct BackgroundAnimator {
    period: u32,
    brightness: u8,
    quiet: u32,
    fade_in: u32,
    pixel_count: u8,
    last_active: Option<Millis>,
}

impl BackgroundAnimator {
    #[allow(clippy::cast_possible_truncation)]
    pub fn new(config: &BackgroundConfig, pixel_count: u8) -> Self {
        Self {
            period: config.period.as_millis() as u32,
            brightness: config.brightness,
            quiet: config.quiet_period.as_millis() as u32,
            fade_in: config.fade_in.as_millis() as u32,
            pixel_count: pixel_count.max(1),
            last_active: None,
        }
    }

    /// Record that an effect rendered this frame; restarts the quiet period.
    pub fn note_active(&mut self, now: Millis) {
        self.last_active = Some(now);
    }

    /// Idle brightness at `now`.
    ///
    /// Dark until the quiet period has passed, then ramped up to the
    /// configured ceiling. Full before any effect has ever run.
    pub fn idle_brightness(&self, now: Millis) -> u8 {
        let Some(last) = self.last_active else {
            return self.brightness;
        };
        let quiet_for = now.since(last);
        if quiet_for < self.quiet {
            return 0;
        }
        scale8(self.brightness, progress8(quiet_for - self.quiet, self.fade_in))
    }

    /// Background color of one pixel.
    pub fn color_at(&self, now: Millis, idx: u8) -> Rgb {
        let offset = u32::from(idx) * (self.period / u32::from(self.pixel_count));
        let color = hsv2rgb(Hsv {
            hue: wheel_hue(now, offset, self.period),
            sat: 255,
            val: 255,
        });
        scale_color(color, self.idle_brightness(now))
    }
}
