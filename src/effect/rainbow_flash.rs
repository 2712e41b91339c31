//! Traveling rainbow flash.

use embassy_time::Duration;

use super::Effect;
use crate::clock::Millis;
use crate::color::{Hsv, Rgb, hsv2rgb, wheel_hue};
use crate::envelope::{Envelope, EnvelopeState};

const RELEASE_MS: u64 = 350;

/// One full hue revolution across the strip.
const RAINBOW_PERIOD_MS: u32 = 5000;

/// Ambient brightness floor; a fade below it reads as background.
const AMBIENT_FLOOR: u8 = 32;

/// Rainbow-hue flash that fades out after each press.
///
/// `stop` is a no-op: the effect persists past release and retires itself
/// once its fade reaches the ambient brightness floor, which avoids a
/// steppy hand-off to the background.
#[derive(Debug, Clone)]
pub struct RainbowFlashEffect {
    envelope: Envelope,
    state: EnvelopeState,
    pixel_count: u8,
}

impl RainbowFlashEffect {
    pub const fn new() -> Self {
        Self {
            envelope: Envelope::new(
                Duration::from_millis(0),
                Duration::from_millis(0),
                Duration::from_millis(RELEASE_MS),
                true,
            ),
            state: EnvelopeState::new(),
            pixel_count: 1,
        }
    }
}

impl Default for RainbowFlashEffect {
    fn default() -> Self {
        Self::new()
    }
}

impl Effect for RainbowFlashEffect {
    fn init(&mut self, pixel_count: u8) {
        self.pixel_count = pixel_count.max(1);
    }

    fn start(&mut self, now: Millis) {
        self.state.start(now);
    }

    fn hold(&mut self, now: Millis) {
        self.state.hold(now);
    }

    fn stop(&mut self, _now: Millis) {
        // Persists until the fade reaches the ambient floor below.
    }

    fn running(&self) -> bool {
        self.state.running()
    }

    fn alpha(&self) -> u8 {
        self.state.alpha()
    }

    fn render(&mut self, now: Millis, idx: u8) -> Rgb {
        if idx == 0 {
            self.state.update(&self.envelope, now);
        }
        if idx == self.pixel_count - 1 && self.state.alpha() < AMBIENT_FLOOR {
            self.state.stop();
        }

        let offset = u32::from(idx) * (RAINBOW_PERIOD_MS / u32::from(self.pixel_count));
        hsv2rgb(Hsv {
            hue: wheel_hue(now, offset, RAINBOW_PERIOD_MS),
            sat: 255,
            val: 255,
        })
    }
}
