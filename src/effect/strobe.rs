//! Constant duty-cycle white strobe.

use embassy_time::Duration;

use super::Effect;
use crate::clock::Millis;
use crate::color::Rgb;
use crate::envelope::{Envelope, EnvelopeState};

const SUSTAIN_MS: u64 = 100;

/// Length of one off/on interval.
const STROBE_CYCLE_MS: u32 = 25;

const WHITE: Rgb = Rgb { r: 255, g: 255, b: 255 };
const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

/// Fixed on/off flicker at a constant duty cycle.
///
/// The hold-anchored sustain keeps the strobe alive while the button is
/// down; 100 ms after the last refresh it retires. The blink phase is
/// captured at each start so the pattern always begins on its dark
/// half-cycle instead of jumping mid-interval.
#[derive(Debug, Clone)]
pub struct StrobeEffect {
    envelope: Envelope,
    state: EnvelopeState,
    start_inverted: bool,
}

impl StrobeEffect {
    pub const fn new() -> Self {
        Self {
            envelope: Envelope::new(
                Duration::from_millis(0),
                Duration::from_millis(SUSTAIN_MS),
                Duration::from_millis(0),
                true,
            ),
            state: EnvelopeState::new(),
            start_inverted: false,
        }
    }

    const fn phase_on(now: Millis) -> bool {
        (now.ticks() / STROBE_CYCLE_MS) % 2 == 1
    }
}

impl Default for StrobeEffect {
    fn default() -> Self {
        Self::new()
    }
}

impl Effect for StrobeEffect {
    fn start(&mut self, now: Millis) {
        self.state.start(now);
        self.start_inverted = Self::phase_on(now);
    }

    fn hold(&mut self, now: Millis) {
        self.state.hold(now);
    }

    fn stop(&mut self, _now: Millis) {
        self.state.stop();
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
        if self.state.alpha() == 0 {
            return BLACK;
        }
        if Self::phase_on(now) ^ self.start_inverted {
            WHITE
        } else {
            BLACK
        }
    }
}
