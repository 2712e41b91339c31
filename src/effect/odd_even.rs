//! Alternating odd/even two-slot fade.

use embassy_time::Duration;

use super::Effect;
use crate::clock::Millis;
use crate::color::Rgb;
use crate::envelope::{Envelope, EnvelopeState};

const RELEASE_MS: u64 = 300;

/// Minimum quiet time between releases before the palette advances.
const PALETTE_IDLE_GAP_MS: u32 = 2000;

const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

const PALETTE: [Rgb; 4] = [
    Rgb { r: 255, g: 0, b: 0 },
    Rgb { r: 0, g: 0, b: 255 },
    Rgb { r: 255, g: 160, b: 0 },
    Rgb { r: 0, g: 255, b: 128 },
];

/// Alternating two-slot fade with a rotating palette.
///
/// A release swaps which pixel parity is lit instead of deactivating; the
/// release fade then retires the effect on its own. The palette advances
/// only after a minimum idle gap, so rapid re-presses keep one color.
#[derive(Debug, Clone)]
pub struct OddEvenEffect {
    envelope: Envelope,
    state: EnvelopeState,
    active_odd: bool,
    palette_idx: usize,
    last_release: Option<Millis>,
}

impl OddEvenEffect {
    pub const fn new() -> Self {
        Self {
            envelope: Envelope::new(
                Duration::from_millis(0),
                Duration::from_millis(0),
                Duration::from_millis(RELEASE_MS),
                true,
            ),
            state: EnvelopeState::new(),
            active_odd: false,
            palette_idx: 0,
            last_release: None,
        }
    }

    /// Palette color the active slots currently draw.
    pub const fn current_color(&self) -> Rgb {
        PALETTE[self.palette_idx]
    }
}

impl Default for OddEvenEffect {
    fn default() -> Self {
        Self::new()
    }
}

impl Effect for OddEvenEffect {
    fn start(&mut self, now: Millis) {
        self.state.start(now);
    }

    fn hold(&mut self, now: Millis) {
        self.state.hold(now);
    }

    fn stop(&mut self, now: Millis) {
        self.active_odd = !self.active_odd;
        let advance = match self.last_release {
            None => true,
            Some(previous) => now.since(previous) > PALETTE_IDLE_GAP_MS,
        };
        if advance {
            self.palette_idx = (self.palette_idx + 1) % PALETTE.len();
        }
        self.last_release = Some(now);
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
        if (idx % 2 == 1) == self.active_odd {
            PALETTE[self.palette_idx]
        } else {
            BLACK
        }
    }
}
