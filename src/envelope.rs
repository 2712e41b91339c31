//! Attack/sustain/release intensity envelopes.
//!
//! Every effect derives its brightness from one of these curves. The
//! envelope is pure elapsed-time math; the owning effect decides what the
//! resulting alpha means visually.

use embassy_time::Duration;

use crate::clock::Millis;
use crate::math8::progress8;

/// Timing parameters of an intensity envelope.
///
/// With `has_hold` the timing base is the most recent hold refresh instead
/// of the original start, so a button that keeps reporting "still held"
/// keeps the envelope alive indefinitely.
#[derive(Debug, Clone, Copy)]
pub struct Envelope {
    attack: u32,
    sustain: u32,
    release: u32,
    has_hold: bool,
}

impl Envelope {
    #[allow(clippy::cast_possible_truncation)]
    pub const fn new(
        attack: Duration,
        sustain: Duration,
        release: Duration,
        has_hold: bool,
    ) -> Self {
        Self {
            attack: attack.as_millis() as u32,
            sustain: sustain.as_millis() as u32,
            release: release.as_millis() as u32,
            has_hold,
        }
    }

    const fn total(&self) -> u32 {
        self.attack + self.sustain + self.release
    }
}

/// Runtime state of one envelope.
///
/// `started` doubles as the activity flag: `None` means inactive.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvelopeState {
    started: Option<Millis>,
    held: Millis,
    alpha: u8,
}

impl EnvelopeState {
    pub const fn new() -> Self {
        Self {
            started: None,
            held: Millis::ZERO,
            alpha: 0,
        }
    }

    /// Begin the envelope at `now`.
    pub fn start(&mut self, now: Millis) {
        self.started = Some(now);
        self.held = now;
    }

    /// Refresh the hold anchor without restarting the envelope.
    pub fn hold(&mut self, now: Millis) {
        self.held = now;
    }

    /// Deactivate immediately.
    pub fn stop(&mut self) {
        self.started = None;
        self.alpha = 0;
    }

    pub const fn running(&self) -> bool {
        self.started.is_some()
    }

    /// Intensity computed by the last [`Self::update`] call.
    pub const fn alpha(&self) -> u8 {
        self.alpha
    }

    /// Recompute the intensity for the current instant.
    ///
    /// A finished envelope with any non-zero phase retires itself. An
    /// envelope whose three durations are all zero stays at full intensity
    /// until explicitly stopped.
    pub fn update(&mut self, envelope: &Envelope, now: Millis) -> u8 {
        let Some(started) = self.started else {
            self.alpha = 0;
            return 0;
        };

        let base = if envelope.has_hold { self.held } else { started };
        let runtime = now.since(base);

        self.alpha = if runtime < envelope.attack {
            progress8(runtime, envelope.attack)
        } else if runtime < envelope.attack + envelope.sustain {
            255
        } else if runtime < envelope.total() {
            255 - progress8(runtime - envelope.attack - envelope.sustain, envelope.release)
        } else if envelope.total() == 0 {
            255
        } else {
            self.started = None;
            0
        };
        self.alpha
    }
}
