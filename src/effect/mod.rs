//! Effect system with compile-time known effect variants
//!
//! All effects are stored in an enum to avoid heap allocations.
//! Each effect implements the `Effect` trait.

mod odd_even;
mod rainbow_flash;
mod strobe;

pub use odd_even::OddEvenEffect;
pub use rainbow_flash::RainbowFlashEffect;
pub use strobe::StrobeEffect;

use crate::clock::Millis;
use crate::color::Rgb;

const EFFECT_NAME_STROBE: &str = "strobe";
const EFFECT_NAME_RAINBOW_FLASH: &str = "rainbow_flash";
const EFFECT_NAME_ODD_EVEN: &str = "odd_even";

const EFFECT_ID_STROBE: u8 = 0;
const EFFECT_ID_RAINBOW_FLASH: u8 = 1;
const EFFECT_ID_ODD_EVEN: u8 = 2;

pub trait Effect {
    /// Bind the effect to the configured pixel count
    fn init(&mut self, _pixel_count: u8) {}

    /// Begin the effect envelope
    fn start(&mut self, now: Millis);

    /// Refresh the hold anchor without restarting
    fn hold(&mut self, now: Millis);

    /// Request deactivation
    ///
    /// Variants that should persist past release override this with
    /// variant-specific bookkeeping instead of deactivating.
    fn stop(&mut self, now: Millis);

    /// Whether the effect currently occupies its slot
    fn running(&self) -> bool;

    /// Intensity computed by the last render pass
    fn alpha(&self) -> u8;

    /// Color for one pixel
    ///
    /// The first pixel of a frame recomputes the envelope alpha. The
    /// returned color is unscaled; the compositor applies alpha.
    fn render(&mut self, now: Millis, idx: u8) -> Rgb;
}

/// Effect slot - enum containing all possible effects
#[derive(Debug, Clone)]
pub enum EffectSlot {
    /// Constant duty-cycle white strobe
    Strobe(StrobeEffect),
    /// Traveling rainbow flash that fades out after release
    RainbowFlash(RainbowFlashEffect),
    /// Alternating odd/even fade with a rotating palette
    OddEven(OddEvenEffect),
}

/// Known effect kinds that can be bound to a trigger.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum EffectKind {
    Strobe = EFFECT_ID_STROBE,
    RainbowFlash = EFFECT_ID_RAINBOW_FLASH,
    OddEven = EFFECT_ID_ODD_EVEN,
}

impl Default for EffectSlot {
    fn default() -> Self {
        Self::Strobe(StrobeEffect::new())
    }
}

impl EffectKind {
    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            EFFECT_ID_STROBE => Self::Strobe,
            EFFECT_ID_RAINBOW_FLASH => Self::RainbowFlash,
            EFFECT_ID_ODD_EVEN => Self::OddEven,
            _ => return None,
        })
    }

    pub fn to_slot(self) -> EffectSlot {
        match self {
            Self::Strobe => EffectSlot::Strobe(StrobeEffect::new()),
            Self::RainbowFlash => EffectSlot::RainbowFlash(RainbowFlashEffect::new()),
            Self::OddEven => EffectSlot::OddEven(OddEvenEffect::new()),
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Strobe => EFFECT_NAME_STROBE,
            Self::RainbowFlash => EFFECT_NAME_RAINBOW_FLASH,
            Self::OddEven => EFFECT_NAME_ODD_EVEN,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            EFFECT_NAME_STROBE => Some(Self::Strobe),
            EFFECT_NAME_RAINBOW_FLASH => Some(Self::RainbowFlash),
            EFFECT_NAME_ODD_EVEN => Some(Self::OddEven),
            _ => None,
        }
    }
}

impl EffectSlot {
    /// Get the effect kind for external observation
    pub fn kind(&self) -> EffectKind {
        match self {
            Self::Strobe(_) => EffectKind::Strobe,
            Self::RainbowFlash(_) => EffectKind::RainbowFlash,
            Self::OddEven(_) => EffectKind::OddEven,
        }
    }

    /// Bind the effect to the configured pixel count
    pub fn init(&mut self, pixel_count: u8) {
        match self {
            Self::Strobe(effect) => effect.init(pixel_count),
            Self::RainbowFlash(effect) => effect.init(pixel_count),
            Self::OddEven(effect) => effect.init(pixel_count),
        }
    }

    /// Begin the effect envelope
    pub fn start(&mut self, now: Millis) {
        match self {
            Self::Strobe(effect) => effect.start(now),
            Self::RainbowFlash(effect) => effect.start(now),
            Self::OddEven(effect) => effect.start(now),
        }
    }

    /// Refresh the hold anchor
    pub fn hold(&mut self, now: Millis) {
        match self {
            Self::Strobe(effect) => effect.hold(now),
            Self::RainbowFlash(effect) => effect.hold(now),
            Self::OddEven(effect) => effect.hold(now),
        }
    }

    /// Request deactivation
    pub fn stop(&mut self, now: Millis) {
        match self {
            Self::Strobe(effect) => effect.stop(now),
            Self::RainbowFlash(effect) => effect.stop(now),
            Self::OddEven(effect) => effect.stop(now),
        }
    }

    /// Whether the effect currently occupies its slot
    pub fn running(&self) -> bool {
        match self {
            Self::Strobe(effect) => effect.running(),
            Self::RainbowFlash(effect) => effect.running(),
            Self::OddEven(effect) => effect.running(),
        }
    }

    /// Intensity computed by the last render pass
    pub fn alpha(&self) -> u8 {
        match self {
            Self::Strobe(effect) => effect.alpha(),
            Self::RainbowFlash(effect) => effect.alpha(),
            Self::OddEven(effect) => effect.alpha(),
        }
    }

    /// Render one pixel of the current frame
    pub fn render(&mut self, now: Millis, idx: u8) -> Rgb {
        match self {
            Self::Strobe(effect) => effect.render(now, idx),
            Self::RainbowFlash(effect) => effect.render(now, idx),
            Self::OddEven(effect) => effect.render(now, idx),
        }
    }
}
