//! Effect engine and per-frame compositor.

use heapless::Vec;

use crate::background::{BackgroundAnimator, BackgroundConfig};
use crate::clock::Millis;
use crate::color::{Rgb, scale_color};
use crate::effect::{EffectKind, EffectSlot};
use crate::events::ButtonState;

/// Upper bound on effect slots (one per trigger id).
pub const MAX_TRIGGERS: usize = 8;

const DEFAULT_PIXEL_COUNT: u8 = 4;

/// Configuration for the effect engine.
#[derive(Clone, Copy)]
pub struct EngineConfig {
    /// Number of output slots driven each frame
    pub pixel_count: u8,
    pub background: BackgroundConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            pixel_count: DEFAULT_PIXEL_COUNT,
            background: BackgroundConfig::default(),
        }
    }
}

/// Effect engine - composites one frame at a time by slot precedence.
///
/// The slot order is both the trigger-id binding and the render
/// precedence: for each pixel the first running slot supplies the color,
/// scaled by its alpha, and the scan stops there. No blending.
pub struct EffectEngine<const MAX_PIXELS: usize> {
    effects: Vec<EffectSlot, MAX_TRIGGERS>,
    background: BackgroundAnimator,
    frame_buffer: [Rgb; MAX_PIXELS],
    pixel_count: u8,
}

impl<const MAX_PIXELS: usize> EffectEngine<MAX_PIXELS> {
    /// Create an engine; the order of `kinds` defines the trigger binding.
    #[allow(clippy::cast_possible_truncation)]
    pub fn new(kinds: &[EffectKind], config: &EngineConfig) -> Self {
        let pixel_count = (usize::from(config.pixel_count)).min(MAX_PIXELS) as u8;
        let mut effects: Vec<EffectSlot, MAX_TRIGGERS> = Vec::new();
        for kind in kinds.iter().take(MAX_TRIGGERS) {
            let mut slot = kind.to_slot();
            slot.init(pixel_count);
            let _ = effects.push(slot);
        }
        Self {
            effects,
            background: BackgroundAnimator::new(&config.background, pixel_count),
            frame_buffer: [Rgb::default(); MAX_PIXELS],
            pixel_count,
        }
    }

    /// Dispatch a canonical event to the slot bound to `trigger`.
    ///
    /// Out-of-range ids are a configuration mismatch, not a runtime fault,
    /// and are ignored silently.
    pub fn trigger(&mut self, trigger: u8, state: ButtonState, now: Millis) {
        let Some(slot) = self.effects.get_mut(usize::from(trigger)) else {
            return;
        };
        match state {
            ButtonState::Pressed => slot.start(now),
            ButtonState::Hold => slot.hold(now),
            ButtonState::Released => slot.stop(now),
        }
    }

    /// Render one frame.
    #[allow(clippy::cast_possible_truncation)]
    pub fn render(&mut self, now: Millis) -> &[Rgb] {
        let count = usize::from(self.pixel_count);
        let mut any_effect = false;

        for i in 0..count {
            let idx = i as u8;
            let mut color = None;
            for slot in self.effects.iter_mut() {
                if slot.running() {
                    let rendered = slot.render(now, idx);
                    color = Some(scale_color(rendered, slot.alpha()));
                    any_effect = true;
                    // First come, first serve: no blending with lower
                    // precedence slots or the background.
                    break;
                }
            }
            self.frame_buffer[i] =
                color.unwrap_or_else(|| self.background.color_at(now, idx));
        }

        if any_effect {
            self.background.note_active(now);
        }
        &self.frame_buffer[..count]
    }

    pub fn pixel_count(&self) -> u8 {
        self.pixel_count
    }

    pub fn background(&self) -> &BackgroundAnimator {
        &self.background
    }
}
