#![no_std]

pub mod background;
pub mod clock;
pub mod color;
pub mod effect;
pub mod engine;
pub mod envelope;
pub mod events;
pub mod frame_scheduler;
pub mod math8;
pub mod packet;
pub mod reconciler;

pub use background::{BackgroundAnimator, BackgroundConfig};
pub use clock::Millis;
pub use color::{Hsv, Rgb};
pub use effect::{Effect, EffectKind, EffectSlot};
pub use engine::{EffectEngine, EngineConfig, MAX_TRIGGERS};
pub use envelope::{Envelope, EnvelopeState};
pub use events::{ButtonEvent, ButtonState, EventQueue, EventReceiver, EventSender};
pub use frame_scheduler::{FrameResult, FrameScheduler};
pub use packet::{Report, SenderAddr};
pub use reconciler::{LinkStats, Reconciler, ReconcilerConfig};

pub use embassy_time::{Duration, Instant};

/// Abstract per-pixel output sink
///
/// Implement this trait to bind frame output to a concrete downstream
/// (addressable pixel string, stage-lighting channel block, ...). The
/// index-to-channel mapping is fixed at initialization and is entirely
/// the implementor's concern.
pub trait OutputSink {
    /// Write the color for one output slot of the current frame
    fn write_pixel(&mut self, index: usize, color: Rgb);

    /// Called once per frame after all pixels have been written
    fn flush(&mut self) {}
}
