//! Frame scheduling and timing utilities.
//!
//! Drives one logical tick: drain pending canonical events, render the
//! frame, push every pixel to the output sink, flush. The caller runs the
//! reconciler's stuck-sender sweep before each tick and is responsible for
//! sleeping/waiting between frames.

use embassy_time::{Duration, Instant};

use crate::clock::Millis;
use crate::engine::EffectEngine;
use crate::events::EventReceiver;
use crate::OutputSink;

/// Default target frame rate.
pub const DEFAULT_FPS: u32 = 60;

/// Default frame duration based on target FPS.
pub const DEFAULT_FRAME_DURATION: Duration = Duration::from_millis(1000 / DEFAULT_FPS as u64);

/// Result of a frame tick operation.
#[derive(Debug, Clone, Copy)]
pub struct FrameResult {
    /// The deadline for the next frame.
    pub next_deadline: Instant,
    /// How long to wait until the next frame (may be zero if behind schedule).
    pub sleep_duration: Duration,
}

/// Portable frame scheduler that manages timing without async.
///
/// # Usage
///
/// ```ignore
/// let mut scheduler = FrameScheduler::new(engine, sink, queue.receiver());
///
/// loop {
///     let now = Instant::now();
///     reconciler.sweep(Millis::from_instant(now));
///     let result = scheduler.tick(now);
///
///     // Platform-specific sleep
///     sleep_until(result.next_deadline);
/// }
/// ```
pub struct FrameScheduler<'a, O: OutputSink, const MAX_PIXELS: usize, const EVENT_QUEUE: usize>
{
    output: O,
    engine: EffectEngine<MAX_PIXELS>,
    events: EventReceiver<'a, EVENT_QUEUE>,
    next_frame: Instant,
    frame_duration: Duration,
}

impl<'a, O: OutputSink, const MAX_PIXELS: usize, const EVENT_QUEUE: usize>
    FrameScheduler<'a, O, MAX_PIXELS, EVENT_QUEUE>
{
    /// Create a new frame scheduler.
    ///
    /// Uses `DEFAULT_FRAME_DURATION` (60 FPS) for frame timing.
    pub fn new(
        engine: EffectEngine<MAX_PIXELS>,
        output: O,
        events: EventReceiver<'a, EVENT_QUEUE>,
    ) -> Self {
        Self::with_frame_duration(engine, output, events, DEFAULT_FRAME_DURATION)
    }

    /// Create a new frame scheduler with custom frame duration.
    pub fn with_frame_duration(
        engine: EffectEngine<MAX_PIXELS>,
        output: O,
        events: EventReceiver<'a, EVENT_QUEUE>,
        frame_duration: Duration,
    ) -> Self {
        Self {
            output,
            engine,
            events,
            next_frame: Instant::from_millis(0),
            frame_duration,
        }
    }

    /// Process one frame and return timing information.
    ///
    /// This method:
    /// 1. Applies drift correction if we've fallen too far behind
    /// 2. Dispatches pending canonical events to the engine
    /// 3. Renders the frame and writes every pixel to the output sink
    /// 4. Returns the deadline for the next frame
    ///
    /// The caller is responsible for waiting until `next_deadline` before
    /// calling `tick` again.
    pub fn tick(&mut self, now: Instant) -> FrameResult {
        // Drift correction: if we've fallen too far behind, reset to now.
        // This prevents catch-up bursts after long stalls.
        let max_drift_ms = self.frame_duration.as_millis() * 2;
        if now.as_millis() > self.next_frame.as_millis() + max_drift_ms {
            self.next_frame = now;
        }

        let now_ms = Millis::from_instant(now);
        while let Some(event) = self.events.try_receive() {
            self.engine.trigger(event.trigger, event.state, now_ms);
        }

        let frame = self.engine.render(now_ms);
        for (index, color) in frame.iter().enumerate() {
            self.output.write_pixel(index, *color);
        }
        self.output.flush();

        // Calculate next frame deadline
        self.next_frame += self.frame_duration;

        // Calculate sleep duration (may be zero if we're behind)
        let sleep_duration = if self.next_frame.as_millis() > now.as_millis() {
            Duration::from_millis(self.next_frame.as_millis() - now.as_millis())
        } else {
            Duration::from_millis(0)
        };

        FrameResult {
            next_deadline: self.next_frame,
            sleep_duration,
        }
    }

    /// Get a reference to the engine.
    pub fn engine(&self) -> &EffectEngine<MAX_PIXELS> {
        &self.engine
    }

    /// Get a mutable reference to the engine.
    pub fn engine_mut(&mut self) -> &mut EffectEngine<MAX_PIXELS> {
        &mut self.engine
    }
}
