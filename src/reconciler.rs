//! Inbound report reconciliation.
//!
//! Turns the duplicate-prone, lossy stream of raw button reports into a
//! clean press/hold/release sequence per sender. Lost press packets are
//! synthesized from the first hold report; lost releases are recovered by
//! the periodic stuck sweep. Canonical events go into the event queue for
//! the frame loop to drain.

use embassy_time::Duration;
use heapless::Vec;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::clock::Millis;
use crate::events::{ButtonEvent, ButtonState, EventSender};
use crate::packet::{Report, SenderAddr};

/// Minimum time between accepted identical-state reports from one sender.
pub const DEDUP_WINDOW: Duration = Duration::from_millis(50);

/// Maximum silence after a press or hold before the sender is presumed
/// released.
pub const STUCK_TIMEOUT: Duration = Duration::from_millis(200);

/// Upper bound on known senders.
pub const MAX_SENDERS: usize = 8;

/// Configuration for the reconciler.
#[derive(Clone, Copy)]
pub struct ReconcilerConfig {
    pub dedup_window: Duration,
    pub stuck_timeout: Duration,
}

impl Default for ReconcilerConfig {
    fn default() -> Self {
        Self {
            dedup_window: DEDUP_WINDOW,
            stuck_timeout: STUCK_TIMEOUT,
        }
    }
}

/// Diagnostic counters for the inbound link.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LinkStats {
    /// Packets with a bad length or preamble
    pub malformed: u32,
    /// Valid reports from senders not in the configured table
    pub unknown_sender: u32,
    /// Events lost because the outbound queue was full
    pub dropped_events: u32,
}

#[derive(Clone, Copy)]
struct SenderRecord {
    last_received: Millis,
    last_state: ButtonState,
}

/// Per-sender button state tracker.
///
/// The sender table is fixed at construction; its order defines the
/// trigger-id binding. Records update as one short, non-blocking unit, so
/// `handle_packet` is safe to call from the radio receive callback while
/// the frame loop runs `sweep`.
pub struct Reconciler<'a, const QUEUE: usize> {
    senders: Vec<SenderAddr, MAX_SENDERS>,
    records: Vec<SenderRecord, MAX_SENDERS>,
    dedup_window: u32,
    stuck_timeout: u32,
    events: EventSender<'a, QUEUE>,
    stats: LinkStats,
}

impl<'a, const QUEUE: usize> Reconciler<'a, QUEUE> {
    /// Create a reconciler for the given ordered sender identities.
    ///
    /// Senders beyond [`MAX_SENDERS`] are ignored. Every sender starts out
    /// released.
    #[allow(clippy::cast_possible_truncation)]
    pub fn new(
        senders: &[SenderAddr],
        events: EventSender<'a, QUEUE>,
        config: &ReconcilerConfig,
    ) -> Self {
        let mut table: Vec<SenderAddr, MAX_SENDERS> = Vec::new();
        let mut records: Vec<SenderRecord, MAX_SENDERS> = Vec::new();
        for addr in senders.iter().take(MAX_SENDERS) {
            let _ = table.push(*addr);
            let _ = records.push(SenderRecord {
                last_received: Millis::ZERO,
                last_state: ButtonState::Released,
            });
        }
        Self {
            senders: table,
            records,
            dedup_window: config.dedup_window.as_millis() as u32,
            stuck_timeout: config.stuck_timeout.as_millis() as u32,
            events,
            stats: LinkStats::default(),
        }
    }

    /// Handle a raw packet from the transport.
    pub fn handle_packet(&mut self, src: &SenderAddr, data: &[u8], now: Millis) {
        let Some(report) = Report::parse(data) else {
            self.stats.malformed = self.stats.malformed.wrapping_add(1);
            #[cfg(feature = "esp32-log")]
            println!("rx: malformed packet ({} bytes)", data.len());
            return;
        };
        self.handle_report(src, report.state, now);
    }

    /// Reconcile one decoded report.
    #[allow(clippy::cast_possible_truncation)]
    pub fn handle_report(&mut self, src: &SenderAddr, state: ButtonState, now: Millis) {
        let Some(trigger) = self.senders.iter().position(|addr| addr == src) else {
            self.stats.unknown_sender = self.stats.unknown_sender.wrapping_add(1);
            #[cfg(feature = "esp32-log")]
            println!("rx: unknown sender");
            return;
        };

        let record = &mut self.records[trigger];

        // Deduplicate repeated reports, except holds: those double as
        // liveness heartbeats and are always accepted.
        let accepted = state != record.last_state
            || now.since(record.last_received) > self.dedup_window
            || state == ButtonState::Hold;
        if !accepted {
            // Suppressed duplicates do not refresh the timestamp; the
            // dedup window is measured from the last accepted report.
            return;
        }

        // A hold from a released sender means the press packet was lost.
        if state == ButtonState::Hold && record.last_state == ButtonState::Released {
            if self
                .events
                .try_send(ButtonEvent {
                    trigger: trigger as u8,
                    state: ButtonState::Pressed,
                })
                .is_err()
            {
                self.stats.dropped_events = self.stats.dropped_events.wrapping_add(1);
            }
        }

        record.last_received = now;
        record.last_state = state;

        if self
            .events
            .try_send(ButtonEvent {
                trigger: trigger as u8,
                state,
            })
            .is_err()
        {
            self.stats.dropped_events = self.stats.dropped_events.wrapping_add(1);
        }
    }

    /// Force-release senders that went silent while pressed or held.
    ///
    /// Call once per frame, before rendering. This is the sole recovery
    /// path for a lost release packet on a one-way link.
    #[allow(clippy::cast_possible_truncation)]
    pub fn sweep(&mut self, now: Millis) {
        for (trigger, record) in self.records.iter_mut().enumerate() {
            let engaged = matches!(
                record.last_state,
                ButtonState::Pressed | ButtonState::Hold
            );
            if engaged && now.since(record.last_received) > self.stuck_timeout {
                record.last_state = ButtonState::Released;
                if self
                    .events
                    .try_send(ButtonEvent {
                        trigger: trigger as u8,
                        state: ButtonState::Released,
                    })
                    .is_err()
                {
                    self.stats.dropped_events =
                        self.stats.dropped_events.wrapping_add(1);
                }
            }
        }
    }

    /// Diagnostic counters accumulated so far.
    pub const fn stats(&self) -> LinkStats {
        self.stats
    }

    pub fn sender_count(&self) -> usize {
        self.senders.len()
    }
}
