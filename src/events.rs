//! Canonical button events and the queue that carries them.
//!
//! The queue is a fixed-size deque guarded by critical sections, so the
//! radio receive callback may push events from interrupt context while the
//! frame loop drains them. Nothing blocks; a full queue rejects the event.

use core::cell::RefCell;

use critical_section::Mutex;
use heapless::Deque;

const STATE_PRESSED: u8 = 1;
const STATE_HOLD: u8 = 2;
const STATE_RELEASED: u8 = 3;

/// Button state as reported by a transmitter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum ButtonState {
    Pressed = STATE_PRESSED,
    Hold = STATE_HOLD,
    Released = STATE_RELEASED,
}

impl ButtonState {
    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            STATE_PRESSED => Self::Pressed,
            STATE_HOLD => Self::Hold,
            STATE_RELEASED => Self::Released,
            _ => return None,
        })
    }

    pub const fn as_raw(self) -> u8 {
        self as u8
    }
}

/// A canonical event addressed to one effect slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ButtonEvent {
    /// Index of the effect slot this event controls.
    pub trigger: u8,
    pub state: ButtonState,
}

/// Bounded, interrupt-safe event queue.
///
/// Backed by a fixed-size `heapless::Deque` behind a critical-section
/// mutex. The reconciler pushes from the receive callback, the frame loop
/// drains through a [`EventReceiver`].
pub struct EventQueue<const SIZE: usize> {
    inner: Mutex<RefCell<Deque<ButtonEvent, SIZE>>>,
}

impl<const SIZE: usize> EventQueue<SIZE> {
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(Deque::new())),
        }
    }

    /// Get a sender handle for this queue.
    pub const fn sender(&self) -> EventSender<'_, SIZE> {
        EventSender { queue: self }
    }

    /// Get a receiver handle for this queue.
    pub const fn receiver(&self) -> EventReceiver<'_, SIZE> {
        EventReceiver { queue: self }
    }

    fn try_send(&self, event: ButtonEvent) -> Result<(), ButtonEvent> {
        critical_section::with(|cs| {
            self.inner.borrow(cs).borrow_mut().push_back(event)
        })
    }

    fn try_receive(&self) -> Option<ButtonEvent> {
        critical_section::with(|cs| self.inner.borrow(cs).borrow_mut().pop_front())
    }
}

impl<const SIZE: usize> Default for EventQueue<SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

/// A sender handle for an [`EventQueue`].
#[derive(Clone, Copy)]
pub struct EventSender<'a, const SIZE: usize> {
    queue: &'a EventQueue<SIZE>,
}

impl<const SIZE: usize> EventSender<'_, SIZE> {
    /// Try to push an event.
    ///
    /// Returns the rejected event if the queue is full.
    pub fn try_send(&self, event: ButtonEvent) -> Result<(), ButtonEvent> {
        self.queue.try_send(event)
    }
}

/// A receiver handle for an [`EventQueue`].
#[derive(Clone, Copy)]
pub struct EventReceiver<'a, const SIZE: usize> {
    queue: &'a EventQueue<SIZE>,
}

impl<const SIZE: usize> EventReceiver<'_, SIZE> {
    /// Pop the oldest pending event, if any.
    pub fn try_receive(&self) -> Option<ButtonEvent> {
        self.queue.try_receive()
    }
}
