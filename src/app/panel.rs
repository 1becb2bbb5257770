//! Control panel. Owns every input component and polls them once per tick.
//!
//! ```text
//!  Button  ──┐
//!  Encoder ──┼──▶ ControlPanel::poll(now) ──▶ EventBatch ──▶ control loop
//!  Lid     ──┘            │
//!                         └──▶ EventSink
//! ```
//!
//! The panel is the consumer the state machines expect: it reads each
//! classification right after `check()` and acknowledges it with
//! `checked()`, so a press or step is reported exactly once.
//!
//! A failed read on one input is logged and skips only that input; whatever
//! the others completed in the same tick is still returned.

use embedded_hal::digital::InputPin;
use log::warn;

use crate::config::SystemConfig;
use crate::drivers::button::{Button, ButtonState};
use crate::drivers::magnet::Magnet;
use crate::drivers::rotary::{RotaryEncoder, RotaryState};
use crate::error::Result;

use super::events::InputEvent;
use super::ports::EventSink;

/// One button event, one rotary event and one lid edge at most.
pub const MAX_EVENTS_PER_POLL: usize = 3;

pub type EventBatch = heapless::Vec<InputEvent, MAX_EVENTS_PER_POLL>;

pub struct ControlPanel<P> {
    button: Button<P>,
    encoder: RotaryEncoder<P, P>,
    lid: Magnet<P>,
    lid_closed: bool,
}

impl<P: InputPin> ControlPanel<P> {
    /// Assemble from already-constructed components; samples the lid once
    /// so the first poll doesn't report a spurious edge.
    pub fn new(
        button: Button<P>,
        encoder: RotaryEncoder<P, P>,
        mut lid: Magnet<P>,
    ) -> Result<Self> {
        let lid_closed = lid.is_closed()?;
        Ok(Self {
            button,
            encoder,
            lid,
            lid_closed,
        })
    }

    /// Bind raw pins using the timings from `config`.
    pub fn from_pins(
        button: P,
        encoder_a: P,
        encoder_b: P,
        lid: P,
        config: &SystemConfig,
    ) -> Result<Self> {
        Self::new(
            Button::with_timing(button, config.button),
            RotaryEncoder::with_timing(encoder_a, encoder_b, config.rotary)?,
            Magnet::new(lid),
        )
    }

    /// Check every input once and report what completed this tick.
    pub fn poll(&mut self, now_ms: u32, sink: &mut impl EventSink) -> EventBatch {
        let mut batch = EventBatch::new();

        match self.button.check(now_ms) {
            Ok(()) => {
                if let Some(event) = InputEvent::from_button(self.button.state()) {
                    self.button.checked();
                    Self::report(&mut batch, event, sink);
                }
            }
            Err(e) => warn!("panel: {}", e),
        }

        match self.encoder.check(now_ms) {
            Ok(_) => {
                if let Some(event) = InputEvent::from_rotary(self.encoder.state()) {
                    self.encoder.checked();
                    Self::report(&mut batch, event, sink);
                }
            }
            Err(e) => warn!("panel: {}", e),
        }

        match self.lid.is_closed() {
            Ok(closed) if closed != self.lid_closed => {
                self.lid_closed = closed;
                let event = if closed {
                    InputEvent::LidClosed
                } else {
                    InputEvent::LidOpened
                };
                Self::report(&mut batch, event, sink);
            }
            Ok(_) => {}
            Err(e) => warn!("panel: {}", e),
        }

        batch
    }

    fn report(batch: &mut EventBatch, event: InputEvent, sink: &mut impl EventSink) {
        sink.emit(&event);
        if batch.push(event).is_err() {
            warn!("panel: event batch full, dropped {:?}", event);
        }
    }

    /// Last sampled lid position.
    pub fn lid_closed(&self) -> bool {
        self.lid_closed
    }

    /// `true` while the button line is held low (press not yet released).
    pub fn button_held(&self) -> bool {
        self.button.state() == ButtonState::Pressed
    }

    pub fn rotary_state(&self) -> RotaryState {
        self.encoder.state()
    }
}
