//! Polled push-button driver with short, long, and super-long press detection.
//!
//! ## Hardware
//!
//! Active-low momentary switch with external pull-up.  No interrupt is
//! used: [`Button::check`] samples the line once per control-loop tick
//! and runs the debounce + classification state machine.
//!
//! ## Classification
//!
//! | Gesture          | Held for (measured at release) | State              |
//! |------------------|--------------------------------|--------------------|
//! | Short press      | <= 1 s                         | `ShortPress`       |
//! | Long press       | > 1 s, <= 10 s                 | `LongPress`        |
//! | Super-long press | > 10 s                         | `SuperLongPress`   |
//!
//! After every release the button is deaf for 300 ms: any `check()`
//! inside that window forces `NotPressed`, even if the line is low again.
//! A classification therefore survives only until the next `check()`
//! inside the window, so the owner reads it right after `check()` and
//! acknowledges it with [`Button::checked`].
//!
//! The hold duration is measured from the first tick the line was seen
//! low, not from the most recent one.
//!
//! Until the first press has been released there is no refractory anchor,
//! so the button is live from the first `check()` and a press held across
//! the `u32` clock wrap is still timed correctly.  Durations stay exact as
//! long as the real time between two samples is under half the counter
//! range (~24.8 days).

use embedded_hal::digital::InputPin;
use log::debug;

use crate::config::ButtonTiming;
use crate::error::{Result, SensorError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonState {
    NotPressed,
    /// Line currently held low.
    Pressed,
    ShortPress,
    LongPress,
    SuperLongPress,
}

impl ButtonState {
    /// `true` for the three release classifications.
    pub fn is_classified(self) -> bool {
        matches!(
            self,
            Self::ShortPress | Self::LongPress | Self::SuperLongPress
        )
    }
}

pub struct Button<P> {
    pin: P,
    timing: ButtonTiming,
    state: ButtonState,
    press_start_ms: u32,
    /// Time of the last release; `None` until the first press completes.
    prev_press_ms: Option<u32>,
}

impl<P: InputPin> Button<P> {
    pub fn new(pin: P) -> Self {
        Self::with_timing(pin, ButtonTiming::default())
    }

    pub fn with_timing(pin: P, timing: ButtonTiming) -> Self {
        Self {
            pin,
            timing,
            state: ButtonState::NotPressed,
            press_start_ms: 0,
            prev_press_ms: None,
        }
    }

    /// Call from the main loop at each tick.
    /// `now_ms` is the current monotonic time in milliseconds; all
    /// comparisons are wrap-safe.
    pub fn check(&mut self, now_ms: u32) -> Result<()> {
        let refractory = self
            .prev_press_ms
            .is_some_and(|prev| now_ms.wrapping_sub(prev) < self.timing.next_press_delay_ms);
        if refractory {
            self.state = ButtonState::NotPressed;
            return Ok(());
        }

        let active = self
            .pin
            .is_low()
            .map_err(|_| SensorError::ButtonReadFailed)?;

        if active {
            if self.state != ButtonState::Pressed {
                self.press_start_ms = now_ms;
                self.state = ButtonState::Pressed;
            }
        } else if self.state == ButtonState::Pressed {
            self.prev_press_ms = Some(now_ms);
            let held_ms = now_ms.wrapping_sub(self.press_start_ms);
            self.state = self.classify(held_ms);
            debug!("button released after {} ms: {:?}", held_ms, self.state);
        }

        Ok(())
    }

    fn classify(&self, held_ms: u32) -> ButtonState {
        if held_ms > self.timing.super_long_press_delay_ms {
            ButtonState::SuperLongPress
        } else if held_ms > self.timing.long_press_delay_ms {
            ButtonState::LongPress
        } else {
            ButtonState::ShortPress
        }
    }

    /// Acknowledge a consumed classification.
    pub fn checked(&mut self) {
        self.state = ButtonState::NotPressed;
    }

    pub fn state(&self) -> ButtonState {
        self.state
    }
}
