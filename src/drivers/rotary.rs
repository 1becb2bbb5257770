//! Polled quadrature rotary encoder.
//!
//! The two channels are sampled every tick and folded into a 2-bit code:
//!
//! ```text
//!   raw  = (A << 1) | B
//!   code = raw ^ A
//!
//!   A B │ raw │ code
//!   ────┼─────┼─────
//!   0 0 │  0  │  0
//!   0 1 │  1  │  1
//!   1 1 │  3  │  2
//!   1 0 │  2  │  3
//! ```
//!
//! Adjacent detent positions then differ by exactly one unit modulo 4,
//! so direction falls out of `(prev ± 1) % 4` without a lookup table.
//!
//! Classification is rate-limited to one decision per 100 ms to ride out
//! contact chatter, but the previous code is refreshed on *every* tick so
//! the next comparison is always against the immediately preceding sample.

use embedded_hal::digital::InputPin;
use log::debug;

use crate::config::RotaryTiming;
use crate::error::{Result, SensorError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotaryState {
    NotRotated,
    RotatedRight,
    RotatedLeft,
}

/// Fold the two channel levels into the Gray-decoded 2-bit code.
pub const fn quadrature_code(a: bool, b: bool) -> u8 {
    let a = a as u8;
    let raw = (a << 1) | b as u8;
    raw ^ a
}

pub struct RotaryEncoder<A, B> {
    pin_a: A,
    pin_b: B,
    timing: RotaryTiming,
    state: RotaryState,
    previous_time_ms: u32,
    previous_code: u8,
}

impl<A: InputPin, B: InputPin> RotaryEncoder<A, B> {
    /// Bind both channels and capture the resting code.
    pub fn new(pin_a: A, pin_b: B) -> Result<Self> {
        Self::with_timing(pin_a, pin_b, RotaryTiming::default())
    }

    pub fn with_timing(pin_a: A, pin_b: B, timing: RotaryTiming) -> Result<Self> {
        let mut encoder = Self {
            pin_a,
            pin_b,
            timing,
            state: RotaryState::NotRotated,
            previous_time_ms: 0,
            previous_code: 0,
        };
        encoder.previous_code = encoder.read_code()?;
        Ok(encoder)
    }

    fn read_code(&mut self) -> Result<u8> {
        let a = self
            .pin_a
            .is_high()
            .map_err(|_| SensorError::EncoderReadFailed)?;
        let b = self
            .pin_b
            .is_high()
            .map_err(|_| SensorError::EncoderReadFailed)?;
        Ok(quadrature_code(a, b))
    }

    /// Sample both channels.  Returns `true` when the rate gate was open and
    /// the sample was compared, `false` when it was only recorded.
    ///
    /// A code that is neither one step forward nor one step back (no
    /// movement, or a skipped position) leaves the state untouched.
    pub fn check(&mut self, now_ms: u32) -> Result<bool> {
        let current = self.read_code()?;

        if now_ms.wrapping_sub(self.previous_time_ms) > self.timing.min_rotation_delay_ms {
            if current == (self.previous_code + 1) % 4 {
                self.state = RotaryState::RotatedRight;
                debug!("encoder: {} -> {} right", self.previous_code, current);
            } else if current == (self.previous_code + 3) % 4 {
                self.state = RotaryState::RotatedLeft;
                debug!("encoder: {} -> {} left", self.previous_code, current);
            }
            self.previous_time_ms = now_ms;
            self.previous_code = current;
            Ok(true)
        } else {
            self.previous_code = current;
            Ok(false)
        }
    }

    /// Acknowledge a consumed rotation.
    pub fn checked(&mut self) {
        self.state = RotaryState::NotRotated;
    }

    pub fn state(&self) -> RotaryState {
        self.state
    }

    /// Last decoded code (0–3).
    pub fn previous_code(&self) -> u8 {
        self.previous_code
    }
}
