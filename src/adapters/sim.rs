//! Host-side simulation of GPIO lines and the millisecond clock.
//!
//! [`SimPin`] is a shared logic level: clones observe and drive the same
//! line, so a test keeps one handle and gives the other to a driver.
//! It implements both the `embedded-hal` input and output traits.

use core::cell::Cell;
use core::convert::Infallible;
use std::rc::Rc;

use embedded_hal::digital::{ErrorType, InputPin, OutputPin};

use crate::app::ports::Clock;

#[derive(Debug, Clone, Default)]
pub struct SimPin {
    level: Rc<Cell<bool>>,
}

impl SimPin {
    /// New line at the given level (`true` = HIGH).
    pub fn new(high: bool) -> Self {
        Self {
            level: Rc::new(Cell::new(high)),
        }
    }

    pub fn set_level(&self, high: bool) {
        self.level.set(high);
    }

    pub fn level(&self) -> bool {
        self.level.get()
    }
}

impl ErrorType for SimPin {
    type Error = Infallible;
}

impl InputPin for SimPin {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Ok(self.level.get())
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.level.get())
    }
}

impl OutputPin for SimPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.level.set(false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.level.set(true);
        Ok(())
    }
}

/// Hand-driven clock for deterministic tests and simulation.
#[derive(Debug, Default)]
pub struct ManualClock {
    now_ms: Cell<u32>,
}

impl ManualClock {
    pub fn new(start_ms: u32) -> Self {
        Self {
            now_ms: Cell::new(start_ms),
        }
    }

    /// Advance (wrapping) and return the new time.
    pub fn advance(&self, ms: u32) -> u32 {
        let next = self.now_ms.get().wrapping_add(ms);
        self.now_ms.set(next);
        next
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u32 {
        self.now_ms.get()
    }
}
