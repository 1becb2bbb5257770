//! User-adjustable settings: portion count and day count.
//!
//! Both are clamped counters.  Stepping past a limit is a silent no-op
//! (the encoder simply stops having an effect), and an out-of-range
//! starting value falls back to the default.

use crate::config::{CounterLimits, SystemConfig};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundedCounter {
    count: u8,
    limits: CounterLimits,
}

impl BoundedCounter {
    pub fn new(initial: u8, limits: CounterLimits) -> Self {
        let count = if limits.contains(initial) {
            initial
        } else {
            limits.default
        };
        Self { count, limits }
    }

    /// Step up by one.  Returns `false` at the upper limit.
    pub fn increment(&mut self) -> bool {
        self.step(self.count.checked_add(1))
    }

    /// Step down by one.  Returns `false` at the lower limit.
    pub fn decrement(&mut self) -> bool {
        self.step(self.count.checked_sub(1))
    }

    fn step(&mut self, next: Option<u8>) -> bool {
        match next {
            Some(n) if self.limits.contains(n) => {
                self.count = n;
                true
            }
            _ => false,
        }
    }

    pub fn count(&self) -> u8 {
        self.count
    }
}

/// Portions per preparation (2–8, default 3).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Portions {
    counter: BoundedCounter,
    milk_per_portion_ml: u16,
}

impl Portions {
    pub fn new(initial: u8, config: &SystemConfig) -> Self {
        Self {
            counter: BoundedCounter::new(initial, config.portions),
            milk_per_portion_ml: config.milk_per_portion_ml,
        }
    }

    pub fn increment(&mut self) -> bool {
        self.counter.increment()
    }

    pub fn decrement(&mut self) -> bool {
        self.counter.decrement()
    }

    pub fn count(&self) -> u8 {
        self.counter.count()
    }

    /// Milk to dispense for the current portion count (mL).
    pub fn milk_ml(&self) -> u16 {
        self.counter.count() as u16 * self.milk_per_portion_ml
    }
}

/// Number of days the schedule runs for (0–50, default 10).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Days {
    counter: BoundedCounter,
}

impl Days {
    pub fn new(initial: u8, config: &SystemConfig) -> Self {
        Self {
            counter: BoundedCounter::new(initial, config.days),
        }
    }

    pub fn increment(&mut self) -> bool {
        self.counter.increment()
    }

    pub fn decrement(&mut self) -> bool {
        self.counter.decrement()
    }

    pub fn count(&self) -> u8 {
        self.counter.count()
    }
}
