//! System configuration parameters
//!
//! Timing thresholds for the input layer and the limits of the portion and
//! day settings.  The `*_MS` constants are the reference values; the
//! [`SystemConfig`] defaults reproduce them exactly.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Refractory window after a completed press.
pub const NEXT_PRESS_DELAY_MS: u32 = 300;
/// Short/long press boundary (strictly greater than).
pub const LONG_PRESS_DELAY_MS: u32 = 1_000;
/// Long/super-long press boundary (strictly greater than).
pub const SUPER_LONG_PRESS_DELAY_MS: u32 = 10_000;
/// Minimum interval between two accepted encoder samples.
pub const MIN_ROTATION_DELAY_MS: u32 = 100;

/// Milk dispensed per portion (mL).
pub const MILK_PER_PORTION_ML: u16 = 25;

/// Button debounce / classification thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ButtonTiming {
    pub next_press_delay_ms: u32,
    pub long_press_delay_ms: u32,
    pub super_long_press_delay_ms: u32,
}

impl Default for ButtonTiming {
    fn default() -> Self {
        Self {
            next_press_delay_ms: NEXT_PRESS_DELAY_MS,
            long_press_delay_ms: LONG_PRESS_DELAY_MS,
            super_long_press_delay_ms: SUPER_LONG_PRESS_DELAY_MS,
        }
    }
}

/// Rotary encoder sampling gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RotaryTiming {
    pub min_rotation_delay_ms: u32,
}

impl Default for RotaryTiming {
    fn default() -> Self {
        Self {
            min_rotation_delay_ms: MIN_ROTATION_DELAY_MS,
        }
    }
}

/// Inclusive bounds and fallback value of a user-adjustable counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterLimits {
    pub min: u8,
    pub max: u8,
    pub default: u8,
}

impl CounterLimits {
    pub const PORTIONS: Self = Self {
        min: 2,
        max: 8,
        default: 3,
    };
    pub const DAYS: Self = Self {
        min: 0,
        max: 50,
        default: 10,
    };

    pub fn contains(&self, value: u8) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

/// Core system configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemConfig {
    // --- Inputs ---
    pub button: ButtonTiming,
    pub rotary: RotaryTiming,

    // --- Settings ---
    pub portions: CounterLimits,
    pub days: CounterLimits,
    /// Milk dispensed per portion (mL)
    pub milk_per_portion_ml: u16,

    // --- Timing ---
    /// Poll loop interval (milliseconds)
    pub loop_interval_ms: u32,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            button: ButtonTiming::default(),
            rotary: RotaryTiming::default(),
            portions: CounterLimits::PORTIONS,
            days: CounterLimits::DAYS,
            milk_per_portion_ml: MILK_PER_PORTION_ML,
            loop_interval_ms: 10, // 100 Hz
        }
    }
}

impl SystemConfig {
    /// Reject values that would make the input state machines or counters
    /// inconsistent.
    pub fn validate(&self) -> Result<()> {
        let b = &self.button;
        if b.long_press_delay_ms >= b.super_long_press_delay_ms {
            return Err(Error::Config("long press delay must be below super-long"));
        }
        if b.next_press_delay_ms == 0 {
            return Err(Error::Config("next press delay must be non-zero"));
        }
        for limits in [&self.portions, &self.days] {
            if limits.min > limits.max || !limits.contains(limits.default) {
                return Err(Error::Config("counter default outside its limits"));
            }
        }
        if self.loop_interval_ms == 0
            || self.loop_interval_ms >= self.rotary.min_rotation_delay_ms
        {
            return Err(Error::Config("loop interval must be shorter than the rotation gate"));
        }
        Ok(())
    }
}
