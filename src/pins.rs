//! GPIO pin assignments for the shaker control board.
//!
//! Single source of truth: the firmware entry point builds every pin
//! driver from these numbers rather than hard-coding them.

// ---------------------------------------------------------------------------
// User inputs
// ---------------------------------------------------------------------------

/// Momentary push-button (active-low with external pull-up).
pub const BUTTON_GPIO: i32 = 4;

/// Rotary encoder channel A.
pub const ENCODER_A_GPIO: i32 = 5;
/// Rotary encoder channel B.
pub const ENCODER_B_GPIO: i32 = 6;

/// Reed switch on the lid.  HIGH = magnet present (lid closed).
pub const LID_MAGNET_GPIO: i32 = 7;

// ---------------------------------------------------------------------------
// Outputs
// ---------------------------------------------------------------------------

/// Mains power relay coil driver.  LOW = energised.
pub const POWER_RELAY_GPIO: i32 = 10;

/// Dispensing motor driver enable.  HIGH = running.
pub const MOTOR_GPIO: i32 = 11;
