//! Port traits: the boundary between the input/control logic and the
//! outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ ControlPanel / control loop
//! ```
//!
//! Digital lines go through the `embedded-hal` `InputPin` / `OutputPin`
//! traits directly; the ports below cover what those traits don't: time,
//! grouped actuator commands, and where input events are reported.

use crate::error::Result;

use super::events::InputEvent;

// ───────────────────────────────────────────────────────────────
// Clock port
// ───────────────────────────────────────────────────────────────

/// Monotonic millisecond time source.  Wraps at `u32::MAX`.
pub trait Clock {
    fn now_ms(&self) -> u32;
}

// ───────────────────────────────────────────────────────────────
// Actuator port (driven adapter: domain → hardware)
// ───────────────────────────────────────────────────────────────

/// Write-side port: the control loop calls this to command outputs.
pub trait ActuatorPort {
    /// Close the mains relay and start the dispensing motor.
    fn start_motor(&mut self) -> Result<()>;

    fn stop_motor(&mut self) -> Result<()>;

    fn is_motor_running(&self) -> bool;

    /// Stop the motor and open the relay.
    fn all_off(&mut self) -> Result<()>;
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging)
// ───────────────────────────────────────────────────────────────

/// The panel reports every classified [`InputEvent`] through this port.
pub trait EventSink {
    fn emit(&mut self, event: &InputEvent);
}
