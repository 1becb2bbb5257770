//! Mock hardware for integration tests.
//!
//! Records every actuator call and every emitted event so tests can
//! assert on the full history without touching real GPIO.

use shaker::app::events::InputEvent;
use shaker::app::ports::{ActuatorPort, EventSink};
use shaker::error::Result;

// ── Actuator call record ──────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActuatorCall {
    StartMotor,
    StopMotor,
    AllOff,
}

// ── MockHardware ──────────────────────────────────────────────

pub struct MockHardware {
    pub calls: Vec<ActuatorCall>,
    motor_running: bool,
}

impl MockHardware {
    pub fn new() -> Self {
        Self {
            calls: Vec::new(),
            motor_running: false,
        }
    }

    pub fn last_call(&self) -> Option<&ActuatorCall> {
        self.calls.last()
    }
}

impl Default for MockHardware {
    fn default() -> Self {
        Self::new()
    }
}

impl ActuatorPort for MockHardware {
    fn start_motor(&mut self) -> Result<()> {
        self.motor_running = true;
        self.calls.push(ActuatorCall::StartMotor);
        Ok(())
    }

    fn stop_motor(&mut self) -> Result<()> {
        self.motor_running = false;
        self.calls.push(ActuatorCall::StopMotor);
        Ok(())
    }

    fn is_motor_running(&self) -> bool {
        self.motor_running
    }

    fn all_off(&mut self) -> Result<()> {
        self.motor_running = false;
        self.calls.push(ActuatorCall::AllOff);
        Ok(())
    }
}

// ── RecordingSink ─────────────────────────────────────────────

pub struct RecordingSink {
    pub events: Vec<InputEvent>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }
}

impl Default for RecordingSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: &InputEvent) {
        self.events.push(*event);
    }
}
