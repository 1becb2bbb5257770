//! Hardware adapter: bridges the output drivers to [`ActuatorPort`].
//!
//! Owns the power relay and the dispensing motor.  Starting the motor
//! also closes the relay, and opening the relay stops the motor first,
//! so the motor never sees a half-powered state.

use embedded_hal::digital::OutputPin;

use crate::app::ports::ActuatorPort;
use crate::drivers::motor::Motor;
use crate::drivers::relay::Relay;
use crate::error::Result;

/// Concrete adapter that combines all outputs behind the port trait.
pub struct HardwareAdapter<R, M> {
    relay: Relay<R>,
    motor: Motor<M>,
}

impl<R: OutputPin, M: OutputPin> HardwareAdapter<R, M> {
    pub fn new(relay: Relay<R>, motor: Motor<M>) -> Self {
        Self { relay, motor }
    }

    pub fn relay(&self) -> &Relay<R> {
        &self.relay
    }

    pub fn motor(&self) -> &Motor<M> {
        &self.motor
    }
}

impl<R: OutputPin, M: OutputPin> ActuatorPort for HardwareAdapter<R, M> {
    fn start_motor(&mut self) -> Result<()> {
        self.relay.enable()?;
        self.motor.enable()
    }

    fn stop_motor(&mut self) -> Result<()> {
        self.motor.disable()
    }

    fn is_motor_running(&self) -> bool {
        self.motor.is_running()
    }

    fn all_off(&mut self) -> Result<()> {
        self.motor.disable()?;
        self.relay.disable()
    }
}
