//! Dispensing motor (single enable line, active HIGH).
//!
//! This driver is a dumb actuator; the lid interlock is enforced by the
//! caller through [`ActuatorPort`](crate::app::ports::ActuatorPort).

use embedded_hal::digital::OutputPin;
use log::info;

use crate::error::{ActuatorError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotorState {
    Running,
    Stopped,
}

pub struct Motor<P> {
    pin: P,
    state: MotorState,
}

impl<P: OutputPin> Motor<P> {
    pub fn new(mut pin: P) -> Result<Self> {
        pin.set_low().map_err(|_| ActuatorError::MotorWriteFailed)?;
        Ok(Self {
            pin,
            state: MotorState::Stopped,
        })
    }

    pub fn enable(&mut self) -> Result<()> {
        self.pin.set_high().map_err(|_| ActuatorError::MotorWriteFailed)?;
        if self.state != MotorState::Running {
            info!("motor on");
        }
        self.state = MotorState::Running;
        Ok(())
    }

    pub fn disable(&mut self) -> Result<()> {
        self.pin.set_low().map_err(|_| ActuatorError::MotorWriteFailed)?;
        if self.state != MotorState::Stopped {
            info!("motor off");
        }
        self.state = MotorState::Stopped;
        Ok(())
    }

    pub fn state(&self) -> MotorState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == MotorState::Running
    }
}
