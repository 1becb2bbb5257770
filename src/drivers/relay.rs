//! Mains power relay (active-low coil driver).
//!
//! The line idles HIGH; pulling it LOW energises the coil.  Construction
//! drives the line HIGH so the appliance powers up with the relay open.

use embedded_hal::digital::OutputPin;
use log::info;

use crate::error::{ActuatorError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelayState {
    Enabled,
    Disabled,
}

pub struct Relay<P> {
    pin: P,
    state: RelayState,
}

impl<P: OutputPin> Relay<P> {
    pub fn new(mut pin: P) -> Result<Self> {
        pin.set_high().map_err(|_| ActuatorError::RelayWriteFailed)?;
        Ok(Self {
            pin,
            state: RelayState::Disabled,
        })
    }

    pub fn enable(&mut self) -> Result<()> {
        self.pin.set_low().map_err(|_| ActuatorError::RelayWriteFailed)?;
        if self.state != RelayState::Enabled {
            info!("power relay closed");
        }
        self.state = RelayState::Enabled;
        Ok(())
    }

    pub fn disable(&mut self) -> Result<()> {
        self.pin.set_high().map_err(|_| ActuatorError::RelayWriteFailed)?;
        if self.state != RelayState::Disabled {
            info!("power relay opened");
        }
        self.state = RelayState::Disabled;
        Ok(())
    }

    pub fn state(&self) -> RelayState {
        self.state
    }

    pub fn is_enabled(&self) -> bool {
        self.state == RelayState::Enabled
    }
}
