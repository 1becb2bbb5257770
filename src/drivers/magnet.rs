//! Lid reed switch.  HIGH = magnet present = lid closed.

use embedded_hal::digital::InputPin;

use crate::error::{Result, SensorError};

pub struct Magnet<P> {
    pin: P,
}

impl<P: InputPin> Magnet<P> {
    pub fn new(pin: P) -> Self {
        Self { pin }
    }

    pub fn is_closed(&mut self) -> Result<bool> {
        self.pin
            .is_high()
            .map_err(|_| SensorError::LidReadFailed.into())
    }
}
