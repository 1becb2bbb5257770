//! Input and actuator drivers over `embedded-hal` digital pins.

pub mod button;
pub mod magnet;
pub mod motor;
pub mod relay;
pub mod rotary;
