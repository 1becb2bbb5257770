//! Application layer: ports, input events, the polling panel and the
//! appliance state type.

pub mod controller;
pub mod events;
pub mod panel;
pub mod ports;
pub mod state;
