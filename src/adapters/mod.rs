//! Adapters: concrete implementations of the app port traits.

pub mod hardware;
pub mod log_sink;
#[cfg(not(target_os = "espidf"))]
pub mod sim;
pub mod time;
