//! Shaker appliance firmware library.
//!
//! Exposes the input layer (debounced button, quadrature encoder, lid
//! sensor), the output drivers and the settings counters for integration
//! testing.  All ESP-IDF-specific code is guarded by
//! `#[cfg(target_os = "espidf")]` within each module; everything else is
//! generic over `embedded-hal` pins and runs on the host.

#![deny(unused_must_use)]

pub mod adapters;
pub mod app;
pub mod config;
pub mod diagnostics;
pub mod drivers;
pub mod error;
pub mod pins;
pub mod settings;
