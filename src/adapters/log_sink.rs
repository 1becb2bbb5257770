//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing every input event to the logger
//! (UART / USB-CDC in production).

use log::info;

use crate::app::events::InputEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`InputEvent`] to the serial console.
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LogEventSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &InputEvent) {
        match event {
            InputEvent::ShortPress => info!("INPUT | button short press"),
            InputEvent::LongPress => info!("INPUT | button long press"),
            InputEvent::SuperLongPress => info!("INPUT | button super-long press"),
            InputEvent::RotatedLeft => info!("INPUT | encoder left"),
            InputEvent::RotatedRight => info!("INPUT | encoder right"),
            InputEvent::LidOpened => info!("LID   | opened"),
            InputEvent::LidClosed => info!("LID   | closed"),
        }
    }
}
