//! Outbound input events.
//!
//! The [`ControlPanel`](super::panel::ControlPanel) turns completed
//! button/encoder classifications and lid edges into these and emits them
//! through the [`EventSink`](super::ports::EventSink) port.

use crate::drivers::button::ButtonState;
use crate::drivers::rotary::RotaryState;

/// Structured user/sensor intents consumed by the control loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    ShortPress,
    LongPress,
    SuperLongPress,
    RotatedLeft,
    RotatedRight,
    LidOpened,
    LidClosed,
}

impl InputEvent {
    /// Event for a completed button classification, if any.
    pub fn from_button(state: ButtonState) -> Option<Self> {
        match state {
            ButtonState::ShortPress => Some(Self::ShortPress),
            ButtonState::LongPress => Some(Self::LongPress),
            ButtonState::SuperLongPress => Some(Self::SuperLongPress),
            ButtonState::NotPressed | ButtonState::Pressed => None,
        }
    }

    /// Event for a completed rotation, if any.
    pub fn from_rotary(state: RotaryState) -> Option<Self> {
        match state {
            RotaryState::RotatedLeft => Some(Self::RotatedLeft),
            RotaryState::RotatedRight => Some(Self::RotatedRight),
            RotaryState::NotRotated => None,
        }
    }
}
