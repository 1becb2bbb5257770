//! Appliance screens / operating modes.
//!
//! The closed set of states the front panel can be in.  Transition rules
//! belong to the control loop; this type only names the states so every
//! consumer matches them exhaustively.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum SystemState {
    /// Clock display (idle).
    #[default]
    Time = 0,
    /// Editing hours.
    SetTime1 = 1,
    /// Editing minutes.
    SetTime2 = 2,
    Info = 3,
    /// Choosing the portion count.
    Portions = 4,
    /// Dispensing in progress.
    Preparing = 5,
    /// Showing the last preparation.
    LastPrep = 6,
    Days = 7,
    /// Editing the day count.
    SetDays = 8,
}

impl SystemState {
    pub fn name(self) -> &'static str {
        match self {
            Self::Time => "Time",
            Self::SetTime1 => "SetTime1",
            Self::SetTime2 => "SetTime2",
            Self::Info => "Info",
            Self::Portions => "Portions",
            Self::Preparing => "Preparing",
            Self::LastPrep => "LastPrep",
            Self::Days => "Days",
            Self::SetDays => "SetDays",
        }
    }
}
