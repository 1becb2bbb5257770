//! Front-panel controller.
//!
//! Consumes [`InputEvent`]s and applies them to the settings, the current
//! screen and the actuators:
//!
//! | Event            | Effect                                              |
//! |------------------|-----------------------------------------------------|
//! | Rotate L/R       | edit days on `SetDays`, portions everywhere else    |
//! | Short press      | stop dispensing, or toggle `Portions` ↔ `SetDays`   |
//! | Long press       | start dispensing (lid must be closed)               |
//! | Super-long press | everything off, back to `Time`                      |
//! | Lid opened       | everything off (interlock)                          |
//!
//! The clock/time-setting screens are not driven from here.

use log::{info, warn};

use crate::config::SystemConfig;
use crate::error::Result;
use crate::settings::{Days, Portions};

use super::events::InputEvent;
use super::ports::ActuatorPort;
use super::state::SystemState;

pub struct Controller {
    screen: SystemState,
    portions: Portions,
    days: Days,
}

impl Controller {
    pub fn new(config: &SystemConfig) -> Self {
        Self {
            screen: SystemState::default(),
            portions: Portions::new(config.portions.default, config),
            days: Days::new(config.days.default, config),
        }
    }

    /// Apply one event.  `lid_closed` is the panel's current lid reading.
    pub fn handle(
        &mut self,
        event: InputEvent,
        lid_closed: bool,
        hw: &mut impl ActuatorPort,
    ) -> Result<()> {
        let before = self.screen;

        match event {
            InputEvent::RotatedRight | InputEvent::RotatedLeft => {
                self.adjust(event == InputEvent::RotatedRight);
            }

            InputEvent::ShortPress => {
                self.screen = match self.screen {
                    SystemState::Preparing => {
                        hw.stop_motor()?;
                        SystemState::LastPrep
                    }
                    SystemState::SetDays => SystemState::Portions,
                    _ => SystemState::SetDays,
                };
            }

            InputEvent::LongPress => {
                if lid_closed {
                    hw.start_motor()?;
                    self.screen = SystemState::Preparing;
                    info!(
                        "Dispensing {} portions ({} mL)",
                        self.portions.count(),
                        self.portions.milk_ml()
                    );
                } else {
                    warn!("Lid open, refusing to start motor");
                }
            }

            InputEvent::SuperLongPress => {
                hw.all_off()?;
                self.screen = SystemState::Time;
            }

            InputEvent::LidOpened => {
                if hw.is_motor_running() {
                    warn!("Lid opened while dispensing, stopping");
                }
                hw.all_off()?;
                if self.screen == SystemState::Preparing {
                    self.screen = SystemState::Time;
                }
            }

            InputEvent::LidClosed => {}
        }

        if self.screen != before {
            info!("SCREEN | {} -> {}", before.name(), self.screen.name());
        }
        Ok(())
    }

    fn adjust(&mut self, up: bool) {
        if self.screen == SystemState::SetDays {
            let changed = if up {
                self.days.increment()
            } else {
                self.days.decrement()
            };
            if changed {
                info!("Days: {}", self.days.count());
            }
        } else {
            let changed = if up {
                self.portions.increment()
            } else {
                self.portions.decrement()
            };
            if changed {
                info!(
                    "Portions: {} ({} mL)",
                    self.portions.count(),
                    self.portions.milk_ml()
                );
            }
        }
    }

    pub fn screen(&self) -> SystemState {
        self.screen
    }

    pub fn portions(&self) -> &Portions {
        &self.portions
    }

    pub fn days(&self) -> &Days {
        &self.days
    }
}
