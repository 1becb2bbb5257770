//! Controller behaviour against `MockHardware`, checking the exact
//! actuator call sequence for each event.

use shaker::app::controller::Controller;
use shaker::app::events::InputEvent;
use shaker::app::ports::ActuatorPort;
use shaker::app::state::SystemState;
use shaker::config::SystemConfig;

use crate::mock_hw::{ActuatorCall, MockHardware};

fn make() -> (Controller, MockHardware) {
    (Controller::new(&SystemConfig::default()), MockHardware::new())
}

#[test]
fn rotation_never_touches_actuators() {
    let (mut ctl, mut hw) = make();
    for _ in 0..20 {
        ctl.handle(InputEvent::RotatedRight, true, &mut hw).unwrap();
    }
    for _ in 0..20 {
        ctl.handle(InputEvent::RotatedLeft, true, &mut hw).unwrap();
    }
    assert!(hw.calls.is_empty());
    assert_eq!(ctl.portions().count(), 2);
}

#[test]
fn portions_saturate_at_limits() {
    let (mut ctl, mut hw) = make();
    for _ in 0..10 {
        ctl.handle(InputEvent::RotatedRight, true, &mut hw).unwrap();
    }
    assert_eq!(ctl.portions().count(), 8);
    assert_eq!(ctl.portions().milk_ml(), 200);
}

#[test]
fn days_saturate_at_zero() {
    let (mut ctl, mut hw) = make();
    ctl.handle(InputEvent::ShortPress, true, &mut hw).unwrap();
    for _ in 0..15 {
        ctl.handle(InputEvent::RotatedLeft, true, &mut hw).unwrap();
    }
    assert_eq!(ctl.days().count(), 0);
}

#[test]
fn dispense_call_sequence() {
    let (mut ctl, mut hw) = make();
    ctl.handle(InputEvent::LongPress, true, &mut hw).unwrap();
    assert!(hw.is_motor_running());
    ctl.handle(InputEvent::ShortPress, true, &mut hw).unwrap();
    assert!(!hw.is_motor_running());
    assert_eq!(hw.calls, vec![ActuatorCall::StartMotor, ActuatorCall::StopMotor]);
    assert_eq!(ctl.screen(), SystemState::LastPrep);
}

#[test]
fn lid_events_when_idle() {
    let (mut ctl, mut hw) = make();
    ctl.handle(InputEvent::ShortPress, true, &mut hw).unwrap();
    ctl.handle(InputEvent::LidOpened, false, &mut hw).unwrap();
    // Only a dispense is interrupted; other screens stay put.
    assert_eq!(ctl.screen(), SystemState::SetDays);
    assert_eq!(hw.calls, vec![ActuatorCall::AllOff]);

    ctl.handle(InputEvent::LidClosed, true, &mut hw).unwrap();
    assert_eq!(hw.calls.len(), 1);
}

#[test]
fn super_long_press_from_preparing() {
    let (mut ctl, mut hw) = make();
    ctl.handle(InputEvent::LongPress, true, &mut hw).unwrap();
    ctl.handle(InputEvent::SuperLongPress, true, &mut hw).unwrap();
    assert!(!hw.is_motor_running());
    assert_eq!(ctl.screen(), SystemState::Time);
    assert_eq!(hw.last_call(), Some(&ActuatorCall::AllOff));
}
