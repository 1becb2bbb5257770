//! End-to-end front-panel sessions.
//!
//! Simulated pins feed a real `ControlPanel`; every event it reports is
//! handed to the `Controller`, which drives `MockHardware`.  Time comes
//! from a `ManualClock` stepped in 10 ms ticks like the firmware loop.

use shaker::adapters::sim::{ManualClock, SimPin};
use shaker::app::controller::Controller;
use shaker::app::events::InputEvent;
use shaker::app::panel::ControlPanel;
use shaker::app::ports::Clock;
use shaker::app::state::SystemState;
use shaker::config::SystemConfig;

use crate::mock_hw::{ActuatorCall, MockHardware, RecordingSink};

const TICK_MS: u32 = 10;

struct Bench {
    panel: ControlPanel<SimPin>,
    controller: Controller,
    hw: MockHardware,
    sink: RecordingSink,
    clock: ManualClock,
    button: SimPin,
    enc_a: SimPin,
    enc_b: SimPin,
    lid: SimPin,
}

impl Bench {
    fn new(start_ms: u32) -> Self {
        let config = SystemConfig::default();
        let button = SimPin::new(true);
        let enc_a = SimPin::new(false);
        let enc_b = SimPin::new(false);
        let lid = SimPin::new(true);
        let panel = ControlPanel::from_pins(
            button.clone(),
            enc_a.clone(),
            enc_b.clone(),
            lid.clone(),
            &config,
        )
        .unwrap();

        Self {
            panel,
            controller: Controller::new(&config),
            hw: MockHardware::new(),
            sink: RecordingSink::new(),
            clock: ManualClock::new(start_ms),
            button,
            enc_a,
            enc_b,
            lid,
        }
    }

    /// Poll once at the current time and dispatch whatever came out.
    fn poll(&mut self) {
        let events = self.panel.poll(self.clock.now_ms(), &mut self.sink);
        for event in events {
            self.controller
                .handle(event, self.panel.lid_closed(), &mut self.hw)
                .unwrap();
        }
    }

    fn tick(&mut self) {
        self.clock.advance(TICK_MS);
        self.poll();
    }

    fn run_for(&mut self, ms: u32) {
        for _ in 0..ms / TICK_MS {
            self.tick();
        }
    }

    /// Hold the button for roughly `held_ms`, release it, then wait out the
    /// refractory window.
    fn press(&mut self, held_ms: u32) {
        self.button.set_level(false);
        self.tick();
        self.run_for(held_ms);
        self.button.set_level(true);
        self.tick();
        self.run_for(400);
    }

    /// Move the encoder to `code` after an idle gap long enough for the
    /// rate gate to be open on the next sample.
    fn turn_to(&mut self, code: u8) {
        let (a, b) = match code {
            0 => (false, false),
            1 => (false, true),
            2 => (true, true),
            _ => (true, false),
        };
        self.clock.advance(200);
        self.enc_a.set_level(a);
        self.enc_b.set_level(b);
        self.poll();
    }
}

#[test]
fn dispense_cycle() {
    let mut bench = Bench::new(1_000);

    bench.turn_to(1);
    bench.turn_to(2);
    assert_eq!(bench.controller.portions().count(), 5);

    bench.press(2_000);
    assert_eq!(bench.controller.screen(), SystemState::Preparing);
    assert_eq!(bench.hw.last_call(), Some(&ActuatorCall::StartMotor));

    bench.press(100);
    assert_eq!(bench.controller.screen(), SystemState::LastPrep);
    assert_eq!(
        bench.hw.calls,
        vec![ActuatorCall::StartMotor, ActuatorCall::StopMotor]
    );
    assert_eq!(
        bench.sink.events,
        vec![
            InputEvent::RotatedRight,
            InputEvent::RotatedRight,
            InputEvent::LongPress,
            InputEvent::ShortPress,
        ]
    );
}

#[test]
fn days_are_edited_on_their_own_screen() {
    let mut bench = Bench::new(1_000);

    bench.press(100);
    assert_eq!(bench.controller.screen(), SystemState::SetDays);

    bench.turn_to(3);
    bench.turn_to(2);
    bench.turn_to(1);
    assert_eq!(bench.controller.days().count(), 7);
    assert_eq!(bench.controller.portions().count(), 3);

    bench.press(100);
    assert_eq!(bench.controller.screen(), SystemState::Portions);
}

#[test]
fn opening_the_lid_stops_dispensing() {
    let mut bench = Bench::new(1_000);

    bench.press(1_500);
    assert!(bench.hw.calls.contains(&ActuatorCall::StartMotor));

    bench.lid.set_level(false);
    bench.tick();
    assert!(!bench.panel.lid_closed());
    assert_eq!(bench.hw.last_call(), Some(&ActuatorCall::AllOff));
    assert_eq!(bench.controller.screen(), SystemState::Time);
}

#[test]
fn long_press_with_lid_open_is_refused() {
    let mut bench = Bench::new(1_000);

    bench.lid.set_level(false);
    bench.tick();
    bench.press(1_500);

    assert!(!bench.hw.calls.contains(&ActuatorCall::StartMotor));
    assert_eq!(bench.controller.screen(), SystemState::Time);
    assert_eq!(
        bench.sink.events,
        vec![InputEvent::LidOpened, InputEvent::LongPress]
    );
}

#[test]
fn super_long_press_resets_to_time() {
    let mut bench = Bench::new(1_000);

    bench.press(100);
    assert_eq!(bench.controller.screen(), SystemState::SetDays);

    bench.press(11_000);
    assert_eq!(bench.controller.screen(), SystemState::Time);
    assert_eq!(bench.sink.events.last(), Some(&InputEvent::SuperLongPress));
    assert_eq!(bench.hw.last_call(), Some(&ActuatorCall::AllOff));
}

#[test]
fn bounce_after_release_is_ignored() {
    let mut bench = Bench::new(1_000);

    bench.button.set_level(false);
    bench.tick();
    bench.run_for(100);
    bench.button.set_level(true);
    bench.tick();

    // Contact chatter inside the refractory window.
    for _ in 0..5 {
        bench.button.set_level(false);
        bench.tick();
        bench.button.set_level(true);
        bench.tick();
    }
    bench.run_for(500);

    assert_eq!(bench.sink.events, vec![InputEvent::ShortPress]);
}

#[test]
fn chatter_between_gated_samples_is_lost() {
    let mut bench = Bench::new(1_000);

    // Steady 10 ms polling: a step that lands between gate openings is
    // absorbed into the refreshed code and never classified.
    bench.tick();
    bench.enc_b.set_level(true);
    bench.tick();
    bench.run_for(300);

    assert!(bench.sink.events.is_empty());
    assert_eq!(bench.controller.portions().count(), 3);
}

#[test]
fn session_survives_clock_wrap() {
    let mut bench = Bench::new(u32::MAX - 500);

    bench.press(600);
    assert!(bench.clock.now_ms() < 2_000);
    assert_eq!(bench.sink.events, vec![InputEvent::ShortPress]);

    // The short press moved to SetDays, so the step edits days.
    bench.turn_to(1);
    assert_eq!(bench.controller.days().count(), 11);
}
