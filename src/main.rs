//! Shaker firmware entry point.
//!
//! Single cooperative poll loop:
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │  loop every loop_interval_ms                               │
//! │                                                            │
//! │   MonotonicClock ──▶ ControlPanel::poll(now) ──▶ events    │
//! │                      (button · encoder · lid)      │       │
//! │                                                    ▼       │
//! │                       Controller::handle ◀────────┘        │
//! │                       HardwareAdapter (relay · motor)      │
//! └────────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

use std::time::Duration;

use anyhow::Result;
use esp_idf_hal::gpio::{AnyIOPin, AnyOutputPin, PinDriver, Pull};
use log::{debug, info, warn};

use shaker::adapters::hardware::HardwareAdapter;
use shaker::adapters::log_sink::LogEventSink;
use shaker::adapters::time::MonotonicClock;
use shaker::app::controller::Controller;
use shaker::app::panel::ControlPanel;
use shaker::app::ports::{ActuatorPort, Clock};
use shaker::config::SystemConfig;
use shaker::diagnostics::LoopRateCounter;
use shaker::drivers::motor::Motor;
use shaker::drivers::relay::Relay;
use shaker::pins;

// ── Main ──────────────────────────────────────────────────────

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("Shaker v{}", env!("CARGO_PKG_VERSION"));

    let config = SystemConfig::default();
    config.validate()?;

    // ── 2. GPIO ───────────────────────────────────────────────
    // SAFETY: every number in `pins` is claimed exactly once, here, before
    // any other code touches the GPIO matrix.
    let (button_pin, enc_a_pin, enc_b_pin, lid_pin, relay_pin, motor_pin) = unsafe {
        (
            AnyIOPin::new(pins::BUTTON_GPIO),
            AnyIOPin::new(pins::ENCODER_A_GPIO),
            AnyIOPin::new(pins::ENCODER_B_GPIO),
            AnyIOPin::new(pins::LID_MAGNET_GPIO),
            AnyOutputPin::new(pins::POWER_RELAY_GPIO),
            AnyOutputPin::new(pins::MOTOR_GPIO),
        )
    };

    // Button has an external pull-up; encoder and reed switch use the
    // internal ones.
    let button = PinDriver::input(button_pin)?;
    let mut enc_a = PinDriver::input(enc_a_pin)?;
    enc_a.set_pull(Pull::Up)?;
    let mut enc_b = PinDriver::input(enc_b_pin)?;
    enc_b.set_pull(Pull::Up)?;
    let mut lid = PinDriver::input(lid_pin)?;
    lid.set_pull(Pull::Up)?;

    let mut panel = ControlPanel::from_pins(button, enc_a, enc_b, lid, &config)?;
    let mut hw = HardwareAdapter::new(
        Relay::new(PinDriver::output(relay_pin)?)?,
        Motor::new(PinDriver::output(motor_pin)?)?,
    );

    // ── 3. State ──────────────────────────────────────────────
    let clock = MonotonicClock::new();
    let mut sink = LogEventSink::new();
    let mut controller = Controller::new(&config);
    let mut loop_rate = LoopRateCounter::new(clock.now_ms());

    info!(
        "Ready: screen={} portions={} days={} lid={}",
        controller.screen().name(),
        controller.portions().count(),
        controller.days().count(),
        if panel.lid_closed() { "closed" } else { "open" },
    );

    // ── 4. Poll loop ──────────────────────────────────────────
    let tick = Duration::from_millis(config.loop_interval_ms.into());

    loop {
        let now = clock.now_ms();

        for event in panel.poll(now, &mut sink) {
            if let Err(e) = controller.handle(event, panel.lid_closed(), &mut hw) {
                warn!("Handling {:?} failed: {}", event, e);
                hw.all_off().unwrap_or_else(|e| warn!("all_off: {}", e));
            }
        }

        if loop_rate.add_frame(now) {
            debug!("Loop rate: {} Hz", loop_rate.count());
        }

        std::thread::sleep(tick);
    }
}
