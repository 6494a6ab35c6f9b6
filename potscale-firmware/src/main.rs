//! potscale - Calibrated Potentiometer Readout
//!
//! Firmware for a Raspberry Pi Pico with a potentiometer on ADC0 and an
//! SSD1306 OLED on I2C0. After a one-time calibration of the pot's
//! minimum, readings are shown raw and rescaled to 100..0 on the OLED and
//! the UART console until the operator presses Ctrl-C.

#![no_std]
#![no_main]

mod board;

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::adc::{self, Adc, Channel};
use embassy_rp::gpio::Pull;
use embassy_time::Delay;
use {defmt_rtt as _, panic_probe as _};

use potscale_core::supervisor::report_fault;
use potscale_core::traits::{Console, PixelColor, TextDisplay};
use potscale_core::{run, supervise, Board, Exit, RunConfig, RunError};
use potscale_drivers::console::SerialConsole;
use potscale_drivers::display::Oled;
use potscale_drivers::sensor::Potentiometer;
use potscale_hal_rp2040::adc::RpAdc;
use potscale_hal_rp2040::{bus, uart};

const CONFIG: RunConfig = RunConfig::DEFAULT;

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let p = embassy_rp::init(Default::default());
    info!("potscale starting");

    let adc = Adc::new_blocking(p.ADC, adc::Config::default());
    let channel = Channel::new_pin(p.PIN_26, Pull::None);
    let mut pot = Potentiometer::new(RpAdc::new(adc, channel));

    let mut console = SerialConsole::new(uart::open_console(
        p.UART0,
        p.PIN_16,
        p.PIN_17,
        board::CONSOLE_BAUD,
    ));
    info!("console on UART0 at {} baud", board::CONSOLE_BAUD);

    let i2c = match bus::open_display_bus(
        p.I2C0,
        p.PIN_1,
        p.PIN_0,
        board::DISPLAY_BUS,
        board::DISPLAY_ADDRESS,
    ) {
        Ok(i2c) => i2c,
        Err(e) => halt(&mut console, RunError::Bus(e)),
    };

    let mut oled = Oled::new(i2c, board::DISPLAY_ADDRESS);
    if let Err(e) = oled.init() {
        halt(&mut console, e.into());
    }
    info!("display ready at {=u8:#x}", board::DISPLAY_ADDRESS);

    debug!(
        "calibration: {} samples, {} ms apart; cadence {} ms",
        CONFIG.calibration.sample_count,
        CONFIG.calibration.sample_delay_ms,
        CONFIG.acquisition.cadence_ms
    );

    let mut delay = Delay;
    let outcome = run(
        Board {
            sensor: &mut pot,
            display: &mut oled,
            operator: &mut console,
            delay: &mut delay,
        },
        &CONFIG,
    );

    match supervise(outcome) {
        Exit::Stopped => {
            info!("stopped by operator");
            let blanked = oled
                .clear(PixelColor::Off)
                .and_then(|_| oled.present())
                .is_ok();
            if !blanked || oled.set_display_on(false).is_err() {
                warn!("display could not be blanked");
            }

            loop {
                cortex_m::asm::wfi();
            }
        }
        Exit::Fault(e) => halt(&mut console, e),
    }
}

/// Report a fault on the console and the log, then stop
fn halt<C: Console>(console: &mut C, error: RunError) -> ! {
    error!("{}", error);
    report_fault(console, &error);
    defmt::panic!("halted after {} failure", error.collaborator());
}
