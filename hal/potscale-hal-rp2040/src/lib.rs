//! RP2040-specific HAL for the potscale firmware
//!
//! This crate provides RP2040-specific implementations of the shared
//! `potscale-hal` types, plus the board bring-up the firmware needs:
//!
//! - ADC channel map and a blocking [`potscale_hal::AdcReader`]
//! - Display bus open with a presence probe
//! - Console UART open

#![no_std]

pub mod adc;
pub mod bus;
pub mod uart;
