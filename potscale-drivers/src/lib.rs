//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in potscale-core:
//!
//! - Potentiometer sensor over any [`potscale_hal::AdcReader`]
//! - SSD1306 OLED text display over blocking I2C (`ssd1306` crate)
//! - Serial console and operator over a blocking UART

#![no_std]
#![deny(unsafe_code)]

pub mod console;
pub mod display;
pub mod sensor;
