//! Display drivers

pub mod oled;

pub use oled::Oled;
