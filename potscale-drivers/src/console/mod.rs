//! Console drivers

pub mod serial;

pub use serial::SerialConsole;
