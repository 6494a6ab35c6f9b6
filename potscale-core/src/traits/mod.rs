//! Collaborator traits
//!
//! These traits define the interface between the application logic
//! and hardware-specific implementations.

pub mod console;
pub mod display;
pub mod sensor;

pub use console::{Console, ConsoleError, Operator, OperatorError};
pub use display::{DisplayError, PixelColor, TextDisplay};
pub use sensor::{PotSensor, SensorError};
