//! Input devices: joysticks, game controllers, touch

pub mod controller;
pub mod joystick;
pub mod touch;

pub use controller::{ControllerAxisEvent, ControllerButtonEvent, GameController};
pub use joystick::{JoyAxisEvent, JoyBallEvent, JoyButtonEvent, JoyHatEvent, Joystick};
pub use touch::{FingerEvent, TouchDevice};
