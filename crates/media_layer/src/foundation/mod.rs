//! Foundation utilities shared across the binding layer

pub mod logging;
pub mod signal;

pub use signal::Signal;
