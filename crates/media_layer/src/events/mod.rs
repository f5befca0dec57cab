//! Event demultiplexing
//!
//! One heterogeneous event is pulled from the native layer at a time,
//! classified against the closed taxonomy in [`crate::native::event`],
//! resolved to its owning resource through the handle registries, and
//! delivered to exactly one typed notification.

pub mod hub;
pub mod pump;

pub use hub::EventHub;
pub use pump::EventPump;

/// Payload for notifications that carry nothing beyond the event timestamp
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommonEvent {
    /// Milliseconds since native library initialization
    pub timestamp: u32,
}
