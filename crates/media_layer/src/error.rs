//! Error taxonomy for the binding layer
//!
//! Construction and registry errors propagate immediately to the caller;
//! dispatch-time resolution misses are not errors and never surface here.

use thiserror::Error;

use crate::native::ResourceCategory;

/// Result alias used throughout the binding layer
pub type BindResult<T> = Result<T, BindError>;

/// Binding layer errors
#[derive(Error, Debug)]
pub enum BindError {
    /// A null handle was presented where a live one is required
    #[error("null handle passed where a live {0:?} handle is required")]
    InvalidHandle(ResourceCategory),

    /// A method was invoked on a wrapper that has already been released
    #[error("{0:?} wrapper used after release")]
    UseAfterRelease(ResourceCategory),

    /// Indexed access beyond the current native count; recoverable by
    /// re-querying the count
    #[error("index {index} out of range (current count {count})")]
    IndexOutOfRange {
        /// The requested position
        index: usize,
        /// The count observed at the time of the access
        count: usize,
    },

    /// The native wait primitive reported failure
    #[error("native event wait failed: {0}")]
    EventWaitFailed(String),

    /// The event taxonomy has no route for an observed discriminant;
    /// defect-class, fatal to the dispatch loop
    #[error("no route for native event discriminant {0:#06x}")]
    UnroutableEvent(u32),

    /// The single event pump for this context has already been taken
    #[error("event pump is already taken")]
    PumpInUse,

    /// A native call failed
    #[error("native call failed: {0}")]
    Native(String),

    /// Configuration could not be loaded or parsed
    #[error("config error: {0}")]
    Config(String),
}
