//! The boundary with the native multimedia library
//!
//! The native layer exposes resources as opaque handles or small device
//! indices and reports asynchronous occurrences through a single tagged
//! event record. This module defines that boundary as a trait so the
//! identity and dispatch core can be driven by a real backend or by a
//! test double, without ambient static state.

pub mod event;

#[cfg(test)]
pub(crate) mod fake;

use std::fmt;
use std::time::Duration;

use bitflags::bitflags;

use crate::error::BindResult;
use event::NativeEvent;

/// An opaque native address identifying a live native resource
///
/// Never dereferenced by the binding layer; only passed back to native
/// calls and used as the identity key of the handle registries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RawHandle(u64);

impl RawHandle {
    /// The null/zero sentinel; never identifies a live resource
    pub const NULL: Self = Self(0);

    /// Wrap a raw native address
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Whether this is the null sentinel
    pub const fn is_null(self) -> bool {
        self.0 == 0
    }

    /// The raw address value
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for RawHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}

bitflags! {
    /// Native subsystems that can be initialized
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Subsystems: u32 {
        /// Timer services
        const TIMER = 0x0000_0001;
        /// Audio playback and capture
        const AUDIO = 0x0000_0010;
        /// Windowing and display
        const VIDEO = 0x0000_0020;
        /// Joystick input
        const JOYSTICK = 0x0000_0200;
        /// Haptic feedback devices
        const HAPTIC = 0x0000_1000;
        /// Game controller input (implies joystick)
        const GAME_CONTROLLER = 0x0000_2000;
        /// Event queue
        const EVENTS = 0x0000_4000;
        /// Sensors
        const SENSOR = 0x0000_8000;
    }
}

/// A class of native resource identified by an opaque handle
///
/// Each category has its own open/destroy/event semantics and its own
/// handle registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceCategory {
    /// A top-level window
    Window,
    /// A joystick device
    Joystick,
    /// A game controller (joystick with a standard mapping)
    GameController,
    /// A haptic feedback device
    Haptic,
    /// An opened audio playback or capture device
    AudioDevice,
    /// A hardware sensor
    Sensor,
    /// A touch input device
    TouchDevice,
}

/// A class of resource the native layer exposes only as a count plus an
/// indexed accessor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeviceClass {
    /// Joystick devices awaiting open
    Joystick,
    /// Joystick devices that carry a controller mapping
    GameController,
    /// Haptic-capable devices
    Haptic,
    /// Audio playback devices
    AudioPlayback,
    /// Audio capture devices
    AudioCapture,
    /// Hardware sensors
    Sensor,
    /// Connected displays
    Display,
    /// Available audio decoders
    AudioDecoder,
    /// Touch input devices
    Touch,
}

/// Lightweight description of a resource reachable only by position
///
/// Index validity is only guaranteed for the duration of the enclosing
/// enumeration; indices are not stable across native rescans and must not
/// be cached past a single query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceInfo {
    /// The enumeration class this entry came from
    pub class: DeviceClass,
    /// Position in the native enumeration at query time
    pub index: usize,
    /// Human-readable device name
    pub name: String,
}

/// Parameters for a native open/create call
#[derive(Debug, Clone, Copy)]
pub enum OpenRequest<'a> {
    /// Create a window
    Window {
        /// Window title
        title: &'a str,
        /// Initial width in pixels
        width: u32,
        /// Initial height in pixels
        height: u32,
    },
    /// Open a device by its position in a native enumeration
    Device {
        /// The enumeration the index refers to
        class: DeviceClass,
        /// Position at the time of the call
        index: usize,
    },
}

/// How long a single event retrieval may block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaitPolicy {
    /// Non-blocking poll
    Immediate,
    /// Wait indefinitely; no cancellation primitive exists for an
    /// in-flight wait
    Blocking,
    /// Wait up to the given duration; the recommended substitute for
    /// cancellable waits
    BoundedWait(Duration),
}

/// The primitive native operations consumed by the identity and dispatch
/// core
///
/// Everything else the native library offers (drawing, mixing, marshaling)
/// lives in forwarding layers outside this crate. Implementations must be
/// usable from the thread that owns the native windowing context; the
/// binding layer does not weaken the native library's own per-category
/// thread-safety guarantees.
pub trait NativeDriver: Send + Sync {
    /// Initialize the given subsystems
    fn init(&self, subsystems: Subsystems) -> BindResult<()>;

    /// Tear down every initialized subsystem
    fn shutdown(&self);

    /// Open or create a resource, yielding its handle
    fn open(&self, category: ResourceCategory, request: OpenRequest<'_>) -> BindResult<RawHandle>;

    /// Destroy a live resource
    fn destroy(&self, category: ResourceCategory, handle: RawHandle);

    /// Retrieve at most one event from the native queue
    ///
    /// Returns `Ok(None)` only under [`WaitPolicy::Immediate`] with an
    /// empty queue. A failure to retrieve under `Blocking` or
    /// `BoundedWait` (including timeout expiry) is reported as
    /// [`crate::BindError::EventWaitFailed`].
    fn next_event(&self, policy: WaitPolicy) -> BindResult<Option<NativeEvent>>;

    /// Current number of entries in an indexed enumeration
    fn device_count(&self, class: DeviceClass) -> usize;

    /// Describe the entry at `index` in an indexed enumeration
    fn device_info(&self, class: DeviceClass, index: usize) -> BindResult<DeviceInfo>;
}
