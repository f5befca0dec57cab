//! The process-wide notification point
//!
//! Untagged/global events have no owning resource; they fire here.
//! Keyboard and mouse payloads are enriched with the resolved window when
//! the embedded handle is known, and "device added" events always fire
//! here with the device index, since no handle exists until the caller
//! opens the device.

use std::sync::Arc;

use crate::events::CommonEvent;
use crate::foundation::Signal;
use crate::native::event::{
    DisplayChange, KeyMods, Keycode, MouseButton, MouseButtons, Scancode,
};
use crate::native::{DeviceInfo, RawHandle};
use crate::video::Window;

/// Key press/release payload
#[derive(Debug, Clone)]
pub struct KeyboardEvent {
    /// Milliseconds since native library initialization
    pub timestamp: u32,
    /// Window with keyboard focus, if this process owns it
    pub window: Option<Arc<Window>>,
    /// Layout-dependent key code
    pub keycode: Keycode,
    /// Physical scan code
    pub scancode: Scancode,
    /// Active modifiers
    pub mods: KeyMods,
    /// Whether this is a key repeat
    pub repeat: bool,
}

/// Committed text payload
#[derive(Debug, Clone)]
pub struct TextInputEvent {
    /// Milliseconds since native library initialization
    pub timestamp: u32,
    /// Window with keyboard focus, if this process owns it
    pub window: Option<Arc<Window>>,
    /// The committed text
    pub text: String,
}

/// Composition text payload
#[derive(Debug, Clone)]
pub struct TextEditingEvent {
    /// Milliseconds since native library initialization
    pub timestamp: u32,
    /// Window with keyboard focus, if this process owns it
    pub window: Option<Arc<Window>>,
    /// The composition text
    pub text: String,
    /// Cursor position within the composition
    pub start: i32,
    /// Length of the selected portion
    pub length: i32,
}

/// Mouse motion payload
#[derive(Debug, Clone)]
pub struct MouseMotionEvent {
    /// Milliseconds since native library initialization
    pub timestamp: u32,
    /// Window with mouse focus, if this process owns it
    pub window: Option<Arc<Window>>,
    /// Native mouse instance id
    pub mouse: u32,
    /// Buttons held during the motion
    pub state: MouseButtons,
    /// X position relative to the window
    pub x: i32,
    /// Y position relative to the window
    pub y: i32,
    /// Relative X motion
    pub dx: i32,
    /// Relative Y motion
    pub dy: i32,
}

/// Mouse button press/release payload
#[derive(Debug, Clone)]
pub struct MouseButtonEvent {
    /// Milliseconds since native library initialization
    pub timestamp: u32,
    /// Window with mouse focus, if this process owns it
    pub window: Option<Arc<Window>>,
    /// Native mouse instance id
    pub mouse: u32,
    /// The button
    pub button: MouseButton,
    /// Click count (1 single, 2 double, ...)
    pub clicks: u8,
    /// X position relative to the window
    pub x: i32,
    /// Y position relative to the window
    pub y: i32,
}

/// Mouse wheel payload
#[derive(Debug, Clone)]
pub struct MouseWheelEvent {
    /// Milliseconds since native library initialization
    pub timestamp: u32,
    /// Window with mouse focus, if this process owns it
    pub window: Option<Arc<Window>>,
    /// Native mouse instance id
    pub mouse: u32,
    /// Horizontal scroll amount
    pub dx: i32,
    /// Vertical scroll amount
    pub dy: i32,
    /// Whether the platform reports inverted scroll direction
    pub flipped: bool,
}

/// Drop begin/complete payload
#[derive(Debug, Clone)]
pub struct DropEvent {
    /// Milliseconds since native library initialization
    pub timestamp: u32,
    /// Target window; `None` when the drop has no target or the handle is
    /// unknown to this process
    pub window: Option<Arc<Window>>,
}

/// Dropped file or text payload
#[derive(Debug, Clone)]
pub struct DroppedEvent {
    /// Milliseconds since native library initialization
    pub timestamp: u32,
    /// Target window; `None` when the drop has no target or the handle is
    /// unknown to this process
    pub window: Option<Arc<Window>>,
    /// The dropped file path or text
    pub data: String,
}

/// Device connection payload; carries the index to open, never a wrapper
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceAddedEvent {
    /// Milliseconds since native library initialization
    pub timestamp: u32,
    /// Position in the device enumeration at event time
    pub index: usize,
}

/// Audio device connection payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AudioDeviceAddedEvent {
    /// Milliseconds since native library initialization
    pub timestamp: u32,
    /// Position in the audio device enumeration at event time
    pub index: usize,
    /// Whether this is a capture device
    pub capture: bool,
}

/// Display change payload, enriched with the current description when the
/// index is still valid
#[derive(Debug, Clone)]
pub struct DisplayEvent {
    /// Milliseconds since native library initialization
    pub timestamp: u32,
    /// Position in the display enumeration at event time
    pub index: usize,
    /// What changed
    pub change: DisplayChange,
    /// Current description of the display, if the index still resolves
    pub info: Option<DeviceInfo>,
}

/// Platform-specific window message payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SystemMessageEvent {
    /// Milliseconds since native library initialization
    pub timestamp: u32,
    /// Opaque platform message payload
    pub message: u64,
}

/// Multi-finger gesture payload
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureEvent {
    /// Milliseconds since native library initialization
    pub timestamp: u32,
    /// The touch device the gesture occurred on
    pub touch: RawHandle,
    /// Rotation amount
    pub rotation: f32,
    /// Pinch amount
    pub pinch: f32,
    /// Normalized gesture center X
    pub x: f32,
    /// Normalized gesture center Y
    pub y: f32,
    /// Number of fingers involved
    pub fingers: u16,
}

/// Recorded gesture recognition payload
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DollarGestureEvent {
    /// Milliseconds since native library initialization
    pub timestamp: u32,
    /// The touch device the gesture occurred on
    pub touch: RawHandle,
    /// Native gesture id
    pub gesture: i64,
    /// Number of fingers involved
    pub fingers: u32,
    /// Recognition error
    pub error: f32,
    /// Normalized gesture center X
    pub x: f32,
    /// Normalized gesture center Y
    pub y: f32,
}

/// Gesture recording completion payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DollarRecordEvent {
    /// Milliseconds since native library initialization
    pub timestamp: u32,
    /// The touch device the recording occurred on
    pub touch: RawHandle,
    /// Native gesture id assigned to the recording
    pub gesture: i64,
}

/// One signal per process-wide event category
#[derive(Default)]
pub struct EventHub {
    /// The process was asked to quit; fires once, after which the pump is
    /// latched
    pub quitting: Signal<CommonEvent>,
    /// The application is terminating
    pub app_terminating: Signal<CommonEvent>,
    /// The application is low on memory
    pub app_low_memory: Signal<CommonEvent>,
    /// The application is about to enter the background
    pub app_will_enter_background: Signal<CommonEvent>,
    /// The application entered the background
    pub app_did_enter_background: Signal<CommonEvent>,
    /// The application is about to enter the foreground
    pub app_will_enter_foreground: Signal<CommonEvent>,
    /// The application entered the foreground
    pub app_did_enter_foreground: Signal<CommonEvent>,
    /// The clipboard contents changed
    pub clipboard_updated: Signal<CommonEvent>,
    /// The keyboard layout or language changed
    pub keymap_changed: Signal<CommonEvent>,
    /// A key was pressed
    pub key_down: Signal<KeyboardEvent>,
    /// A key was released
    pub key_up: Signal<KeyboardEvent>,
    /// Text was committed
    pub text_input: Signal<TextInputEvent>,
    /// Composition text changed
    pub text_editing: Signal<TextEditingEvent>,
    /// The mouse moved
    pub mouse_motion: Signal<MouseMotionEvent>,
    /// A mouse button was pressed
    pub mouse_button_down: Signal<MouseButtonEvent>,
    /// A mouse button was released
    pub mouse_button_up: Signal<MouseButtonEvent>,
    /// The mouse wheel moved
    pub mouse_wheel: Signal<MouseWheelEvent>,
    /// A drag-and-drop operation began
    pub drop_begin: Signal<DropEvent>,
    /// A drag-and-drop operation completed
    pub drop_complete: Signal<DropEvent>,
    /// A file was dropped
    pub file_dropped: Signal<DroppedEvent>,
    /// Text was dropped
    pub text_dropped: Signal<DroppedEvent>,
    /// A joystick was connected
    pub joystick_added: Signal<DeviceAddedEvent>,
    /// A game controller was connected
    pub controller_added: Signal<DeviceAddedEvent>,
    /// An audio device was connected
    pub audio_device_added: Signal<AudioDeviceAddedEvent>,
    /// A display changed state
    pub display_changed: Signal<DisplayEvent>,
    /// The render device was reset
    pub render_device_reset: Signal<CommonEvent>,
    /// Render targets were reset
    pub render_targets_reset: Signal<CommonEvent>,
    /// A platform-specific window message arrived; never routed to a
    /// window instance
    pub system_window_message: Signal<SystemMessageEvent>,
    /// A multi-finger gesture was recognized
    pub multi_gesture: Signal<GestureEvent>,
    /// A recorded gesture was recognized
    pub dollar_gesture: Signal<DollarGestureEvent>,
    /// A gesture recording completed
    pub dollar_record: Signal<DollarRecordEvent>,
}
