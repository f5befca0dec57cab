//! The tagged native event record
//!
//! A single decoding step at the native boundary produces one
//! [`NativeEvent`] per queue entry: a discriminant plus a kind-specific
//! payload. The union is closed so the dispatch routing in
//! [`crate::events::pump`] stays exhaustive and compiler-checkable;
//! discriminants the decoder does not recognize surface as
//! [`EventKind::Unknown`].

use bitflags::bitflags;

use crate::native::RawHandle;

/// One event pulled from the native queue
///
/// Immutable once pulled; consumed exactly once by the dispatcher.
#[derive(Debug, Clone)]
pub struct NativeEvent {
    /// Milliseconds since native library initialization
    pub timestamp: u32,
    /// The discriminant and its payload
    pub kind: EventKind,
}

/// Every event subtype the native layer can report
#[derive(Debug, Clone)]
pub enum EventKind {
    /// The process was asked to quit
    Quit,

    /// The application is terminating
    AppTerminating,
    /// The application is low on memory
    AppLowMemory,
    /// The application is about to enter the background
    AppWillEnterBackground,
    /// The application entered the background
    AppDidEnterBackground,
    /// The application is about to enter the foreground
    AppWillEnterForeground,
    /// The application entered the foreground
    AppDidEnterForeground,

    /// A display changed state; addressed by display index
    Display {
        /// Position in the display enumeration at event time
        index: usize,
        /// What changed
        change: DisplayChange,
    },
    /// The render device was reset and resources must be recreated
    RenderDeviceReset,
    /// Render targets were reset and their contents lost
    RenderTargetsReset,

    /// A window changed state; addressed by window handle
    Window {
        /// The owning window
        window: RawHandle,
        /// What happened to the window
        detail: WindowDetail,
    },
    /// A platform-specific window message with no owning window concept
    SystemWindowMessage {
        /// Opaque platform message payload
        message: u64,
    },

    /// A key was pressed
    KeyDown {
        /// Window with keyboard focus, or null
        window: RawHandle,
        /// Layout-dependent key code
        keycode: Keycode,
        /// Physical scan code
        scancode: Scancode,
        /// Active modifiers
        mods: KeyMods,
        /// Whether this is a key repeat
        repeat: bool,
    },
    /// A key was released
    KeyUp {
        /// Window with keyboard focus, or null
        window: RawHandle,
        /// Layout-dependent key code
        keycode: Keycode,
        /// Physical scan code
        scancode: Scancode,
        /// Active modifiers
        mods: KeyMods,
        /// Whether this is a key repeat
        repeat: bool,
    },
    /// Composition text changed
    TextEditing {
        /// Window with keyboard focus, or null
        window: RawHandle,
        /// Composition text
        text: String,
        /// Cursor position within the composition
        start: i32,
        /// Length of the selected portion
        length: i32,
    },
    /// Text was committed
    TextInput {
        /// Window with keyboard focus, or null
        window: RawHandle,
        /// Committed text
        text: String,
    },
    /// The keyboard layout or language changed
    KeymapChanged,

    /// The mouse moved
    MouseMotion {
        /// Window with mouse focus, or null
        window: RawHandle,
        /// Native mouse instance id
        mouse: u32,
        /// Buttons held during the motion
        state: MouseButtons,
        /// X position relative to the window
        x: i32,
        /// Y position relative to the window
        y: i32,
        /// Relative X motion
        dx: i32,
        /// Relative Y motion
        dy: i32,
    },
    /// A mouse button was pressed
    MouseButtonDown {
        /// Window with mouse focus, or null
        window: RawHandle,
        /// Native mouse instance id
        mouse: u32,
        /// The button
        button: MouseButton,
        /// Click count (1 single, 2 double, ...)
        clicks: u8,
        /// X position relative to the window
        x: i32,
        /// Y position relative to the window
        y: i32,
    },
    /// A mouse button was released
    MouseButtonUp {
        /// Window with mouse focus, or null
        window: RawHandle,
        /// Native mouse instance id
        mouse: u32,
        /// The button
        button: MouseButton,
        /// Click count (1 single, 2 double, ...)
        clicks: u8,
        /// X position relative to the window
        x: i32,
        /// Y position relative to the window
        y: i32,
    },
    /// The mouse wheel moved
    MouseWheel {
        /// Window with mouse focus, or null
        window: RawHandle,
        /// Native mouse instance id
        mouse: u32,
        /// Horizontal scroll amount
        dx: i32,
        /// Vertical scroll amount
        dy: i32,
        /// Whether the platform reports inverted scroll direction
        flipped: bool,
    },

    /// Joystick axis motion; addressed by joystick handle
    JoystickAxisMotion {
        /// The owning joystick
        joystick: RawHandle,
        /// Axis index
        axis: u8,
        /// Axis position
        value: i16,
    },
    /// Joystick trackball motion
    JoystickBallMotion {
        /// The owning joystick
        joystick: RawHandle,
        /// Ball index
        ball: u8,
        /// Relative X motion
        dx: i16,
        /// Relative Y motion
        dy: i16,
    },
    /// Joystick hat motion
    JoystickHatMotion {
        /// The owning joystick
        joystick: RawHandle,
        /// Hat index
        hat: u8,
        /// New hat position
        state: HatState,
    },
    /// A joystick button was pressed
    JoystickButtonDown {
        /// The owning joystick
        joystick: RawHandle,
        /// Button index
        button: u8,
    },
    /// A joystick button was released
    JoystickButtonUp {
        /// The owning joystick
        joystick: RawHandle,
        /// Button index
        button: u8,
    },
    /// A joystick was connected; addressed by device index because no
    /// handle exists until the caller opens it
    JoystickAdded {
        /// Position in the joystick enumeration at event time
        index: usize,
    },
    /// A joystick was disconnected
    JoystickRemoved {
        /// Last-known handle of the removed joystick
        joystick: RawHandle,
    },

    /// Game controller axis motion
    ControllerAxisMotion {
        /// The owning controller
        controller: RawHandle,
        /// The mapped axis
        axis: ControllerAxis,
        /// Axis position
        value: i16,
    },
    /// A controller button was pressed
    ControllerButtonDown {
        /// The owning controller
        controller: RawHandle,
        /// The mapped button
        button: ControllerButton,
    },
    /// A controller button was released
    ControllerButtonUp {
        /// The owning controller
        controller: RawHandle,
        /// The mapped button
        button: ControllerButton,
    },
    /// A game controller was connected
    ControllerAdded {
        /// Position in the joystick enumeration at event time
        index: usize,
    },
    /// A game controller was disconnected
    ControllerRemoved {
        /// Last-known handle of the removed controller
        controller: RawHandle,
    },
    /// A controller's mapping was updated
    ControllerRemapped {
        /// The remapped controller
        controller: RawHandle,
    },

    /// An audio device was connected
    AudioDeviceAdded {
        /// Position in the audio device enumeration at event time
        index: usize,
        /// Whether this is a capture device
        capture: bool,
    },
    /// An audio device was disconnected
    AudioDeviceRemoved {
        /// Last-known handle of the removed device
        device: RawHandle,
        /// Whether this was a capture device
        capture: bool,
    },

    /// A finger touched a touch device
    FingerDown {
        /// The owning touch device
        touch: RawHandle,
        /// Native finger id
        finger: i64,
        /// Normalized X position
        x: f32,
        /// Normalized Y position
        y: f32,
        /// Normalized X motion
        dx: f32,
        /// Normalized Y motion
        dy: f32,
        /// Normalized pressure
        pressure: f32,
    },
    /// A finger left a touch device
    FingerUp {
        /// The owning touch device
        touch: RawHandle,
        /// Native finger id
        finger: i64,
        /// Normalized X position
        x: f32,
        /// Normalized Y position
        y: f32,
        /// Normalized X motion
        dx: f32,
        /// Normalized Y motion
        dy: f32,
        /// Normalized pressure
        pressure: f32,
    },
    /// A finger moved on a touch device
    FingerMotion {
        /// The owning touch device
        touch: RawHandle,
        /// Native finger id
        finger: i64,
        /// Normalized X position
        x: f32,
        /// Normalized Y position
        y: f32,
        /// Normalized X motion
        dx: f32,
        /// Normalized Y motion
        dy: f32,
        /// Normalized pressure
        pressure: f32,
    },
    /// A multi-finger gesture was recognized
    MultiGesture {
        /// The touch device the gesture occurred on
        touch: RawHandle,
        /// Rotation amount
        rotation: f32,
        /// Pinch amount
        pinch: f32,
        /// Normalized gesture center X
        x: f32,
        /// Normalized gesture center Y
        y: f32,
        /// Number of fingers involved
        fingers: u16,
    },
    /// A recorded gesture was recognized
    DollarGesture {
        /// The touch device the gesture occurred on
        touch: RawHandle,
        /// Native gesture id
        gesture: i64,
        /// Number of fingers involved
        fingers: u32,
        /// Recognition error
        error: f32,
        /// Normalized gesture center X
        x: f32,
        /// Normalized gesture center Y
        y: f32,
    },
    /// A gesture recording completed
    DollarRecord {
        /// The touch device the recording occurred on
        touch: RawHandle,
        /// Native gesture id assigned to the recording
        gesture: i64,
    },

    /// A drag-and-drop operation began
    DropBegin {
        /// Target window, or null when the drop has no target
        window: RawHandle,
    },
    /// A file was dropped
    DropFile {
        /// Target window, or null when the drop has no target
        window: RawHandle,
        /// Path of the dropped file
        path: String,
    },
    /// Text was dropped
    DropText {
        /// Target window, or null when the drop has no target
        window: RawHandle,
        /// The dropped text
        text: String,
    },
    /// A drag-and-drop operation completed
    DropComplete {
        /// Target window, or null when the drop has no target
        window: RawHandle,
    },

    /// A sensor reported new data; addressed by sensor handle
    SensorUpdate {
        /// The owning sensor
        sensor: RawHandle,
        /// Up to six data values, sensor-type dependent
        data: [f32; 6],
    },

    /// The clipboard contents changed
    ClipboardUpdate,

    /// A discriminant the decode boundary does not recognize
    ///
    /// Routing this fails with [`crate::BindError::UnroutableEvent`]: an
    /// incomplete taxonomy is a defect, not a runtime condition.
    Unknown {
        /// The raw discriminant value
        code: u32,
    },
}

/// What happened to a window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowDetail {
    /// The window became visible
    Shown,
    /// The window became hidden
    Hidden,
    /// The window was exposed and should be redrawn
    Exposed,
    /// The window moved
    Moved {
        /// New X position
        x: i32,
        /// New Y position
        y: i32,
    },
    /// The window was resized by the user
    Resized {
        /// New width in pixels
        width: u32,
        /// New height in pixels
        height: u32,
    },
    /// The window size changed for any reason
    SizeChanged {
        /// New width in pixels
        width: u32,
        /// New height in pixels
        height: u32,
    },
    /// The window was minimized
    Minimized,
    /// The window was maximized
    Maximized,
    /// The window was restored
    Restored,
    /// The mouse entered the window
    MouseEntered,
    /// The mouse left the window
    MouseLeft,
    /// The window gained keyboard focus
    FocusGained,
    /// The window lost keyboard focus
    FocusLost,
    /// The window manager asked the window to close
    CloseRequested,
    /// The window is being offered focus
    TakeFocus,
    /// A hit test was performed on the window
    HitTest,
}

/// What changed about a display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayChange {
    /// The display was connected
    Connected,
    /// The display was disconnected
    Disconnected,
    /// The display orientation changed
    OrientationChanged(DisplayOrientation),
    /// The display moved within the desktop layout
    Moved,
}

/// Physical orientation of a display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayOrientation {
    /// Orientation could not be determined
    Unknown,
    /// Landscape, right side up
    Landscape,
    /// Landscape, upside down
    LandscapeFlipped,
    /// Portrait, right side up
    Portrait,
    /// Portrait, upside down
    PortraitFlipped,
}

/// Layout-dependent key code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Keycode(pub i32);

/// Layout-independent physical scan code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Scancode(pub u32);

bitflags! {
    /// Keyboard modifier state
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct KeyMods: u16 {
        /// Left shift
        const LSHIFT = 0x0001;
        /// Right shift
        const RSHIFT = 0x0002;
        /// Left control
        const LCTRL = 0x0040;
        /// Right control
        const RCTRL = 0x0080;
        /// Left alt
        const LALT = 0x0100;
        /// Right alt
        const RALT = 0x0200;
        /// Left GUI key
        const LGUI = 0x0400;
        /// Right GUI key
        const RGUI = 0x0800;
        /// Num lock
        const NUM = 0x1000;
        /// Caps lock
        const CAPS = 0x2000;
        /// AltGr mode
        const MODE = 0x4000;
        /// Either shift
        const SHIFT = Self::LSHIFT.bits() | Self::RSHIFT.bits();
        /// Either control
        const CTRL = Self::LCTRL.bits() | Self::RCTRL.bits();
        /// Either alt
        const ALT = Self::LALT.bits() | Self::RALT.bits();
        /// Either GUI key
        const GUI = Self::LGUI.bits() | Self::RGUI.bits();
    }
}

/// A single mouse button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Left button
    Left,
    /// Middle button
    Middle,
    /// Right button
    Right,
    /// First extra button
    X1,
    /// Second extra button
    X2,
    /// Any further button, by native index
    Other(u8),
}

bitflags! {
    /// Mouse button state during a motion event
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct MouseButtons: u32 {
        /// Left button held
        const LEFT = 0x01;
        /// Middle button held
        const MIDDLE = 0x02;
        /// Right button held
        const RIGHT = 0x04;
        /// First extra button held
        const X1 = 0x08;
        /// Second extra button held
        const X2 = 0x10;
    }
}

bitflags! {
    /// Position of a joystick hat
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct HatState: u8 {
        /// Pushed up
        const UP = 0x01;
        /// Pushed right
        const RIGHT = 0x02;
        /// Pushed down
        const DOWN = 0x04;
        /// Pushed left
        const LEFT = 0x08;
        /// Pushed up and right
        const RIGHT_UP = Self::RIGHT.bits() | Self::UP.bits();
        /// Pushed down and right
        const RIGHT_DOWN = Self::RIGHT.bits() | Self::DOWN.bits();
        /// Pushed up and left
        const LEFT_UP = Self::LEFT.bits() | Self::UP.bits();
        /// Pushed down and left
        const LEFT_DOWN = Self::LEFT.bits() | Self::DOWN.bits();
    }
}

impl HatState {
    /// Whether the hat is centered
    pub const fn is_centered(self) -> bool {
        self.is_empty()
    }
}

/// Axes of a game controller with a standard mapping
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControllerAxis {
    /// Left stick horizontal
    LeftX,
    /// Left stick vertical
    LeftY,
    /// Right stick horizontal
    RightX,
    /// Right stick vertical
    RightY,
    /// Left trigger
    TriggerLeft,
    /// Right trigger
    TriggerRight,
}

/// Buttons of a game controller with a standard mapping
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControllerButton {
    /// Bottom face button
    A,
    /// Right face button
    B,
    /// Left face button
    X,
    /// Top face button
    Y,
    /// Back/select button
    Back,
    /// Guide/home button
    Guide,
    /// Start button
    Start,
    /// Pressing the left stick
    LeftStick,
    /// Pressing the right stick
    RightStick,
    /// Left shoulder button
    LeftShoulder,
    /// Right shoulder button
    RightShoulder,
    /// D-pad up
    DpadUp,
    /// D-pad down
    DpadDown,
    /// D-pad left
    DpadLeft,
    /// D-pad right
    DpadRight,
    /// Touchpad press
    Touchpad,
}
