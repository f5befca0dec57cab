//! The single-consumer event dispatch loop
//!
//! One pump exists per context, expected to run on the thread that owns
//! the native windowing context (a native-library constraint). Each
//! [`EventPump::pull`] retrieves at most one event, classifies it with an
//! exhaustive match over the closed taxonomy, resolves the target through
//! the handle registries, and fires exactly one typed notification
//! synchronously on the calling thread.

use std::sync::atomic::Ordering;
use std::sync::Arc;

use log::trace;

use crate::context::ContextInner;
use crate::error::{BindError, BindResult};
use crate::events::hub::{
    AudioDeviceAddedEvent, DeviceAddedEvent, DisplayEvent, DollarGestureEvent, DollarRecordEvent,
    DropEvent, DroppedEvent, GestureEvent, KeyboardEvent, MouseButtonEvent, MouseMotionEvent,
    MouseWheelEvent, SystemMessageEvent, TextEditingEvent, TextInputEvent,
};
use crate::events::CommonEvent;
use crate::input::{
    ControllerAxisEvent, ControllerButtonEvent, FingerEvent, JoyAxisEvent, JoyBallEvent,
    JoyButtonEvent, JoyHatEvent,
};
use crate::native::event::{EventKind, NativeEvent};
use crate::native::{DeviceClass, RawHandle, WaitPolicy};
use crate::sensor::SensorUpdateEvent;
use crate::video::{Window, WindowEvent};

/// The event dispatcher
///
/// Obtained once from [`crate::Context::event_pump`]; routing is
/// synchronous and non-reentrant, which the exclusive receiver on
/// [`EventPump::pull`] enforces.
pub struct EventPump {
    ctx: Arc<ContextInner>,
}

impl EventPump {
    pub(crate) fn new(ctx: Arc<ContextInner>) -> Self {
        Self { ctx }
    }

    /// Retrieve and dispatch at most one event
    ///
    /// Returns `Ok(false)` from the call that dispatches a quit event
    /// onward; quit is a one-way latch, so every later call also returns
    /// `Ok(false)` without touching the native queue. Under
    /// [`WaitPolicy::Immediate`] an empty queue returns `Ok(true)` with no
    /// dispatch. A failed retrieval under the waiting policies surfaces
    /// [`BindError::EventWaitFailed`]; the caller may try again on its
    /// next tick, the pump itself never retries.
    pub fn pull(&mut self, policy: WaitPolicy) -> BindResult<bool> {
        if self.ctx.quit_latched.load(Ordering::SeqCst) {
            return Ok(false);
        }

        let event = match policy {
            WaitPolicy::Immediate => match self.ctx.driver.next_event(policy)? {
                Some(event) => event,
                None => return Ok(true),
            },
            WaitPolicy::Blocking | WaitPolicy::BoundedWait(_) => self
                .ctx
                .driver
                .next_event(policy)?
                .ok_or_else(|| {
                    BindError::EventWaitFailed("native wait returned no event".to_string())
                })?,
        };

        self.dispatch(event)?;
        Ok(!self.ctx.quit_latched.load(Ordering::SeqCst))
    }

    /// Resolve a window handle for payload enrichment; null or unknown
    /// handles yield `None`.
    fn window_for(&self, handle: RawHandle) -> Option<Arc<Window>> {
        self.ctx.windows.get_existing(handle)
    }

    #[allow(clippy::too_many_lines)]
    fn dispatch(&mut self, event: NativeEvent) -> BindResult<()> {
        let hub = &self.ctx.hub;
        let timestamp = event.timestamp;
        let common = CommonEvent { timestamp };

        match event.kind {
            EventKind::Quit => {
                hub.quitting.emit(&common);
                self.ctx.quit_latched.store(true, Ordering::SeqCst);
            }

            EventKind::AppTerminating => hub.app_terminating.emit(&common),
            EventKind::AppLowMemory => hub.app_low_memory.emit(&common),
            EventKind::AppWillEnterBackground => hub.app_will_enter_background.emit(&common),
            EventKind::AppDidEnterBackground => hub.app_did_enter_background.emit(&common),
            EventKind::AppWillEnterForeground => hub.app_will_enter_foreground.emit(&common),
            EventKind::AppDidEnterForeground => hub.app_did_enter_foreground.emit(&common),
            EventKind::ClipboardUpdate => hub.clipboard_updated.emit(&common),
            EventKind::KeymapChanged => hub.keymap_changed.emit(&common),
            EventKind::RenderDeviceReset => hub.render_device_reset.emit(&common),
            EventKind::RenderTargetsReset => hub.render_targets_reset.emit(&common),

            EventKind::Display { index, change } => {
                let info = self.ctx.driver.device_info(DeviceClass::Display, index).ok();
                hub.display_changed.emit(&DisplayEvent {
                    timestamp,
                    index,
                    change,
                    info,
                });
            }

            EventKind::Window { window, detail } => {
                if let Some(target) = self.ctx.windows.get_existing(window) {
                    target.events.emit(&WindowEvent { timestamp, detail });
                } else {
                    trace!("window event for unknown handle {window}, dropped");
                }
            }
            EventKind::SystemWindowMessage { message } => {
                hub.system_window_message
                    .emit(&SystemMessageEvent { timestamp, message });
            }

            EventKind::KeyDown {
                window,
                keycode,
                scancode,
                mods,
                repeat,
            } => hub.key_down.emit(&KeyboardEvent {
                timestamp,
                window: self.window_for(window),
                keycode,
                scancode,
                mods,
                repeat,
            }),
            EventKind::KeyUp {
                window,
                keycode,
                scancode,
                mods,
                repeat,
            } => hub.key_up.emit(&KeyboardEvent {
                timestamp,
                window: self.window_for(window),
                keycode,
                scancode,
                mods,
                repeat,
            }),
            EventKind::TextEditing {
                window,
                text,
                start,
                length,
            } => hub.text_editing.emit(&TextEditingEvent {
                timestamp,
                window: self.window_for(window),
                text,
                start,
                length,
            }),
            EventKind::TextInput { window, text } => hub.text_input.emit(&TextInputEvent {
                timestamp,
                window: self.window_for(window),
                text,
            }),

            EventKind::MouseMotion {
                window,
                mouse,
                state,
                x,
                y,
                dx,
                dy,
            } => hub.mouse_motion.emit(&MouseMotionEvent {
                timestamp,
                window: self.window_for(window),
                mouse,
                state,
                x,
                y,
                dx,
                dy,
            }),
            EventKind::MouseButtonDown {
                window,
                mouse,
                button,
                clicks,
                x,
                y,
            } => hub.mouse_button_down.emit(&MouseButtonEvent {
                timestamp,
                window: self.window_for(window),
                mouse,
                button,
                clicks,
                x,
                y,
            }),
            EventKind::MouseButtonUp {
                window,
                mouse,
                button,
                clicks,
                x,
                y,
            } => hub.mouse_button_up.emit(&MouseButtonEvent {
                timestamp,
                window: self.window_for(window),
                mouse,
                button,
                clicks,
                x,
                y,
            }),
            EventKind::MouseWheel {
                window,
                mouse,
                dx,
                dy,
                flipped,
            } => hub.mouse_wheel.emit(&MouseWheelEvent {
                timestamp,
                window: self.window_for(window),
                mouse,
                dx,
                dy,
                flipped,
            }),

            EventKind::JoystickAxisMotion {
                joystick,
                axis,
                value,
            } => {
                if let Some(target) = self.ctx.joysticks.get_existing(joystick) {
                    target
                        .axis_motion
                        .emit(&JoyAxisEvent {
                            timestamp,
                            axis,
                            value,
                        });
                } else {
                    trace!("joystick axis event for unknown handle {joystick}, dropped");
                }
            }
            EventKind::JoystickBallMotion {
                joystick,
                ball,
                dx,
                dy,
            } => {
                if let Some(target) = self.ctx.joysticks.get_existing(joystick) {
                    target.ball_motion.emit(&JoyBallEvent {
                        timestamp,
                        ball,
                        dx,
                        dy,
                    });
                } else {
                    trace!("joystick ball event for unknown handle {joystick}, dropped");
                }
            }
            EventKind::JoystickHatMotion {
                joystick,
                hat,
                state,
            } => {
                if let Some(target) = self.ctx.joysticks.get_existing(joystick) {
                    target.hat_motion.emit(&JoyHatEvent {
                        timestamp,
                        hat,
                        state,
                    });
                } else {
                    trace!("joystick hat event for unknown handle {joystick}, dropped");
                }
            }
            EventKind::JoystickButtonDown { joystick, button } => {
                if let Some(target) = self.ctx.joysticks.get_existing(joystick) {
                    target.button_down.emit(&JoyButtonEvent { timestamp, button });
                } else {
                    trace!("joystick button event for unknown handle {joystick}, dropped");
                }
            }
            EventKind::JoystickButtonUp { joystick, button } => {
                if let Some(target) = self.ctx.joysticks.get_existing(joystick) {
                    target.button_up.emit(&JoyButtonEvent { timestamp, button });
                } else {
                    trace!("joystick button event for unknown handle {joystick}, dropped");
                }
            }
            EventKind::JoystickAdded { index } => {
                hub.joystick_added.emit(&DeviceAddedEvent { timestamp, index });
            }
            EventKind::JoystickRemoved { joystick } => {
                // Fired against the last-known wrapper even though the
                // native resource may already be invalid; subscribers rely
                // on this for cleanup.
                if let Some(target) = self.ctx.joysticks.get_existing(joystick) {
                    target.removed.emit(&common);
                }
                self.ctx.joysticks.evict(joystick);
            }

            EventKind::ControllerAxisMotion {
                controller,
                axis,
                value,
            } => {
                if let Some(target) = self.ctx.controllers.get_existing(controller) {
                    target.axis_motion.emit(&ControllerAxisEvent {
                        timestamp,
                        axis,
                        value,
                    });
                } else {
                    trace!("controller axis event for unknown handle {controller}, dropped");
                }
            }
            EventKind::ControllerButtonDown { controller, button } => {
                if let Some(target) = self.ctx.controllers.get_existing(controller) {
                    target
                        .button_down
                        .emit(&ControllerButtonEvent { timestamp, button });
                } else {
                    trace!("controller button event for unknown handle {controller}, dropped");
                }
            }
            EventKind::ControllerButtonUp { controller, button } => {
                if let Some(target) = self.ctx.controllers.get_existing(controller) {
                    target
                        .button_up
                        .emit(&ControllerButtonEvent { timestamp, button });
                } else {
                    trace!("controller button event for unknown handle {controller}, dropped");
                }
            }
            EventKind::ControllerAdded { index } => {
                hub.controller_added
                    .emit(&DeviceAddedEvent { timestamp, index });
            }
            EventKind::ControllerRemapped { controller } => {
                if let Some(target) = self.ctx.controllers.get_existing(controller) {
                    target.remapped.emit(&common);
                } else {
                    trace!("controller remap event for unknown handle {controller}, dropped");
                }
            }
            EventKind::ControllerRemoved { controller } => {
                if let Some(target) = self.ctx.controllers.get_existing(controller) {
                    target.removed.emit(&common);
                }
                self.ctx.controllers.evict(controller);
            }

            EventKind::AudioDeviceAdded { index, capture } => {
                hub.audio_device_added.emit(&AudioDeviceAddedEvent {
                    timestamp,
                    index,
                    capture,
                });
            }
            EventKind::AudioDeviceRemoved { device, .. } => {
                if let Some(target) = self.ctx.audio_devices.get_existing(device) {
                    target.removed.emit(&common);
                }
                self.ctx.audio_devices.evict(device);
            }

            EventKind::FingerDown {
                touch,
                finger,
                x,
                y,
                dx,
                dy,
                pressure,
            } => {
                if let Some(target) = self.ctx.touch_devices.get_existing(touch) {
                    target.finger_down.emit(&FingerEvent {
                        timestamp,
                        finger,
                        x,
                        y,
                        dx,
                        dy,
                        pressure,
                    });
                } else {
                    trace!("finger event for unknown touch device {touch}, dropped");
                }
            }
            EventKind::FingerUp {
                touch,
                finger,
                x,
                y,
                dx,
                dy,
                pressure,
            } => {
                if let Some(target) = self.ctx.touch_devices.get_existing(touch) {
                    target.finger_up.emit(&FingerEvent {
                        timestamp,
                        finger,
                        x,
                        y,
                        dx,
                        dy,
                        pressure,
                    });
                } else {
                    trace!("finger event for unknown touch device {touch}, dropped");
                }
            }
            EventKind::FingerMotion {
                touch,
                finger,
                x,
                y,
                dx,
                dy,
                pressure,
            } => {
                if let Some(target) = self.ctx.touch_devices.get_existing(touch) {
                    target.finger_motion.emit(&FingerEvent {
                        timestamp,
                        finger,
                        x,
                        y,
                        dx,
                        dy,
                        pressure,
                    });
                } else {
                    trace!("finger event for unknown touch device {touch}, dropped");
                }
            }

            EventKind::MultiGesture {
                touch,
                rotation,
                pinch,
                x,
                y,
                fingers,
            } => hub.multi_gesture.emit(&GestureEvent {
                timestamp,
                touch,
                rotation,
                pinch,
                x,
                y,
                fingers,
            }),
            EventKind::DollarGesture {
                touch,
                gesture,
                fingers,
                error,
                x,
                y,
            } => hub.dollar_gesture.emit(&DollarGestureEvent {
                timestamp,
                touch,
                gesture,
                fingers,
                error,
                x,
                y,
            }),
            EventKind::DollarRecord { touch, gesture } => {
                hub.dollar_record.emit(&DollarRecordEvent {
                    timestamp,
                    touch,
                    gesture,
                });
            }

            EventKind::DropBegin { window } => hub.drop_begin.emit(&DropEvent {
                timestamp,
                window: self.window_for(window),
            }),
            EventKind::DropComplete { window } => hub.drop_complete.emit(&DropEvent {
                timestamp,
                window: self.window_for(window),
            }),
            EventKind::DropFile { window, path } => hub.file_dropped.emit(&DroppedEvent {
                timestamp,
                window: self.window_for(window),
                data: path,
            }),
            EventKind::DropText { window, text } => hub.text_dropped.emit(&DroppedEvent {
                timestamp,
                window: self.window_for(window),
                data: text,
            }),

            EventKind::SensorUpdate { sensor, data } => {
                if let Some(target) = self.ctx.sensors.get_existing(sensor) {
                    target.updated.emit(&SensorUpdateEvent { timestamp, data });
                } else {
                    trace!("sensor update for unknown handle {sensor}, dropped");
                }
            }

            EventKind::Unknown { code } => return Err(BindError::UnroutableEvent(code)),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;
    use std::sync::Mutex;
    use std::time::Duration;

    use crate::config::BindConfig;
    use crate::native::event::WindowDetail;
    use crate::native::fake::FakeDriver;
    use crate::Context;

    fn context() -> (Arc<FakeDriver>, Context) {
        let driver = Arc::new(FakeDriver::new());
        let ctx = Context::init(driver.clone(), &BindConfig::default()).unwrap();
        (driver, ctx)
    }

    #[test]
    fn test_immediate_pull_on_empty_queue_is_a_no_op() {
        let (_, ctx) = context();
        let mut pump = ctx.event_pump().unwrap();

        assert!(pump.pull(WaitPolicy::Immediate).unwrap());
    }

    #[test]
    fn test_blocking_pull_on_empty_queue_fails() {
        let (_, ctx) = context();
        let mut pump = ctx.event_pump().unwrap();

        assert!(matches!(
            pump.pull(WaitPolicy::Blocking),
            Err(BindError::EventWaitFailed(_))
        ));
        assert!(matches!(
            pump.pull(WaitPolicy::BoundedWait(Duration::from_millis(10))),
            Err(BindError::EventWaitFailed(_))
        ));
    }

    #[test]
    fn test_quit_is_a_one_way_latch() {
        let (driver, ctx) = context();
        let mut pump = ctx.event_pump().unwrap();
        let quits = Arc::new(AtomicUsize::new(0));
        {
            let quits = Arc::clone(&quits);
            ctx.events().quitting.connect(move |_| {
                quits.fetch_add(1, Ordering::SeqCst);
            });
        }

        driver.push(EventKind::Quit);
        assert!(!pump.pull(WaitPolicy::Immediate).unwrap());

        // Latched: no policy blocks or dispatches afterwards.
        driver.push(EventKind::ClipboardUpdate);
        assert!(!pump.pull(WaitPolicy::Immediate).unwrap());
        assert!(!pump.pull(WaitPolicy::Blocking).unwrap());
        assert_eq!(quits.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_window_event_routes_to_owning_window_only() {
        let (driver, ctx) = context();
        let mut pump = ctx.event_pump().unwrap();

        let first = ctx.open_window("first", 640, 480).unwrap();
        let second = ctx.open_window("second", 640, 480).unwrap();

        let hits = Arc::new(Mutex::new(Vec::new()));
        for (tag, window) in [("first", &first), ("second", &second)] {
            let hits = Arc::clone(&hits);
            window.events.connect(move |event| {
                hits.lock().unwrap().push((tag, event.detail));
            });
        }

        driver.push(EventKind::Window {
            window: first.handle().unwrap(),
            detail: WindowDetail::Resized {
                width: 800,
                height: 600,
            },
        });
        assert!(pump.pull(WaitPolicy::Immediate).unwrap());

        assert_eq!(
            *hits.lock().unwrap(),
            vec![(
                "first",
                WindowDetail::Resized {
                    width: 800,
                    height: 600
                }
            )]
        );
    }

    #[test]
    fn test_event_for_unopened_joystick_is_dropped_silently() {
        let (driver, ctx) = context();
        let mut pump = ctx.event_pump().unwrap();

        driver.push(EventKind::JoystickButtonDown {
            joystick: RawHandle::new(0x2000),
            button: 3,
        });

        assert!(pump.pull(WaitPolicy::Immediate).unwrap());
    }

    #[test]
    fn test_device_added_fires_hub_without_registering_a_wrapper() {
        let (driver, ctx) = context();
        let mut pump = ctx.event_pump().unwrap();

        let seen = Arc::new(Mutex::new(Vec::new()));
        {
            let seen = Arc::clone(&seen);
            ctx.events().joystick_added.connect(move |event| {
                seen.lock().unwrap().push(event.index);
            });
        }

        driver.push(EventKind::JoystickAdded { index: 2 });
        assert!(pump.pull(WaitPolicy::Immediate).unwrap());

        assert_eq!(*seen.lock().unwrap(), vec![2]);
        assert!(ctx.joysticks().is_empty());
    }

    #[test]
    fn test_joystick_removal_notifies_then_evicts() {
        let (driver, ctx) = context();
        let mut pump = ctx.event_pump().unwrap();

        driver.set_devices(DeviceClass::Joystick, &["pad"]);
        let joystick = ctx.open_joystick(0).unwrap();
        let handle = joystick.handle().unwrap();

        let removals = Arc::new(AtomicUsize::new(0));
        {
            let removals = Arc::clone(&removals);
            joystick.removed.connect(move |_| {
                removals.fetch_add(1, Ordering::SeqCst);
            });
        }

        driver.push(EventKind::JoystickRemoved { joystick: handle });
        assert!(pump.pull(WaitPolicy::Immediate).unwrap());

        assert_eq!(removals.load(Ordering::SeqCst), 1);
        assert!(joystick.is_released());
        assert!(ctx.joysticks().get_existing(handle).is_none());
        // The native resource is already gone; no destroy call was made.
        assert!(driver.destroyed().is_empty());
    }

    #[test]
    fn test_drop_event_with_null_window_resolves_to_no_target() {
        let (driver, ctx) = context();
        let mut pump = ctx.event_pump().unwrap();

        let seen = Arc::new(Mutex::new(Vec::new()));
        {
            let seen = Arc::clone(&seen);
            ctx.events().file_dropped.connect(move |event| {
                seen.lock()
                    .unwrap()
                    .push((event.window.is_none(), event.data.clone()));
            });
        }

        driver.push(EventKind::DropFile {
            window: RawHandle::NULL,
            path: "/tmp/drop.txt".to_string(),
        });
        assert!(pump.pull(WaitPolicy::Immediate).unwrap());

        assert_eq!(
            *seen.lock().unwrap(),
            vec![(true, "/tmp/drop.txt".to_string())]
        );
    }

    #[test]
    fn test_keyboard_payload_is_enriched_with_resolved_window() {
        let (driver, ctx) = context();
        let mut pump = ctx.event_pump().unwrap();
        let window = ctx.open_window("main", 640, 480).unwrap();

        let seen = Arc::new(Mutex::new(Vec::new()));
        {
            let seen = Arc::clone(&seen);
            ctx.events().key_down.connect(move |event| {
                seen.lock().unwrap().push(event.window.clone());
            });
        }

        driver.push(EventKind::KeyDown {
            window: window.handle().unwrap(),
            keycode: crate::native::event::Keycode(27),
            scancode: crate::native::event::Scancode(41),
            mods: crate::native::event::KeyMods::empty(),
            repeat: false,
        });
        assert!(pump.pull(WaitPolicy::Immediate).unwrap());

        let seen = seen.lock().unwrap();
        assert!(Arc::ptr_eq(seen[0].as_ref().unwrap(), &window));
    }

    #[test]
    fn test_display_event_enriches_payload_by_index() {
        let (driver, ctx) = context();
        let mut pump = ctx.event_pump().unwrap();
        driver.set_devices(DeviceClass::Display, &["primary", "secondary"]);

        let seen = Arc::new(Mutex::new(Vec::new()));
        {
            let seen = Arc::clone(&seen);
            ctx.events().display_changed.connect(move |event| {
                seen.lock()
                    .unwrap()
                    .push((event.index, event.info.clone().map(|info| info.name)));
            });
        }

        driver.push(EventKind::Display {
            index: 1,
            change: crate::native::event::DisplayChange::Connected,
        });
        assert!(pump.pull(WaitPolicy::Immediate).unwrap());

        assert_eq!(
            *seen.lock().unwrap(),
            vec![(1, Some("secondary".to_string()))]
        );
    }

    #[test]
    #[allow(clippy::too_many_lines)]
    fn test_every_discriminant_routes_to_exactly_one_notification() {
        use crate::native::event::{
            ControllerAxis, ControllerButton, DisplayChange, HatState, KeyMods, Keycode,
            MouseButton, MouseButtons, Scancode, WindowDetail,
        };

        let (driver, ctx) = context();
        let mut pump = ctx.event_pump().unwrap();

        driver.set_devices(DeviceClass::Joystick, &["pad"]);
        driver.set_devices(DeviceClass::GameController, &["pad"]);
        driver.set_devices(DeviceClass::AudioPlayback, &["speakers"]);
        driver.set_devices(DeviceClass::Sensor, &["accelerometer"]);
        driver.set_devices(DeviceClass::Touch, &["screen"]);

        let window = ctx.open_window("main", 640, 480).unwrap();
        let joystick = ctx.open_joystick(0).unwrap();
        let controller = ctx.open_game_controller(0).unwrap();
        let audio = ctx.open_audio_device(0, false).unwrap();
        let sensor = ctx.open_sensor(0).unwrap();
        let touch = ctx.open_touch_device(0).unwrap();

        let win = window.handle().unwrap();
        let joy = joystick.handle().unwrap();
        let pad = controller.handle().unwrap();
        let dev = audio.handle().unwrap();
        let sen = sensor.handle().unwrap();
        let tap = touch.handle().unwrap();

        let hits = Arc::new(AtomicUsize::new(0));
        macro_rules! count {
            ($($signal:expr),+ $(,)?) => {
                $({
                    let hits = Arc::clone(&hits);
                    $signal.connect(move |_| {
                        hits.fetch_add(1, Ordering::SeqCst);
                    });
                })+
            };
        }

        let hub = ctx.events();
        count!(
            hub.quitting,
            hub.app_terminating,
            hub.app_low_memory,
            hub.app_will_enter_background,
            hub.app_did_enter_background,
            hub.app_will_enter_foreground,
            hub.app_did_enter_foreground,
            hub.clipboard_updated,
            hub.keymap_changed,
            hub.key_down,
            hub.key_up,
            hub.text_input,
            hub.text_editing,
            hub.mouse_motion,
            hub.mouse_button_down,
            hub.mouse_button_up,
            hub.mouse_wheel,
            hub.drop_begin,
            hub.drop_complete,
            hub.file_dropped,
            hub.text_dropped,
            hub.joystick_added,
            hub.controller_added,
            hub.audio_device_added,
            hub.display_changed,
            hub.render_device_reset,
            hub.render_targets_reset,
            hub.system_window_message,
            hub.multi_gesture,
            hub.dollar_gesture,
            hub.dollar_record,
            window.events,
            joystick.axis_motion,
            joystick.ball_motion,
            joystick.hat_motion,
            joystick.button_down,
            joystick.button_up,
            joystick.removed,
            controller.axis_motion,
            controller.button_down,
            controller.button_up,
            controller.remapped,
            controller.removed,
            audio.removed,
            sensor.updated,
            touch.finger_down,
            touch.finger_up,
            touch.finger_motion,
        );

        // Removals evict their wrapper, so they come after the other
        // events addressed to it; quit latches the pump and goes last.
        let events = vec![
            EventKind::AppTerminating,
            EventKind::AppLowMemory,
            EventKind::AppWillEnterBackground,
            EventKind::AppDidEnterBackground,
            EventKind::AppWillEnterForeground,
            EventKind::AppDidEnterForeground,
            EventKind::Display {
                index: 0,
                change: DisplayChange::Moved,
            },
            EventKind::RenderDeviceReset,
            EventKind::RenderTargetsReset,
            EventKind::Window {
                window: win,
                detail: WindowDetail::FocusGained,
            },
            EventKind::SystemWindowMessage { message: 7 },
            EventKind::KeyDown {
                window: win,
                keycode: Keycode(13),
                scancode: Scancode(40),
                mods: KeyMods::SHIFT,
                repeat: false,
            },
            EventKind::KeyUp {
                window: win,
                keycode: Keycode(13),
                scancode: Scancode(40),
                mods: KeyMods::empty(),
                repeat: false,
            },
            EventKind::TextEditing {
                window: win,
                text: "ab".to_string(),
                start: 0,
                length: 2,
            },
            EventKind::TextInput {
                window: win,
                text: "a".to_string(),
            },
            EventKind::KeymapChanged,
            EventKind::MouseMotion {
                window: win,
                mouse: 0,
                state: MouseButtons::LEFT,
                x: 10,
                y: 10,
                dx: 1,
                dy: 1,
            },
            EventKind::MouseButtonDown {
                window: win,
                mouse: 0,
                button: MouseButton::Left,
                clicks: 1,
                x: 10,
                y: 10,
            },
            EventKind::MouseButtonUp {
                window: win,
                mouse: 0,
                button: MouseButton::Left,
                clicks: 1,
                x: 10,
                y: 10,
            },
            EventKind::MouseWheel {
                window: win,
                mouse: 0,
                dx: 0,
                dy: 1,
                flipped: false,
            },
            EventKind::JoystickAxisMotion {
                joystick: joy,
                axis: 0,
                value: 1000,
            },
            EventKind::JoystickBallMotion {
                joystick: joy,
                ball: 0,
                dx: 1,
                dy: -1,
            },
            EventKind::JoystickHatMotion {
                joystick: joy,
                hat: 0,
                state: HatState::UP,
            },
            EventKind::JoystickButtonDown {
                joystick: joy,
                button: 0,
            },
            EventKind::JoystickButtonUp {
                joystick: joy,
                button: 0,
            },
            EventKind::JoystickAdded { index: 0 },
            EventKind::ControllerAxisMotion {
                controller: pad,
                axis: ControllerAxis::LeftX,
                value: 5,
            },
            EventKind::ControllerButtonDown {
                controller: pad,
                button: ControllerButton::A,
            },
            EventKind::ControllerButtonUp {
                controller: pad,
                button: ControllerButton::A,
            },
            EventKind::ControllerAdded { index: 0 },
            EventKind::ControllerRemapped { controller: pad },
            EventKind::AudioDeviceAdded {
                index: 0,
                capture: false,
            },
            EventKind::FingerDown {
                touch: tap,
                finger: 1,
                x: 0.5,
                y: 0.5,
                dx: 0.0,
                dy: 0.0,
                pressure: 1.0,
            },
            EventKind::FingerUp {
                touch: tap,
                finger: 1,
                x: 0.5,
                y: 0.5,
                dx: 0.0,
                dy: 0.0,
                pressure: 0.0,
            },
            EventKind::FingerMotion {
                touch: tap,
                finger: 1,
                x: 0.6,
                y: 0.6,
                dx: 0.1,
                dy: 0.1,
                pressure: 1.0,
            },
            EventKind::MultiGesture {
                touch: tap,
                rotation: 0.1,
                pinch: 0.2,
                x: 0.5,
                y: 0.5,
                fingers: 2,
            },
            EventKind::DollarGesture {
                touch: tap,
                gesture: 9,
                fingers: 1,
                error: 0.01,
                x: 0.5,
                y: 0.5,
            },
            EventKind::DollarRecord {
                touch: tap,
                gesture: 9,
            },
            EventKind::DropBegin { window: win },
            EventKind::DropFile {
                window: win,
                path: "/tmp/drop.txt".to_string(),
            },
            EventKind::DropText {
                window: win,
                text: "dropped".to_string(),
            },
            EventKind::DropComplete { window: win },
            EventKind::SensorUpdate {
                sensor: sen,
                data: [0.0; 6],
            },
            EventKind::ClipboardUpdate,
            EventKind::JoystickRemoved { joystick: joy },
            EventKind::ControllerRemoved { controller: pad },
            EventKind::AudioDeviceRemoved {
                device: dev,
                capture: false,
            },
            EventKind::Quit,
        ];

        for (dispatched, kind) in events.into_iter().enumerate() {
            driver.push(kind);
            let _ = pump.pull(WaitPolicy::Immediate).unwrap();
            assert_eq!(
                hits.load(Ordering::SeqCst),
                dispatched + 1,
                "event {dispatched} must fire exactly one notification"
            );
        }
    }

    #[test]
    fn test_unknown_discriminant_is_fatal() {
        let (driver, ctx) = context();
        let mut pump = ctx.event_pump().unwrap();

        driver.push(EventKind::Unknown { code: 0x9001 });
        assert!(matches!(
            pump.pull(WaitPolicy::Immediate),
            Err(BindError::UnroutableEvent(0x9001))
        ));
    }

    #[test]
    fn test_system_window_message_bypasses_window_resolution() {
        let (driver, ctx) = context();
        let mut pump = ctx.event_pump().unwrap();

        let messages = Arc::new(Mutex::new(Vec::new()));
        {
            let messages = Arc::clone(&messages);
            ctx.events().system_window_message.connect(move |event| {
                messages.lock().unwrap().push(event.message);
            });
        }

        driver.push(EventKind::SystemWindowMessage { message: 0x0401 });
        assert!(pump.pull(WaitPolicy::Immediate).unwrap());

        assert_eq!(*messages.lock().unwrap(), vec![0x0401]);
    }
}
