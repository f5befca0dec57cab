//! Binding context: driver, registries, hub, and pump hand-out
//!
//! One context owns everything that was process-wide static in older
//! binding generations. All handles to it are cheap clones of one shared
//! inner state, so resources opened through any clone resolve through the
//! same registries and notify through the same hub.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use log::{debug, info};

use crate::audio::AudioDevice;
use crate::config::BindConfig;
use crate::error::{BindError, BindResult};
use crate::events::{EventHub, EventPump};
use crate::foundation::logging;
use crate::haptic::Haptic;
use crate::input::{GameController, Joystick, TouchDevice};
use crate::native::{
    DeviceClass, DeviceInfo, NativeDriver, OpenRequest, ResourceCategory, Subsystems,
};
use crate::registry::{HandleRegistry, LazyCollection};
use crate::sensor::Sensor;
use crate::video::Window;

pub(crate) struct ContextInner {
    pub(crate) driver: Arc<dyn NativeDriver>,
    pub(crate) subsystems: Subsystems,
    pub(crate) windows: HandleRegistry<Window>,
    pub(crate) joysticks: HandleRegistry<Joystick>,
    pub(crate) controllers: HandleRegistry<GameController>,
    pub(crate) haptics: HandleRegistry<Haptic>,
    pub(crate) audio_devices: HandleRegistry<AudioDevice>,
    pub(crate) sensors: HandleRegistry<Sensor>,
    pub(crate) touch_devices: HandleRegistry<TouchDevice>,
    pub(crate) hub: EventHub,
    pub(crate) quit_latched: AtomicBool,
    pump_taken: AtomicBool,
}

impl Drop for ContextInner {
    fn drop(&mut self) {
        debug!("shutting down native subsystems {:?}", self.subsystems);
        self.driver.shutdown();
    }
}

/// Handle to the identity and dispatch core
///
/// Cloning is cheap and shares state; the context shuts the native layer
/// down when the last clone is dropped.
#[derive(Clone)]
pub struct Context {
    inner: Arc<ContextInner>,
}

impl Context {
    /// Initialize the native layer and build an empty context
    ///
    /// When the configuration carries a log filter it is applied here;
    /// otherwise logging setup is left to the application (typically
    /// [`crate::foundation::logging::init`]).
    pub fn init(driver: Arc<dyn NativeDriver>, config: &BindConfig) -> BindResult<Self> {
        if let Some(filter) = &config.logging.filter {
            logging::init_with_filter(filter);
        }

        let subsystems = config.subsystems.mask();
        driver.init(subsystems)?;
        info!("native layer initialized with {subsystems:?}");

        Ok(Self {
            inner: Arc::new(ContextInner {
                windows: HandleRegistry::new(Arc::clone(&driver)),
                joysticks: HandleRegistry::new(Arc::clone(&driver)),
                controllers: HandleRegistry::new(Arc::clone(&driver)),
                haptics: HandleRegistry::new(Arc::clone(&driver)),
                audio_devices: HandleRegistry::new(Arc::clone(&driver)),
                sensors: HandleRegistry::new(Arc::clone(&driver)),
                touch_devices: HandleRegistry::new(Arc::clone(&driver)),
                hub: EventHub::default(),
                quit_latched: AtomicBool::new(false),
                pump_taken: AtomicBool::new(false),
                driver,
                subsystems,
            }),
        })
    }

    /// Create a native window and register its canonical wrapper
    pub fn open_window(&self, title: &str, width: u32, height: u32) -> BindResult<Arc<Window>> {
        let handle = self.inner.driver.open(
            ResourceCategory::Window,
            OpenRequest::Window {
                title,
                width,
                height,
            },
        )?;
        self.inner.windows.get_or_adopt(handle)
    }

    /// Open the joystick at `index` in the joystick enumeration
    pub fn open_joystick(&self, index: usize) -> BindResult<Arc<Joystick>> {
        let handle = self.inner.driver.open(
            ResourceCategory::Joystick,
            OpenRequest::Device {
                class: DeviceClass::Joystick,
                index,
            },
        )?;
        self.inner.joysticks.get_or_adopt(handle)
    }

    /// Open the game controller at `index` in the controller enumeration
    pub fn open_game_controller(&self, index: usize) -> BindResult<Arc<GameController>> {
        let handle = self.inner.driver.open(
            ResourceCategory::GameController,
            OpenRequest::Device {
                class: DeviceClass::GameController,
                index,
            },
        )?;
        self.inner.controllers.get_or_adopt(handle)
    }

    /// Open the haptic device at `index` in the haptic enumeration
    pub fn open_haptic(&self, index: usize) -> BindResult<Arc<Haptic>> {
        let handle = self.inner.driver.open(
            ResourceCategory::Haptic,
            OpenRequest::Device {
                class: DeviceClass::Haptic,
                index,
            },
        )?;
        self.inner.haptics.get_or_adopt(handle)
    }

    /// Open the audio playback or capture device at `index`
    pub fn open_audio_device(&self, index: usize, capture: bool) -> BindResult<Arc<AudioDevice>> {
        let class = if capture {
            DeviceClass::AudioCapture
        } else {
            DeviceClass::AudioPlayback
        };
        let handle = self.inner.driver.open(
            ResourceCategory::AudioDevice,
            OpenRequest::Device { class, index },
        )?;
        self.inner.audio_devices.get_or_adopt(handle)
    }

    /// Open the sensor at `index` in the sensor enumeration
    pub fn open_sensor(&self, index: usize) -> BindResult<Arc<Sensor>> {
        let handle = self.inner.driver.open(
            ResourceCategory::Sensor,
            OpenRequest::Device {
                class: DeviceClass::Sensor,
                index,
            },
        )?;
        self.inner.sensors.get_or_adopt(handle)
    }

    /// Open the touch device at `index` in the touch enumeration
    pub fn open_touch_device(&self, index: usize) -> BindResult<Arc<TouchDevice>> {
        let handle = self.inner.driver.open(
            ResourceCategory::TouchDevice,
            OpenRequest::Device {
                class: DeviceClass::Touch,
                index,
            },
        )?;
        self.inner.touch_devices.get_or_adopt(handle)
    }

    /// The window registry
    pub fn windows(&self) -> &HandleRegistry<Window> {
        &self.inner.windows
    }

    /// The joystick registry
    pub fn joysticks(&self) -> &HandleRegistry<Joystick> {
        &self.inner.joysticks
    }

    /// The game controller registry
    pub fn game_controllers(&self) -> &HandleRegistry<GameController> {
        &self.inner.controllers
    }

    /// The haptic device registry
    pub fn haptics(&self) -> &HandleRegistry<Haptic> {
        &self.inner.haptics
    }

    /// The audio device registry
    pub fn audio_devices(&self) -> &HandleRegistry<AudioDevice> {
        &self.inner.audio_devices
    }

    /// The sensor registry
    pub fn sensors(&self) -> &HandleRegistry<Sensor> {
        &self.inner.sensors
    }

    /// The touch device registry
    pub fn touch_devices(&self) -> &HandleRegistry<TouchDevice> {
        &self.inner.touch_devices
    }

    /// A lazy view over the native enumeration for `class`
    ///
    /// The count is re-queried on every access; call
    /// [`LazyCollection::refresh`] after a device-change event to drop
    /// stale cached descriptions.
    pub fn devices(&self, class: DeviceClass) -> LazyCollection<DeviceInfo> {
        let count_driver = Arc::clone(&self.inner.driver);
        let fetch_driver = Arc::clone(&self.inner.driver);
        LazyCollection::new(
            move || count_driver.device_count(class),
            move |index| fetch_driver.device_info(class, index),
        )
    }

    /// The process-wide notification hub
    pub fn events(&self) -> &EventHub {
        &self.inner.hub
    }

    /// Hand out the single event pump
    ///
    /// Fails with [`BindError::PumpInUse`] on every call after the first;
    /// dispatch is single-consumer by construction.
    pub fn event_pump(&self) -> BindResult<EventPump> {
        if self.inner.pump_taken.swap(true, Ordering::SeqCst) {
            return Err(BindError::PumpInUse);
        }
        Ok(EventPump::new(Arc::clone(&self.inner)))
    }

    /// Whether a quit event has been dispatched
    pub fn quit_latched(&self) -> bool {
        self.inner.quit_latched.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::native::fake::FakeDriver;

    fn context() -> (Arc<FakeDriver>, Context) {
        let driver = Arc::new(FakeDriver::new());
        let ctx = Context::init(driver.clone(), &BindConfig::default()).unwrap();
        (driver, ctx)
    }

    #[test]
    fn test_init_forwards_configured_mask() {
        let (driver, _ctx) = context();
        assert_eq!(
            driver.initialized(),
            Some(Subsystems::AUDIO | Subsystems::VIDEO | Subsystems::EVENTS)
        );
    }

    #[test]
    fn test_init_applies_configured_log_filter() {
        let driver = Arc::new(FakeDriver::new());
        let config = BindConfig {
            logging: crate::config::LogConfig {
                filter: Some("warn".to_string()),
            },
            ..BindConfig::default()
        };

        let _ctx = Context::init(driver, &config).unwrap();

        // The only logger initialization in the test binary happens here.
        assert_eq!(log::max_level(), log::LevelFilter::Warn);
    }

    #[test]
    fn test_open_window_registers_canonical_wrapper() {
        let (driver, ctx) = context();

        let window = ctx.open_window("main", 640, 480).unwrap();
        let handle = window.handle().unwrap();

        assert_eq!(driver.opened(), vec![(ResourceCategory::Window, handle)]);
        assert!(Arc::ptr_eq(
            &ctx.windows().get_existing(handle).unwrap(),
            &window
        ));
    }

    #[test]
    fn test_open_device_with_stale_index_fails() {
        let (driver, ctx) = context();
        driver.set_devices(DeviceClass::Joystick, &["pad"]);

        assert!(ctx.open_joystick(0).is_ok());
        assert!(matches!(
            ctx.open_joystick(1),
            Err(BindError::IndexOutOfRange { index: 1, count: 1 })
        ));
    }

    #[test]
    fn test_device_enumeration_reflects_hot_plug() {
        let (driver, ctx) = context();
        driver.set_devices(DeviceClass::AudioDecoder, &["wav", "flac"]);

        let decoders = ctx.devices(DeviceClass::AudioDecoder);
        assert_eq!(decoders.count(), 2);
        assert_eq!(decoders.at(1).unwrap().name, "flac");

        driver.set_devices(DeviceClass::AudioDecoder, &["wav", "flac", "ogg"]);
        assert_eq!(decoders.count(), 3);
        assert_eq!(decoders.at(2).unwrap().name, "ogg");
    }

    #[test]
    fn test_pump_is_handed_out_once() {
        let (_, ctx) = context();

        let _pump = ctx.event_pump().unwrap();
        assert!(matches!(ctx.event_pump(), Err(BindError::PumpInUse)));

        let clone = ctx.clone();
        assert!(matches!(clone.event_pump(), Err(BindError::PumpInUse)));
    }

    #[test]
    fn test_shutdown_runs_when_last_clone_drops() {
        let (driver, ctx) = context();
        let clone = ctx.clone();

        drop(ctx);
        assert_eq!(driver.shutdown_calls(), 0);
        drop(clone);
        assert_eq!(driver.shutdown_calls(), 1);
    }
}
