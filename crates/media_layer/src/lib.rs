//! Resource identity and event dispatch over a native multimedia library
//!
//! The native layer exposes windows and input/audio devices as opaque
//! handles and reports everything that happens through a single event
//! queue. This crate supplies the layer between raw native access and an
//! application: one canonical wrapper per live handle, lazy views over the
//! native device enumerations, and a single-consumer pump that classifies
//! each event and delivers it to a typed notification on the owning
//! resource or on the process-wide [`events::EventHub`].
//!
//! Native access goes through the [`native::NativeDriver`] trait, so the
//! whole core runs against a real backend or an in-memory test double.
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use media_layer::native::{NativeDriver, WaitPolicy};
//! use media_layer::{BindConfig, BindResult, Context};
//!
//! fn run(driver: Arc<dyn NativeDriver>) -> BindResult<()> {
//!     let ctx = Context::init(driver, &BindConfig::default())?;
//!
//!     let window = ctx.open_window("demo", 1280, 720)?;
//!     window.events.connect(|event| {
//!         println!("window event: {:?}", event.detail);
//!     });
//!     ctx.events().quitting.connect(|_| {
//!         println!("quit requested");
//!     });
//!
//!     let mut pump = ctx.event_pump()?;
//!     while pump.pull(WaitPolicy::Immediate)? {
//!         // frame work
//!     }
//!
//!     ctx.windows().release(&window).ok();
//!     Ok(())
//! }
//! ```

pub mod audio;
pub mod config;
pub mod context;
pub mod error;
pub mod events;
pub mod foundation;
pub mod haptic;
pub mod input;
pub mod native;
pub mod registry;
pub mod sensor;
pub mod video;

pub use config::{BindConfig, LogConfig, SubsystemConfig};
pub use context::Context;
pub use error::{BindError, BindResult};

/// Convenience re-exports for applications driving the binding layer
pub mod prelude {
    pub use crate::audio::AudioDevice;
    pub use crate::config::BindConfig;
    pub use crate::context::Context;
    pub use crate::error::{BindError, BindResult};
    pub use crate::events::{EventHub, EventPump};
    pub use crate::haptic::Haptic;
    pub use crate::input::{GameController, Joystick, TouchDevice};
    pub use crate::native::{DeviceClass, NativeDriver, RawHandle, WaitPolicy};
    pub use crate::registry::{HandleRegistry, LazyCollection};
    pub use crate::sensor::Sensor;
    pub use crate::video::Window;
}
