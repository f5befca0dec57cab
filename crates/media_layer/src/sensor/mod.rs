//! Hardware sensors

use std::sync::Arc;

use crate::error::BindResult;
use crate::foundation::Signal;
use crate::native::{NativeDriver, RawHandle, ResourceCategory};
use crate::registry::handle::{impl_handle_identity, HandleResource, ResourceCore};

/// Sensor data payload
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SensorUpdateEvent {
    /// Milliseconds since native library initialization
    pub timestamp: u32,
    /// Up to six data values, sensor-type dependent
    pub data: [f32; 6],
}

/// An opened hardware sensor
pub struct Sensor {
    core: ResourceCore,
    /// Fires when the sensor reports new data
    pub updated: Signal<SensorUpdateEvent>,
}

impl Sensor {
    /// The native handle, for passing to forwarding layers
    pub fn handle(&self) -> BindResult<RawHandle> {
        self.core.handle()
    }

    /// Whether this sensor has been released
    pub fn is_released(&self) -> bool {
        self.core.is_released()
    }
}

impl HandleResource for Sensor {
    const CATEGORY: ResourceCategory = ResourceCategory::Sensor;

    fn adopt(driver: Arc<dyn NativeDriver>, handle: RawHandle) -> Self {
        Self {
            core: ResourceCore::new(driver, Self::CATEGORY, handle),
            updated: Signal::new(),
        }
    }

    fn core(&self) -> &ResourceCore {
        &self.core
    }
}

impl_handle_identity!(Sensor);
