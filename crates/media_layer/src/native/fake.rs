//! In-memory native driver used by the unit tests
//!
//! Scripted queue of events, adjustable device tables, and call recording
//! for open/destroy so tests can assert destroy-exactly-once.

use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicU32, AtomicU64, AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};

use crate::error::{BindError, BindResult};
use crate::native::event::{EventKind, NativeEvent};
use crate::native::{
    DeviceClass, DeviceInfo, NativeDriver, OpenRequest, RawHandle, ResourceCategory, Subsystems,
    WaitPolicy,
};

pub(crate) struct FakeDriver {
    queue: Mutex<VecDeque<NativeEvent>>,
    devices: Mutex<HashMap<DeviceClass, Vec<String>>>,
    next_handle: AtomicU64,
    next_timestamp: AtomicU32,
    opened: Mutex<Vec<(ResourceCategory, RawHandle)>>,
    destroyed: Mutex<Vec<(ResourceCategory, RawHandle)>>,
    initialized: Mutex<Option<Subsystems>>,
    shutdown_calls: AtomicUsize,
}

impl FakeDriver {
    pub(crate) fn new() -> Self {
        Self {
            queue: Mutex::new(VecDeque::new()),
            devices: Mutex::new(HashMap::new()),
            next_handle: AtomicU64::new(0x1000),
            next_timestamp: AtomicU32::new(1),
            opened: Mutex::new(Vec::new()),
            destroyed: Mutex::new(Vec::new()),
            initialized: Mutex::new(None),
            shutdown_calls: AtomicUsize::new(0),
        }
    }

    /// Queue an event with an auto-assigned timestamp.
    pub(crate) fn push(&self, kind: EventKind) {
        let timestamp = self.next_timestamp.fetch_add(1, Ordering::SeqCst);
        lock(&self.queue).push_back(NativeEvent { timestamp, kind });
    }

    pub(crate) fn set_devices(&self, class: DeviceClass, names: &[&str]) {
        lock(&self.devices).insert(class, names.iter().map(ToString::to_string).collect());
    }

    pub(crate) fn destroyed(&self) -> Vec<(ResourceCategory, RawHandle)> {
        lock(&self.destroyed).clone()
    }

    pub(crate) fn opened(&self) -> Vec<(ResourceCategory, RawHandle)> {
        lock(&self.opened).clone()
    }

    pub(crate) fn initialized(&self) -> Option<Subsystems> {
        *lock(&self.initialized)
    }

    pub(crate) fn shutdown_calls(&self) -> usize {
        self.shutdown_calls.load(Ordering::SeqCst)
    }
}

fn lock<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl NativeDriver for FakeDriver {
    fn init(&self, subsystems: Subsystems) -> BindResult<()> {
        *lock(&self.initialized) = Some(subsystems);
        Ok(())
    }

    fn shutdown(&self) {
        self.shutdown_calls.fetch_add(1, Ordering::SeqCst);
    }

    fn open(&self, category: ResourceCategory, request: OpenRequest<'_>) -> BindResult<RawHandle> {
        if let OpenRequest::Device { class, index } = request {
            let count = self.device_count(class);
            if index >= count {
                return Err(BindError::IndexOutOfRange { index, count });
            }
        }
        let handle = RawHandle::new(self.next_handle.fetch_add(0x10, Ordering::SeqCst));
        lock(&self.opened).push((category, handle));
        Ok(handle)
    }

    fn destroy(&self, category: ResourceCategory, handle: RawHandle) {
        lock(&self.destroyed).push((category, handle));
    }

    fn next_event(&self, policy: WaitPolicy) -> BindResult<Option<NativeEvent>> {
        match lock(&self.queue).pop_front() {
            Some(event) => Ok(Some(event)),
            None => match policy {
                WaitPolicy::Immediate => Ok(None),
                WaitPolicy::Blocking | WaitPolicy::BoundedWait(_) => Err(
                    BindError::EventWaitFailed("no event available in fake queue".to_string()),
                ),
            },
        }
    }

    fn device_count(&self, class: DeviceClass) -> usize {
        lock(&self.devices).get(&class).map_or(0, Vec::len)
    }

    fn device_info(&self, class: DeviceClass, index: usize) -> BindResult<DeviceInfo> {
        let devices = lock(&self.devices);
        let names = devices.get(&class).map_or(&[] as &[String], Vec::as_slice);
        names
            .get(index)
            .map(|name| DeviceInfo {
                class,
                index,
                name: name.clone(),
            })
            .ok_or(BindError::IndexOutOfRange {
                index,
                count: names.len(),
            })
    }
}
