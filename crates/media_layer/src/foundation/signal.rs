//! Typed synchronous notification slots
//!
//! A [`Signal`] is a list of subscribers invoked in registration order on
//! the thread that emits. Delivery is synchronous; the handler list is
//! detached from the lock for the duration of a delivery, so a handler may
//! register new handlers on its own signal. Handlers registered during a
//! delivery fire from the next emission onward.

use std::sync::{Mutex, PoisonError};

type Handler<T> = Box<dyn FnMut(&T) + Send>;

/// A typed notification point with synchronous delivery
pub struct Signal<T> {
    handlers: Mutex<Vec<Handler<T>>>,
}

impl<T> Default for Signal<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Signal<T> {
    /// Create a signal with no subscribers
    pub fn new() -> Self {
        Self {
            handlers: Mutex::new(Vec::new()),
        }
    }

    /// Register a handler; handlers fire in registration order
    pub fn connect(&self, handler: impl FnMut(&T) + Send + 'static) {
        self.lock().push(Box::new(handler));
    }

    /// Invoke every registered handler with the payload
    ///
    /// Handlers registered while the delivery is running are appended
    /// after the detached list and fire from the next emission onward.
    pub fn emit(&self, payload: &T) {
        let mut running = std::mem::take(&mut *self.lock());
        for handler in running.iter_mut() {
            handler(payload);
        }

        let mut handlers = self.lock();
        let late = std::mem::replace(&mut *handlers, running);
        handlers.extend(late);
    }

    /// Drop all registered handlers
    pub fn clear(&self) {
        self.lock().clear();
    }

    /// Number of registered handlers
    pub fn handler_count(&self) -> usize {
        self.lock().len()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Handler<T>>> {
        self.handlers.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
