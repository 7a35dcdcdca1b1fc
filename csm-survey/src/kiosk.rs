//! The durable kiosk flag and its cross-context change notification.
//!
//! The kiosk flag lives in an external key-value store shared by every open
//! context; the channel is a best-effort, payload-free broadcast telling
//! subscribed listeners that the flag changed. Delivery is fire-and-forget:
//! at-least-once to listeners currently subscribed, no acknowledgment.

use std::cell::RefCell;
use std::fmt;

/// Read/write surface for the durable kiosk flag.
///
/// Implementations only need read-after-write visibility within one context;
/// cross-context visibility is signalled through [`KioskChannel`].
pub trait KioskStateStore {
    /// Current value of the durable flag (false when unset).
    fn get(&self) -> bool;

    /// Persist the flag.
    fn set(&mut self, enabled: bool);

    /// Remove the entry entirely, leaving the flag unset.
    fn clear(&mut self);
}

/// In-memory store for tests and single-process hosts.
///
/// Sharing one instance between several controllers (via `Rc<RefCell<..>>`)
/// models several contexts observing the same durable store.
#[derive(Debug, Clone, Default)]
pub struct MemoryKioskStore {
    enabled: bool,
}

impl MemoryKioskStore {
    /// Create a store with the flag unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store with an initial flag value.
    pub fn with_flag(enabled: bool) -> Self {
        Self { enabled }
    }
}

impl KioskStateStore for MemoryKioskStore {
    fn get(&self) -> bool {
        self.enabled
    }

    fn set(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    fn clear(&mut self) {
        self.enabled = false;
    }
}

/// Payload-free broadcast of kiosk flag changes.
///
/// Listeners must re-read the store themselves; the notification only says
/// "the flag changed". Listeners must not subscribe or trigger another
/// notification from inside their callback.
#[derive(Default)]
pub struct KioskChannel {
    listeners: RefCell<Vec<Box<dyn Fn()>>>,
}

impl KioskChannel {
    /// Create a channel with no listeners.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener invoked on every notification.
    pub fn subscribe(&self, listener: impl Fn() + 'static) {
        self.listeners.borrow_mut().push(Box::new(listener));
    }

    /// Notify every currently subscribed listener that the flag changed.
    pub fn notify(&self) {
        for listener in self.listeners.borrow().iter() {
            listener();
        }
    }
}

impl fmt::Debug for KioskChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KioskChannel")
            .field("listeners", &self.listeners.borrow().len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;

    #[test]
    fn store_read_after_write() {
        let mut store = MemoryKioskStore::new();
        assert!(!store.get());
        store.set(true);
        assert!(store.get());
        store.clear();
        assert!(!store.get());
    }

    #[test]
    fn notify_reaches_every_listener() {
        let channel = KioskChannel::new();
        let delivered = Rc::new(Cell::new(0));
        for _ in 0..3 {
            let delivered = Rc::clone(&delivered);
            channel.subscribe(move || delivered.set(delivered.get() + 1));
        }
        channel.notify();
        assert_eq!(delivered.get(), 3);
    }

    #[test]
    fn notify_without_listeners_is_harmless() {
        KioskChannel::new().notify();
    }
}
