use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use once_cell::sync::Lazy;

use crate::lock::{LockError, ReentrantLock};

static MONITORS: Lazy<MonitorRegistry> = Lazy::new(MonitorRegistry::new);

/// Process-wide table mapping a token's address to its monitor.
///
/// A slot exists only while at least one context has it checked out, so an
/// address recycled after its token is dropped maps to a fresh monitor.
pub(crate) struct MonitorRegistry {
    monitors: Mutex<HashMap<usize, MonitorSlot>>,
}

struct MonitorSlot {
    lock: Arc<ReentrantLock>,
    checkouts: usize,
}

impl MonitorRegistry {
    fn new() -> Self {
        MonitorRegistry {
            monitors: Mutex::new(HashMap::new()),
        }
    }

    pub(crate) fn global() -> &'static MonitorRegistry {
        &MONITORS
    }

    /// Get (or create) the monitor for `key` and register one checkout.
    ///
    /// Repeated checkouts of the same key return the same monitor; the slot
    /// is dropped once every handle has been dropped.
    pub(crate) fn checkout(&self, key: usize) -> Result<MonitorHandle<'_>, LockError> {
        let mut monitors = self
            .monitors
            .lock()
            .map_err(|e| LockError::Poisoned(e.to_string()))?;
        let slot = monitors.entry(key).or_insert_with(|| MonitorSlot {
            lock: Arc::new(ReentrantLock::new()),
            checkouts: 0,
        });
        slot.checkouts += 1;
        Ok(MonitorHandle {
            registry: self,
            key,
            lock: Arc::clone(&slot.lock),
        })
    }

    fn checkin(&self, key: usize) {
        // Runs from Drop, possibly mid-unwind: a poisoned map only strands
        // the slot, it never strands the monitor itself.
        if let Ok(mut monitors) = self.monitors.lock() {
            if let Some(slot) = monitors.get_mut(&key) {
                slot.checkouts -= 1;
                if slot.checkouts == 0 {
                    monitors.remove(&key);
                }
            }
        }
    }
}

/// A checked-out monitor; checks itself back in on drop.
pub(crate) struct MonitorHandle<'a> {
    registry: &'a MonitorRegistry,
    key: usize,
    lock: Arc<ReentrantLock>,
}

impl MonitorHandle<'_> {
    pub(crate) fn monitor(&self) -> &ReentrantLock {
        &self.lock
    }
}

impl Drop for MonitorHandle<'_> {
    fn drop(&mut self) {
        self.registry.checkin(self.key);
    }
}
