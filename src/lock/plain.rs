use std::sync::{Condvar, Mutex};

use super::{Lock, LockError};

/// Non-reentrant blocking lock backed by `Mutex<bool>` + `Condvar`.
///
/// A second `lock()` from the thread already holding it blocks forever;
/// callers that re-acquire on the same thread want [`ReentrantLock`]
/// instead.
///
/// [`ReentrantLock`]: super::ReentrantLock
pub struct PlainLock {
    held: Mutex<bool>,
    wake: Condvar,
}

impl PlainLock {
    pub fn new() -> Self {
        PlainLock {
            held: Mutex::new(false),
            wake: Condvar::new(),
        }
    }
}

impl Default for PlainLock {
    fn default() -> Self {
        Self::new()
    }
}

impl Lock for PlainLock {
    fn lock(&self) -> Result<(), LockError> {
        let mut held = self
            .held
            .lock()
            .map_err(|e| LockError::Poisoned(e.to_string()))?;
        while *held {
            held = self
                .wake
                .wait(held)
                .map_err(|e| LockError::Poisoned(e.to_string()))?;
        }
        *held = true;
        Ok(())
    }

    fn try_lock(&self) -> Result<bool, LockError> {
        let mut held = self
            .held
            .lock()
            .map_err(|e| LockError::Poisoned(e.to_string()))?;
        if *held {
            Ok(false)
        } else {
            *held = true;
            Ok(true)
        }
    }

    fn unlock(&self) -> Result<(), LockError> {
        let mut held = self
            .held
            .lock()
            .map_err(|e| LockError::Poisoned(e.to_string()))?;
        if !*held {
            return Err(LockError::NotHeld);
        }
        *held = false;
        self.wake.notify_one();
        Ok(())
    }
}
