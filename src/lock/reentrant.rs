use std::sync::{Condvar, Mutex};
use std::thread::{self, ThreadId};

use super::{Lock, LockError};

struct Owner {
    thread: ThreadId,
    holds: usize,
}

/// Reentrant (recursive) blocking lock.
///
/// The thread holding the lock may acquire it again without blocking; each
/// acquisition increments a hold count and the lock becomes free for other
/// threads only once `unlock()` has been called a matching number of times.
pub struct ReentrantLock {
    owner: Mutex<Option<Owner>>,
    wake: Condvar,
}

impl ReentrantLock {
    pub fn new() -> Self {
        ReentrantLock {
            owner: Mutex::new(None),
            wake: Condvar::new(),
        }
    }
}

impl Default for ReentrantLock {
    fn default() -> Self {
        Self::new()
    }
}

impl Lock for ReentrantLock {
    fn lock(&self) -> Result<(), LockError> {
        let me = thread::current().id();
        let mut owner = self
            .owner
            .lock()
            .map_err(|e| LockError::Poisoned(e.to_string()))?;
        loop {
            match &mut *owner {
                Some(holder) if holder.thread == me => {
                    holder.holds = holder.holds.checked_add(1).ok_or(LockError::DepthOverflow)?;
                    return Ok(());
                }
                None => {
                    *owner = Some(Owner { thread: me, holds: 1 });
                    return Ok(());
                }
                Some(_) => {}
            }
            owner = self
                .wake
                .wait(owner)
                .map_err(|e| LockError::Poisoned(e.to_string()))?;
        }
    }

    fn try_lock(&self) -> Result<bool, LockError> {
        let me = thread::current().id();
        let mut owner = self
            .owner
            .lock()
            .map_err(|e| LockError::Poisoned(e.to_string()))?;
        match &mut *owner {
            Some(holder) if holder.thread == me => {
                holder.holds = holder.holds.checked_add(1).ok_or(LockError::DepthOverflow)?;
                Ok(true)
            }
            None => {
                *owner = Some(Owner { thread: me, holds: 1 });
                Ok(true)
            }
            Some(_) => Ok(false),
        }
    }

    fn unlock(&self) -> Result<(), LockError> {
        let me = thread::current().id();
        let mut owner = self
            .owner
            .lock()
            .map_err(|e| LockError::Poisoned(e.to_string()))?;
        match &mut *owner {
            Some(holder) if holder.thread == me => {
                holder.holds -= 1;
                if holder.holds == 0 {
                    *owner = None;
                    self.wake.notify_one();
                }
                Ok(())
            }
            _ => Err(LockError::NotHeld),
        }
    }
}
