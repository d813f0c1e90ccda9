use super::LockError;

/// Trait for a single lock instance.
///
/// Implementations provide blocking lock, non-blocking try-lock, and unlock.
/// [`PlainLock`](super::PlainLock) and [`ReentrantLock`](super::ReentrantLock)
/// are the in-process implementations; anything else exposing the same three
/// operations gets [`Lock::perform`] for free.
pub trait Lock: Send + Sync {
    /// Acquire the lock, blocking until it becomes available.
    fn lock(&self) -> Result<(), LockError>;

    /// Try to acquire the lock without blocking.
    /// Returns `Ok(true)` if acquired, `Ok(false)` if already held.
    fn try_lock(&self) -> Result<bool, LockError>;

    /// Release the lock.
    ///
    /// Returns [`LockError::NotHeld`] if the calling context does not hold
    /// the lock.
    fn unlock(&self) -> Result<(), LockError>;

    /// Run `action` while holding this lock.
    ///
    /// Acquires the lock, invokes `action` exactly once, releases the lock,
    /// and returns the action's value. The release happens on every exit
    /// path: if the action panics, the lock is released before the panic
    /// continues unwinding.
    ///
    /// Whether the same thread may call `perform` again from inside the
    /// action is a property of the lock instance: a [`ReentrantLock`] permits
    /// it, a [`PlainLock`] self-deadlocks.
    ///
    /// Note that any value computed *before* the call (for example an
    /// argument captured by the closure) is produced outside the critical
    /// section; only work done inside `action` runs under the lock.
    ///
    /// [`ReentrantLock`]: super::ReentrantLock
    /// [`PlainLock`]: super::PlainLock
    fn perform<R>(&self, action: impl FnOnce() -> R) -> Result<R, LockError>
    where
        Self: Sized,
    {
        self.lock()?;
        let mut release = ReleaseOnDrop {
            lock: self,
            armed: true,
        };
        let result = action();
        // Disarm and release explicitly so unlock errors reach the caller.
        release.armed = false;
        drop(release);
        self.unlock()?;
        Ok(result)
    }
}

/// Releases the lock when dropped mid-unwind.
struct ReleaseOnDrop<'a, L: Lock> {
    lock: &'a L,
    armed: bool,
}

impl<L: Lock> Drop for ReleaseOnDrop<'_, L> {
    fn drop(&mut self) {
        if self.armed {
            // Unwinding already carries the caller-visible failure; a release
            // error here has nowhere to go.
            let _ = self.lock.unlock();
        }
    }
}
