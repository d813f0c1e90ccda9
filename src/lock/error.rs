use std::fmt;

/// Error type for lock operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LockError {
    /// The underlying platform mutex was poisoned (a thread panicked while holding it).
    Poisoned(String),
    /// Release was attempted by a context that does not hold the lock.
    NotHeld,
    /// The reentrant hold count cannot be incremented any further.
    DepthOverflow,
}

impl fmt::Display for LockError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LockError::Poisoned(msg) => write!(f, "lock poisoned: {}", msg),
            LockError::NotHeld => write!(f, "lock released by a context that does not hold it"),
            LockError::DepthOverflow => write!(f, "reentrant hold count overflow"),
        }
    }
}

impl std::error::Error for LockError {}
