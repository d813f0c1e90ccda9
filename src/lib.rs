mod lock;
mod monitor;

pub use lock::{Lock, LockError, PlainLock, ReentrantLock};
pub use monitor::synchronized;

// Re-export any other types or functions that should be part of the public API
