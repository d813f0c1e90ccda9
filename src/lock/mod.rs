mod error;
mod lock;
mod plain;
mod reentrant;

pub use error::LockError;
pub use lock::Lock;
pub use plain::PlainLock;
pub use reentrant::ReentrantLock;
