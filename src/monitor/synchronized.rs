use crate::lock::{Lock, LockError};

use super::registry::MonitorRegistry;

/// Run `action` while holding the monitor associated with `token`.
///
/// Any two callers presenting the same token serialize; distinct tokens
/// never interact. The monitor is reentrant: the thread inside a
/// `synchronized` block may enter a nested block on the same token without
/// deadlocking. The monitor is released on every exit path: if the action
/// panics, the panic continues unwinding only after the release.
///
/// ```
/// use synchronized_rust::synchronized;
///
/// let account = String::from("acct-1");
/// let balance = synchronized(&account, || {
///     // only one thread at a time gets here for this token
///     42
/// })?;
/// assert_eq!(balance, 42);
/// # Ok::<(), synchronized_rust::LockError>(())
/// ```
///
/// A token's identity is its address, so it must be a value with a stable,
/// unique address for as long as it is used as a token: a field of a
/// long-lived struct, a `Box`/`Arc` referent, a `static`. Zero-sized values
/// and temporaries moved between calls have no usable identity; that
/// precondition is the caller's to uphold and is not detected here.
///
/// As with [`Lock::perform`], anything computed before the call happens
/// outside the critical section; only work done inside `action` runs under
/// the monitor.
pub fn synchronized<T: ?Sized, R>(
    token: &T,
    action: impl FnOnce() -> R,
) -> Result<R, LockError> {
    let handle = MonitorRegistry::global().checkout(token_key(token))?;
    handle.monitor().perform(action)
}

/// A token's identity: the address of its referent, metadata discarded.
fn token_key<T: ?Sized>(token: &T) -> usize {
    (token as *const T).cast::<()>() as usize
}
