//! Shared fixture: the increment / sleep / decrement-if-one contention probe.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;
use std::time::Duration;

/// Total operations fanned out per scenario.
pub const BLOCK_OP_COUNT: usize = 10_000;

/// Worker threads sharing the load.
pub const WORKERS: usize = 8;

/// Injected delay between the increment and the decrement attempt, widening
/// the window in which a concurrent operation can interleave.
pub const OP_DELAY: Duration = Duration::from_micros(10);

#[derive(Default)]
pub struct Counter {
    value: AtomicUsize,
}

impl Counter {
    pub fn new() -> Self {
        Counter::default()
    }

    fn increment(&self) {
        self.value.fetch_add(1, Ordering::SeqCst);
    }

    fn decrement_if_one(&self) {
        // Only takes the bump back if no other operation interleaved.
        let _ = self
            .value
            .compare_exchange(1, 0, Ordering::SeqCst, Ordering::SeqCst);
    }

    /// One operation of the probe. Serialized operations always restore the
    /// counter to zero; once two overlap, the counter is stranded above zero
    /// for good (`decrement_if_one` never fires again).
    pub fn perform_operation(&self) {
        self.increment();
        thread::sleep(OP_DELAY);
        self.decrement_if_one();
    }

    pub fn value(&self) -> usize {
        self.value.load(Ordering::SeqCst)
    }
}

/// Fan [`BLOCK_OP_COUNT`] invocations of `op` out over [`WORKERS`] threads
/// and wait for all of them to finish.
pub fn fan_out(op: impl Fn() + Sync) {
    thread::scope(|scope| {
        for _ in 0..WORKERS {
            scope.spawn(|| {
                for _ in 0..BLOCK_OP_COUNT / WORKERS {
                    op();
                }
            });
        }
    });
}
