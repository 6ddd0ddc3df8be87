//! Cooperative cancellation for long-running heal operations.
//!
//! No async runtime is needed since the engine is single-threaded and
//! synchronous (spec.md §5) — a shared `AtomicBool` is enough.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// A cheap, cloneable flag checked at each suspension point: filesystem
/// reads/writes, directory walks, and VCS subprocess calls.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    flag: Arc<AtomicBool>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.flag.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::SeqCst)
    }
}
