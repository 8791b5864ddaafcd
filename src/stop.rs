//! Cooperative cancellation for iterative solvers.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// A shared flag that asks a running solver to stop early.
///
/// Clones share the same flag. Solvers poll it between passes or
/// generations and return the best valid tour found so far.
///
/// # Examples
///
/// ```
/// use u_tour::StopFlag;
///
/// let flag = StopFlag::new();
/// let handle = flag.clone();
/// assert!(!flag.is_stopped());
/// handle.stop();
/// assert!(flag.is_stopped());
/// ```
#[derive(Debug, Clone, Default)]
pub struct StopFlag(Arc<AtomicBool>);

impl StopFlag {
    /// Creates a flag in the running state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests a stop.
    pub fn stop(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    /// Returns `true` once [`stop`](Self::stop) has been called on any clone.
    pub fn is_stopped(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Returns `true` if an optional flag has been raised.
pub(crate) fn should_stop(flag: Option<&StopFlag>) -> bool {
    flag.is_some_and(StopFlag::is_stopped)
}
