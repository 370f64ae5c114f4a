//! Single-shot deferred write.
//!
//! The buffer stylesheet is rewritten a fixed delay after the primary one.
//! The timer is modeled as an explicit scheduled task so the decision logic
//! stays testable without a browser and so hosts can cancel a write that has
//! not fired yet. The page-load entry lets its write run unheld; browsers
//! drop pending timeouts with the document at unload.

use std::time::Duration;

/// Handle to one scheduled write.
pub trait PendingWrite {
    /// Let the write fire without retaining the handle.
    fn forget(self);

    /// Drop the write before it fires.
    fn cancel(self);
}

/// Injected single-shot scheduling capability.
pub trait WriteScheduler {
    /// Handle type for a scheduled write.
    type Pending: PendingWrite;

    /// Run `write` once, `delay` from now.
    fn defer(&self, delay: Duration, write: Box<dyn FnOnce()>) -> Self::Pending;
}
