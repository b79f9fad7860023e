//! Supersession flag shared between a request, its ticket and the service.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Something a newer request can replace.
///
/// Nothing in the sieve polls this. A replaced analysis still runs to the
/// end; the flag only decides whether its result is handed out and whether
/// a completion event is sent for it.
pub trait Cancellable {
    /// True once the request was superseded or its ticket gave up on it.
    fn is_cancelled(&self) -> bool;

    /// Mark the request as replaced. Idempotent.
    fn cancel(&self);
}

/// One flag per analysis request. The service keeps a clone for the live
/// request and the ticket holds another, so either side can flip it.
#[derive(Debug, Clone)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self {
            cancelled: Arc::new(AtomicBool::new(false)),
        }
    }
}

impl Default for CancellationToken {
    fn default() -> Self {
        Self::new()
    }
}

impl Cancellable for CancellationToken {
    fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }

    fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }
}
