//! Guarded, single-flight front end for [`crate::analyze`].
//!
//! The service enforces the bound ceiling before any sieving, can move the
//! work to a background thread, and keeps at most one request live: each new
//! request supersedes the previous one. A superseded sieve is not
//! interrupted; its result is discarded when the ticket is waited on. A
//! request that already finished is never superseded.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::{Duration, Instant};

use crossbeam_channel::{Receiver, RecvTimeoutError, TryRecvError};
use primes_core::config::AnalysisConfig;
use primes_core::errors::AnalysisError;
use primes_core::events::types::{
    AnalysisCompleteEvent, AnalysisRejectedEvent, AnalysisStartedEvent, AnalysisSupersededEvent,
};
use primes_core::events::EventDispatcher;
use primes_core::traits::{Cancellable, CancellationToken};
use primes_core::types::AnalysisResult;

use crate::pipeline::analyze;

/// The request currently allowed to deliver a result.
#[derive(Debug)]
struct LiveRequest {
    id: u64,
    bound: i64,
    token: CancellationToken,
    finished: bool,
}

type LiveSlot = Arc<Mutex<Option<LiveRequest>>>;

/// Runs analyses for one session.
#[derive(Debug)]
pub struct AnalysisService {
    ceiling: u64,
    dispatcher: Arc<EventDispatcher>,
    next_request_id: AtomicU64,
    live: LiveSlot,
}

impl AnalysisService {
    /// Create a service using the configured ceiling.
    pub fn new(config: &AnalysisConfig) -> Self {
        Self::with_ceiling(config.effective_max_bound())
    }

    /// Create a service with an explicit ceiling.
    pub fn with_ceiling(ceiling: u64) -> Self {
        Self {
            ceiling,
            dispatcher: Arc::new(EventDispatcher::new()),
            next_request_id: AtomicU64::new(1),
            live: Arc::new(Mutex::new(None)),
        }
    }

    /// Attach lifecycle event handlers.
    pub fn with_dispatcher(mut self, dispatcher: EventDispatcher) -> Self {
        self.dispatcher = Arc::new(dispatcher);
        self
    }

    /// Largest accepted bound.
    pub fn ceiling(&self) -> u64 {
        self.ceiling
    }

    /// Reject `bound` if it exceeds the ceiling. Bounds below 2, negatives
    /// included, always pass: they yield an empty result, not an error.
    pub fn check_bound(&self, bound: i64) -> Result<(), AnalysisError> {
        let exceeds = u64::try_from(bound).is_ok_and(|b| b > self.ceiling);
        if !exceeds {
            return Ok(());
        }

        let err = AnalysisError::BoundExceedsCeiling {
            bound,
            ceiling: self.ceiling,
        };
        tracing::warn!(bound, ceiling = self.ceiling, "analysis rejected");
        self.dispatcher.emit_analysis_rejected(&AnalysisRejectedEvent {
            bound,
            ceiling: self.ceiling,
            message: err.to_string(),
        });
        Err(err)
    }

    /// Analyze on the calling thread. Supersedes any pending ticket.
    pub fn run(&self, bound: i64) -> Result<AnalysisResult, AnalysisError> {
        let (request_id, _) = self.begin(bound)?;
        let result = timed_analyze(&self.dispatcher, &self.live, bound, request_id);
        Ok(result)
    }

    /// Analyze on a background thread and return a ticket for the result.
    ///
    /// The ceiling check happens here, before the thread is spawned. Any
    /// earlier ticket from this service is superseded.
    pub fn submit(&self, bound: i64) -> Result<AnalysisTicket, AnalysisError> {
        let (request_id, token) = self.begin(bound)?;
        let (sender, receiver) = crossbeam_channel::bounded(1);

        let dispatcher = Arc::clone(&self.dispatcher);
        let live = Arc::clone(&self.live);
        let spawned = std::thread::Builder::new()
            .name(format!("primes-analysis-{request_id}"))
            .spawn(move || {
                let result = timed_analyze(&dispatcher, &live, bound, request_id);
                // The ticket may already be gone; nobody is left to tell.
                let _ = sender.send(result);
            });

        if let Err(e) = spawned {
            tracing::warn!(bound, request_id, error = %e, "failed to spawn analysis worker");
            token.cancel();
            return Err(AnalysisError::WorkerLost { bound });
        }

        Ok(AnalysisTicket {
            bound,
            request_id,
            token,
            receiver,
            dispatcher: Arc::clone(&self.dispatcher),
            delivered: AtomicBool::new(false),
        })
    }

    /// Bound of the most recently accepted request, if any.
    pub fn latest_bound(&self) -> Option<i64> {
        lock_live(&self.live).as_ref().map(|live| live.bound)
    }

    /// Ceiling check, then register a new live request and supersede the old.
    fn begin(&self, bound: i64) -> Result<(u64, CancellationToken), AnalysisError> {
        self.check_bound(bound)?;

        let request_id = self.next_request_id.fetch_add(1, Ordering::Relaxed);
        let token = CancellationToken::new();
        let previous = lock_live(&self.live).replace(LiveRequest {
            id: request_id,
            bound,
            token: token.clone(),
            finished: false,
        });

        if let Some(previous) = previous {
            if !previous.finished && !previous.token.is_cancelled() {
                previous.token.cancel();
                tracing::info!(
                    bound = previous.bound,
                    request_id = previous.id,
                    superseded_by = request_id,
                    "analysis superseded"
                );
                self.dispatcher
                    .emit_analysis_superseded(&AnalysisSupersededEvent {
                        bound: previous.bound,
                        request_id: previous.id,
                    });
            }
        }

        tracing::info!(bound, request_id, "analysis started");
        self.dispatcher.emit_analysis_started(&AnalysisStartedEvent { bound, request_id });
        Ok((request_id, token))
    }
}

fn lock_live(live: &Mutex<Option<LiveRequest>>) -> MutexGuard<'_, Option<LiveRequest>> {
    // The guarded data stays consistent even if a holder panicked.
    live.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Mark `request_id` finished if it is still the live request and nobody
/// cancelled it. Returns whether it was.
fn finish_live(live: &Mutex<Option<LiveRequest>>, request_id: u64) -> bool {
    match lock_live(live).as_mut() {
        Some(current) if current.id == request_id && !current.token.is_cancelled() => {
            current.finished = true;
            true
        }
        _ => false,
    }
}

/// Run the pipeline and report completion unless the request was superseded
/// meanwhile.
fn timed_analyze(
    dispatcher: &EventDispatcher,
    live: &Mutex<Option<LiveRequest>>,
    bound: i64,
    request_id: u64,
) -> AnalysisResult {
    let started = Instant::now();
    let result = analyze(bound);
    let duration_ms = started.elapsed().as_millis() as u64;

    if !finish_live(live, request_id) {
        tracing::debug!(bound, request_id, duration_ms, "finished superseded analysis");
    } else {
        tracing::info!(
            bound,
            request_id,
            prime_count = result.prime_count,
            duration_ms,
            "analysis complete"
        );
        dispatcher.emit_analysis_complete(&AnalysisCompleteEvent {
            bound,
            request_id,
            prime_count: result.prime_count,
            twin_count: result.twin_primes.len(),
            duration_ms,
        });
    }
    result
}

/// Handle to a background analysis started by [`AnalysisService::submit`].
#[derive(Debug)]
pub struct AnalysisTicket {
    bound: i64,
    request_id: u64,
    token: CancellationToken,
    receiver: Receiver<AnalysisResult>,
    dispatcher: Arc<EventDispatcher>,
    delivered: AtomicBool,
}

impl AnalysisTicket {
    pub fn bound(&self) -> i64 {
        self.bound
    }

    pub fn request_id(&self) -> u64 {
        self.request_id
    }

    /// True once a newer request has replaced this one.
    pub fn is_superseded(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Give up on this request. Its result will be discarded. No-op once a
    /// result has been handed out.
    pub fn cancel(&self) {
        if !self.delivered.load(Ordering::Acquire) && !self.token.is_cancelled() {
            self.token.cancel();
            self.dispatcher
                .emit_analysis_superseded(&AnalysisSupersededEvent {
                    bound: self.bound,
                    request_id: self.request_id,
                });
        }
    }

    /// Block until the worker finishes.
    pub fn wait(self) -> Result<AnalysisResult, AnalysisError> {
        let received = self.receiver.recv().ok();
        self.deliver(received)
    }

    /// Block for at most `timeout`. `Ok(None)` means still running.
    ///
    /// The result is handed out once; polling again afterwards returns
    /// [`AnalysisError::AlreadyDelivered`].
    pub fn wait_timeout(&self, timeout: Duration) -> Result<Option<AnalysisResult>, AnalysisError> {
        match self.receiver.recv_timeout(timeout) {
            Ok(result) => self.deliver(Some(result)).map(Some),
            Err(RecvTimeoutError::Timeout) => Ok(None),
            Err(RecvTimeoutError::Disconnected) => self.deliver(None).map(Some),
        }
    }

    /// Non-blocking poll. `Ok(None)` means still running.
    pub fn try_wait(&self) -> Result<Option<AnalysisResult>, AnalysisError> {
        match self.receiver.try_recv() {
            Ok(result) => self.deliver(Some(result)).map(Some),
            Err(TryRecvError::Empty) => Ok(None),
            Err(TryRecvError::Disconnected) => self.deliver(None).map(Some),
        }
    }

    fn deliver(&self, received: Option<AnalysisResult>) -> Result<AnalysisResult, AnalysisError> {
        if received.is_none() && self.delivered.load(Ordering::Acquire) {
            return Err(AnalysisError::AlreadyDelivered { bound: self.bound });
        }
        if self.token.is_cancelled() {
            return Err(AnalysisError::Superseded { bound: self.bound });
        }
        let result = received.ok_or(AnalysisError::WorkerLost { bound: self.bound })?;
        self.delivered.store(true, Ordering::Release);
        Ok(result)
    }
}
