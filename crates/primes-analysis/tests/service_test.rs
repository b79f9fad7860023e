//! Tests for the guarded analysis service.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use primes_analysis::AnalysisService;
use primes_core::config::AnalysisConfig;
use primes_core::errors::AnalysisError;
use primes_core::events::handler::AnalysisEventHandler;
use primes_core::events::types::*;
use primes_core::events::EventDispatcher;

#[derive(Default)]
struct RecordingHandler {
    started: AtomicUsize,
    complete: AtomicUsize,
    superseded: Mutex<Vec<i64>>,
    rejected: Mutex<Vec<String>>,
}

impl AnalysisEventHandler for RecordingHandler {
    fn on_analysis_started(&self, _event: &AnalysisStartedEvent) {
        self.started.fetch_add(1, Ordering::SeqCst);
    }

    fn on_analysis_complete(&self, _event: &AnalysisCompleteEvent) {
        self.complete.fetch_add(1, Ordering::SeqCst);
    }

    fn on_analysis_rejected(&self, event: &AnalysisRejectedEvent) {
        self.rejected.lock().unwrap().push(event.message.clone());
    }

    fn on_analysis_superseded(&self, event: &AnalysisSupersededEvent) {
        self.superseded.lock().unwrap().push(event.bound);
    }
}

fn service_with_handler(ceiling: u64) -> (AnalysisService, Arc<RecordingHandler>) {
    let handler = Arc::new(RecordingHandler::default());
    let mut dispatcher = EventDispatcher::new();
    dispatcher.register(handler.clone());
    (AnalysisService::with_ceiling(ceiling).with_dispatcher(dispatcher), handler)
}

#[test]
fn default_ceiling_is_two_million() {
    let service = AnalysisService::new(&AnalysisConfig::default());
    assert_eq!(service.ceiling(), 2_000_000);
    assert!(service.check_bound(2_000_000).is_ok());
    assert!(service.check_bound(2_000_001).is_err());
}

#[test]
fn bound_above_ceiling_is_rejected_before_work() {
    let (service, handler) = service_with_handler(1_000);

    let err = service.run(1_001).unwrap_err();
    assert_eq!(
        err,
        AnalysisError::BoundExceedsCeiling {
            bound: 1_001,
            ceiling: 1_000
        }
    );
    assert!(err.to_string().contains("1,000"));

    assert!(service.submit(5_000).is_err());
    assert_eq!(handler.started.load(Ordering::SeqCst), 0);
    assert_eq!(handler.rejected.lock().unwrap().len(), 2);
    assert_eq!(service.latest_bound(), None);
}

#[test]
fn small_and_negative_bounds_pass_the_guard() {
    let service = AnalysisService::with_ceiling(10);
    for bound in [i64::MIN, -1, 0, 1] {
        let r = service.run(bound).unwrap();
        assert_eq!(r.prime_count, 0);
    }
    assert_eq!(service.run(10).unwrap().prime_count, 4);
}

#[test]
fn run_reports_completion() {
    let (service, handler) = service_with_handler(1_000);
    let r = service.run(100).unwrap();
    assert_eq!(r.prime_count, 25);
    assert_eq!(handler.started.load(Ordering::SeqCst), 1);
    assert_eq!(handler.complete.load(Ordering::SeqCst), 1);
}

#[test]
fn submitted_analysis_delivers_result() {
    let service = AnalysisService::with_ceiling(100_000);
    let ticket = service.submit(10_000).unwrap();
    assert_eq!(ticket.bound(), 10_000);
    assert!(!ticket.is_superseded());

    let r = ticket.wait().unwrap();
    assert_eq!(r.prime_count, 1_229);
    assert_eq!(r.bound, 10_000);
}

#[test]
fn newer_submission_supersedes_older() {
    let (service, handler) = service_with_handler(2_000_000);

    let first = service.submit(2_000_000).unwrap();
    let second = service.submit(100).unwrap();
    assert!(second.request_id() > first.request_id());
    assert!(!second.is_superseded());

    // The first sieve may already be done by the time the second arrives;
    // then it keeps its result and no superseded event is sent.
    match first.wait() {
        Err(AnalysisError::Superseded { bound }) => {
            assert_eq!(bound, 2_000_000);
            assert_eq!(*handler.superseded.lock().unwrap(), vec![2_000_000]);
        }
        Ok(r) => {
            assert_eq!(r.prime_count, 148_933);
            assert!(handler.superseded.lock().unwrap().is_empty());
        }
        Err(other) => panic!("unexpected error: {other}"),
    }
    assert_eq!(second.wait().unwrap().prime_count, 25);
    assert_eq!(service.latest_bound(), Some(100));
}

#[test]
fn synchronous_run_also_supersedes_pending_ticket() {
    let (service, handler) = service_with_handler(2_000_000);
    let pending = service.submit(2_000_000).unwrap();
    service.run(10).unwrap();
    let superseded = handler.superseded.lock().unwrap().clone();
    match pending.wait() {
        Err(AnalysisError::Superseded { bound }) => assert_eq!(superseded, vec![bound]),
        Ok(_) => assert!(superseded.is_empty()),
        Err(other) => panic!("unexpected error: {other}"),
    }
}

#[test]
fn finished_requests_are_never_superseded() {
    let (service, handler) = service_with_handler(1_000);

    service.run(10).unwrap();
    service.submit(20).unwrap().wait().unwrap();
    service.run(30).unwrap();

    assert!(handler.superseded.lock().unwrap().is_empty());
    assert_eq!(handler.started.load(Ordering::SeqCst), 3);
    assert_eq!(handler.complete.load(Ordering::SeqCst), 3);
    assert_eq!(service.latest_bound(), Some(30));
}

#[test]
fn finished_ticket_keeps_its_result_after_newer_request() {
    let (service, handler) = service_with_handler(1_000);

    let ticket = service.submit(100).unwrap();
    let first = loop {
        if let Some(r) = ticket.wait_timeout(Duration::from_millis(100)).unwrap() {
            break r;
        }
    };
    service.run(10).unwrap();

    assert_eq!(first.prime_count, 25);
    assert!(!ticket.is_superseded());
    assert!(handler.superseded.lock().unwrap().is_empty());
}

#[test]
fn cancelled_ticket_discards_result() {
    let service = AnalysisService::with_ceiling(1_000);
    let ticket = service.submit(1_000).unwrap();
    ticket.cancel();
    assert!(ticket.is_superseded());
    assert!(matches!(
        ticket.wait_timeout(Duration::from_secs(10)),
        Err(AnalysisError::Superseded { .. }) | Ok(None)
    ));
}

#[test]
fn wait_timeout_eventually_yields_result() {
    let service = AnalysisService::with_ceiling(1_000);
    let ticket = service.submit(1_000).unwrap();
    let mut result = None;
    for _ in 0..100 {
        if let Some(r) = ticket.wait_timeout(Duration::from_millis(100)).unwrap() {
            result = Some(r);
            break;
        }
    }
    assert_eq!(result.map(|r| r.prime_count), Some(168));
}

#[test]
fn try_wait_polls_without_blocking() {
    let service = AnalysisService::with_ceiling(1_000);
    let ticket = service.submit(100).unwrap();
    let mut polls = 0;
    let result = loop {
        if let Some(r) = ticket.try_wait().unwrap() {
            break r;
        }
        polls += 1;
        assert!(polls < 10_000, "worker never finished");
        std::thread::sleep(Duration::from_millis(1));
    };
    assert_eq!(result.prime_count, 25);
}

#[test]
fn polling_after_delivery_reports_already_delivered() {
    let (service, handler) = service_with_handler(1_000);
    let ticket = service.submit(100).unwrap();
    let result = loop {
        if let Some(r) = ticket.try_wait().unwrap() {
            break r;
        }
        std::thread::sleep(Duration::from_millis(1));
    };
    assert_eq!(result.prime_count, 25);

    assert_eq!(ticket.try_wait(), Err(AnalysisError::AlreadyDelivered { bound: 100 }));
    assert_eq!(
        ticket.wait_timeout(Duration::from_millis(10)),
        Err(AnalysisError::AlreadyDelivered { bound: 100 })
    );

    ticket.cancel();
    assert!(!ticket.is_superseded());
    assert!(handler.superseded.lock().unwrap().is_empty());
}
