//! Integration tests for the in-memory capture backend.
//!
//! These tests exercise ordering queries, clearing, concurrent appends from
//! threads and tasks, and the asynchronous wait helper.

use std::sync::Arc;
use std::time::Duration;

use logging::{CaptureBackend, LogLevel, Logger, LoggerManager, call_site, info_log};

fn mixed_sequence() -> CaptureBackend {
    let capture = CaptureBackend::new();
    capture.info("Info message", call_site!());
    capture.warning("Warning message", call_site!());
    capture.error("Error message", call_site!());
    capture.debug("Debug message", call_site!());
    capture
}

// ============================================================================
// Sequence Tests
// ============================================================================

/// Verifies the exact emitted order is recognised.
#[test]
fn sequence_matches_emitted_order() {
    let capture = mixed_sequence();
    assert!(capture.verify_log_sequence(&[
        LogLevel::Info,
        LogLevel::Warning,
        LogLevel::Error,
        LogLevel::Debug,
    ]));
}

/// Verifies reordered, truncated, and extended sequences are rejected.
#[test]
fn sequence_rejects_other_orderings() {
    let capture = mixed_sequence();
    assert!(!capture.verify_log_sequence(&[
        LogLevel::Warning,
        LogLevel::Info,
        LogLevel::Error,
        LogLevel::Debug,
    ]));
    assert!(!capture.verify_log_sequence(&[LogLevel::Info, LogLevel::Warning]));
    assert!(!capture.verify_log_sequence(&[
        LogLevel::Info,
        LogLevel::Warning,
        LogLevel::Error,
        LogLevel::Debug,
        LogLevel::Debug,
    ]));
    assert!(!capture.verify_log_sequence(&[]));
}

/// Verifies the trailing-window check.
#[test]
fn last_logs_compare_trailing_window() {
    let capture = mixed_sequence();
    assert!(capture.verify_last_logs(&[LogLevel::Error, LogLevel::Debug]));
    assert!(capture.verify_last_logs(&[LogLevel::Debug]));
    assert!(!capture.verify_last_logs(&[LogLevel::Warning, LogLevel::Debug]));
    assert!(!capture.verify_last_logs(&[LogLevel::Info; 5]));
}

// ============================================================================
// Clearing Tests
// ============================================================================

/// Verifies clearing empties the store and resets every predicate.
#[test]
fn clear_resets_all_queries() {
    let capture = mixed_sequence();
    capture.clear_logs();

    assert_eq!(capture.total_log_count(), 0);
    assert!(capture.log_calls().is_empty());
    assert!(capture.all_log_messages().is_empty());
    assert_eq!(capture.last_log(), None);
    for level in LogLevel::ALL {
        assert!(!capture.has_logs(level));
        assert_eq!(capture.log_count(level), 0);
    }
    assert!(!capture.has_debug_logs());
    assert!(!capture.has_info_logs());
    assert!(!capture.has_warning_logs());
    assert!(!capture.has_error_logs());
}

/// Verifies the store keeps working after a clear.
#[test]
fn capture_resumes_after_clear() {
    let capture = mixed_sequence();
    capture.clear_logs();
    capture.error("fresh", call_site!());
    assert!(capture.verify_log_sequence(&[LogLevel::Error]));
    assert_eq!(capture.all_log_messages(), ["fresh"]);
}

// ============================================================================
// Concurrency Tests
// ============================================================================

/// Verifies no entry is lost when many threads append at once.
#[test]
fn concurrent_thread_appends_are_all_kept() {
    const WRITERS: usize = 16;
    const PER_WRITER: usize = 25;

    let capture = Arc::new(CaptureBackend::new());
    let handles: Vec<_> = (0..WRITERS)
        .map(|writer| {
            let capture = Arc::clone(&capture);
            std::thread::spawn(move || {
                for n in 0..PER_WRITER {
                    capture.info(&format!("writer {writer} entry {n}"), call_site!());
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().expect("writer thread panicked");
    }

    assert_eq!(capture.total_log_count(), WRITERS * PER_WRITER);
    let messages = capture.all_log_messages();
    for writer in 0..WRITERS {
        for n in 0..PER_WRITER {
            let expected = format!("writer {writer} entry {n}");
            assert!(messages.contains(&expected), "missing {expected}");
        }
    }
}

/// Verifies per-thread ordering survives interleaving.
#[test]
fn concurrent_appends_keep_per_writer_order() {
    let capture = Arc::new(CaptureBackend::new());
    let handles: Vec<_> = (0..4)
        .map(|writer| {
            let capture = Arc::clone(&capture);
            std::thread::spawn(move || {
                for n in 0..50 {
                    capture.debug(&format!("{writer}:{n}"), call_site!());
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().expect("writer thread panicked");
    }

    for writer in 0..4 {
        let prefix = format!("{writer}:");
        let sequence: Vec<usize> = capture
            .all_log_messages()
            .iter()
            .filter_map(|m| m.strip_prefix(&prefix))
            .map(|n| n.parse().expect("numeric suffix"))
            .collect();
        assert_eq!(sequence, (0..50).collect::<Vec<_>>());
    }
}

/// Verifies concurrent async tasks logging through a shared manager.
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_task_appends_are_all_kept() {
    const TASKS: usize = 100;

    let capture = Arc::new(CaptureBackend::new());
    let manager = LoggerManager::from_shared(capture.clone());

    let mut handles = Vec::with_capacity(TASKS);
    for task in 0..TASKS {
        let manager = manager.clone();
        handles.push(tokio::spawn(async move {
            info_log!(manager, "Concurrent log {}", task);
        }));
    }
    for handle in handles {
        handle.await.expect("task panicked");
    }

    assert_eq!(capture.total_log_count(), TASKS);
    for task in 0..TASKS {
        assert!(capture.has_log(LogLevel::Info, &format!("Concurrent log {task}")));
    }
}

// ============================================================================
// Wait Tests
// ============================================================================

/// Verifies a delayed log from another task is observed before the timeout.
#[tokio::test]
async fn wait_sees_log_emitted_later() {
    let capture = Arc::new(CaptureBackend::new());
    let writer = Arc::clone(&capture);
    let started = tokio::time::Instant::now();

    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(100)).await;
        writer.info("Delayed message", call_site!());
    });

    let found = capture
        .wait_for_log(LogLevel::Info, "Delayed", Duration::from_secs(5))
        .await;
    assert!(found);
    assert!(started.elapsed() < Duration::from_secs(5));
}

/// Verifies a log at a different level does not satisfy the wait.
#[tokio::test(start_paused = true)]
async fn wait_ignores_other_levels() {
    let capture = CaptureBackend::new();
    capture.error("Delayed message", call_site!());
    let found = capture
        .wait_for_log(LogLevel::Info, "Delayed", Duration::from_millis(200))
        .await;
    assert!(!found);
}

/// Verifies the wait never returns `false` before the timeout elapses.
#[tokio::test]
async fn wait_times_out_no_earlier_than_requested() {
    let capture = CaptureBackend::new();
    let timeout = Duration::from_millis(150);
    let started = tokio::time::Instant::now();

    let found = capture
        .wait_for_log(LogLevel::Warning, "never emitted", timeout)
        .await;

    assert!(!found);
    assert!(started.elapsed() >= timeout);
}

/// Verifies a custom polling interval still honours the timeout.
#[tokio::test(start_paused = true)]
async fn wait_with_coarse_interval_respects_timeout() {
    let capture = CaptureBackend::new();
    let started = tokio::time::Instant::now();
    let found = capture
        .wait_for_log_with_interval(
            LogLevel::Debug,
            "x",
            Duration::from_millis(30),
            Duration::from_secs(10),
        )
        .await;
    assert!(!found);
    let elapsed = started.elapsed();
    assert!(elapsed >= Duration::from_millis(30));
    assert!(elapsed < Duration::from_secs(10));
}
