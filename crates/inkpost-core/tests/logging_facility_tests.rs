#![allow(clippy::unwrap_used, clippy::expect_used)]

use inkpost_core::errors::{BlogError, ExError, ExErrorKind};
use inkpost_core::logging_facility::schema::{EVENT_END, EVENT_END_ERROR, EVENT_START};
use inkpost_core::logging_facility::test_capture::init_test_capture;
use inkpost_core::{log_op_end, log_op_error, log_op_start};
use tracing::Level;

#[test]
fn test_log_op_start_macro_records_fields() {
    let capture = init_test_capture();
    let op_name = "test_log_op_start_unique_1";

    log_op_start!(op_name, post_id = 12);

    let events = capture.events_for_op(op_name);
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].event.as_deref(), Some(EVENT_START));
    assert_eq!(events[0].post_id(), Some("12"));
}

#[test]
fn test_log_op_end_macro_records_duration() {
    let capture = init_test_capture();
    let op_name = "test_log_op_end_unique_2";

    log_op_end!(op_name, duration_ms = 42);

    let events = capture.events_for_op(op_name);
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].event.as_deref(), Some(EVENT_END));
    assert_eq!(events[0].fields.get("duration_ms"), Some(&"42".to_string()));
}

#[test]
fn test_log_op_error_not_found_is_warn_with_code() {
    let capture = init_test_capture();
    let op_name = "test_log_op_error_unique_3";

    log_op_error!(op_name, BlogError::PostNotFound { post_id: 5 }, duration_ms = 1);

    let events = capture.events_for_op(op_name);
    assert_eq!(events.len(), 1);
    let event = &events[0];
    assert_eq!(event.event.as_deref(), Some(EVENT_END_ERROR));
    assert_eq!(event.level, Level::WARN);
    assert_eq!(event.fields.get("err_code"), Some(&"ERR_NOT_FOUND".to_string()));
}

#[test]
fn test_log_op_error_persistence_is_error_level() {
    let capture = init_test_capture();
    let op_name = "test_log_op_error_unique_4";

    let err = ExError::new(ExErrorKind::Persistence).with_message("database is locked");
    log_op_error!(op_name, err, duration_ms = 3, post_id = 9);

    let events = capture.events_for_op(op_name);
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].level, Level::ERROR);
    assert_eq!(events[0].post_id(), Some("9"));
    assert_eq!(
        events[0].fields.get("err_message"),
        Some(&"database is locked".to_string())
    );
}

#[test]
fn test_assert_event_exists_and_count() {
    let capture = init_test_capture();
    let op_name = "test_log_op_count_unique_5";

    log_op_start!(op_name);
    log_op_end!(op_name, duration_ms = 0);

    capture.assert_event_exists(op_name, EVENT_START);
    capture.assert_event_exists(op_name, EVENT_END);
    assert_eq!(
        capture.count_events(|e| e.op.as_deref() == Some(op_name)),
        2
    );
}
