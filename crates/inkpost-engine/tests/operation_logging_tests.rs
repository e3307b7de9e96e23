//! Blog operations emit start/end events through the logging facility

use inkpost_core::logging_facility::schema::{EVENT_END, EVENT_END_ERROR, EVENT_START};
use inkpost_core::logging_facility::test_capture::init_test_capture;
use inkpost_engine::commands::{OP_ADD_COMMENT, OP_CREATE_POST};
use inkpost_engine::{add_comment, create_post};
use tracing::Level;

#[test]
fn test_operations_are_bracketed_by_start_and_end_events() {
    let capture = init_test_capture();
    let mut conn = inkpost_store::db::open_in_memory().unwrap();
    inkpost_store::migrations::apply_migrations(&mut conn).unwrap();

    let id = create_post(&mut conn, Some("t".into()), Some("c".into())).unwrap();
    add_comment(&mut conn, id, Some(String::new())).unwrap_err();

    let create_events = capture.events_for_op(OP_CREATE_POST);
    assert_eq!(create_events.first().and_then(|e| e.event.as_deref()), Some(EVENT_START));
    assert_eq!(create_events.last().and_then(|e| e.event.as_deref()), Some(EVENT_END));

    let comment_events = capture.events_for_op(OP_ADD_COMMENT);
    let failure = comment_events
        .iter()
        .find(|e| e.event.as_deref() == Some(EVENT_END_ERROR))
        .expect("failed comment should log end_error");
    assert_eq!(failure.level, Level::WARN);
    assert_eq!(failure.post_id(), Some(id.to_string().as_str()));
    assert_eq!(
        failure.fields.get("err_code").map(String::as_str),
        Some("ERR_INVALID_INPUT")
    );
}
