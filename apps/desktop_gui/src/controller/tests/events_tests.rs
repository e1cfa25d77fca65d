use super::*;
use shared::error::{ApiError, ErrorCode};

#[test]
fn classifies_missing_resources() {
    let err = UiError::from_message(UiErrorContext::SubmitAnnotation, "no resource with id 9");
    assert_eq!(err.category(), UiErrorCategory::NotFound);
    assert_eq!(err.context(), UiErrorContext::SubmitAnnotation);
    assert_eq!(err.label(), "Not found");
}

#[test]
fn classifies_snapshot_parse_failures_as_data() {
    let err = UiError::from_message(
        UiErrorContext::BackendStartup,
        "failed to parse directory snapshot 'data/directory.json': expected value at line 1",
    );
    assert_eq!(err.category(), UiErrorCategory::Data);
}

#[test]
fn classifies_queue_failures_as_transport() {
    let err = UiError::from_message(UiErrorContext::General, "backend command queue is full");
    assert_eq!(err.category(), UiErrorCategory::Transport);
    assert_eq!(err.message(), "backend command queue is full");
}

#[test]
fn falls_back_to_unknown() {
    let err = UiError::from_message(UiErrorContext::General, "something odd");
    assert_eq!(err.category(), UiErrorCategory::Unknown);
}

#[test]
fn refused_submission_is_reported_as_submit_error() {
    let err = UiError::submission_refused(&ApiError::new(
        ErrorCode::Unavailable,
        "Backend command queue is full; please retry",
    ));
    assert_eq!(err.context(), UiErrorContext::SubmitAnnotation);
    assert_eq!(err.category(), UiErrorCategory::Transport);
    assert_eq!(err.label(), "Backend unavailable");
}
