use super::*;

use crate::error::ApiError;
use crate::export::Step;
use crate::net::test_helpers::FakeApi;
use crate::notify::RecordingNotifier;

fn configured_session() -> ExportSession {
    let mut session = ExportSession::new();
    session.select_all();
    session.apply("dateRange.start", "2024-01-01").expect("apply");
    session
}

#[tokio::test(start_paused = true)]
async fn successful_export_resets_after_the_delay() {
    let api = FakeApi::default();
    let notify = RecordingNotifier::default();
    let mut session = configured_session();

    let payload = run_export(&api, &notify, &mut session, RESET_DELAY).await.expect("export");
    assert_eq!(payload, b"export-bytes");
    assert_eq!(api.calls(), ["export_filtered"]);
    assert_eq!(notify.successes(), ["Export ready"]);

    // Paused-clock sleep has elapsed by the time run_export returns;
    // the session is back at its documented default.
    assert_eq!(session, ExportSession::default());
}

#[tokio::test(start_paused = true)]
async fn failed_export_still_resets_and_reports() {
    let api = FakeApi::default();
    api.fail("export_filtered", ApiError::Response { status: 500, message: "boom".into() });
    let notify = RecordingNotifier::default();
    let mut session = configured_session();

    let err = run_export(&api, &notify, &mut session, RESET_DELAY).await.expect_err("should fail");
    assert!(matches!(err, ExportError::Api(_)));
    assert_eq!(notify.errors(), ["API error (500): boom"]);
    assert_eq!(session, ExportSession::default());
}

#[tokio::test(start_paused = true)]
async fn invalid_ranges_send_nothing_and_keep_the_session() {
    let api = FakeApi::default();
    let notify = RecordingNotifier::default();
    let mut session = configured_session();
    session.apply("patientAge.min", "80").expect("apply");
    session.apply("patientAge.max", "20").expect("apply");
    let before = session.clone();

    let err = run_export(&api, &notify, &mut session, RESET_DELAY).await.expect_err("should fail");
    assert!(matches!(err, ExportError::InvalidRange(_)));
    assert!(api.calls().is_empty(), "no request may be sent");
    assert_eq!(session, before);
    assert_eq!(notify.errors().len(), 1);
}

#[tokio::test(start_paused = true)]
async fn submit_without_procedure_is_rejected() {
    let api = FakeApi::default();
    let notify = RecordingNotifier::default();
    let mut session = ExportSession::new();

    let err = run_export(&api, &notify, &mut session, RESET_DELAY).await.expect_err("should fail");
    assert!(matches!(err, ExportError::NotReady));
    assert!(api.calls().is_empty());
}

#[tokio::test(start_paused = true)]
async fn default_filters_export_round_trip_matches_reset_state() {
    let api = FakeApi::default();
    let notify = RecordingNotifier::default();
    let mut session = ExportSession::new();
    session.select_all();

    run_export(&api, &notify, &mut session, RESET_DELAY).await.expect("export");
    assert_eq!(session.step, Step::SelectProcedure);
    assert!(session.selected_procedure.is_none());
    assert_eq!(session.filters, crate::filters::FilterState::default());
}
