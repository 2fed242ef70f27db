use super::*;

// =============================================================
// Selection
// =============================================================

#[test]
fn select_available_procedure_advances() {
    let mut session = ExportSession::new();
    session.select(ProcedureId::BiolitecLhp).expect("select");
    assert_eq!(session.step, Step::ConfigureFilters);
    assert_eq!(session.selected_procedure, Some(ProcedureId::BiolitecLhp));
}

#[test]
fn select_unavailable_procedure_changes_nothing() {
    let mut session = ExportSession::new();
    session.apply("dateRange.start", "2024-01-01").expect("apply");
    let before = session.clone();

    let err = session.select(ProcedureId::Cardiac).expect_err("rejected");
    assert_eq!(err, SelectError(ProcedureId::Cardiac));
    assert_eq!(session, before);
    assert_eq!(session.step, Step::SelectProcedure);
    assert!(session.selected_procedure.is_none());
}

#[test]
fn select_all_is_always_permitted() {
    let mut session = ExportSession::new();
    session.select_all();
    assert_eq!(session.step, Step::ConfigureFilters);
    assert_eq!(session.selected_procedure, Some(ProcedureId::All));
}

#[test]
fn choosing_a_procedure_clears_stale_procedure_filters() {
    let mut session = ExportSession::new();
    session.select(ProcedureId::BiolitecLhp).expect("select");
    session.apply("procedureSpecific.laserWavelength", "1470nm").expect("apply");

    session.back();
    session.select_all();

    assert!(session.filters.procedure_specific.is_empty());
}

// =============================================================
// Back navigation
// =============================================================

#[test]
fn back_preserves_filters_and_clears_only_procedure() {
    let mut session = ExportSession::new();
    session.select(ProcedureId::BiolitecLhp).expect("select");
    session.apply("dateRange.start", "2024-01-01").expect("apply");

    session.back();
    assert_eq!(session.step, Step::SelectProcedure);
    assert!(session.selected_procedure.is_none());
    assert_eq!(session.filters.date_range.start, "2024-01-01");

    session.select_all();
    assert_eq!(session.selected_procedure, Some(ProcedureId::All));
    assert_eq!(session.filters.date_range.start, "2024-01-01");
}

// =============================================================
// Reset
// =============================================================

#[test]
fn reset_restores_the_default_session_exactly() {
    let mut session = ExportSession::new();
    session.select(ProcedureId::BiolitecLhp).expect("select");
    session.apply("patientAge.min", "30").expect("apply");
    session.apply("procedureSpecific.symptom_pain", "yes").expect("apply");

    session.reset();
    assert_eq!(session, ExportSession::default());
    assert_eq!(session.filters, crate::filters::FilterState::default());
    assert_eq!(session.step, Step::SelectProcedure);
}

// =============================================================
// Submit packaging
// =============================================================

#[test]
fn export_request_requires_configure_step() {
    let session = ExportSession::new();
    assert!(matches!(session.export_request(), Err(ExportError::NotReady)));
}

#[test]
fn export_request_carries_procedure_and_filters() {
    let mut session = ExportSession::new();
    session.select_all();
    session.apply("gender", "female").expect("apply");

    let request = session.export_request().expect("request");
    let json = serde_json::to_value(&request).expect("serialize");
    assert_eq!(json["procedure"], "all");
    assert_eq!(json["filters"]["gender"], "female");
    assert_eq!(json["filters"]["procedureSpecific"], serde_json::json!({}));
}

#[test]
fn export_request_rejects_invalid_ranges_without_touching_session() {
    let mut session = ExportSession::new();
    session.select(ProcedureId::BiolitecLhp).expect("select");
    session.apply("procedureSpecific.vasScoreMin", "9").expect("apply");
    session.apply("procedureSpecific.vasScoreMax", "2").expect("apply");
    let before = session.clone();

    assert!(matches!(session.export_request(), Err(ExportError::InvalidRange(_))));
    assert_eq!(session, before);
}
