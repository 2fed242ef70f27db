use super::*;

// =============================================================
// Defaults and wire shape
// =============================================================

#[test]
fn default_tree_has_all_common_fields() {
    let filters = FilterState::default();
    assert_eq!(filters.date_range.start, "");
    assert_eq!(filters.date_range.end, "");
    assert_eq!(filters.patient_age.min, "");
    assert_eq!(filters.patient_age.max, "");
    assert_eq!(filters.gender, Gender::All);
    assert_eq!(filters.status, RecordStatus::All);
    assert!(filters.procedure_specific.is_empty());
}

#[test]
fn wire_shape_matches_remote_contract() {
    let json = serde_json::to_value(FilterState::default()).expect("serialize");
    assert_eq!(
        json,
        serde_json::json!({
            "dateRange": {"start": "", "end": ""},
            "patientAge": {"min": "", "max": ""},
            "gender": "all",
            "status": "all",
            "procedureSpecific": {}
        })
    );
}

#[test]
fn status_follow_ups_keeps_hyphenated_spelling() {
    let filters = FilterState::default().update("status", "follow-ups").expect("update");
    let json = serde_json::to_value(&filters).expect("serialize");
    assert_eq!(json["status"], "follow-ups");
}

// =============================================================
// Path updater
// =============================================================

#[test]
fn update_reads_back_at_same_path() {
    let paths = [
        ("dateRange.start", "2024-01-01"),
        ("dateRange.end", "2024-06-30"),
        ("patientAge.min", "18"),
        ("patientAge.max", "65"),
        ("gender", "female"),
        ("status", "draft"),
        ("procedureSpecific.laserWavelength", "1470nm"),
    ];
    for (path, value) in paths {
        let updated = FilterState::default().update(path, value).expect("update");
        assert_eq!(updated.get(path).as_deref(), Some(value), "path {path}");
    }
}

#[test]
fn update_is_pure_and_preserves_siblings() {
    let base = FilterState::default()
        .update("dateRange.start", "2024-01-01")
        .and_then(|f| f.update("patientAge.min", "18"))
        .and_then(|f| f.update("procedureSpecific.anaesthesia", "spinal"))
        .expect("seed");
    let snapshot = base.clone();

    let updated = base.update("dateRange.end", "2024-12-31").expect("update");

    // Input untouched.
    assert_eq!(base, snapshot);
    // Every other leaf keeps its value.
    assert_eq!(updated.date_range.start, "2024-01-01");
    assert_eq!(updated.patient_age.min, "18");
    assert_eq!(updated.procedure_specific.get("anaesthesia").map(String::as_str), Some("spinal"));
    assert_eq!(updated.date_range.end, "2024-12-31");
}

#[test]
fn unknown_procedure_key_is_created_silently() {
    let updated = FilterState::default()
        .update("procedureSpecific.futureFilter", "42")
        .expect("update");
    assert_eq!(updated.get("procedureSpecific.futureFilter").as_deref(), Some("42"));
}

#[test]
fn unknown_common_path_is_rejected() {
    let err = FilterState::default().update("dateRange.middle", "x").expect_err("reject");
    assert_eq!(err, FilterPathError::UnknownPath("dateRange.middle".into()));
}

#[test]
fn bare_procedure_specific_path_is_rejected() {
    let err = FilterState::default().update("procedureSpecific.", "x").expect_err("reject");
    assert_eq!(err, FilterPathError::UnknownPath("procedureSpecific.".into()));
}

#[test]
fn enum_field_rejects_values_outside_closed_set() {
    let err = FilterState::default().update("gender", "unknown").expect_err("reject");
    assert_eq!(err, FilterPathError::InvalidValue { path: "gender".into(), value: "unknown".into() });
}

#[test]
fn absent_procedure_key_reads_as_none() {
    assert!(FilterState::default().get("procedureSpecific.vasScoreMin").is_none());
}

// =============================================================
// Procedure-specific resets
// =============================================================

#[test]
fn without_procedure_filters_clears_only_the_map() {
    let filters = FilterState::default()
        .update("dateRange.start", "2024-01-01")
        .and_then(|f| f.update("procedureSpecific.symptom_pain", "yes"))
        .expect("seed");
    let cleared = filters.without_procedure_filters();
    assert!(cleared.procedure_specific.is_empty());
    assert_eq!(cleared.date_range.start, "2024-01-01");
}

// =============================================================
// Validation boundary
// =============================================================

#[test]
fn default_tree_validates() {
    assert!(FilterState::default().validate().is_ok());
}

#[test]
fn inverted_age_range_fails_validation() {
    let filters = FilterState::default()
        .update("patientAge.min", "70")
        .and_then(|f| f.update("patientAge.max", "30"))
        .expect("seed");
    assert!(matches!(filters.validate(), Err(RangeError::Inverted { field: "patientAge", .. })));
}

#[test]
fn vas_score_outside_domain_fails_validation() {
    let filters = FilterState::default()
        .update("procedureSpecific.vasScoreMin", "12")
        .expect("seed");
    assert!(matches!(filters.validate(), Err(RangeError::OutOfDomain { field: "vasScore", .. })));
}

#[test]
fn non_numeric_laser_power_fails_validation() {
    let filters = FilterState::default()
        .update("procedureSpecific.laserPowerMax", "high")
        .expect("seed");
    assert!(matches!(filters.validate(), Err(RangeError::NotNumeric { field: "laserPower", .. })));
}
