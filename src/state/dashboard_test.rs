use super::*;

fn data() -> DashboardData {
    DashboardData {
        summary: AnalyticsSummary { total_doctors: 1, total_surgeries: 2, active_patients: 3, uptime_percent: 99.8 },
        trends: vec![],
        distribution: vec![],
        recent_activity: vec![],
        top_doctors: vec![],
    }
}

#[test]
fn load_cycle_fills_all_slots_at_once() {
    let mut state = DashboardState::default();
    state.load_pending();
    assert!(state.data.is_pending());

    state.load_fulfilled(data());
    let loaded = state.data.value().expect("data");
    assert_eq!(loaded.summary.total_doctors, 1);
}

#[test]
fn rejection_blanks_nothing_that_was_not_there() {
    let mut state = DashboardState::default();
    state.load_pending();
    state.load_rejected("analytics unavailable".into());
    assert_eq!(state.data.error(), Some("analytics unavailable"));
    assert!(state.data.value().is_none());
}
