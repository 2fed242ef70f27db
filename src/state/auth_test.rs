use super::*;
use crate::net::test_helpers::test_admin;

#[test]
fn default_state_is_unauthenticated() {
    let state = AuthState::default();
    assert!(!state.is_authenticated());
    assert_eq!(state.request, Loadable::Idle);
}

#[test]
fn hydration_restores_a_persisted_login() {
    let stored = StoredSession { access_token: "tok".into(), admin: test_admin() };
    let state = AuthState::hydrated(Some(stored));
    assert!(state.is_authenticated());
    assert_eq!(state.access_token.as_deref(), Some("tok"));
}

#[test]
fn login_cycle_sets_and_clears_phases() {
    let mut state = AuthState::default();
    state.login_pending();
    assert!(state.request.is_pending());

    let response = LoginResponse { access_token: "tok".into(), admin: test_admin() };
    state.login_fulfilled(&response);
    assert!(state.is_authenticated());
    assert!(state.request.is_fulfilled());
}

#[test]
fn rejected_login_drops_credentials() {
    let mut state = AuthState::hydrated(Some(StoredSession { access_token: "old".into(), admin: test_admin() }));
    state.login_pending();
    state.login_rejected("invalid credentials".into());
    assert!(!state.is_authenticated());
    assert_eq!(state.request.error(), Some("invalid credentials"));
}

#[test]
fn logout_clears_credentials_on_both_settle_paths() {
    let mut state = AuthState::default();
    state.login_fulfilled(&LoginResponse { access_token: "tok".into(), admin: test_admin() });

    state.logout_pending();
    state.logout_settled();
    assert!(!state.is_authenticated());
    assert_eq!(state.request, Loadable::Idle);
}

#[test]
fn clear_error_resets_only_rejections() {
    let mut state = AuthState::default();
    state.login_rejected("boom".into());
    state.clear_error();
    assert_eq!(state.request, Loadable::Idle);
}
