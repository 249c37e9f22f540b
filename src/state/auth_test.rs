use super::*;

fn user() -> User {
    User { id: "1".to_owned(), email: "a@b.com".to_owned(), ..User::default() }
}

// =============================================================
// AuthState defaults
// =============================================================

#[test]
fn auth_state_default_is_anonymous() {
    let state = AuthState::default();
    assert!(state.user.is_none());
    assert!(!state.loading);
    assert!(state.error.is_none());
    assert_eq!(state.phase(), AuthPhase::Anonymous);
    assert!(!state.is_authenticated());
}

// =============================================================
// Transitions
// =============================================================

#[test]
fn begin_login_sets_loading_and_clears_error() {
    let mut state = AuthState { error: Some("old".to_owned()), ..AuthState::default() };
    assert_eq!(state.phase(), AuthPhase::Failed);
    state.begin_login();
    assert!(state.loading);
    assert!(state.error.is_none());
    assert_eq!(state.phase(), AuthPhase::Authenticating);
}

#[test]
fn finish_login_with_user_authenticates() {
    let mut state = AuthState::default();
    state.begin_login();
    state.finish_login(Some(user()));
    assert_eq!(state.user, Some(user()));
    assert!(!state.loading);
    assert_eq!(state.phase(), AuthPhase::Authenticated);
}

#[test]
fn finish_login_without_user_returns_to_anonymous() {
    let mut state = AuthState::default();
    state.begin_login();
    state.finish_login(None);
    assert!(state.user.is_none());
    assert!(!state.loading);
    assert_eq!(state.phase(), AuthPhase::Anonymous);
}

#[test]
fn fail_login_records_error_and_keeps_user() {
    let mut state = AuthState { user: Some(user()), ..AuthState::default() };
    state.begin_login();
    state.fail_login("Invalid credentials".to_owned());
    assert_eq!(state.error.as_deref(), Some("Invalid credentials"));
    assert!(!state.loading);
    assert_eq!(state.user, Some(user()));
}

#[test]
fn failed_phase_requires_no_user() {
    let mut state = AuthState::default();
    state.begin_login();
    state.fail_login("nope".to_owned());
    assert_eq!(state.phase(), AuthPhase::Failed);
}

#[test]
fn clear_session_drops_user_and_error_only() {
    let mut state = AuthState { user: Some(user()), loading: true, error: Some("x".to_owned()) };
    state.clear_session();
    assert!(state.user.is_none());
    assert!(state.error.is_none());
    assert!(state.loading);
}
