use std::cell::RefCell;

use super::*;
use crate::net::types::User;

fn user() -> User {
    User { id: "u1".to_owned(), email: "a@b.com".to_owned(), ..User::default() }
}

#[test]
fn should_redirect_unauth_when_not_loading_and_user_missing() {
    let state = AuthState::default();
    assert!(should_redirect_unauth(&state));
}

#[test]
fn should_redirect_unauth_after_failed_login() {
    let state = AuthState { error: Some("Invalid credentials".to_owned()), ..AuthState::default() };
    assert!(should_redirect_unauth(&state));
}

#[test]
fn should_not_redirect_while_loading() {
    let state = AuthState { loading: true, ..AuthState::default() };
    assert!(!should_redirect_unauth(&state));
}

#[test]
fn should_not_redirect_when_user_exists() {
    let state = AuthState { user: Some(user()), ..AuthState::default() };
    assert!(!should_redirect_unauth(&state));
}

#[test]
fn should_leave_login_only_with_user() {
    assert!(!should_leave_login(&AuthState::default()));
    assert!(!should_leave_login(&AuthState { loading: true, ..AuthState::default() }));
    assert!(should_leave_login(&AuthState { user: Some(user()), ..AuthState::default() }));
}

#[test]
fn unauth_guard_navigates_to_login_for_anonymous() {
    let visited = RefCell::new(Vec::new());
    let navigate = |path: &str, _: NavigateOptions| visited.borrow_mut().push(path.to_owned());

    assert!(redirect_when(&AuthState::default(), should_redirect_unauth, LOGIN_ROUTE, &navigate));
    assert_eq!(*visited.borrow(), vec!["/login".to_owned()]);
}

#[test]
fn unauth_guard_stays_put_while_loading_or_signed_in() {
    let visited = RefCell::new(Vec::<String>::new());
    let navigate = |path: &str, _: NavigateOptions| visited.borrow_mut().push(path.to_owned());

    let loading = AuthState { loading: true, ..AuthState::default() };
    let signed_in = AuthState { user: Some(user()), ..AuthState::default() };
    assert!(!redirect_when(&loading, should_redirect_unauth, LOGIN_ROUTE, &navigate));
    assert!(!redirect_when(&signed_in, should_redirect_unauth, LOGIN_ROUTE, &navigate));
    assert!(visited.borrow().is_empty());
}

#[test]
fn login_redirect_navigates_to_dashboard_once_user_present() {
    let visited = RefCell::new(Vec::new());
    let navigate = |path: &str, _: NavigateOptions| visited.borrow_mut().push(path.to_owned());

    let loading = AuthState { loading: true, ..AuthState::default() };
    assert!(!redirect_when(&loading, should_leave_login, DASHBOARD_ROUTE, &navigate));
    let signed_in = AuthState { user: Some(user()), ..AuthState::default() };
    assert!(redirect_when(&signed_in, should_leave_login, DASHBOARD_ROUTE, &navigate));
    assert_eq!(*visited.borrow(), vec!["/dashboard".to_owned()]);
}
