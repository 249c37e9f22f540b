//! Profile and status derivations for the signed-in user.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use leptos::prelude::*;

use super::auth::use_store;
use crate::net::types::User;

/// Fields counted toward [`profile_completion_percentage`].
const PROFILE_FIELD_COUNT: usize = 5;

/// `"first last"` trimmed, or the email when both name parts are empty.
pub fn display_name(user: Option<&User>) -> String {
    let Some(user) = user else {
        return String::new();
    };
    let full = format!(
        "{} {}",
        user.first_name.as_deref().unwrap_or_default(),
        user.last_name.as_deref().unwrap_or_default()
    );
    let full = full.trim();
    if full.is_empty() { user.email.clone() } else { full.to_owned() }
}

/// Uppercased first letters of first + last name, else of the email.
pub fn initials(user: Option<&User>) -> String {
    let Some(user) = user else {
        return String::new();
    };
    let first = first_char(user.first_name.as_deref());
    let last = first_char(user.last_name.as_deref());
    match (first, last) {
        (Some(f), Some(l)) => f.to_uppercase().chain(l.to_uppercase()).collect(),
        _ => first_char(Some(user.email.as_str())).map(|c| c.to_uppercase().collect()).unwrap_or_default(),
    }
}

fn first_char(value: Option<&str>) -> Option<char> {
    value?.chars().next()
}

fn filled(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.is_empty())
}

/// First name, last name, a non-zero age, and gender are all set.
pub fn is_profile_complete(user: Option<&User>) -> bool {
    user.is_some_and(|u| {
        filled(u.first_name.as_deref())
            && filled(u.last_name.as_deref())
            && u.age.is_some_and(|age| age != 0)
            && filled(u.gender.as_deref())
    })
}

/// Share of the five profile fields present, rounded to a whole percent.
///
/// Unlike [`is_profile_complete`], an age of zero counts as present.
pub fn profile_completion_percentage(user: Option<&User>) -> u8 {
    let Some(user) = user else {
        return 0;
    };
    let present = [
        filled(user.first_name.as_deref()),
        filled(user.last_name.as_deref()),
        user.age.is_some(),
        filled(user.gender.as_deref()),
        filled(user.photo_url.as_deref()),
    ]
    .into_iter()
    .filter(|&p| p)
    .count();
    let rounded = (present * 200 + PROFILE_FIELD_COUNT) / (2 * PROFILE_FIELD_COUNT);
    u8::try_from(rounded).unwrap_or(100)
}

/// Account status flags; all false when nobody is signed in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UserStatus {
    pub is_active: bool,
    pub is_verified: bool,
    pub can_perform_actions: bool,
}

impl UserStatus {
    pub fn of(user: Option<&User>) -> Self {
        let is_active = user.is_some_and(|u| u.is_active);
        let is_verified = user.is_some_and(|u| u.is_verified);
        Self { is_active, is_verified, can_perform_actions: is_active && is_verified }
    }
}

/// Reactive profile projections.
#[derive(Clone, Copy)]
pub struct UserProfile {
    pub user: Signal<Option<User>>,
    pub is_profile_complete: Signal<bool>,
    pub profile_completion_percentage: Signal<u8>,
}

pub fn use_user_profile() -> UserProfile {
    let state = use_store().state();
    UserProfile {
        user: Signal::derive(move || state.with(|s| s.user.clone())),
        is_profile_complete: Signal::derive(move || state.with(|s| is_profile_complete(s.user.as_ref()))),
        profile_completion_percentage: Signal::derive(move || {
            state.with(|s| profile_completion_percentage(s.user.as_ref()))
        }),
    }
}

pub fn use_user_status() -> Signal<UserStatus> {
    let state = use_store().state();
    Signal::derive(move || state.with(|s| UserStatus::of(s.user.as_ref())))
}
