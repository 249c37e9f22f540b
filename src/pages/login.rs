//! Login page with email + password form.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::hooks::auth::{Auth, use_auth, use_store};
use crate::net::types::Credentials;
use crate::util::auth::install_login_redirect;

pub(crate) const PASSWORD_HINT: &str =
    "Must be more than 8 characters, including number, lowercase letter, uppercase letter";
pub(crate) const EMAIL_HINT: &str = "Enter valid email address";

const MIN_PASSWORD_CHARS: usize = 8;

fn is_valid_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && !domain.is_empty() && !domain.contains('@') && !email.contains(char::is_whitespace)
        }
        None => false,
    }
}

fn is_valid_password(password: &str) -> bool {
    password.chars().count() >= MIN_PASSWORD_CHARS
        && password.chars().any(|c| c.is_ascii_digit())
        && password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_uppercase())
}

/// Check form input before it reaches the store; the email is trimmed.
pub(crate) fn validate_login_input(email: &str, password: &str) -> Result<Credentials, &'static str> {
    let email = email.trim();
    if !is_valid_email(email) {
        return Err(EMAIL_HINT);
    }
    if !is_valid_password(password) {
        return Err(PASSWORD_HINT);
    }
    Ok(Credentials::new(email, password))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    install_login_redirect(use_store().state(), use_navigate());
    let Auth { is_loading, error, actions, .. } = use_auth();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let hint = RwSignal::new(None::<&'static str>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if is_loading.get_untracked() {
            return;
        }
        match validate_login_input(&email.get_untracked(), &password.get_untracked()) {
            Ok(credentials) => {
                hint.set(None);
                #[cfg(feature = "hydrate")]
                {
                    let actions = actions.clone();
                    leptos::task::spawn_local(async move {
                        actions.login(credentials).await;
                    });
                }
                #[cfg(not(feature = "hydrate"))]
                {
                    let _ = (credentials, &actions);
                }
            }
            Err(message) => hint.set(Some(message)),
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <form class="login-form" on:submit=on_submit>
                    <h2>"Login"</h2>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="mail@site.com"
                        required=true
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        required=true
                        minlength="8"
                        title=PASSWORD_HINT
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <Show when=move || hint.get().is_some()>
                        <p class="login-message">{move || hint.get().unwrap_or_default()}</p>
                    </Show>
                    <Show when=move || error.get().is_some()>
                        <div class="login-alert" role="alert">
                            <span>{move || error.get().unwrap_or_default()}</span>
                        </div>
                    </Show>
                    <button class="login-button" type="submit" disabled=move || is_loading.get()>
                        {move || if is_loading.get() { "Logging in..." } else { "Login" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
