//! Profile page: completion and account status for the signed-in user.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::hooks::auth::use_store;
use crate::hooks::profile::{use_user_profile, use_user_status};
use crate::util::auth::install_unauth_redirect;

fn yes_no(flag: bool) -> &'static str {
    if flag { "Yes" } else { "No" }
}

/// Profile page. Redirects to `/login` if the user is not authenticated.
#[component]
pub fn ProfilePage() -> impl IntoView {
    install_unauth_redirect(use_store().state(), use_navigate());
    let profile = use_user_profile();
    let status = use_user_status();

    view! {
        <div class="profile-page">
            <h1>"Profile"</h1>
            <p class="profile-page__completion">
                {move || format!("Profile {}% complete", profile.profile_completion_percentage.get())}
            </p>
            <Show when=move || !profile.is_profile_complete.get()>
                <p class="profile-page__hint">"Add your name, age, and gender to complete your profile."</p>
            </Show>
            <dl class="profile-page__status">
                <dt>"Active"</dt>
                <dd>{move || yes_no(status.get().is_active)}</dd>
                <dt>"Verified"</dt>
                <dd>{move || yes_no(status.get().is_verified)}</dd>
                <dt>"Can connect"</dt>
                <dd>{move || yes_no(status.get().can_perform_actions)}</dd>
            </dl>
        </div>
    }
}
