//! Dashboard page placeholder behind the auth guard.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::hooks::auth::{use_auth, use_store};
use crate::util::auth::install_unauth_redirect;

/// Dashboard page. Redirects to `/login` if the user is not authenticated.
#[component]
pub fn DashboardPage() -> impl IntoView {
    install_unauth_redirect(use_store().state(), use_navigate());
    let auth = use_auth();
    let display_name = auth.display_name;

    view! {
        <div class="dashboard-page">
            <h1>"Dashboard"</h1>
            <p>{move || format!("Signed in as {}", display_name.get())}</p>
            <p>"Dashboard - Coming Soon!"</p>
        </div>
    }
}
