//! Top navigation bar with the signed-in user's avatar and logout.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::hooks::auth::{Auth, use_auth};
use crate::util::auth::LOGIN_ROUTE;

#[component]
pub fn NavBar() -> impl IntoView {
    let Auth { is_authenticated, display_name, initials, actions, .. } = use_auth();
    let navigate = use_navigate();

    let on_logout = move |_| {
        actions.logout();
        navigate(LOGIN_ROUTE, NavigateOptions::default());
    };

    view! {
        <nav class="nav-bar">
            <a href="/" class="nav-bar__brand">"DevTinder"</a>
            <Show
                when=move || is_authenticated.get()
                fallback=|| view! { <a href=LOGIN_ROUTE class="nav-bar__link">"Login"</a> }
            >
                <a href="/profile" class="nav-bar__user" title=move || display_name.get()>
                    <span class="nav-bar__avatar">{move || initials.get()}</span>
                    <span class="nav-bar__name">{move || display_name.get()}</span>
                </a>
                <button class="btn nav-bar__logout" on:click=on_logout.clone()>
                    "Logout"
                </button>
            </Show>
        </nav>
    }
}
