//! Landing page.

use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <p>"Welcome to DevTinder! Please login to continue."</p>
        </div>
    }
}
