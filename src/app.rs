//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::nav_bar::NavBar;
use crate::pages::{
    dashboard::DashboardPage, home::HomePage, login::LoginPage, profile::ProfilePage,
};
use crate::state::store::AppStore;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Builds the user store once and provides it to the whole tree.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(AppStore::browser());

    view! {
        <Stylesheet id="leptos" href="/pkg/devtinder.css"/>
        <Title text="DevTinder"/>

        <Router>
            <NavBar/>
            <main class="app-main">
                <Routes fallback=|| "404 - Page Not Found".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("dashboard") view=DashboardPage/>
                    <Route path=StaticSegment("profile") view=ProfilePage/>
                </Routes>
            </main>
        </Router>
    }
}
