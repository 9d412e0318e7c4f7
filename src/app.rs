//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::navbar::Navbar;
use crate::pages::{
    cells::CellsPage, dashboard::DashboardPage, home::HomePage, login::LoginPage,
    reclamation::ReclamationPage, register::RegisterPage,
};
use crate::state::session::Session;

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
/// Provides the single session manager through context and sets up
/// client-side routing. Session state is hydrated from durable storage once,
/// in the browser only; during SSR the guards render loading placeholders.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = Session::new();
    provide_context(session);

    #[cfg(feature = "hydrate")]
    session.hydrate();

    view! {
        <Stylesheet id="leptos" href="/pkg/artware-web.css"/>
        <Title text="Artware Club"/>

        <Router>
            <Navbar/>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route path=StaticSegment("dashboard") view=DashboardPage/>
                <Route path=StaticSegment("cells") view=CellsPage/>
                <Route path=StaticSegment("reclamation") view=ReclamationPage/>
            </Routes>
        </Router>
    }
}
