//! Session-aware navigation bar.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::Session;
use crate::util::dark_mode;

/// Top navigation bar: member links and logout when signed in, login and
/// registration links otherwise, plus the dark-mode toggle.
#[component]
pub fn Navbar() -> impl IntoView {
    let session = expect_context::<Session>();
    let navigate = use_navigate();

    let dark = RwSignal::new(false);
    Effect::new(move || {
        let enabled = dark_mode::read_preference();
        dark_mode::apply(enabled);
        dark.set(enabled);
    });
    let on_toggle_theme = move |_| {
        dark.set(dark_mode::toggle(dark.get_untracked()));
    };

    let on_logout = move |_| {
        let dest = session.logout();
        navigate(dest, NavigateOptions::default());
    };

    view! {
        <nav class="navbar">
            <a class="navbar__brand" href="/">"Artware Club"</a>
            <div class="navbar__links">
                <Show
                    when=move || session.get().is_authenticated()
                    fallback=|| {
                        view! {
                            <a class="navbar__link" href="/login">"Sign in"</a>
                            <a class="navbar__link navbar__link--accent" href="/register">
                                "Join the club"
                            </a>
                        }
                    }
                >
                    <a class="navbar__link" href="/dashboard">"Dashboard"</a>
                    <a class="navbar__link" href="/cells">"Cells"</a>
                    <a class="navbar__link" href="/reclamation">"Reclamation"</a>
                    <button class="navbar__logout" on:click=on_logout.clone()>
                        "Sign out"
                    </button>
                </Show>
                <button
                    class="navbar__theme-toggle"
                    on:click=on_toggle_theme
                    title="Toggle dark mode"
                    aria-label="Toggle dark mode"
                >
                    {move || if dark.get() { "☀" } else { "☾" }}
                </button>
            </div>
        </nav>
    }
}
