//! Marketing landing page.

use leptos::prelude::*;

/// Public landing page with the club pitch and sign-up call to action.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <section class="home-page__hero">
                <h1>"Artware Club"</h1>
                <p>"A community of makers. Join a cell, share a studio, build together."</p>
                <a href="/register" class="home-page__cta">"Join the club"</a>
            </section>
            <section class="home-page__features">
                <div class="home-page__feature">
                    <h2>"Cells"</h2>
                    <p>"Small working groups around a craft or a project."</p>
                </div>
                <div class="home-page__feature">
                    <h2>"Shared spaces"</h2>
                    <p>"Studios, tools, and kilns available to every member."</p>
                </div>
                <div class="home-page__feature">
                    <h2>"Open door"</h2>
                    <p>"Something wrong? The reclamation desk is one click away."</p>
                </div>
            </section>
        </div>
    }
}
