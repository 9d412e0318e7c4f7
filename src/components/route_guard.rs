//! Navigation adapters for the route guard decisions.
//!
//! DESIGN
//! ======
//! The allow/redirect/loading rules live in `util::guard` as pure functions;
//! these wrappers only translate a decision into rendering and an `Effect`
//! that performs the actual navigation. Redirect effects re-run when session
//! state changes and are no-ops otherwise, so stable state cannot produce
//! redirect loops.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::state::session::{DEFAULT_LANDING_ROUTE, Session};
use crate::util::guard::{self, GuardDecision};
use crate::util::storage;

/// Wrap a member-only route.
///
/// Anonymous visitors have the path they attempted parked as the intended
/// route, then get sent to the login page.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<Session>();
    let location = use_location();
    let navigate = use_navigate();

    Effect::new(move || {
        if guard::guard_protected(&session.get()) == GuardDecision::RedirectToLogin {
            storage::save_intended_route(&location.pathname.get_untracked());
            navigate(guard::LOGIN_ROUTE, NavigateOptions::default());
        }
    });

    view! {
        {move || match guard::guard_protected(&session.get()) {
            GuardDecision::Allow => children(),
            GuardDecision::Loading => {
                view! { <p class="route-guard__loading">"Loading..."</p> }.into_any()
            }
            _ => ().into_any(),
        }}
    }
}

/// Wrap a guest-only route (login, registration).
///
/// Signed-in visitors are sent to the landing page without rendering the
/// guarded form.
#[component]
pub fn GuestOnly(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<Session>();
    let navigate = use_navigate();

    Effect::new(move || {
        if guard::guard_guest_only(&session.get()) == GuardDecision::RedirectToDashboard {
            navigate(DEFAULT_LANDING_ROUTE, NavigateOptions::default());
        }
    });

    view! {
        {move || match guard::guard_guest_only(&session.get()) {
            GuardDecision::Allow => children(),
            GuardDecision::Loading => {
                view! { <p class="route-guard__loading">"Loading..."</p> }.into_any()
            }
            _ => ().into_any(),
        }}
    }
}
