//! Member dashboard listing the cells the signed-in user belongs to.

use leptos::prelude::*;

use crate::components::cell_card::CellCard;
use crate::components::route_guard::RequireAuth;
use crate::net::types::Cell;
use crate::state::session::Session;

#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <RequireAuth>
            <DashboardContent/>
        </RequireAuth>
    }
}

/// Greeting plus the member's cells, each with a leave action. Leaving a
/// cell refetches the list; no membership state is cached locally.
#[component]
fn DashboardContent() -> impl IntoView {
    let session = expect_context::<Session>();
    let error = RwSignal::new(String::new());

    let cells = LocalResource::new(move || {
        let user_id = session.get().profile.map(|p| p.id);
        async move {
            match user_id {
                Some(id) => crate::net::cells::list_user_cells(&id)
                    .await
                    .map_err(|e| e.to_string()),
                None => Ok(Vec::new()),
            }
        }
    });

    let on_quit = Callback::new(move |cell_id: i64| {
        #[cfg(feature = "hydrate")]
        {
            let cells = cells.clone();
            leptos::task::spawn_local(async move {
                match crate::net::cells::quit_cell(cell_id).await {
                    Ok(_) => cells.refetch(),
                    Err(e) => error.set(e.to_string()),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = cell_id;
        }
    });

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h1>"My cells"</h1>
                <p class="dashboard-page__greeting">
                    {move || {
                        session
                            .get()
                            .profile
                            .map(|p| format!("Signed in as {}", p.name))
                            .unwrap_or_default()
                    }}
                </p>
            </header>
            <Show when=move || !error.get().is_empty()>
                <p class="dashboard-page__error">{move || error.get()}</p>
            </Show>
            <Suspense fallback=move || view! { <p>"Loading cells..."</p> }>
                {move || {
                    cells.get().map(|result| render_cell_list(result, on_quit))
                }}
            </Suspense>
        </div>
    }
}

fn render_cell_list(result: Result<Vec<Cell>, String>, on_quit: Callback<i64>) -> AnyView {
    match result {
        Ok(list) => {
            if list.is_empty() {
                view! {
                    <p class="dashboard-page__empty">"You have not joined any cell yet."</p>
                }
                .into_any()
            } else {
                view! {
                    <div class="dashboard-page__cards">
                        {list
                            .into_iter()
                            .map(|cell| view! { <CellCard cell=cell on_quit=on_quit/> })
                            .collect::<Vec<_>>()}
                    </div>
                }
                .into_any()
            }
        }
        Err(e) => view! { <p class="dashboard-page__error">{e}</p> }.into_any(),
    }
}
