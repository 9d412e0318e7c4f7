//! Cells page: browse every cell and join one.

use leptos::prelude::*;

use crate::components::cell_card::CellCard;
use crate::components::route_guard::RequireAuth;
use crate::net::types::Cell;
use crate::state::session::Session;

#[component]
pub fn CellsPage() -> impl IntoView {
    view! {
        <RequireAuth>
            <CellsContent/>
        </RequireAuth>
    }
}

/// Full cell catalogue with join actions. Joining refetches the list so the
/// view always reflects the backend; leaving happens from the dashboard.
#[component]
fn CellsContent() -> impl IntoView {
    let session = expect_context::<Session>();
    let error = RwSignal::new(String::new());

    let cells = LocalResource::new(move || {
        // Track the session so the list refetches after a re-login.
        let _ = session.get();
        async move { crate::net::cells::list_all_cells().await.map_err(|e| e.to_string()) }
    });

    let on_join = Callback::new(move |cell_id: i64| {
        #[cfg(feature = "hydrate")]
        {
            let cells = cells.clone();
            leptos::task::spawn_local(async move {
                match crate::net::cells::join_cell(cell_id).await {
                    Ok(_) => {
                        error.set(String::new());
                        cells.refetch();
                    }
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
        <div class="cells-page">
            <header class="cells-page__header">
                <h1>"Cells"</h1>
            </header>
            <Show when=move || !error.get().is_empty()>
                <p class="cells-page__error">{move || error.get()}</p>
            </Show>
            <Suspense fallback=move || view! { <p>"Loading cells..."</p> }>
                {move || cells.get().map(|result| render_catalogue(result, on_join))}
            </Suspense>
        </div>
    }
}

fn render_catalogue(result: Result<Vec<Cell>, String>, on_join: Callback<i64>) -> AnyView {
    match result {
        Ok(list) => {
            if list.is_empty() {
                view! { <p class="cells-page__empty">"No cells yet."</p> }.into_any()
            } else {
                view! {
                    <div class="cells-page__cards">
                        {list
                            .into_iter()
                            .map(|cell| view! { <CellCard cell=cell on_join=on_join/> })
                            .collect::<Vec<_>>()}
                    </div>
                }
                .into_any()
            }
        }
        Err(e) => view! { <p class="cells-page__error">{e}</p> }.into_any(),
    }
}
