//! Card component for cell list items.
//!
//! DESIGN
//! ======
//! Keeps cell presentation consistent between the dashboard and the cells
//! page; join/leave intent is reported through callbacks so the owning page
//! controls the network call and refetch.

use leptos::prelude::*;

use crate::net::types::Cell;

/// A card representing one cell, with an optional join or leave action.
#[component]
pub fn CellCard(
    cell: Cell,
    #[prop(into, optional)] on_join: Option<Callback<i64>>,
    #[prop(into, optional)] on_quit: Option<Callback<i64>>,
) -> impl IntoView {
    let cell_id = cell.id;
    let description = cell.description.clone().unwrap_or_default();
    let has_description = !description.is_empty();

    view! {
        <div class="cell-card">
            <span class="cell-card__name">{cell.name.clone()}</span>
            <Show when=move || has_description>
                <p class="cell-card__description">{description.clone()}</p>
            </Show>
            <Show when=move || on_join.is_some()>
                <button
                    class="cell-card__action"
                    on:click=move |_| {
                        if let Some(on_join) = on_join.as_ref() {
                            on_join.run(cell_id);
                        }
                    }
                >
                    "Join"
                </button>
            </Show>
            <Show when=move || on_quit.is_some()>
                <button
                    class="cell-card__action cell-card__action--quit"
                    on:click=move |_| {
                        if let Some(on_quit) = on_quit.as_ref() {
                            on_quit.run(cell_id);
                        }
                    }
                >
                    "Leave"
                </button>
            </Show>
        </div>
    }
}
