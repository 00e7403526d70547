//! Category Filter Panel Component
//!
//! Collapsible panel with an "all" chip plus one chip per category,
//! each showing how many items it holds.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::models::{chip_class, Category, CategoryFilter};
use crate::store::{select_filter, toggle_filters, use_ui_store, UiStateStoreFields};

#[component]
pub fn CategoryFilterPanel() -> impl IntoView {
    let ctx = use_app_context();
    let ui = use_ui_store();
    let counts = Memo::new(move |_| ctx.counts());
    let open = move || ui.filters_open().get();
    let selected = move || ui.filter().get();

    view! {
        <div class="neutral-section filter-panel">
            <button class="filter-toggle" on:click=move |_| toggle_filters(&ui)>
                <div>
                    <p class="eyebrow">"Filtros"</p>
                    <h3>"Filtrar por ambiente"</h3>
                    <p class="hint">
                        {move || format!("Toque para {} categorias", if open() { "ocultar" } else { "visualizar" })}
                    </p>
                </div>
                <span class="chevron" class:open=open>"▾"</span>
            </button>
            <Show when=open>
                <div class="filter-chips">
                    <button
                        class=move || chip_class(selected() == CategoryFilter::All)
                        on:click=move |_| select_filter(&ui, CategoryFilter::All)
                    >
                        {move || format!("Todas ({})", counts.with(|c| c.values().sum::<usize>()))}
                    </button>
                    {Category::ALL.into_iter().map(|category| {
                        let filter = CategoryFilter::Only(category);
                        view! {
                            <button
                                class=move || chip_class(selected() == filter)
                                on:click=move |_| select_filter(&ui, filter)
                            >
                                {move || format!(
                                    "{} ({})",
                                    category.label(),
                                    counts.with(|c| c.get(&category).copied().unwrap_or(0)),
                                )}
                            </button>
                        }
                    }).collect_view()}
                </div>
            </Show>
        </div>
    }
}
