//! Item List Component
//!
//! Header for the active category followed by the card grid.

use leptos::prelude::*;
use planejaqui_core::format::{format_brl, items_label};

use crate::components::ItemCard;
use crate::context::use_app_context;
use crate::models::Item;
use crate::store::{use_ui_store, UiStateStoreFields};

#[component]
pub fn ItemList() -> impl IntoView {
    let ctx = use_app_context();
    let ui = use_ui_store();
    let view_data = Memo::new(move |_| ctx.filtered_view(ui.filter().get()));

    let visible = move || view_data.with(|(items, _)| items.clone());

    view! {
        <div class="item-list">
            <div class="glass-card list-header">
                <div class="list-title">
                    <div class="stat-icon tone-gradient">"✦"</div>
                    <div>
                        <p class="eyebrow">"Categoria ativa"</p>
                        <h3>{move || ui.filter().get().label()}</h3>
                        <p class="hint">
                            {move || format!("{} neste grupo", view_data.with(|(items, _)| items_label(items.len())))}
                        </p>
                    </div>
                </div>
                <div class="list-total">
                    <p class="hint">"Total estimado"</p>
                    <p class="total-value">{move || view_data.with(|(_, total)| format_brl(*total))}</p>
                </div>
            </div>

            <Show
                when=move || view_data.with(|(items, _)| !items.is_empty())
                fallback=|| view! {
                    <div class="empty-filter">
                        <h3>"Nenhuma pendência nesta categoria"</h3>
                        <p class="hint">"Escolha outro ambiente ou registre um novo item."</p>
                    </div>
                }
            >
                <div class="cards-grid">
                    <For
                        each=visible
                        key=card_key
                        children=move |item| view! { <ItemCard item=item /> }
                    />
                </div>
            </Show>
        </div>
    }
}

/// Re-render a card whenever any displayed field changes
fn card_key(item: &Item) -> (String, String, String, u64, Option<String>, &'static str) {
    (
        item.id.as_str().to_string(),
        item.name.clone(),
        item.description.clone(),
        item.price.to_bits(),
        item.store_link.clone(),
        item.category.label(),
    )
}
