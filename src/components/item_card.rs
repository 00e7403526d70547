//! Item Card Component
//!
//! One wishlist entry. Swiping the card left reveals a delete trigger
//! behind it; the inline button offers the same on desktop.

use leptos::prelude::*;
use leptos_swipe::{
    bind_window_mouse, create_swipe_signals, make_on_mousedown, make_on_touchend,
    make_on_touchmove, make_on_touchstart, SwipePhase, DEFAULT_MAX_OFFSET,
};
use planejaqui_core::format::format_brl;

use crate::components::DeleteConfirmButton;
use crate::context::use_app_context;
use crate::models::{badge_class, external_href, Item};
use crate::store::{open_edit, use_ui_store};

#[component]
pub fn ItemCard(item: Item) -> impl IntoView {
    let ctx = use_app_context();
    let ui = use_ui_store();
    let swipe = create_swipe_signals(DEFAULT_MAX_OFFSET);
    bind_window_mouse(swipe);

    let id = StoredValue::new(item.id.clone());

    let delete_revealed = move |_: web_sys::MouseEvent| {
        if swipe.confirm() {
            ctx.remove(&id.get_value());
        }
    };

    // A tap on an open card closes it instead of acting on the card
    let on_card_click = move |_: web_sys::MouseEvent| {
        if swipe.just_swiped.get_untracked() {
            return;
        }
        if swipe.state.with_untracked(|s| s.is_revealed()) {
            swipe.reset();
        }
    };

    let on_edit = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        if swipe.just_swiped.get_untracked() {
            return;
        }
        swipe.reset();
        open_edit(&ui, id.get_value());
    };

    let card_style = move || format!("transform: translateX(-{}px)", swipe.offset());
    let dragging = move || swipe.state.with(|s| s.is_dragging());
    let revealed = move || swipe.phase() == SwipePhase::Revealed;

    let Item { name, description, price, store_link, category, .. } = item;

    view! {
        <div class="swipe-container" class:revealed=revealed>
            <button
                class="swipe-delete"
                title="Remover item"
                tabindex=move || if revealed() { "0" } else { "-1" }
                on:click=delete_revealed
            >
                "Excluir"
            </button>
            <article
                class="item-card"
                class:dragging=dragging
                style=card_style
                on:mousedown=make_on_mousedown(swipe)
                on:touchstart=make_on_touchstart(swipe)
                on:touchmove=make_on_touchmove(swipe)
                on:touchend=make_on_touchend(swipe)
                on:click=on_card_click
            >
                <div class="card-top">
                    <div class="card-text">
                        <span class=badge_class(category)>{category.label()}</span>
                        <h3 class="card-title">{name}</h3>
                        <p class="card-description">{description}</p>
                    </div>
                    <div class="card-actions">
                        <button class="icon-btn" title="Editar item" on:click=on_edit>"✎"</button>
                        <DeleteConfirmButton
                            button_class="icon-btn danger"
                            on_confirm=Callback::new(move |_| {
                                ctx.remove(&id.get_value());
                            })
                        />
                    </div>
                </div>
                <div class="card-bottom">
                    <span class="card-price">{format_brl(price)}</span>
                    {store_link.filter(|link| !link.trim().is_empty()).map(|link| view! {
                        <a
                            class="store-link"
                            href=external_href(&link)
                            target="_blank"
                            rel="noopener noreferrer"
                            on:click=|ev| ev.stop_propagation()
                        >
                            "Ver na Loja ↗"
                        </a>
                    })}
                </div>
            </article>
        </div>
    }
}
