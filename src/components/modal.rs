//! Modal Component
//!
//! Mounted only while open. The Escape listener and the body scroll lock
//! are taken on mount and released when the modal is torn down.

use leptos::ev;
use leptos::prelude::*;

#[component]
pub fn Modal(
    #[prop(into)] title: String,
    #[prop(into)] on_close: Callback<()>,
    children: Children,
) -> impl IntoView {
    let on_escape = window_event_listener(ev::keydown, move |ev: web_sys::KeyboardEvent| {
        if ev.key() == "Escape" {
            on_close.run(());
        }
    });
    set_body_scroll_locked(true);

    on_cleanup(move || {
        on_escape.remove();
        set_body_scroll_locked(false);
    });

    view! {
        <div class="modal-root" role="dialog" aria-modal="true">
            <div class="modal-backdrop" on:click=move |_| on_close.run(())></div>
            <div class="modal-frame">
                <div class="modal-panel">
                    <div class="modal-header">
                        <div>
                            <p class="eyebrow">"planejaqui"</p>
                            <h2>{title}</h2>
                        </div>
                        <button class="modal-close" title="Fechar" on:click=move |_| on_close.run(())>
                            "✕"
                        </button>
                    </div>
                    <div class="modal-body">{children()}</div>
                </div>
            </div>
        </div>
    }
}

fn set_body_scroll_locked(locked: bool) {
    let Some(body) = document().body() else {
        return;
    };
    let style = body.style();
    let result = if locked {
        style.set_property("overflow", "hidden")
    } else {
        style.remove_property("overflow").map(|_| ())
    };
    if let Err(e) = result {
        log::warn!("[MODAL] Could not toggle body scroll: {:?}", e);
    }
}
