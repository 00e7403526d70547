//! Planejaqui Frontend App
//!
//! Page layout, startup load and the global scroll listener.

use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;
use planejaqui_core::load_or_empty;
use reactive_stores::Store;

use crate::components::{CategoryFilterPanel, Header, ItemForm, ItemList, Modal, StatsPanel};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::persistence;
use crate::store::{close_form, open_create, set_scroll_offset, UiState, UiStateStoreFields};

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let backend = persistence::from_config(&config);

    let ctx = AppContext::new(backend.clone());
    let ui = Store::new(UiState::default());
    provide_context(ctx);
    provide_context(ui);

    // Load once on mount
    spawn_local(async move {
        let items = load_or_empty(backend.as_ref()).await;
        ctx.rehydrate(items);
    });

    let on_scroll = window_event_listener(ev::scroll, move |_: web_sys::Event| {
        set_scroll_offset(&ui, window().scroll_y().unwrap_or(0.0));
    });
    on_cleanup(move || on_scroll.remove());

    let close = Callback::new(move |_| close_form(&ui));

    view! {
        <div class="app-layout">
            <Header />
            <main class="app-main" class:compact=move || ui.scrolled().get()>
                <StatsPanel />

                <section class="neutral-section intro">
                    <div class="intro-text">
                        <h2>"Seu enxoval, sonho a sonho"</h2>
                        <p class="hint">
                            "Priorize cômodos, acompanhe links de lojas e defina o investimento ideal para transformar cada ambiente da casa nova."
                        </p>
                    </div>
                    <button class="gradient-button" on:click=move |_| open_create(&ui)>
                        "+ Registrar novo item"
                    </button>
                </section>

                <Show
                    when=move || !ctx.is_empty()
                    fallback=move || view! {
                        <Show when=move || ctx.loaded.get()>
                            <section class="neutral-section empty-state">
                                <div class="empty-icon">"+"</div>
                                <h3>"Comece sua jornada de casa nova"</h3>
                                <p class="hint">
                                    "Adicione o primeiro item e monte sua coleção personalizada de prioridades, ideias e links favoritos para cada ambiente."
                                </p>
                                <button class="gradient-button" on:click=move |_| open_create(&ui)>
                                    "+ Adicionar primeiro item"
                                </button>
                            </section>
                        </Show>
                    }
                >
                    <div class="list-stack">
                        <CategoryFilterPanel />
                        <ItemList />
                    </div>
                </Show>
            </main>

            <Show when=move || ui.modal_open().get()>
                {move || {
                    let editing = ui.editing().get().and_then(|id| ctx.get_untracked(&id));
                    let title = if editing.is_some() { "Editar Pendência" } else { "Nova Pendência" };
                    view! {
                        <Modal title=title on_close=close>
                            <ItemForm editing=editing on_done=close />
                        </Modal>
                    }
                }}
            </Show>
        </div>
    }
}
