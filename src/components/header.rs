//! Header Component
//!
//! Brand bar pinned to the top of the page.

use leptos::prelude::*;

use crate::store::{use_ui_store, UiStateStoreFields};

/// Fixed top bar; shrinks once the page is scrolled
#[component]
pub fn Header() -> impl IntoView {
    let ui = use_ui_store();

    view! {
        <header class="app-header" class:compact=move || ui.scrolled().get()>
            <div class="header-inner">
                <div class="brand">
                    <span class="brand-icon">"⌂"</span>
                    <h1>"Planejaqui"</h1>
                </div>
                <p class="tagline">"Organize sua lista de presentes com estilo"</p>
            </div>
        </header>
    }
}
