//! Item Form Component
//!
//! Create or edit an item. Submission is ignored until the fields parse
//! into a valid draft.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::models::{Category, DraftInput, Item};

#[component]
pub fn ItemForm(
    /// Item being edited; None creates a new one
    editing: Option<Item>,
    /// Runs after a successful submit and on cancel
    #[prop(into)]
    on_done: Callback<()>,
) -> impl IntoView {
    let ctx = use_app_context();

    let initial = editing
        .as_ref()
        .map(|item| DraftInput::from_draft(&item.to_draft()))
        .unwrap_or_default();
    let is_editing = editing.is_some();
    let editing_id = StoredValue::new(editing.map(|item| item.id));

    let name = RwSignal::new(initial.name);
    let description = RwSignal::new(initial.description);
    let price = RwSignal::new(initial.price);
    let store_link = RwSignal::new(initial.store_link);
    let category = RwSignal::new(initial.category);

    let input = move || DraftInput {
        name: name.get(),
        description: description.get(),
        price: price.get(),
        store_link: store_link.get(),
        category: category.get(),
    };
    let is_valid = move || input().parse().is_ok();

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let draft = match input().parse() {
            Ok(draft) => draft,
            Err(e) => {
                log::debug!("[FORM] Ignoring submit: {}", e);
                return;
            }
        };
        match editing_id.get_value() {
            Some(id) => {
                if !ctx.update(&id, draft) {
                    log::warn!("[FORM] Item {} no longer exists", id);
                }
            }
            None => ctx.add(draft),
        }
        on_done.run(());
    };

    view! {
        <form class="item-form" on:submit=submit>
            <div class="form-row">
                <label class="form-field">
                    <span>"Nome do Item *"</span>
                    <input
                        type="text"
                        placeholder="Ex: Sofá 3 lugares"
                        required
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                </label>
                <label class="form-field">
                    <span>"Categoria *"</span>
                    <select
                        required
                        prop:value=move || category.get()
                        on:change=move |ev| category.set(event_target_value(&ev))
                    >
                        <option value="">"Selecione uma categoria"</option>
                        {Category::ALL.into_iter().map(|c| view! {
                            <option value=c.label() selected=move || category.get() == c.label()>
                                {c.label()}
                            </option>
                        }).collect_view()}
                    </select>
                </label>
            </div>

            <label class="form-field">
                <span>"Descrição"</span>
                <textarea
                    rows="3"
                    placeholder="Descreva detalhes do item, cor, material, etc..."
                    prop:value=move || description.get()
                    on:input=move |ev| description.set(event_target_value(&ev))
                ></textarea>
            </label>

            <div class="form-row">
                <label class="form-field">
                    <span>"Preço (R$) *"</span>
                    <input
                        type="text"
                        inputmode="decimal"
                        placeholder="0,00"
                        required
                        prop:value=move || price.get()
                        on:input=move |ev| price.set(event_target_value(&ev))
                    />
                </label>
                <label class="form-field">
                    <span>"Link da Loja"</span>
                    <input
                        type="url"
                        placeholder="https://..."
                        prop:value=move || store_link.get()
                        on:input=move |ev| store_link.set(event_target_value(&ev))
                    />
                </label>
            </div>

            <div class="form-actions">
                <button type="submit" class="gradient-button" prop:disabled=move || !is_valid()>
                    {if is_editing { "Salvar alterações" } else { "Adicionar Item" }}
                </button>
                <button type="button" class="ghost-button" on:click=move |_| on_done.run(())>
                    "Cancelar"
                </button>
            </div>
        </form>
    }
}
