//! Stats Panel Component
//!
//! Four summary cards above the list.

use chrono::Local;
use leptos::prelude::*;
use planejaqui_core::format::{format_brl, format_updated_at};

use crate::context::use_app_context;

#[component]
fn StatCard(
    #[prop(into)] label: String,
    #[prop(into)] tone: String,
    icon: &'static str,
    #[prop(into)] value: Signal<String>,
) -> impl IntoView {
    view! {
        <div class="glass-card stat-card">
            <div class=format!("stat-icon {}", tone)>{icon}</div>
            <div>
                <p class="eyebrow">{label}</p>
                <p class="stat-value">{move || value.get()}</p>
            </div>
        </div>
    }
}

#[component]
pub fn StatsPanel() -> impl IntoView {
    let ctx = use_app_context();
    let summary = Memo::new(move |_| ctx.summary());

    let last_update = move || {
        summary
            .get()
            .last_added
            .map(|at| format_updated_at(&at.with_timezone(&Local)))
            .unwrap_or_else(|| "Ainda não iniciado".to_string())
    };

    view! {
        <section class="stats-grid">
            <StatCard
                label="Itens cadastrados"
                tone="tone-emerald"
                icon="🛍"
                value=Signal::derive(move || summary.get().item_count.to_string())
            />
            <StatCard
                label="Investimento total"
                tone="tone-sky"
                icon="🐷"
                value=Signal::derive(move || format_brl(summary.get().total_value))
            />
            <StatCard
                label="Itens planejados"
                tone="tone-teal"
                icon="✔"
                value=Signal::derive(move || summary.get().planned_count.to_string())
            />
            <StatCard
                label="Última atualização"
                tone="tone-rose"
                icon="📅"
                value=Signal::derive(last_update)
            />
        </section>
    }
}
