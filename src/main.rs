//! Planejaqui Frontend Entry Point

mod app;
mod components;
mod config;
mod context;
mod logging;
mod models;
mod persistence;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logging::init(log::LevelFilter::Info);
    let config = config::AppConfig::from_document();
    log::set_max_level(config.log_level);
    mount_to_body(move || view! { <App config=config.clone() /> });
}
