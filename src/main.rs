//! Kanban Frontend Entry Point

mod actions;
mod api;
mod app;
mod board;
mod components;
mod config;
mod context;
mod dispatch;
mod error;
mod forms;
mod layout;
mod logger;
mod models;
mod store;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::from_window();
    if let Err(err) = logger::init(config.log_level) {
        web_sys::console::warn_1(&format!("logger already installed: {}", err).into());
    }
    log::info!("starting against {}", config.api.origin);

    mount_to_body(move || view! { <App config=config /> });
}
