//! Todo Widget Entry Point

mod models;
mod error;
mod config;
mod logger;
mod todo_list;
mod draft;
mod store;
mod components;
mod app;

use app::App;
use config::WidgetConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = WidgetConfig::default();
    if let Err(e) = logger::init(config.log_level) {
        web_sys::console::error_1(&format!("[MAIN] Logger init failed: {}", e).into());
    }

    mount_to_body(move || view! { <App config=config /> });
}
