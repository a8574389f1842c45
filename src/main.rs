//! Workforce Admin Frontend Entry Point

mod api;
mod app;
mod cascade;
mod closing;
mod components;
mod config;
mod context;
mod crud;
mod dialog;
mod format;
mod models;
mod pages;
mod routes;
mod session;
mod store;

use app::App;
use leptos::prelude::*;
use log::LevelFilter;

fn main() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) { LevelFilter::Debug } else { LevelFilter::Info };
    if console_logger::init(level).is_err() {
        web_sys::console::warn_1(&"[APP] logger already installed".into());
    }
    log::info!("[APP] starting, api base {}", config::ApiConfig::from_env().base_url);
    mount_to_body(App);
}
