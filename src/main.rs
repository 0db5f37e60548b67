//! Goal List Frontend Entry Point

mod app;
mod commands;
mod components;
mod config;
mod context;
mod logger;
mod navigation;
mod pages;
mod session;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logger::init(config::log_level());
    mount_to_body(App);
}
