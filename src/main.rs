//! MediCheck Frontend Entry Point

mod app;
mod components;
mod context;
mod models;
mod routes;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(err) = rolling_logger::init(rolling_logger::DEFAULT_CAPACITY, log::LevelFilter::Debug) {
        leptos::logging::warn!("logger not installed: {}", err);
    }
    mount_to_body(App);
}
