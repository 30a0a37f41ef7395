//! Luxury Storefront Frontend Entry Point

mod api;
mod app;
mod assets;
mod cart;
mod components;
mod config;
mod models;
mod search;
mod toast;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
