//! Marketing and legal site for the Expenzez expense-tracking app.
//!
//! Client-side rendered with Leptos and served as static files by
//! `site-server`, which also fulfils account deletion requests when the build
//! points at it.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

pub mod app;
pub mod components;
pub mod content;
pub mod pages;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;

use app::App;

#[wasm_bindgen(start)]
pub fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    wasm_logger::init(wasm_logger::Config::default());
    log::info!("Expenzez site starting...");

    hide_loading_screen();

    leptos::mount::mount_to_body(|| view! { <App/> });
}

/// Hide the static loading placeholder from `index.html`
fn hide_loading_screen() {
    let Some(loading_element) = document().get_element_by_id("leptos-loading") else {
        log::warn!("Loading element not found");
        return;
    };

    if let Some(html_element) = loading_element.dyn_ref::<HtmlElement>() {
        if let Err(e) = html_element.class_list().add_1("hidden") {
            log::error!("Failed to hide loading screen: {:?}", e);
        }
    }
}
