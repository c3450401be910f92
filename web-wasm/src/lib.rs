//! AgroVision Web App (Leptos + WASM)

mod app;
mod components;
mod api;
mod config;
mod selection;

use app::App;
use leptos::prelude::*;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    let endpoint = config::endpoint_from_location();
    leptos::mount::mount_to_body(move || view! { <App endpoint=endpoint.clone() /> });
}
