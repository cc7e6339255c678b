#![cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

mod constants;
mod dom;
mod events;
mod fetch;
mod frame;
mod input;
mod render;
mod views;

pub use views::{generate_logo_map, AmbientField, ContributionGraph, LogoDots};

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("folio-web starting");
    Ok(())
}
