#![cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

mod dom;
mod input;
mod options;
mod render;
mod slider;
mod surface;

pub use slider::RadialSlider;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("slider-web ready");
    Ok(())
}
