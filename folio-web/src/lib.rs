#![forbid(unsafe_code)]
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub mod app;
pub mod assets;
pub mod components;
pub mod dom;
pub mod i18n;
pub mod pages;
pub mod router;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    // Ensure <html lang, dir> reflect the saved preference before first paint
    crate::i18n::apply_lang(crate::i18n::initial_lang());
    yew::Renderer::<app::App>::new().render();
}
