#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;
pub mod config;
pub mod contact;
pub mod content;
pub mod filter;
pub mod i18n;
pub mod modal;
pub mod sections;
pub mod theme;
pub mod timeline;
pub mod toast;
pub mod upload;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("console logger already set: {e}").into());
    }
    leptos::mount::hydrate_body(App);
}
