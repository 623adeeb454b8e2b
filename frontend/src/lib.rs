//! WASM entry point for The Soil Watch front-end.
//!
//! Hydrates the server-rendered navigation header so router links switch views
//! on the client instead of reloading the page.

#[wasm_bindgen::prelude::wasm_bindgen]
/// Hydrates the page on the client.
///
/// Installs browser console logging and the panic hook, then hydrates
/// `app::component` over the server-rendered body.
pub fn hydrate() {
    use app::component;
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    log::debug!("hydrating {} navigation", app::types::SITE_TITLE);
    leptos::mount::hydrate_body(component);
}
