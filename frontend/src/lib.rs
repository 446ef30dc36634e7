pub mod api;
pub mod components;
pub mod config;
pub mod debounce;
pub mod mutation;
pub mod pages;
pub mod permissions;
pub mod router;
pub mod state;
pub mod table;
pub mod utils;

#[cfg(test)]
pub(crate) mod test_support;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    if let Err(err) = console_log::init_with_level(level) {
        web_sys::console::error_1(&format!("logger already initialised: {}", err).into());
    }
    log::info!("starting payroll console");

    // Resolve runtime config in the background; API calls wait for it.
    leptos::spawn_local(config::init());

    router::mount_app();
}
