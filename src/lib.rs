pub mod api;
pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod models;
pub mod utils;
pub mod view_model;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();

    let level = config::Config::global().environment.log_level();
    tracing_wasm::set_as_global_default_with_config(
        tracing_wasm::WASMLayerConfigBuilder::new()
            .set_max_level(level)
            .build(),
    );

    leptos::mount_to_body(app::App);
}
