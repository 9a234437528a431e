//! GDP quarterly dashboard - WASM entry point

mod app;

use app::App;
use tracing_subscriber::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    tracing_subscriber::registry()
        .with(tracing_wasm::WASMLayer::new(
            tracing_wasm::WASMLayerConfig::default(),
        ))
        .init();

    tracing::info!("starting GDP dashboard");

    leptos::mount::mount_to_body(App);
}
