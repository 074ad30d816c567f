//! Browser front end for the artist portfolio.
//!
//! ARCHITECTURE
//! ============
//! A single client-side rendered Leptos page. Section components live in
//! `components`, shared reactive state in `state`, the contact relay call in
//! `net`, and browser plumbing (image decode, pixel readback, animation
//! frames, timers) in `util`. All behavior that does not need a browser is
//! delegated to the `studio` crate.
//!
//! Browser-only code is compiled under the `csr` feature; without it the
//! crate builds natively so its state and formatting logic can be tested.

pub mod app;
pub mod components;
pub mod config;
pub mod content;
pub mod net;
pub mod state;
pub mod util;

/// WASM entry point: install logging and mount the page.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Info) {
        leptos::logging::warn!("console logger unavailable: {err}");
    }
    log::info!("portfolio client starting");
    leptos::mount::mount_to_body(app::App);
}
