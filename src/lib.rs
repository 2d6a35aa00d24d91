//! SilentInstall landing page
//!
//! The marketing site for SilentInstall: a server-rendered Leptos page with
//! WebAssembly-hydrated interactivity - the hero terminal typewriter,
//! scroll-triggered section animations, animated statistics, the waitlist
//! form, and one easter egg for the IT professionals.

pub mod app;
pub mod core;
pub mod ui;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
