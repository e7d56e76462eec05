//! InternLink - Internship Marketplace Frontend
//!
//! A role-based internship marketplace where students, employers, and
//! institutes sign in and manage internship postings and applications,
//! built with Leptos and WebAssembly.

#![recursion_limit = "4096"]

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
