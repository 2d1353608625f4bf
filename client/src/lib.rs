//! Browser front end for the employee feedback portal.
//!
//! SYSTEM CONTEXT
//! ==============
//! A client-side rendered Leptos app. Each page owns one `portal` state
//! machine in an `RwSignal`; UI events call into the machine and the
//! [`net::api`] helpers execute whatever requests it asks for. Built with
//! `trunk` and the `csr` feature; without it the crate compiles natively so
//! the pure helpers can be unit tested.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod util;

#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
