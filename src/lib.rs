//! # artware-web
//!
//! Leptos + WASM frontend for the Artware Club community platform: marketing
//! pages, login/registration, the member dashboard, cell membership, and the
//! reclamation form.
//!
//! The engineering core is the client session lifecycle: `state::session`
//! owns authentication state, `util::storage` persists the credential,
//! `util::guard` decides route access, and `net::cells` talks to the
//! membership API with the current token.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: attach the app to the server-rendered DOM.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
