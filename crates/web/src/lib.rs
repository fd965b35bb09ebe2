//! Browser bindings for the vitrina portfolio page.
//!
//! Wires seven independent behaviors onto the host document: the intro
//! splash, the contact form, smooth in-page navigation, the collapsible
//! mobile menu, the navbar scroll shadow, the project "ver más" buttons,
//! and the scroll-triggered card reveal. Each behavior checks its own
//! document dependencies and is skipped — with a logged warning — when
//! they are missing, leaving the others attached.

#[cfg(target_arch = "wasm32")]
mod contact;
#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod loader;
#[cfg(target_arch = "wasm32")]
mod menu;
#[cfg(target_arch = "wasm32")]
mod nav;
#[cfg(target_arch = "wasm32")]
mod navbar;
#[cfg(target_arch = "wasm32")]
mod page;
#[cfg(target_arch = "wasm32")]
mod projects;
#[cfg(target_arch = "wasm32")]
mod reveal;

#[cfg(target_arch = "wasm32")]
pub use dom::DomError;
#[cfg(target_arch = "wasm32")]
pub use page::Runtime;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) {
        log::Level::Trace
    } else {
        log::Level::Info
    };
    let _ = console_log::init_with_level(level);

    match Runtime::attach() {
        Ok(runtime) => {
            log::info!("vitrina attached, {} of 7 behaviors wired", runtime.wired());
            runtime.forget();
        }
        Err(e) => log::error!("vitrina could not attach: {e}"),
    }
}
