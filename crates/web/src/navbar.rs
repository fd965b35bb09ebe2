//! Navbar shadow intensity, recomputed on every scroll event with no
//! debounce. The element is resolved once at wiring; a document without a
//! navbar skips the behavior entirely.

use std::cell::Cell;

use gloo::events::EventListener;
use vitrina_core::navbar::ScrollTracker;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use crate::dom::DomError;
use crate::page::PageContext;

pub fn wire(ctx: &PageContext) -> Result<EventListener, DomError> {
    let selector = &ctx.map.navbar_selector;
    let navbar: HtmlElement = ctx
        .document
        .query_selector(selector)
        .ok()
        .flatten()
        .ok_or_else(|| DomError::MissingSelector(selector.clone()))?
        .dyn_into()
        .map_err(|_| DomError::WrongKind {
            target: selector.clone(),
            kind: "styleable element",
        })?;

    let window = ctx.window.clone();
    let tracker = Cell::new(ScrollTracker::new());
    Ok(EventListener::new(&ctx.window, "scroll", move |_| {
        let offset = window.page_y_offset().unwrap_or(0.0);
        let mut state = tracker.get();
        let shadow = state.observe(offset);
        tracker.set(state);
        if let Err(e) = navbar.style().set_property("box-shadow", shadow.css()) {
            log::warn!("navbar shadow not applied: {e:?}");
        }
    }))
}
