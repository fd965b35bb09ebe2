//! Scroll-triggered entrance animation for card elements. Each sweep
//! queries the card selectors, latches every card that is fully in view,
//! primes it invisible in the same synchronous step, and lets a short
//! timer enable the transition.

use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use vitrina_core::config::PageMap;
use vitrina_core::reveal;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, Window};

use crate::dom::{self, DomError};
use crate::page::PageContext;

pub fn wire(ctx: &PageContext) -> Result<EventListener, DomError> {
    let window = ctx.window.clone();
    let document = ctx.document.clone();
    let map = ctx.map.clone();
    let pass = move || sweep(&window, &document, &map);

    // Animate whatever is already in view before the first scroll.
    pass();

    Ok(EventListener::new(&ctx.window, "scroll", move |_| pass()))
}

fn sweep(window: &Window, document: &Document, map: &PageMap) {
    let viewport = dom::viewport(window, document);

    for card in dom::query_all(document, &map.card_selectors) {
        let latched = card.class_list().contains(&map.animated_class);
        let rect = dom::rect_of(&card);
        if !reveal::ready_to_reveal(&rect, &viewport, latched) {
            continue;
        }
        let Ok(card) = card.dyn_into::<HtmlElement>() else {
            continue;
        };
        enter(&card, &map.animated_class);
    }
}

/// Latch the card and prime it invisible in one synchronous step, so no
/// frame renders between the class flip and the style write.
fn enter(card: &HtmlElement, animated_class: &str) {
    let _ = card.class_list().add_1(animated_class);
    let style = card.style();
    let _ = style.set_property("opacity", "0");
    let _ = style.set_property(
        "transform",
        &format!("translateY({}px)", reveal::ENTER_OFFSET_PX),
    );

    let card = card.clone();
    Timeout::new(reveal::ENTER_DELAY_MS, move || {
        let style = card.style();
        let _ = style.set_property("transition", reveal::ENTER_TRANSITION);
        let _ = style.set_property("opacity", "1");
        let _ = style.set_property("transform", "translateY(0)");
    })
    .forget();
}
