//! Intro splash: fades the overlay out and removes it from layout on a
//! fixed timeline. Both timers are scheduled up front and owned by the
//! runtime, so tearing the runtime down cancels whichever has not fired.

use gloo::timers::callback::Timeout;
use vitrina_core::loader;

use crate::dom::{self, DomError};
use crate::page::PageContext;

pub fn wire(ctx: &PageContext) -> Result<[Timeout; 2], DomError> {
    let overlay = dom::html_by_id(&ctx.document, &ctx.map.loader_id)?;
    let body = ctx.document.body().ok_or(DomError::NoBody)?;

    let fade = {
        let overlay = overlay.clone();
        let map = ctx.map.clone();
        Timeout::new(loader::SPLASH_MS, move || {
            let _ = overlay.class_list().add_1(&map.fade_out_class);
            let _ = body.class_list().remove_1(&map.loading_class);
        })
    };

    let hide = Timeout::new(loader::hide_at_ms(), move || {
        if let Err(e) = overlay.style().set_property("display", "none") {
            log::warn!("could not hide the intro overlay: {e:?}");
        }
    });

    Ok([fade, hide])
}
