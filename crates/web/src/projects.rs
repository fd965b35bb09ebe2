//! "Ver más" buttons on the project cards: purely informational, no
//! navigation. A button outside a card, or a card without a heading, logs
//! and does nothing rather than taking the listener down.

use gloo::events::EventListener;

use crate::dom::{self, DomError};
use crate::page::PageContext;

pub fn wire(ctx: &PageContext) -> Result<Vec<EventListener>, DomError> {
    let buttons = dom::query_all(&ctx.document, &ctx.map.show_more_selector);
    let mut listeners = Vec::with_capacity(buttons.len());

    for button in buttons {
        let window = ctx.window.clone();
        let map = ctx.map.clone();
        let source = button.clone();
        listeners.push(EventListener::new(&button, "click", move |_| {
            let card = match source.closest(&map.project_card_selector) {
                Ok(Some(card)) => card,
                _ => {
                    log::warn!("show-more button outside a project card");
                    return;
                }
            };
            let Some(heading) = card.query_selector("h3").ok().flatten() else {
                log::warn!("project card has no heading");
                return;
            };

            let title = heading.text_content().unwrap_or_default();
            log::info!("Proyecto seleccionado: {title}");
            let _ = window.alert_with_message(&format!(
                "Has seleccionado el proyecto: {title}\n\nEn una versión real, esto te llevaría a la página de detalles del proyecto."
            ));
        }));
    }

    Ok(listeners)
}
