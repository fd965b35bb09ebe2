//! Contact form: intercepts submission, validates, gives feedback, resets.
//! Nothing leaves the browser; a valid submission only logs, thanks the
//! visitor, and clears the fields.

use gloo::events::EventListener;
use vitrina_core::config::PageMap;
use vitrina_core::form::ContactMessage;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlFormElement};

use crate::dom::{self, DomError};
use crate::page::PageContext;

const INCOMPLETE_MSG: &str = "Por favor, completa todos los campos del formulario.";
const THANKS_MSG: &str = "¡Gracias por tu mensaje! Te contactaré pronto.";

pub fn wire(ctx: &PageContext) -> Result<EventListener, DomError> {
    let form: HtmlFormElement = dom::by_id(&ctx.document, &ctx.map.contact_form_id)?
        .dyn_into()
        .map_err(|_| DomError::WrongKind {
            target: format!("#{}", ctx.map.contact_form_id),
            kind: "form",
        })?;

    let window = ctx.window.clone();
    let document = ctx.document.clone();
    let map = ctx.map.clone();
    let target = form.clone();
    Ok(EventListener::new(&form, "submit", move |event| {
        event.prevent_default();

        let message = match read_submission(&document, &map) {
            Ok(message) => message,
            Err(e) => {
                log::warn!("contact submission dropped: {e}");
                return;
            }
        };

        if message.validate().is_err() {
            let _ = window.alert_with_message(INCOMPLETE_MSG);
            return;
        }

        log::info!("Formulario enviado correctamente");
        let _ = window.alert_with_message(THANKS_MSG);
        target.reset();
    }))
}

fn read_submission(document: &Document, map: &PageMap) -> Result<ContactMessage, DomError> {
    Ok(ContactMessage::new(
        dom::field_value(document, &map.name_field_id)?,
        dom::field_value(document, &map.email_field_id)?,
        dom::field_value(document, &map.message_field_id)?,
    ))
}
