//! Presence-checked lookups over the host document.

use thiserror::Error;
use vitrina_core::geometry::{Rect, Viewport};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlInputElement, HtmlTextAreaElement, Window};

/// Failure to locate or downcast a document dependency. Each behavior
/// treats these as "skip this wiring", never as a page-wide fault.
#[derive(Debug, Error)]
pub enum DomError {
    #[error("no window in this context")]
    NoWindow,
    #[error("document is not available")]
    NoDocument,
    #[error("document has no body")]
    NoBody,
    #[error("missing element #{0}")]
    MissingId(String),
    #[error("nothing matches selector `{0}`")]
    MissingSelector(String),
    #[error("`{target}` is not a {kind}")]
    WrongKind { target: String, kind: &'static str },
}

pub fn window() -> Result<Window, DomError> {
    web_sys::window().ok_or(DomError::NoWindow)
}

pub fn document(window: &Window) -> Result<Document, DomError> {
    window.document().ok_or(DomError::NoDocument)
}

pub fn by_id(document: &Document, id: &str) -> Result<Element, DomError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| DomError::MissingId(id.to_owned()))
}

pub fn html_by_id(document: &Document, id: &str) -> Result<HtmlElement, DomError> {
    by_id(document, id)?
        .dyn_into()
        .map_err(|_| DomError::WrongKind {
            target: format!("#{id}"),
            kind: "styleable element",
        })
}

/// All elements matching `selector`. An empty match is not an error — there
/// is simply nothing to wire. A selector the engine rejects logs a warning
/// and also yields nothing.
pub fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    let list = match document.query_selector_all(selector) {
        Ok(list) => list,
        Err(_) => {
            log::warn!("invalid selector `{selector}`");
            return Vec::new();
        }
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Current value of a form field, which may be an `<input>` or a
/// `<textarea>`.
pub fn field_value(document: &Document, id: &str) -> Result<String, DomError> {
    let element = by_id(document, id)?;
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        return Ok(input.value());
    }
    if let Some(area) = element.dyn_ref::<HtmlTextAreaElement>() {
        return Ok(area.value());
    }
    Err(DomError::WrongKind {
        target: format!("#{id}"),
        kind: "form field",
    })
}

/// Bounding box of an element, relative to the viewport origin.
pub fn rect_of(element: &Element) -> Rect {
    let rect = element.get_bounding_client_rect();
    Rect::new(rect.left(), rect.top(), rect.width(), rect.height())
}

/// Current viewport size. Falls back to the document element's client size
/// when the window reports nothing useful.
pub fn viewport(window: &Window, document: &Document) -> Viewport {
    let width = window
        .inner_width()
        .ok()
        .and_then(|w| w.as_f64())
        .filter(|w| *w > 0.0)
        .or_else(|| document.document_element().map(|e| f64::from(e.client_width())))
        .unwrap_or(0.0);
    let height = window
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .filter(|h| *h > 0.0)
        .or_else(|| document.document_element().map(|e| f64::from(e.client_height())))
        .unwrap_or(0.0);
    Viewport::new(width, height)
}
