//! Smooth in-page navigation for the menu links. Fragment links scroll
//! their section into view instead of jumping; everything else keeps its
//! default navigation.

use std::rc::Rc;

use gloo::events::EventListener;
use vitrina_core::nav::fragment_target;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use crate::dom::{self, DomError};
use crate::menu::MenuPanel;
use crate::page::PageContext;

pub fn wire(ctx: &PageContext, menu: Option<Rc<MenuPanel>>) -> Result<Vec<EventListener>, DomError> {
    let links = dom::query_all(&ctx.document, &ctx.map.nav_link_selector);
    let mut listeners = Vec::with_capacity(links.len());

    for link in links {
        let document = ctx.document.clone();
        let menu = menu.clone();
        let anchor = link.clone();
        listeners.push(EventListener::new(&link, "click", move |event| {
            let Some(href) = anchor.get_attribute("href") else {
                return;
            };
            let Some(id) = fragment_target(&href) else {
                return;
            };
            event.prevent_default();

            // Resolved by id, so hrefs that are not valid selector syntax
            // cannot raise; an unknown id simply does nothing.
            let Some(section) = document.get_element_by_id(id) else {
                return;
            };

            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            options.set_block(ScrollLogicalPosition::Start);
            section.scroll_into_view_with_scroll_into_view_options(&options);

            if let Some(menu) = &menu {
                menu.close_if_open();
            }
        }));
    }

    Ok(listeners)
}
