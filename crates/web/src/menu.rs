//! Collapsible mobile menu: toggle control, outside-click dismissal, and a
//! forced close past the desktop breakpoint. Requires both the panel and
//! the toggle; with either missing, none of the three listeners attach.

use std::cell::Cell;
use std::rc::Rc;

use gloo::events::EventListener;
use vitrina_core::menu::{self, MenuState};
use wasm_bindgen::JsCast;
use web_sys::{Element, Node};

use crate::dom::{self, DomError};
use crate::page::PageContext;

/// The menu panel and its toggle control, kept in lockstep: every state
/// transition writes the active class to both elements.
pub struct MenuPanel {
    panel: Element,
    toggle: Element,
    active_class: String,
    state: Cell<MenuState>,
}

impl MenuPanel {
    pub fn is_open(&self) -> bool {
        self.state.get().is_open()
    }

    pub fn toggle(&self) {
        let mut state = self.state.get();
        state.toggle();
        self.apply(state);
    }

    /// Close the menu; a no-op when it is already closed. Used by the
    /// outside-click and resize listeners and by in-page navigation.
    pub fn close_if_open(&self) {
        if !self.is_open() {
            return;
        }
        let mut state = self.state.get();
        state.close();
        self.apply(state);
    }

    fn apply(&self, state: MenuState) {
        self.state.set(state);
        if state.is_open() {
            let _ = self.panel.class_list().add_1(&self.active_class);
            let _ = self.toggle.class_list().add_1(&self.active_class);
        } else {
            let _ = self.panel.class_list().remove_1(&self.active_class);
            let _ = self.toggle.class_list().remove_1(&self.active_class);
        }
    }

    /// Whether the node sits inside the panel, and inside the toggle.
    fn contains(&self, node: Option<&Node>) -> (bool, bool) {
        match node {
            Some(node) => (
                self.panel.contains(Some(node)),
                self.toggle.contains(Some(node)),
            ),
            None => (false, false),
        }
    }
}

pub fn wire(ctx: &PageContext) -> Result<(Rc<MenuPanel>, Vec<EventListener>), DomError> {
    let toggle = dom::by_id(&ctx.document, &ctx.map.hamburger_id)?;
    let panel = dom::by_id(&ctx.document, &ctx.map.nav_menu_id)?;

    let menu = Rc::new(MenuPanel {
        panel: panel.clone(),
        toggle: toggle.clone(),
        active_class: ctx.map.active_class.clone(),
        state: Cell::new(MenuState::default()),
    });

    let mut listeners = Vec::with_capacity(3);

    {
        let menu = menu.clone();
        listeners.push(EventListener::new(&toggle, "click", move |_| menu.toggle()));
    }

    // The toggle's own clicks bubble here too; `contains` keeps them from
    // immediately re-closing the menu.
    {
        let menu = menu.clone();
        listeners.push(EventListener::new(&ctx.document, "click", move |event| {
            let target = event.target().and_then(|t| t.dyn_into::<Node>().ok());
            let (inside_panel, inside_toggle) = menu.contains(target.as_ref());
            if menu::outside_click_closes(menu.is_open(), inside_panel, inside_toggle) {
                menu.close_if_open();
            }
        }));
    }

    {
        let menu = menu.clone();
        let window = ctx.window.clone();
        listeners.push(EventListener::new(&ctx.window, "resize", move |_| {
            let width = window
                .inner_width()
                .ok()
                .and_then(|w| w.as_f64())
                .unwrap_or(0.0);
            if menu::closes_on_resize(width) {
                menu.close_if_open();
            }
        }));
    }

    Ok((menu, listeners))
}
