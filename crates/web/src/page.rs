//! Runtime wiring: attempts each behavior in turn, keeps every listener and
//! timer handle, and skips behaviors whose document dependencies are
//! missing so the rest stay attached.

use std::rc::Rc;

use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use vitrina_core::config::PageMap;
use web_sys::{Document, Window};

use crate::dom::{self, DomError};
use crate::{contact, loader, menu, nav, navbar, projects, reveal};

/// Shared handles passed to each wiring function.
pub struct PageContext {
    pub window: Window,
    pub document: Document,
    pub map: Rc<PageMap>,
}

/// Owns every handle the runtime registered. Dropping it detaches all
/// listeners and cancels any timer still pending; `forget` keeps the
/// wiring alive for the rest of the page's life.
pub struct Runtime {
    listeners: Vec<EventListener>,
    timers: Vec<Timeout>,
    wired: usize,
}

impl Runtime {
    /// Resolve the page and wire all behaviors. Fails only when there is no
    /// window or document to attach to; anything missing below that level
    /// skips its own behavior with a warning.
    pub fn attach() -> Result<Self, DomError> {
        let window = dom::window()?;
        let document = dom::document(&window)?;
        let map = Rc::new(load_page_map(&document));
        let ctx = PageContext {
            window,
            document,
            map,
        };

        let mut runtime = Self {
            listeners: Vec::new(),
            timers: Vec::new(),
            wired: 0,
        };

        match loader::wire(&ctx) {
            Ok(timers) => {
                runtime.timers.extend(timers);
                runtime.wired += 1;
            }
            Err(e) => log::warn!("intro loader skipped: {e}"),
        }

        match contact::wire(&ctx) {
            Ok(listener) => {
                runtime.listeners.push(listener);
                runtime.wired += 1;
            }
            Err(e) => log::warn!("contact form skipped: {e}"),
        }

        // The menu comes before navigation so the panel handle exists for
        // the close-on-navigate side effect.
        let panel = match menu::wire(&ctx) {
            Ok((panel, listeners)) => {
                runtime.listeners.extend(listeners);
                runtime.wired += 1;
                Some(panel)
            }
            Err(e) => {
                log::warn!("mobile menu skipped: {e}");
                None
            }
        };

        match nav::wire(&ctx, panel) {
            Ok(listeners) => {
                runtime.listeners.extend(listeners);
                runtime.wired += 1;
            }
            Err(e) => log::warn!("navigation skipped: {e}"),
        }

        match navbar::wire(&ctx) {
            Ok(listener) => {
                runtime.listeners.push(listener);
                runtime.wired += 1;
            }
            Err(e) => log::warn!("navbar shadow skipped: {e}"),
        }

        match projects::wire(&ctx) {
            Ok(listeners) => {
                runtime.listeners.extend(listeners);
                runtime.wired += 1;
            }
            Err(e) => log::warn!("project buttons skipped: {e}"),
        }

        match reveal::wire(&ctx) {
            Ok(listener) => {
                runtime.listeners.push(listener);
                runtime.wired += 1;
            }
            Err(e) => log::warn!("card reveal skipped: {e}"),
        }

        Ok(runtime)
    }

    /// Number of behaviors that wired successfully.
    pub fn wired(&self) -> usize {
        self.wired
    }

    /// Keep all listeners and timers registered for the lifetime of the
    /// page. The default entry point calls this; a host embedding the
    /// runtime in a shorter-lived view drops the `Runtime` instead.
    pub fn forget(self) {
        std::mem::forget(self);
    }
}

fn load_page_map(document: &Document) -> PageMap {
    let Some(body) = document.body() else {
        return PageMap::default();
    };
    match body.get_attribute("data-vitrina") {
        Some(json) => match PageMap::from_attribute(&json) {
            Ok(map) => map,
            Err(e) => {
                log::warn!("ignoring page-map override: {e}");
                PageMap::default()
            }
        },
        None => PageMap::default(),
    }
}
