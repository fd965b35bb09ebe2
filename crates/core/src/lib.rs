//! Core interaction model for the vitrina portfolio page.
//!
//! Everything here is host-independent: geometry and visibility math, form
//! validation, menu and navbar decisions, and the timing constants the
//! browser layer schedules against. All DOM access lives in `vitrina-web`.

pub mod config;
pub mod form;
pub mod geometry;
pub mod loader;
pub mod menu;
pub mod nav;
pub mod navbar;
pub mod reveal;

pub use config::PageMap;
pub use form::{ContactMessage, Field, FormError};
pub use geometry::{Rect, Viewport};
pub use navbar::{NavShadow, ScrollTracker};
