use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::reveal;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid page-map override: {0}")]
    Invalid(#[from] serde_json::Error),
}

/// Every element id, selector and style class the runtime touches in the
/// host document, in one place.
///
/// Defaults match the shipped markup. A page may override individual
/// entries by putting a JSON object in the `data-vitrina` attribute on
/// `<body>`; absent keys keep their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageMap {
    pub loader_id: String,
    pub contact_form_id: String,
    pub name_field_id: String,
    pub email_field_id: String,
    pub message_field_id: String,
    pub nav_menu_id: String,
    pub hamburger_id: String,
    pub nav_link_selector: String,
    pub navbar_selector: String,
    pub show_more_selector: String,
    pub project_card_selector: String,
    pub card_selectors: String,
    pub loading_class: String,
    pub fade_out_class: String,
    pub active_class: String,
    pub animated_class: String,
}

impl Default for PageMap {
    fn default() -> Self {
        Self {
            loader_id: "loader".into(),
            contact_form_id: "contacto-form".into(),
            name_field_id: "nombre".into(),
            email_field_id: "correo".into(),
            message_field_id: "mensaje".into(),
            nav_menu_id: "nav-menu".into(),
            hamburger_id: "hamburger".into(),
            nav_link_selector: ".nav-menu a".into(),
            navbar_selector: ".navbar".into(),
            show_more_selector: ".btn-ver-mas".into(),
            project_card_selector: ".proyecto-card".into(),
            card_selectors: reveal::CARD_SELECTORS.into(),
            loading_class: "loading".into(),
            fade_out_class: "fade-out".into(),
            active_class: "active".into(),
            animated_class: "animated".into(),
        }
    }
}

impl PageMap {
    /// Parse a JSON override; absent keys keep their defaults.
    pub fn from_attribute(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_shipped_markup() {
        let map = PageMap::default();
        assert_eq!(map.loader_id, "loader");
        assert_eq!(map.contact_form_id, "contacto-form");
        assert_eq!(map.nav_link_selector, ".nav-menu a");
        assert_eq!(map.card_selectors, reveal::CARD_SELECTORS);
        assert_eq!(map.active_class, "active");
    }

    #[test]
    fn partial_override_keeps_the_rest() {
        let map = PageMap::from_attribute(r##"{"navbar_selector": "#topbar"}"##).unwrap();
        assert_eq!(map.navbar_selector, "#topbar");
        assert_eq!(map.loader_id, "loader");
        assert_eq!(map.animated_class, "animated");
    }

    #[test]
    fn malformed_override_is_rejected() {
        assert!(PageMap::from_attribute("not json").is_err());
    }
}
