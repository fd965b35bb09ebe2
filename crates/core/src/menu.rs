/// Viewport width above which the collapsible menu is force-closed.
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

/// Open/closed flag for the mobile menu.
///
/// The browser layer mirrors this into the `active` class on both the menu
/// panel and the toggle control on every transition, so the two flags can
/// never drift apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }
}

/// A document click closes the menu only when it is open and landed in
/// neither the panel nor the toggle control.
pub fn outside_click_closes(open: bool, inside_panel: bool, inside_toggle: bool) -> bool {
    open && !inside_panel && !inside_toggle
}

/// Resizing strictly past the mobile breakpoint force-closes the menu.
pub fn closes_on_resize(viewport_width: f64) -> bool {
    viewport_width > MOBILE_BREAKPOINT_PX
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_twice_restores_the_original_state() {
        let mut state = MenuState::default();
        assert!(!state.is_open());
        state.toggle();
        assert!(state.is_open());
        state.toggle();
        assert!(!state.is_open());
    }

    #[test]
    fn close_is_idempotent() {
        let mut state = MenuState::default();
        state.toggle();
        state.close();
        assert!(!state.is_open());
        state.close();
        assert!(!state.is_open());
    }

    #[test]
    fn outside_clicks_close_only_an_open_menu() {
        assert!(outside_click_closes(true, false, false));
        assert!(!outside_click_closes(false, false, false));
    }

    #[test]
    fn clicks_inside_either_element_do_not_close() {
        assert!(!outside_click_closes(true, true, false));
        assert!(!outside_click_closes(true, false, true));
        assert!(!outside_click_closes(true, true, true));
    }

    #[test]
    fn resize_closes_strictly_above_the_breakpoint() {
        assert!(closes_on_resize(1024.0));
        assert!(!closes_on_resize(500.0));
        assert!(!closes_on_resize(MOBILE_BREAKPOINT_PX));
    }
}
