use crate::geometry::{Rect, Viewport};

/// Selector list covering every card element eligible for the entrance
/// animation.
pub const CARD_SELECTORS: &str =
    ".experiencia-card, .habilidad-card, .logro-card, .hobby-card, .proyecto-card";

/// Delay between priming a card (opacity 0, offset down) and enabling its
/// transition. The priming step must not be visible on its own.
pub const ENTER_DELAY_MS: u32 = 100;
/// Vertical offset a card starts its entrance from, in CSS pixels.
pub const ENTER_OFFSET_PX: f64 = 30.0;
/// Transition enabled once the card starts moving.
pub const ENTER_TRANSITION: &str = "opacity 0.6s ease, transform 0.6s ease";

/// Whether a card should latch and start its entrance animation.
///
/// Only cards not yet latched and fully inside the viewport qualify;
/// partially visible cards wait until they are fully in view. The latch is
/// one-way: once a card has animated it is never considered again, even if
/// scrolled out and back.
pub fn ready_to_reveal(rect: &Rect, viewport: &Viewport, already_animated: bool) -> bool {
    !already_animated && rect.within(viewport)
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: Viewport = Viewport {
        width: 1280.0,
        height: 720.0,
    };

    #[test]
    fn visible_unlatched_card_reveals() {
        let rect = Rect::new(200.0, 150.0, 400.0, 300.0);
        assert!(ready_to_reveal(&rect, &VIEWPORT, false));
    }

    #[test]
    fn latched_card_never_reveals_again() {
        let rect = Rect::new(200.0, 150.0, 400.0, 300.0);
        assert!(!ready_to_reveal(&rect, &VIEWPORT, true));
    }

    #[test]
    fn partially_visible_card_waits() {
        let below_fold = Rect::new(200.0, 600.0, 400.0, 300.0);
        assert!(!ready_to_reveal(&below_fold, &VIEWPORT, false));
    }

    #[test]
    fn oversized_card_never_reveals() {
        // Taller than the viewport: no scroll position fits all four edges.
        let tall = Rect::new(200.0, 0.0, 400.0, 900.0);
        assert!(!ready_to_reveal(&tall, &VIEWPORT, false));
    }

    #[test]
    fn selector_list_covers_all_five_card_kinds() {
        for class in [
            ".experiencia-card",
            ".habilidad-card",
            ".logro-card",
            ".hobby-card",
            ".proyecto-card",
        ] {
            assert!(CARD_SELECTORS.contains(class), "{class} missing");
        }
    }
}
