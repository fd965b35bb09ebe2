//! Integration test: walk the core models through one simulated page visit —
//! splash timeline, a rejected and an accepted contact submission, menu
//! interactions, navbar shadow transitions, and a card reveal sweep.

use vitrina_core::config::PageMap;
use vitrina_core::form::{ContactMessage, Field, FormError};
use vitrina_core::geometry::{Rect, Viewport};
use vitrina_core::loader::{self, LoaderPhase};
use vitrina_core::menu::{self, MenuState};
use vitrina_core::nav::fragment_target;
use vitrina_core::navbar::{NavShadow, ScrollTracker};
use vitrina_core::reveal;

#[test]
fn one_page_visit() {
    let map = PageMap::default();

    // Splash: opaque, fading, gone.
    assert_eq!(loader::phase_at(0), LoaderPhase::Splash);
    assert_eq!(loader::phase_at(2_600), LoaderPhase::FadingOut);
    assert_eq!(loader::phase_at(loader::hide_at_ms()), LoaderPhase::Hidden);
    println!("loader timeline: fade at {}ms, gone at {}ms", loader::SPLASH_MS, loader::hide_at_ms());

    // A submission with a blank message is rejected and names the field.
    let draft = ContactMessage::new("Ana", "ana@example.com", "   ");
    assert_eq!(
        draft.validate(),
        Err(FormError::Incomplete(vec![Field::Message]))
    );

    // Filling the message in makes it pass.
    let sent = ContactMessage::new("Ana", "ana@example.com", "Hola, me gustó tu portafolio.");
    assert_eq!(sent.validate(), Ok(()));

    // The visitor opens the mobile menu, taps a nav link, and the menu
    // closes as part of the navigation.
    let mut menu_state = MenuState::default();
    menu_state.toggle();
    assert!(menu_state.is_open());

    let href = "#proyectos";
    let target = fragment_target(href).unwrap_or_default();
    assert_eq!(target, "proyectos");
    menu_state.close();
    assert!(!menu_state.is_open());

    // A click on the page background while the menu is open would also
    // close it; clicks on the toggle itself would not.
    assert!(menu::outside_click_closes(true, false, false));
    assert!(!menu::outside_click_closes(true, false, true));

    // Rotating to a desktop-wide viewport force-closes, a phone width does
    // not.
    assert!(menu::closes_on_resize(1024.0));
    assert!(!menu::closes_on_resize(500.0));

    // Scrolling down past the threshold elevates the navbar, scrolling back
    // rests it; the tracker keeps the last offset either way.
    let mut tracker = ScrollTracker::new();
    assert_eq!(tracker.observe(0.0), NavShadow::Resting);
    assert_eq!(tracker.observe(50.0), NavShadow::Resting);
    assert_eq!(tracker.observe(51.0), NavShadow::Elevated);
    assert_eq!(tracker.observe(400.0), NavShadow::Elevated);
    assert_eq!(tracker.last_offset(), 400.0);
    println!("navbar elevated at offset {}", tracker.last_offset());

    // Reveal sweep: two cards in view, one below the fold. The first sweep
    // latches the visible ones; the second sweep finds nothing new even
    // though the same cards are still in view.
    let viewport = Viewport::new(1280.0, 720.0);
    let mut cards = vec![
        (Rect::new(100.0, 80.0, 360.0, 240.0), false),
        (Rect::new(520.0, 80.0, 360.0, 240.0), false),
        (Rect::new(100.0, 900.0, 360.0, 240.0), false),
    ];

    let mut revealed = 0;
    for (rect, animated) in &mut cards {
        if reveal::ready_to_reveal(rect, &viewport, *animated) {
            *animated = true;
            revealed += 1;
        }
    }
    assert_eq!(revealed, 2, "only the fully visible cards animate");

    let second_pass: usize = cards
        .iter()
        .filter(|(rect, animated)| reveal::ready_to_reveal(rect, &viewport, *animated))
        .count();
    assert_eq!(second_pass, 0, "the latch is one-way");

    // After scrolling, the below-fold card comes fully into view and
    // animates exactly once.
    cards[2].0 = Rect::new(100.0, 300.0, 360.0, 240.0);
    let (rect, animated) = &mut cards[2];
    assert!(reveal::ready_to_reveal(rect, &viewport, *animated));
    *animated = true;

    println!(
        "revealed {} of {} cards under map `{}`",
        cards.iter().filter(|(_, a)| *a).count(),
        cards.len(),
        map.card_selectors,
    );
}
