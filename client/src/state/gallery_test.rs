use super::*;
use studio::catalog::Category;
use studio::pointer::Point;

const SOURCE: &str = "a.jpg\nb.jpg\nc.jpg\nd.jpg\ne.jpg\nf.jpg\ng.jpg";

#[test]
fn slots_repeat_the_filtered_list() {
    let catalog = Catalog::parse(SOURCE);
    assert_eq!(slots_for(&catalog, CategoryFilter::All, LOOP_COPIES).len(), 21);

    let ids = slots_for(&catalog, CategoryFilter::Only(Category::Nature), LOOP_COPIES)
        .iter()
        .map(|s| s.item.id)
        .collect::<Vec<_>>();
    assert_eq!(ids, vec![6, 6, 6]);
    assert_eq!(slots_for(&catalog, CategoryFilter::Only(Category::Nature), 5).len(), 5);
}

#[test]
fn slot_keys_are_unique() {
    let catalog = Catalog::parse(SOURCE);
    let slots = slots_for(&catalog, CategoryFilter::All, 4);
    let mut keys = slots.iter().map(slot_key).collect::<Vec<_>>();
    keys.sort();
    keys.dedup();
    assert_eq!(keys.len(), slots.len());
}

#[test]
fn hold_reflects_press_and_modal() {
    let mut state = GalleryState::default();
    assert!(!state.hold(false).is_held());
    assert!(state.hold(true).is_held());
    state.drag.press(Point::ORIGIN, 0.0, 0.0);
    assert!(state.hold(false).is_held());
}

// =============================================================
// Copy count
// =============================================================

#[test]
fn narrow_viewport_keeps_three_copies() {
    let state = GalleryState::default();
    let metrics = StripMetrics { scroll_width: 5_200.0, client_width: 1_280.0, period: 1_720.0 };
    assert_eq!(state.copies_wanted(metrics), None);
}

#[test]
fn wide_viewport_with_few_works_asks_for_more_copies() {
    let state = GalleryState::default();
    let metrics = StripMetrics { scroll_width: 1_096.0, client_width: 1_920.0, period: 344.0 };
    assert_eq!(state.copies_wanted(metrics), Some(8));

    let refilled = GalleryState { copies: 8, ..state };
    assert_eq!(refilled.copies_wanted(metrics), None);
}

#[test]
fn unmeasured_strip_keeps_its_copies() {
    let state = GalleryState { copies: 6, ..GalleryState::default() };
    assert_eq!(state.copies_wanted(StripMetrics::default()), None);
}
