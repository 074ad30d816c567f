use super::*;

#[test]
fn scrolled_only_past_threshold() {
    let mut nav = NavState::default();
    nav.on_scroll(50.0);
    assert!(!nav.scrolled);
    nav.on_scroll(50.5);
    assert!(nav.scrolled);
    assert_eq!(nav.bar_class(), "site-nav site-nav--scrolled");
    nav.on_scroll(0.0);
    assert_eq!(nav.bar_class(), "site-nav");
}
