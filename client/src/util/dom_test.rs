#![cfg(not(feature = "csr"))]

use super::*;

#[test]
fn native_viewport_is_wide() {
    assert_eq!(viewport_width(), FALLBACK_VIEWPORT_WIDTH);
    assert_eq!(studio::size::viewport_frame_factor(viewport_width()), 1.0);
}

#[test]
fn native_page_is_unscrolled() {
    assert_eq!(page_scroll_y(), 0.0);
}

#[test]
fn native_helpers_are_inert() {
    after_ms(10, || {});
    scroll_into_view("contact-form");
    alert("hello");
}

#[test]
fn unmounted_strip_reads_as_empty() {
    let owner = Owner::new();
    owner.with(|| {
        let strip = NodeRef::<Div>::new();
        assert_eq!(strip_scroll_left(strip), 0.0);
        assert_eq!(strip_metrics(strip, 5, 3), StripMetrics::default());
        set_strip_scroll_left(strip, 10.0);
        scroll_strip_by(strip, 350.0);
    });
}
