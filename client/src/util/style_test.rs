use super::*;
use studio::pointer::Point;
use studio::scene::WallAnchor;

#[test]
fn frame_style_centers_on_anchor_plus_offset() {
    let layout = FrameLayout {
        width: 90.0,
        height: 112.5,
        anchor: WallAnchor { top_pct: 32.0, left_pct: 50.0 },
        offset: Point::new(12.0, -8.5),
        rotation_deg: 450,
        shade: 0.0,
    };
    assert_eq!(
        frame_style(&layout),
        "top: 32%; left: 50%; width: 90.00px; height: 112.50px; \
         transform: translate(calc(-50% + 12px), calc(-50% + -8.5px)) rotate(450deg);"
    );
}

#[test]
fn shade_style_formats_opacity() {
    assert_eq!(shade_style(0.35), "background-color: rgba(0, 0, 0, 0.350);");
}

#[test]
fn zoom_label_rounds_to_whole_percent() {
    let mut placement = Placement::default();
    placement.zoom_in();
    assert_eq!(zoom_label(placement), "110%");
    placement.zoom_out();
    placement.zoom_out();
    placement.zoom_out();
    assert_eq!(zoom_label(placement), "80%");
}
