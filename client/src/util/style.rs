//! Inline style strings for the simulator frame and gallery cards.

#[cfg(test)]
#[path = "style_test.rs"]
mod style_test;

use studio::placement::{FrameLayout, Placement};

/// Position, size and rotation of the framed artwork over the scene.
#[must_use]
pub fn frame_style(layout: &FrameLayout) -> String {
    format!(
        "top: {}%; left: {}%; width: {:.2}px; height: {:.2}px; \
         transform: translate(calc(-50% + {}px), calc(-50% + {}px)) rotate({}deg);",
        layout.anchor.top_pct,
        layout.anchor.left_pct,
        layout.width,
        layout.height,
        layout.offset.x,
        layout.offset.y,
        layout.rotation_deg,
    )
}

/// Darkening overlay over the framed artwork.
#[must_use]
pub fn shade_style(shade: f64) -> String {
    format!("background-color: rgba(0, 0, 0, {shade:.3});")
}

#[must_use]
pub fn zoom_label(placement: Placement) -> String {
    format!("{}%", placement.zoom_percent())
}
