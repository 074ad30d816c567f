//! DOM pointer events to [`PointerSample`]s.
//!
//! Pointer events already unify mouse, pen and touch; this module only
//! names the phase and copies out position, time and cancelability.

#[cfg(test)]
#[path = "pointer_test.rs"]
mod pointer_test;

use studio::pointer::{Point, PointerPhase, PointerSample};

/// Phase for a DOM event type, or `None` for events we do not track.
#[must_use]
pub fn phase_for(event_type: &str) -> Option<PointerPhase> {
    match event_type {
        "pointerdown" => Some(PointerPhase::Down),
        "pointermove" => Some(PointerPhase::Move),
        "pointerup" => Some(PointerPhase::Up),
        "pointerleave" => Some(PointerPhase::Leave),
        "pointercancel" => Some(PointerPhase::Cancel),
        _ => None,
    }
}

/// Normalize a DOM pointer event. Positions are viewport (client) pixels.
#[must_use]
pub fn sample(ev: &leptos::ev::PointerEvent) -> Option<PointerSample> {
    let phase = phase_for(&ev.type_())?;
    let position = Point::new(f64::from(ev.client_x()), f64::from(ev.client_y()));
    Some(PointerSample { phase, position, time_ms: ev.time_stamp(), cancelable: ev.cancelable() })
}
