use super::*;

#[test]
fn tracked_event_types_map_to_phases() {
    assert_eq!(phase_for("pointerdown"), Some(PointerPhase::Down));
    assert_eq!(phase_for("pointermove"), Some(PointerPhase::Move));
    assert_eq!(phase_for("pointerup"), Some(PointerPhase::Up));
    assert_eq!(phase_for("pointerleave"), Some(PointerPhase::Leave));
    assert_eq!(phase_for("pointercancel"), Some(PointerPhase::Cancel));
}

#[test]
fn other_event_types_are_ignored() {
    assert_eq!(phase_for("click"), None);
    assert_eq!(phase_for("pointerover"), None);
}
