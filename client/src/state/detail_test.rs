use super::*;

#[test]
fn starts_closed_on_the_info_tab() {
    let state = DetailState::default();
    assert!(!state.is_open());
    assert_eq!(state.mode, DetailMode::Info);
}

#[test]
fn open_and_close_track_the_selection() {
    let mut state = DetailState::default();
    state.open(ArtworkRecord::from_line(2, "무제.jpg"));
    assert!(state.is_open());
    assert_eq!(state.selected.as_ref().map(|r| r.id), Some(3));
    state.close();
    assert!(!state.is_open());
}

#[test]
fn tab_survives_reopening() {
    let mut state = DetailState { mode: DetailMode::Simulation, ..DetailState::default() };
    state.open(ArtworkRecord::from_line(0, "a.jpg"));
    state.close();
    state.open(ArtworkRecord::from_line(1, "b.jpg"));
    assert_eq!(state.mode, DetailMode::Simulation);
}

#[test]
fn tab_labels() {
    assert_eq!(DetailMode::ALL.map(DetailMode::label), ["Work Detail", "가상 배치"]);
}
