//! Artwork detail view: which work is open and which tab is showing.

#[cfg(test)]
#[path = "detail_test.rs"]
mod detail_test;

use studio::catalog::ArtworkRecord;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DetailMode {
    /// Image, metadata and the inquiry button.
    #[default]
    Info,
    /// The room placement simulator.
    Simulation,
}

impl DetailMode {
    pub const ALL: [Self; 2] = [Self::Info, Self::Simulation];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Info => "Work Detail",
            Self::Simulation => "가상 배치",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DetailState {
    pub selected: Option<ArtworkRecord>,
    /// Kept across open/close so the last used tab comes back.
    pub mode: DetailMode,
}

impl DetailState {
    pub fn open(&mut self, record: ArtworkRecord) {
        self.selected = Some(record);
    }

    pub fn close(&mut self) {
        self.selected = None;
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }
}
