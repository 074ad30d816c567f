//! Gallery strip state: active filter, rendered copy count and the drag
//! tracker.

#[cfg(test)]
#[path = "gallery_test.rs"]
mod gallery_test;

use studio::catalog::{ArtworkRecord, Catalog, CategoryFilter};
use studio::consts::LOOP_COPIES;
use studio::gesture::DragScroll;
use studio::marquee::{LoopSlot, MarqueeHold, StripMetrics, copies_to_fill, looped};

#[derive(Clone, Debug, PartialEq)]
pub struct GalleryState {
    pub filter: CategoryFilter,
    /// How many times the filtered list is repeated in the strip.
    pub copies: usize,
    pub drag: DragScroll,
}

impl Default for GalleryState {
    fn default() -> Self {
        Self { filter: CategoryFilter::All, copies: LOOP_COPIES, drag: DragScroll::gallery() }
    }
}

impl GalleryState {
    #[must_use]
    pub fn hold(&self, modal_open: bool) -> MarqueeHold {
        MarqueeHold { pressed: self.drag.is_pressed(), modal_open }
    }

    /// New copy count when the measured strip needs a different one.
    #[must_use]
    pub fn copies_wanted(&self, metrics: StripMetrics) -> Option<usize> {
        if metrics.period <= 0.0 {
            return None;
        }
        let wanted = copies_to_fill(metrics.period, metrics.client_width);
        (wanted != self.copies).then_some(wanted)
    }
}

/// Records admitted by `filter`, repeated `copies` times for the loop.
#[must_use]
pub fn slots_for(catalog: &Catalog, filter: CategoryFilter, copies: usize) -> Vec<LoopSlot<ArtworkRecord>> {
    looped(&catalog.filtered(filter), copies)
}

/// Stable key for one rendered slot.
#[must_use]
pub fn slot_key(slot: &LoopSlot<ArtworkRecord>) -> String {
    format!("{}-{}", slot.item.id, slot.copy)
}
