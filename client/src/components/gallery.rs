//! Auto-scrolling gallery strip.
//!
//! DESIGN
//! ======
//! The filtered catalog is rendered several times in a row, enough copies
//! to cover the viewport and never fewer than `LOOP_COPIES`. A per-frame
//! loop advances `scrollLeft` by one pixel and moves back by one measured
//! copy period once the third copy or the scroll limit is reached, so the
//! strip appears endless.
//! The loop pauses while a pointer is pressed on the strip or the detail
//! overlay is open. Dragging scrolls directly; a drag suppresses the click
//! that ends it.

use leptos::html::Div;
use leptos::prelude::*;
use studio::catalog::{ArtworkRecord, CategoryFilter};
use studio::gesture::{CLICK_GRACE_MS, PointerOutcome};
use studio::placement::PlacementSimulator;

use crate::app::Site;
use crate::components::artwork_card::ArtworkCard;
use crate::components::artwork_modal::open_artwork;
use crate::state::detail::DetailState;
use crate::state::gallery::{GalleryState, slot_key, slots_for};
use crate::util::{dom, pointer};

#[component]
pub fn Gallery() -> impl IntoView {
    let site = expect_context::<Site>();
    let gallery = expect_context::<RwSignal<GalleryState>>();
    let detail = expect_context::<RwSignal<DetailState>>();
    let simulator = expect_context::<RwSignal<PlacementSimulator>>();
    let strip_ref = NodeRef::<Div>::new();

    let filter = Memo::new(move |_| gallery.with(|state| state.filter));
    let catalog = site.catalog.clone();
    let copies = Memo::new(move |_| gallery.with(|state| state.copies));
    let slots = Memo::new(move |_| slots_for(&catalog, filter.get(), copies.get()));

    #[cfg(feature = "csr")]
    {
        let frames = crate::util::frame_loop::FrameLoop::start(move || {
            let modal_open = detail.with_untracked(DetailState::is_open);
            let copies = copies.get_untracked().max(1);
            let per_copy = slots.with_untracked(Vec::len) / copies;
            let metrics = dom::strip_metrics(strip_ref, per_copy, copies);
            if let Some(wanted) = gallery.with_untracked(|state| state.copies_wanted(metrics)) {
                gallery.update(|state| state.copies = wanted);
            }
            let hold = gallery.with_untracked(|state| state.hold(modal_open));
            let next = studio::marquee::tick(dom::strip_scroll_left(strip_ref), metrics, hold);
            if let Some(next) = next {
                dom::set_strip_scroll_left(strip_ref, next);
            }
        });
        on_cleanup(move || frames.stop());
    }

    let on_pointer = move |ev: leptos::ev::PointerEvent| {
        let Some(sample) = pointer::sample(&ev) else {
            return;
        };
        let scroll_left = dom::strip_scroll_left(strip_ref);
        match gallery.try_update(|state| state.drag.on_pointer(sample, scroll_left)) {
            Some(PointerOutcome::Scroll(next)) => {
                if sample.cancelable {
                    ev.prevent_default();
                }
                dom::set_strip_scroll_left(strip_ref, next);
            }
            Some(PointerOutcome::ClearLater) => {
                dom::after_ms(CLICK_GRACE_MS, move || gallery.update(|state| state.drag.clear_moving()));
            }
            Some(PointerOutcome::Idle) | None => {}
        }
    };

    let assets = site.config.assets.clone();
    let on_select = Callback::new(move |record: ArtworkRecord| {
        if gallery.with_untracked(|state| state.drag.suppresses_click()) {
            return;
        }
        open_artwork(record, detail, simulator, &assets);
    });

    view! {
        <section id="gallery" class="gallery">
            <div class="section-heading">
                <p class="section-heading__eyebrow">"Selected Works"</p>
                <h3>"작품 목록"</h3>
            </div>
            <div class="gallery__filters">
                {CategoryFilter::ALL_FILTERS
                    .iter()
                    .map(|option| {
                        let option = *option;
                        view! {
                            <button
                                class="gallery__filter"
                                class:gallery__filter--active=move || filter.get() == option
                                on:click=move |_| gallery.update(|state| state.filter = option)
                            >
                                {option.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            <div
                class="gallery__strip"
                node_ref=strip_ref
                on:pointerdown=on_pointer
                on:pointermove=on_pointer
                on:pointerup=on_pointer
                on:pointerleave=on_pointer
                on:pointercancel=on_pointer
            >
                <For each=move || slots.get() key=slot_key let:slot>
                    <ArtworkCard record=slot.item on_select=on_select />
                </For>
            </div>
        </section>
    }
}
