//! Artwork detail overlay: information tab and room simulator tab.

use leptos::prelude::*;
use studio::assets::{AssetPaths, PLACEHOLDER_SRC};
use studio::catalog::ArtworkRecord;
use studio::consts::INQUIRY_SCROLL_DELAY_MS;
use studio::placement::PlacementSimulator;

use crate::app::Site;
use crate::components::room_simulator::RoomSimulator;
use crate::state::contact::{CONTACT_FORM_ID, ContactState};
use crate::state::detail::{DetailMode, DetailState};
use crate::util::{dom, loader};

/// Open the overlay for `record` and start loading its geometry.
pub fn open_artwork(
    record: ArtworkRecord,
    detail: RwSignal<DetailState>,
    simulator: RwSignal<PlacementSimulator>,
    assets: &AssetPaths,
) {
    if let Some(request) = simulator.try_update(|sim| sim.select_artwork(&record)) {
        loader::dispatch(request, simulator, assets);
    }
    detail.update(|state| state.open(record));
}

fn close_artwork(detail: RwSignal<DetailState>, simulator: RwSignal<PlacementSimulator>) {
    detail.update(DetailState::close);
    simulator.update(PlacementSimulator::close);
}

#[component]
pub fn ArtworkModal() -> impl IntoView {
    let detail = expect_context::<RwSignal<DetailState>>();
    let selected = Memo::new(move |_| detail.with(|state| state.selected.clone()));

    move || selected.get().map(|record| view! { <ArtworkDetail record=record /> })
}

#[component]
fn ArtworkDetail(record: ArtworkRecord) -> impl IntoView {
    let site = expect_context::<Site>();
    let detail = expect_context::<RwSignal<DetailState>>();
    let simulator = expect_context::<RwSignal<PlacementSimulator>>();
    let contact = expect_context::<RwSignal<ContactState>>();

    let mode = Memo::new(move |_| detail.with(|state| state.mode));
    let close = move || close_artwork(detail, simulator);
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            close();
        }
    };

    let inquiry_record = record.clone();
    let on_inquiry = move |_| {
        contact.update(|state| state.form.prefill_inquiry(&inquiry_record));
        close();
        dom::after_ms(INQUIRY_SCROLL_DELAY_MS, || dom::scroll_into_view(CONTACT_FORM_ID));
    };

    let image_src = RwSignal::new(site.config.assets.artwork_url(&record.file_name));
    let simulator_record = record.clone();

    view! {
        <div class="detail-modal__backdrop" on:click=move |_| close()>
            <div
                class="detail-modal"
                tabindex="0"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=on_keydown
            >
                <button class="detail-modal__close" aria-label="Close" on:click=move |_| close()>
                    "✕"
                </button>
                <div class="detail-modal__tabs">
                    {DetailMode::ALL
                        .iter()
                        .map(|tab| {
                            let tab = *tab;
                            view! {
                                <button
                                    class="detail-modal__tab"
                                    class:detail-modal__tab--active=move || mode.get() == tab
                                    on:click=move |_| detail.update(|state| state.mode = tab)
                                >
                                    {tab.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
                <Show
                    when=move || mode.get() == DetailMode::Info
                    fallback=move || view! { <RoomSimulator record=simulator_record.clone() /> }
                >
                    <div class="detail-modal__info">
                        <div class="detail-modal__image">
                            <img
                                src=move || image_src.get()
                                alt=record.title.clone()
                                on:error=move |_| image_src.set(PLACEHOLDER_SRC.to_owned())
                            />
                        </div>
                        <div class="detail-modal__meta">
                            <p class="detail-modal__year">{record.year.clone()}</p>
                            <h2 class="detail-modal__title">{record.title.clone()}</h2>
                            <p class="detail-modal__medium">{record.medium.clone()}</p>
                            <dl class="detail-modal__facts">
                                <dt>"Dimensions"</dt>
                                <dd>{record.size_label.clone()}</dd>
                            </dl>
                            <button class="detail-modal__inquiry" on:click=on_inquiry.clone()>
                                "작품 소장 문의하기"
                            </button>
                        </div>
                    </div>
                </Show>
            </div>
        </div>
    }
}
