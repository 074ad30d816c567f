//! "View in a room" tab: the selected work composited over a room scene.
//!
//! SYSTEM CONTEXT
//! ==============
//! All placement math lives in `studio::placement::PlacementSimulator`,
//! held in a shared signal. This component only forwards pointer samples
//! and button presses, dispatches the simulator's load requests and renders
//! the resulting `FrameLayout` as inline styles. The frame is sized from the
//! viewport width at the time of rendering.

use leptos::prelude::*;
use studio::assets::PLACEHOLDER_SRC;
use studio::catalog::ArtworkRecord;
use studio::placement::PlacementSimulator;
use studio::scene::{ROOM_SCENES, RoomScene};
use studio::size::viewport_frame_factor;

use crate::app::Site;
use crate::util::style::{frame_style, shade_style, zoom_label};
use crate::util::{dom, loader, pointer};

const HIDDEN_FRAME_STYLE: &str = "display: none;";

#[component]
pub fn RoomSimulator(record: ArtworkRecord) -> impl IntoView {
    let site = expect_context::<Site>();
    let simulator = expect_context::<RwSignal<PlacementSimulator>>();
    let viewport_factor = RwSignal::new(viewport_frame_factor(dom::viewport_width()));

    #[cfg(feature = "csr")]
    {
        let handle = window_event_listener(leptos::ev::resize, move |_| {
            viewport_factor.set(viewport_frame_factor(dom::viewport_width()));
        });
        on_cleanup(move || handle.remove());
    }

    let scene = Memo::new(move |_| simulator.with(PlacementSimulator::scene));
    let layout = Memo::new(move |_| simulator.with(|sim| sim.frame_layout(viewport_factor.get())));

    let assets = site.config.assets.clone();
    let select_scene = move |room: RoomScene| {
        if let Some(request) = simulator.try_update(|sim| sim.select_scene(room)) {
            loader::dispatch(request, simulator, &assets);
        }
    };

    let on_frame_down = move |ev: leptos::ev::PointerEvent| {
        let Some(sample) = pointer::sample(&ev) else {
            return;
        };
        ev.prevent_default();
        ev.stop_propagation();
        simulator.update(|sim| {
            sim.on_pointer(sample);
        });
    };

    let on_stage_pointer = move |ev: leptos::ev::PointerEvent| {
        if !simulator.with_untracked(PlacementSimulator::is_dragging) {
            return;
        }
        let Some(sample) = pointer::sample(&ev) else {
            return;
        };
        simulator.update(|sim| {
            sim.on_pointer(sample);
        });
    };

    let scene_assets = site.config.assets.clone();
    let artwork_src = RwSignal::new(site.config.assets.artwork_url(&record.file_name));

    view! {
        <div class="room-simulator">
            <div class="room-simulator__scenes">
                {ROOM_SCENES
                    .iter()
                    .map(|room| {
                        let room = *room;
                        let select_scene = select_scene.clone();
                        view! {
                            <button
                                class="room-simulator__scene"
                                class:room-simulator__scene--active=move || scene.get().id == room.id
                                on:click=move |_| select_scene(room)
                            >
                                {room.name}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            <div
                class="room-simulator__stage"
                class:room-simulator__stage--dragging=move || simulator.with(PlacementSimulator::is_dragging)
                on:pointermove=on_stage_pointer
                on:pointerup=on_stage_pointer
                on:pointerleave=on_stage_pointer
                on:pointercancel=on_stage_pointer
            >
                <img
                    class="room-simulator__room"
                    src=move || scene_assets.root_asset(scene.get().image_path)
                    alt=move || scene.get().name
                    draggable="false"
                />
                <div
                    class="room-simulator__frame"
                    style=move || layout.get().map_or_else(|| HIDDEN_FRAME_STYLE.to_owned(), |l| frame_style(&l))
                    on:pointerdown=on_frame_down
                >
                    <img
                        src=move || artwork_src.get()
                        alt=record.title.clone()
                        draggable="false"
                        on:error=move |_| artwork_src.set(PLACEHOLDER_SRC.to_owned())
                    />
                    <div
                        class="room-simulator__shade"
                        style=move || layout.get().map(|l| shade_style(l.shade)).unwrap_or_default()
                    ></div>
                </div>
            </div>
            <div class="room-simulator__controls">
                <button aria-label="Zoom out" on:click=move |_| simulator.update(PlacementSimulator::zoom_out)>
                    "−"
                </button>
                <span class="room-simulator__zoom">
                    {move || zoom_label(simulator.with(PlacementSimulator::placement))}
                </span>
                <button aria-label="Zoom in" on:click=move |_| simulator.update(PlacementSimulator::zoom_in)>
                    "+"
                </button>
                <button on:click=move |_| simulator.update(PlacementSimulator::rotate)>"회전"</button>
                <button on:click=move |_| simulator.update(PlacementSimulator::reset)>"Reset"</button>
            </div>
            <p class="room-simulator__hint">"* 드래그하여 작품을 이동하고 90도 회전할 수 있습니다."</p>
        </div>
    }
}
