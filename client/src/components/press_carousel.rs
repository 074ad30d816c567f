//! Draggable press article strip with arrow buttons.

use leptos::html::Div;
use leptos::prelude::*;
use studio::gesture::{CLICK_GRACE_MS, DragScroll, PointerOutcome, ScrollDirection};

use crate::content::PRESS_ARTICLES;
use crate::util::{dom, pointer};

#[component]
pub fn PressCarousel() -> impl IntoView {
    let strip_ref = NodeRef::<Div>::new();
    let drag = RwSignal::new(DragScroll::carousel());

    let on_pointer = move |ev: leptos::ev::PointerEvent| {
        let Some(sample) = pointer::sample(&ev) else {
            return;
        };
        let scroll_left = dom::strip_scroll_left(strip_ref);
        match drag.try_update(|drag| drag.on_pointer(sample, scroll_left)) {
            Some(PointerOutcome::Scroll(next)) => {
                if sample.cancelable {
                    ev.prevent_default();
                }
                dom::set_strip_scroll_left(strip_ref, next);
            }
            Some(PointerOutcome::ClearLater) => {
                dom::after_ms(CLICK_GRACE_MS, move || drag.update(DragScroll::clear_moving));
            }
            Some(PointerOutcome::Idle) | None => {}
        }
    };

    // A link released at the end of a drag must not navigate.
    let on_link_click = move |ev: leptos::ev::MouseEvent| {
        if drag.with_untracked(DragScroll::suppresses_click) {
            ev.prevent_default();
        }
    };

    let scroll = move |direction: ScrollDirection| dom::scroll_strip_by(strip_ref, direction.delta());

    view! {
        <div class="press">
            <div class="press__header">
                <div class="section-heading section-heading--left">
                    <p class="section-heading__eyebrow">"Journal"</p>
                    <h3>"언론 보도"</h3>
                </div>
                <div class="press__arrows">
                    <button aria-label="Previous articles" on:click=move |_| scroll(ScrollDirection::Left)>"←"</button>
                    <button aria-label="Next articles" on:click=move |_| scroll(ScrollDirection::Right)>"→"</button>
                </div>
            </div>
            <div
                class="press__strip"
                class:press__strip--dragging=move || drag.with(DragScroll::is_pressed)
                node_ref=strip_ref
                on:pointerdown=on_pointer
                on:pointermove=on_pointer
                on:pointerup=on_pointer
                on:pointerleave=on_pointer
                on:pointercancel=on_pointer
            >
                {PRESS_ARTICLES
                    .iter()
                    .map(|article| {
                        view! {
                            <a
                                class="press__card"
                                href=article.url
                                target="_blank"
                                rel="noopener noreferrer"
                                draggable="false"
                                on:click=on_link_click
                            >
                                <span class="press__source">{article.source}</span>
                                <h4 class="press__title">{article.title}</h4>
                                <span class="press__more">"Read article"</span>
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
