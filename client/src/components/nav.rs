//! Fixed navigation bar with the full-screen mobile menu.

use leptos::prelude::*;

use crate::content::{ARTIST, NAV_SECTIONS, section_href};
use crate::state::nav::NavState;

#[component]
pub fn Nav() -> impl IntoView {
    let nav = expect_context::<RwSignal<NavState>>();

    #[cfg(feature = "csr")]
    {
        let handle = window_event_listener(leptos::ev::scroll, move |_| {
            nav.update(|state| state.on_scroll(crate::util::dom::page_scroll_y()));
        });
        on_cleanup(move || handle.remove());
    }

    let close_menu = move || nav.update(|state| state.menu_open = false);

    view! {
        <nav class=move || nav.get().bar_class()>
            <div class="site-nav__inner">
                <a class="site-nav__brand" href="#home">
                    <h1>{ARTIST.eng_name}</h1>
                    <p>"Contemporary Art"</p>
                </a>
                <div class="site-nav__links">
                    {NAV_SECTIONS
                        .iter()
                        .map(|label| view! { <a href=section_href(label)>{*label}</a> })
                        .collect_view()}
                </div>
                <button
                    class="site-nav__menu-button"
                    aria-label="Open menu"
                    on:click=move |_| nav.update(|state| state.menu_open = true)
                >
                    "☰"
                </button>
            </div>
        </nav>
        <Show when=move || nav.get().menu_open>
            <div class="mobile-menu">
                <button class="mobile-menu__close" aria-label="Close menu" on:click=move |_| close_menu()>
                    "✕"
                </button>
                <div class="mobile-menu__links">
                    {NAV_SECTIONS
                        .iter()
                        .map(|label| {
                            view! {
                                <a href=section_href(label) on:click=move |_| close_menu()>
                                    {*label}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </Show>
    }
}
