use leptos::prelude::*;

use crate::app::Site;
use crate::content::ARTIST;

/// Full-height landing section.
#[component]
pub fn Hero() -> impl IntoView {
    let site = expect_context::<Site>();
    let backdrop = site.config.assets.root_asset("main_bg.png");
    let backdrop_failed = RwSignal::new(false);

    view! {
        <section id="home" class="hero">
            <div class="hero__backdrop">
                <img
                    src=backdrop
                    alt="Main Background"
                    class="hero__image"
                    class:hidden=move || backdrop_failed.get()
                    on:error=move |_| backdrop_failed.set(true)
                />
                <div class="hero__veil"></div>
            </div>
            <div class="hero__content">
                <p class="hero__eyebrow">"Portfolio & Archive"</p>
                <h2 class="hero__name">{ARTIST.name}</h2>
                <div class="hero__rule"></div>
                <p class="hero__motto">"\u{201c}" {ARTIST.philosophy} "\u{201d}"</p>
            </div>
            <div class="hero__scroll">
                <span>"Scroll"</span>
                <a href="#about" aria-label="Scroll down">"↓"</a>
            </div>
        </section>
    }
}
