use leptos::prelude::*;

use crate::components::press_carousel::PressCarousel;
use crate::content::{DRAMA_VIDEO_EMBED, DRAMA_WORKS, drama_link};

/// Drama sponsorships and press coverage.
#[component]
pub fn Media() -> impl IntoView {
    view! {
        <section id="media" class="media">
            <div class="media__dramas">
                <div class="section-heading section-heading--left">
                    <p class="section-heading__eyebrow">"Collaborations"</p>
                    <h3>"드라마 협찬 작품"</h3>
                </div>
                <div class="media__drama-grid">
                    <ul class="media__drama-list">
                        {DRAMA_WORKS
                            .iter()
                            .map(|title| {
                                view! {
                                    <li>
                                        <a href=drama_link(title) target="_blank" rel="noopener noreferrer">
                                            {*title}
                                        </a>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                    <div class="media__video">
                        <iframe
                            src=DRAMA_VIDEO_EMBED
                            title="Drama sponsorship"
                            allow="accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture"
                            allowfullscreen=true
                        ></iframe>
                    </div>
                </div>
            </div>
            <PressCarousel />
        </section>
    }
}
