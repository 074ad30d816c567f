//! Profile photo, biography and affiliations.

use leptos::prelude::*;

use crate::app::Site;
use crate::content::{ACTIVITIES, AFFILIATIONS, ARTIST};

#[component]
pub fn About() -> impl IntoView {
    let site = expect_context::<Site>();
    let portrait = site.config.assets.root_asset("profile.png");
    let portrait_failed = RwSignal::new(false);

    view! {
        <section id="about" class="about">
            <div class="about__inner">
                <div class="about__portrait">
                    <img
                        src=portrait
                        alt=ARTIST.name
                        class:hidden=move || portrait_failed.get()
                        on:error=move |_| portrait_failed.set(true)
                    />
                    <a class="about__profile-link" href=ARTIST.naver_profile target="_blank" rel="noopener noreferrer">
                        "네이버 프로필 보기"
                    </a>
                </div>
                <div class="about__text">
                    <p class="about__eyebrow">"About the Artist"</p>
                    <h3 class="about__name">{ARTIST.name}</h3>
                    <p class="about__bio">{ARTIST.bio}</p>
                    <div class="about__lists">
                        <AboutList heading="소속" items=&AFFILIATIONS />
                        <AboutList heading="활동" items=&ACTIVITIES />
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn AboutList(heading: &'static str, items: &'static [&'static str]) -> impl IntoView {
    view! {
        <div class="about__list">
            <h4>{heading}</h4>
            <ul>{items.iter().map(|item| view! { <li>{*item}</li> }).collect_view()}</ul>
        </div>
    }
}
