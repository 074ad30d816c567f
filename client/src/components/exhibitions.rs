use leptos::prelude::*;

use crate::content::SOLO_EXHIBITIONS;

/// Solo exhibition timeline, newest first.
#[component]
pub fn Exhibitions() -> impl IntoView {
    view! {
        <section id="exhibition" class="exhibitions">
            <div class="section-heading">
                <p class="section-heading__eyebrow">"Timeline"</p>
                <h3>"전시 이력"</h3>
                <p class="section-heading__lede">
                    "21여 회의 개인전과 수많은 단체전을 통해 이어온 예술적 행보의 기록입니다."
                </p>
            </div>
            <ol class="timeline">
                {SOLO_EXHIBITIONS
                    .iter()
                    .map(|exhibition| {
                        view! {
                            <li class="timeline__entry">
                                <span class="timeline__year">{exhibition.year}</span>
                                <span class="timeline__title">{exhibition.title}</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ol>
        </section>
    }
}
