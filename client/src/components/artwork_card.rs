use leptos::prelude::*;
use studio::assets::PLACEHOLDER_SRC;
use studio::catalog::ArtworkRecord;
use studio::size::AspectClass;

use crate::app::Site;

/// One gallery card. Its shape follows the decoded image ratio; a failed
/// image is swapped for the placeholder.
#[component]
pub fn ArtworkCard(record: ArtworkRecord, on_select: Callback<ArtworkRecord>) -> impl IntoView {
    let site = expect_context::<Site>();
    let src = RwSignal::new(site.config.assets.artwork_url(&record.file_name));
    let aspect = RwSignal::new(AspectClass::default());

    let on_load = move |ev: leptos::ev::Event| {
        #[cfg(feature = "csr")]
        {
            use wasm_bindgen::JsCast;
            if let Some(image) = ev.target().and_then(|target| target.dyn_into::<web_sys::HtmlImageElement>().ok()) {
                aspect.set(AspectClass::from_pixels(image.natural_width(), image.natural_height()));
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = ev;
        }
    };

    let title = record.title.clone();
    let year = record.year.clone();
    let alt = record.title.clone();

    view! {
        <div
            class=move || format!("artwork-card {}", aspect.get().css_class())
            on:click=move |_| on_select.run(record.clone())
        >
            <img
                src=move || src.get()
                alt=alt
                draggable="false"
                loading="lazy"
                on:load=on_load
                on:error=move |_| src.set(PLACEHOLDER_SRC.to_owned())
            />
            <div class="artwork-card__caption">
                <p class="artwork-card__year">{year}</p>
                <h4 class="artwork-card__title">{title}</h4>
            </div>
        </div>
    }
}
