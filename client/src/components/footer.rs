use leptos::prelude::*;

use crate::content::ARTIST;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <h2 class="site-footer__brand">{ARTIST.eng_name}</h2>
            <div class="site-footer__links">
                <a href="#home">"Home"</a>
                <a href="#gallery">"Gallery"</a>
                <a href="#contact">"Contact"</a>
            </div>
            <p class="site-footer__copyright">"© 2024 Artist Shin Eun Young. Portfolio."</p>
        </footer>
    }
}
