//! Root component: builds the catalog once and provides shared state.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use studio::catalog::Catalog;
use studio::placement::PlacementSimulator;
use studio::scene::RoomScene;

use crate::components::about::About;
use crate::components::artwork_modal::ArtworkModal;
use crate::components::contact::Contact;
use crate::components::exhibitions::Exhibitions;
use crate::components::footer::Footer;
use crate::components::gallery::Gallery;
use crate::components::hero::Hero;
use crate::components::media::Media;
use crate::components::nav::Nav;
use crate::config::SiteConfig;
use crate::content::{ARTIST, CATALOG_TEXT};
use crate::state::contact::ContactState;
use crate::state::detail::DetailState;
use crate::state::gallery::GalleryState;
use crate::state::nav::NavState;
use crate::util::loader;

/// Read-only data shared by every section.
#[derive(Clone, Debug)]
pub struct Site {
    pub catalog: Catalog,
    pub config: SiteConfig,
}

impl Site {
    #[must_use]
    pub fn from_build() -> Self {
        Self { catalog: Catalog::for_site(CATALOG_TEXT), config: SiteConfig::from_build_env() }
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let site = Site::from_build();
    log::info!("catalog loaded: {} works", site.catalog.len());
    if site.config.relay.is_none() {
        leptos::logging::warn!("contact relay not configured; submissions will fail");
    }

    let simulator = RwSignal::new(PlacementSimulator::new());
    provide_context(site.clone());
    provide_context(RwSignal::new(NavState::default()));
    provide_context(RwSignal::new(GalleryState::default()));
    provide_context(RwSignal::new(DetailState::default()));
    provide_context(RwSignal::new(ContactState::default()));
    provide_context(simulator);

    // Sample the default scene up front so the first simulator view is shaded.
    if let Some(request) = simulator.try_update(|sim| sim.select_scene(RoomScene::default_scene())) {
        loader::dispatch(request, simulator, &site.config.assets);
    }

    view! {
        <Title text=format!("{} | Portfolio", ARTIST.eng_name) />
        <Nav />
        <main class="site">
            <Hero />
            <About />
            <Gallery />
            <Exhibitions />
            <Media />
            <Contact />
        </main>
        <Footer />
        <ArtworkModal />
    }
}
