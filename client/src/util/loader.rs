//! Runs the simulator's async load requests and feeds results back.
//!
//! Completions go through the simulator's ticket check, so a late result for
//! a superseded selection is dropped there. Failures degrade silently: a
//! failed decode leaves the display box as it was, and a failed brightness
//! sample reports the neutral value.

use leptos::prelude::*;
use studio::assets::AssetPaths;
use studio::placement::{LoadRequest, PlacementSimulator};

/// Start `request` in the background.
#[cfg_attr(not(feature = "csr"), allow(unused_variables))]
pub fn dispatch(request: LoadRequest, simulator: RwSignal<PlacementSimulator>, assets: &AssetPaths) {
    #[cfg(feature = "csr")]
    {
        match request {
            LoadRequest::Geometry { ticket, file_name } => {
                let url = assets.artwork_url(&file_name);
                leptos::task::spawn_local(async move {
                    match crate::util::image::natural_size(&url).await {
                        Ok((width, height)) => {
                            let applied = simulator
                                .try_update(|sim| sim.apply_geometry(ticket, width, height))
                                .unwrap_or(false);
                            if !applied {
                                log::debug!("discarded geometry for {url}");
                            }
                        }
                        Err(err) => leptos::logging::warn!("artwork geometry unavailable: {err}"),
                    }
                });
            }
            LoadRequest::Brightness { ticket, image_path } => {
                let url = assets.root_asset(image_path);
                leptos::task::spawn_local(async move {
                    let brightness = match crate::util::image::sample_brightness(&url).await {
                        Ok(brightness) => brightness,
                        Err(err) => {
                            leptos::logging::warn!("scene brightness unavailable for {url}: {err}");
                            studio::brightness::Brightness::NEUTRAL
                        }
                    };
                    simulator.update(|sim| {
                        sim.apply_brightness(ticket, brightness);
                    });
                });
            }
        }
    }
}
