//! Build-time site configuration.
//!
//! Values are captured from the build environment with `option_env!`, so a
//! deployed bundle carries its base path and relay identifiers baked in.
//! Blank values count as missing.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use studio::assets::AssetPaths;

/// Routing identifiers for the transactional email relay.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RelayConfig {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

/// Everything the page reads from its build environment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SiteConfig {
    pub assets: AssetPaths,
    /// `None` when any relay identifier is missing; submissions then fail.
    pub relay: Option<RelayConfig>,
}

impl SiteConfig {
    /// Configuration compiled into this build.
    #[must_use]
    pub fn from_build_env() -> Self {
        Self::from_parts(
            option_env!("PORTFOLIO_BASE_PATH"),
            option_env!("EMAILJS_SERVICE_ID"),
            option_env!("EMAILJS_TEMPLATE_ID"),
            option_env!("EMAILJS_PUBLIC_KEY"),
        )
    }

    #[must_use]
    pub fn from_parts(
        base_path: Option<&str>,
        service_id: Option<&str>,
        template_id: Option<&str>,
        public_key: Option<&str>,
    ) -> Self {
        let assets = AssetPaths::new(base_path.unwrap_or("/"));
        let relay = match (non_blank(service_id), non_blank(template_id), non_blank(public_key)) {
            (Some(service_id), Some(template_id), Some(public_key)) => {
                Some(RelayConfig { service_id, template_id, public_key })
            }
            _ => None,
        };
        Self { assets, relay }
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value.map(str::trim).filter(|v| !v.is_empty()).map(str::to_owned)
}
