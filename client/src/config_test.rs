use super::*;

#[test]
fn empty_environment_uses_root_and_no_relay() {
    let config = SiteConfig::from_parts(None, None, None, None);
    assert_eq!(config.assets.root_asset("cafe.jpg"), "/cafe.jpg");
    assert!(config.relay.is_none());
}

#[test]
fn base_path_is_normalized() {
    let config = SiteConfig::from_parts(Some("seyart-portfolio"), None, None, None);
    assert_eq!(config.assets.root_asset("cafe.jpg"), "/seyart-portfolio/cafe.jpg");
}

#[test]
fn relay_needs_all_three_identifiers() {
    let config = SiteConfig::from_parts(None, Some("svc"), Some("tpl"), None);
    assert!(config.relay.is_none());

    let config = SiteConfig::from_parts(None, Some("svc"), Some("tpl"), Some("key"));
    assert_eq!(
        config.relay,
        Some(RelayConfig { service_id: "svc".into(), template_id: "tpl".into(), public_key: "key".into() })
    );
}

#[test]
fn blank_identifiers_count_as_missing() {
    let config = SiteConfig::from_parts(None, Some("svc"), Some("  "), Some("key"));
    assert!(config.relay.is_none());
}

#[test]
fn identifiers_are_trimmed() {
    let config = SiteConfig::from_parts(None, Some(" svc "), Some("tpl\n"), Some("key"));
    assert_eq!(config.relay.map(|r| (r.service_id, r.template_id)), Some(("svc".into(), "tpl".into())));
}
