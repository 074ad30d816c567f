use super::*;
use studio::catalog::{Catalog, CategoryFilter};

#[test]
fn catalog_source_parses_every_line() {
    let catalog = Catalog::for_site(CATALOG_TEXT);
    let non_blank = CATALOG_TEXT.lines().filter(|l| !l.trim().is_empty()).count();
    assert_eq!(catalog.len(), non_blank);
    assert!(catalog.len() > 100);
}

#[test]
fn site_catalog_lists_featured_year_first() {
    let records = Catalog::for_site(CATALOG_TEXT).filtered(CategoryFilter::All);
    assert!(records[0].year.contains("2024"));
    let first_other = records.iter().position(|r| !r.year.contains("2024"));
    let Some(first_other) = first_other else {
        panic!("catalog should hold works from other years");
    };
    assert!(records[first_other..].iter().all(|r| !r.year.contains("2024")));
}

#[test]
fn exhibitions_are_newest_first() {
    let years = SOLO_EXHIBITIONS.iter().map(|e| e.year).collect::<Vec<_>>();
    let mut sorted = years.clone();
    sorted.sort_by(|a, b| b.cmp(a));
    assert_eq!(years, sorted);
}

#[test]
fn press_links_are_absolute() {
    assert!(!PRESS_ARTICLES.is_empty());
    assert!(PRESS_ARTICLES.iter().all(|a| a.url.starts_with("http")));
}

#[test]
fn section_hrefs_are_lowercase_anchors() {
    assert_eq!(section_href("Exhibition"), "#exhibition");
}

#[test]
fn drama_link_encodes_the_title() {
    assert_eq!(drama_link("오! 삼광빌라"), "https://namu.wiki/w/%EC%98%A4%21%20%EC%82%BC%EA%B4%91%EB%B9%8C%EB%9D%BC");
}
