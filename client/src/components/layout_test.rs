use super::*;

#[test]
fn nav_links_cover_every_route_once() {
    let links = nav_links();
    let mut hrefs: Vec<&str> = links.iter().map(|(_, href)| *href).collect();
    hrefs.sort_unstable();
    hrefs.dedup();
    assert_eq!(hrefs.len(), links.len(), "duplicate sidebar href");
    assert!(hrefs.contains(&"/"));
    assert!(hrefs.contains(&"/inventory/products"));
    assert!(hrefs.contains(&"/inventory/movements"));
    assert!(hrefs.contains(&"/purchases/grn"));
}

#[test]
fn root_link_matches_exactly() {
    assert!(is_active_path("/", "/"));
    assert!(!is_active_path("/inventory/products", "/"));
}

#[test]
fn section_links_match_by_prefix() {
    assert!(is_active_path("/inventory/products", "/inventory/products"));
    assert!(is_active_path("/inventory/products/123", "/inventory/products"));
    assert!(!is_active_path("/inventory/movements", "/inventory/products"));
}

#[test]
fn similar_prefixes_do_not_collide() {
    // "/pos" must not claim "/post-office" style paths.
    assert!(!is_active_path("/projects", "/pos"));
    assert!(is_active_path("/pos", "/pos"));
}
