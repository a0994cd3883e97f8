use super::*;

fn classifier() -> RouteClassifier {
    RouteClassifier::from_config(&PortalConfig::default())
}

// =============================================================
// normalize_path
// =============================================================

#[test]
fn normalize_strips_query_and_fragment() {
    assert_eq!(normalize_path("/403?from=/admin"), "/403");
    assert_eq!(normalize_path("/403#details"), "/403");
}

#[test]
fn normalize_collapses_slashes_and_trailing_slash() {
    assert_eq!(normalize_path("//admin///users/"), "/admin/users");
    assert_eq!(normalize_path("/403/"), "/403");
}

#[test]
fn normalize_empty_and_relative_paths() {
    assert_eq!(normalize_path(""), "/");
    assert_eq!(normalize_path("?q=1"), "/");
    assert_eq!(normalize_path("dashboard"), "/dashboard");
}

// =============================================================
// classify
// =============================================================

#[test]
fn error_pages_are_public() {
    let c = classifier();
    assert_eq!(c.classify("/403"), RouteClass::Public);
    assert_eq!(c.classify("/404"), RouteClass::Public);
    assert_eq!(c.classify("/403/"), RouteClass::Public);
}

#[test]
fn public_match_is_exact() {
    let c = classifier();
    assert_eq!(c.classify("/403/secret"), RouteClass::Private);
    assert_eq!(c.classify("/4031"), RouteClass::Private);
}

#[test]
fn admin_prefix_matches_subtree() {
    let c = classifier();
    assert_eq!(c.classify("/admin"), RouteClass::Admin);
    assert_eq!(c.classify("/admin/users"), RouteClass::Admin);
    assert_eq!(c.classify("/admin/users?page=2"), RouteClass::Admin);
}

#[test]
fn admin_prefix_fails_closed_on_lookalikes() {
    let c = classifier();
    assert_eq!(c.classify("/administrator"), RouteClass::Admin);
    assert_eq!(c.classify("/ADMIN/users"), RouteClass::Admin);
    assert_eq!(c.classify("//admin/users"), RouteClass::Admin);
}

#[test]
fn everything_else_is_private() {
    let c = classifier();
    for path in ["/", "", "/dashboard", "/settings/profile", "/login", "/new-route"] {
        assert_eq!(c.classify(path), RouteClass::Private, "path {path:?}");
    }
}

#[test]
fn classify_is_deterministic() {
    let c = classifier();
    for path in ["/403", "/admin/x", "/dashboard", "weird path", "/%2e%2e/admin"] {
        assert_eq!(c.classify(path), c.classify(path));
    }
}

#[test]
fn trailing_slash_on_admin_prefix_still_covers_its_root() {
    let c = RouteClassifier::new(["/403"], ["/ops/"]);
    assert_eq!(c.classify("/ops"), RouteClass::Admin);
    assert_eq!(c.classify("/ops/jobs"), RouteClass::Admin);
    assert_eq!(c.classify("/admin"), RouteClass::Private);
}
