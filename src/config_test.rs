use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn from_lookup_without_values_uses_defaults() {
    let cfg = PortalConfig::from_lookup(|_| None).unwrap();
    assert_eq!(cfg, PortalConfig::default());
    assert_eq!(cfg.api_base, "/api");
    assert_eq!(cfg.sso_base, "/sso");
    assert_eq!(cfg.forbidden_path, "/403");
    assert_eq!(cfg.public_paths, vec!["/403".to_owned(), "/404".to_owned()]);
    assert_eq!(cfg.admin_prefixes, vec!["/admin".to_owned()]);
    assert_eq!(cfg.loop_guard_key, "portal.sso_redirect_attempted");
}

#[test]
fn session_endpoint_appends_user_me() {
    let cfg = PortalConfig::default();
    assert_eq!(cfg.session_endpoint(), "/api/user/me");
}

// =============================================================
// Overrides
// =============================================================

#[test]
fn from_lookup_trims_trailing_slashes_on_bases() {
    let cfg = PortalConfig::from_lookup(lookup_from(&[
        ("PORTAL_API_BASE", "https://api.example.test/v1/"),
        ("PORTAL_SSO_BASE", " https://sso.example.test// "),
    ]))
    .unwrap();
    assert_eq!(cfg.api_base, "https://api.example.test/v1");
    assert_eq!(cfg.sso_base, "https://sso.example.test");
    assert_eq!(cfg.session_endpoint(), "https://api.example.test/v1/user/me");
}

#[test]
fn from_lookup_parses_lists_and_adds_forbidden_path_to_public() {
    let cfg = PortalConfig::from_lookup(lookup_from(&[
        ("PORTAL_FORBIDDEN_PATH", "/denied"),
        ("PORTAL_PUBLIC_PATHS", " /404 , /500 ,"),
        ("PORTAL_ADMIN_PREFIXES", "/admin,/ops"),
        ("PORTAL_LOOP_GUARD_KEY", "custom.key"),
    ]))
    .unwrap();
    assert_eq!(cfg.forbidden_path, "/denied");
    assert_eq!(cfg.public_paths, vec!["/404".to_owned(), "/500".to_owned(), "/denied".to_owned()]);
    assert_eq!(cfg.admin_prefixes, vec!["/admin".to_owned(), "/ops".to_owned()]);
    assert_eq!(cfg.loop_guard_key, "custom.key");
}

// =============================================================
// Validation
// =============================================================

#[test]
fn from_lookup_rejects_blank_value() {
    let err = PortalConfig::from_lookup(lookup_from(&[("PORTAL_SSO_BASE", "   ")])).unwrap_err();
    assert_eq!(err, ConfigError::Empty { key: "PORTAL_SSO_BASE" });
}

#[test]
fn from_lookup_rejects_list_of_only_separators() {
    let err = PortalConfig::from_lookup(lookup_from(&[("PORTAL_ADMIN_PREFIXES", ",,")])).unwrap_err();
    assert_eq!(err, ConfigError::Empty { key: "PORTAL_ADMIN_PREFIXES" });
}

#[test]
fn from_lookup_rejects_relative_paths() {
    let err = PortalConfig::from_lookup(lookup_from(&[("PORTAL_PUBLIC_PATHS", "/404,help")])).unwrap_err();
    assert_eq!(err, ConfigError::RelativePath { key: "PORTAL_PUBLIC_PATHS", value: "help".to_owned() });

    let err = PortalConfig::from_lookup(lookup_from(&[("PORTAL_FORBIDDEN_PATH", "403")])).unwrap_err();
    assert_eq!(err, ConfigError::RelativePath { key: "PORTAL_FORBIDDEN_PATH", value: "403".to_owned() });
}

#[test]
fn from_lookup_rejects_forbidden_path_under_admin_prefix() {
    let err = PortalConfig::from_lookup(lookup_from(&[("PORTAL_FORBIDDEN_PATH", "/admin/403")])).unwrap_err();
    assert_eq!(
        err,
        ConfigError::ForbiddenPathRestricted { path: "/admin/403".to_owned(), prefix: "/admin".to_owned() }
    );
}

#[test]
fn from_lookup_rejects_public_path_under_admin_prefix_case_insensitively() {
    let err = PortalConfig::from_lookup(lookup_from(&[("PORTAL_PUBLIC_PATHS", "/404,/ADMIN/help")])).unwrap_err();
    assert_eq!(
        err,
        ConfigError::PublicPathRestricted { path: "/ADMIN/help".to_owned(), prefix: "/admin".to_owned() }
    );
}

#[test]
fn config_error_messages_name_the_key() {
    let err = ConfigError::Empty { key: "PORTAL_API_BASE" };
    assert_eq!(err.to_string(), "config value for PORTAL_API_BASE is empty");
}

#[test]
fn from_lookup_normalizes_prefix_before_checking_forbidden_path() {
    let err = PortalConfig::from_lookup(lookup_from(&[
        ("PORTAL_ADMIN_PREFIXES", "/ops/"),
        ("PORTAL_FORBIDDEN_PATH", "/ops"),
    ]))
    .unwrap_err();
    assert_eq!(err, ConfigError::ForbiddenPathRestricted { path: "/ops".to_owned(), prefix: "/ops/".to_owned() });
}
