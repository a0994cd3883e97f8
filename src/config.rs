//! Portal configuration resolved from named keys.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser has no process environment, so `from_build_env` reads values
//! captured by `option_env!` when the WASM bundle is compiled. Everything else
//! goes through `from_lookup`, which takes any key lookup and keeps tests away
//! from process-global env vars.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use thiserror::Error;

use crate::util::routes::normalize_path;

pub const DEFAULT_API_BASE: &str = "/api";
pub const DEFAULT_SSO_BASE: &str = "/sso";
pub const DEFAULT_FORBIDDEN_PATH: &str = "/403";
pub const DEFAULT_PUBLIC_PATHS: &str = "/403,/404";
pub const DEFAULT_ADMIN_PREFIXES: &str = "/admin";
pub const DEFAULT_LOOP_GUARD_KEY: &str = "portal.sso_redirect_attempted";

/// Errors raised while resolving [`PortalConfig`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A key was present but held only whitespace.
    #[error("config value for {key} is empty")]
    Empty { key: &'static str },

    /// A route path did not start with `/`.
    #[error("config value for {key} must be an absolute path, got '{value}'")]
    RelativePath { key: &'static str, value: String },

    /// The forbidden page would itself require the admin role.
    #[error("forbidden path '{path}' falls under admin prefix '{prefix}'")]
    ForbiddenPathRestricted { path: String, prefix: String },

    /// A public path would expose an admin-restricted route.
    #[error("public path '{path}' falls under admin prefix '{prefix}'")]
    PublicPathRestricted { path: String, prefix: String },
}

/// Typed portal configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortalConfig {
    /// Base URL of the REST API, without a trailing slash.
    pub api_base: String,
    /// Base URL of the identity provider, without a trailing slash.
    pub sso_base: String,
    /// Route rendered when an authenticated user lacks the required role.
    pub forbidden_path: String,
    /// Exact paths reachable without a session. Always contains `forbidden_path`.
    pub public_paths: Vec<String>,
    /// Path prefixes that require the admin role.
    pub admin_prefixes: Vec<String>,
    /// `sessionStorage` key of the redirect loop guard.
    pub loop_guard_key: String,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_owned(),
            sso_base: DEFAULT_SSO_BASE.to_owned(),
            forbidden_path: DEFAULT_FORBIDDEN_PATH.to_owned(),
            public_paths: split_list(DEFAULT_PUBLIC_PATHS),
            admin_prefixes: split_list(DEFAULT_ADMIN_PREFIXES),
            loop_guard_key: DEFAULT_LOOP_GUARD_KEY.to_owned(),
        }
    }
}

impl PortalConfig {
    /// Build config from values captured at compile time.
    ///
    /// - `PORTAL_API_BASE`: default `/api`
    /// - `PORTAL_SSO_BASE`: default `/sso`
    /// - `PORTAL_FORBIDDEN_PATH`: default `/403`
    /// - `PORTAL_PUBLIC_PATHS`: comma-separated, default `/403,/404`
    /// - `PORTAL_ADMIN_PREFIXES`: comma-separated, default `/admin`
    /// - `PORTAL_LOOP_GUARD_KEY`: default `portal.sso_redirect_attempted`
    ///
    /// # Errors
    ///
    /// Returns an error if any captured value fails validation.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| {
            let raw = match key {
                "PORTAL_API_BASE" => option_env!("PORTAL_API_BASE"),
                "PORTAL_SSO_BASE" => option_env!("PORTAL_SSO_BASE"),
                "PORTAL_FORBIDDEN_PATH" => option_env!("PORTAL_FORBIDDEN_PATH"),
                "PORTAL_PUBLIC_PATHS" => option_env!("PORTAL_PUBLIC_PATHS"),
                "PORTAL_ADMIN_PREFIXES" => option_env!("PORTAL_ADMIN_PREFIXES"),
                "PORTAL_LOOP_GUARD_KEY" => option_env!("PORTAL_LOOP_GUARD_KEY"),
                _ => None,
            };
            raw.map(str::to_owned)
        })
    }

    /// Build config from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns an error if a present value is empty, a path is relative, or
    /// the forbidden page or a public path falls under an admin prefix.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_base = base_url(&lookup, "PORTAL_API_BASE", DEFAULT_API_BASE)?;
        let sso_base = base_url(&lookup, "PORTAL_SSO_BASE", DEFAULT_SSO_BASE)?;
        let forbidden_path = value(&lookup, "PORTAL_FORBIDDEN_PATH", DEFAULT_FORBIDDEN_PATH)?;
        require_absolute("PORTAL_FORBIDDEN_PATH", &forbidden_path)?;

        let mut public_paths = path_list(&lookup, "PORTAL_PUBLIC_PATHS", DEFAULT_PUBLIC_PATHS)?;
        if !public_paths.contains(&forbidden_path) {
            public_paths.push(forbidden_path.clone());
        }
        let admin_prefixes = path_list(&lookup, "PORTAL_ADMIN_PREFIXES", DEFAULT_ADMIN_PREFIXES)?;
        let loop_guard_key = value(&lookup, "PORTAL_LOOP_GUARD_KEY", DEFAULT_LOOP_GUARD_KEY)?;

        for prefix in &admin_prefixes {
            if under_prefix(&forbidden_path, prefix) {
                return Err(ConfigError::ForbiddenPathRestricted {
                    path: forbidden_path,
                    prefix: prefix.clone(),
                });
            }
            if let Some(path) = public_paths.iter().find(|p| under_prefix(p, prefix)) {
                return Err(ConfigError::PublicPathRestricted { path: path.clone(), prefix: prefix.clone() });
            }
        }

        Ok(Self { api_base, sso_base, forbidden_path, public_paths, admin_prefixes, loop_guard_key })
    }

    /// Endpoint of the "who am I" probe.
    #[must_use]
    pub fn session_endpoint(&self) -> String {
        format!("{}/user/me", self.api_base)
    }
}

fn value<F>(lookup: &F, key: &'static str, default: &str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(default.to_owned()),
        Some(raw) => {
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                return Err(ConfigError::Empty { key });
            }
            Ok(trimmed.to_owned())
        }
    }
}

fn base_url<F>(lookup: &F, key: &'static str, default: &str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let raw = value(lookup, key, default)?;
    Ok(raw.trim_end_matches('/').to_owned())
}

fn path_list<F>(lookup: &F, key: &'static str, default: &str) -> Result<Vec<String>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let paths = split_list(&value(lookup, key, default)?);
    if paths.is_empty() {
        return Err(ConfigError::Empty { key });
    }
    for path in &paths {
        require_absolute(key, path)?;
    }
    Ok(paths)
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',').map(str::trim).filter(|s| !s.is_empty()).map(str::to_owned).collect()
}

fn require_absolute(key: &'static str, path: &str) -> Result<(), ConfigError> {
    if path.starts_with('/') {
        Ok(())
    } else {
        Err(ConfigError::RelativePath { key, value: path.to_owned() })
    }
}

// Same rule the route classifier applies: raw, case-insensitive prefix.
fn under_prefix(path: &str, prefix: &str) -> bool {
    normalize_path(path)
        .to_ascii_lowercase()
        .starts_with(&normalize_path(prefix).to_ascii_lowercase())
}
