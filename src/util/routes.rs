//! Route classification: public, admin-restricted or private.
//!
//! DESIGN
//! ======
//! Fails closed. Only exact allow-listed paths are public, admin prefixes are
//! matched loosely (raw, case-insensitive), and everything else is private.
//! A newly added route therefore needs a session unless someone opts it out.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use crate::config::PortalConfig;

/// Access class of a route.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RouteClass {
    /// Reachable without a session.
    Public,
    /// Requires an authenticated principal with the admin role.
    Admin,
    /// Requires an authenticated principal.
    Private,
}

/// Pure path classifier built from the configured allow-lists.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteClassifier {
    public_paths: Vec<String>,
    admin_prefixes: Vec<String>,
}

impl RouteClassifier {
    #[must_use]
    pub fn new<P, A>(public_paths: P, admin_prefixes: A) -> Self
    where
        P: IntoIterator,
        P::Item: AsRef<str>,
        A: IntoIterator,
        A::Item: AsRef<str>,
    {
        Self {
            public_paths: public_paths.into_iter().map(|p| normalize_path(p.as_ref())).collect(),
            admin_prefixes: admin_prefixes
                .into_iter()
                .map(|p| normalize_path(p.as_ref()).to_ascii_lowercase())
                .collect(),
        }
    }

    #[must_use]
    pub fn from_config(config: &PortalConfig) -> Self {
        Self::new(&config.public_paths, &config.admin_prefixes)
    }

    /// Classify `path`. Total: every input maps to exactly one class.
    #[must_use]
    pub fn classify(&self, path: &str) -> RouteClass {
        let path = normalize_path(path);
        if self.public_paths.iter().any(|p| *p == path) {
            return RouteClass::Public;
        }
        let lowered = path.to_ascii_lowercase();
        if self.admin_prefixes.iter().any(|prefix| lowered.starts_with(prefix.as_str())) {
            return RouteClass::Admin;
        }
        RouteClass::Private
    }
}

/// Canonical form used for matching.
///
/// Drops query and fragment, collapses repeated slashes, forces a leading
/// slash and removes a trailing one. The empty path becomes `/`.
#[must_use]
pub fn normalize_path(raw: &str) -> String {
    let end = raw.find(['?', '#']).unwrap_or(raw.len());
    let mut out = String::with_capacity(end + 1);
    for segment in raw[..end].split('/').filter(|s| !s.is_empty()) {
        out.push('/');
        out.push_str(segment);
    }
    if out.is_empty() {
        out.push('/');
    }
    out
}
