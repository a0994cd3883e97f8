//! Full-page navigation and identity-provider URLs.
//!
//! SYSTEM CONTEXT
//! ==============
//! Leaving for the identity provider is a document navigation, not a router
//! transition. The store reaches the browser through [`Navigator`] so tests can
//! record navigations instead of performing them.

#[cfg(test)]
#[path = "navigation_test.rs"]
mod navigation_test;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    #[error("no browser window")]
    NoWindow,

    #[error("navigation to '{url}' was refused")]
    Refused { url: String },
}

/// Access to the document location.
pub trait Navigator {
    /// Full URL of the current document, if known.
    fn current_url(&self) -> Option<String>;

    /// Navigate the whole document to `url`.
    ///
    /// # Errors
    ///
    /// Returns an error if the browser refuses the navigation.
    fn assign(&self, url: &str) -> Result<(), NavigationError>;
}

/// `window.location`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn current_url(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            web_sys::window().and_then(|w| w.location().href().ok())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn assign(&self, url: &str) -> Result<(), NavigationError> {
        #[cfg(feature = "hydrate")]
        {
            let window = web_sys::window().ok_or(NavigationError::NoWindow)?;
            window
                .location()
                .assign(url)
                .map_err(|_| NavigationError::Refused { url: url.to_owned() })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = url;
            Err(NavigationError::NoWindow)
        }
    }
}

/// `<sso_base>/login?redirect=<urlencoded return_to>`.
#[must_use]
pub fn login_url(sso_base: &str, return_to: &str) -> String {
    provider_url(sso_base, "login", return_to)
}

/// `<sso_base>/logout?redirect=<urlencoded return_to>`.
#[must_use]
pub fn logout_url(sso_base: &str, return_to: &str) -> String {
    provider_url(sso_base, "logout", return_to)
}

fn provider_url(sso_base: &str, action: &str, return_to: &str) -> String {
    format!(
        "{}/{action}?redirect={}",
        sso_base.trim_end_matches('/'),
        urlencoding::encode(return_to)
    )
}
