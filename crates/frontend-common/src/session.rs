//! Cookie-backed session

use crate::config::TOKEN_COOKIE;

/// Look up a cookie value in a `document.cookie` style string.
///
/// Entries are split on `;` and then on the first `=`; whitespace around
/// entries is ignored, entries without `=` are skipped and an empty value is
/// treated as absent.
pub fn cookie_value<'a>(cookies: &'a str, name: &str) -> Option<&'a str> {
    cookies
        .split(';')
        .filter_map(|entry| entry.trim().split_once('='))
        .find(|(key, _)| key.trim() == name)
        .map(|(_, value)| value.trim())
        .filter(|value| !value.is_empty())
}

/// Session context passed explicitly to page flows and fetch calls
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    token: Option<String>,
}

impl Session {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
        }
    }

    /// Read the session from a cookie string
    pub fn from_cookies(cookies: &str) -> Self {
        Self {
            token: cookie_value(cookies, TOKEN_COOKIE).map(str::to_string),
        }
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Cookie assignment storing `token` for the whole site
    pub fn login_cookie(token: &str) -> String {
        format!("{TOKEN_COOKIE}={token}; path=/")
    }
}
