//! Frontend configuration

use thiserror::Error;
use url::Url;

/// Default API root used when the hosting page does not override it
pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:5000/api/v1";

/// Name of the cookie carrying the bearer token
pub const TOKEN_COOKIE: &str = "token";

/// Options offered by the price filter, in display order
pub const PRICE_FILTER_OPTIONS: [&str; 4] = ["All", "10", "50", "100"];

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid API base URL '{0}'")]
    InvalidApiBase(String),
}

/// Client configuration resolved once per page load
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_base: String,
    pub token_cookie: &'static str,
    pub index_page: &'static str,
    pub login_page: &'static str,
    pub place_page: &'static str,
    pub add_review_page: &'static str,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            token_cookie: TOKEN_COOKIE,
            index_page: "index.html",
            login_page: "login.html",
            place_page: "place.html",
            add_review_page: "add_review.html",
        }
    }
}

impl AppConfig {
    /// Apply an API base override supplied by the hosting page
    pub fn with_api_base(mut self, api_base: Option<&str>) -> Result<Self, ConfigError> {
        let Some(api_base) = api_base.map(str::trim).filter(|base| !base.is_empty()) else {
            return Ok(self);
        };

        Url::parse(api_base).map_err(|_| ConfigError::InvalidApiBase(api_base.to_string()))?;
        self.api_base = api_base.trim_end_matches('/').to_string();
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_points_at_local_api() {
        let config = AppConfig::default();
        assert_eq!(config.api_base, "http://127.0.0.1:5000/api/v1");
        assert_eq!(config.token_cookie, "token");
    }

    #[test]
    fn test_api_base_override() {
        let config = AppConfig::default()
            .with_api_base(Some(" https://hbnb.example/api/v1/ "))
            .unwrap();
        assert_eq!(config.api_base, "https://hbnb.example/api/v1");

        let unchanged = AppConfig::default().with_api_base(Some("")).unwrap();
        assert_eq!(unchanged, AppConfig::default());

        assert_eq!(
            AppConfig::default().with_api_base(Some("not a url")),
            Err(ConfigError::InvalidApiBase("not a url".to_string()))
        );
    }
}
