//! Type-safe API clients that enforce authentication requirements at compile time

use super::{ClientError, execute, execute_empty};
use reqwest::{Client, ClientBuilder, Url, header};

#[cfg(not(target_arch = "wasm32"))]
const USER_AGENT: &str = concat!("hbnb-client/", env!("CARGO_PKG_VERSION"));

/// Client for endpoints that don't require authentication
#[derive(Clone)]
pub struct PublicClient {
    client: Client,
    base_url: Url,
}

/// Client for endpoints that require a bearer token
#[derive(Clone)]
pub struct AuthenticatedClient {
    client: Client,
    base_url: Url,
    token: String,
}

fn build_http_client() -> Result<Client, ClientError> {
    #[cfg(not(target_arch = "wasm32"))]
    let builder = ClientBuilder::new().user_agent(USER_AGENT);

    // The browser owns the user agent
    #[cfg(target_arch = "wasm32")]
    let builder = ClientBuilder::new();

    Ok(builder.build()?)
}

fn parse_base_url(base_url: &str) -> Result<Url, ClientError> {
    let url = Url::parse(base_url.trim_end_matches('/'))
        .map_err(|error| ClientError::Configuration(format!("invalid base_url: {error}")))?;
    if url.cannot_be_a_base() {
        return Err(ClientError::Configuration(format!(
            "base_url cannot carry a path: {url}"
        )));
    }
    Ok(url)
}

/// Append `segments` to the base path, percent-encoding each one
fn endpoint(base_url: &Url, segments: &[&str]) -> Url {
    let mut url = base_url.clone();
    // parse_base_url only accepts URLs that have a path
    if let Ok(mut path) = url.path_segments_mut() {
        path.pop_if_empty().extend(segments);
    }
    url
}

impl PublicClient {
    /// Create a new public client
    pub fn new(base_url: impl AsRef<str>) -> Result<Self, ClientError> {
        Ok(Self {
            client: build_http_client()?,
            base_url: parse_base_url(base_url.as_ref())?,
        })
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    /// Create a request builder without authentication
    pub fn request(&self, method: reqwest::Method, segments: &[&str]) -> reqwest::RequestBuilder {
        self.client.request(method, endpoint(&self.base_url, segments))
    }

    /// Execute a request and decode its JSON body
    pub async fn execute<T: serde::de::DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ClientError> {
        execute(request).await
    }

    /// Attach a bearer token, producing an authenticated client that shares
    /// the same connection pool
    pub fn authenticate(self, token: impl Into<String>) -> AuthenticatedClient {
        AuthenticatedClient {
            client: self.client,
            base_url: self.base_url,
            token: token.into(),
        }
    }
}

impl AuthenticatedClient {
    /// Create a new authenticated client
    pub fn new(base_url: impl AsRef<str>, token: impl Into<String>) -> Result<Self, ClientError> {
        Ok(PublicClient::new(base_url)?.authenticate(token))
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    /// Create a request builder with the bearer token attached
    pub fn request(&self, method: reqwest::Method, segments: &[&str]) -> reqwest::RequestBuilder {
        self.client
            .request(method, endpoint(&self.base_url, segments))
            .header(header::AUTHORIZATION, format!("Bearer {}", self.token))
    }

    /// Execute a request and decode its JSON body
    pub async fn execute<T: serde::de::DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ClientError> {
        execute(request).await
    }

    /// Execute a request whose response body is irrelevant
    pub async fn execute_empty(&self, request: reqwest::RequestBuilder) -> Result<(), ClientError> {
        execute_empty(request).await
    }
}

/// Type-safe builder that creates the appropriate client type
#[derive(Default)]
pub struct TypedClientBuilder {
    base_url: Option<String>,
}

impl TypedClientBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    fn require_base_url(self) -> Result<String, ClientError> {
        self.base_url
            .ok_or_else(|| ClientError::Configuration("base_url is required".into()))
    }

    /// Build a public client
    pub fn build_public(self) -> Result<PublicClient, ClientError> {
        PublicClient::new(self.require_base_url()?)
    }

    /// Build an authenticated client
    pub fn build_authenticated(
        self,
        token: impl Into<String>,
    ) -> Result<AuthenticatedClient, ClientError> {
        AuthenticatedClient::new(self.require_base_url()?, token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_appends_segments() {
        let base = parse_base_url("http://127.0.0.1:5000/api/v1/").unwrap();
        assert_eq!(
            endpoint(&base, &["auth", "login"]).as_str(),
            "http://127.0.0.1:5000/api/v1/auth/login"
        );

        let root = parse_base_url("http://127.0.0.1:5000").unwrap();
        assert_eq!(endpoint(&root, &["places"]).path(), "/places");
    }

    #[test]
    fn test_endpoint_encodes_reserved_characters() {
        let base = parse_base_url("http://127.0.0.1:5000/api/v1").unwrap();
        assert_eq!(
            endpoint(&base, &["places", "a/b?c"]).path(),
            "/api/v1/places/a%2Fb%3Fc"
        );
    }

    #[test]
    fn test_base_url_must_carry_a_path() {
        assert!(matches!(
            parse_base_url("mailto:host@example.org"),
            Err(ClientError::Configuration(_))
        ));
        assert!(matches!(
            parse_base_url("not a url"),
            Err(ClientError::Configuration(_))
        ));
    }
}
