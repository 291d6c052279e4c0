//! Client configuration and initialization

use crate::api::PlacesApi;
use crate::config::AppConfig;
use crate::session::Session;
use async_trait::async_trait;
pub use hbnb_http::client::ClientError;
use hbnb_http::client::{AuthenticatedClient, PublicClient, TypedClientBuilder};
use hbnb_http::types::{LoginRequest, LoginResponse, NewReview, Place};

/// API access for the page flows, backed by the typed HTTP clients
#[derive(Clone)]
pub struct HbnbApi {
    public: PublicClient,
}

impl HbnbApi {
    pub fn new(config: &AppConfig) -> Result<Self, ClientError> {
        let public = TypedClientBuilder::new()
            .base_url(config.api_base.as_str())
            .build_public()?;
        Ok(Self { public })
    }

    fn authenticated(&self, session: &Session) -> Option<AuthenticatedClient> {
        session
            .token()
            .map(|token| self.public.clone().authenticate(token))
    }
}

#[async_trait(?Send)]
impl PlacesApi for HbnbApi {
    async fn login(&self, credentials: &LoginRequest) -> Result<LoginResponse, ClientError> {
        self.public.login(credentials).await
    }

    async fn list_places(&self, session: &Session) -> Result<Vec<Place>, ClientError> {
        match self.authenticated(session) {
            Some(client) => client.list_places().await,
            None => self.public.list_places().await,
        }
    }

    async fn place_details(
        &self,
        session: &Session,
        place_id: &str,
    ) -> Result<Place, ClientError> {
        match self.authenticated(session) {
            Some(client) => client.get_place(place_id).await,
            None => self.public.get_place(place_id).await,
        }
    }

    async fn submit_review(&self, session: &Session, review: &NewReview) -> Result<(), ClientError> {
        let client = self
            .authenticated(session)
            .ok_or_else(|| ClientError::Configuration("Not authenticated".into()))?;
        client.submit_review(review).await
    }
}
