//! Places, reviews and login endpoints

use super::{
    error::ClientError,
    typed::{AuthenticatedClient, PublicClient},
};
use crate::types::{LoginRequest, LoginResponse, NewReview, Place};
use reqwest::Method;

/// Endpoints reachable without a token
impl PublicClient {
    /// Exchange credentials for an access token
    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ClientError> {
        let req = self.request(Method::POST, &["auth", "login"]).json(request);
        self.execute(req).await
    }

    /// List all places
    pub async fn list_places(&self) -> Result<Vec<Place>, ClientError> {
        let req = self.request(Method::GET, &["places"]);
        self.execute(req).await
    }

    /// Get a single place with its amenities and reviews
    pub async fn get_place(&self, place_id: &str) -> Result<Place, ClientError> {
        let req = self.request(Method::GET, &["places", place_id]);
        self.execute(req).await
    }
}

/// Endpoints called with the bearer token attached
impl AuthenticatedClient {
    /// List all places (authenticated view)
    pub async fn list_places(&self) -> Result<Vec<Place>, ClientError> {
        let req = self.request(Method::GET, &["places"]);
        self.execute(req).await
    }

    /// Get a single place (authenticated view)
    pub async fn get_place(&self, place_id: &str) -> Result<Place, ClientError> {
        let req = self.request(Method::GET, &["places", place_id]);
        self.execute(req).await
    }

    /// Post a review for a place
    pub async fn submit_review(&self, review: &NewReview) -> Result<(), ClientError> {
        let req = self.request(Method::POST, &["reviews"]).json(review);
        self.execute_empty(req).await
    }
}
