//! Remote operations used by the page flows

use crate::session::Session;
use async_trait::async_trait;
use hbnb_http::client::ClientError;
use hbnb_http::types::{LoginRequest, LoginResponse, NewReview, Place};

/// The four requests the client makes.
///
/// Every call takes the session explicitly; the token is attached when the
/// session has one.
#[cfg_attr(test, mockall::automock)]
#[async_trait(?Send)]
pub trait PlacesApi {
    async fn login(&self, credentials: &LoginRequest) -> Result<LoginResponse, ClientError>;

    async fn list_places(&self, session: &Session) -> Result<Vec<Place>, ClientError>;

    async fn place_details(&self, session: &Session, place_id: &str)
    -> Result<Place, ClientError>;

    /// Fails with [`ClientError::Configuration`] for an anonymous session.
    async fn submit_review(&self, session: &Session, review: &NewReview)
    -> Result<(), ClientError>;
}
