//! HBnB HTTP client

pub mod error;
pub mod places;
pub mod typed;

pub use error::ClientError;
pub use typed::{AuthenticatedClient, PublicClient, TypedClientBuilder};

/// Send a request and decode a JSON body on success
pub(crate) async fn execute<T: serde::de::DeserializeOwned>(
    request: reqwest::RequestBuilder,
) -> Result<T, ClientError> {
    let response = request.send().await?;
    let status = response.status();

    if status.is_success() {
        Ok(response.json().await?)
    } else {
        Err(status_error(response).await)
    }
}

/// Send a request, only checking that the status is a success
pub(crate) async fn execute_empty(request: reqwest::RequestBuilder) -> Result<(), ClientError> {
    let response = request.send().await?;

    if response.status().is_success() {
        Ok(())
    } else {
        Err(status_error(response).await)
    }
}

async fn status_error(response: reqwest::Response) -> ClientError {
    let status = response.status();
    let message = response.text().await.unwrap_or_else(|_| status.to_string());
    tracing::debug!(status = status.as_u16(), %message, "API returned an error status");
    ClientError::from_status(status, message)
}
