use super::trace_failure;
use crate::api::PlacesApi;
use crate::config::AppConfig;
use crate::host::PageHost;
use hbnb_http::types::LoginRequest;

const LOGIN_FAILED: &str = "Login failed. Check credentials.";
const CONNECTION_ERROR: &str = "API connection error.";

/// Log in with the submitted credentials.
///
/// On success the token is stored as the session cookie and the browser
/// moves to the index page; otherwise the user stays on the form.
pub async fn submit_login(
    config: &AppConfig,
    credentials: LoginRequest,
    api: &impl PlacesApi,
    host: &impl PageHost,
) {
    match api.login(&credentials).await {
        Ok(response) => {
            tracing::info!("Login succeeded");
            host.store_token(&response.access_token);
            host.redirect(config.index_page);
        }
        Err(error) => {
            trace_failure("login", &error);
            host.alert(if error.is_transport() {
                CONNECTION_ERROR
            } else {
                LOGIN_FAILED
            });
        }
    }
}
