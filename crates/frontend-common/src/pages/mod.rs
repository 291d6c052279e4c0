//! Page identities and their initialization flows
//!
//! The hosting shell names the page it serves; [`dispatch`] runs the single
//! matching initializer. Each flow catches its own failures and reports them
//! with exactly one alert, leaving previously rendered content alone.

mod add_review;
mod index;
mod login;
mod place;


pub use add_review::{ReviewForm, init_add_review, submit_review};
pub use index::init_index;
pub use login::submit_login;
pub use place::init_place;

use crate::api::PlacesApi;
use crate::config::AppConfig;
use crate::host::{PageAction, PageHost};
use crate::session::Session;
use hbnb_http::client::ClientError;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Page served by the hosting shell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageKind {
    Login,
    Index,
    Place,
    AddReview,
}

#[derive(Debug, Error, PartialEq)]
#[error("Unknown page '{0}'")]
pub struct PageKindError(String);

impl PageKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Login => "login",
            Self::Index => "index",
            Self::Place => "place",
            Self::AddReview => "add-review",
        }
    }
}

impl fmt::Display for PageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PageKind {
    type Err = PageKindError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "login" => Ok(Self::Login),
            "index" => Ok(Self::Index),
            "place" => Ok(Self::Place),
            "add-review" | "add_review" => Ok(Self::AddReview),
            other => Err(PageKindError(other.to_string())),
        }
    }
}

/// Everything a page flow reads once at load time
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageContext {
    pub config: AppConfig,
    pub session: Session,
    /// `id` query parameter of the current URL
    pub place_id: Option<String>,
}

/// Outcome of the authentication check for a page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Anonymous,
    Authenticated,
}

/// Toggle the login link and, on pages that have one, the add-review
/// affordance according to the session.
pub fn gate(session: &Session, host: &impl PageHost, has_review_affordance: bool) -> Access {
    let authenticated = session.is_authenticated();
    host.apply(PageAction::SetLoginLinkVisible(!authenticated));
    if has_review_affordance {
        host.apply(PageAction::SetAddReviewVisible(authenticated));
    }

    if authenticated {
        Access::Authenticated
    } else {
        Access::Anonymous
    }
}

/// Run the load-time initializer of `kind`.
///
/// The login page has nothing to do until its form is submitted.
pub async fn dispatch(
    kind: PageKind,
    context: &PageContext,
    api: &impl PlacesApi,
    host: &impl PageHost,
) {
    tracing::debug!(page = %kind, authenticated = context.session.is_authenticated(), "Initializing page");
    match kind {
        PageKind::Login => {}
        PageKind::Index => init_index(context, api, host).await,
        PageKind::Place => init_place(context, api, host).await,
        PageKind::AddReview => {
            init_add_review(context, host);
        }
    }
}

/// Trace failures that never produced a usable response
fn trace_failure(operation: &str, error: &ClientError) {
    if error.is_transport() {
        tracing::error!(operation, %error, "Request failed");
    } else {
        tracing::debug!(operation, %error, status = ?error.status(), "Request rejected");
    }
}
