//! Page identity and settings supplied by the hosting HTML page
//!
//! Each HTML shell mounts the app on `<div id="app" data-page="...">`. The
//! optional `data-api-base` and `data-log` attributes override the API root
//! and the console log level.

use hbnb_frontend_common::browser;
use hbnb_frontend_common::config::ConfigError;
use hbnb_frontend_common::pages::PageKindError;
use hbnb_frontend_common::{AppConfig, PageContext, PageKind, Session};
use thiserror::Error;
use web_sys::Element;

pub const MOUNT_ID: &str = "app";

#[derive(Debug, Error)]
pub enum ShellError {
    #[error("Mount element #app not found")]
    MissingMount,
    #[error("Mount element has no data-page attribute")]
    MissingPage,
    #[error(transparent)]
    Page(#[from] PageKindError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Mount element found on the page
pub struct Shell {
    root: Element,
}

impl Shell {
    pub fn find() -> Result<Self, ShellError> {
        browser::element_by_id(MOUNT_ID)
            .map(|root| Self { root })
            .ok_or(ShellError::MissingMount)
    }

    pub fn log_level(&self) -> Option<String> {
        self.root.get_attribute("data-log")
    }

    pub fn page_kind(&self) -> Result<PageKind, ShellError> {
        let page = self
            .root
            .get_attribute("data-page")
            .ok_or(ShellError::MissingPage)?;
        Ok(page.parse()?)
    }

    /// Read configuration, session and query parameters once for this load
    pub fn context(&self) -> Result<PageContext, ShellError> {
        let config = AppConfig::default()
            .with_api_base(self.root.get_attribute("data-api-base").as_deref())?;

        let session = match browser::cookies() {
            Ok(cookies) => Session::from_cookies(&cookies),
            Err(error) => {
                tracing::warn!(%error, "Cookies unavailable, continuing anonymously");
                Session::anonymous()
            }
        };

        let place_id = match browser::current_href() {
            Ok(href) => browser::place_id_from_href(&href),
            Err(error) => {
                tracing::warn!(%error, "Could not read the page URL");
                None
            }
        };

        Ok(PageContext {
            config,
            session,
            place_id,
        })
    }

    pub fn into_root(self) -> Element {
        self.root
    }
}
