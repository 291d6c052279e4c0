//! Thin wrappers over the browser APIs the client touches

use thiserror::Error;
use url::Url;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlDocument};

#[derive(Debug, Error)]
pub enum BrowserError {
    #[error("Document is not an HTML document")]
    NotHtmlDocument,
    #[error("Browser call failed: {0}")]
    Js(String),
}

impl From<wasm_bindgen::JsValue> for BrowserError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Js(format!("{value:?}"))
    }
}

fn html_document() -> Result<HtmlDocument, BrowserError> {
    gloo::utils::document()
        .dyn_into::<HtmlDocument>()
        .map_err(|_| BrowserError::NotHtmlDocument)
}

/// Current `document.cookie`
pub fn cookies() -> Result<String, BrowserError> {
    Ok(html_document()?.cookie()?)
}

/// Assign one cookie through `document.cookie`
pub fn set_cookie(cookie: &str) -> Result<(), BrowserError> {
    html_document()?.set_cookie(cookie)?;
    Ok(())
}

pub fn alert(message: &str) {
    gloo::dialogs::alert(message);
}

/// Navigate to `target`, relative to the current page
pub fn redirect(target: &str) -> Result<(), BrowserError> {
    gloo::utils::window().location().set_href(target)?;
    Ok(())
}

pub fn current_href() -> Result<String, BrowserError> {
    Ok(gloo::utils::window().location().href()?)
}

pub fn element_by_id(id: &str) -> Option<Element> {
    gloo::utils::document().get_element_by_id(id)
}

/// Value of the `id` query parameter of `href`
pub fn place_id_from_href(href: &str) -> Option<String> {
    let url = Url::parse(href).ok()?;
    url.query_pairs()
        .find(|(key, _)| key == "id")
        .map(|(_, value)| value.into_owned())
        .filter(|id| !id.is_empty())
}
