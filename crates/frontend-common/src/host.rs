//! Seam between page flows and the UI that hosts them

use crate::view::ViewNode;

/// Change a page flow asks its host to make to the visible page
#[derive(Debug, Clone, PartialEq)]
pub enum PageAction {
    SetLoginLinkVisible(bool),
    SetAddReviewVisible(bool),
    /// Replace the content of the places list
    RenderPlaces(Vec<ViewNode>),
    /// Replace the content of the place details section
    RenderPlaceDetails(Vec<ViewNode>),
    /// Wire the price selector to the cards currently rendered
    AttachPriceFilter,
    ShowReviewForm,
    ResetReviewForm,
}

/// Everything a page flow needs from its environment.
///
/// The browser implementation alerts through `window.alert`, navigates by
/// setting `location.href`, writes `document.cookie` and feeds actions into
/// the page's state store.
pub trait PageHost {
    fn alert(&self, message: &str);
    fn redirect(&self, target: &str);
    fn store_token(&self, token: &str);
    fn apply(&self, action: PageAction);
}
