//! Visible state of a page, driven by [`PageAction`]s

use crate::filter::{PriceThreshold, apply_price_filter};
use crate::host::PageAction;
use crate::view::ViewNode;

/// Visible page state
///
/// `None` for a region means nothing was ever rendered there; for an
/// affordance it means the page markup default was left alone.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageState {
    pub login_link_visible: Option<bool>,
    pub add_review_visible: Option<bool>,
    pub places: Option<Vec<ViewNode>>,
    pub place_details: Option<Vec<ViewNode>>,
    pub price_filter_attached: bool,
    pub review_form_visible: bool,
    /// Bumped on every reset so the form inputs can be cleared
    pub review_form_generation: u32,
}

impl PageState {
    pub fn apply(&mut self, action: PageAction) {
        match action {
            PageAction::SetLoginLinkVisible(visible) => self.login_link_visible = Some(visible),
            PageAction::SetAddReviewVisible(visible) => self.add_review_visible = Some(visible),
            PageAction::RenderPlaces(nodes) => {
                self.places = Some(nodes);
                self.price_filter_attached = false;
            }
            PageAction::RenderPlaceDetails(nodes) => self.place_details = Some(nodes),
            PageAction::AttachPriceFilter => self.price_filter_attached = true,
            PageAction::ShowReviewForm => self.review_form_visible = true,
            PageAction::ResetReviewForm => {
                self.review_form_generation = self.review_form_generation.wrapping_add(1);
            }
        }
    }

    /// React to a change of the price selector.
    ///
    /// Returns whether anything was filtered: changes arriving before the
    /// filter is attached are ignored.
    pub fn select_price(&mut self, threshold: PriceThreshold) -> bool {
        if !self.price_filter_attached {
            return false;
        }
        match self.places.as_mut() {
            Some(cards) => {
                apply_price_filter(cards, threshold);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::Element;

    fn card(price: &str) -> ViewNode {
        Element::new("div")
            .class(crate::view::PLACE_CARD_CLASS)
            .attr(crate::view::PRICE_ATTRIBUTE, price)
            .into()
    }

    #[test]
    fn test_filter_requires_attachment() {
        let mut state = PageState::default();
        state.apply(PageAction::RenderPlaces(vec![card("10"), card("90")]));
        let rendered = state.clone();

        assert!(!state.select_price(PriceThreshold::AtMost(50.0)));
        assert_eq!(state, rendered);

        state.apply(PageAction::AttachPriceFilter);
        assert!(state.select_price(PriceThreshold::AtMost(50.0)));
        let visible: Vec<Option<bool>> = state
            .places
            .iter()
            .flatten()
            .filter_map(ViewNode::as_element)
            .map(|card| card.visible)
            .collect();
        assert_eq!(visible, [Some(true), Some(false)]);
    }

    #[test]
    fn test_rerender_detaches_filter() {
        let mut state = PageState::default();
        state.apply(PageAction::RenderPlaces(vec![card("10")]));
        state.apply(PageAction::AttachPriceFilter);
        state.apply(PageAction::RenderPlaces(vec![card("20")]));

        assert!(!state.price_filter_attached);
        assert!(!state.select_price(PriceThreshold::All));
    }

    #[test]
    fn test_reset_bumps_generation() {
        let mut state = PageState::default();
        state.apply(PageAction::ResetReviewForm);
        state.apply(PageAction::ResetReviewForm);
        assert_eq!(state.review_form_generation, 2);
    }
}
