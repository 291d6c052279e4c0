//! Client-side price filter over rendered place cards

use crate::view::{PLACE_CARD_CLASS, PRICE_ATTRIBUTE, ViewNode};
use std::str::FromStr;
use thiserror::Error;

const ALL: &str = "All";

#[derive(Debug, Error, PartialEq)]
#[error("Invalid price filter value '{0}'")]
pub struct FilterError(String);

/// Value selected in the price filter
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PriceThreshold {
    All,
    AtMost(f64),
}

impl PriceThreshold {
    pub fn admits(self, price: f64) -> bool {
        match self {
            Self::All => true,
            Self::AtMost(limit) => price <= limit,
        }
    }
}

impl FromStr for PriceThreshold {
    type Err = FilterError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();
        if value == ALL {
            return Ok(Self::All);
        }
        value
            .parse::<f64>()
            .ok()
            .filter(|limit| !limit.is_nan())
            .map(Self::AtMost)
            .ok_or_else(|| FilterError(value.to_string()))
    }
}

/// Show or hide every place card according to its stored price.
///
/// Cards are never reordered or re-rendered. A card whose price attribute
/// cannot be read is only shown when everything is selected.
pub fn apply_price_filter(nodes: &mut [ViewNode], threshold: PriceThreshold) {
    for node in nodes {
        let ViewNode::Element(card) = node else {
            continue;
        };
        if !card.has_class(PLACE_CARD_CLASS) {
            continue;
        }

        let price = card
            .attribute(PRICE_ATTRIBUTE)
            .and_then(|price| price.parse::<f64>().ok());
        card.visible = Some(match (threshold, price) {
            (PriceThreshold::All, _) => true,
            (_, Some(price)) => threshold.admits(price),
            (_, None) => false,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::place_list;
    use hbnb_http::types::{Place, PlaceId};

    fn cards(prices: &[f64]) -> Vec<ViewNode> {
        let places: Vec<Place> = prices
            .iter()
            .enumerate()
            .map(|(index, price)| Place {
                id: PlaceId::new(index.to_string()),
                name: format!("Place {index}"),
                description: None,
                price: *price,
                amenities: None,
                reviews: None,
            })
            .collect();
        place_list(&places, "place.html")
    }

    fn visibility(nodes: &[ViewNode]) -> Vec<Option<bool>> {
        nodes
            .iter()
            .filter_map(ViewNode::as_element)
            .map(|card| card.visible)
            .collect()
    }

    #[test]
    fn test_parse_threshold() {
        assert_eq!("All".parse::<PriceThreshold>(), Ok(PriceThreshold::All));
        assert_eq!(" 50 ".parse::<PriceThreshold>(), Ok(PriceThreshold::AtMost(50.0)));
        assert_eq!("12.5".parse::<PriceThreshold>(), Ok(PriceThreshold::AtMost(12.5)));
        assert!("cheap".parse::<PriceThreshold>().is_err());
        assert!("NaN".parse::<PriceThreshold>().is_err());
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let mut nodes = cards(&[5.0, 10.0, 10.5, 100.0]);
        apply_price_filter(&mut nodes, PriceThreshold::AtMost(10.0));
        assert_eq!(
            visibility(&nodes),
            [Some(true), Some(true), Some(false), Some(false)]
        );
    }

    #[test]
    fn test_result_independent_of_prior_state() {
        let mut fresh = cards(&[5.0, 40.0, 80.0]);
        apply_price_filter(&mut fresh, PriceThreshold::AtMost(50.0));

        let mut refiltered = cards(&[5.0, 40.0, 80.0]);
        apply_price_filter(&mut refiltered, PriceThreshold::AtMost(10.0));
        apply_price_filter(&mut refiltered, PriceThreshold::AtMost(100.0));
        apply_price_filter(&mut refiltered, PriceThreshold::AtMost(50.0));

        assert_eq!(fresh, refiltered);
        assert_eq!(visibility(&fresh), [Some(true), Some(true), Some(false)]);
    }

    #[test]
    fn test_all_restores_every_card() {
        let mut nodes = cards(&[5.0, 40.0, 80.0]);
        apply_price_filter(&mut nodes, PriceThreshold::AtMost(10.0));
        apply_price_filter(&mut nodes, PriceThreshold::All);
        assert_eq!(visibility(&nodes), [Some(true); 3]);
    }

    #[test]
    fn test_ignores_nodes_that_are_not_cards() {
        let mut nodes = vec![ViewNode::Text("heading".to_string())];
        nodes.extend(cards(&[20.0]));
        apply_price_filter(&mut nodes, PriceThreshold::AtMost(10.0));
        assert_eq!(nodes[0], ViewNode::Text("heading".to_string()));
        assert_eq!(visibility(&nodes), [Some(false)]);
    }
}
