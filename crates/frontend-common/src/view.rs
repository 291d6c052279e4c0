//! View-node rendering of places and reviews
//!
//! Rendering is a pure function from API data to a small element tree. The
//! front end materializes the tree; tests inspect it directly.

use hbnb_http::types::{Amenity, Place, Review};
use url::form_urlencoded;

/// Attribute carrying a card's price, read back by the price filter
pub const PRICE_ATTRIBUTE: &str = "data-price";

pub const PLACE_CARD_CLASS: &str = "place-card";
pub const REVIEW_CARD_CLASS: &str = "review-card";
pub const NO_REVIEWS_TEXT: &str = "No reviews yet.";

/// Node of a rendered view
#[derive(Debug, Clone, PartialEq)]
pub enum ViewNode {
    Element(Element),
    Text(String),
}

/// Element with its attributes and children
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub tag: &'static str,
    pub class: Option<&'static str>,
    pub attributes: Vec<(&'static str, String)>,
    /// `None` until a filter decides; then whether the element is displayed
    pub visible: Option<bool>,
    pub children: Vec<ViewNode>,
}

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            class: None,
            attributes: Vec::new(),
            visible: None,
            children: Vec::new(),
        }
    }

    pub fn class(mut self, class: &'static str) -> Self {
        self.class = Some(class);
        self
    }

    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attributes.push((name, value.into()));
        self
    }

    pub fn child(mut self, child: impl Into<ViewNode>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(ViewNode::Text(text.into()))
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.class == Some(class)
    }
}

impl From<Element> for ViewNode {
    fn from(element: Element) -> Self {
        Self::Element(element)
    }
}

impl ViewNode {
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Self::Element(element) => Some(element),
            Self::Text(_) => None,
        }
    }

    /// Concatenated text of this node and its descendants
    pub fn text_content(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Element(element) => element.children.iter().map(Self::text_content).collect(),
        }
    }
}

/// Price as shown to the user: `$10`, `$12.5`
pub fn format_price(price: f64) -> String {
    format!("${price}")
}

fn labelled(label: &str, value: impl Into<String>) -> Element {
    Element::new("p")
        .child(Element::new("strong").text(format!("{label}:")))
        .text(format!(" {}", value.into()))
}

/// Link to a page about one place, e.g. `place.html?id=42`
pub fn place_link(page: &str, place_id: &str) -> String {
    let query: String = form_urlencoded::Serializer::new(String::new())
        .append_pair("id", place_id)
        .finish();
    format!("{page}?{query}")
}

/// One card per place, in input order
pub fn place_list(places: &[Place], place_page: &str) -> Vec<ViewNode> {
    places
        .iter()
        .map(|place| {
            let card = Element::new("div")
                .class(PLACE_CARD_CLASS)
                .attr(PRICE_ATTRIBUTE, place.price.to_string())
                .child(Element::new("h2").text(&place.name))
                .child(Element::new("p").text(place.description.as_deref().unwrap_or_default()))
                .child(labelled("Price", format_price(place.price)))
                .child(
                    Element::new("a")
                        .class("details-button")
                        .attr("href", place_link(place_page, place.id.as_str()))
                        .text("View Details"),
                );
            ViewNode::from(card)
        })
        .collect()
}

/// Amenity names joined by `, `; `None` only when the field is absent
fn amenity_summary(amenities: Option<&[Amenity]>) -> String {
    match amenities {
        Some(amenities) => amenities
            .iter()
            .map(Amenity::name)
            .collect::<Vec<_>>()
            .join(", "),
        None => "None".to_string(),
    }
}

fn review_card(review: &Review) -> ViewNode {
    Element::new("div")
        .class(REVIEW_CARD_CLASS)
        .child(Element::new("p").text(&review.comment))
        .child(labelled("User", review.user.as_deref().unwrap_or("Anonymous")))
        .child(labelled("Rating", format!("{}/5", review.rating)))
        .into()
}

/// Place summary followed by its reviews or a placeholder
pub fn place_details(place: &Place) -> Vec<ViewNode> {
    let info = Element::new("div")
        .class("place-info")
        .child(Element::new("h1").text(&place.name))
        .child(labelled(
            "Description",
            place.description.as_deref().unwrap_or_default(),
        ))
        .child(labelled("Price", format_price(place.price)))
        .child(labelled("Amenities", amenity_summary(place.amenities.as_deref())))
        .child(Element::new("h2").text("Reviews"));

    let mut nodes = vec![ViewNode::from(info)];
    match place.reviews.as_deref() {
        Some(reviews) if !reviews.is_empty() => nodes.extend(reviews.iter().map(review_card)),
        _ => nodes.push(Element::new("p").text(NO_REVIEWS_TEXT).into()),
    }
    nodes
}

#[cfg(test)]
mod tests {
    use super::*;
    use hbnb_http::types::PlaceId;

    fn place(id: &str, name: &str, price: f64) -> Place {
        Place {
            id: PlaceId::new(id),
            name: name.to_string(),
            description: None,
            price,
            amenities: None,
            reviews: None,
        }
    }

    fn review(comment: &str, user: Option<&str>, rating: u8) -> Review {
        Review {
            comment: comment.to_string(),
            user: user.map(str::to_string),
            rating,
        }
    }

    fn count_class(nodes: &[ViewNode], class: &str) -> usize {
        nodes
            .iter()
            .filter_map(ViewNode::as_element)
            .filter(|element| element.has_class(class))
            .count()
    }

    #[test]
    fn test_list_renders_one_card_per_place_in_order() {
        let nodes = place_list(&[place("1", "A", 10.0), place("2", "B", 20.0)], "place.html");

        assert_eq!(nodes.len(), 2);
        let cards: Vec<&Element> = nodes.iter().filter_map(ViewNode::as_element).collect();
        assert!(cards.iter().all(|card| card.has_class(PLACE_CARD_CLASS)));
        assert_eq!(cards[0].attribute(PRICE_ATTRIBUTE), Some("10"));
        assert_eq!(cards[1].attribute(PRICE_ATTRIBUTE), Some("20"));
        assert!(nodes[0].text_content().starts_with('A'));
        assert!(nodes[1].text_content().starts_with('B'));
    }

    #[test]
    fn test_card_contents() {
        let mut cosy = place("7", "Cosy flat", 12.5);
        cosy.description = Some("Near the park".to_string());
        let nodes = place_list(&[cosy], "place.html");
        let card = nodes[0].as_element().unwrap();

        assert_eq!(card.children[1].text_content(), "Near the park");
        assert_eq!(card.children[2].text_content(), "Price: $12.5");
        let link = card.children[3].as_element().unwrap();
        assert_eq!(link.attribute("href"), Some("place.html?id=7"));
        assert_eq!(link.children[0].text_content(), "View Details");
    }

    #[test]
    fn test_missing_description_renders_empty() {
        let nodes = place_list(&[place("1", "A", 10.0)], "place.html");
        let card = nodes[0].as_element().unwrap();
        assert_eq!(card.children[1].text_content(), "");
    }

    #[test]
    fn test_link_encodes_id() {
        let nodes = place_list(&[place("a b&c", "A", 1.0)], "place.html");
        let link = nodes[0].as_element().unwrap().children[3].as_element().unwrap();
        assert_eq!(link.attribute("href"), Some("place.html?id=a+b%26c"));
    }

    #[test]
    fn test_details_with_no_reviews() {
        let mut empty = place("1", "A", 10.0);
        empty.reviews = Some(vec![]);

        for candidate in [empty, place("2", "B", 5.0)] {
            let nodes = place_details(&candidate);
            assert_eq!(count_class(&nodes, REVIEW_CARD_CLASS), 0);
            let placeholders = nodes
                .iter()
                .filter(|node| node.text_content() == NO_REVIEWS_TEXT)
                .count();
            assert_eq!(placeholders, 1);
        }
    }

    #[test]
    fn test_details_with_reviews_in_order() {
        let mut reviewed = place("1", "A", 10.0);
        reviewed.reviews = Some(vec![
            review("Great stay", Some("Ana"), 5),
            review("Too noisy", None, 2),
        ]);

        let nodes = place_details(&reviewed);
        assert_eq!(count_class(&nodes, REVIEW_CARD_CLASS), 2);
        assert!(!nodes.iter().any(|node| node.text_content() == NO_REVIEWS_TEXT));
        assert_eq!(nodes[1].text_content(), "Great stayUser: AnaRating: 5/5");
        assert_eq!(nodes[2].text_content(), "Too noisyUser: AnonymousRating: 2/5");
    }

    #[test]
    fn test_details_summary() {
        let mut loft = place("1", "Loft", 80.0);
        loft.description = Some("Bright".to_string());
        loft.amenities = Some(vec![
            Amenity::Name("Wifi".to_string()),
            Amenity::Record {
                name: "Pool".to_string(),
            },
        ]);

        let nodes = place_details(&loft);
        let info = nodes[0].as_element().unwrap();
        assert!(info.has_class("place-info"));
        let lines: Vec<String> = info.children.iter().map(ViewNode::text_content).collect();
        assert_eq!(
            lines,
            [
                "Loft",
                "Description: Bright",
                "Price: $80",
                "Amenities: Wifi, Pool",
                "Reviews"
            ]
        );

        let bare = place_details(&place("2", "Bare", 1.0));
        assert_eq!(
            bare[0].as_element().unwrap().children[3].text_content(),
            "Amenities: None"
        );

        let mut empty = place("3", "Empty", 1.0);
        empty.amenities = Some(vec![]);
        assert_eq!(
            place_details(&empty)[0].as_element().unwrap().children[3].text_content(),
            "Amenities: "
        );
    }
}
