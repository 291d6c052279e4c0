//! Common types exchanged with the places/reviews API

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Place identifier
///
/// The API issues UUID strings while older fixtures use integers, so both
/// JSON shapes are accepted and normalized to a string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct PlaceId(String);

impl PlaceId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for PlaceId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Integer(i64),
            Float(f64),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(id) => Self(id),
            RawId::Integer(id) => Self(id.to_string()),
            RawId::Float(id) => Self(id.to_string()),
        })
    }
}

/// Amenity attached to a place
///
/// Listed either as a bare name or as an object carrying a `name` field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Amenity {
    Name(String),
    Record { name: String },
}

impl Amenity {
    pub fn name(&self) -> &str {
        match self {
            Self::Name(name) | Self::Record { name } => name,
        }
    }
}

/// Review of a place
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    #[serde(alias = "text")]
    pub comment: String,
    #[serde(default)]
    pub user: Option<String>,
    pub rating: u8,
}

/// Place listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub id: PlaceId,
    #[serde(alias = "title")]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: f64,
    #[serde(default)]
    pub amenities: Option<Vec<Amenity>>,
    #[serde(default)]
    pub reviews: Option<Vec<Review>>,
}

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Login response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Bearer token for subsequent requests
    pub access_token: String,
}

/// Review submission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewReview {
    pub place_id: String,
    pub comment: String,
    pub rating: u8,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_place_accepts_numeric_and_string_ids() {
        let numeric: Place =
            serde_json::from_value(json!({"id": 1, "name": "A", "price": 10})).unwrap();
        assert_eq!(numeric.id.as_str(), "1");
        assert_eq!(numeric.description, None);
        assert_eq!(numeric.reviews, None);

        let text: Place = serde_json::from_value(
            json!({"id": "3f1c", "name": "B", "price": 20.5, "description": "Cosy"}),
        )
        .unwrap();
        assert_eq!(text.id.as_str(), "3f1c");
        assert_eq!(text.description.as_deref(), Some("Cosy"));
    }

    #[test]
    fn test_place_accepts_api_field_names() {
        let place: Place = serde_json::from_value(json!({
            "id": "abc",
            "title": "Loft",
            "price": 80.0,
            "amenities": [{"id": "w1", "name": "Wifi"}, "Pool"],
            "reviews": [{"text": "Great", "rating": 5}]
        }))
        .unwrap();

        assert_eq!(place.name, "Loft");
        let amenities: Vec<&str> = place
            .amenities
            .as_deref()
            .unwrap()
            .iter()
            .map(Amenity::name)
            .collect();
        assert_eq!(amenities, ["Wifi", "Pool"]);

        let reviews = place.reviews.unwrap();
        assert_eq!(reviews[0].comment, "Great");
        assert_eq!(reviews[0].user, None);
    }

    #[test]
    fn test_new_review_wire_shape() {
        let review = NewReview {
            place_id: "p1".to_string(),
            comment: "Lovely".to_string(),
            rating: 4,
        };
        assert_eq!(
            serde_json::to_value(&review).unwrap(),
            json!({"place_id": "p1", "comment": "Lovely", "rating": 4})
        );
    }
}
