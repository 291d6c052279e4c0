//! HBnB HTTP module providing the API wire types and a typed client
//!
//! The types are shared by every consumer of the places/reviews API. The
//! client (behind the `client` feature) runs both natively and on wasm32,
//! where reqwest is backed by the browser's `fetch`.

pub mod types;

#[cfg(feature = "client")]
pub mod client;

pub use types::{Amenity, LoginRequest, LoginResponse, NewReview, Place, PlaceId, Review};
