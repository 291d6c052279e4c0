//! UI-independent core of the HBnB web client
//!
//! Everything here runs without a browser: the yew front end supplies a
//! [`PageHost`] and a [`Session`], and the page flows decide what to fetch,
//! what to render and what to tell the user.

pub mod api;
pub mod browser;
pub mod client;
pub mod config;
pub mod filter;
pub mod host;
pub mod pages;
pub mod session;
pub mod state;
pub mod view;

pub use api::PlacesApi;
pub use client::HbnbApi;
pub use config::AppConfig;
pub use filter::PriceThreshold;
pub use host::{PageAction, PageHost};
pub use pages::{PageContext, PageKind};
pub use session::Session;
pub use state::PageState;
pub use view::ViewNode;
