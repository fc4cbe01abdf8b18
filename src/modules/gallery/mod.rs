//! Client-side gallery: a typed API client plus the view-model that mirrors
//! the record list for display.
//!
//! The gallery never owns data. It is rebuilt from the server on load, after
//! a search and after every mutation; the store stays the source of truth.

pub mod api_client;
pub mod state;

pub use api_client::{GalleryError, SvgApiClient};
pub use state::{DateGroup, Gallery, GalleryState};
