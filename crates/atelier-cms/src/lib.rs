//! Client for the hosted document CMS (Sanity-compatible HTTP API).

pub mod client;
pub mod error;
pub mod store;
pub mod types;

pub use client::CmsClient;
pub use error::CmsError;
pub use store::ContentStore;
pub use types::{Block, ImageField, KeyedImage, Reference, Slug, Span};
