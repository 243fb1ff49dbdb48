pub mod error;
pub mod generator;
pub mod random;
pub mod slug;
pub mod sources;

pub use error::CatalogError;
pub use generator::{generate_products, make_product, write_products, DEFAULT_COUNT};
pub use slug::slugify;
pub use sources::CatalogSources;
