pub mod activity_catalog;
pub mod seed;

pub use activity_catalog::{ActivityCatalog, CatalogSnapshot};
