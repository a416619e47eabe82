//! Catalog data model and the one-shot loader that fills it.

mod loader;
mod types;

pub use loader::{number_entries, CatalogLoader, ListEntry, ListResponse};
pub use types::{default_regions, Pokemon, Region, ALL_REGIONS};
