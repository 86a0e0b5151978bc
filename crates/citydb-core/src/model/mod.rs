// crates/citydb-core/src/model/mod.rs
pub mod catalog;
pub mod city;
pub mod convert;

pub use catalog::{Catalog, CatalogOptions};
pub use city::CityRecord;

/// Default number of results for [`crate::traits::CitySearch::search_default`].
pub const DEFAULT_SEARCH_LIMIT: usize = 10;
