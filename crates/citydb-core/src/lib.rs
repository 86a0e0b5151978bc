// crates/citydb-core/src/lib.rs
//! # citydb-core
//!
//! City identity resolution: turns a free-text or URL-path city reference
//! into one canonical [`CityRecord`] out of a catalog of thousands.
//!
//! - [`model::convert`] normalizes raw entries (slug, region, display label).
//! - [`index`] derives candidate slugs and builds the first-writer-wins lookup.
//! - [`search`] runs bounded substring search ordered by display label.
//! - [`region`] buckets cities by country code with a timezone fallback.
//!
//! ```rust
//! use citydb_core::prelude::*;
//!
//! let catalog = Catalog::bundled()?;
//! let nyc = catalog.find_by_slug("New York").expect("bundled city");
//! assert_eq!(nyc.continent(), RegionTag::UnitedStates);
//! assert!(catalog.search("lond", 5).len() <= 5);
//! # Ok::<(), citydb_core::CatalogError>(())
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod common;
pub mod error;
pub mod geo;
pub mod index;
pub mod loader;
pub mod model;
pub mod prelude;
pub mod raw;
pub mod region;
pub mod search;
pub mod text;
pub mod traits;

// Re-exports
pub use crate::common::CatalogStats;
pub use crate::error::{CatalogError, Result};
pub use crate::index::{SlugCollision, SlugIndex};
pub use crate::model::{Catalog, CatalogOptions, CityRecord};
pub use crate::raw::RawCityInput;
pub use crate::region::RegionTag;
// Export the Search Trait (Crucial for users!)
pub use crate::traits::{CitySearch, NameMatch};
