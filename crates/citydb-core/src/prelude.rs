//! citydb prelude: bring common types and traits into scope.

pub use crate::error::{CatalogError, Result};
pub use crate::model::{Catalog, CatalogOptions, CityRecord};
pub use crate::raw::RawCityInput;
pub use crate::region::{classify, RegionTag};
pub use crate::text::{display_label, fold_key, slugify};
pub use crate::traits::{CitySearch, NameMatch};
