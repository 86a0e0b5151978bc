// crates/citydb-core/src/common.rs
use crate::region::RegionTag;
use serde::Serialize;
use std::collections::BTreeMap;

/// Simple aggregate statistics for a [`crate::Catalog`].
///
/// Returned by [`crate::Catalog::stats`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogStats {
    pub cities: usize,
    /// Distinct keys in the candidate slug index.
    pub slugs: usize,
    pub canonical_slugs: usize,
    /// Canonical slugs shadowed by an earlier city.
    pub collisions: usize,
    /// Records carrying the `(0, 0)` placeholder.
    pub unknown_locations: usize,
    /// Every tag is present, with zero for empty regions.
    pub regions: BTreeMap<RegionTag, usize>,
}
