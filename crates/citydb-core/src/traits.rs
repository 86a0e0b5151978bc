// crates/citydb-core/src/traits.rs
use crate::model::{CityRecord, DEFAULT_SEARCH_LIMIT};
use crate::text::{equals_folded, fold_key};

/// Name-based matching helpers for types that expose a canonical display name.
///
/// This trait centralizes accent-insensitive and case-insensitive comparisons
/// based on [`fold_key`]. Implementors provide a `&str` view of their
/// canonical name via [`NameMatch::name_str`], and get:
/// - [`NameMatch::is_named`] — equality on folded form
/// - [`NameMatch::name_contains`] — substring match on folded form
///
/// # Examples
/// ```rust
/// use citydb_core::traits::NameMatch;
///
/// struct Place(&'static str);
/// impl NameMatch for Place {
///     fn name_str(&self) -> &str { self.0 }
/// }
///
/// assert!(Place("Łódź").is_named("lodz"));
/// assert!(Place("Zürich").name_contains("zuri"));
/// ```
pub trait NameMatch {
    /// Returns the canonical display name used for matching.
    fn name_str(&self) -> &str;

    #[inline]
    fn is_named(&self, q: &str) -> bool {
        equals_folded(self.name_str(), q)
    }

    #[inline]
    fn name_contains(&self, q: &str) -> bool {
        fold_key(self.name_str()).contains(&fold_key(q))
    }
}

impl NameMatch for CityRecord {
    #[inline]
    fn name_str(&self) -> &str {
        self.name()
    }
}

/// Slug resolution and search over a city collection.
///
/// Both operations are total: "not found" is `None` or an empty `Vec`,
/// never an error.
pub trait CitySearch {
    /// Resolves a raw reference (URL segment, mixed case, punctuation) to a
    /// city. The input is slugified before lookup.
    ///
    /// ```rust
    /// use citydb_core::{Catalog, CitySearch};
    /// use citydb_core::raw::RawCityInput;
    ///
    /// let catalog = Catalog::build(vec![RawCityInput::new(
    ///     "New York", "United States", "America/New_York", 40.7128, -74.006,
    /// )]);
    /// assert!(catalog.find_by_slug("NEW-YORK").is_some());
    /// assert!(catalog.find_by_slug("new york").is_some());
    /// assert!(catalog.find_by_slug("boston").is_none());
    /// ```
    fn find_by_slug(&self, query: &str) -> Option<&CityRecord>;

    /// Case-insensitive substring search over name, country, state and
    /// timezone, ordered by display label and truncated to `limit`.
    ///
    /// An empty (or blank) query returns the first `limit` cities by name.
    /// `limit == 0` always yields an empty result.
    fn search(&self, query: &str, limit: usize) -> Vec<&CityRecord>;

    /// Result count used by [`CitySearch::search_default`].
    fn default_limit(&self) -> usize {
        DEFAULT_SEARCH_LIMIT
    }

    /// [`CitySearch::search`] with [`CitySearch::default_limit`].
    fn search_default(&self, query: &str) -> Vec<&CityRecord> {
        self.search(query, self.default_limit())
    }
}
