// crates/citydb-core/src/model/city.rs
use crate::region::RegionTag;
use serde::Serialize;

/// A canonical city entry.
///
/// Built by [`crate::model::convert::normalize`] and owned by the
/// [`crate::Catalog`], which only ever hands out shared references. The
/// fields are public for pattern matching and serialization; treat them as
/// read-only.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CityRecord {
    pub name: String,
    /// Canonical slug: `[a-z0-9]` runs joined by single hyphens.
    pub slug: String,
    pub country: String,
    /// Uppercased ISO-style code, e.g. "US".
    pub country_code: Option<String>,
    #[serde(rename = "stateOrRegion")]
    pub state: Option<String>,
    pub timezone: String,
    /// `0.0` when the source had no coordinate; see [`CityRecord::has_location`].
    pub lat: f64,
    pub lon: f64,
    pub population: Option<u64>,
    pub continent: RegionTag,
    /// Display label, e.g. "Austin, TX, USA".
    pub label: String,
}

impl CityRecord {
    /// City display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    pub fn country_code(&self) -> Option<&str> {
        self.country_code.as_deref()
    }

    /// State/province label, if the source provided one.
    pub fn state(&self) -> Option<&str> {
        self.state.as_deref()
    }

    pub fn timezone(&self) -> &str {
        &self.timezone
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }

    pub fn lon(&self) -> f64 {
        self.lon
    }

    pub fn population(&self) -> Option<u64> {
        self.population
    }

    pub fn continent(&self) -> RegionTag {
        self.continent
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// `false` for the `(0, 0)` placeholder substituted for missing coordinates.
    ///
    /// Null Island is a real point in the Gulf of Guinea, so distance math
    /// must skip records where this returns `false`.
    pub fn has_location(&self) -> bool {
        !(self.lat == 0.0 && self.lon == 0.0)
    }
}
