// crates/citydb-core/src/raw.rs
//! Raw city entries as they appear in the source dataset.
//!
//! Every field except `name` is optional at the serde level. Missing values
//! are defaulted by [`crate::model::convert::normalize`] rather than rejected,
//! so one sloppy record never takes the whole catalog down.
use serde::{Deserialize, Serialize};

/// A numeric field that some datasets ship as a JSON number and others as a
/// string (`"40.7128"`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawNumber {
    Num(f64),
    Text(String),
}

impl RawNumber {
    /// Returns the value as `f64`, or `None` for non-numeric or non-finite text.
    pub fn as_f64(&self) -> Option<f64> {
        let v = match self {
            RawNumber::Num(n) => *n,
            RawNumber::Text(s) => s.trim().parse::<f64>().ok()?,
        };
        v.is_finite().then_some(v)
    }
}

impl From<f64> for RawNumber {
    fn from(v: f64) -> Self {
        RawNumber::Num(v)
    }
}

/// Raw city structure as it comes from JSON:
///
/// ```json
/// { "name": "New York", "country": "United States", "countryCode": "US",
///   "state": "NY", "timezone": "America/New_York",
///   "lat": 40.7128, "lon": -74.006, "population": 8336817 }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawCityInput {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default, alias = "country_code", skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
    #[serde(default, alias = "region", skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default)]
    pub timezone: Option<String>,
    #[serde(default, alias = "latitude")]
    pub lat: Option<RawNumber>,
    #[serde(default, alias = "lng", alias = "longitude")]
    pub lon: Option<RawNumber>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub population: Option<RawNumber>,
}

pub type CitiesRaw = Vec<RawCityInput>;

impl RawCityInput {
    /// Entry with the fields every well-formed record carries.
    pub fn new(name: &str, country: &str, timezone: &str, lat: f64, lon: f64) -> Self {
        RawCityInput {
            name: name.to_owned(),
            country: Some(country.to_owned()),
            timezone: Some(timezone.to_owned()),
            lat: Some(lat.into()),
            lon: Some(lon.into()),
            ..Default::default()
        }
    }

    pub fn with_slug(mut self, slug: &str) -> Self {
        self.slug = Some(slug.to_owned());
        self
    }

    pub fn with_country_code(mut self, code: &str) -> Self {
        self.country_code = Some(code.to_owned());
        self
    }

    pub fn with_state(mut self, state: &str) -> Self {
        self.state = Some(state.to_owned());
        self
    }

    pub fn with_population(mut self, population: u64) -> Self {
        self.population = Some(RawNumber::Num(population as f64));
        self
    }
}
