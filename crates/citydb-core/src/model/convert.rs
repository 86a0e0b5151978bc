// crates/citydb-core/src/model/convert.rs
use crate::model::city::CityRecord;
use crate::raw::RawCityInput;
use crate::region::classify;
use crate::text::{display_label, slugify, transliterate};

/// **Normalizer:** Raw -> canonical records.
///
/// Output keeps input order and length. Nothing is validated or rejected:
/// missing coordinates become `0.0`, missing country/timezone become empty
/// strings. Deduplication happens later, in [`crate::index::SlugIndex::build`].
pub fn normalize(raw_cities: Vec<RawCityInput>) -> Vec<CityRecord> {
    let mut out = Vec::with_capacity(raw_cities.len());

    for (i, raw) in raw_cities.into_iter().enumerate() {
        let name = raw.name.trim().to_owned();
        let country = non_empty(raw.country).unwrap_or_default();
        let country_code = non_empty(raw.country_code).map(|c| c.to_ascii_uppercase());
        let state = non_empty(raw.state);
        let timezone = non_empty(raw.timezone).unwrap_or_default();

        let lat = raw.lat.as_ref().and_then(|v| v.as_f64());
        let lon = raw.lon.as_ref().and_then(|v| v.as_f64());
        if lat.is_none() || lon.is_none() {
            tracing::warn!(
                city = %name,
                position = i + 1,
                "missing coordinates, substituting (0, 0)"
            );
        }
        if timezone.is_empty() {
            tracing::warn!(city = %name, position = i + 1, "missing timezone");
        }

        let slug = canonical_slug(raw.slug.as_deref(), &name, i + 1);
        let continent = classify(country_code.as_deref(), Some(timezone.as_str()));
        let label = display_label(&name, state.as_deref(), &country, country_code.as_deref());

        out.push(CityRecord {
            slug,
            country,
            country_code,
            state,
            timezone,
            lat: lat.unwrap_or(0.0),
            lon: lon.unwrap_or(0.0),
            population: raw
                .population
                .as_ref()
                .and_then(|p| p.as_f64())
                .filter(|p| *p >= 0.0)
                .map(|p| p.round() as u64),
            continent,
            label,
            name,
        });
    }
    out
}

/// Provided slug (re-slugified), else the name slug, else the transliterated
/// name slug, else `city-<position>`.
fn canonical_slug(provided: Option<&str>, name: &str, position: usize) -> String {
    let candidates = [
        provided.map(slugify),
        Some(slugify(name)),
        Some(slugify(&transliterate(name))),
    ];
    candidates
        .into_iter()
        .flatten()
        .find(|s| !s.is_empty())
        .unwrap_or_else(|| format!("city-{position}"))
}

fn non_empty(v: Option<String>) -> Option<String> {
    v.map(|s| s.trim().to_owned()).filter(|s| !s.is_empty())
}
