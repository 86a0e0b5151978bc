// crates/citydb-core/src/region.rs
//! Continental region buckets used for directory browsing.
//!
//! Classification is table driven: a country code decides first, then the
//! prefix of the IANA timezone, and finally a fixed default. The function is
//! total; every input (including two `None`s) yields a tag.
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// One of the fixed region buckets a city belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RegionTag {
    UnitedStates,
    NorthAmerica,
    SouthAmerica,
    Europe,
    Africa,
    Asia,
    Oceania,
}

impl RegionTag {
    pub const ALL: [RegionTag; 7] = [
        RegionTag::UnitedStates,
        RegionTag::NorthAmerica,
        RegionTag::SouthAmerica,
        RegionTag::Europe,
        RegionTag::Africa,
        RegionTag::Asia,
        RegionTag::Oceania,
    ];

    /// Bucket assigned when neither the country code nor the timezone is recognized.
    pub const FALLBACK: RegionTag = RegionTag::Asia;

    /// Kebab-case identifier, e.g. `"united-states"`.
    pub fn as_str(self) -> &'static str {
        match self {
            RegionTag::UnitedStates => "united-states",
            RegionTag::NorthAmerica => "north-america",
            RegionTag::SouthAmerica => "south-america",
            RegionTag::Europe => "europe",
            RegionTag::Africa => "africa",
            RegionTag::Asia => "asia",
            RegionTag::Oceania => "oceania",
        }
    }

    /// Human-readable heading, e.g. `"North America"`.
    pub fn label(self) -> &'static str {
        match self {
            RegionTag::UnitedStates => "United States",
            RegionTag::NorthAmerica => "North America",
            RegionTag::SouthAmerica => "South America",
            RegionTag::Europe => "Europe",
            RegionTag::Africa => "Africa",
            RegionTag::Asia => "Asia",
            RegionTag::Oceania => "Oceania",
        }
    }
}

impl fmt::Display for RegionTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned by [`RegionTag::from_str`] for unknown names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownRegion(pub String);

impl fmt::Display for UnknownRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown region: {}", self.0)
    }
}

impl std::error::Error for UnknownRegion {}

impl FromStr for RegionTag {
    type Err = UnknownRegion;

    /// Accepts the kebab identifier or the label, in any case
    /// (`"north-america"`, `"North America"`, `"NORTH_AMERICA"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = crate::text::slugify(s);
        RegionTag::ALL
            .into_iter()
            .find(|tag| tag.as_str() == wanted)
            .ok_or_else(|| UnknownRegion(s.to_owned()))
    }
}

// -----------------------------------------------------------------------------
// COUNTRY TABLES (ISO 3166-1 alpha-2)
// -----------------------------------------------------------------------------

const US_CODE: &str = "US";

static NORTH_AMERICA: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "CA", "MX", "GL", "BM", "PM", // mainland + North Atlantic
        "GT", "BZ", "SV", "HN", "NI", "CR", "PA", // Central America
        "CU", "JM", "HT", "DO", "PR", "BS", "BB", "TT", "AG", "DM", "GD", "KN", "LC", "VC",
        "AW", "CW", "SX", "BQ", "KY", "TC", "VG", "VI", "AI", "MS", "GP", "MQ", "BL", "MF",
    ]
    .into_iter()
    .collect()
});

static SOUTH_AMERICA: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "AR", "BO", "BR", "CL", "CO", "EC", "FK", "GF", "GY", "PY", "PE", "SR", "UY", "VE",
    ]
    .into_iter()
    .collect()
});

static AFRICA: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "DZ", "AO", "BJ", "BW", "BF", "BI", "CV", "CM", "CF", "TD", "KM", "CG", "CD", "CI",
        "DJ", "EG", "GQ", "ER", "SZ", "ET", "GA", "GM", "GH", "GN", "GW", "KE", "LS", "LR",
        "LY", "MG", "MW", "ML", "MR", "MU", "YT", "MA", "MZ", "NA", "NE", "NG", "RE", "RW",
        "SH", "ST", "SN", "SC", "SL", "SO", "ZA", "SS", "SD", "TZ", "TG", "TN", "UG", "EH",
        "ZM", "ZW",
    ]
    .into_iter()
    .collect()
});

static EUROPE: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "AD", "AL", "AT", "AX", "BA", "BE", "BG", "BY", "CH", "CY", "CZ", "DE", "DK", "EE",
        "ES", "FI", "FO", "FR", "GB", "UK", "GG", "GI", "GR", "HR", "HU", "IE", "IM", "IS",
        "IT", "JE", "LI", "LT", "LU", "LV", "MC", "MD", "ME", "MK", "MT", "NL", "NO", "PL",
        "PT", "RO", "RS", "RU", "SE", "SI", "SJ", "SK", "SM", "UA", "VA", "XK",
    ]
    .into_iter()
    .collect()
});

static ASIA: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "AF", "AM", "AZ", "BH", "BD", "BT", "BN", "KH", "CN", "GE", "HK", "IN", "ID", "IR",
        "IQ", "IL", "JP", "JO", "KZ", "KW", "KG", "LA", "LB", "MO", "MY", "MV", "MN", "MM",
        "NP", "KP", "OM", "PK", "PS", "PH", "QA", "SA", "SG", "KR", "LK", "SY", "TW", "TJ",
        "TH", "TL", "TR", "TM", "AE", "UZ", "VN", "YE", "IO",
    ]
    .into_iter()
    .collect()
});

static OCEANIA: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "AS", "AU", "CK", "FJ", "PF", "GU", "KI", "MH", "FM", "NR", "NC", "NZ", "NU", "NF",
        "MP", "PW", "PG", "PN", "WS", "SB", "TK", "TO", "TV", "VU", "WF", "UM",
    ]
    .into_iter()
    .collect()
});

/// Classifies by country code alone; `None` when the code is absent or unknown.
pub fn classify_country_code(country_code: &str) -> Option<RegionTag> {
    let code = country_code.trim().to_ascii_uppercase();
    if code.is_empty() {
        return None;
    }
    if code == US_CODE {
        return Some(RegionTag::UnitedStates);
    }

    let tables: [(&Lazy<HashSet<&'static str>>, RegionTag); 6] = [
        (&NORTH_AMERICA, RegionTag::NorthAmerica),
        (&SOUTH_AMERICA, RegionTag::SouthAmerica),
        (&AFRICA, RegionTag::Africa),
        (&EUROPE, RegionTag::Europe),
        (&ASIA, RegionTag::Asia),
        (&OCEANIA, RegionTag::Oceania),
    ];
    tables
        .into_iter()
        .find(|(set, _)| set.contains(code.as_str()))
        .map(|(_, tag)| tag)
}

/// Classifies by the first `/`-separated segment of an IANA zone id.
///
/// Note the prefix is coarse: every `America/*` zone maps to
/// [`RegionTag::NorthAmerica`], including `America/Sao_Paulo`.
pub fn classify_timezone(timezone: &str) -> Option<RegionTag> {
    let prefix = timezone.trim().split('/').next().unwrap_or("");
    match prefix {
        "America" => Some(RegionTag::NorthAmerica),
        "Europe" => Some(RegionTag::Europe),
        "Africa" => Some(RegionTag::Africa),
        "Asia" | "Indian" => Some(RegionTag::Asia),
        "Australia" | "Pacific" | "Antarctica" => Some(RegionTag::Oceania),
        _ => None,
    }
}

/// Assigns a region: country code first, timezone prefix second,
/// [`RegionTag::FALLBACK`] last.
///
/// ```rust
/// use citydb_core::region::{classify, RegionTag};
///
/// assert_eq!(classify(Some("us"), None), RegionTag::UnitedStates);
/// assert_eq!(classify(None, Some("Europe/Paris")), RegionTag::Europe);
/// assert_eq!(classify(None, None), RegionTag::Asia);
/// ```
pub fn classify(country_code: Option<&str>, timezone: Option<&str>) -> RegionTag {
    country_code
        .and_then(classify_country_code)
        .or_else(|| timezone.and_then(classify_timezone))
        .unwrap_or(RegionTag::FALLBACK)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn country_code_beats_timezone() {
        assert_eq!(
            classify(Some("BR"), Some("America/Sao_Paulo")),
            RegionTag::SouthAmerica
        );
        assert_eq!(
            classify(Some("US"), Some("Pacific/Honolulu")),
            RegionTag::UnitedStates
        );
    }

    #[test]
    fn unknown_code_falls_back_to_timezone_prefix() {
        assert_eq!(classify(Some("ZZ"), Some("Africa/Lagos")), RegionTag::Africa);
        assert_eq!(classify(Some(""), Some("Indian/Maldives")), RegionTag::Asia);
        assert_eq!(
            classify(None, Some("Antarctica/McMurdo")),
            RegionTag::Oceania
        );
        assert_eq!(
            classify(None, Some("America/Sao_Paulo")),
            RegionTag::NorthAmerica
        );
    }

    #[test]
    fn unrecognized_everything_defaults_to_asia() {
        assert_eq!(classify(Some("ZZ"), Some("Atlantic/Reykjavik")), RegionTag::Asia);
        assert_eq!(classify(None, Some("Etc/UTC")), RegionTag::Asia);
        assert_eq!(classify(None, Some("")), RegionTag::Asia);
    }

    #[test]
    fn codes_are_case_and_space_insensitive() {
        assert_eq!(classify(Some(" gb "), None), RegionTag::Europe);
        assert_eq!(classify(Some("nz"), None), RegionTag::Oceania);
    }

    #[test]
    fn tag_parses_from_identifier_and_label() {
        for tag in RegionTag::ALL {
            assert_eq!(tag.as_str().parse::<RegionTag>(), Ok(tag));
            assert_eq!(tag.label().parse::<RegionTag>(), Ok(tag));
        }
        assert!("atlantis".parse::<RegionTag>().is_err());
    }

    #[test]
    fn country_tables_do_not_overlap() {
        let tables = [&*NORTH_AMERICA, &*SOUTH_AMERICA, &*AFRICA, &*EUROPE, &*ASIA, &*OCEANIA];
        for (i, a) in tables.iter().enumerate() {
            for b in tables.iter().skip(i + 1) {
                assert!(a.is_disjoint(b));
            }
            assert!(!a.contains(US_CODE));
        }
    }
}
