// crates/citydb-core/src/text.rs
//! String helpers shared by the normalizer, the slug index and search:
//! slug derivation, Unicode folding and display-label formatting.

/// Short display form used for every recognized United States spelling.
pub const US_SHORT_LABEL: &str = "USA";

const US_COUNTRY_CODE: &str = "US";

const US_NAME_VARIANTS: &[&str] = &[
    "us",
    "usa",
    "u.s.",
    "u.s.a.",
    "united states",
    "united states of america",
];

/// Converts a label into a URL-safe slug.
///
/// Lowercases the input, replaces every maximal run of characters outside
/// `[a-z0-9]` with a single `-` and trims leading/trailing hyphens.
/// Non-ASCII characters count as separators; use [`transliterate`] first
/// when an ASCII approximation is wanted.
///
/// The function is idempotent: `slugify(&slugify(x)) == slugify(x)`.
///
/// # Examples
///
/// ```rust
/// use citydb_core::text::slugify;
///
/// assert_eq!(slugify("New York"), "new-york");
/// assert_eq!(slugify("  St. John's, NL "), "st-john-s-nl");
/// assert_eq!(slugify("São Paulo"), "s-o-paulo");
/// assert_eq!(slugify("***"), "");
/// ```
pub fn slugify(label: &str) -> String {
    let mut out = String::with_capacity(label.len());
    let mut pending_hyphen = false;

    for ch in label.chars() {
        let lower = ch.to_ascii_lowercase();
        if lower.is_ascii_lowercase() || lower.is_ascii_digit() {
            if pending_hyphen && !out.is_empty() {
                out.push('-');
            }
            pending_hyphen = false;
            out.push(lower);
        } else {
            pending_hyphen = true;
        }
    }
    out
}

/// Best-effort Unicode → ASCII transliteration (`Łódź` → `Lodz`).
///
/// Backed by `deunicode`; characters without a mapping disappear.
pub fn transliterate(s: &str) -> String {
    deunicode::deunicode(s)
}

/// Convert a string into a folded key suitable for comparison and collation.
///
/// 1\) Transliterate Unicode → ASCII
/// 2\) Normalize to lowercase
///
/// ```rust
/// use citydb_core::text::fold_key;
///
/// assert_eq!(fold_key("Zürich"), "zurich");
/// assert_eq!(fold_key("ŁÓDŹ"), "lodz");
/// ```
pub fn fold_key(s: &str) -> String {
    deunicode::deunicode(s).to_lowercase()
}

/// Equality after [`fold_key`] on both sides.
pub fn equals_folded(a: &str, b: &str) -> bool {
    fold_key(a) == fold_key(b)
}

/// Rewrites the recognized United States code and name variants to
/// [`US_SHORT_LABEL`]; every other country label is returned trimmed.
pub fn normalize_country_label(country: &str, country_code: Option<&str>) -> String {
    let is_us_code = country_code
        .map(|c| c.trim().eq_ignore_ascii_case(US_COUNTRY_CODE))
        .unwrap_or(false);

    let trimmed = country.trim();
    let lowered = trimmed.to_lowercase();
    if is_us_code || US_NAME_VARIANTS.contains(&lowered.as_str()) {
        return US_SHORT_LABEL.to_owned();
    }
    trimmed.to_owned()
}

/// Builds the human-readable label shown next to search results.
///
/// Segments are `[name, state, country]` (country passed through
/// [`normalize_country_label`]). Empty segments are dropped, and a segment
/// whose lowercase text already appeared earlier is skipped, so a city-state
/// never renders its name twice.
///
/// ```rust
/// use citydb_core::text::display_label;
///
/// assert_eq!(
///     display_label("London", Some("England"), "England", Some("GB")),
///     "London, England"
/// );
/// assert_eq!(
///     display_label("Austin", Some("TX"), "United States", Some("US")),
///     "Austin, TX, USA"
/// );
/// ```
pub fn display_label(
    name: &str,
    state: Option<&str>,
    country: &str,
    country_code: Option<&str>,
) -> String {
    let country = normalize_country_label(country, country_code);
    let candidates = [name.trim(), state.unwrap_or("").trim(), country.as_str()];

    let mut seen: Vec<String> = Vec::with_capacity(3);
    let mut parts: Vec<&str> = Vec::with_capacity(3);
    for segment in candidates {
        if segment.is_empty() {
            continue;
        }
        let key = segment.to_lowercase();
        if seen.contains(&key) {
            continue;
        }
        seen.push(key);
        parts.push(segment);
    }
    parts.join(", ")
}
