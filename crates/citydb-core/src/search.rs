// crates/citydb-core/src/search.rs
use crate::model::{Catalog, CityRecord};
use crate::text::fold_key;
use crate::traits::CitySearch;
use std::cmp::Ordering;

/// Lowercased `name country [state] timezone`, the text a query is matched against.
pub(crate) fn haystack(city: &CityRecord) -> String {
    let mut parts: Vec<&str> = vec![&city.name, &city.country];
    if let Some(state) = city.state() {
        parts.push(state);
    }
    parts.push(&city.timezone);
    parts.join(" ").to_lowercase()
}

/// Primary sort key for alphabetical ordering: accent- and case-folded, so
/// "Århus" sorts with the A's and "amsterdam" before "Berlin".
pub fn collation_key(s: &str) -> String {
    fold_key(s)
}

/// Compares two labels the way search results are ordered: folded key first,
/// then [`compare_tiebreak`].
pub fn compare_labels(a: &str, b: &str) -> Ordering {
    collation_key(a)
        .cmp(&collation_key(b))
        .then_with(|| compare_tiebreak(a, b))
}

/// Orders strings whose collation keys are equal: unaccented before accented,
/// lowercase before uppercase ("paris" < "Paris" < "PARIS").
pub fn compare_tiebreak(a: &str, b: &str) -> Ordering {
    a.chars().map(swap_case).cmp(b.chars().map(swap_case))
}

fn swap_case(c: char) -> char {
    if c.is_uppercase() {
        c.to_lowercase().next().unwrap_or(c)
    } else if c.is_lowercase() {
        c.to_uppercase().next().unwrap_or(c)
    } else {
        c
    }
}

impl Catalog {
    fn cmp_by_label(&self, a: usize, b: usize) -> Ordering {
        self.label_keys[a]
            .cmp(&self.label_keys[b])
            .then_with(|| compare_tiebreak(&self.cities[a].label, &self.cities[b].label))
            .then(a.cmp(&b))
    }
}

impl CitySearch for Catalog {
    fn find_by_slug(&self, query: &str) -> Option<&CityRecord> {
        self.index.lookup(&self.cities, query)
    }

    fn search(&self, query: &str, limit: usize) -> Vec<&CityRecord> {
        if limit == 0 {
            return Vec::new();
        }

        let q = query.trim().to_lowercase();
        if q.is_empty() {
            return self
                .by_name
                .iter()
                .take(limit)
                .map(|&pos| &self.cities[pos])
                .collect();
        }

        let mut hits: Vec<usize> = self
            .haystacks
            .iter()
            .enumerate()
            .filter(|(_, hay)| hay.contains(&q))
            .map(|(pos, _)| pos)
            .collect();

        hits.sort_by(|&a, &b| self.cmp_by_label(a, b));
        hits.truncate(limit);
        hits.into_iter().map(|pos| &self.cities[pos]).collect()
    }

    fn default_limit(&self) -> usize {
        self.options.default_search_limit
    }
}
