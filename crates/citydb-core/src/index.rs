// crates/citydb-core/src/index.rs
//! # Candidate Slug Index
//!
//! Every city owns several slug strings that could plausibly identify it:
//! its canonical slug, its bare name, and name+state+country (plus ASCII
//! transliterations of those two). [`SlugIndex::build`] maps each of them to
//! the owning city with a strict **first-writer-wins** policy across both
//! cities and candidates.
//!
//! Transliterated candidates are inserted in a second pass, after every
//! city's plain candidates, and only into keys nobody has claimed yet. They
//! widen what resolves without changing which city wins a plain slug.
//!
//! The policy means a later city can lose its own canonical slug to an
//! earlier city that produced the same string as a secondary candidate.
//! That shadowing is kept as-is; it is reported through `tracing` and
//! [`SlugIndex::collisions`] instead of being resolved differently.

use crate::model::CityRecord;
use crate::text::{slugify, transliterate};
use serde::Serialize;
use std::collections::hash_map::Entry;
use std::collections::HashMap;

/// All slug strings that identify `city`, de-duplicated, in insertion order.
///
/// ```rust
/// use citydb_core::index::candidate_slugs;
/// use citydb_core::model::convert::normalize;
/// use citydb_core::raw::RawCityInput;
///
/// let city = &normalize(vec![
///     RawCityInput::new("São Paulo", "Brazil", "America/Sao_Paulo", -23.55, -46.63)
///         .with_state("SP"),
/// ])[0];
/// assert_eq!(
///     candidate_slugs(city),
///     ["s-o-paulo", "s-o-paulo-sp-brazil", "sao-paulo", "sao-paulo-sp-brazil"]
/// );
/// ```
pub fn candidate_slugs(city: &CityRecord) -> Vec<String> {
    let mut out = plain_candidates(city);
    for slug in transliterated_candidates(city) {
        if !out.contains(&slug) {
            out.push(slug);
        }
    }
    out
}

fn full_reference(city: &CityRecord) -> String {
    match city.state() {
        Some(state) => format!("{} {} {}", city.name, state, city.country),
        None => format!("{} {}", city.name, city.country),
    }
}

/// Canonical slug, name slug and name+state+country slug.
fn plain_candidates(city: &CityRecord) -> Vec<String> {
    dedup([
        city.slug.clone(),
        slugify(&city.name),
        slugify(&full_reference(city)),
    ])
}

/// ASCII variants of the name and full reference ("São Paulo" → `sao-paulo`).
fn transliterated_candidates(city: &CityRecord) -> Vec<String> {
    dedup([
        slugify(&transliterate(&city.name)),
        slugify(&transliterate(&full_reference(city))),
    ])
}

fn dedup<const N: usize>(raw: [String; N]) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(N);
    for slug in raw {
        if !slug.is_empty() && !out.contains(&slug) {
            out.push(slug);
        }
    }
    out
}

/// A canonical slug that could not be inserted because an earlier city
/// already claimed the same string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlugCollision {
    pub slug: String,
    /// Catalog position of the city that owns the slug.
    pub kept: usize,
    /// Catalog position of the city whose canonical slug was shadowed.
    pub shadowed: usize,
}

/// Lookup table from every candidate slug to a catalog position.
#[derive(Debug, Clone, Default)]
pub struct SlugIndex {
    map: HashMap<String, usize>,
    collisions: Vec<SlugCollision>,
}

impl SlugIndex {
    /// Builds the index over `cities` in order; the first city to produce a
    /// slug keeps it. Transliterated candidates only fill keys left free by
    /// the plain pass.
    pub fn build(cities: &[CityRecord]) -> Self {
        let mut index = SlugIndex::default();

        for (pos, city) in cities.iter().enumerate() {
            for slug in plain_candidates(city) {
                index.claim(cities, pos, slug);
            }
        }
        for (pos, city) in cities.iter().enumerate() {
            // The canonical slug was settled (or reported) in the first pass.
            for slug in transliterated_candidates(city) {
                if slug != city.slug {
                    index.claim(cities, pos, slug);
                }
            }
        }

        index
    }

    fn claim(&mut self, cities: &[CityRecord], pos: usize, slug: String) {
        let city = &cities[pos];
        match self.map.entry(slug) {
            Entry::Vacant(v) => {
                v.insert(pos);
            }
            Entry::Occupied(o) => {
                let kept = *o.get();
                if kept == pos {
                    return;
                }
                if *o.key() == city.slug {
                    tracing::warn!(
                        slug = %o.key(),
                        kept = %cities[kept].label,
                        shadowed = %city.label,
                        "canonical slug already claimed by an earlier city"
                    );
                    self.collisions.push(SlugCollision {
                        slug: o.key().clone(),
                        kept,
                        shadowed: pos,
                    });
                } else {
                    tracing::debug!(
                        slug = %o.key(),
                        kept = %cities[kept].label,
                        skipped = %city.label,
                        "secondary slug candidate already taken"
                    );
                }
            }
        }
    }

    /// Exact-key lookup; `slug` is expected to be slugified already.
    pub fn get(&self, slug: &str) -> Option<usize> {
        self.map.get(slug).copied()
    }

    /// Slugifies `query` and resolves it against `cities` (the slice the
    /// index was built from).
    pub fn lookup<'a>(&self, cities: &'a [CityRecord], query: &str) -> Option<&'a CityRecord> {
        self.get(&slugify(query)).and_then(|pos| cities.get(pos))
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn collisions(&self) -> &[SlugCollision] {
        &self.collisions
    }

    /// Iterates `(slug, position)` pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.map.iter().map(|(k, v)| (k.as_str(), *v))
    }
}
