// crates/citydb-core/src/model/catalog.rs
use super::convert::normalize;
use super::{CityRecord, DEFAULT_SEARCH_LIMIT};
use crate::common::CatalogStats;
use crate::geo::haversine_km;
use crate::index::{SlugCollision, SlugIndex};
use crate::raw::RawCityInput;
use crate::region::RegionTag;
use crate::search::{collation_key, compare_tiebreak, haystack};
use crate::traits::NameMatch;
use std::collections::{BTreeMap, HashMap};

/// Tunables for a [`Catalog`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogOptions {
    /// Result count used by [`crate::CitySearch::search_default`].
    pub default_search_limit: usize,
}

impl Default for CatalogOptions {
    fn default() -> Self {
        CatalogOptions {
            default_search_limit: DEFAULT_SEARCH_LIMIT,
        }
    }
}

/// The immutable, in-memory city catalog.
///
/// Built once at startup (see [`Catalog::build`] and the loaders in
/// [`crate::loader`]) and shared by reference afterwards. Nothing in here is
/// mutated after construction, so a `&Catalog` (or `Arc<Catalog>`) can be
/// handed to any number of threads.
///
/// Besides the ordered city list it precomputes:
/// - the candidate [`SlugIndex`] used by [`crate::CitySearch::find_by_slug`],
/// - a map keyed by canonical slug only,
/// - a name-sorted view for the empty-query search fallback,
/// - per-city search haystacks and label collation keys.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub(crate) cities: Vec<CityRecord>,
    pub(crate) index: SlugIndex,
    pub(crate) canonical: HashMap<String, usize>,
    pub(crate) by_name: Vec<usize>,
    pub(crate) haystacks: Vec<String>,
    pub(crate) label_keys: Vec<String>,
    pub(crate) options: CatalogOptions,
}

impl Catalog {
    /// Normalizes `raw` and builds every lookup structure with default options.
    pub fn build(raw: Vec<RawCityInput>) -> Self {
        Self::build_with(raw, CatalogOptions::default())
    }

    pub fn build_with(raw: Vec<RawCityInput>, options: CatalogOptions) -> Self {
        Self::assemble(normalize(raw), options)
    }

    fn assemble(cities: Vec<CityRecord>, options: CatalogOptions) -> Self {
        let index = SlugIndex::build(&cities);

        let mut canonical = HashMap::with_capacity(cities.len());
        for (pos, city) in cities.iter().enumerate() {
            canonical.entry(city.slug.clone()).or_insert(pos);
        }

        let name_keys: Vec<String> = cities.iter().map(|c| collation_key(&c.name)).collect();
        let mut by_name: Vec<usize> = (0..cities.len()).collect();
        by_name.sort_by(|&a, &b| {
            name_keys[a]
                .cmp(&name_keys[b])
                .then_with(|| compare_tiebreak(&cities[a].name, &cities[b].name))
                .then(a.cmp(&b))
        });

        let haystacks = cities.iter().map(haystack).collect();
        let label_keys = cities.iter().map(|c| collation_key(&c.label)).collect();

        tracing::debug!(
            cities = cities.len(),
            slugs = index.len(),
            collisions = index.collisions().len(),
            "city catalog built"
        );

        Catalog {
            cities,
            index,
            canonical,
            by_name,
            haystacks,
            label_keys,
            options,
        }
    }

    /// The full catalog in source order.
    pub fn cities(&self) -> &[CityRecord] {
        &self.cities
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    pub fn options(&self) -> CatalogOptions {
        self.options
    }

    pub fn slug_index(&self) -> &SlugIndex {
        &self.index
    }

    /// Canonical slugs that lost to an earlier city at build time.
    pub fn collisions(&self) -> &[SlugCollision] {
        self.index.collisions()
    }

    /// Direct access by canonical slug only; secondary candidates don't match.
    ///
    /// The argument is used verbatim (no slugification).
    pub fn find_by_canonical_slug(&self, slug: &str) -> Option<&CityRecord> {
        self.canonical.get(slug).map(|&pos| &self.cities[pos])
    }

    /// `(canonical slug, city)` pairs; first city wins on duplicates.
    pub fn canonical_slugs(&self) -> impl Iterator<Item = (&str, &CityRecord)> {
        self.canonical
            .iter()
            .map(|(slug, &pos)| (slug.as_str(), &self.cities[pos]))
    }

    /// Cities in `region`, in catalog order.
    pub fn cities_in_region(&self, region: RegionTag) -> Vec<&CityRecord> {
        self.cities
            .iter()
            .filter(|c| c.continent == region)
            .collect()
    }

    /// Every city whose name equals `name` after accent and case folding.
    ///
    /// Duplicate names across countries ("Springfield", "Victoria") come back
    /// together, in catalog order.
    pub fn cities_named(&self, name: &str) -> Vec<&CityRecord> {
        let name = name.trim();
        if name.is_empty() {
            return Vec::new();
        }
        self.cities.iter().filter(|c| c.is_named(name)).collect()
    }

    /// Great-circle nearest city to `(lat, lon)`.
    ///
    /// Records without a real location are skipped. On equal distance the
    /// earlier city wins.
    pub fn nearest(&self, lat: f64, lon: f64) -> Option<&CityRecord> {
        if !lat.is_finite() || !lon.is_finite() {
            return None;
        }

        let mut best: Option<(f64, &CityRecord)> = None;
        for city in self.cities.iter().filter(|c| c.has_location()) {
            let d = haversine_km(lat, lon, city.lat, city.lon);
            match best {
                Some((best_d, _)) if d >= best_d => {}
                _ => best = Some((d, city)),
            }
        }
        best.map(|(_, city)| city)
    }

    pub fn stats(&self) -> CatalogStats {
        let mut regions: BTreeMap<RegionTag, usize> =
            RegionTag::ALL.into_iter().map(|tag| (tag, 0)).collect();
        for city in &self.cities {
            *regions.entry(city.continent).or_default() += 1;
        }

        CatalogStats {
            cities: self.cities.len(),
            slugs: self.index.len(),
            canonical_slugs: self.canonical.len(),
            collisions: self.index.collisions().len(),
            unknown_locations: self.cities.iter().filter(|c| !c.has_location()).count(),
            regions,
        }
    }
}
