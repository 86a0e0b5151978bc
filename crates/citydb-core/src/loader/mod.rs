// crates/citydb-core/src/loader/mod.rs

//! # Data Loader
//!
//! Handles the physical layer (files, decompression, JSON) and hands the
//! parsed [`RawCityInput`] list to [`Catalog::build_with`].
//!
//! Nothing here is cached globally: each call builds a fresh catalog, and the
//! application is expected to build one at startup and share it.

use crate::error::Result;
use crate::model::{Catalog, CatalogOptions};
use crate::raw::CitiesRaw;
use std::io::Read;
use std::path::{Path, PathBuf};

pub mod common_io;

/// File name of the dataset shipped in `data/`.
pub const DEFAULT_DATASET_FILENAME: &str = "cities.json";

/// The shipped dataset, embedded so [`Catalog::bundled`] needs no files at runtime.
static BUNDLED_JSON: &str = include_str!("../../data/cities.json");

impl Catalog {
    pub fn default_data_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
    }

    pub fn default_dataset_filename() -> &'static str {
        DEFAULT_DATASET_FILENAME
    }

    /// Builds the catalog from the dataset compiled into the crate.
    pub fn bundled() -> Result<Self> {
        Self::bundled_with(CatalogOptions::default())
    }

    pub fn bundled_with(options: CatalogOptions) -> Result<Self> {
        Self::from_json_str_with(BUNDLED_JSON, options)
    }

    /// Parses a JSON array of raw city entries.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Self::from_json_str_with(json, CatalogOptions::default())
    }

    pub fn from_json_str_with(json: &str, options: CatalogOptions) -> Result<Self> {
        let raw: CitiesRaw = serde_json::from_str(json)?;
        Ok(Self::build_with(raw, options))
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Self::from_reader_with(reader, CatalogOptions::default())
    }

    pub fn from_reader_with<R: Read>(reader: R, options: CatalogOptions) -> Result<Self> {
        let raw: CitiesRaw = serde_json::from_reader(reader)?;
        Ok(Self::build_with(raw, options))
    }

    /// **Standard Loader:** reads a `.json` (or, with `compact`, `.json.gz`) file.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        Self::load_from_path_with(path, CatalogOptions::default())
    }

    pub fn load_from_path_with(path: impl AsRef<Path>, options: CatalogOptions) -> Result<Self> {
        let path = path.as_ref();
        let reader = common_io::open_stream(path)?;
        let catalog = Self::from_reader_with(reader, options)?;
        tracing::debug!(path = %path.display(), cities = catalog.len(), "dataset loaded");
        Ok(catalog)
    }
}
