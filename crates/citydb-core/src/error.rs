// crates/citydb-core/src/error.rs
use thiserror::Error;

/// Errors produced while loading a city dataset.
///
/// Lookups and searches never fail: a missing city is `None` and an empty
/// search is an empty `Vec`. Only the I/O and parsing layer in [`crate::loader`]
/// returns these.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

pub type Result<T> = std::result::Result<T, CatalogError>;
