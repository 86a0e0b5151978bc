//! Umbrella crate for the citydb workspace.
//!
//! Re-exports [`citydb_core`] so the demos and downstream tooling can depend
//! on a single path.

pub use citydb_core::*;
