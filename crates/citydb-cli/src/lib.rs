//! citydb-cli
//! ==========
//!
//! Command-line interface for the `citydb-core` city catalog.
//!
//! This crate primarily provides a binary (`citydb`). We include a small
//! library target so that docs.rs renders a documentation page and shows this
//! overview.
//!
//! Basic usage:
//!
//! ```text
//! citydb --help
//! citydb stats
//! citydb find "New York"
//! citydb --limit 5 search lond
//! citydb region europe
//! citydb nearest 51.5 -0.12
//! RUST_LOG=citydb_core=debug citydb --input cities.json.gz collisions
//! ```
//!
//! For programmatic access use the [citydb-core](https://docs.rs/citydb-core) crate directly.
#![cfg_attr(docsrs, feature(doc_cfg))]
