use clap::{Parser, Subcommand};

/// CLI arguments for citydb-cli
#[derive(Debug, Parser)]
#[command(
    name = "citydb",
    version,
    about = "CLI for resolving and searching cities in the citydb-core catalog"
)]
pub struct CliArgs {
    /// Path to a `.json` or `.json.gz` dataset (default: the bundled dataset)
    #[arg(short = 'i', long = "input", env = "CITYDB_INPUT", global = true)]
    pub input: Option<String>,

    /// Maximum number of results for list-style commands
    #[arg(short = 'n', long = "limit", env = "CITYDB_LIMIT", global = true, default_value_t = 10)]
    pub limit: usize,

    /// Print JSON instead of plain text
    #[arg(long = "json", global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show a summary of the catalog contents
    Stats,

    /// Resolve a slug, URL segment or city name to one city
    Find {
        /// e.g. "new-york", "New York", "/new-york/"
        query: String,
    },

    /// Search cities by substring (name, country, state, timezone)
    Search {
        /// Empty lists the first cities alphabetically
        #[arg(default_value = "")]
        query: String,
    },

    /// List the cities of a region (e.g. europe, north-america)
    Region {
        tag: String,
    },

    /// Find the city closest to a coordinate
    Nearest {
        #[arg(allow_hyphen_values = true)]
        lat: f64,
        #[arg(allow_hyphen_values = true)]
        lon: f64,
    },

    /// List canonical slugs shadowed by an earlier city
    Collisions,
}
