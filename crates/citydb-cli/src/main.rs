//! citydb — Command-line interface for citydb-core
//!
//! Loads a city catalog once (the bundled dataset, or `--input <path>`), then
//! runs one query against it. Diagnostics from catalog construction (slug
//! collisions, defaulted coordinates) go to stderr through `tracing`; set
//! `RUST_LOG` to see more than warnings.
//!
//! Exit codes: `0` on success, `1` when a lookup found nothing, `2` for
//! argument errors (clap).
mod args;

use crate::args::{CliArgs, Commands};
use anyhow::Context;
use citydb_core::{Catalog, CatalogOptions, CityRecord, CitySearch, RegionTag};
use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    // A second init (tests, embedding) is harmless; ignore the error.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn load_catalog(args: &CliArgs) -> anyhow::Result<Catalog> {
    let options = CatalogOptions {
        default_search_limit: args.limit,
    };
    match &args.input {
        Some(path) => Catalog::load_from_path_with(path, options)
            .with_context(|| format!("failed to load dataset {path}")),
        None => {
            let catalog = Catalog::bundled_with(options).context("bundled dataset is corrupt")?;
            tracing::debug!(cities = catalog.len(), "using bundled dataset");
            Ok(catalog)
        }
    }
}

fn print_city(city: &CityRecord) {
    println!("{} [{}]", city.label(), city.slug());
    println!("  Timezone: {}", city.timezone());
    println!("  Region: {}", city.continent().label());
    if city.has_location() {
        println!("  Location: {:.4}, {:.4}", city.lat(), city.lon());
    } else {
        println!("  Location: unknown");
    }
    if let Some(pop) = city.population() {
        println!("  Population: {pop}");
    }
}

fn print_list(cities: &[&CityRecord], json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(cities)?);
    } else {
        for city in cities {
            println!("{} [{}]", city.label(), city.slug());
        }
    }
    Ok(())
}

fn run(args: CliArgs) -> anyhow::Result<ExitCode> {
    let catalog = load_catalog(&args)?;

    match &args.command {
        Commands::Stats => {
            let stats = catalog.stats();
            if args.json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                println!("Catalog statistics:");
                println!("  Cities: {}", stats.cities);
                println!("  Slugs: {}", stats.slugs);
                println!("  Canonical slugs: {}", stats.canonical_slugs);
                println!("  Collisions: {}", stats.collisions);
                println!("  Unknown locations: {}", stats.unknown_locations);
                for (tag, count) in &stats.regions {
                    println!("  {}: {}", tag.label(), count);
                }
            }
        }

        Commands::Find { query } => match catalog.find_by_slug(query) {
            Some(city) if args.json => println!("{}", serde_json::to_string_pretty(city)?),
            Some(city) => print_city(city),
            None => {
                eprintln!("No city found for: {query}");
                return Ok(ExitCode::FAILURE);
            }
        },

        Commands::Search { query } => {
            let hits = catalog.search_default(query);
            if hits.is_empty() && !args.json {
                println!("No cities found matching: {query}");
            } else {
                print_list(&hits, args.json)?;
            }
        }

        Commands::Region { tag } => {
            let tag: RegionTag = tag.parse()?;
            let cities = catalog.cities_in_region(tag);
            let shown: Vec<&CityRecord> = cities.into_iter().take(args.limit).collect();
            print_list(&shown, args.json)?;
        }

        Commands::Nearest { lat, lon } => match catalog.nearest(*lat, *lon) {
            Some(city) if args.json => println!("{}", serde_json::to_string_pretty(city)?),
            Some(city) => print_city(city),
            None => {
                eprintln!("No city with a known location near {lat}, {lon}");
                return Ok(ExitCode::FAILURE);
            }
        },

        Commands::Collisions if args.json => {
            println!("{}", serde_json::to_string_pretty(catalog.collisions())?);
        }

        Commands::Collisions => {
            for c in catalog.collisions() {
                let kept = &catalog.cities()[c.kept];
                let shadowed = &catalog.cities()[c.shadowed];
                println!(
                    "{}: kept {} (#{}), shadowed {} (#{})",
                    c.slug,
                    kept.label(),
                    c.kept + 1,
                    shadowed.label(),
                    c.shadowed + 1
                );
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn main() -> anyhow::Result<ExitCode> {
    init_tracing();
    let args = CliArgs::parse();
    run(args)
}
