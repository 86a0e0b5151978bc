//! Basic usage example for citydb-rs
//!
//! This example demonstrates how to:
//! - Build the catalog once at startup
//! - Resolve URL segments and free text to a city
//! - Search with a bound
//! - Inspect derived fields (slug, label, region)

use citydb_core::prelude::*;

fn main() -> Result<()> {
    println!("=== citydb-rs Basic Usage Example ===\n");

    println!("Loading bundled city catalog...");
    let catalog = Catalog::bundled()?;
    println!("✓ Catalog built: {} cities\n", catalog.len());

    // Example 1: Resolve references the way a city-detail route would
    println!("--- Example 1: Resolve slugs ---");
    for input in ["new-york", "New York", "/SAO-PAULO/", "paris-texas", "atlantis"] {
        match catalog.find_by_slug(input) {
            Some(city) => println!("{input:>14} -> {} [{}]", city.label(), city.slug()),
            None => println!("{input:>14} -> not found (404)"),
        }
    }
    println!();

    // Example 2: Search box
    println!("--- Example 2: Search \"port\" (limit 5) ---");
    for (i, city) in catalog.search("port", 5).iter().enumerate() {
        println!("{}. {} ({})", i + 1, city.label(), city.timezone());
    }
    println!();

    // Example 3: Empty query falls back to the alphabetical head of the list
    println!("--- Example 3: Empty query ---");
    for city in catalog.search_default("") {
        println!("- {}", city.name());
    }
    println!();

    // Example 4: Derived fields
    println!("--- Example 4: Derived fields ---");
    if let Some(city) = catalog.find_by_slug("london") {
        println!("Name: {}", city.name());
        println!("Slug: {}", city.slug());
        println!("Label: {}", city.label());
        println!("Region: {} ({})", city.continent().label(), city.continent());
        println!("Population: {:?}", city.population());
    }

    Ok(())
}
