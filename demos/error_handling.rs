//! Error handling example for citydb-rs
//!
//! Loading is the only fallible step; lookups return `Option` and searches
//! return possibly-empty vectors.

use citydb_core::prelude::*;

fn main() -> Result<()> {
    println!("=== citydb-rs Error Handling Example ===\n");

    // Example 1: Handling dataset load errors
    println!("--- Example 1: Loading a missing dataset ---");
    match Catalog::load_from_path("does/not/exist.json") {
        Ok(catalog) => println!("✓ Loaded {} cities", catalog.len()),
        Err(e) => eprintln!("✗ Failed to load dataset: {e}"),
    }
    println!();

    // Example 2: Malformed JSON is a parse error
    println!("--- Example 2: Malformed JSON ---");
    if let Err(e) = Catalog::from_json_str("[{\"country\": \"Nowhere\"}]") {
        println!("  Rejected: {e}");
    }
    println!();

    // Example 3: Sloppy records are defaulted, not rejected
    println!("--- Example 3: Records with missing fields ---");
    let catalog = Catalog::from_json_str(r#"[{ "name": "Null Island" }]"#)?;
    let city = &catalog.cities()[0];
    println!("  {} at ({}, {}), known location: {}", city.name(), city.lat(), city.lon(), city.has_location());
    println!("  Region fallback: {}", city.continent());
    println!();

    // Example 4: Not-found is a value, not an error
    println!("--- Example 4: Unknown slugs ---");
    let catalog = Catalog::bundled()?;
    for slug in ["", "!!!", "gotham"] {
        match catalog.find_by_slug(slug) {
            Some(city) => println!("  Found: {}", city.label()),
            None => println!("  Not found: {slug:?}"),
        }
    }

    Ok(())
}
