//! Region directory example for citydb-rs
//!
//! Groups the catalog by region the way a directory page would, and uses
//! the nearest-city helper as a "use my location" fallback.

use citydb_core::prelude::*;

fn main() -> Result<()> {
    let catalog = Catalog::bundled()?;

    for tag in RegionTag::ALL {
        let cities = catalog.cities_in_region(tag);
        println!("## {} ({})", tag.label(), cities.len());
        for city in cities {
            println!("  - {} [/{}/{}]", city.label(), tag, city.slug());
        }
        println!();
    }

    // Ambiguous names: every city sharing a folded name.
    for name in ["Springfield", "Portland", "Paris", "Victoria"] {
        let matches: Vec<&str> = catalog.cities_named(name).into_iter().map(|c| c.label()).collect();
        println!("{name}: {}", matches.join(" | "));
    }
    println!();

    let (lat, lon) = (48.2082, 16.3738);
    match catalog.nearest(lat, lon) {
        Some(city) => println!("Nearest to ({lat}, {lon}): {}", city.label()),
        None => println!("No located cities"),
    }

    Ok(())
}
