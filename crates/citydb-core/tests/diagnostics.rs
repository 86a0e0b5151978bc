//! Build-time `tracing` diagnostics: slug collisions and defaulted records.

use citydb_core::prelude::*;
use std::io;
use std::sync::{Arc, Mutex};

#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl Captured {
    fn text(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().expect("log buffer")).into_owned()
    }
}

impl io::Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().expect("log buffer").extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Runs `f` with a WARN-level subscriber and returns everything it logged.
fn warnings_during<T>(f: impl FnOnce() -> T) -> (T, String) {
    let captured = Captured::default();
    let writer = captured.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .without_time()
        .with_max_level(tracing::Level::WARN)
        .finish();

    let out = tracing::subscriber::with_default(subscriber, f);
    (out, captured.text())
}

#[test]
fn canonical_collision_is_logged_with_both_cities() {
    let (catalog, log) = warnings_during(|| {
        Catalog::build(vec![
            RawCityInput::new("Springfield", "United States", "America/Chicago", 39.8, -89.6)
                .with_country_code("US")
                .with_state("IL"),
            RawCityInput::new("Springfield", "United States", "America/New_York", 42.1, -72.6)
                .with_country_code("US")
                .with_state("MA"),
        ])
    });

    assert_eq!(catalog.collisions().len(), 1);
    assert!(log.contains("canonical slug already claimed"), "{log}");
    assert!(log.contains("slug=springfield"), "{log}");
    assert!(log.contains("Springfield, IL, USA"), "{log}");
    assert!(log.contains("Springfield, MA, USA"), "{log}");
}

#[test]
fn missing_coordinates_and_timezone_are_logged() {
    let (catalog, log) = warnings_during(|| {
        Catalog::from_json_str(r#"[{ "name": "Atlantis", "country": "Nowhere" }]"#)
    });

    let catalog = catalog.expect("valid json");
    assert!(!catalog.cities()[0].has_location());
    assert!(log.contains("missing coordinates, substituting (0, 0)"), "{log}");
    assert!(log.contains("missing timezone"), "{log}");
    assert!(log.contains("city=Atlantis"), "{log}");
}

#[test]
fn clean_catalog_builds_silently() {
    let (_, log) = warnings_during(|| {
        Catalog::build(vec![
            RawCityInput::new("Zürich", "Switzerland", "Europe/Zurich", 47.37, 8.54)
                .with_country_code("CH"),
            RawCityInput::new("Zurich", "Netherlands", "Europe/Amsterdam", 53.11, 5.39)
                .with_country_code("NL"),
        ])
    });

    // The skipped transliterated candidate is a debug event, below WARN.
    assert!(log.is_empty(), "{log}");
}
