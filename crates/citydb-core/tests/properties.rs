//! Property checks for slugs, search and region classification.

use citydb_core::prelude::*;
use citydb_core::search::{collation_key, compare_tiebreak};
use proptest::prelude::*;
use std::collections::HashSet;

fn fixture() -> Catalog {
    Catalog::bundled().expect("bundled dataset parses")
}

fn well_formed(slug: &str) -> bool {
    slug.chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        && !slug.starts_with('-')
        && !slug.ends_with('-')
        && !slug.contains("--")
}

proptest! {
    #[test]
    fn slugify_is_idempotent_and_well_formed(input in "\\PC{0,64}") {
        let once = slugify(&input);
        prop_assert_eq!(slugify(&once), once.clone());
        prop_assert!(well_formed(&once), "bad slug {:?} from {:?}", once, input);
    }

    #[test]
    fn search_never_exceeds_limit(query in "[a-zA-Z /_]{0,6}", limit in 1usize..30) {
        let catalog = fixture();
        prop_assert!(catalog.search(&query, limit).len() <= limit);
    }

    #[test]
    fn search_is_deterministic_and_label_ordered(query in "[a-z]{1,3}", limit in 1usize..60) {
        let catalog = fixture();
        let first: Vec<&str> = catalog.search(&query, limit).iter().map(|c| c.slug()).collect();
        let second: Vec<&str> = catalog.search(&query, limit).iter().map(|c| c.slug()).collect();
        prop_assert_eq!(&first, &second);

        let hits = catalog.search(&query, limit);
        for pair in hits.windows(2) {
            prop_assert!(collation_key(pair[0].label()) <= collation_key(pair[1].label()));
        }
    }

    #[test]
    fn classify_is_total(code in proptest::option::of("\\PC{0,4}"), tz in proptest::option::of("\\PC{0,24}")) {
        let tag = classify(code.as_deref(), tz.as_deref());
        prop_assert!(RegionTag::ALL.contains(&tag));
    }

    #[test]
    fn display_label_has_no_repeated_segments(
        name in "[A-Za-z]{1,8}",
        state in proptest::option::of("[A-Za-z]{0,8}"),
        country in "[A-Za-z ]{0,12}",
    ) {
        let label = display_label(&name, state.as_deref(), &country, None);
        let mut seen = Vec::new();
        for part in label.split(", ") {
            let key = part.to_lowercase();
            prop_assert!(!seen.contains(&key), "{:?} repeats {:?}", label, part);
            seen.push(key);
        }
    }
}

#[test]
fn empty_query_returns_name_sorted_unique_prefix() {
    let catalog = fixture();
    let mut expected: Vec<&CityRecord> = catalog.cities().iter().collect();
    expected.sort_by(|a, b| {
        collation_key(a.name())
            .cmp(&collation_key(b.name()))
            .then_with(|| compare_tiebreak(a.name(), b.name()))
    });

    for n in [1, 5, 17, catalog.len(), catalog.len() + 10] {
        let hits = catalog.search("", n);
        assert_eq!(hits.len(), n.min(catalog.len()));
        let got: Vec<&str> = hits.iter().map(|c| c.label()).collect();
        let want: Vec<&str> = expected.iter().take(n).map(|c| c.label()).collect();
        assert_eq!(got, want);

        let unique: HashSet<*const CityRecord> = hits.iter().map(|c| *c as *const _).collect();
        assert_eq!(unique.len(), hits.len());
    }
}

#[test]
fn display_label_examples() {
    assert_eq!(display_label("London", Some("England"), "England", None), "London, England");
    assert_eq!(display_label("London", Some("ENGLAND"), "england", None), "London, ENGLAND");
    assert_eq!(display_label("LONDON", Some("london"), "England", None), "LONDON, England");
}
