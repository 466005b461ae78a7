//! Domain-specific assertion macros for roster harnesses.
//!
//! These add context-rich failure messages that make it clear *which* result
//! set invariant was violated.

use roster_core::{search::searchable_fields, Entity, Hit, ResultSet};

// ---------------------------------------------------------------------------
// Result set assertions
// ---------------------------------------------------------------------------

/// Assert the names in each group of a `ResultSet`, in order.
///
/// ```rust
/// assert_groups!(results, people: ["Tresor Manock"], vehicles: ["Truck #237"]);
/// ```
#[macro_export]
macro_rules! assert_groups {
    ($results:expr, people: [$($p:expr),* $(,)?], vehicles: [$($v:expr),* $(,)?]) => {{
        let results: &roster_core::ResultSet = &$results;
        let people: Vec<&str> = results.people.hits.iter().map(|h| h.entity.name()).collect();
        let vehicles: Vec<&str> = results.vehicles.hits.iter().map(|h| h.entity.name()).collect();
        let expected_people: Vec<&str> = vec![$($p),*];
        let expected_vehicles: Vec<&str> = vec![$($v),*];
        if people != expected_people || vehicles != expected_vehicles {
            panic!(
                "assert_groups! failed:\n  people   expected {:?}\n           actual   {:?}\n  vehicles expected {:?}\n           actual   {:?}",
                expected_people, people, expected_vehicles, vehicles
            );
        }
    }};
}

/// Assert that a `ResultSet` has no hits in either group.
#[macro_export]
macro_rules! assert_no_results {
    ($results:expr) => {{
        let results: &roster_core::ResultSet = &$results;
        if !results.is_empty() {
            panic!(
                "assert_no_results! failed: {} people, {} vehicles",
                results.people.count(),
                results.vehicles.count()
            );
        }
    }};
}

// ---------------------------------------------------------------------------
// Invariant helpers
// ---------------------------------------------------------------------------

/// All hits of a result set, people first.
pub fn all_hits(results: &ResultSet) -> impl Iterator<Item = &Hit> {
    results.people.hits.iter().chain(results.vehicles.hits.iter())
}

/// Whether any searchable field of `entity` contains `query`, compared
/// case-insensitively. Independent oracle for the search engine.
pub fn oracle_matches(entity: &Entity, query: &str) -> bool {
    let needle = query.to_lowercase();
    searchable_fields(entity)
        .into_iter()
        .any(|(_, text)| text.to_lowercase().contains(&needle))
}

/// Every field highlight, concatenated, reproduces the field text exactly.
pub fn assert_spans_reassemble(hit: &Hit) {
    for (field, text) in searchable_fields(&hit.entity) {
        if let Some(spans) = hit.highlight(field) {
            let joined: String = spans.iter().map(|s| s.text.as_str()).collect();
            assert_eq!(joined, text, "spans for {field:?} do not reassemble the field");
            assert!(
                spans.iter().all(|s| !s.text.is_empty()),
                "empty span in {field:?}: {spans:?}"
            );
        }
    }
}
