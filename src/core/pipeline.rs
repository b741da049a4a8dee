//! # View Pipeline
//!
//! Pure function from (entries, selection) to the ordered rows the UI shows.
//!
//! ```text
//! entries ──► filter ──► sort ──► project ──► Vec<Row>
//!               ▲          ▲
//!     category/search   sort_method
//! ```
//!
//! The filter stage never yields an empty list: when the filters match
//! nothing (or no filter is set) the full entry set comes back unfiltered.
//! This fallback is product behavior and is kept as-is.

use crate::core::selection::{SelectionState, SortMethod};
use crate::directory::Entry;

/// Display projection of an [`Entry`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub name: String,
    pub category: String,
    pub description: String,
    pub link: String,
}

impl From<&Entry> for Row {
    fn from(entry: &Entry) -> Self {
        Self {
            name: entry.name.clone(),
            category: entry.category.clone(),
            description: entry.description.clone(),
            link: entry.link.clone(),
        }
    }
}

/// Runs the full pipeline.
pub fn shape_rows(entries: &[Entry], selection: &SelectionState) -> Vec<Row> {
    let mut filtered = filter_entries(entries, selection);
    sort_entries(&mut filtered, selection.sort_method);
    filtered.into_iter().map(Row::from).collect()
}

fn contains_ignore_case(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

/// Filter stage.
///
/// A search without a category (or with a category that matched nothing)
/// runs against the full set; otherwise it narrows the category matches.
pub fn filter_entries<'a>(entries: &'a [Entry], selection: &SelectionState) -> Vec<&'a Entry> {
    let mut filtered: Vec<&Entry> = Vec::new();

    if let Some(category) = selection.category() {
        let needle = category.to_lowercase();
        filtered = entries
            .iter()
            .filter(|e| contains_ignore_case(&e.category, &needle))
            .collect();
    }

    if let Some(search) = selection.search() {
        let needle = search.to_lowercase();
        filtered = if filtered.is_empty() {
            entries
                .iter()
                .filter(|e| contains_ignore_case(&e.name, &needle))
                .collect()
        } else {
            filtered
                .into_iter()
                .filter(|e| contains_ignore_case(&e.name, &needle))
                .collect()
        };
    }

    if filtered.is_empty() {
        entries.iter().collect()
    } else {
        filtered
    }
}

/// Sort stage. Byte-wise string ordering; stable, so ties keep input order.
pub fn sort_entries(entries: &mut [&Entry], method: SortMethod) {
    match method {
        SortMethod::CategoryAsc => entries.sort_by(|a, b| a.category.cmp(&b.category)),
        SortMethod::CategoryDesc => entries.sort_by(|a, b| b.category.cmp(&a.category)),
        SortMethod::NameAsc => entries.sort_by(|a, b| a.name.cmp(&b.name)),
        SortMethod::NameDesc => entries.sort_by(|a, b| b.name.cmp(&a.name)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{entry, sample_entries};

    fn names(rows: &[Row]) -> Vec<&str> {
        rows.iter().map(|r| r.name.as_str()).collect()
    }

    fn select(category: Option<&str>, search: Option<&str>, sort: SortMethod) -> SelectionState {
        SelectionState {
            selected_category: category.map(str::to_string),
            search_text: search.map(str::to_string),
            sort_method: sort,
        }
    }

    #[test]
    fn test_category_filter_is_case_insensitive_substring() {
        let entries = sample_entries();
        let rows = shape_rows(&entries, &select(Some("animals"), None, SortMethod::NameAsc));
        assert_eq!(names(&rows), vec!["Cat Facts", "Dog API"]);
    }

    #[test]
    fn test_category_filter_matches_partial_category() {
        let entries = vec![
            entry("A", "Open Data"),
            entry("B", "Data Validation"),
            entry("C", "Weather"),
        ];
        let rows = shape_rows(&entries, &select(Some("DATA"), None, SortMethod::NameAsc));
        assert_eq!(names(&rows), vec!["A", "B"]);
        for row in &rows {
            assert!(row.category.to_lowercase().contains("data"));
        }
    }

    #[test]
    fn test_absent_category_falls_back_to_everything() {
        let entries = sample_entries();
        let rows = shape_rows(&entries, &select(Some("nonexistent"), None, SortMethod::NameAsc));
        assert_eq!(rows.len(), 3);
        assert_eq!(names(&rows), vec!["Cat Facts", "Dog API", "Zip Lookup"]);
    }

    #[test]
    fn test_no_filters_returns_everything() {
        let entries = sample_entries();
        let rows = shape_rows(&entries, &SelectionState::default());
        assert_eq!(rows.len(), entries.len());
    }

    #[test]
    fn test_empty_entry_set_yields_no_rows() {
        let rows = shape_rows(&[], &select(Some("animals"), Some("cat"), SortMethod::NameAsc));
        assert!(rows.is_empty());
    }

    #[test]
    fn test_search_without_category_searches_full_set() {
        let entries = sample_entries();
        let rows = shape_rows(&entries, &select(None, Some("zip"), SortMethod::NameAsc));
        assert_eq!(names(&rows), vec!["Zip Lookup"]);
    }

    #[test]
    fn test_search_with_category_narrows_within_category() {
        let entries = vec![
            entry("Dog API", "Animals"),
            entry("Cat Facts", "Animals"),
            entry("Dog Geocoder", "Geocoding"),
        ];
        let rows = shape_rows(&entries, &select(Some("animals"), Some("dog"), SortMethod::NameAsc));
        assert_eq!(names(&rows), vec!["Dog API"]);
    }

    #[test]
    fn test_search_after_empty_category_match_uses_full_set() {
        let entries = sample_entries();
        let rows = shape_rows(&entries, &select(Some("nonexistent"), Some("dog"), SortMethod::NameAsc));
        assert_eq!(names(&rows), vec!["Dog API"]);
    }

    #[test]
    fn test_search_matching_nothing_within_category_falls_back() {
        let entries = sample_entries();
        let rows = shape_rows(&entries, &select(Some("animals"), Some("zzz"), SortMethod::NameAsc));
        assert_eq!(rows.len(), 3);
    }

    #[test]
    fn test_search_is_on_name_only() {
        let entries = sample_entries();
        // "Geocoding" is a category, not a name; no name matches so everything comes back
        let rows = shape_rows(&entries, &select(None, Some("geocoding"), SortMethod::NameAsc));
        assert_eq!(rows.len(), 3);
    }

    #[test]
    fn test_name_asc_and_desc_are_reversed() {
        let entries = vec![
            entry("Mango", "Food"),
            entry("apple", "Food"),
            entry("Banana", "Food"),
            entry("Zebra", "Animals"),
        ];
        let asc = shape_rows(&entries, &select(None, None, SortMethod::NameAsc));
        let desc = shape_rows(&entries, &select(None, None, SortMethod::NameDesc));
        let mut reversed = names(&desc);
        reversed.reverse();
        assert_eq!(names(&asc), reversed);
        // Raw byte ordering: uppercase sorts before lowercase
        assert_eq!(names(&asc), vec!["Banana", "Mango", "Zebra", "apple"]);
    }

    #[test]
    fn test_category_sorts() {
        let entries = sample_entries();
        let asc = shape_rows(&entries, &select(None, None, SortMethod::CategoryAsc));
        assert_eq!(asc.last().map(|r| r.category.as_str()), Some("Geocoding"));
        let desc = shape_rows(&entries, &select(None, None, SortMethod::CategoryDesc));
        assert_eq!(desc.first().map(|r| r.category.as_str()), Some("Geocoding"));
    }

    #[test]
    fn test_category_sort_is_stable_for_ties() {
        let entries = vec![
            entry("Second", "Animals"),
            entry("First", "Animals"),
            entry("Other", "Books"),
        ];
        let asc = shape_rows(&entries, &select(None, None, SortMethod::CategoryAsc));
        assert_eq!(names(&asc), vec!["Second", "First", "Other"]);
        let desc = shape_rows(&entries, &select(None, None, SortMethod::CategoryDesc));
        assert_eq!(names(&desc), vec!["Other", "Second", "First"]);
    }

    #[test]
    fn test_projection_copies_fields_verbatim() {
        let entries = sample_entries();
        let rows = shape_rows(&entries, &select(None, None, SortMethod::NameAsc));
        for row in &rows {
            let source = entries.iter().find(|e| e.name == row.name).unwrap();
            assert_eq!(row.category, source.category);
            assert_eq!(row.description, source.description);
            assert_eq!(row.link, source.link);
        }
    }

    #[test]
    fn test_rows_are_always_drawn_from_source() {
        let entries = sample_entries();
        for sort in SortMethod::ALL {
            for category in [None, Some("animals"), Some("x")] {
                for search in [None, Some("a"), Some("q")] {
                    let rows = shape_rows(&entries, &select(category, search, sort));
                    assert!(!rows.is_empty());
                    for row in &rows {
                        assert!(entries.iter().any(|e| Row::from(e) == *row));
                    }
                }
            }
        }
    }

    #[test]
    fn test_animals_scenario() {
        let entries = sample_entries();
        let selection = select(Some("animals"), None, SortMethod::NameAsc);
        let filtered = filter_entries(&entries, &selection);
        assert_eq!(filtered.len(), 2);
        assert_eq!(names(&shape_rows(&entries, &selection)), vec!["Cat Facts", "Dog API"]);
    }
}
