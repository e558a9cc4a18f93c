//! # The View Engine
//!
//! Pure projections over the journal's collection: filtering, sorting,
//! and the facet sets that back the filter options. Nothing here mutates
//! state, and every call recomputes from scratch; at tens to low hundreds
//! of records, full recomputation is cheaper to get right than
//! incremental updates.

use crate::model::Coffee;
use std::cmp::Ordering;
use std::collections::BTreeSet;

/// Filter specification. An empty string means "no constraint" for that
/// field, so the default filter passes everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filters {
    /// Case-insensitive substring match against name or notes.
    pub search: String,
    /// Case-insensitive substring match against origin.
    pub origin: String,
    /// Case-insensitive substring match against roaster.
    pub roaster: String,
    /// Exact text match against the decimal rendering of the year.
    pub year: String,
}

impl Filters {
    pub fn is_active(&self) -> bool {
        *self != Self::default()
    }

    /// A record passes iff every active constraint holds.
    pub fn matches(&self, coffee: &Coffee) -> bool {
        let matches_search = self.search.is_empty() || {
            let term = self.search.to_lowercase();
            coffee.name.to_lowercase().contains(&term)
                || coffee.notes.to_lowercase().contains(&term)
        };
        let matches_origin = self.origin.is_empty()
            || coffee
                .origin
                .to_lowercase()
                .contains(&self.origin.to_lowercase());
        let matches_roaster = self.roaster.is_empty()
            || coffee
                .roaster
                .to_lowercase()
                .contains(&self.roaster.to_lowercase());
        let matches_year = self.year.is_empty() || coffee.year.to_string() == self.year;

        matches_search && matches_origin && matches_roaster && matches_year
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Newest,
    Oldest,
    Rating,
    Name,
}

/// Filter then sort, returning references in projection order.
/// The sort is stable: records that compare equal keep their relative
/// order from the collection.
pub fn project<'a>(coffees: &'a [Coffee], filters: &Filters, sort: SortOrder) -> Vec<&'a Coffee> {
    let mut result: Vec<&Coffee> = coffees.iter().filter(|c| filters.matches(c)).collect();

    result.sort_by(|a, b| match sort {
        SortOrder::Newest => b.date.cmp(&a.date),
        SortOrder::Oldest => a.date.cmp(&b.date),
        SortOrder::Rating => b.rating.partial_cmp(&a.rating).unwrap_or(Ordering::Equal),
        // Unicode-lowercase comparison approximates locale collation,
        // tie-broken on the raw string so ordering stays total.
        SortOrder::Name => a
            .name
            .to_lowercase()
            .cmp(&b.name.to_lowercase())
            .then_with(|| a.name.cmp(&b.name)),
    });

    result
}

/// Distinct-value indexes used to populate filter options.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Facets {
    /// Distinct origins, ascending.
    pub origins: Vec<String>,
    /// Distinct roasters, ascending.
    pub roasters: Vec<String>,
    /// Distinct harvest years, most recent first.
    pub years: Vec<i32>,
}

/// Derive facets from the FULL collection, never the filtered view, so
/// the filter options always offer every known value.
pub fn facets(coffees: &[Coffee]) -> Facets {
    let origins: BTreeSet<&str> = coffees.iter().map(|c| c.origin.as_str()).collect();
    let roasters: BTreeSet<&str> = coffees.iter().map(|c| c.roaster.as_str()).collect();
    let years: BTreeSet<i32> = coffees.iter().map(|c| c.year).collect();

    Facets {
        origins: origins.into_iter().map(str::to_string).collect(),
        roasters: roasters.into_iter().map(str::to_string).collect(),
        years: years.into_iter().rev().collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::coffee;

    fn collection() -> Vec<Coffee> {
        // T2 > T1: Yirgacheffe is newer than Sidra.
        let mut sidra = coffee("c1", "Sidra", 1);
        sidra.origin = "Colombia".to_string();
        sidra.year = 2023;
        sidra.rating = 4.5;
        sidra.notes = "Stone fruit".to_string();

        let mut yirga = coffee("c2", "Yirgacheffe", 2);
        yirga.origin = "Ethiopia".to_string();
        yirga.roaster = "Nomad".to_string();
        yirga.year = 2022;
        yirga.rating = 5.0;
        yirga.notes = "Jasmine".to_string();

        vec![sidra, yirga]
    }

    #[test]
    fn default_filters_are_inactive() {
        assert!(!Filters::default().is_active());
        let filters = Filters {
            year: "2022".to_string(),
            ..Default::default()
        };
        assert!(filters.is_active());
    }

    #[test]
    fn empty_filters_pass_everything() {
        let coffees = collection();
        let result = project(&coffees, &Filters::default(), SortOrder::Newest);
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn year_filter_with_rating_sort_selects_exactly_one() {
        let coffees = collection();
        let filters = Filters {
            year: "2022".to_string(),
            ..Default::default()
        };
        let result = project(&coffees, &filters, SortOrder::Rating);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "Yirgacheffe");
    }

    #[test]
    fn search_is_case_insensitive_over_name() {
        let coffees = collection();
        let filters = Filters {
            search: "sidra".to_string(),
            ..Default::default()
        };
        let result = project(&coffees, &filters, SortOrder::Newest);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "Sidra");
    }

    #[test]
    fn search_also_matches_notes() {
        let coffees = collection();
        let filters = Filters {
            search: "JASMINE".to_string(),
            ..Default::default()
        };
        let result = project(&coffees, &filters, SortOrder::Newest);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "Yirgacheffe");
    }

    #[test]
    fn origin_filter_matches_substrings() {
        let coffees = collection();
        let filters = Filters {
            origin: "colom".to_string(),
            ..Default::default()
        };
        let result = project(&coffees, &filters, SortOrder::Newest);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].origin, "Colombia");
    }

    #[test]
    fn year_filter_is_exact_text() {
        let coffees = collection();
        let filters = Filters {
            year: "202".to_string(),
            ..Default::default()
        };
        assert!(project(&coffees, &filters, SortOrder::Newest).is_empty());
    }

    #[test]
    fn all_active_predicates_must_hold() {
        let coffees = collection();
        let filters = Filters {
            search: "jasmine".to_string(),
            origin: "colombia".to_string(),
            ..Default::default()
        };
        assert!(project(&coffees, &filters, SortOrder::Newest).is_empty());
    }

    #[test]
    fn newest_and_oldest_are_inverse_orders() {
        let coffees = collection();
        let newest = project(&coffees, &Filters::default(), SortOrder::Newest);
        let oldest = project(&coffees, &Filters::default(), SortOrder::Oldest);
        assert_eq!(newest[0].name, "Yirgacheffe");
        assert_eq!(oldest[0].name, "Sidra");
    }

    #[test]
    fn rating_sorts_descending() {
        let coffees = collection();
        let result = project(&coffees, &Filters::default(), SortOrder::Rating);
        assert_eq!(result[0].name, "Yirgacheffe");
        assert_eq!(result[1].name, "Sidra");
    }

    #[test]
    fn name_sort_is_case_insensitive_ascending() {
        let mut coffees = collection();
        coffees.push(coffee("c3", "aricha", 3));
        let result = project(&coffees, &Filters::default(), SortOrder::Name);
        let names: Vec<&str> = result.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["aricha", "Sidra", "Yirgacheffe"]);
    }

    #[test]
    fn name_sort_keeps_duplicate_names_in_input_order() {
        let coffees = vec![
            coffee("first", "Sidra", 1),
            coffee("second", "Sidra", 2),
            coffee("third", "Sidra", 3),
        ];
        let result = project(&coffees, &Filters::default(), SortOrder::Name);
        let ids: Vec<&str> = result.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["first", "second", "third"]);
    }

    #[test]
    fn facets_cover_the_full_collection() {
        let coffees = collection();
        let facets = facets(&coffees);
        assert_eq!(facets.origins, vec!["Colombia", "Ethiopia"]);
        assert!(facets.roasters.contains(&"Nomad".to_string()));
        assert_eq!(facets.years, vec![2023, 2022]);
    }

    #[test]
    fn facets_of_empty_collection_are_empty() {
        let facets = facets(&[]);
        assert!(facets.origins.is_empty());
        assert!(facets.roasters.is_empty());
        assert!(facets.years.is_empty());
    }
}
