//! List filtering for the catalogue pages.
//!
//! Every pass rescans the whole (small, fixed) collection: a facet match
//! (category or status), a tag match and a case-insensitive substring match
//! over a couple of text fields, all combined with AND.

use serde::{Deserialize, Serialize};

use crate::models::{BlogPost, Note, Product, Project};

/// Facet values that mean "no facet filter".
const ALL_FACETS: [&str; 2] = ["all", "All Products"];

/// Something a [`ListFilter`] can narrow.
pub trait Filterable {
    /// Category or status value matched against the facet filter.
    fn facet(&self) -> &str;

    /// Text fields searched by the free-text query.
    fn search_fields(&self) -> [&str; 2];

    /// Tags matched against the selected tag set.
    fn tags(&self) -> &[String] {
        &[]
    }
}

impl Filterable for Product {
    fn facet(&self) -> &str {
        self.category.slug()
    }

    fn search_fields(&self) -> [&str; 2] {
        [&self.name, &self.description]
    }
}

impl Filterable for BlogPost {
    fn facet(&self) -> &str {
        &self.category
    }

    fn search_fields(&self) -> [&str; 2] {
        [&self.title, &self.excerpt]
    }

    fn tags(&self) -> &[String] {
        &self.tags
    }
}

impl Filterable for Note {
    fn facet(&self) -> &str {
        &self.category
    }

    fn search_fields(&self) -> [&str; 2] {
        [&self.title, &self.excerpt]
    }

    fn tags(&self) -> &[String] {
        &self.tags
    }
}

impl Filterable for Project {
    fn facet(&self) -> &str {
        self.status.as_str()
    }

    fn search_fields(&self) -> [&str; 2] {
        [&self.title, &self.description]
    }

    fn tags(&self) -> &[String] {
        &self.tags
    }
}

/// Query parameters accepted by every filterable listing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FilterQuery {
    /// Free-text query.
    #[serde(default)]
    pub q: Option<String>,
    /// Category slug, or status for projects.
    #[serde(default, alias = "status")]
    pub category: Option<String>,
    /// Comma separated tag list.
    #[serde(default)]
    pub tags: Option<String>,
}

/// The active filter state for one listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ListFilter {
    pub facet: Option<String>,
    pub query: String,
    pub tags: Vec<String>,
}

impl ListFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_facet(mut self, facet: impl Into<String>) -> Self {
        let facet = facet.into();
        self.facet = if facet.is_empty() || ALL_FACETS.contains(&facet.as_str()) {
            None
        } else {
            Some(facet)
        };
        self
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// True when no filter is active.
    pub fn is_unfiltered(&self) -> bool {
        self.facet.is_none() && self.query.is_empty() && self.tags.is_empty()
    }

    /// Whether a single item passes every active filter.
    pub fn matches<T: Filterable>(&self, item: &T) -> bool {
        self.matches_facet(item) && self.matches_query(item) && self.matches_tags(item)
    }

    fn matches_facet<T: Filterable>(&self, item: &T) -> bool {
        self.facet.as_deref().map_or(true, |facet| item.facet() == facet)
    }

    fn matches_query<T: Filterable>(&self, item: &T) -> bool {
        // Matched verbatim: padding is part of the needle
        if self.query.is_empty() {
            return true;
        }
        let needle = self.query.to_lowercase();
        item.search_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }

    fn matches_tags<T: Filterable>(&self, item: &T) -> bool {
        self.tags.is_empty() || self.tags.iter().any(|tag| item.tags().contains(tag))
    }

    /// Filter a collection, keeping source order. The source is untouched.
    pub fn apply<'a, T: Filterable>(&self, items: &'a [T]) -> Filtered<'a, T> {
        Filtered {
            items: items.iter().filter(|item| self.matches(*item)).collect(),
            total: items.len(),
        }
    }
}

impl From<FilterQuery> for ListFilter {
    fn from(query: FilterQuery) -> Self {
        let tags = query
            .tags
            .as_deref()
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|t| !t.is_empty())
                    .map(str::to_string)
                    .collect::<Vec<_>>()
            })
            .unwrap_or_default();

        ListFilter::new()
            .with_facet(query.category.unwrap_or_default())
            .with_query(query.q.unwrap_or_default())
            .with_tags(tags)
    }
}

/// Result of a filter pass.
#[derive(Debug)]
pub struct Filtered<'a, T> {
    pub items: Vec<&'a T>,
    /// Size of the unfiltered collection.
    pub total: usize,
}

impl<T> Filtered<'_, T> {
    /// Drives the explicit "no results" state.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::models::ProjectStatus;

    #[test]
    fn test_unfiltered_returns_everything() {
        let catalog = Catalog::seeded();
        let filtered = ListFilter::new().apply(catalog.products());
        assert_eq!(filtered.len(), catalog.products().len());
        assert_eq!(filtered.total, catalog.products().len());
    }

    #[test]
    fn test_all_facet_is_no_facet() {
        assert_eq!(ListFilter::new().with_facet("all").facet, None);
        assert_eq!(ListFilter::new().with_facet("All Products").facet, None);
        assert_eq!(ListFilter::new().with_facet("").facet, None);
        assert!(ListFilter::new().with_facet("all").is_unfiltered());
    }

    #[test]
    fn test_product_category_and_query_combine() {
        let catalog = Catalog::seeded();
        let filter = ListFilter::new().with_facet("sensors").with_query("MOTION");
        let filtered = filter.apply(catalog.products());

        let ids: Vec<u32> = filtered.items.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![8]);
        for product in &filtered.items {
            assert!(filter.matches(*product));
        }
    }

    #[test]
    fn test_query_searches_description_too() {
        let catalog = Catalog::seeded();
        let filtered = ListFilter::new()
            .with_query("home automation")
            .apply(catalog.products());
        let ids: Vec<u32> = filtered.items.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![3]);
    }

    #[test]
    fn test_whitespace_query_is_not_trimmed() {
        let catalog = Catalog::seeded();
        let filter = ListFilter::new().with_query("   ");
        assert!(!filter.is_unfiltered());
        assert!(filter.apply(catalog.products()).is_empty());

        let filtered = ListFilter::new()
            .with_query(" pi 5 (")
            .apply(catalog.products());
        let ids: Vec<u32> = filtered.items.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2]);
    }

    #[test]
    fn test_impossible_combination_is_empty() {
        let catalog = Catalog::seeded();
        let filtered = ListFilter::new()
            .with_facet("displays")
            .with_query("raspberry")
            .apply(catalog.products());
        assert!(filtered.is_empty());
        assert_eq!(filtered.total, catalog.products().len());
    }

    #[test]
    fn test_filtering_is_pure() {
        let catalog = Catalog::seeded();
        let before: Vec<u32> = catalog.products().iter().map(|p| p.id).collect();

        let filter = ListFilter::new().with_facet("microcontrollers");
        let first: Vec<u32> = filter.apply(catalog.products()).items.iter().map(|p| p.id).collect();
        let second: Vec<u32> = filter.apply(catalog.products()).items.iter().map(|p| p.id).collect();

        assert_eq!(first, second);
        let after: Vec<u32> = catalog.products().iter().map(|p| p.id).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_tags_match_any_selected() {
        let catalog = Catalog::seeded();
        let filtered = ListFilter::new()
            .with_tags(["MongoDB", "Algorithms"])
            .apply(catalog.projects());
        let titles: Vec<&str> = filtered.items.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["JavaScript Playground", "Next.js AppDir Template"]);
    }

    #[test]
    fn test_project_status_tags_and_query() {
        let catalog = Catalog::seeded();
        let filtered = ListFilter::new()
            .with_facet(ProjectStatus::InProgress.as_str())
            .with_tags(["Docker"])
            .with_query("linux")
            .apply(catalog.projects());
        let ids: Vec<u32> = filtered.items.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![6]);
    }

    #[test]
    fn test_notes_category_filter() {
        let catalog = Catalog::seeded();
        let filtered = ListFilter::new().with_facet("ai").apply(catalog.notes());
        let ids: Vec<u32> = filtered.items.iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![2, 4]);
    }

    #[test]
    fn test_from_query_parses_tags() {
        let filter = ListFilter::from(FilterQuery {
            q: Some("rust".to_string()),
            category: Some("all".to_string()),
            tags: Some("wasm, performance,,".to_string()),
        });
        assert_eq!(filter.facet, None);
        assert_eq!(filter.query, "rust");
        assert_eq!(filter.tags, vec!["wasm", "performance"]);
    }
}
