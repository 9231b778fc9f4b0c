//! In-memory content catalogue.
//!
//! Every collection is built once at startup and never mutated; lookups are
//! linear scans over small fixed-size vectors.

mod posts;
mod seed;

pub use seed::NOTE_CATEGORIES;

use std::collections::HashMap;

use crate::models::{Activity, BlogPost, CategoryCount, Note, Product, Project, WipItem};

/// Number of related posts shown under an article.
pub const DEFAULT_RELATED_LIMIT: usize = 3;

/// Read-only store for all site content.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
    posts: Vec<BlogPost>,
    notes: Vec<Note>,
    projects: Vec<Project>,
    wip_items: Vec<WipItem>,
    activity: Vec<Activity>,
}

impl Catalog {
    /// Build the catalogue from the compiled-in collections.
    pub fn seeded() -> Self {
        let catalog = Self {
            products: seed::products(),
            posts: posts::blog_posts(),
            notes: seed::notes(),
            projects: seed::projects(),
            wip_items: seed::wip_items(),
            activity: seed::recent_activity(),
        };

        tracing::debug!(
            products = catalog.products.len(),
            posts = catalog.posts.len(),
            notes = catalog.notes.len(),
            projects = catalog.projects.len(),
            "Catalog loaded"
        );

        catalog
    }

    // ==================== PRODUCTS ====================

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Products flagged for the home page hero.
    pub fn featured_products(&self) -> Vec<&Product> {
        self.products.iter().filter(|p| p.featured).collect()
    }

    // ==================== BLOG ====================

    pub fn posts(&self) -> &[BlogPost] {
        &self.posts
    }

    /// Look up a post by slug. Unknown slugs yield `None`.
    pub fn get_post_by_slug(&self, slug: &str) -> Option<&BlogPost> {
        self.posts.iter().find(|post| post.slug == slug)
    }

    /// Posts sharing a category or at least one tag with `current_slug`,
    /// excluding the post itself, in catalogue order, at most `limit`.
    pub fn get_related_posts(&self, current_slug: &str, limit: usize) -> Vec<&BlogPost> {
        let Some(current) = self.get_post_by_slug(current_slug) else {
            return Vec::new();
        };

        self.posts
            .iter()
            .filter(|post| post.slug != current_slug)
            .filter(|post| {
                post.category == current.category
                    || post.tags.iter().any(|tag| current.tags.contains(tag))
            })
            .take(limit)
            .collect()
    }

    /// Blog categories with live post counts, in first-seen order.
    pub fn blog_categories(&self) -> Vec<CategoryCount> {
        let mut counts: Vec<CategoryCount> = Vec::new();
        for post in &self.posts {
            match counts.iter_mut().find(|c| c.slug == post.category) {
                Some(entry) => entry.count += 1,
                None => counts.push(CategoryCount {
                    slug: post.category.clone(),
                    count: 1,
                }),
            }
        }
        counts
    }

    /// Most used post tags, most frequent first, ties alphabetical.
    pub fn popular_tags(&self, limit: usize) -> Vec<String> {
        let mut frequency: HashMap<&str, usize> = HashMap::new();
        for tag in self.posts.iter().flat_map(|p| p.tags.iter()) {
            *frequency.entry(tag.as_str()).or_default() += 1;
        }

        let mut tags: Vec<(&str, usize)> = frequency.into_iter().collect();
        tags.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        tags.into_iter()
            .take(limit)
            .map(|(tag, _)| tag.to_string())
            .collect()
    }

    // ==================== NOTES & PROJECTS ====================

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// Distinct note tags in first-seen order.
    pub fn note_tags(&self) -> Vec<String> {
        distinct(self.notes.iter().flat_map(|n| n.tags.iter()))
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// Distinct project tags in first-seen order.
    pub fn project_tags(&self) -> Vec<String> {
        distinct(self.projects.iter().flat_map(|p| p.tags.iter()))
    }

    // ==================== WORKBENCH ====================

    pub fn wip_items(&self) -> &[WipItem] {
        &self.wip_items
    }

    pub fn recent_activity(&self) -> &[Activity] {
        &self.activity
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::seeded()
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a String>) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for value in values {
        if !seen.contains(value) {
            seen.push(value.clone());
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_ids_and_slugs_unique() {
        let catalog = Catalog::seeded();

        let product_ids: HashSet<u32> = catalog.products().iter().map(|p| p.id).collect();
        assert_eq!(product_ids.len(), catalog.products().len());

        let slugs: HashSet<&str> = catalog.posts().iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs.len(), catalog.posts().len());
    }

    #[test]
    fn test_slugs_are_url_safe() {
        let catalog = Catalog::seeded();
        for post in catalog.posts() {
            assert!(
                post.slug
                    .chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'),
                "slug {} is not URL-safe",
                post.slug
            );
        }
    }

    #[test]
    fn test_get_post_by_slug_known_and_unknown() {
        let catalog = Catalog::seeded();

        for post in catalog.posts() {
            let found = catalog.get_post_by_slug(&post.slug).unwrap();
            assert_eq!(found.id, post.id);
        }

        assert!(catalog.get_post_by_slug("no-such-post").is_none());
        assert!(catalog.get_post_by_slug("").is_none());
    }

    #[test]
    fn test_related_posts_rules() {
        let catalog = Catalog::seeded();

        for current in catalog.posts() {
            let related = catalog.get_related_posts(&current.slug, DEFAULT_RELATED_LIMIT);
            assert!(related.len() <= DEFAULT_RELATED_LIMIT);

            let mut seen = HashSet::new();
            for post in &related {
                assert_ne!(post.slug, current.slug);
                assert!(seen.insert(post.slug.as_str()), "duplicate related post");
                assert!(
                    post.category == current.category
                        || post.tags.iter().any(|t| current.tags.contains(t))
                );
            }
        }
    }

    #[test]
    fn test_related_posts_for_ai_post() {
        let catalog = Catalog::seeded();

        let related = catalog.get_related_posts("mcp-protocol-llm-applications", 3);
        let slugs: Vec<&str> = related.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, vec!["self-hosting-llms-fastapi"]);
    }

    #[test]
    fn test_related_posts_respects_limit_and_unknown_slug() {
        let catalog = Catalog::seeded();

        assert_eq!(catalog.get_related_posts("rust-wasm-performance", 0).len(), 0);
        assert!(catalog.get_related_posts("missing", 3).is_empty());
    }

    #[test]
    fn test_blog_categories_counts() {
        let catalog = Catalog::seeded();
        let categories = catalog.blog_categories();

        let total: usize = categories.iter().map(|c| c.count).sum();
        assert_eq!(total, catalog.posts().len());

        let ai = categories.iter().find(|c| c.slug == "ai").unwrap();
        assert_eq!(ai.count, 2);
    }

    #[test]
    fn test_popular_tags_ordering() {
        let catalog = Catalog::seeded();
        let tags = catalog.popular_tags(2);

        // "llm" is the only tag used by two posts
        assert_eq!(tags.len(), 2);
        assert_eq!(tags[0], "llm");
    }

    #[test]
    fn test_featured_products() {
        let catalog = Catalog::seeded();
        let featured: Vec<u32> = catalog.featured_products().iter().map(|p| p.id).collect();
        assert_eq!(featured, vec![1, 2, 6, 7]);
    }

    #[test]
    fn test_distinct_tags_preserve_order() {
        let catalog = Catalog::seeded();
        let tags = catalog.note_tags();
        assert_eq!(&tags[..3], &["Linux", "Shell", "Docker"]);
        assert_eq!(tags.iter().filter(|t| *t == "Docker").count(), 1);
    }
}
