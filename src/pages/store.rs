//! Storefront home page.

use axum::{
    extract::{Query, State},
    response::Html,
};
use serde::Serialize;

use crate::errors::AppError;
use crate::filter::{FilterQuery, ListFilter};
use crate::metadata::{self, StaticPage};
use crate::models::{Product, ProductCategory};
use crate::AppState;

use super::{render_page, PaletteChoice};

/// Product card data with the price already formatted.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCard<'a> {
    pub id: u32,
    pub name: &'a str,
    pub description: &'a str,
    pub price: String,
    pub image: &'a str,
    pub category: &'static str,
    pub in_stock: bool,
    pub featured: bool,
}

impl<'a> From<&'a Product> for ProductCard<'a> {
    fn from(product: &'a Product) -> Self {
        Self {
            id: product.id,
            name: &product.name,
            description: &product.description,
            price: product.display_price(),
            image: &product.image,
            category: product.category.as_str(),
            in_stock: product.in_stock,
            featured: product.featured,
        }
    }
}

#[derive(Debug, Serialize)]
struct CategoryOption {
    slug: &'static str,
    label: &'static str,
    active: bool,
}

#[derive(Serialize)]
struct HomePage<'a> {
    products: Vec<ProductCard<'a>>,
    featured: Vec<ProductCard<'a>>,
    categories: Vec<CategoryOption>,
    filter: &'a ListFilter,
    no_results: bool,
}

/// Accept either a category slug or its display label and normalise to the slug.
pub fn product_filter(query: FilterQuery) -> ListFilter {
    let mut filter = ListFilter::from(query);
    if let Some(category) = filter.facet.as_deref().and_then(ProductCategory::from_str) {
        filter.facet = Some(category.slug().to_string());
    }
    filter
}

/// GET / - hero, filterable product grid, about and shipping sections.
pub async fn home(
    State(state): State<AppState>,
    palette: PaletteChoice,
    Query(query): Query<FilterQuery>,
) -> Result<Html<String>, AppError> {
    let filter = product_filter(query);
    let filtered = filter.apply(state.catalog.products());
    if !filter.is_unfiltered() {
        tracing::debug!(
            shown = filtered.len(),
            total = filtered.total,
            "Filtered products"
        );
    }

    let categories = ProductCategory::ALL
        .into_iter()
        .map(|c| CategoryOption {
            slug: c.slug(),
            label: c.as_str(),
            active: filter.facet.as_deref() == Some(c.slug()),
        })
        .collect();

    let page = HomePage {
        no_results: filtered.is_empty(),
        products: filtered.items.iter().map(|p| ProductCard::from(*p)).collect(),
        featured: state
            .catalog
            .featured_products()
            .into_iter()
            .map(ProductCard::from)
            .collect(),
        categories,
        filter: &filter,
    };

    let meta = metadata::for_page(StaticPage::Home, &state.config.base_url)?;
    render_page("home.html", &meta, "home", palette, page)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_filter_accepts_label_or_slug() {
        let by_label = product_filter(FilterQuery {
            category: Some("Sensors & Modules".to_string()),
            ..Default::default()
        });
        let by_slug = product_filter(FilterQuery {
            category: Some("sensors".to_string()),
            ..Default::default()
        });
        assert_eq!(by_label.facet.as_deref(), Some("sensors"));
        assert_eq!(by_label, by_slug);
    }

    #[test]
    fn test_all_products_label_means_no_filter() {
        let filter = product_filter(FilterQuery {
            category: Some("All Products".to_string()),
            ..Default::default()
        });
        assert!(filter.is_unfiltered());
    }
}
