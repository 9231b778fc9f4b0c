//! Catalogue API endpoints.

use axum::extract::{Path, Query, State};
use serde::{Deserialize, Serialize};

use super::{error, success, ApiResult, Listing};
use crate::catalog::DEFAULT_RELATED_LIMIT;
use crate::errors::AppError;
use crate::filter::{FilterQuery, ListFilter};
use crate::markdown;
use crate::metadata;
use crate::models::{BlogPost, Note, Product, Project};
use crate::pages::product_filter;
use crate::AppState;

/// Upper bound for `?limit=` on related posts.
const MAX_RELATED_LIMIT: usize = 10;

/// A post with its rendered body.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostDetail {
    #[serde(flatten)]
    pub post: BlogPost,
    pub content_html: String,
    pub published_at: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RelatedQuery {
    pub limit: Option<usize>,
}

/// GET /api/products - Filter by `category` (slug or label) and `q`.
pub async fn list_products(
    State(state): State<AppState>,
    Query(query): Query<FilterQuery>,
) -> ApiResult<Listing<Product>> {
    let filter = product_filter(query);
    success(filter.apply(state.catalog.products()).into())
}

/// GET /api/posts - Filter by `category`, `tags` and `q`.
pub async fn list_posts(
    State(state): State<AppState>,
    Query(query): Query<FilterQuery>,
) -> ApiResult<Listing<BlogPost>> {
    let filter = ListFilter::from(query);
    success(filter.apply(state.catalog.posts()).into())
}

/// GET /api/posts/{slug}
pub async fn get_post(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> ApiResult<PostDetail> {
    match state.catalog.get_post_by_slug(&slug) {
        Some(post) => success(PostDetail {
            content_html: markdown::render(&post.content),
            published_at: metadata::published_at(&post.date),
            post: post.clone(),
        }),
        None => error(AppError::NotFound(format!("Post not found: {}", slug))),
    }
}

/// GET /api/posts/{slug}/related
pub async fn get_related_posts(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Query(query): Query<RelatedQuery>,
) -> ApiResult<Vec<BlogPost>> {
    if state.catalog.get_post_by_slug(&slug).is_none() {
        return error(AppError::NotFound(format!("Post not found: {}", slug)));
    }

    let limit = query.limit.unwrap_or(DEFAULT_RELATED_LIMIT);
    if limit > MAX_RELATED_LIMIT {
        return error(AppError::BadRequest(format!(
            "limit must be at most {}",
            MAX_RELATED_LIMIT
        )));
    }

    success(
        state
            .catalog
            .get_related_posts(&slug, limit)
            .into_iter()
            .cloned()
            .collect(),
    )
}

/// GET /api/notes - Filter by `category`, `tags` and `q`.
pub async fn list_notes(
    State(state): State<AppState>,
    Query(query): Query<FilterQuery>,
) -> ApiResult<Listing<Note>> {
    let filter = ListFilter::from(query);
    success(filter.apply(state.catalog.notes()).into())
}

/// GET /api/projects - Filter by `status`, `tags` and `q`.
pub async fn list_projects(
    State(state): State<AppState>,
    Query(query): Query<FilterQuery>,
) -> ApiResult<Listing<Project>> {
    let filter = ListFilter::from(query);
    success(filter.apply(state.catalog.projects()).into())
}
