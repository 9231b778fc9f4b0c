//! Blog index and article pages.

use axum::{
    extract::{Path, Query, State},
    response::Html,
};
use serde::Serialize;

use crate::catalog::DEFAULT_RELATED_LIMIT;
use crate::errors::AppError;
use crate::filter::{FilterQuery, ListFilter};
use crate::markdown;
use crate::metadata::{self, StaticPage};
use crate::models::{BlogPost, CategoryCount};
use crate::AppState;

use super::{render_page, PaletteChoice};

const SIDEBAR_TAG_LIMIT: usize = 8;

#[derive(Serialize)]
struct BlogIndexPage<'a> {
    posts: Vec<&'a BlogPost>,
    categories: Vec<CategoryCount>,
    popular_tags: Vec<String>,
    filter: &'a ListFilter,
    no_results: bool,
}

#[derive(Serialize)]
struct BlogPostPage<'a> {
    post: &'a BlogPost,
    content_html: String,
    author_initials: String,
    published: Option<String>,
    related: Vec<&'a BlogPost>,
}

/// GET /blog
pub async fn blog_index(
    State(state): State<AppState>,
    palette: PaletteChoice,
    Query(query): Query<FilterQuery>,
) -> Result<Html<String>, AppError> {
    let filter = ListFilter::from(query);
    let filtered = filter.apply(state.catalog.posts());

    let page = BlogIndexPage {
        no_results: filtered.is_empty(),
        posts: filtered.items,
        categories: state.catalog.blog_categories(),
        popular_tags: state.catalog.popular_tags(SIDEBAR_TAG_LIMIT),
        filter: &filter,
    };

    let meta = metadata::for_page(StaticPage::Blog, &state.config.base_url)?;
    render_page("blog_index.html", &meta, "blog", palette, page)
}

/// GET /blog/{slug}
pub async fn blog_post(
    State(state): State<AppState>,
    palette: PaletteChoice,
    Path(slug): Path<String>,
) -> Result<Html<String>, AppError> {
    let post = state
        .catalog
        .get_post_by_slug(&slug)
        .ok_or_else(|| AppError::NotFound(format!("Post not found: {}", slug)))?;

    let page = BlogPostPage {
        post,
        content_html: markdown::render(&post.content),
        author_initials: post.author.initials(),
        published: metadata::published_at(&post.date),
        related: state.catalog.get_related_posts(&slug, DEFAULT_RELATED_LIMIT),
    };

    let meta = metadata::for_post(post, &state.config.base_url)?;
    render_page("blog_post.html", &meta, "blog", palette, page)
}
