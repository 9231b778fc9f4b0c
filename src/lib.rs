//! RS Makes site server
//!
//! Storefront, blog, lab notes and portfolio for Ryan Sharma, served as
//! server-rendered HTML with a small read-only JSON API. The [`theme`]
//! module also carries the client-side palette synchroniser.

pub mod api;
pub mod catalog;
pub mod config;
pub mod errors;
pub mod filter;
pub mod markdown;
pub mod metadata;
pub mod models;
pub mod pages;
pub mod templates;
pub mod theme;

use std::sync::Arc;

use axum::{routing::get, Router};
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use catalog::Catalog;
use config::Config;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub config: Arc<Config>,
}

/// Create the application router with all routes.
pub fn create_router(state: AppState) -> Router {
    // API routes
    let api_routes = Router::new()
        // Store
        .route("/products", get(api::list_products))
        // Blog
        .route("/posts", get(api::list_posts))
        .route("/posts/{slug}", get(api::get_post))
        .route("/posts/{slug}/related", get(api::get_related_posts))
        // Portfolio
        .route("/notes", get(api::list_notes))
        .route("/projects", get(api::list_projects))
        // Palettes
        .route("/themes", get(api::list_themes))
        .route("/themes/{name}", get(api::get_theme))
        .fallback(api::not_found);

    // HTML pages
    let page_routes = Router::new()
        .route("/", get(pages::home))
        .route("/blog", get(pages::blog_index))
        .route("/blog/{slug}", get(pages::blog_post))
        .route("/notes", get(pages::notes))
        .route("/projects", get(pages::projects))
        .route("/workbench", get(pages::workbench))
        .route("/introduction", get(pages::introduction))
        .route("/theme.css", get(pages::theme_css));

    let health_routes = Router::new().route("/health", get(health_check));

    let public_dir = ServeDir::new(&state.config.public_dir);

    Router::new()
        .merge(page_routes)
        .nest("/api", api_routes)
        .merge(health_routes)
        .nest_service("/public", public_dir)
        .fallback(pages::not_found)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CatchPanicLayer::custom(pages::handle_panic)),
        )
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}
