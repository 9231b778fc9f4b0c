//! Server-rendered HTML pages.
//!
//! Every page extends `base.html`, which expects the page metadata, the
//! active navigation section and the palette picker data next to the
//! page-specific context.

mod blog;
mod portfolio;
mod store;

pub use blog::*;
pub use portfolio::*;
pub use store::*;

use std::any::Any;
use std::convert::Infallible;

use axum::{
    extract::{FromRequestParts, Query, State},
    http::{header, request::Parts, HeaderMap, StatusCode},
    response::{Html, IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::metadata::{self, PageMeta};
use crate::templates;
use crate::theme::{self, ColorMode, Palette, STORAGE_KEY};
use crate::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PaletteOption {
    name: &'static str,
    label: &'static str,
    swatch: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ThemeContext {
    storage_key: &'static str,
    default_palette: &'static str,
    current: &'static str,
    palettes: Vec<PaletteOption>,
}

impl ThemeContext {
    fn new(current: Palette) -> Self {
        Self {
            storage_key: STORAGE_KEY,
            default_palette: Palette::DEFAULT.name(),
            current: current.name(),
            palettes: Palette::ALL
                .into_iter()
                .map(|p| PaletteOption {
                    name: p.name(),
                    label: p.label(),
                    swatch: p.swatch(),
                })
                .collect(),
        }
    }
}

/// The visitor's palette, mirrored from local storage into a cookie by
/// `public/theme.js` so the first paint already uses it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteChoice(pub Palette);

impl PaletteChoice {
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let palette = headers
            .get_all(header::COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .find_map(palette_from_cookie)
            .unwrap_or_default();
        Self(palette)
    }
}

/// Look up the palette cookie in a `Cookie` header. Invalid names are ignored.
fn palette_from_cookie(raw: &str) -> Option<Palette> {
    raw.split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == STORAGE_KEY)
        .and_then(|(_, value)| {
            let palette = Palette::from_name(value.trim());
            if palette.is_none() {
                tracing::debug!(value, "Ignoring invalid palette cookie");
            }
            palette
        })
}

impl<S: Send + Sync> FromRequestParts<S> for PaletteChoice {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self::from_headers(&parts.headers))
    }
}

/// Context shared by every page, with the page's own fields flattened in.
#[derive(Serialize)]
struct Layout<'a, T: Serialize> {
    meta: &'a PageMeta,
    section: &'static str,
    theme: ThemeContext,
    #[serde(flatten)]
    page: T,
}

/// Render a page template inside the site layout.
fn render_page<T: Serialize>(
    template: &str,
    meta: &PageMeta,
    section: &'static str,
    palette: PaletteChoice,
    page: T,
) -> Result<Html<String>, AppError> {
    let ctx = Layout {
        meta,
        section,
        theme: ThemeContext::new(palette.0),
        page,
    };
    Ok(Html(templates::render(template, ctx)?))
}

fn render_status_page(err: &AppError, base_url: &str) -> Result<String, AppError> {
    let (template, title) = match err {
        AppError::NotFound(_) => ("not_found.html", "Page not found"),
        _ => ("error.html", "Something went wrong"),
    };
    let meta = metadata::for_status_page(title, base_url);
    let ctx = Layout {
        meta: &meta,
        section: "",
        theme: ThemeContext::new(Palette::DEFAULT),
        page: (),
    };
    templates::render(template, ctx)
}

/// HTML response for an error: the not-found page for missing content,
/// the error page for everything else.
pub fn error_response(err: &AppError) -> Response {
    let status = err.status_code();
    match render_status_page(err, "") {
        Ok(html) => (status, Html(html)).into_response(),
        Err(render_err) => {
            tracing::error!("Failed to render error page: {}", render_err);
            (status, err.message()).into_response()
        }
    }
}

/// Fallback for unmatched routes.
pub async fn not_found(State(state): State<AppState>) -> Response {
    let err = AppError::NotFound("Page not found".to_string());
    match render_status_page(&err, &state.config.base_url) {
        Ok(html) => (StatusCode::NOT_FOUND, Html(html)).into_response(),
        Err(render_err) => render_err.into_response(),
    }
}

/// Error boundary for panics inside handlers.
pub fn handle_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };
    tracing::error!(panic = %detail, "Handler panicked");

    error_response(&AppError::Internal("Something went wrong".to_string()))
}

#[derive(Debug, Deserialize)]
pub struct ThemeQuery {
    pub palette: Option<String>,
    pub mode: Option<String>,
}

/// Palette custom properties as a stylesheet. Unknown palettes fall back to
/// the default; an unknown mode renders both modes.
pub async fn theme_css(Query(query): Query<ThemeQuery>) -> impl IntoResponse {
    let palette = match query.palette.as_deref() {
        None => Palette::DEFAULT,
        Some(name) => Palette::from_name(name).unwrap_or_else(|| {
            tracing::debug!(palette = name, "Unknown palette requested, using default");
            Palette::DEFAULT
        }),
    };
    let mode = query.mode.as_deref().and_then(ColorMode::from_name);

    (
        [(header::CONTENT_TYPE, "text/css; charset=utf-8")],
        theme::stylesheet(palette, mode),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_text(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[test]
    fn test_palette_cookie_lookup() {
        assert_eq!(palette_from_cookie("color-theme=cyan"), Some(Palette::Cyan));
        assert_eq!(
            palette_from_cookie("session=abc; color-theme=rose; other=1"),
            Some(Palette::Rose)
        );
        assert_eq!(palette_from_cookie("color-theme=plaid"), None);
        assert_eq!(palette_from_cookie("theme=cyan"), None);
    }

    #[test]
    fn test_palette_choice_defaults_without_cookie() {
        let mut headers = HeaderMap::new();
        assert_eq!(PaletteChoice::from_headers(&headers).0, Palette::DEFAULT);

        headers.insert(header::COOKIE, "color-theme=golden".parse().unwrap());
        assert_eq!(PaletteChoice::from_headers(&headers).0, Palette::Golden);
    }

    #[tokio::test]
    async fn test_not_found_error_page() {
        let response = error_response(&AppError::NotFound("Post not found".to_string()));
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let html = body_text(response).await;
        assert!(html.contains("Page not found"));
        assert!(html.contains("Back to Store"));
    }

    #[tokio::test]
    async fn test_internal_error_page() {
        let response = error_response(&AppError::Internal("db gone".to_string()));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let html = body_text(response).await;
        assert!(html.contains("Something went wrong"));
        assert!(html.contains("Try again"));
        assert!(html.contains("href=\"/\""));
        // Internal detail stays in the logs
        assert!(!html.contains("db gone"));
    }

    #[tokio::test]
    async fn test_panic_renders_error_page() {
        let response = handle_panic(Box::new("boom"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body_text(response).await.contains("Something went wrong"));
    }
}
