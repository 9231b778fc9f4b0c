//! JSON API module.
//!
//! Read-only endpoints over the catalogue and the palette tables. Every
//! response uses the `{success, data}` / `{success, error}` envelope.

mod content;
mod themes;

pub use content::*;
pub use themes::*;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::errors::{ApiError, AppError};
use crate::filter::Filtered;

/// Success response envelope.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

/// Response type that can be either success or error.
pub type ApiResult<T> = Result<ApiResponse<T>, ApiError>;

/// Create a successful API response.
pub fn success<T: Serialize>(data: T) -> ApiResult<T> {
    Ok(ApiResponse::new(data))
}

/// Create an error API response.
pub fn error<T: Serialize>(err: AppError) -> ApiResult<T> {
    Err(ApiError(err))
}

/// A filtered collection. `items` is empty when nothing matched.
#[derive(Debug, Serialize)]
pub struct Listing<T: Serialize> {
    pub items: Vec<T>,
    pub count: usize,
    pub total: usize,
}

impl<T: Serialize + Clone> From<Filtered<'_, T>> for Listing<T> {
    fn from(filtered: Filtered<'_, T>) -> Self {
        Self {
            count: filtered.len(),
            total: filtered.total,
            items: filtered.items.into_iter().cloned().collect(),
        }
    }
}

/// Fallback for unknown `/api` paths.
pub async fn not_found() -> ApiError {
    ApiError(AppError::NotFound("No such API endpoint".to_string()))
}
