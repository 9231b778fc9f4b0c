//! Palette API endpoints.

use std::collections::BTreeMap;

use axum::extract::{Path, Query};
use serde::{Deserialize, Serialize};

use super::{error, success, ApiResult};
use crate::errors::AppError;
use crate::theme::{ColorMode, Palette};

/// A palette with its colour tables keyed by custom property name.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaletteInfo {
    pub name: &'static str,
    pub label: &'static str,
    pub swatch: &'static str,
    pub is_default: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub light: Option<BTreeMap<&'static str, &'static str>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dark: Option<BTreeMap<&'static str, &'static str>>,
}

impl PaletteInfo {
    fn new(palette: Palette, mode: Option<ColorMode>) -> Self {
        let table = |m: ColorMode| -> Option<BTreeMap<&'static str, &'static str>> {
            Some(palette.colors(m).iter().copied().collect())
        };
        let (light, dark) = match mode {
            Some(ColorMode::Light) => (table(ColorMode::Light), None),
            Some(ColorMode::Dark) => (None, table(ColorMode::Dark)),
            None => (table(ColorMode::Light), table(ColorMode::Dark)),
        };

        Self {
            name: palette.name(),
            label: palette.label(),
            swatch: palette.swatch(),
            is_default: palette == Palette::DEFAULT,
            light,
            dark,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ModeQuery {
    pub mode: Option<String>,
}

/// GET /api/themes - All palettes with both colour tables.
pub async fn list_themes() -> ApiResult<Vec<PaletteInfo>> {
    success(
        Palette::ALL
            .into_iter()
            .map(|p| PaletteInfo::new(p, None))
            .collect(),
    )
}

/// GET /api/themes/{name} - One palette, optionally restricted to `?mode=light|dark`.
pub async fn get_theme(
    Path(name): Path<String>,
    Query(query): Query<ModeQuery>,
) -> ApiResult<PaletteInfo> {
    let Some(palette) = Palette::from_name(&name) else {
        return error(AppError::NotFound(format!("Unknown palette: {}", name)));
    };

    let mode = match query.mode.as_deref() {
        None => None,
        Some(raw) => match ColorMode::from_name(raw) {
            Some(mode) => Some(mode),
            None => {
                return error(AppError::BadRequest(format!(
                    "mode must be 'light' or 'dark', got '{}'",
                    raw
                )))
            }
        },
    };

    success(PaletteInfo::new(palette, mode))
}
