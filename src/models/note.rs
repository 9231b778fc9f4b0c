//! Lab note model.

use serde::Serialize;

/// A short field note from the workbench.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: u32,
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub date: String,
    pub category: String,
    pub tags: Vec<String>,
    pub color: String,
    pub read_time: String,
}
