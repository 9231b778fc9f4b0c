//! Data models for the storefront, blog and portfolio.
//!
//! Serialized field names are camelCase to match the JSON API.

mod blog;
mod note;
mod product;
mod project;

pub use blog::*;
pub use note::*;
pub use product::*;
pub use project::*;
