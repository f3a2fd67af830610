//! Tool catalog - records, categories, indexed lookup and integrity checks
//!
//! `tools_by_category` and `get_tool` query the built-in catalog. Use
//! [`ToolCatalog`] directly to query a catalog loaded from YAML.

mod builtin;
mod catalog;
mod category;
mod definition;
mod integrity;

pub use catalog::ToolCatalog;
pub use category::{AdsProfile, Category, SettingsType};
pub use definition::{Faq, Seo, Tool};
pub use integrity::CatalogIssue;

/// Built-in tools of a category, ascending by order with unordered tools last
pub fn tools_by_category(category: Category) -> Vec<&'static Tool> {
    ToolCatalog::builtin().by_category(category)
}

/// Built-in tool with this exact category and slug
pub fn get_tool(category: Category, slug: &str) -> Option<&'static Tool> {
    ToolCatalog::builtin().get(category, slug)
}
