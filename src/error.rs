//! Error types for Toolshelf
//!
//! Centralized error handling using thiserror.

use thiserror::Error;

use crate::tools::Category;

/// All error types that can occur in Toolshelf
#[derive(Debug, Error)]
pub enum ToolshelfError {
    /// Category name outside the closed set
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// No tool with this category/slug pair
    #[error("Tool not found: {category}/{slug}")]
    ToolNotFound { category: Category, slug: String },

    /// Catalog data failed an integrity check
    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML serialization/deserialization error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Result type alias for Toolshelf operations
pub type Result<T> = std::result::Result<T, ToolshelfError>;
