//! Toolshelf - a catalog of client-side web utility tools
//!
//! Toolshelf holds the display metadata and SEO copy for every browser-based
//! utility (image compressors, PDF mergers, text formatters, ...) and answers
//! the two questions a presentation layer asks: which tools belong to a
//! category, in display order, and which tool lives at a category/slug.

pub mod error;
pub mod tools;

pub use error::{Result, ToolshelfError};
pub use tools::{Category, Tool, ToolCatalog, get_tool, tools_by_category};
