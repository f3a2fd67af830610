//! Catalog integrity checks
//!
//! Detects data problems that queries silently tolerate: duplicate
//! (category, slug) keys and slugs that are not URL-safe.

use std::collections::HashMap;
use std::fmt;

use crate::error::{Result, ToolshelfError};

use super::catalog::ToolCatalog;
use super::category::Category;

/// A single integrity problem, positions refer to original list order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogIssue {
    /// Same category/slug seen again; lookups return the first
    DuplicateTool {
        category: Category,
        slug: String,
        first: usize,
        duplicate: usize,
    },
    /// Slug is empty or uses characters outside [a-z0-9-]
    InvalidSlug {
        category: Category,
        slug: String,
        position: usize,
    },
}

impl fmt::Display for CatalogIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateTool {
                category,
                slug,
                first,
                duplicate,
            } => write!(
                f,
                "duplicate tool {}/{} at position {} (first defined at {})",
                category, slug, duplicate, first
            ),
            Self::InvalidSlug {
                category,
                slug,
                position,
            } => write!(f, "invalid slug '{}' in {} at position {}", slug, category, position),
        }
    }
}

impl ToolCatalog {
    /// Collect every integrity issue, in list order
    pub fn issues(&self) -> Vec<CatalogIssue> {
        let mut seen: HashMap<(Category, &str), usize> = HashMap::new();
        let mut issues = Vec::new();

        for (pos, tool) in self.all().enumerate() {
            if !tool.has_url_safe_slug() {
                issues.push(CatalogIssue::InvalidSlug {
                    category: tool.category,
                    slug: tool.slug.clone(),
                    position: pos,
                });
            }
            match seen.get(&(tool.category, tool.slug.as_str())) {
                Some(&first) => issues.push(CatalogIssue::DuplicateTool {
                    category: tool.category,
                    slug: tool.slug.clone(),
                    first,
                    duplicate: pos,
                }),
                None => {
                    seen.insert((tool.category, tool.slug.as_str()), pos);
                }
            }
        }

        issues
    }

    /// Fail if the catalog has any integrity issue
    pub fn validate(&self) -> Result<()> {
        let issues = self.issues();
        if issues.is_empty() {
            return Ok(());
        }
        let summary = issues.iter().map(ToString::to_string).collect::<Vec<_>>().join("; ");
        Err(ToolshelfError::InvalidCatalog(summary))
    }
}
