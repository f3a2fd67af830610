//! Indexed, read-only tool catalog
//!
//! The catalog keeps tools in their original order and builds two indexes once
//! at construction: a composite (category, slug) lookup and a per-category list
//! pre-sorted for display.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::path::Path;
use std::sync::LazyLock;

use log::{debug, info, warn};
use serde::Deserialize;

use crate::error::Result;

use super::builtin;
use super::category::Category;
use super::definition::Tool;

static BUILTIN: LazyLock<ToolCatalog> = LazyLock::new(|| ToolCatalog::new(builtin::tools()));

/// YAML file structure
#[derive(Debug, Deserialize)]
struct YamlCatalog {
    tools: Vec<Tool>,
}

/// Catalog of tool records
#[derive(Debug, Clone, Default)]
pub struct ToolCatalog {
    tools: Vec<Tool>,
    by_key: HashMap<Category, HashMap<String, usize>>,
    by_category: HashMap<Category, Vec<usize>>,
}

impl ToolCatalog {
    /// Build a catalog and its indexes; list order breaks display-order ties
    pub fn new(tools: Vec<Tool>) -> Self {
        let mut by_key: HashMap<Category, HashMap<String, usize>> = HashMap::new();
        let mut by_category: HashMap<Category, Vec<usize>> = HashMap::new();

        for (pos, tool) in tools.iter().enumerate() {
            match by_key.entry(tool.category).or_default().entry(tool.slug.clone()) {
                Entry::Vacant(entry) => {
                    entry.insert(pos);
                }
                Entry::Occupied(entry) => {
                    warn!(
                        "Duplicate tool {}/{} at position {}, lookups keep position {}",
                        tool.category,
                        tool.slug,
                        pos,
                        entry.get()
                    );
                }
            }
            by_category.entry(tool.category).or_default().push(pos);
        }

        // sort_by_key is stable, so equal orders keep list position
        for positions in by_category.values_mut() {
            positions.sort_by_key(|&pos| tools[pos].order_key());
        }

        debug!("Indexed {} tools across {} categories", tools.len(), by_category.len());

        Self {
            tools,
            by_key,
            by_category,
        }
    }

    /// The catalog compiled into the crate, initialized on first use
    pub fn builtin() -> &'static ToolCatalog {
        &BUILTIN
    }

    /// Load catalog from a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let catalog = Self::from_yaml(&content)?;
        info!("Loaded {} tools from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    /// Load catalog from a YAML string
    pub fn from_yaml(content: &str) -> Result<Self> {
        let doc: YamlCatalog = serde_yaml::from_str(content)?;
        Ok(Self::new(doc.tools))
    }

    /// Tools of one category, ascending by order with unordered tools last
    pub fn by_category(&self, category: Category) -> Vec<&Tool> {
        self.by_category
            .get(&category)
            .map(|positions| positions.iter().map(|&pos| &self.tools[pos]).collect())
            .unwrap_or_default()
    }

    /// First tool matching the category and slug exactly
    pub fn get(&self, category: Category, slug: &str) -> Option<&Tool> {
        self.by_key
            .get(&category)
            .and_then(|slugs| slugs.get(slug))
            .map(|&pos| &self.tools[pos])
    }

    pub fn contains(&self, category: Category, slug: &str) -> bool {
        self.get(category, slug).is_some()
    }

    /// All tools in original order
    pub fn all(&self) -> impl Iterator<Item = &Tool> {
        self.tools.iter()
    }

    /// Non-empty categories in sidebar order, with their tool counts
    pub fn categories(&self) -> Vec<(Category, usize)> {
        Category::ALL
            .into_iter()
            .filter_map(|category| {
                self.by_category
                    .get(&category)
                    .map(|positions| (category, positions.len()))
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}
