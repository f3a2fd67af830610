//! Catalog query integration tests
//!
//! Exercises the public query API over the built-in catalog and over catalogs
//! loaded from YAML files.

use std::io::Write;

use tempfile::NamedTempFile;
use toolshelf::error::{Result, ToolshelfError};
use toolshelf::tools::{Category, SettingsType, Tool, ToolCatalog, get_tool, tools_by_category};

const OVERRIDE_YAML: &str = r#"
tools:
  - category: convert
    slug: unit-converter
    title: Unit Converter
    description: Convert length, weight and temperature
    icon: straighten
  - category: convert
    slug: date-converter
    title: Date Converter
    description: Convert between date formats
    icon: event
    order: 2
  - category: convert
    slug: number-base
    title: Number Base Converter
    description: Binary, octal, decimal and hex
    icon: calculate
    order: 1
    settings_type: convert
    seo:
      intro: Convert numbers between bases.
      steps:
        - Enter a number
        - Pick the source and target base
      tips:
        - Prefix hex with 0x
      last_updated: 2025-06-30
"#;

fn slugs(tools: &[&Tool]) -> Vec<String> {
    tools.iter().map(|t| t.slug.clone()).collect()
}

/// Integration test: every category only returns its own tools
#[test]
fn test_builtin_category_membership() {
    for category in Category::ALL {
        for tool in tools_by_category(category) {
            assert_eq!(tool.category, category);
        }
    }
}

/// Integration test: builtin listings are sorted by order
#[test]
fn test_builtin_listings_sorted() {
    for category in Category::ALL {
        let keys: Vec<_> = tools_by_category(category).iter().map(|t| t.order_key()).collect();
        let mut sorted = keys.clone();
        sorted.sort();
        assert_eq!(keys, sorted, "{} is not in display order", category);
    }
}

/// Integration test: listings partition the whole catalog
#[test]
fn test_builtin_listings_cover_catalog() {
    let total: usize = Category::ALL.iter().map(|&c| tools_by_category(c).len()).sum();
    assert_eq!(total, ToolCatalog::builtin().len());
}

/// Integration test: documented examples
#[test]
fn test_builtin_examples() {
    assert_eq!(
        slugs(&tools_by_category(Category::Image)),
        vec!["image-compressor", "image-resizer", "image-converter", "image-to-webp"]
    );
    assert_eq!(
        slugs(&tools_by_category(Category::Text)),
        vec!["json-formatter", "base64-encode-decode", "text-case-converter"]
    );

    let tool = get_tool(Category::Image, "image-compressor").expect("compressor exists");
    assert_eq!(tool.title, "Image Compressor");
    assert!(get_tool(Category::Image, "does-not-exist").is_none());
}

/// Integration test: every builtin tool is reachable by its own key
#[test]
fn test_builtin_get_roundtrip() {
    for tool in ToolCatalog::builtin().all() {
        let found = get_tool(tool.category, &tool.slug).expect("tool reachable by key");
        assert!(std::ptr::eq(found, tool));
    }
}

/// Integration test: repeated queries agree
#[test]
fn test_builtin_queries_idempotent() {
    assert_eq!(tools_by_category(Category::Pdf), tools_by_category(Category::Pdf));
    assert_eq!(get_tool(Category::File, "file-hash"), get_tool(Category::File, "file-hash"));
}

/// Integration test: builtin catalog is shareable across threads
#[test]
fn test_builtin_concurrent_readers() {
    let handles: Vec<_> = (0..8)
        .map(|_| {
            std::thread::spawn(|| {
                slugs(&tools_by_category(Category::Pdf))
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), vec!["pdf-merge", "pdf-split", "pdf-compress"]);
    }
}

/// Integration test: load a catalog file from disk
#[test]
fn test_catalog_from_file() -> Result<()> {
    let mut file = NamedTempFile::new()?;
    file.write_all(OVERRIDE_YAML.as_bytes())?;

    let catalog = ToolCatalog::from_file(file.path())?;
    assert_eq!(catalog.len(), 3);
    assert_eq!(
        slugs(&catalog.by_category(Category::Convert)),
        vec!["number-base", "date-converter", "unit-converter"]
    );
    assert!(catalog.by_category(Category::Image).is_empty());

    let base = catalog.get(Category::Convert, "number-base").expect("loaded");
    assert_eq!(base.settings_type, Some(SettingsType::Convert));
    let seo = base.seo.as_ref().expect("seo block");
    assert_eq!(seo.steps.len(), 2);
    assert_eq!(seo.tips, vec!["Prefix hex with 0x"]);
    assert_eq!(seo.last_updated.map(|d| d.to_string()), Some("2025-06-30".to_string()));

    catalog.validate()?;
    Ok(())
}

/// Integration test: duplicates load but fail validation
#[test]
fn test_catalog_file_with_duplicates() -> Result<()> {
    let yaml = r#"
tools:
  - category: dev
    slug: jwt-decoder
    title: JWT Decoder
    description: Decode JWTs
    icon: key
  - category: dev
    slug: jwt-decoder
    title: JWT Decoder (copy)
    description: Decode JWTs again
    icon: key
"#;
    let mut file = NamedTempFile::new()?;
    file.write_all(yaml.as_bytes())?;

    let catalog = ToolCatalog::from_file(file.path())?;
    assert_eq!(catalog.get(Category::Dev, "jwt-decoder").map(|t| t.title.as_str()), Some("JWT Decoder"));
    assert_eq!(catalog.issues().len(), 1);
    assert!(matches!(catalog.validate(), Err(ToolshelfError::InvalidCatalog(_))));
    Ok(())
}

/// Integration test: malformed catalog file is rejected
#[test]
fn test_catalog_file_malformed() -> Result<()> {
    let mut file = NamedTempFile::new()?;
    file.write_all(b"tools:\n  - category: pdf\n    slug: [not, a, string]\n")?;

    let result = ToolCatalog::from_file(file.path());
    assert!(matches!(result, Err(ToolshelfError::Yaml(_))));
    Ok(())
}
