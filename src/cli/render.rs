//! Output rendering for CLI commands.
//!
//! Text output is colored for terminals; JSON and YAML output serialize the
//! catalog records as-is.

use colored::*;
use eyre::Result;
use serde::Serialize;
use std::fmt::Write;

use toolshelf::tools::{CatalogIssue, Category, Tool, ToolCatalog};

use super::OutputFormat;

/// Category overview entry for structured output
#[derive(Debug, Serialize)]
struct CategorySummary {
    category: Category,
    label: &'static str,
    description: &'static str,
    tools: usize,
}

/// Structured rendering; `None` for text, which each command formats itself
fn serialize<T: Serialize + ?Sized>(value: &T, format: OutputFormat) -> Result<Option<String>> {
    Ok(match format {
        OutputFormat::Text => None,
        OutputFormat::Json => Some(serde_json::to_string_pretty(value)?),
        OutputFormat::Yaml => Some(serde_yaml::to_string(value)?),
    })
}

fn tool_line(tool: &Tool) -> String {
    let order = tool.order.map(|o| o.to_string()).unwrap_or_else(|| "-".to_string());
    format!("  {:>3}  {:<24} {}", order.dimmed(), tool.slug.green(), tool.title)
}

fn category_header(category: Category) -> String {
    format!("{} ({})", category.label().bold().cyan(), category)
}

/// Tools of one category in display order
pub fn render_category(catalog: &ToolCatalog, category: Category, format: OutputFormat) -> Result<String> {
    let tools = catalog.by_category(category);
    if let Some(out) = serialize(&tools, format)? {
        return Ok(out);
    }

    let mut out = String::new();
    writeln!(out, "{}", category_header(category))?;
    if tools.is_empty() {
        writeln!(out, "  {}", "(no tools)".dimmed())?;
    }
    for tool in tools {
        writeln!(out, "{}", tool_line(tool))?;
    }
    Ok(out)
}

/// Every non-empty category with its tools in display order
pub fn render_all(catalog: &ToolCatalog, format: OutputFormat) -> Result<String> {
    let categories = catalog.categories();
    if format != OutputFormat::Text {
        let tools: Vec<&Tool> = categories
            .iter()
            .flat_map(|&(category, _)| catalog.by_category(category))
            .collect();
        if let Some(out) = serialize(&tools, format)? {
            return Ok(out);
        }
    }

    let mut out = String::new();
    for (i, &(category, _)) in categories.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&render_category(catalog, category, format)?);
    }
    Ok(out)
}

/// One tool with its SEO content
pub fn render_tool(tool: &Tool, format: OutputFormat) -> Result<String> {
    if let Some(out) = serialize(tool, format)? {
        return Ok(out);
    }

    let mut out = String::new();
    writeln!(out, "{}", tool.title.bold())?;
    writeln!(out, "{}/{}", tool.category, tool.slug.green())?;
    writeln!(out)?;
    writeln!(out, "{}", tool.description)?;
    writeln!(out)?;
    writeln!(out, "  {:<10} {}", "icon:".dimmed(), tool.icon)?;
    if !tool.tags.is_empty() {
        writeln!(out, "  {:<10} {}", "tags:".dimmed(), tool.tags.join(", "))?;
    }
    if let Some(settings) = tool.settings_type {
        writeln!(out, "  {:<10} {}", "settings:".dimmed(), settings)?;
    }
    if let Some(order) = tool.order {
        writeln!(out, "  {:<10} {}", "order:".dimmed(), order)?;
    }
    writeln!(out, "  {:<10} {}", "ads:".dimmed(), tool.effective_ads_profile())?;

    let Some(seo) = &tool.seo else {
        return Ok(out);
    };

    writeln!(out)?;
    writeln!(out, "{}", seo.intro)?;
    if !seo.steps.is_empty() {
        writeln!(out)?;
        writeln!(out, "{}", "How to use".bold())?;
        for (i, step) in seo.steps.iter().enumerate() {
            writeln!(out, "  {}. {}", i + 1, step)?;
        }
    }
    if !seo.tips.is_empty() {
        writeln!(out)?;
        writeln!(out, "{}", "Tips".bold())?;
        for tip in &seo.tips {
            writeln!(out, "  - {}", tip)?;
        }
    }
    if !seo.faq.is_empty() {
        writeln!(out)?;
        writeln!(out, "{}", "FAQ".bold())?;
        for faq in &seo.faq {
            writeln!(out, "  Q: {}", faq.q.yellow())?;
            writeln!(out, "  A: {}", faq.a)?;
        }
    }
    if let Some(date) = seo.last_updated {
        writeln!(out)?;
        writeln!(out, "{} {}", "Last updated:".dimmed(), date.format("%Y-%m-%d"))?;
    }
    Ok(out)
}

/// Every category with label, description and tool count
pub fn render_categories(catalog: &ToolCatalog, format: OutputFormat) -> Result<String> {
    let summaries: Vec<CategorySummary> = Category::ALL
        .into_iter()
        .map(|category| CategorySummary {
            category,
            label: category.label(),
            description: category.description(),
            tools: catalog.by_category(category).len(),
        })
        .collect();

    if let Some(out) = serialize(&summaries, format)? {
        return Ok(out);
    }

    let mut out = String::new();
    for summary in summaries {
        writeln!(
            out,
            "{:<8} {:<12} {:>3}  {}",
            summary.category.to_string().cyan(),
            summary.label.bold(),
            summary.tools,
            summary.description.dimmed()
        )?;
    }
    Ok(out)
}

/// Integrity report, one issue per line
pub fn render_issues(issues: &[CatalogIssue]) -> String {
    if issues.is_empty() {
        return format!("{}\n", "Catalog OK".green());
    }
    let mut out = format!("{} {} issue(s)\n", "Catalog has".red(), issues.len());
    for issue in issues {
        out.push_str(&format!("  - {}\n", issue));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use toolshelf::tools::{Seo, get_tool};

    fn builtin() -> &'static ToolCatalog {
        ToolCatalog::builtin()
    }

    #[test]
    fn test_render_category_text_order() {
        let out = render_category(builtin(), Category::Image, OutputFormat::Text).unwrap();
        let compressor = out.find("image-compressor").unwrap();
        let resizer = out.find("image-resizer").unwrap();
        let converter = out.find("image-converter").unwrap();
        let webp = out.find("image-to-webp").unwrap();
        assert!(compressor < resizer && resizer < converter && converter < webp);
        assert!(out.contains("Graphics"));
    }

    #[test]
    fn test_render_empty_category_text() {
        let out = render_category(builtin(), Category::Media, OutputFormat::Text).unwrap();
        assert!(out.contains("(no tools)"));
    }

    #[test]
    fn test_render_category_json() {
        let out = render_category(builtin(), Category::Pdf, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        let slugs: Vec<_> = value
            .as_array()
            .unwrap()
            .iter()
            .map(|t| t["slug"].as_str().unwrap())
            .collect();
        assert_eq!(slugs, vec!["pdf-merge", "pdf-split", "pdf-compress"]);
    }

    #[test]
    fn test_render_all_skips_empty_categories() {
        let out = render_all(builtin(), OutputFormat::Text).unwrap();
        assert!(out.contains("Documents"));
        assert!(out.contains("File Tools"));
        assert!(!out.contains("Converters"));
    }

    #[test]
    fn test_render_all_json_count() {
        let out = render_all(builtin(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value.as_array().unwrap().len(), builtin().len());
    }

    #[test]
    fn test_render_tool_text() {
        let tool = get_tool(Category::Image, "image-compressor").unwrap();
        let out = render_tool(tool, OutputFormat::Text).unwrap();
        assert!(out.contains("Image Compressor"));
        assert!(out.contains("Fast, Private"));
        assert!(out.contains("Are my images uploaded?"));
        assert!(!out.contains("How to use"));
    }

    #[test]
    fn test_render_tool_steps_and_tips() {
        let tool = Tool::new(Category::Convert, "unit-converter", "Unit Converter", "Convert units")
            .with_seo(
                Seo::new("Convert units.")
                    .with_step("Pick a unit")
                    .with_tip("Use metric"),
            );
        let out = render_tool(&tool, OutputFormat::Text).unwrap();
        assert!(out.contains("How to use"));
        assert!(out.contains("1. Pick a unit"));
        assert!(out.contains("- Use metric"));
        assert!(!out.contains("FAQ"));
    }

    #[test]
    fn test_render_tool_yaml() {
        let tool = get_tool(Category::File, "uuid-generator").unwrap();
        let out = render_tool(tool, OutputFormat::Yaml).unwrap();
        let back: Tool = serde_yaml::from_str(&out).unwrap();
        assert_eq!(&back, tool);
    }

    #[test]
    fn test_render_categories_json() {
        let out = render_categories(builtin(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        let entries = value.as_array().unwrap();
        assert_eq!(entries.len(), Category::ALL.len());
        assert_eq!(entries[0]["category"], "image");
        assert_eq!(entries[0]["label"], "Graphics");
        assert_eq!(entries[0]["tools"], 4);
        assert_eq!(entries[6]["tools"], 0);
    }

    #[test]
    fn test_render_issues() {
        assert!(render_issues(&[]).contains("Catalog OK"));

        let issues = vec![CatalogIssue::InvalidSlug {
            category: Category::Text,
            slug: "Bad Slug".to_string(),
            position: 0,
        }];
        let out = render_issues(&issues);
        assert!(out.contains("1 issue(s)"));
        assert!(out.contains("invalid slug 'Bad Slug'"));
    }
}
