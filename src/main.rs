use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use log::{LevelFilter, info};
use std::borrow::Cow;
use std::fs;
use std::path::PathBuf;

use toolshelf::ToolshelfError;
use toolshelf::tools::{Category, Tool, ToolCatalog};

mod cli;
mod config;

use cli::commands::Commands;
use cli::{Cli, OutputFormat, render};
use config::Config;

/// Level forced by --verbose; otherwise RUST_LOG decides
fn verbose_level(verbose: bool) -> Option<LevelFilter> {
    verbose.then_some(LevelFilter::Debug)
}

fn setup_logging(verbose: bool) -> Result<()> {
    // Create log directory
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("toolshelf")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    let log_file = log_dir.join("toolshelf.log");

    // Setup env_logger with file output
    let target = Box::new(
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)
            .context("Failed to open log file")?,
    );

    let mut builder = env_logger::Builder::from_default_env();
    builder.target(env_logger::Target::Pipe(target));
    if let Some(level) = verbose_level(verbose) {
        builder.filter_level(level);
    }
    builder.init();

    info!("Logging initialized, writing to: {}", log_file.display());
    Ok(())
}

/// Built-in catalog unless a YAML catalog is configured
fn load_catalog(cli_catalog: Option<&PathBuf>, config: &Config) -> Result<Cow<'static, ToolCatalog>> {
    let catalog = match config.catalog_path(cli_catalog) {
        Some(path) => Cow::Owned(
            ToolCatalog::from_file(path).context(format!("Failed to load catalog from {}", path.display()))?,
        ),
        None => Cow::Borrowed(ToolCatalog::builtin()),
    };

    if config.catalog.strict {
        catalog.validate().context("Catalog failed integrity checks")?;
    }

    info!("Using catalog with {} tools", catalog.len());
    Ok(catalog)
}

fn run_application(cli: &Cli, config: &Config) -> Result<()> {
    info!("Starting application");

    if cli.is_verbose() {
        println!("{}", "Verbose mode enabled".yellow());
    }
    if !config.output.color {
        colored::control::set_override(false);
    }

    let catalog = load_catalog(cli.catalog.as_ref(), config)?;
    let format = config.output_format(cli.format);

    match &cli.command {
        None => handle_list_command(&catalog, None, format),
        Some(Commands::List { category }) => handle_list_command(&catalog, category.as_deref(), format),
        Some(Commands::Show { category, slug }) => handle_show_command(&catalog, category, slug, format),
        Some(Commands::Categories) => handle_categories_command(&catalog, format),
        Some(Commands::Check) => handle_check_command(&catalog),
    }
}

fn handle_list_command(catalog: &ToolCatalog, category: Option<&str>, format: OutputFormat) -> Result<()> {
    info!("Listing tools - category: {:?}", category);
    let out = match category {
        Some(name) => {
            let category: Category = name.parse()?;
            render::render_category(catalog, category, format)?
        }
        None => render::render_all(catalog, format)?,
    };
    print!("{}", out);
    Ok(())
}

/// Resolve a category name and slug, treating absence as an error
fn find_tool<'a>(catalog: &'a ToolCatalog, category: &str, slug: &str) -> toolshelf::Result<&'a Tool> {
    let category: Category = category.parse()?;
    catalog.get(category, slug).ok_or_else(|| ToolshelfError::ToolNotFound {
        category,
        slug: slug.to_string(),
    })
}

fn handle_show_command(catalog: &ToolCatalog, category: &str, slug: &str, format: OutputFormat) -> Result<()> {
    info!("Showing tool: {}/{}", category, slug);
    let tool = find_tool(catalog, category, slug)?;
    print!("{}", render::render_tool(tool, format)?);
    Ok(())
}

fn handle_categories_command(catalog: &ToolCatalog, format: OutputFormat) -> Result<()> {
    info!("Listing categories");
    print!("{}", render::render_categories(catalog, format)?);
    Ok(())
}

fn handle_check_command(catalog: &ToolCatalog) -> Result<()> {
    info!("Checking catalog integrity");
    let issues = catalog.issues();
    print!("{}", render::render_issues(&issues));
    if !issues.is_empty() {
        eyre::bail!("catalog has {} integrity issue(s)", issues.len());
    }
    Ok(())
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging before anything else logs
    setup_logging(cli.is_verbose()).context("Failed to setup logging")?;

    // Load configuration
    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    info!("Starting with config from: {:?}", cli.config);

    // Run the main application logic
    run_application(&cli, &config).context("Application failed")?;

    Ok(())
}
