//! CLI command definitions using clap.
//!
//! Defines the main CLI structure and subcommands:
//! - list: tools of a category in display order
//! - show: one tool with its page content
//! - categories: category overview
//! - check: catalog integrity report

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Toolshelf - browse the web utility tool catalog
#[derive(Parser, Debug)]
#[command(name = "toolshelf")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Optional config file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// YAML catalog to use instead of the built-in one
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Output format (overrides config)
    #[arg(short, long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Check if verbose mode is enabled
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }
}

/// How results are printed
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Yaml,
}

/// Main subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List tools in display order
    List {
        /// Only this category (image, pdf, text, file, dev, convert, media)
        category: Option<String>,
    },

    /// Show one tool with its page content
    Show {
        /// Category of the tool
        category: String,

        /// Tool slug within the category
        slug: String,
    },

    /// Show categories with labels and tool counts
    Categories,

    /// Check the catalog for duplicate keys and invalid slugs
    Check,
}
