//! Category, settings panel and ads profile tags
//!
//! Closed sets of tags attached to every tool record.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ToolshelfError;

/// Coarse-grained grouping of tools
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Image,
    Pdf,
    Text,
    File,
    Dev,
    Convert,
    Media,
}

impl Category {
    /// Every category, in sidebar order
    pub const ALL: [Category; 7] = [
        Self::Image,
        Self::Pdf,
        Self::Text,
        Self::File,
        Self::Dev,
        Self::Convert,
        Self::Media,
    ];

    /// Tag used in URLs and serialized records
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Pdf => "pdf",
            Self::Text => "text",
            Self::File => "file",
            Self::Dev => "dev",
            Self::Convert => "convert",
            Self::Media => "media",
        }
    }

    /// Sidebar / category page label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Image => "Graphics",
            Self::Pdf => "Documents",
            Self::Text => "Text & Data",
            Self::File => "File Tools",
            Self::Dev => "Dev & Web",
            Self::Convert => "Converters",
            Self::Media => "Media",
        }
    }

    /// Category page SEO description
    pub fn description(&self) -> &'static str {
        match self {
            Self::Image => "Compress, convert, resize images in your browser — fast and private.",
            Self::Pdf => "Merge, split and process PDFs locally with no server upload.",
            Self::Text => "Format JSON, convert cases, encode and decode text instantly.",
            Self::File => "Client-side utilities like hashing and identifiers.",
            Self::Dev => "Developer utilities like UUID, JWT, URL encoding and debugging tools.",
            Self::Convert => "Unit, date, and number converters that work fully in your browser.",
            Self::Media => "Media processing tools running locally in your browser.",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ToolshelfError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == lower)
            .ok_or_else(|| ToolshelfError::UnknownCategory(s.to_string()))
    }
}

/// Which settings panel a consuming UI shows next to the tool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SettingsType {
    Image,
    Pdf,
    Text,
    File,
    Dev,
    Convert,
    Media,
    None,
}

impl SettingsType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Pdf => "pdf",
            Self::Text => "text",
            Self::File => "file",
            Self::Dev => "dev",
            Self::Convert => "convert",
            Self::Media => "media",
            Self::None => "none",
        }
    }
}

impl fmt::Display for SettingsType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ad placement profile for a tool page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdsProfile {
    #[default]
    Default,
    Light,
    None,
}

impl AdsProfile {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Light => "light",
            Self::None => "none",
        }
    }
}

impl fmt::Display for AdsProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
