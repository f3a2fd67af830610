use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::cli::OutputFormat;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub catalog: CatalogConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// YAML catalog used instead of the built-in one
    pub path: Option<PathBuf>,
    /// Refuse catalogs that fail integrity checks
    pub strict: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            color: true,
        }
    }
}

impl Config {
    /// Load configuration with fallback chain
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        // If explicit config path provided, try to load it
        if let Some(path) = config_path {
            return Self::load_from_file(path).context(format!("Failed to load config from {}", path.display()));
        }

        // Try primary location: ~/.config/<project>/<project>.yml
        if let Some(config_dir) = dirs::config_dir() {
            let project_name = env!("CARGO_PKG_NAME");
            let primary_config = config_dir.join(project_name).join(format!("{}.yml", project_name));
            if primary_config.exists() {
                match Self::load_from_file(&primary_config) {
                    Ok(config) => return Ok(config),
                    Err(e) => {
                        log::warn!("Failed to load config from {}: {}", primary_config.display(), e);
                    }
                }
            }
        }

        // Try fallback location: ./<project>.yml
        let project_name = env!("CARGO_PKG_NAME");
        let fallback_config = PathBuf::from(format!("{}.yml", project_name));
        if fallback_config.exists() {
            match Self::load_from_file(&fallback_config) {
                Ok(config) => return Ok(config),
                Err(e) => {
                    log::warn!("Failed to load config from {}: {}", fallback_config.display(), e);
                }
            }
        }

        // No config file found, use defaults
        log::info!("No config file found, using defaults");
        Ok(Self::default())
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).context("Failed to read config file")?;

        let config: Self = serde_yaml::from_str(&content).context("Failed to parse config file")?;

        log::info!("Loaded config from: {}", path.as_ref().display());
        Ok(config)
    }

    /// Catalog path, with the command-line override taking precedence
    pub fn catalog_path<'a>(&'a self, cli_override: Option<&'a PathBuf>) -> Option<&'a PathBuf> {
        cli_override.or(self.catalog.path.as_ref())
    }

    /// Output format, with the command-line override taking precedence
    pub fn output_format(&self, cli_override: Option<OutputFormat>) -> OutputFormat {
        cli_override.unwrap_or(self.output.format)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_config_defaults() {
        let config = Config::default();
        assert!(config.catalog.path.is_none());
        assert!(!config.catalog.strict);
        assert_eq!(config.output.format, OutputFormat::Text);
        assert!(config.output.color);
    }

    #[test]
    fn test_config_load_explicit_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            "catalog:\n  path: /srv/tools.yml\n  strict: true\noutput:\n  format: json\n  color: false"
        )
        .unwrap();

        let config = Config::load(Some(&file.path().to_path_buf())).unwrap();
        assert_eq!(config.catalog.path, Some(PathBuf::from("/srv/tools.yml")));
        assert!(config.catalog.strict);
        assert_eq!(config.output.format, OutputFormat::Json);
        assert!(!config.output.color);
    }

    #[test]
    fn test_config_partial_file_uses_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "output:\n  format: yaml").unwrap();

        let config = Config::load(Some(&file.path().to_path_buf())).unwrap();
        assert_eq!(config.output.format, OutputFormat::Yaml);
        assert!(config.output.color);
        assert!(config.catalog.path.is_none());
    }

    #[test]
    fn test_config_explicit_missing_file_fails() {
        let path = PathBuf::from("/nonexistent/toolshelf.yml");
        assert!(Config::load(Some(&path)).is_err());
    }

    #[test]
    fn test_config_invalid_format_fails() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "output:\n  format: xml").unwrap();
        assert!(Config::load(Some(&file.path().to_path_buf())).is_err());
    }

    #[test]
    fn test_cli_overrides_win() {
        let config = Config {
            catalog: CatalogConfig {
                path: Some(PathBuf::from("from-config.yml")),
                strict: false,
            },
            output: OutputConfig {
                format: OutputFormat::Yaml,
                color: true,
            },
        };

        let cli_path = PathBuf::from("from-cli.yml");
        assert_eq!(config.catalog_path(Some(&cli_path)), Some(&cli_path));
        assert_eq!(config.catalog_path(None), Some(&PathBuf::from("from-config.yml")));
        assert_eq!(config.output_format(Some(OutputFormat::Json)), OutputFormat::Json);
        assert_eq!(config.output_format(None), OutputFormat::Yaml);
    }
}
