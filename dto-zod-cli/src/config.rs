//! Configuration management for the CLI.
//!
//! This module handles loading configuration from `dto-zod.toml` files
//! and merging with command-line arguments.

use crate::error::{CliResult, ConfigError};
use dto_zod::options::{DEFAULT_HELPERS_MODULE, DEFAULT_SCHEMA_SUFFIX, DEFAULT_VALIDATION_LIBRARY};
use dto_zod::{RenameRule, ResolverOptions};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Default configuration filename.
pub const CONFIG_FILENAME: &str = "dto-zod.toml";

/// Main configuration structure.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Descriptor input configuration.
    pub input: InputConfig,

    /// Output configuration.
    pub output: OutputConfig,

    /// Naming conventions.
    pub naming: NamingConfig,

    /// Import module paths.
    pub imports: ImportsConfig,

    /// Type mapping customization.
    pub types: TypesConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,
}

/// Descriptor input configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Manifest file, or directory scanned for manifests.
    pub path: PathBuf,

    /// Optional glob filter on manifest paths relative to `path`.
    pub filter: Option<String>,
}

/// Output configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Output directory for generated files.
    pub dir: PathBuf,

    /// Whether to also write the shared helpers module.
    pub emit_helpers: bool,
}

/// Naming convention configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct NamingConfig {
    /// Field rename convention (camelCase, snake_case, etc.).
    pub rename_all: Option<RenameRule>,

    /// Suffix for schema names.
    pub schema_suffix: String,
}

/// Import module configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ImportsConfig {
    /// Module `z` is imported from.
    pub validation_library: String,

    /// Module the shared helpers are imported from, relative to `output.dir`.
    pub helpers_module: String,
}

/// Type mapping configuration.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct TypesConfig {
    /// Fixed expressions for type names (`BigDecimal = "z.number()"`).
    pub overrides: BTreeMap<String, String>,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter when `RUST_LOG` is unset.
    pub level: String,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("./dtos"),
            filter: None,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("./generated/dtos"),
            emit_helpers: false,
        }
    }
}

impl Default for NamingConfig {
    fn default() -> Self {
        Self {
            rename_all: None,
            schema_suffix: DEFAULT_SCHEMA_SUFFIX.to_string(),
        }
    }
}

impl Default for ImportsConfig {
    fn default() -> Self {
        Self {
            validation_library: DEFAULT_VALIDATION_LIBRARY.to_string(),
            helpers_module: DEFAULT_HELPERS_MODULE.to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

impl Config {
    /// Build resolver options from this configuration.
    pub fn resolver_options(&self) -> ResolverOptions {
        let mut options = ResolverOptions::new()
            .with_validation_library(self.imports.validation_library.as_str())
            .with_helpers_module(self.imports.helpers_module.as_str())
            .with_schema_suffix(self.naming.schema_suffix.as_str());

        if let Some(rule) = self.naming.rename_all {
            options = options.with_rename_all(rule);
        }

        for (type_name, expression) in &self.types.overrides {
            options.add_override(type_name, expression.as_str());
        }

        options
    }

    /// Path of the helpers module file, if it lives next to the output.
    ///
    /// Returns `None` when the helpers module is a package import rather than
    /// a relative path.
    pub fn helpers_file_name(&self) -> Option<String> {
        let module = self.imports.helpers_module.as_str();
        if module.starts_with("./") || module.starts_with("../") {
            Some(format!("{}.ts", module))
        } else {
            None
        }
    }
}

/// Configuration manager for loading and merging configs.
pub struct ConfigManager;

impl ConfigManager {
    /// Load configuration from a file path.
    ///
    /// If the path is None, attempts to load from the default location.
    /// If no config file exists, returns default configuration.
    pub fn load(path: Option<&Path>) -> CliResult<Config> {
        let config_path = path
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILENAME));

        if !config_path.exists() {
            return Ok(Config::default());
        }

        let content = std::fs::read_to_string(&config_path).map_err(|e| ConfigError::Io {
            path: config_path.clone(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| ConfigError::invalid_toml(config_path, e.to_string()))?;

        Self::validate(&config)?;

        Ok(config)
    }

    /// Check values that deserialize fine but cannot be used.
    pub fn validate(config: &Config) -> CliResult<()> {
        let suffix = &config.naming.schema_suffix;
        if !suffix
            .chars()
            .all(|c| c.is_alphanumeric() || c == '_' || c == '$')
        {
            return Err(ConfigError::invalid_value(
                "naming.schema_suffix",
                format!("'{}' contains characters not allowed in identifiers", suffix),
            )
            .into());
        }

        if config.imports.validation_library.trim().is_empty() {
            return Err(
                ConfigError::invalid_value("imports.validation_library", "must not be empty")
                    .into(),
            );
        }

        if config.imports.helpers_module.trim().is_empty() {
            return Err(
                ConfigError::invalid_value("imports.helpers_module", "must not be empty").into(),
            );
        }

        Ok(())
    }

    /// Merge CLI arguments into configuration.
    ///
    /// CLI arguments take precedence over config file values.
    pub fn merge_cli_args(mut config: Config, args: &CliArgs) -> Config {
        if let Some(ref input) = args.input {
            config.input.path = input.clone();
        }

        if let Some(ref output) = args.output {
            config.output.dir = output.clone();
        }

        if let Some(ref filter) = args.filter {
            config.input.filter = Some(filter.clone());
        }

        if let Some(emit_helpers) = args.emit_helpers {
            config.output.emit_helpers = emit_helpers;
        }

        config
    }
}

/// CLI arguments that can override configuration.
#[derive(Debug, Default)]
pub struct CliArgs {
    /// Input path override.
    pub input: Option<PathBuf>,

    /// Output directory override.
    pub output: Option<PathBuf>,

    /// Manifest filter override.
    pub filter: Option<String>,

    /// Emit helpers override.
    pub emit_helpers: Option<bool>,
}
