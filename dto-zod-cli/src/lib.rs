//! # dto-zod-cli
//!
//! CLI library for generating TypeScript Zod schemas from DTO manifests.
//!
//! This crate provides the pieces behind the `dto-zod` binary: manifest
//! discovery and loading, configuration, and the output directory sink.
//!
//! ## Architecture
//!
//! - [`config`] - Configuration management and TOML parsing
//! - [`scanner`] - Manifest discovery and filtering
//! - [`manifest`] - JSON/TOML manifest parsing into DTO descriptors
//! - [`generator`] - One full generation run
//! - [`writer`] - Directory sink with dry-run and check modes
//! - [`logging`] - Tracing subscriber setup
//! - [`error`] - Error types and handling

pub mod config;
pub mod error;
pub mod generator;
pub mod logging;
pub mod manifest;
pub mod scanner;
pub mod writer;

// Re-export main types for convenience
pub use config::{Config, ConfigManager};
pub use error::{CliError, CliResult};
pub use generator::{GenerationOutcome, SchemaGenerator};
pub use scanner::ManifestScanner;
pub use writer::{DirectorySink, WriteMode, WriteResult};
