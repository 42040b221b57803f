//! One generation run: discover manifests, synthesize schemas, store them.

use crate::config::Config;
use crate::error::CliResult;
use crate::manifest;
use crate::scanner::ManifestScanner;
use crate::writer::{prepare_output_dir, DirectorySink, WriteMode, WriteResult};
use dto_zod::{
    generate_all, render_helpers_module, GenerationReport, SchemaSynthesizer, TypeResolver,
};
use std::path::PathBuf;

/// Everything a run produced.
#[derive(Debug)]
pub struct GenerationOutcome {
    /// Manifests that were read.
    pub manifests: Vec<PathBuf>,

    /// Summary from the core generation pass.
    pub report: GenerationReport,

    /// One result per stored file, helpers module last.
    pub results: Vec<WriteResult>,

    /// Where the helpers module went, if it was emitted.
    pub helpers: Option<PathBuf>,
}

impl GenerationOutcome {
    /// Files a check found missing or outdated.
    pub fn stale(&self) -> impl Iterator<Item = &WriteResult> {
        self.results.iter().filter(|r| r.is_stale())
    }
}

/// Runs generation according to a configuration.
pub struct SchemaGenerator {
    config: Config,
}

impl SchemaGenerator {
    /// Create a new generator with the given configuration.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// The configuration in use.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Run one full pass in the given mode.
    ///
    /// The output directory is prepared first, so a directory that cannot be
    /// created fails the run before any manifest is read.
    pub fn run(&self, mode: WriteMode) -> CliResult<GenerationOutcome> {
        let output_dir = &self.config.output.dir;
        prepare_output_dir(output_dir, mode)?;

        let mut scanner = ManifestScanner::new(&self.config.input.path);
        if let Some(ref pattern) = self.config.input.filter {
            scanner = scanner.with_filter(pattern)?;
        }
        let manifests = scanner.scan()?;
        let dtos = manifest::load_all(&manifests)?;

        let options = self.config.resolver_options();
        let synthesizer = SchemaSynthesizer::new(TypeResolver::new(options.clone()));
        let mut sink = DirectorySink::new(output_dir, mode);

        let report = generate_all(&synthesizer, dtos, &mut sink)?;

        let mut helpers = None;
        if self.config.output.emit_helpers {
            match self.config.helpers_file_name() {
                Some(file_name) => {
                    let result = sink.write_file(&file_name, &render_helpers_module(&options))?;
                    helpers = Some(result.path().to_path_buf());
                }
                None => tracing::warn!(
                    module = %self.config.imports.helpers_module,
                    "Helpers module is not a relative path, not emitting it"
                ),
            }
        }

        tracing::info!(
            manifests = manifests.len(),
            files = sink.results().len(),
            mode = ?mode,
            "Run complete"
        );

        Ok(GenerationOutcome {
            manifests,
            report,
            results: sink.into_results(),
            helpers,
        })
    }
}
