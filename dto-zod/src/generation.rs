//! The generation pass and the write collaborator.

use std::collections::BTreeMap;
use std::convert::Infallible;

use crate::descriptor::DtoDescriptor;
use crate::synthesizer::SchemaSynthesizer;

/// Destination for generated schema files.
pub trait SchemaSink {
    /// Error raised when a file cannot be stored.
    type Error;

    /// Store one generated file.
    fn write(&mut self, file_name: &str, content: &str) -> Result<(), Self::Error>;
}

/// In-memory sink, keyed by file name.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    files: BTreeMap<String, String>,
}

impl MemorySink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Content written under a file name.
    pub fn get(&self, file_name: &str) -> Option<&str> {
        self.files.get(file_name).map(String::as_str)
    }

    /// All files, ordered by name.
    pub fn files(&self) -> &BTreeMap<String, String> {
        &self.files
    }

    /// Number of files written.
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Whether nothing was written.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl SchemaSink for MemorySink {
    type Error = Infallible;

    fn write(&mut self, file_name: &str, content: &str) -> Result<(), Self::Error> {
        self.files.insert(file_name.to_string(), content.to_string());
        Ok(())
    }
}

/// Summary of a generation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationReport {
    /// File names handed to the sink, in processing order.
    pub files: Vec<String>,

    /// Total fields left out across all documents.
    pub skipped_fields: usize,
}

/// Synthesize every DTO and hand each document to the sink.
///
/// DTOs are processed one at a time, in order. The sink is called once per
/// DTO right after synthesis; the first sink error aborts the pass and is
/// returned as is.
pub fn generate_all<S, I>(
    synthesizer: &SchemaSynthesizer,
    dtos: I,
    sink: &mut S,
) -> Result<GenerationReport, S::Error>
where
    S: SchemaSink,
    I: IntoIterator<Item = DtoDescriptor>,
{
    let mut report = GenerationReport::default();

    for dto in dtos {
        let document = synthesizer.synthesize(&dto);
        report.skipped_fields += document.skipped().len();

        let (file_name, content) = document.into_parts();
        sink.write(&file_name, &content)?;

        tracing::debug!(dto = %dto.name, file = %file_name, "Schema handed to sink");
        report.files.push(file_name);
    }

    tracing::info!(
        files = report.files.len(),
        skipped_fields = report.skipped_fields,
        "Generation pass complete"
    );

    Ok(report)
}
