//! # dto-zod
//!
//! Generate TypeScript [Zod](https://zod.dev) schemas from DTO descriptors.
//!
//! Given the field metadata of a data-transfer object, this crate decides
//! the zod expression for each field, collects the imports those expressions
//! need, and assembles one self-contained schema module per DTO.
//!
//! ## Quick Start
//!
//! ```rust
//! use dto_zod::{DtoDescriptor, FieldDescriptor, SchemaSynthesizer};
//!
//! let user = DtoDescriptor::new("User")
//!     .with_field(FieldDescriptor::new("id", "java.util.UUID"))
//!     .with_field(FieldDescriptor::new("name", "String"))
//!     .with_field(FieldDescriptor::new("birthDate", "java.time.LocalDate"))
//!     .with_field(FieldDescriptor::new("tags", "java.util.List<java.lang.String>"));
//!
//! let document = SchemaSynthesizer::default().synthesize(&user);
//!
//! assert_eq!(document.file_name(), "UserSchema.ts");
//! assert!(document.content().contains("  tags: z.array(z.string()),"));
//! ```
//!
//! ## Architecture
//!
//! - [`descriptor`] - Field and DTO descriptors, generic signature parsing
//! - [`shape`] - Classification of a field into a [`SchemaShape`]
//! - [`resolver`] - Rendering shapes to expressions and imports
//! - [`imports`] - Import requirements and the per-document import set
//! - [`synthesizer`] - Assembling a complete [`SchemaDocument`]
//! - [`generation`] - The [`SchemaSink`] write collaborator and [`generate_all`]
//! - [`helpers`] - The shared helper module generated schemas import from
//! - [`options`] - Naming and import options

pub mod descriptor;
pub mod error;
pub mod generation;
pub mod helpers;
pub mod imports;
pub mod options;
pub mod resolver;
pub mod shape;
pub mod synthesizer;

// Re-export main types for convenience
pub use descriptor::{DtoDescriptor, FieldDescriptor};
pub use error::{ResolveResult, UnsupportedTypeError};
pub use generation::{generate_all, GenerationReport, MemorySink, SchemaSink};
pub use helpers::render_helpers_module;
pub use imports::{ImportRequirement, ImportSet};
pub use options::{RenameRule, ResolverOptions};
pub use resolver::{SchemaExpression, TypeResolver};
pub use shape::SchemaShape;
pub use synthesizer::{SchemaDocument, SchemaSynthesizer, SkippedField};
