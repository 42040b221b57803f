//! Schema document synthesis.
//!
//! The synthesizer walks a DTO's fields in declaration order, resolves each
//! one, and assembles a complete TypeScript module:
//!
//! ```text
//! import { z } from 'zod';
//! import { zDateOnly } from '../zod-mods';
//! export const UserSchema = z.object({
//!   id: z.string().uuid(),
//!   birthDate: zDateOnly,
//! });
//! export type User = z.infer<typeof UserSchema>;
//! ```
//!
//! Fields whose type cannot be mapped are logged and left out; they never
//! fail the whole document.

use crate::descriptor::{is_identifier, DtoDescriptor, FieldDescriptor};
use crate::error::UnsupportedTypeError;
use crate::imports::{ImportRequirement, ImportSet};
use crate::resolver::{TypeResolver, CORE_VALIDATOR};

/// A field left out of a document because its type could not be mapped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedField {
    /// Field name.
    pub field_name: String,

    /// Declared type or generic signature of the field.
    pub declared_type: String,

    /// Why resolution failed.
    pub error: UnsupportedTypeError,
}

/// A fully assembled schema module for one DTO.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaDocument {
    dto_name: String,
    schema_name: String,
    file_name: String,
    imports: ImportSet,
    fields: Vec<String>,
    skipped: Vec<SkippedField>,
    content: String,
}

impl SchemaDocument {
    /// Name of the source DTO.
    pub fn dto_name(&self) -> &str {
        &self.dto_name
    }

    /// Exported schema constant (`UserSchema`).
    pub fn schema_name(&self) -> &str {
        &self.schema_name
    }

    /// Target file name (`UserSchema.ts`).
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Imports other than the core validator import.
    pub fn imports(&self) -> &ImportSet {
        &self.imports
    }

    /// Names of the fields emitted, in declaration order.
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// Fields that were left out.
    pub fn skipped(&self) -> &[SkippedField] {
        &self.skipped
    }

    /// Complete TypeScript source.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Consume the document, keeping the file name and content.
    pub fn into_parts(self) -> (String, String) {
        (self.file_name, self.content)
    }
}

/// Builds [`SchemaDocument`]s from DTO descriptors.
#[derive(Debug, Clone, Default)]
pub struct SchemaSynthesizer {
    resolver: TypeResolver,
}

impl SchemaSynthesizer {
    /// Create a synthesizer around a resolver.
    pub fn new(resolver: TypeResolver) -> Self {
        Self { resolver }
    }

    /// The resolver in use.
    pub fn resolver(&self) -> &TypeResolver {
        &self.resolver
    }

    /// Synthesize the schema document for a DTO.
    pub fn synthesize(&self, dto: &DtoDescriptor) -> SchemaDocument {
        let options = self.resolver.options();
        let schema_name = options.schema_name(&dto.name);

        let mut imports = ImportSet::new();
        let mut body = String::new();
        let mut fields = Vec::with_capacity(dto.fields.len());
        let mut skipped = Vec::new();

        for field in &dto.fields {
            match self.resolver.resolve_for(&dto.name, field) {
                Ok(resolved) => {
                    body.push_str(&format!(
                        "  {}: {},\n",
                        self.field_key(field),
                        resolved.expression
                    ));
                    imports.extend(resolved.imports);
                    fields.push(field.name().to_string());
                }
                Err(error) => {
                    tracing::error!(
                        field = %field.name(),
                        field_type = %field.display_type(),
                        dto = %dto.name,
                        error = %error,
                        "Could not parse field, leaving it out of the schema"
                    );
                    skipped.push(SkippedField {
                        field_name: field.name().to_string(),
                        declared_type: field.display_type().to_string(),
                        error,
                    });
                }
            }
        }

        let core_import = ImportRequirement::new(CORE_VALIDATOR, options.validation_library.as_str());
        let mut content = format!("{}\n", core_import);
        content.push_str(&imports.render());
        content.push_str(&format!("export const {} = z.object({{\n", schema_name));
        content.push_str(&body);
        content.push_str("});\n");
        content.push_str(&format!(
            "export type {} = z.infer<typeof {}>;\n",
            dto.name, schema_name
        ));

        tracing::debug!(
            dto = %dto.name,
            fields = fields.len(),
            skipped = skipped.len(),
            imports = imports.len(),
            "Synthesized schema"
        );

        SchemaDocument {
            dto_name: dto.name.clone(),
            file_name: format!("{}.ts", schema_name),
            schema_name,
            imports,
            fields,
            skipped,
            content,
        }
    }

    /// Object key for a field, renamed and quoted as needed.
    fn field_key(&self, field: &FieldDescriptor) -> String {
        let key = match self.resolver.options().rename_all {
            Some(rule) => rule.apply(field.name()),
            None => field.name().to_string(),
        };

        if is_identifier(&key) {
            key
        } else {
            quote_key(&key)
        }
    }
}

/// Single-quoted TypeScript string literal for an object key.
fn quote_key(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 2);
    out.push('\'');
    for c in key.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            // U+2028 and U+2029 end lines inside older string literals.
            c if c.is_control() || c == '\u{2028}' || c == '\u{2029}' => {
                out.push_str(&format!("\\u{:04x}", c as u32));
            }
            c => out.push(c),
        }
    }
    out.push('\'');
    out
}
