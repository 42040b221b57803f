//! Naming and import options consumed by the resolver and synthesizer.

use std::collections::BTreeMap;

use serde::Deserialize;

/// Default module the core validator is imported from.
pub const DEFAULT_VALIDATION_LIBRARY: &str = "zod";

/// Default module exporting the shared helper validators.
pub const DEFAULT_HELPERS_MODULE: &str = "../zod-mods";

/// Default suffix appended to DTO names to form schema names.
pub const DEFAULT_SCHEMA_SUFFIX: &str = "Schema";

/// Options controlling generated names and imports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverOptions {
    /// Module the `z` validator is imported from.
    pub validation_library: String,

    /// Module the date-only, time-only and day-of-week helpers live in.
    pub helpers_module: String,

    /// Suffix for schema identifiers (`User` -> `UserSchema`).
    pub schema_suffix: String,

    /// Optional rename rule applied to field keys.
    pub rename_all: Option<RenameRule>,

    /// Custom expressions keyed by lowercase simple type name.
    type_overrides: BTreeMap<String, String>,
}

impl Default for ResolverOptions {
    fn default() -> Self {
        Self {
            validation_library: DEFAULT_VALIDATION_LIBRARY.to_string(),
            helpers_module: DEFAULT_HELPERS_MODULE.to_string(),
            schema_suffix: DEFAULT_SCHEMA_SUFFIX.to_string(),
            rename_all: None,
            type_overrides: BTreeMap::new(),
        }
    }
}

impl ResolverOptions {
    /// Create options with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the helpers module path.
    pub fn with_helpers_module(mut self, module: impl Into<String>) -> Self {
        self.helpers_module = module.into();
        self
    }

    /// Set the validation library module.
    pub fn with_validation_library(mut self, library: impl Into<String>) -> Self {
        self.validation_library = library.into();
        self
    }

    /// Set the schema suffix.
    pub fn with_schema_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.schema_suffix = suffix.into();
        self
    }

    /// Set the field rename rule.
    pub fn with_rename_all(mut self, rule: RenameRule) -> Self {
        self.rename_all = Some(rule);
        self
    }

    /// Map a type name to a fixed schema expression.
    ///
    /// Matching is on the simple name and ignores case.
    pub fn with_override(mut self, type_name: &str, expression: impl Into<String>) -> Self {
        self.add_override(type_name, expression);
        self
    }

    /// Add a custom type override.
    pub fn add_override(&mut self, type_name: &str, expression: impl Into<String>) {
        self.type_overrides
            .insert(override_key(type_name), expression.into());
    }

    /// Look up the override for a simple type name.
    pub fn override_for(&self, type_name: &str) -> Option<&str> {
        self.type_overrides
            .get(&override_key(type_name))
            .map(String::as_str)
    }

    /// Schema identifier for a DTO name.
    pub fn schema_name(&self, dto_name: &str) -> String {
        format!("{}{}", dto_name, self.schema_suffix)
    }
}

fn override_key(type_name: &str) -> String {
    crate::descriptor::simple_name(type_name).to_lowercase()
}

/// Rename rule for field key transformation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum RenameRule {
    /// camelCase
    #[serde(rename = "camelCase")]
    CamelCase,

    /// snake_case
    #[serde(rename = "snake_case")]
    SnakeCase,

    /// PascalCase
    #[serde(rename = "PascalCase")]
    PascalCase,

    /// SCREAMING_SNAKE_CASE
    #[serde(rename = "SCREAMING_SNAKE_CASE")]
    ScreamingSnakeCase,

    /// kebab-case
    #[serde(rename = "kebab-case")]
    KebabCase,
}

impl RenameRule {
    /// Apply the rename rule to a string.
    pub fn apply(&self, name: &str) -> String {
        use convert_case::{Case, Casing};

        match self {
            RenameRule::CamelCase => name.to_case(Case::Camel),
            RenameRule::SnakeCase => name.to_case(Case::Snake),
            RenameRule::PascalCase => name.to_case(Case::Pascal),
            RenameRule::ScreamingSnakeCase => name.to_case(Case::UpperSnake),
            RenameRule::KebabCase => name.to_case(Case::Kebab),
        }
    }
}
