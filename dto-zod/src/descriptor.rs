//! DTO and field descriptors.
//!
//! Descriptors are the input contract of the generator. They are produced by
//! a discovery step outside this crate (a manifest loader, a build-time
//! registry, ...) and are never mutated once built.

use serde::Deserialize;

use crate::error::{ResolveResult, UnsupportedTypeError};

/// Simple type names (lowercase) that denote a collection.
const COLLECTION_TYPE_NAMES: &[&str] = &[
    "list",
    "arraylist",
    "linkedlist",
    "set",
    "hashset",
    "linkedhashset",
    "treeset",
    "sortedset",
    "collection",
    "iterable",
];

/// Metadata for a single DTO field.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "RawFieldDescriptor")]
pub struct FieldDescriptor {
    name: String,
    declared_type_name: String,
    is_collection: bool,
    element_type_name: Option<String>,
    generic_signature: Option<String>,
}

/// Wire form of a field, before signature normalization.
#[derive(Debug, Deserialize)]
struct RawFieldDescriptor {
    name: String,
    #[serde(rename = "type")]
    declared_type: String,
    #[serde(default)]
    collection: bool,
    #[serde(default)]
    element: Option<String>,
    #[serde(default)]
    generic: Option<String>,
}

impl From<RawFieldDescriptor> for FieldDescriptor {
    fn from(raw: RawFieldDescriptor) -> Self {
        let mut field = FieldDescriptor::new(raw.name, raw.declared_type);
        field.is_collection |= raw.collection;
        if raw.element.is_some() {
            field.element_type_name = raw.element;
        }
        if raw.generic.is_some() {
            field.generic_signature = raw.generic;
        }
        field
    }
}

impl FieldDescriptor {
    /// Create a field from its declared type.
    ///
    /// The declared type may be a plain name (`String`, `java.time.LocalDate`),
    /// a full generic signature (`java.util.List<com.acme.Tag>`) or an array
    /// (`String[]`). Signatures and arrays mark the field as a collection when
    /// their outer type is one.
    pub fn new(name: impl Into<String>, declared_type: impl Into<String>) -> Self {
        let declared_type = declared_type.into();
        let declared_type = declared_type.trim();

        if let Some(element) = declared_type.strip_suffix("[]") {
            return Self {
                name: name.into(),
                declared_type_name: declared_type.to_string(),
                is_collection: true,
                element_type_name: Some(element.trim().to_string()),
                generic_signature: None,
            };
        }

        match declared_type.find('<') {
            Some(open) => {
                let outer = simple_name(&declared_type[..open]).to_string();
                Self {
                    name: name.into(),
                    is_collection: is_collection_name(&outer),
                    declared_type_name: outer,
                    element_type_name: None,
                    generic_signature: Some(declared_type.to_string()),
                }
            }
            None => Self {
                name: name.into(),
                is_collection: is_collection_name(simple_name(declared_type)),
                declared_type_name: declared_type.to_string(),
                element_type_name: None,
                generic_signature: None,
            },
        }
    }

    /// Create a collection field with an explicit element type.
    pub fn collection(
        name: impl Into<String>,
        declared_type: impl Into<String>,
        element_type: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            declared_type_name: declared_type.into(),
            is_collection: true,
            element_type_name: Some(element_type.into()),
            generic_signature: None,
        }
    }

    /// Attach the raw generic signature of the field's type.
    pub fn with_generic_signature(mut self, signature: impl Into<String>) -> Self {
        self.generic_signature = Some(signature.into());
        self
    }

    /// Field name as declared.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared type name, possibly package-qualified.
    pub fn declared_type_name(&self) -> &str {
        &self.declared_type_name
    }

    /// Declared type name without its package path.
    pub fn simple_type_name(&self) -> &str {
        simple_name(&self.declared_type_name)
    }

    /// Whether the field holds a list of values.
    pub fn is_collection(&self) -> bool {
        self.is_collection
    }

    /// Explicit element type name of a collection field.
    pub fn element_type_name(&self) -> Option<&str> {
        self.element_type_name.as_deref()
    }

    /// Raw generic signature, when known.
    pub fn generic_signature(&self) -> Option<&str> {
        self.generic_signature.as_deref()
    }

    /// The most descriptive rendering of the field's type, for diagnostics.
    pub fn display_type(&self) -> &str {
        self.generic_signature
            .as_deref()
            .unwrap_or(&self.declared_type_name)
    }
}

/// A DTO: a named, ordered sequence of fields.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DtoDescriptor {
    /// Simple name of the DTO type.
    pub name: String,

    /// Fields in declaration order.
    #[serde(default)]
    pub fields: Vec<FieldDescriptor>,
}

impl DtoDescriptor {
    /// Create a DTO with no fields.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Append a field.
    pub fn with_field(mut self, field: FieldDescriptor) -> Self {
        self.fields.push(field);
        self
    }
}

/// Strip the package path from a type name.
pub fn simple_name(type_name: &str) -> &str {
    let type_name = type_name.trim();
    type_name.rsplit('.').next().unwrap_or(type_name)
}

/// Check whether a simple type name denotes a collection.
pub fn is_collection_name(name: &str) -> bool {
    let name = name.trim();
    if name.ends_with("[]") {
        return true;
    }
    let outer = name.split('<').next().unwrap_or(name);
    let lower = simple_name(outer).to_lowercase();
    COLLECTION_TYPE_NAMES.contains(&lower.as_str())
}

/// Check whether a name is a usable TypeScript identifier.
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

/// Extract the element type name from a generic signature.
///
/// The element is the text between the last path separator (`.` or `<`)
/// preceding the final `>` and that bracket, so
/// `java.util.List<com.acme.Tag>` yields `Tag`.
pub fn extract_element_name(signature: &str) -> ResolveResult<String> {
    let close = signature
        .rfind('>')
        .ok_or_else(|| UnsupportedTypeError::malformed(signature, "no closing generic bracket"))?;
    let head = &signature[..close];

    let start = head.rfind(&['.', '<'][..]).ok_or_else(|| {
        UnsupportedTypeError::malformed(signature, "no path separator before closing bracket")
    })?;

    if head.matches('<').count() > 1 {
        return Err(UnsupportedTypeError::recursive(signature));
    }

    let name = head[start + 1..].trim();
    if is_collection_name(name) {
        return Err(UnsupportedTypeError::recursive(name));
    }
    if !is_identifier(name) {
        return Err(UnsupportedTypeError::malformed(
            signature,
            format!("'{}' is not a type name", name),
        ));
    }

    Ok(name.to_string())
}
