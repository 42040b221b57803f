//! Import requirements and the per-document import set.

use std::collections::BTreeSet;
use std::fmt;

/// A `(symbol, module)` pair that must be imported for an expression to compile.
///
/// Ordering is by module first, then symbol, which gives documents a stable
/// import section.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ImportRequirement {
    source_module: String,
    symbol_name: String,
}

impl ImportRequirement {
    /// Create an import requirement.
    pub fn new(symbol_name: impl Into<String>, source_module: impl Into<String>) -> Self {
        Self {
            source_module: source_module.into(),
            symbol_name: symbol_name.into(),
        }
    }

    /// Import of a sibling schema module (`import { XSchema } from './XSchema'`).
    pub fn sibling_schema(schema_name: &str) -> Self {
        Self::new(schema_name, format!("./{}", schema_name))
    }

    /// Imported symbol.
    pub fn symbol_name(&self) -> &str {
        &self.symbol_name
    }

    /// Module the symbol is imported from.
    pub fn source_module(&self) -> &str {
        &self.source_module
    }
}

impl fmt::Display for ImportRequirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "import {{ {} }} from '{}';",
            self.symbol_name, self.source_module
        )
    }
}

/// Deduplicated set of imports for one document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportSet {
    imports: BTreeSet<ImportRequirement>,
}

impl ImportSet {
    /// Create an empty import set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one requirement. Returns `false` if it was already present.
    pub fn insert(&mut self, import: ImportRequirement) -> bool {
        self.imports.insert(import)
    }

    /// Check whether a requirement is present.
    pub fn contains(&self, import: &ImportRequirement) -> bool {
        self.imports.contains(import)
    }

    /// Number of unique requirements.
    pub fn len(&self) -> usize {
        self.imports.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.imports.is_empty()
    }

    /// Iterate in rendering order.
    pub fn iter(&self) -> impl Iterator<Item = &ImportRequirement> {
        self.imports.iter()
    }

    /// Render one import statement per line.
    pub fn render(&self) -> String {
        self.imports
            .iter()
            .map(|import| format!("{}\n", import))
            .collect()
    }
}

impl Extend<ImportRequirement> for ImportSet {
    fn extend<T: IntoIterator<Item = ImportRequirement>>(&mut self, iter: T) {
        self.imports.extend(iter);
    }
}

impl FromIterator<ImportRequirement> for ImportSet {
    fn from_iter<T: IntoIterator<Item = ImportRequirement>>(iter: T) -> Self {
        Self {
            imports: iter.into_iter().collect(),
        }
    }
}
