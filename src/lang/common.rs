//! Shared identifier model for language adapters.

use serde::{Deserialize, Serialize};

/// Syntactic role of an identifier.
///
/// Assigned from syntactic context during extraction, never from the
/// spelling of the name itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdentifierKind {
    /// Local or module-level variable binding
    Variable,
    /// Free function definition
    Function,
    /// Class definition
    Class,
    /// Function defined directly inside a class body
    Method,
    /// Formal parameter of a function or method
    Argument,
    /// Class-body binding or attribute-access assignment target
    Attribute,
    /// ALL_CAPS assignment target
    Constant,
    /// Could not be classified
    Unknown,
}

/// A single identifier occurrence in a source file.
///
/// Ephemeral: produced fresh per extraction pass and discarded after the
/// file's rewrite attempt. Multiple occurrences may share a name; the
/// first-seen kind governs that name's target style for the file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentifierOccurrence {
    /// The identifier text; never empty
    pub name: String,
    /// Syntactic role at this occurrence
    pub kind: IdentifierKind,
    /// 1-based source line
    pub line: usize,
    /// 0-based source column
    pub column: usize,
}

impl IdentifierOccurrence {
    /// Construct an occurrence record.
    pub fn new(name: impl Into<String>, kind: IdentifierKind, line: usize, column: usize) -> Self {
        Self {
            name: name.into(),
            kind,
            line,
            column,
        }
    }
}
