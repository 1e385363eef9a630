//! Skip rules and per-kind target styles.
//!
//! The reserved-word table is deliberately conservative: a false "skip" is
//! safe, while a false "convert" risks corrupting calls into external code.

use std::collections::HashSet;

use once_cell::sync::Lazy;

use crate::core::config::NamingPreferences;
use crate::core::style::{self, NamingStyle};
use crate::lang::common::IdentifierKind;

/// Python reserved keywords and common builtins; never converted.
static RESERVED: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        // Keywords
        "False", "None", "True", "and", "as", "assert", "async", "await", "break", "class",
        "continue", "def", "del", "elif", "else", "except", "finally", "for", "from", "global",
        "if", "import", "in", "is", "lambda", "nonlocal", "not", "or", "pass", "raise", "return",
        "try", "while", "with", "yield", "self", "cls",
        // Common builtins
        "print", "len", "range", "str", "int", "float", "list", "dict", "set", "tuple", "bool",
        "type", "object", "super", "isinstance", "issubclass", "hasattr", "getattr", "setattr",
        "delattr", "open", "file", "input", "enumerate", "zip", "map", "filter", "sorted",
        "reversed", "sum", "min", "max", "abs", "round", "pow", "divmod", "hex", "oct", "bin",
        "format", "repr", "hash", "id", "dir", "vars", "locals", "globals", "staticmethod",
        "classmethod", "property", "callable", "iter", "next", "slice", "frozenset", "bytes",
        "bytearray", "memoryview", "complex",
        // Common exception types
        "Exception", "BaseException", "ValueError", "TypeError", "KeyError", "IndexError",
        "AttributeError", "ImportError", "RuntimeError", "StopIteration", "GeneratorExit",
        "SystemExit", "KeyboardInterrupt",
    ]
    .into_iter()
    .collect()
});

/// True for dunder names like `__init__`: double-underscore wrapped, with a
/// non-empty body of lowercase letters and underscores.
fn is_dunder(name: &str) -> bool {
    if name.len() < 5 || !name.starts_with("__") || !name.ends_with("__") {
        return false;
    }
    let body = &name[2..name.len() - 2];
    !body.is_empty() && body.chars().all(|c| c.is_ascii_lowercase() || c == '_')
}

/// Decides which identifiers are touched and what style each kind targets.
///
/// Holds the immutable [`NamingPreferences`] for a run; constructed once and
/// passed by reference into the rewrite engine.
#[derive(Debug, Clone)]
pub struct NamingPolicy {
    preferences: NamingPreferences,
}

impl NamingPolicy {
    /// Create a policy from user preferences.
    pub fn new(preferences: NamingPreferences) -> Self {
        Self { preferences }
    }

    /// The preferences this policy was built from.
    pub fn preferences(&self) -> &NamingPreferences {
        &self.preferences
    }

    /// Check whether an identifier is exempt from conversion.
    pub fn should_skip(&self, name: &str) -> bool {
        if name.chars().count() < 2 {
            return true;
        }

        if RESERVED.contains(name) {
            return true;
        }

        if is_dunder(name) {
            return true;
        }

        if self.preferences.preserve_private && name.starts_with('_') {
            return true;
        }

        if self.preferences.preserve_constants && style::is_constant_pattern(name) {
            return true;
        }

        false
    }

    /// The target naming style for an identifier kind.
    pub fn target_style(&self, kind: IdentifierKind) -> NamingStyle {
        match kind {
            IdentifierKind::Variable => self.preferences.variables,
            IdentifierKind::Function => self.preferences.functions,
            IdentifierKind::Class => self.preferences.classes,
            IdentifierKind::Method => self.preferences.methods,
            IdentifierKind::Argument => self.preferences.arguments,
            IdentifierKind::Attribute => self.preferences.attributes,
            IdentifierKind::Constant => self.preferences.constants,
            IdentifierKind::Unknown => NamingStyle::Snake,
        }
    }

    /// Whether an identifier needs converting to reach its target style.
    pub fn needs_conversion(&self, name: &str, kind: IdentifierKind) -> bool {
        if self.should_skip(name) {
            return false;
        }

        style::detect_style(name) != Some(self.target_style(kind))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn policy() -> NamingPolicy {
        NamingPolicy::new(NamingPreferences::default())
    }

    #[test]
    fn test_reserved_words_skipped() {
        let p = policy();
        for name in ["class", "lambda", "print", "isinstance", "self", "cls"] {
            assert!(p.should_skip(name), "{name} should be skipped");
            assert!(!p.needs_conversion(name, IdentifierKind::Variable));
        }
    }

    #[test]
    fn test_dunder_skipped() {
        let p = policy();
        assert!(p.should_skip("__init__"));
        assert!(p.should_skip("__repr__"));
        assert!(is_dunder("__get_item__"));
        assert!(!is_dunder("__not_dunder"));
        assert!(!is_dunder("____"));
        assert!(!is_dunder("__UPPER__"));
    }

    #[test]
    fn test_short_names_skipped() {
        let p = policy();
        assert!(p.should_skip("i"));
        assert!(p.should_skip(""));
        assert!(!p.should_skip("ix"));
    }

    #[test]
    fn test_preserve_private() {
        let mut prefs = NamingPreferences::default();
        assert!(NamingPolicy::new(prefs.clone()).should_skip("_internal"));

        prefs.preserve_private = false;
        assert!(!NamingPolicy::new(prefs).should_skip("_internal"));
    }

    #[test]
    fn test_preserve_constants() {
        let mut prefs = NamingPreferences::default();
        let p = NamingPolicy::new(prefs.clone());
        assert!(p.should_skip("MAX_SIZE"));
        assert!(!p.needs_conversion("MAX_SIZE", IdentifierKind::Constant));

        prefs.preserve_constants = false;
        let p = NamingPolicy::new(prefs);
        assert!(!p.should_skip("MAX_SIZE"));
    }

    #[test]
    fn test_needs_conversion_matches_target() {
        let p = policy();
        // Default: methods target camelCase
        assert!(p.needs_conversion("do_work", IdentifierKind::Method));
        assert!(!p.needs_conversion("doWork", IdentifierKind::Method));
        // Default: variables target snake_case
        assert!(p.needs_conversion("myVar", IdentifierKind::Variable));
        assert!(!p.needs_conversion("my_var", IdentifierKind::Variable));
    }
}
