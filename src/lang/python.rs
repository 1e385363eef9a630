//! Python language adapter with tree-sitter integration.
//!
//! The adapter owns the only parser in the system and backs all three
//! parse-dependent operations: identifier extraction with kind
//! classification, identifier token span lookup for the rewrite engine,
//! and the re-parse guard. Substitution spans always come from the parse
//! tree, so string and comment contents are structurally excluded from
//! renaming.

use std::collections::HashSet;
use std::ops::Range;

use tree_sitter::{Node, Parser, Tree};

use crate::core::errors::{NameshiftError, Result};
use crate::core::style;
use crate::lang::common::{IdentifierKind, IdentifierOccurrence};


/// Python-specific parsing and identifier extraction.
pub struct PythonAdapter {
    /// Tree-sitter parser for Python
    parser: Parser,
}

/// Enclosing-body context carried through the tree walk.
#[derive(Debug, Clone, Copy)]
struct WalkContext {
    /// Inside any class body
    in_class: bool,
    /// Inside any function body
    in_function: bool,
    /// The immediately enclosing body is a class body
    directly_in_class: bool,
}

impl WalkContext {
    fn module() -> Self {
        Self {
            in_class: false,
            in_function: false,
            directly_in_class: false,
        }
    }

    fn enter_class(self) -> Self {
        Self {
            in_class: true,
            directly_in_class: true,
            ..self
        }
    }

    fn enter_function(self) -> Self {
        Self {
            in_function: true,
            directly_in_class: false,
            ..self
        }
    }
}

impl PythonAdapter {
    /// Create a new Python adapter.
    pub fn new() -> Result<Self> {
        let language = tree_sitter_python::LANGUAGE.into();
        let mut parser = Parser::new();
        parser.set_language(&language).map_err(|e| {
            NameshiftError::parse("python", format!("failed to set Python language: {e:?}"))
        })?;

        Ok(Self { parser })
    }

    fn parse(&mut self, source: &str) -> Result<Tree> {
        self.parser
            .parse(source, None)
            .ok_or_else(|| NameshiftError::parse("python", "failed to parse Python source"))
    }

    /// Whether the source parses cleanly (no error or missing nodes).
    ///
    /// This is the re-parse guard primitive: the rewrite engine calls it on
    /// rewritten text before committing anything to disk.
    pub fn source_parses(&mut self, source: &str) -> bool {
        self.parse(source)
            .map(|tree| !tree.root_node().has_error())
            .unwrap_or(false)
    }

    /// Extract all identifier occurrences with their syntactic kinds.
    ///
    /// A file that does not parse cleanly yields an empty list; the whole
    /// pipeline leaves such files untouched.
    pub fn extract_identifiers(&mut self, source: &str) -> Vec<IdentifierOccurrence> {
        let tree = match self.parse(source) {
            Ok(tree) => tree,
            Err(_) => return Vec::new(),
        };

        if tree.root_node().has_error() {
            return Vec::new();
        }

        let mut occurrences = Vec::new();
        Self::walk_node(
            tree.root_node(),
            source,
            WalkContext::module(),
            &mut occurrences,
        );

        // Deterministic report order regardless of traversal details
        occurrences.sort_by_key(|o| (o.line, o.column));
        occurrences
    }

    /// Byte spans of every identifier token whose text is in `names`.
    ///
    /// Spans are returned in ascending source order. Because only
    /// `identifier` tokens are matched, occurrences inside string and
    /// comment literals can never be selected.
    pub fn identifier_spans(
        &mut self,
        source: &str,
        names: &HashSet<String>,
    ) -> Result<Vec<(Range<usize>, String)>> {
        let tree = self.parse(source)?;
        let mut spans = Vec::new();
        Self::collect_spans(tree.root_node(), source, names, &mut spans);
        spans.sort_by_key(|(range, _)| range.start);
        Ok(spans)
    }

    fn collect_spans(
        node: Node,
        source: &str,
        names: &HashSet<String>,
        spans: &mut Vec<(Range<usize>, String)>,
    ) {
        if node.kind() == "identifier" {
            if let Ok(text) = node.utf8_text(source.as_bytes()) {
                if names.contains(text) {
                    spans.push((node.byte_range(), text.to_string()));
                }
            }
            return;
        }

        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            Self::collect_spans(child, source, names, spans);
        }
    }

    fn walk_node(
        node: Node,
        source: &str,
        ctx: WalkContext,
        occurrences: &mut Vec<IdentifierOccurrence>,
    ) {
        match node.kind() {
            "class_definition" => {
                if let Some(name_node) = node.child_by_field_name("name") {
                    Self::push_occurrence(name_node, source, IdentifierKind::Class, occurrences);
                }
                Self::walk_children(node, source, ctx.enter_class(), occurrences);
            }
            "function_definition" => {
                let kind = if ctx.directly_in_class {
                    IdentifierKind::Method
                } else {
                    IdentifierKind::Function
                };
                if let Some(name_node) = node.child_by_field_name("name") {
                    Self::push_occurrence(name_node, source, kind, occurrences);
                }
                if let Some(params) = node.child_by_field_name("parameters") {
                    Self::collect_parameters(params, source, occurrences);
                }
                Self::walk_children(node, source, ctx.enter_function(), occurrences);
            }
            "assignment" => {
                if let Some(left) = node.child_by_field_name("left") {
                    Self::classify_assignment_target(left, source, ctx, occurrences);
                }
                Self::walk_children(node, source, ctx, occurrences);
            }
            _ => {
                Self::walk_children(node, source, ctx, occurrences);
            }
        }
    }

    fn walk_children(
        node: Node,
        source: &str,
        ctx: WalkContext,
        occurrences: &mut Vec<IdentifierOccurrence>,
    ) {
        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            Self::walk_node(child, source, ctx, occurrences);
        }
    }

    /// Collect formal parameter names, excluding the receiver (`self`/`cls`).
    fn collect_parameters(
        params: Node,
        source: &str,
        occurrences: &mut Vec<IdentifierOccurrence>,
    ) {
        let mut cursor = params.walk();
        for child in params.children(&mut cursor) {
            let name_node = match child.kind() {
                "identifier" => Some(child),
                "default_parameter" | "typed_default_parameter" => {
                    child.child_by_field_name("name")
                }
                "typed_parameter" | "list_splat_pattern" | "dictionary_splat_pattern" => {
                    Self::first_identifier_child(child)
                }
                _ => None,
            };

            if let Some(name_node) = name_node {
                if let Ok(text) = name_node.utf8_text(source.as_bytes()) {
                    if text != "self" && text != "cls" {
                        Self::push_occurrence(
                            name_node,
                            source,
                            IdentifierKind::Argument,
                            occurrences,
                        );
                    }
                }
            }
        }
    }

    fn first_identifier_child(node: Node) -> Option<Node> {
        let mut cursor = node.walk();
        let found = node
            .children(&mut cursor)
            .find(|child| child.kind() == "identifier");
        found
    }

    /// Classify a simple or annotated assignment target.
    ///
    /// Spelling decides only the constant case; everything else comes from
    /// the enclosing-body context.
    fn classify_assignment_target(
        left: Node,
        source: &str,
        ctx: WalkContext,
        occurrences: &mut Vec<IdentifierOccurrence>,
    ) {
        match left.kind() {
            "identifier" => {
                let Ok(name) = left.utf8_text(source.as_bytes()) else {
                    return;
                };
                let kind = if style::is_constant_pattern(name) {
                    IdentifierKind::Constant
                } else if ctx.in_class && !ctx.in_function {
                    IdentifierKind::Attribute
                } else {
                    IdentifierKind::Variable
                };
                Self::push_occurrence(left, source, kind, occurrences);
            }
            "attribute" => {
                // obj.field = value renames the field regardless of context
                if let Some(attr) = left.child_by_field_name("attribute") {
                    Self::push_occurrence(attr, source, IdentifierKind::Attribute, occurrences);
                }
            }
            _ => {}
        }
    }

    fn push_occurrence(
        node: Node,
        source: &str,
        kind: IdentifierKind,
        occurrences: &mut Vec<IdentifierOccurrence>,
    ) {
        if let Ok(text) = node.utf8_text(source.as_bytes()) {
            if !text.is_empty() {
                occurrences.push(IdentifierOccurrence::new(
                    text,
                    kind,
                    node.start_position().row + 1,
                    node.start_position().column,
                ));
            }
        }
    }

    /// Language identifier used in logs and parse errors.
    pub fn language_name(&self) -> &'static str {
        "python"
    }
}
