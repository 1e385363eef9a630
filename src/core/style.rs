//! Naming style detection and conversion.
//!
//! The four supported styles form a closed set. Detection rules are checked
//! in a fixed order with first-match-wins semantics; conversion functions
//! are pure, total, and idempotent. Digits are case-neutral throughout and
//! never trigger a style by themselves.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the four supported identifier casing conventions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NamingStyle {
    /// `my_variable_name`
    #[serde(rename = "snake_case")]
    Snake,
    /// `myVariableName`
    #[serde(rename = "camelCase")]
    Camel,
    /// `MyClassName`
    #[serde(rename = "PascalCase")]
    Pascal,
    /// `MY_CONSTANT`
    #[serde(rename = "SCREAMING_SNAKE_CASE")]
    ScreamingSnake,
}

impl NamingStyle {
    /// All supported styles, in declaration order.
    pub const ALL: [NamingStyle; 4] = [
        NamingStyle::Snake,
        NamingStyle::Camel,
        NamingStyle::Pascal,
        NamingStyle::ScreamingSnake,
    ];

    /// The canonical spelling used in configuration files.
    pub fn as_str(self) -> &'static str {
        match self {
            NamingStyle::Snake => "snake_case",
            NamingStyle::Camel => "camelCase",
            NamingStyle::Pascal => "PascalCase",
            NamingStyle::ScreamingSnake => "SCREAMING_SNAKE_CASE",
        }
    }
}

impl fmt::Display for NamingStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// True when `name` matches the all-caps constant pattern `^[A-Z][A-Z0-9_]*$`.
pub fn is_constant_pattern(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_uppercase() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_')
}

fn has_uppercase(name: &str) -> bool {
    name.chars().any(|c| c.is_uppercase())
}

fn has_lowercase(name: &str) -> bool {
    name.chars().any(|c| c.is_lowercase())
}

/// Detect the current naming style of an identifier.
///
/// Returns `None` for indeterminate names (shorter than two characters, or
/// unclassifiable). Rules are checked in order; the first match wins.
pub fn detect_style(name: &str) -> Option<NamingStyle> {
    if name.chars().count() < 2 {
        return None;
    }

    // SCREAMING_SNAKE_CASE: ALL_CAPS_WITH_UNDERSCORES
    if is_constant_pattern(name) {
        return Some(NamingStyle::ScreamingSnake);
    }

    let first = name.chars().next()?;
    let underscore = name.contains('_');

    // PascalCase: starts upper, no underscores, has at least one lowercase
    if first.is_uppercase() && !underscore && has_lowercase(name) {
        return Some(NamingStyle::Pascal);
    }

    // snake_case: lower_with_underscores
    if underscore && !has_uppercase(name) {
        return Some(NamingStyle::Snake);
    }

    // camelCase: starts lower, has capitals, no underscores
    if first.is_lowercase() && has_uppercase(name) && !underscore {
        return Some(NamingStyle::Camel);
    }

    // Pure lowercase: degenerate single-word snake_case
    if !underscore && !has_uppercase(name) && has_lowercase(name) {
        return Some(NamingStyle::Snake);
    }

    // Mixed case with underscores: normalization target is snake_case
    if underscore {
        return Some(NamingStyle::Snake);
    }

    None
}

/// Split a name into its leading-underscore prefix and the body.
///
/// Privacy-marking underscores are handled upstream by the skip policy, but
/// the converters still guarantee they are never altered.
fn split_leading_underscores(name: &str) -> (&str, &str) {
    let body_start = name.len() - name.trim_start_matches('_').len();
    name.split_at(body_start)
}

/// Convert any naming style to `snake_case`.
///
/// A separator is inserted before an uppercase letter that either follows a
/// non-uppercase character or starts the last capital of an uppercase run
/// followed by lowercase, so acronyms collapse: `XMLParser` -> `xml_parser`.
pub fn to_snake_case(name: &str) -> String {
    let (prefix, body) = split_leading_underscores(name);
    let chars: Vec<char> = body.chars().collect();
    let mut result = String::with_capacity(name.len() + 4);
    result.push_str(prefix);

    for (i, &c) in chars.iter().enumerate() {
        if c.is_uppercase() {
            if i > 0 {
                let prev = chars[i - 1];
                let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
                if prev != '_' && (!prev.is_uppercase() || next_is_lower) {
                    result.push('_');
                }
            }
            result.extend(c.to_lowercase());
        } else {
            result.push(c);
        }
    }

    result
}

/// Convert any naming style to `camelCase`.
pub fn to_camel_case(name: &str) -> String {
    if detect_style(name) == Some(NamingStyle::Camel) {
        return name.to_string();
    }

    let (prefix, body) = split_leading_underscores(name);

    if body.contains('_') {
        let lowered = body.to_lowercase();
        let mut parts = lowered.split('_').filter(|p| !p.is_empty());
        let mut result = String::with_capacity(name.len());
        result.push_str(prefix);
        if let Some(first) = parts.next() {
            result.push_str(first);
        }
        for part in parts {
            result.push_str(&capitalize(part));
        }
        return result;
    }

    // PascalCase -> camelCase: lowercase only the first character
    let mut chars = body.chars();
    match chars.next() {
        Some(first) if first.is_uppercase() => {
            format!("{prefix}{}{}", first.to_lowercase(), chars.as_str())
        }
        _ => name.to_string(),
    }
}

/// Convert any naming style to `PascalCase`.
pub fn to_pascal_case(name: &str) -> String {
    if detect_style(name) == Some(NamingStyle::Pascal) {
        return name.to_string();
    }

    let (prefix, body) = split_leading_underscores(name);

    if body.contains('_') {
        let lowered = body.to_lowercase();
        let mut result = String::with_capacity(name.len());
        result.push_str(prefix);
        for part in lowered.split('_').filter(|p| !p.is_empty()) {
            result.push_str(&capitalize(part));
        }
        return result;
    }

    // camelCase -> PascalCase: uppercase only the first character
    let mut chars = body.chars();
    match chars.next() {
        Some(first) if first.is_lowercase() => {
            format!("{prefix}{}{}", first.to_uppercase(), chars.as_str())
        }
        _ => name.to_string(),
    }
}

/// Convert any naming style to `SCREAMING_SNAKE_CASE`.
pub fn to_screaming_snake_case(name: &str) -> String {
    to_snake_case(name).to_uppercase()
}

/// Convert a name to the target naming style.
pub fn convert_to_style(name: &str, target: NamingStyle) -> String {
    match target {
        NamingStyle::Snake => to_snake_case(name),
        NamingStyle::Camel => to_camel_case(name),
        NamingStyle::Pascal => to_pascal_case(name),
        NamingStyle::ScreamingSnake => to_screaming_snake_case(name),
    }
}

fn capitalize(part: &str) -> String {
    let mut chars = part.chars();
    match chars.next() {
        Some(first) => format!("{}{}", first.to_uppercase(), chars.as_str()),
        None => String::new(),
    }
}
