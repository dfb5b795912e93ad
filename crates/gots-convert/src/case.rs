//! Identifier case conversion between Go and JSON naming conventions.

use convert_case::{Boundary, Case, Casing};

/// Convert a Go identifier to snake_case for use as a JSON tag name.
///
/// Runs of capitals are kept together as one word, so `HTTPServer`
/// becomes `http_server` and `ID` becomes `id`. A plural acronym at the end
/// keeps its `s` (`UserIDs` -> `user_ids`). Digits stay attached to the
/// word before them: `Version2Name` -> `version2_name`.
pub fn to_snake_case(name: &str) -> String {
    match plural_acronym_stem(name) {
        Some(stem) => format!("{}s", snake(stem)),
        None => snake(name),
    }
}

fn snake(name: &str) -> String {
    name.remove_boundaries(&Boundary::digits())
        .to_case(Case::Snake)
}

/// `UserIDs` -> `Some("UserID")`: two or more capitals followed by a final `s`.
fn plural_acronym_stem(name: &str) -> Option<&str> {
    let stem = name.strip_suffix('s')?;
    let caps = stem
        .chars()
        .rev()
        .take_while(|c| c.is_ascii_uppercase())
        .count();
    (caps >= 2).then_some(stem)
}

/// Convert a JSON property name to an exported Go identifier.
///
/// `_x` collapses to `X`, then the first letter is uppercased:
/// `user_name` -> `UserName`, `pageSize` -> `PageSize`, `id` -> `Id`.
pub fn to_pascal_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut chars = name.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '_' {
            if let Some(&next) = chars.peek() {
                if next.is_ascii_lowercase() {
                    out.push(next.to_ascii_uppercase());
                    chars.next();
                    continue;
                }
            }
        }
        out.push(c);
    }

    upper_first(&out)
}

/// Lowercase the first character: `FirstName` -> `firstName`.
pub fn lower_first(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn upper_first(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_lowercase() => {
            std::iter::once(first.to_ascii_uppercase()).chain(chars).collect()
        }
        _ => name.to_string(),
    }
}
