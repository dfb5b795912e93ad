//! JSON tag synthesis for Go structs.
//!
//! Exported fields without a `json` tag get one derived from the snake_case
//! of the field name. Every other line, inside or outside the struct, is
//! passed through untouched, so running the rewrite on its own output is a
//! no-op.

use crate::case::to_snake_case;
use crate::input::go::{FieldLine, parse_field_line, parse_struct_header};
use crate::input::{ScanState, Step};

/// Whether any exported struct field in `source` lacks a `json` tag.
pub fn has_missing_tags(source: &str) -> bool {
    let mut state = ScanState::Scanning;
    source.lines().any(|line| match state.step(line, parse_struct_header) {
        Step::Body(text) => parse_field_line(text).is_some_and(|field| needs_tag(&field)),
        _ => false,
    })
}

/// Rewrite `source`, adding a `json` tag to each exported field missing one.
pub fn add_missing_tags(source: &str) -> String {
    let mut state = ScanState::Scanning;
    let mut added = 0usize;

    let lines: Vec<String> = source
        .lines()
        .map(|line| {
            if let Step::Body(text) = state.step(line, parse_struct_header) {
                if let Some(field) = parse_field_line(text).filter(needs_tag) {
                    added += 1;
                    return tagged_line(&field);
                }
            }
            line.to_string()
        })
        .collect();

    tracing::debug!(added, "synthesized json tags");
    lines.join("\n")
}

/// A field needs a tag when it is exported and its tag text has no `json:`
/// key. Only the tag is searched, so `json:` inside a trailing comment does
/// not count, and a malformed entry such as `json:name` is left alone rather
/// than given a second `json` key.
fn needs_tag(field: &FieldLine<'_>) -> bool {
    field.is_exported() && !field.tag.is_some_and(|tag| tag.contains("json:"))
}

/// Re-emit a field line with a synthesized tag.
///
/// The name and type are joined by a single space; indentation and the
/// trailing comment are kept, and an existing non-JSON tag follows the new
/// `json` entry.
fn tagged_line(field: &FieldLine<'_>) -> String {
    let json = format!("json:\"{}\"", to_snake_case(field.name));
    let tag = match field.tag.map(str::trim) {
        Some(existing) if !existing.is_empty() => format!("{json} {existing}"),
        _ => json,
    };

    let mut out = format!("{}{} {} `{}`", field.indent, field.name, field.ty, tag);
    if let Some(comment) = field.comment {
        out.push(' ');
        out.push_str(comment);
    }
    out
}
