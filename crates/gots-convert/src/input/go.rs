//! Go struct reader.
//!
//! Recognizes one `type Name struct {` block and its field lines:
//!
//! ```text
//! <indent><Name> <Type> [`<tag>`] [// comment]
//! ```
//!
//! Anything else inside the body (embedded types, nested structs,
//! multi-name fields) is skipped.

use super::{Header, ScanState, Step, closes_inline, ident_len, strip_space, trailing_comment};
use crate::case::lower_first;
use crate::ir::{Declaration, DeclarationKind, Field, TypeDescriptor};
use crate::traits::{ReadError, Reader};
use crate::types::TypeMapper;

/// Static instance of the Go reader.
pub static GO_READER: GoReader = GoReader;

/// Go struct reader implementing the Reader trait.
pub struct GoReader;

impl Reader for GoReader {
    fn language(&self) -> &'static str {
        "go"
    }

    fn read(&self, source: &str, types: &TypeMapper) -> Result<Declaration, ReadError> {
        read_go(source, types)
    }
}

/// Parse the first Go struct in `source`.
pub fn read_go(source: &str, types: &TypeMapper) -> Result<Declaration, ReadError> {
    let mut state = ScanState::Scanning;
    let mut decl: Option<Declaration> = None;

    for (idx, line) in source.lines().enumerate() {
        match state.step(line, parse_struct_header) {
            Step::Header(header) => {
                decl = Some(Declaration::new(header.name, DeclarationKind::GoStruct));
            }
            Step::Body(text) => {
                let Some(decl) = decl.as_mut() else {
                    continue;
                };
                match parse_field_line(text) {
                    Some(line) => {
                        if let Some(field) = field_from_line(&line, types) {
                            decl.add(field);
                        }
                    }
                    None if text.trim().is_empty() => {}
                    None => {
                        tracing::debug!(line = idx + 1, text, "skipping unrecognized struct line");
                    }
                }
            }
            Step::Close | Step::Outside(_) => {}
        }
        if state == ScanState::Done {
            break;
        }
    }

    let mut decl = decl.ok_or(ReadError::MissingHeader {
        expected: "Go struct",
    })?;
    decl.terminated = state == ScanState::Done;
    if !decl.terminated {
        tracing::warn!(name = %decl.name, "struct body has no closing brace");
    }
    Ok(decl)
}

/// Match `type <Name> struct {`.
pub fn parse_struct_header(line: &str) -> Option<Header<'_>> {
    let rest = strip_space(line.trim().strip_prefix("type")?)?;
    let len = ident_len(rest);
    if len == 0 {
        return None;
    }
    let name = &rest[..len];
    let rest = strip_space(&rest[len..])?.strip_prefix("struct")?;
    let rest = rest.trim();
    if !(rest.is_empty() || rest.starts_with('{')) {
        return None;
    }
    Some(Header {
        name,
        closed: closes_inline(rest),
    })
}

/// The pieces of one field line, borrowed from the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldLine<'a> {
    pub indent: &'a str,
    pub name: &'a str,
    /// Raw Go type, e.g. `[]*Item` or `map[string]bool`.
    pub ty: &'a str,
    /// Tag contents without the backticks.
    pub tag: Option<&'a str>,
    /// Raw comment including the whitespace before `//`.
    pub comment: Option<&'a str>,
}

impl FieldLine<'_> {
    pub fn is_exported(&self) -> bool {
        self.name.starts_with(|c: char| c.is_ascii_uppercase())
    }

    /// The `json` entry of the struct tag, if any.
    pub fn json_tag(&self) -> Option<JsonTag<'_>> {
        self.tag
            .and_then(|tag| lookup_tag(tag, "json"))
            .map(JsonTag::parse)
    }
}

/// Tokenize `<Name> <Type> [`tag`] [// comment]`.
pub fn parse_field_line(line: &str) -> Option<FieldLine<'_>> {
    let rest = line.trim_start();
    let indent = &line[..line.len() - rest.len()];

    let name_len = ident_len(rest);
    if name_len == 0 {
        return None;
    }
    let name = &rest[..name_len];

    let ty_start = strip_space(&rest[name_len..])?;
    let ty_len = ty_start
        .find(char::is_whitespace)
        .unwrap_or(ty_start.len());
    let ty = &ty_start[..ty_len];
    if !ty.chars().all(is_type_char) {
        return None;
    }

    let mut tail = &ty_start[ty_len..];
    let mut tag = None;
    if let Some(quoted) = tail.trim_start().strip_prefix('`') {
        let end = quoted.find('`')?;
        tag = Some(&quoted[..end]);
        tail = &quoted[end + 1..];
    }

    let comment = if tail.trim().is_empty() {
        None
    } else if tail.trim_start().starts_with("//") {
        trailing_comment(tail)
    } else {
        return None;
    };

    Some(FieldLine {
        indent,
        name,
        ty,
        tag,
        comment,
    })
}

fn is_type_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '[' | ']' | '*' | '.' | '{' | '}')
}

/// Look up `key` in a Go struct tag (`key:"value" other:"value"`).
pub fn lookup_tag<'a>(tag: &'a str, key: &str) -> Option<&'a str> {
    let mut rest = tag;
    loop {
        rest = rest.trim_start();
        if rest.is_empty() {
            return None;
        }
        let colon = rest.find(':')?;
        let name = &rest[..colon];
        if name.is_empty() || name.contains(|c: char| c.is_whitespace() || c == '"') {
            return None;
        }
        let quoted = rest[colon + 1..].strip_prefix('"')?;
        let end = closing_quote(quoted)?;
        if name == key {
            return Some(&quoted[..end]);
        }
        rest = &quoted[end + 1..];
    }
}

fn closing_quote(s: &str) -> Option<usize> {
    let mut escaped = false;
    for (i, c) in s.char_indices() {
        match c {
            '\\' if !escaped => escaped = true,
            '"' if !escaped => return Some(i),
            _ => escaped = false,
        }
    }
    None
}

/// A parsed `json:"name,opts"` value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JsonTag<'a> {
    /// First comma-separated segment; may be empty.
    pub name: &'a str,
    /// `omitempty` or `omitzero` present.
    pub omittable: bool,
    /// The whole value is `-`; the field is never serialized.
    pub skipped: bool,
}

impl<'a> JsonTag<'a> {
    pub fn parse(value: &'a str) -> Self {
        let mut parts = value.split(',');
        let name = parts.next().unwrap_or_default();
        let omittable = parts.any(|opt| opt == "omitempty" || opt == "omitzero");
        Self {
            name,
            omittable,
            skipped: value == "-",
        }
    }
}

/// Parse a raw Go type: leading `[]` is an array, leading `*` a pointer.
pub fn parse_type(raw: &str, types: &TypeMapper) -> TypeDescriptor {
    if let Some(inner) = raw.strip_prefix("[]") {
        TypeDescriptor::array(parse_type(inner, types))
    } else if let Some(inner) = raw.strip_prefix('*') {
        TypeDescriptor::optional(parse_type(inner, types))
    } else {
        types.resolve_go(raw)
    }
}

fn field_from_line(line: &FieldLine<'_>, types: &TypeMapper) -> Option<Field> {
    let mut field = Field::new(line.name, parse_type(line.ty, types));

    match line.json_tag() {
        Some(tag) if tag.skipped => {
            tracing::debug!(field = line.name, "skipping field tagged json:\"-\"");
            return None;
        }
        Some(tag) => {
            if !tag.name.is_empty() {
                field.json_name = tag.name.to_string();
            } else {
                field.json_name = lower_first(line.name);
            }
            field.omittable = tag.omittable;
        }
        None => {
            // Untagged unexported fields are invisible to encoding/json.
            if !field.exported {
                return None;
            }
            field.json_name = lower_first(line.name);
        }
    }

    field.trailing_comment = line.comment.map(str::to_string);
    Some(field)
}
