//! TypeScript interface reader.
//!
//! Recognizes one `interface Name {` block with property lines of the form
//! `name?: Type[] | null; // comment`. Object literals, generics and other
//! unions are not understood; the leading type name is taken as-is.

use super::{Header, ScanState, Step, closes_inline, ident_len, strip_space, trailing_comment};
use crate::ir::{Declaration, DeclarationKind, Field, TypeDescriptor};
use crate::traits::{ReadError, Reader};
use crate::types::TypeMapper;

/// Static instance of the TypeScript reader.
pub static TYPESCRIPT_READER: TypeScriptReader = TypeScriptReader;

/// TypeScript interface reader implementing the Reader trait.
pub struct TypeScriptReader;

impl Reader for TypeScriptReader {
    fn language(&self) -> &'static str {
        "typescript"
    }

    fn read(&self, source: &str, types: &TypeMapper) -> Result<Declaration, ReadError> {
        read_typescript(source, types)
    }
}

/// Parse the first TypeScript interface in `source`.
pub fn read_typescript(source: &str, types: &TypeMapper) -> Result<Declaration, ReadError> {
    let mut state = ScanState::Scanning;
    let mut decl: Option<Declaration> = None;

    for (idx, line) in source.lines().enumerate() {
        match state.step(line, parse_interface_header) {
            Step::Header(header) => {
                decl = Some(Declaration::new(header.name, DeclarationKind::TsInterface));
            }
            Step::Body(text) => {
                let Some(decl) = decl.as_mut() else {
                    continue;
                };
                match parse_property_line(text) {
                    Some(prop) => decl.add(prop.into_field(types)),
                    None if text.trim().is_empty() => {}
                    None => {
                        tracing::debug!(
                            line = idx + 1,
                            text,
                            "skipping unrecognized interface line"
                        );
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
        expected: "TypeScript interface",
    })?;
    decl.terminated = state == ScanState::Done;
    if !decl.terminated {
        tracing::warn!(name = %decl.name, "interface body has no closing brace");
    }
    Ok(decl)
}

/// Match `[export] interface <Name> ...`.
///
/// Whatever follows the name (`extends` clauses, type parameters) is
/// accepted and ignored.
pub fn parse_interface_header(line: &str) -> Option<Header<'_>> {
    let mut rest = line.trim();
    if let Some(after_export) = rest.strip_prefix("export") {
        rest = strip_space(after_export)?;
    }
    let rest = strip_space(rest.strip_prefix("interface")?)?;
    let len = ident_len(rest);
    if len == 0 {
        return None;
    }
    Some(Header {
        name: &rest[..len],
        closed: closes_inline(&rest[len..]),
    })
}

/// The pieces of one property line, borrowed from the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropertyLine<'a> {
    pub name: &'a str,
    /// Marked with `?`.
    pub optional: bool,
    /// Leading type text, including any `[]` suffixes.
    pub ty: &'a str,
    /// Followed by `| null`.
    pub nullable: bool,
    /// Raw comment including the whitespace before `//`.
    pub comment: Option<&'a str>,
}

/// Tokenize `[readonly] <name>[?]: <Type>[ | null][;] [// comment]`.
pub fn parse_property_line(line: &str) -> Option<PropertyLine<'_>> {
    let mut rest = line.trim_start();
    if let Some(after) = rest.strip_prefix("readonly").and_then(strip_space) {
        rest = after;
    }

    let name_len = ident_len(rest);
    if name_len == 0 {
        return None;
    }
    let name = &rest[..name_len];

    let mut after_name = &rest[name_len..];
    let optional = match after_name.strip_prefix('?') {
        Some(after) => {
            after_name = after;
            true
        }
        None => false,
    };

    let ty_start = after_name.trim_start().strip_prefix(':')?.trim_start();
    let ty_len = ty_start
        .find(|c: char| !(c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '[' | ']')))
        .unwrap_or(ty_start.len());
    let ty = &ty_start[..ty_len];
    if ident_len(ty) == 0 {
        return None;
    }

    let tail = &ty_start[ty_len..];
    let nullable = tail
        .trim_start()
        .strip_prefix('|')
        .is_some_and(|union| union.trim_start().starts_with("null"));

    Some(PropertyLine {
        name,
        optional,
        ty,
        nullable,
        comment: trailing_comment(tail),
    })
}

impl PropertyLine<'_> {
    /// Build the IR field. `| null` only marks a pointer on required
    /// properties; on optional ones it is implied by the `?`.
    pub fn into_field(self, types: &TypeMapper) -> Field {
        let mut ty = parse_type(self.ty, types);
        if self.nullable && !self.optional {
            ty = TypeDescriptor::optional(ty);
        }
        let mut field = Field::new(self.name, ty);
        field.omittable = self.optional;
        field.trailing_comment = self.comment.map(str::to_string);
        field
    }
}

/// Parse a TypeScript type: each trailing `[]` is one array level.
pub fn parse_type(raw: &str, types: &TypeMapper) -> TypeDescriptor {
    match raw.strip_suffix("[]") {
        Some(inner) => TypeDescriptor::array(parse_type(inner, types)),
        None => types.resolve_ts(raw),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interface_headers() {
        assert_eq!(
            parse_interface_header("interface User {").map(|h| h.name),
            Some("User")
        );
        assert_eq!(
            parse_interface_header("export interface User extends Base {").map(|h| h.name),
            Some("User")
        );
        assert!(parse_interface_header("interface Empty {}").is_some_and(|h| h.closed));
        assert!(parse_interface_header("interfaceUser {").is_none());
        assert!(parse_interface_header("type User struct {").is_none());
        assert!(parse_interface_header("exported interface X {").is_none());
    }

    #[test]
    fn property_lines() {
        let prop = parse_property_line("  email?: string | null; // work").unwrap();
        assert_eq!(prop.name, "email");
        assert!(prop.optional);
        assert_eq!(prop.ty, "string");
        assert!(prop.nullable);
        assert_eq!(prop.comment, Some(" // work"));

        let prop = parse_property_line("\tscores: number[]").unwrap();
        assert_eq!(prop.ty, "number[]");
        assert!(!prop.optional);
        assert_eq!(prop.comment, None);
    }

    #[test]
    fn readonly_modifier() {
        assert_eq!(
            parse_property_line("  readonly id: string;").map(|p| p.name),
            Some("id")
        );
        assert_eq!(
            parse_property_line("  readonly: boolean;").map(|p| p.name),
            Some("readonly")
        );
    }

    #[test]
    fn non_property_lines() {
        assert!(parse_property_line("interface User {").is_none());
        assert!(parse_property_line("// comment").is_none());
        assert!(parse_property_line("  \"quoted-key\": string;").is_none());
        assert!(parse_property_line("  nested: {").is_none());
        assert!(parse_property_line("  method(): void;").is_none());
    }

    #[test]
    fn nullable_required_property_becomes_pointer() {
        let types = TypeMapper::default();
        let field = parse_property_line("  price: number | null;")
            .unwrap()
            .into_field(&types);
        assert_eq!(
            field.ty,
            TypeDescriptor::optional(TypeDescriptor::primitive("number"))
        );
        assert!(!field.omittable);

        let field = parse_property_line("  name?: string | null;")
            .unwrap()
            .into_field(&types);
        assert_eq!(field.ty, TypeDescriptor::primitive("string"));
        assert!(field.omittable);
    }

    #[test]
    fn nested_arrays() {
        let types = TypeMapper::default();
        assert_eq!(
            parse_type("number[][]", &types),
            TypeDescriptor::array(TypeDescriptor::array(TypeDescriptor::primitive("number")))
        );
        assert_eq!(parse_type("Member[]", &types), TypeDescriptor::array(TypeDescriptor::named("Member")));
    }

    #[test]
    fn read_interface() {
        let decl = read_typescript(
            "interface Product {\n  id: string;\n\n  name?: string;\n}",
            &TypeMapper::default(),
        )
        .unwrap();
        assert_eq!(decl.name, "Product");
        assert_eq!(decl.kind, DeclarationKind::TsInterface);
        assert!(decl.terminated);
        assert_eq!(decl.fields.len(), 2);
        assert!(decl.fields[1].omittable);
    }
}
