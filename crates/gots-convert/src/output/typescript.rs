//! TypeScript interface writer.

use crate::ir::{Declaration, Field};
use crate::traits::Writer;
use crate::types::TypeMapper;

/// Static instance of the TypeScript writer.
pub static TYPESCRIPT_WRITER: TypeScriptWriter = TypeScriptWriter;

/// Emits a Go struct declaration as a TypeScript interface.
pub struct TypeScriptWriter;

impl Writer for TypeScriptWriter {
    fn language(&self) -> &'static str {
        "typescript"
    }

    fn write(&self, decl: &Declaration, types: &TypeMapper) -> String {
        generate_typescript(decl, types)
    }
}

/// Generate `interface Name { ... }` with two-space indented properties.
///
/// Unexported fields are left out.
pub fn generate_typescript(decl: &Declaration, types: &TypeMapper) -> String {
    let mut lines = Vec::with_capacity(decl.fields.len() + 2);
    lines.push(format!("interface {} {{", decl.name));
    lines.extend(
        decl.fields
            .iter()
            .filter(|field| field.exported)
            .map(|field| property(field, types)),
    );
    lines.push("}".to_string());
    lines.join("\n")
}

fn property(field: &Field, types: &TypeMapper) -> String {
    let mut ty = types.to_typescript(&field.ty);
    if field.omittable || field.ty.is_nullable() {
        ty.push_str(" | null");
    }
    let marker = if field.omittable { "?" } else { "" };

    let mut line = format!("  {}{}: {};", field.json_name, marker, ty);
    if let Some(comment) = &field.trailing_comment {
        line.push_str(comment);
    }
    line
}
