//! Go struct writer.

use crate::case::to_pascal_case;
use crate::ir::{Declaration, Field};
use crate::traits::Writer;
use crate::types::TypeMapper;

/// Static instance of the Go writer.
pub static GO_WRITER: GoWriter = GoWriter;

/// Emits a TypeScript interface declaration as a Go struct.
pub struct GoWriter;

impl Writer for GoWriter {
    fn language(&self) -> &'static str {
        "go"
    }

    fn write(&self, decl: &Declaration, types: &TypeMapper) -> String {
        generate_go(decl, types)
    }
}

/// Generate `type Name struct { ... }` with tab-indented, tagged fields.
pub fn generate_go(decl: &Declaration, types: &TypeMapper) -> String {
    let mut lines = Vec::with_capacity(decl.fields.len() + 2);
    lines.push(format!("type {} struct {{", decl.name));
    lines.extend(decl.fields.iter().map(|field| struct_field(field, types)));
    lines.push("}".to_string());
    lines.join("\n")
}

fn struct_field(field: &Field, types: &TypeMapper) -> String {
    let omit = if field.omittable { ",omitempty" } else { "" };
    let mut line = format!(
        "\t{} {} `json:\"{}{}\"`",
        to_pascal_case(&field.json_name),
        types.to_go(&field.ty),
        field.json_name,
        omit
    );
    if let Some(comment) = &field.trailing_comment {
        line.push_str(comment);
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::{DeclarationKind, TypeDescriptor};

    #[test]
    fn tagged_fields() {
        let mut decl = Declaration::new("Product", DeclarationKind::TsInterface);
        decl.add(Field::new("id", TypeDescriptor::primitive("string")));
        decl.add(Field::new("name", TypeDescriptor::primitive("string")).omittable());
        decl.add(Field::new(
            "tags",
            TypeDescriptor::array(TypeDescriptor::named("Tag")),
        ));
        decl.add(
            Field::new(
                "price",
                TypeDescriptor::optional(TypeDescriptor::primitive("number")),
            )
            .with_comment(" // cents"),
        );

        assert_eq!(
            generate_go(&decl, &TypeMapper::default()),
            "type Product struct {\n\
             \tId string `json:\"id\"`\n\
             \tName string `json:\"name,omitempty\"`\n\
             \tTags []Tag `json:\"tags\"`\n\
             \tPrice *int `json:\"price\"` // cents\n\
             }"
        );
    }
}
