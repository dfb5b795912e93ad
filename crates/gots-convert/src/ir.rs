//! Intermediate representation for a single struct or interface.
//!
//! Both readers normalize to this IR before the opposite writer emits it.
//! Type names inside [`TypeDescriptor`] stay in the vocabulary of the
//! notation they were read from; the writer maps them through
//! [`TypeMapper`](crate::types::TypeMapper).

use serde::{Deserialize, Serialize};

/// Which notation a declaration was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DeclarationKind {
    /// `type Name struct { ... }`
    GoStruct,
    /// `interface Name { ... }`
    TsInterface,
}

/// A struct or interface with its fields in source order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Declaration {
    /// Struct or interface identifier.
    pub name: String,
    pub kind: DeclarationKind,
    pub fields: Vec<Field>,
    /// Whether the closing brace of the body was seen.
    pub terminated: bool,
}

/// One declared member of a struct or interface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    /// Identifier as written in the source notation.
    pub name: String,
    pub ty: TypeDescriptor,
    /// Wire name used in the tag or as the property key.
    pub json_name: String,
    /// May be absent from the serialized form (`omitempty`, `omitzero`, `?`).
    pub omittable: bool,
    /// Go only: the name starts with an uppercase letter.
    pub exported: bool,
    /// Raw trailing comment, including the whitespace that preceded it.
    pub trailing_comment: Option<String>,
}

/// A type reference in the source notation's vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TypeDescriptor {
    /// A name present in the source side of the mapping table.
    Primitive(String),
    /// `[]T` in Go, `T[]` in TypeScript.
    Array(Box<TypeDescriptor>),
    /// `*T` in Go, `T | null` in TypeScript.
    Optional(Box<TypeDescriptor>),
    /// A Go `map[K]V` literal, never translated.
    MapLiteral(String),
    /// An unresolved custom type, passed through verbatim.
    Named(String),
}

impl Declaration {
    pub fn new(name: impl Into<String>, kind: DeclarationKind) -> Self {
        Self {
            name: name.into(),
            kind,
            fields: Vec::new(),
            terminated: false,
        }
    }

    pub fn add(&mut self, field: Field) {
        self.fields.push(field);
    }
}

impl Field {
    /// A required field whose wire name equals its identifier.
    pub fn new(name: impl Into<String>, ty: TypeDescriptor) -> Self {
        let name = name.into();
        let exported = name.chars().next().is_some_and(|c| c.is_ascii_uppercase());
        Self {
            json_name: name.clone(),
            name,
            ty,
            omittable: false,
            exported,
            trailing_comment: None,
        }
    }

    pub fn with_json_name(mut self, json_name: impl Into<String>) -> Self {
        self.json_name = json_name.into();
        self
    }

    pub fn omittable(mut self) -> Self {
        self.omittable = true;
        self
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.trailing_comment = Some(comment.into());
        self
    }
}

impl TypeDescriptor {
    pub fn primitive(name: impl Into<String>) -> Self {
        Self::Primitive(name.into())
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    pub fn array(inner: TypeDescriptor) -> Self {
        Self::Array(Box::new(inner))
    }

    pub fn optional(inner: TypeDescriptor) -> Self {
        Self::Optional(Box::new(inner))
    }

    /// True if an `Optional` appears anywhere in the descriptor.
    pub fn is_nullable(&self) -> bool {
        match self {
            Self::Optional(_) => true,
            Self::Array(inner) => inner.is_nullable(),
            Self::Primitive(_) | Self::MapLiteral(_) | Self::Named(_) => false,
        }
    }
}
