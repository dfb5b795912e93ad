//! Bidirectional translation between Go structs and TypeScript interfaces.
//!
//! `gots-convert` reads one declaration, maps its field types across the two
//! type systems, and emits the declaration in the other notation. Go input
//! with exported fields that lack a `json` tag is repaired instead of
//! converted, unless that check is turned off.
//!
//! # Architecture
//!
//! ```text
//! Input              IR                 Output
//! ─────────     ─────────────     ──────────────────
//! Go struct  ─┐                 ┌─> TypeScript interface
//!             ├─> Declaration ──┤
//! TS iface   ─┘    (ir.rs)      └─> Go struct
//!
//! Go struct missing tags ─> tags::add_missing_tags ─> Go struct
//! ```
//!
//! # Example
//!
//! ```
//! let out = gots_convert::convert(
//!     "interface Settings {\n  enabled: boolean;\n}",
//!     true,
//! )
//! .unwrap();
//! assert_eq!(
//!     out.output,
//!     "type Settings struct {\n\tEnabled bool `json:\"enabled\"`\n}"
//! );
//! ```
//!
//! # Custom type tables
//!
//! ```
//! use gots_convert::{Converter, types::{TypeMapper, TypeTables}};
//!
//! let tables = TypeTables::builtin().with_go_to_ts("uuid.UUID", "string");
//! let converter = Converter::new(TypeMapper::new(tables));
//! let out = converter
//!     .convert("type Row struct {\n\tID uuid.UUID `json:\"id\"`\n}")
//!     .unwrap();
//! assert_eq!(out.output, "interface Row {\n  id: string;\n}");
//! ```

pub mod case;
pub mod classify;
pub mod input;
pub mod ir;
pub mod output;
pub mod tags;
pub mod traits;
pub mod types;

pub use classify::{ConvertError, Notation, classify};
pub use ir::{Declaration, DeclarationKind, Field, TypeDescriptor};
pub use traits::{ReadError, Reader, Writer};
pub use types::{TypeMapper, TypeTables};

use serde::Serialize;

/// Options for a [`Converter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Repair missing `json` tags instead of converting a Go struct that
    /// has any.
    pub enable_tag_check: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            enable_tag_check: true,
        }
    }
}

/// Which pipeline produced a [`Conversion`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConversionKind {
    /// Go struct rewritten with synthesized `json` tags.
    TagsAdded,
    GoToTypescript,
    TypescriptToGo,
}

/// Result of a successful call to [`Converter::convert`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Conversion {
    pub output: String,
    pub kind: ConversionKind,
}

/// Converts declaration text using an injected type vocabulary.
#[derive(Debug, Clone, Default)]
pub struct Converter {
    types: TypeMapper,
    options: ConvertOptions,
}

impl Converter {
    pub fn new(types: TypeMapper) -> Self {
        Self {
            types,
            options: ConvertOptions::default(),
        }
    }

    pub fn with_options(mut self, options: ConvertOptions) -> Self {
        self.options = options;
        self
    }

    /// Convert a Go struct to a TypeScript interface or the other way round.
    ///
    /// Surrounding whitespace is trimmed first. If tag checking is on and a
    /// Go struct has untagged exported fields, the struct comes back with
    /// tags added rather than converted.
    pub fn convert(&self, text: &str) -> Result<Conversion, ConvertError> {
        let text = text.trim();
        let notation = classify(text)?;

        if notation == Notation::Go
            && self.options.enable_tag_check
            && tags::has_missing_tags(text)
        {
            tracing::debug!("struct has untagged exported fields, adding tags");
            return Ok(Conversion {
                output: tags::add_missing_tags(text),
                kind: ConversionKind::TagsAdded,
            });
        }

        let reader = notation.reader();
        let writer = notation.target().writer();
        let decl = reader.read(text, &self.types)?;
        tracing::debug!(
            from = reader.language(),
            to = writer.language(),
            name = %decl.name,
            fields = decl.fields.len(),
            "converting declaration"
        );

        Ok(Conversion {
            output: writer.write(&decl, &self.types),
            kind: match notation {
                Notation::Go => ConversionKind::GoToTypescript,
                Notation::TypeScript => ConversionKind::TypescriptToGo,
            },
        })
    }
}

/// Convert `text` with the built-in type tables.
pub fn convert(text: &str, enable_tag_check: bool) -> Result<Conversion, ConvertError> {
    Converter::default()
        .with_options(ConvertOptions { enable_tag_check })
        .convert(text)
}

/// Add missing `json` tags to a Go struct without converting it.
///
/// TypeScript input is rejected as [`ConvertError::UnrecognizedInput`].
pub fn add_missing_tags(text: &str) -> Result<String, ConvertError> {
    let text = text.trim();
    match classify(text)? {
        Notation::Go => Ok(tags::add_missing_tags(text)),
        Notation::TypeScript => Err(ConvertError::UnrecognizedInput),
    }
}
