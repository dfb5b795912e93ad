//! Input classification: which notation a block of text is written in.

use crate::input::go::parse_struct_header;
use crate::input::typescript::parse_interface_header;
use crate::input::{GO_READER, TYPESCRIPT_READER};
use crate::output::{GO_WRITER, TYPESCRIPT_WRITER};
use crate::traits::{ReadError, Reader, Writer};

/// Error returned when text cannot be converted.
///
/// The display text is meant to be shown to the user as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ConvertError {
    #[error("Select a Go struct or TS interface.")]
    EmptyInput,

    #[error("Not a Go struct or TS interface.")]
    UnrecognizedInput,
}

impl From<ReadError> for ConvertError {
    fn from(_: ReadError) -> Self {
        ConvertError::UnrecognizedInput
    }
}

/// A declaration notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notation {
    Go,
    TypeScript,
}

impl Notation {
    pub fn reader(self) -> &'static dyn Reader {
        match self {
            Notation::Go => &GO_READER,
            Notation::TypeScript => &TYPESCRIPT_READER,
        }
    }

    pub fn writer(self) -> &'static dyn Writer {
        match self {
            Notation::Go => &GO_WRITER,
            Notation::TypeScript => &TYPESCRIPT_WRITER,
        }
    }

    /// The notation a declaration in `self` is converted into.
    pub fn target(self) -> Notation {
        match self {
            Notation::Go => Notation::TypeScript,
            Notation::TypeScript => Notation::Go,
        }
    }
}

/// Identify the notation from the first non-blank line.
///
/// Only the header is checked; the body is not validated against it.
pub fn classify(text: &str) -> Result<Notation, ConvertError> {
    let first = text
        .lines()
        .find(|line| !line.trim().is_empty())
        .ok_or(ConvertError::EmptyInput)?;

    if parse_struct_header(first).is_some() {
        Ok(Notation::Go)
    } else if parse_interface_header(first).is_some() {
        Ok(Notation::TypeScript)
    } else {
        Err(ConvertError::UnrecognizedInput)
    }
}
