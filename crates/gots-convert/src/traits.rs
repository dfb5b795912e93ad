//! Traits for notation readers and writers.

use crate::ir::Declaration;
use crate::types::TypeMapper;

/// Error that can occur when reading source text into IR.
#[derive(Debug, thiserror::Error)]
pub enum ReadError {
    #[error("no {expected} header found")]
    MissingHeader { expected: &'static str },
}

/// A reader parses one declaration block into the IR.
pub trait Reader: Send + Sync {
    /// Language identifier (e.g., "go", "typescript").
    fn language(&self) -> &'static str;

    /// Parse the first declaration in `source`.
    ///
    /// Field lines that do not fit the recognized shape are skipped;
    /// only a missing header is an error.
    fn read(&self, source: &str, types: &TypeMapper) -> Result<Declaration, ReadError>;
}

/// A writer emits a declaration read from the opposite notation.
pub trait Writer: Send + Sync {
    /// Language identifier (e.g., "go", "typescript").
    fn language(&self) -> &'static str;

    /// Emit the declaration as source text.
    fn write(&self, decl: &Declaration, types: &TypeMapper) -> String;
}
