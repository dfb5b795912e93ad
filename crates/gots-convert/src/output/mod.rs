//! Output writers for the two notations.
//!
//! Each writer takes a [`Declaration`](crate::ir::Declaration) read from the
//! other notation and produces the complete declaration block.

pub mod go;
pub mod typescript;

pub use go::{GO_WRITER, GoWriter, generate_go};
pub use typescript::{TYPESCRIPT_WRITER, TypeScriptWriter, generate_typescript};
