//! Command implementations for the gots CLI.

pub mod convert;
pub mod tags;

use anyhow::Context;
use gots_convert::ConvertError;
use std::io::Read;
use std::path::Path;

/// Read a file, or stdin when the path is absent or `-`.
pub(crate) fn read_input(input: Option<&Path>) -> anyhow::Result<String> {
    match input {
        Some(path) if path.as_os_str() != "-" => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        _ => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            Ok(buf)
        }
    }
}

/// Write to a file, or print to stdout when no path is given.
pub(crate) fn write_output(output: Option<&Path>, text: &str) -> anyhow::Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, format!("{text}\n"))
                .with_context(|| format!("failed to write {}", path.display()))?;
            tracing::info!(path = %path.display(), "wrote output");
        }
        None => println!("{text}"),
    }
    Ok(())
}

/// Report a conversion failure; empty input is only a warning.
pub(crate) fn report(err: ConvertError) -> i32 {
    match err {
        ConvertError::EmptyInput => eprintln!("warning: {err}"),
        ConvertError::UnrecognizedInput => eprintln!("error: {err}"),
    }
    1
}
