//! Convert command - translate a Go struct or TypeScript interface.

use super::{read_input, report, write_output};
use crate::config::GotsConfig;
use clap::Args;
use gots_convert::{ConvertOptions, Converter, TypeMapper};
use std::path::PathBuf;

/// Convert command arguments
#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Input file, use - or omit for stdin
    pub input: Option<PathBuf>,

    /// Output file (stdout if not specified)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Convert Go structs even when exported fields lack json tags
    #[arg(long)]
    pub no_tag_check: bool,

    /// Print the result and which conversion ran as JSON
    #[arg(long)]
    pub json: bool,
}

/// Run the convert command
pub fn run(args: ConvertArgs, config: &GotsConfig) -> i32 {
    let content = match read_input(args.input.as_deref()) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("error: {e:#}");
            return 1;
        }
    };

    let options = ConvertOptions {
        enable_tag_check: config.tag_check() && !args.no_tag_check,
    };
    let converter = Converter::new(TypeMapper::new(config.type_tables())).with_options(options);

    let conversion = match converter.convert(&content) {
        Ok(conversion) => conversion,
        Err(e) => return report(e),
    };
    tracing::debug!(kind = ?conversion.kind, "conversion finished");

    let text = if args.json {
        match serde_json::to_string_pretty(&conversion) {
            Ok(json) => json,
            Err(e) => {
                eprintln!("error: failed to serialize result: {e}");
                return 1;
            }
        }
    } else {
        conversion.output
    };

    match write_output(args.output.as_deref(), &text) {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("error: {e:#}");
            1
        }
    }
}
