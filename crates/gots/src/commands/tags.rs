//! Tags command - add missing json tags to a Go struct.

use super::{read_input, report, write_output};
use clap::Args;
use std::path::PathBuf;

/// Tags command arguments
#[derive(Args, Debug)]
pub struct TagsArgs {
    /// Input file, use - or omit for stdin
    pub input: Option<PathBuf>,

    /// Output file (stdout if not specified)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Run the tags command
pub fn run(args: TagsArgs) -> i32 {
    let content = match read_input(args.input.as_deref()) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("error: {e:#}");
            return 1;
        }
    };

    let tagged = match gots_convert::add_missing_tags(&content) {
        Ok(tagged) => tagged,
        Err(e) => return report(e),
    };

    match write_output(args.output.as_deref(), &tagged) {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("error: {e:#}");
            1
        }
    }
}
