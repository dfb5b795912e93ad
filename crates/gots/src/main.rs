use clap::{Parser, Subcommand};
use gots::commands::{convert, tags};
use std::path::PathBuf;

/// Convert between Go structs and TypeScript interfaces
#[derive(Parser)]
#[command(name = "gots", version)]
struct Cli {
    /// Log pipeline decisions to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use this config file instead of the global and project ones
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert a Go struct to a TypeScript interface, or the reverse
    Convert(convert::ConvertArgs),

    /// Add missing json tags to a Go struct
    Tags(tags::TagsArgs),
}

fn main() {
    let cli = Cli::parse();
    gots::init_tracing(cli.verbose);

    let config = match gots::load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {e:#}");
            std::process::exit(1);
        }
    };

    let code = match cli.command {
        Command::Convert(args) => convert::run(args, &config),
        Command::Tags(args) => tags::run(args),
    };
    std::process::exit(code);
}
