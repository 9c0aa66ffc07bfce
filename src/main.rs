//! pdf-title-rename - Rename PDF files after their title and author.

use clap::Parser;
use env_logger::Env;
use std::process;

use pdf_title_rename::cli::Cli;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    let default_filter = if cli.verbose {
        "warn,pdf_title_rename=debug"
    } else {
        "warn"
    };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter)).init();

    // Per-file failures are part of the summary; only startup errors and
    // closed interactive input end up here.
    if let Err(err) = pdf_title_rename::run(&cli) {
        eprintln!("Error: {err}");
        process::exit(err.exit_code());
    }
}
