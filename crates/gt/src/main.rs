//! `gt` -- mnemonic shortcuts for everyday git commands.
//!
//! This is the entry point. It parses the outer CLI shell with clap, then
//! hands the token tail to the dispatch table. The process exits with
//! whatever code the last git child reported.

mod cli;
mod dispatch;
mod help;
mod table;

use std::path::PathBuf;

use clap::Parser;

use cli::Cli;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Set up logging based on verbosity
    if cli.global.verbose {
        tracing_subscriber::fmt()
            .with_env_filter("gt=debug,gt_git=debug")
            .with_writer(std::io::stderr)
            .init();
    }

    let cwd = cli
        .global
        .dir
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));

    // Dispatch and propagate the last child's exit code.
    match dispatch::dispatch(&cli.rest, &cwd) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    }
}
