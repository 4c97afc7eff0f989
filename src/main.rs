//! tokhook - OpenTok Cordova plugin build hooks
//!
//! A command line tool the Cordova build host invokes at plugin lifecycle
//! stages: `fix-imports` rewrites generated Android sources to the
//! consuming app's bundle identifier, `fetch-sdk` installs the native iOS
//! SDK frameworks into the plugin source tree.

use clap::Parser;

mod cli;
mod commands;
mod common;
mod config;
mod error;
mod manifest;
mod policy;
mod progress;
mod rewrite;
mod sdk;
mod ui;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::FixImports(args) => commands::fix_imports::run(cli.project_root, args, cli.verbose),
        Commands::FetchSdk(args) => commands::fetch_sdk::run(cli.project_root, args, cli.verbose),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
