mod commands;
mod config;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{generate, init, snapshot, GenerateArgs, InitArgs, SnapshotArgs};

/// Reprgen CLI - generated string representations for marked types
#[derive(Parser, Debug)]
#[command(name = "reprgen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write a reprgen.config.json for this project
    Init(InitArgs),

    /// Generate fragments for every marked type
    Generate(GenerateArgs),

    /// Dump the declaration snapshot of a source tree as JSON
    Snapshot(SnapshotArgs),
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = std::env::current_dir()
        .map_err(anyhow::Error::from)
        .and_then(|cwd| match cli.command {
            Command::Init(args) => init(args, &cwd),
            Command::Generate(args) => generate(args, &cwd),
            Command::Snapshot(args) => snapshot(args, &cwd),
        });

    if let Err(err) = result {
        eprintln!();
        eprintln!("{} {}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}
