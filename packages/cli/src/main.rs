mod commands;
mod script;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{demo, init, run, InitArgs, RunArgs};

/// Strata CLI - persistent lists with undoable editing
#[derive(Parser, Debug)]
#[command(name = "strata")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Walk through a list history: add, undo, redo, remove
    Demo,

    /// Run an editor script against a fresh edit session
    Run(RunArgs),

    /// Write a default strata.config.json
    Init(InitArgs),
}

fn execute(cli: Cli) -> anyhow::Result<()> {
    let cwd = std::env::current_dir()?;

    match cli.command {
        Command::Demo => demo(),
        Command::Run(args) => run(args, &cwd),
        Command::Init(args) => init(args, &cwd),
    }
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

    if let Err(err) = execute(cli) {
        eprintln!();
        eprintln!("{} {}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}
