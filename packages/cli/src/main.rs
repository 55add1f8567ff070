mod commands;
mod config;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{batch, compose, init, BatchArgs, ComposeArgs, InitArgs};
use config::Config;

/// bem - compose BEM class names
#[derive(Parser, Debug)]
#[command(name = "bem")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Element separator (overrides config)
    #[arg(long, global = true)]
    element_separator: Option<String>,

    /// Modifier separator (overrides config)
    #[arg(long, global = true)]
    modifier_separator: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write a default bem.config.json
    Init(InitArgs),

    /// Compose one class string
    Compose(ComposeArgs),

    /// Compose class strings from newline-delimited JSON requests
    Batch(BatchArgs),
}

fn run(cli: Cli, cwd: &str) -> anyhow::Result<()> {
    match cli.command {
        Command::Init(args) => init(args, cwd),
        Command::Compose(args) => {
            let composer = Config::load(cwd)?
                .with_overrides(cli.element_separator, cli.modifier_separator)
                .composer()?;
            compose(args, &composer)
        }
        Command::Batch(args) => {
            let composer = Config::load(cwd)?
                .with_overrides(cli.element_separator, cli.modifier_separator)
                .composer()?;
            batch(args, &composer)
        }
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

    let result = std::env::current_dir()
        .map_err(anyhow::Error::from)
        .and_then(|cwd| run(cli, &cwd.display().to_string()));

    if let Err(err) = result {
        eprintln!();
        eprintln!("{} {}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}
