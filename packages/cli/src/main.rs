mod commands;
mod config;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{build, init, variables, BuildArgs, InitArgs, VariablesArgs};
use tracing_subscriber::EnvFilter;

/// Stylecraft CLI - themes and utility classes from typed style rules
#[derive(Parser, Debug)]
#[command(name = "stylecraft")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Only log warnings and errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create a config file and a starter theme
    Init(InitArgs),

    /// Compile the theme layers into one stylesheet
    Build(BuildArgs),

    /// Print the merged CSS variables as JSON
    Variables(VariablesArgs),
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.quiet { "warn" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let result = std::env::current_dir()
        .map_err(anyhow::Error::from)
        .and_then(|cwd| match cli.command {
            Command::Init(args) => init(args, &cwd),
            Command::Build(args) => build(args, &cwd),
            Command::Variables(args) => variables(args, &cwd),
        });

    if let Err(err) = result {
        eprintln!();
        eprintln!("{} {:#}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}
