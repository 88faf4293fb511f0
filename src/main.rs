use std::env;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use quickentry::cli::args::{Cli, Commands};
use quickentry::cli::commands;
use quickentry::config::{Config, Paths};

fn main() {
    init_tracing();

    if let Err(e) = run() {
        eprintln!("{}: {e:#}", "error".red().bold());
        std::process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("QUICKENTRY_LOG").unwrap_or_else(|_| {
        EnvFilter::new(if env::var("DEBUG").is_ok() {
            "quickentry=debug,warn"
        } else {
            "warn"
        })
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let paths = cli
        .config
        .as_deref()
        .map_or_else(Paths::default, Paths::for_config_file);
    let config = Config::load_from_path(&paths.config_file)
        .with_context(|| format!("loading {}", paths.config_file.display()))?;
    config.general.color.apply();

    let format = cli.output.unwrap_or(config.general.default_output);

    let output = match cli.command {
        Commands::Parse(args) => commands::parse(&config, &args, format)?,
        Commands::Date(args) => commands::date(&args, format)?,
        Commands::Match(args) => commands::match_entity(&config, &args, format)?,
        Commands::Entities => commands::entities(&config, format)?,
        Commands::Completions { shell } => commands::completions(shell)?,
    };

    if !output.is_empty() {
        println!("{}", output.trim_end());
    }
    Ok(())
}
