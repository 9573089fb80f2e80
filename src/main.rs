//! pucy - Entry Point

use clap::Parser;
use pucy::state::Outcome;
use pucy::view::{ColorConfig, PickerOptions, PickerStyles};
use std::path::PathBuf;
use tracing::info;

/// pucy - pick one line from a list by typing a filter
#[derive(Parser, Debug)]
#[command(name = "pucy")]
#[command(version)]
#[command(about = "Filter lines interactively and print the selected one")]
pub struct Args {
    /// File to read lines from (reads from stdin if not provided)
    pub file: Option<PathBuf>,

    /// Start with this query already typed
    #[arg(short, long)]
    pub query: Option<String>,

    /// Label drawn before the query
    #[arg(long)]
    pub prompt: Option<String>,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = pucy::config::load_config_with_precedence(args.config.clone())?;
        let merged = pucy::config::merge_config(config_file);
        let with_env = pucy::config::apply_env_overrides(merged);
        let no_color_override = if args.no_color { Some(true) } else { None };

        pucy::config::apply_cli_overrides(with_env, args.prompt.clone(), no_color_override)
    };

    pucy::logging::init(&config.log_file_path)?;

    info!(config = ?config, "Configuration loaded and resolved");

    // Input is read to completion before the terminal is touched
    let input_source = pucy::source::detect_input_source(args.file.clone())?;
    let lines = input_source.read_all()?;

    let options = PickerOptions {
        prompt: config.prompt,
        styles: PickerStyles::with_color_config(ColorConfig::from_env_and_args(config.no_color)),
        initial_query: args.query,
        cache_capacity: config.cache_capacity,
    };

    // Terminal is restored inside run_with_lines before we print
    match pucy::view::run_with_lines(lines, &options)? {
        Outcome::Confirmed(line) => println!("{line}"),
        Outcome::Cancelled => {}
    }

    Ok(())
}
