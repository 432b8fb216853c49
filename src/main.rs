use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info};
use std::fs;

mod cli;
mod commands;

use cli::Cli;
use cli::app::Commands;
use commands::AppContext;
use promptforge::config::Config;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load()?;
    let data_dir = config.data_dir(cli.data_dir.as_deref())?;
    init_logging(&data_dir)?;
    info!("Starting promptforge");
    debug!("Using data directory {:?}", data_dir);

    if !config.settings.color {
        colored::control::set_override(false);
    }

    let ctx = AppContext::new(config, data_dir);

    match cli.command.unwrap_or(Commands::Show) {
        Commands::Show => commands::view::show_command(&ctx),
        Commands::Preview(args) => commands::view::preview_command(&ctx, args.raw),
        Commands::Status => commands::view::status_command(&ctx),
        Commands::Randomize => commands::randomize::randomize_command(&ctx),
        Commands::Dropdown(args) => commands::dropdown::handle_dropdown_command(&ctx, args.command),
        Commands::Option(args) => commands::option::handle_option_command(&ctx, args.command),
        Commands::Settings(args) => commands::settings::handle_settings_command(args.command),
    }
}

/// Log to a file in the data directory, truncated on each run
fn init_logging(data_dir: &std::path::Path) -> Result<()> {
    fs::create_dir_all(data_dir)
        .with_context(|| format!("Failed to create data directory: {:?}", data_dir))?;
    let log_file = fs::OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(data_dir.join("promptforge.log"))
        .context("Failed to open log file")?;
    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(Box::new(log_file)))
        .init();
    Ok(())
}
