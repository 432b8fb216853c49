use super::commands::dropdown::DropdownCommands;
use super::commands::option::OptionCommands;
use super::commands::settings::SettingsCommands;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "promptforge")]
#[command(about = "Compose prompts from dropdown segments, lock favourites and randomize the rest")]
pub struct Cli {
    /// Directory holding the dropdown state (overrides the data-dir setting)
    #[arg(long, global = true, env = "PROMPTFORGE_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show all dropdowns, the randomizer status and the prompt preview
    Show,
    /// Print the prompt preview
    Preview(PreviewArgs),
    /// Print how many dropdowns the randomizer can change
    Status,
    /// Randomize every dropdown whose selection is not locked
    Randomize,
    /// Dropdown management
    Dropdown(DropdownCommands),
    /// Option management within a dropdown
    Option(OptionCommands),
    /// Application settings management
    Settings(SettingsCommands),
}

#[derive(Args)]
pub struct PreviewArgs {
    /// Print the bare preview text, without placeholder or styling
    #[arg(long)]
    pub raw: bool,
}
