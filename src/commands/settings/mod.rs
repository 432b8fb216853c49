pub mod get;
pub mod reset;
pub mod set;
pub mod show;

pub use get::get_command;
pub use reset::{reset_all_command, reset_command};
pub use set::set_command;
pub use show::show_command;

use anyhow::Result;

use crate::cli::commands::settings::SettingsSubcommands;

pub fn handle_settings_command(cmd: SettingsSubcommands) -> Result<()> {
    match cmd {
        SettingsSubcommands::Show => show_command(),
        SettingsSubcommands::Get { name } => get_command(name),
        SettingsSubcommands::Set { name, value } => set_command(name, value),
        SettingsSubcommands::Reset { name } => reset_command(name),
        SettingsSubcommands::ResetAll { force } => reset_all_command(force),
    }
}
