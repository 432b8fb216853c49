use clap::{Args, Subcommand};

#[derive(Args)]
pub struct DropdownCommands {
    #[command(subcommand)]
    pub command: DropdownSubcommands,
}

#[derive(Subcommand)]
pub enum DropdownSubcommands {
    /// Add a dropdown with one empty option
    Add {
        /// Name for the new dropdown
        #[arg(long)]
        name: Option<String>,
    },
    /// List dropdowns
    List,
    /// Rename a dropdown
    Rename {
        /// Dropdown position (1-based) or id
        dropdown: String,
        /// New name, used verbatim
        name: String,
    },
    /// Delete a dropdown
    Delete {
        /// Dropdown position (1-based) or id
        dropdown: String,
        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },
}
