use clap::{Args, Subcommand};

#[derive(Args)]
pub struct OptionCommands {
    #[command(subcommand)]
    pub command: OptionSubcommands,
}

#[derive(Subcommand)]
pub enum OptionSubcommands {
    /// Append an option to a dropdown
    Add {
        /// Dropdown position (1-based) or id
        dropdown: String,
        /// Option phrase
        #[arg(long)]
        phrase: Option<String>,
        /// Language tag of the phrase
        #[arg(long)]
        language: Option<String>,
    },
    /// Edit the phrase or language of an option
    Edit {
        /// Dropdown position (1-based) or id
        dropdown: String,
        /// Option position (1-based) or id
        option: String,
        /// New phrase
        #[arg(long)]
        phrase: Option<String>,
        /// New language tag
        #[arg(long)]
        language: Option<String>,
    },
    /// Delete an option
    Delete {
        /// Dropdown position (1-based) or id
        dropdown: String,
        /// Option position (1-based) or id
        option: String,
    },
    /// Toggle the lock of an option
    Lock {
        /// Dropdown position (1-based) or id
        dropdown: String,
        /// Option position (1-based) or id
        option: String,
    },
    /// Make an option the active choice of its dropdown
    Select {
        /// Dropdown position (1-based) or id
        dropdown: String,
        /// Option position (1-based) or id; prompts when omitted
        option: Option<String>,
    },
}
