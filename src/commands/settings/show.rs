use anyhow::Result;
use colored::*;
use promptforge::config::{Config, SETTING_NAMES};

/// Show all settings with their effective values
pub fn show_command() -> Result<()> {
    let config = Config::load()?;

    println!("Settings ({}):", Config::get_config_path()?.display());
    println!("=========");
    for name in SETTING_NAMES {
        let value = config.settings.get(name)?;
        if value.is_empty() {
            let default_dir = Config::default_data_dir()?;
            println!("  {}: {}", name, format!("(default: {})", default_dir.display()).dimmed());
        } else {
            println!("  {}: {}", name, value.cyan());
        }
    }

    Ok(())
}
