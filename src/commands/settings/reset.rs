use anyhow::Result;
use log::info;
use promptforge::config::{Config, SETTING_NAMES, Settings};
use promptforge::ui::prompts::confirm;

/// Reset a setting to its default value
///
/// # Arguments
/// * `name` - Setting name
pub fn reset_command(name: String) -> Result<()> {
    info!("Resetting setting: {}", name);

    let mut config = Config::load()?;
    config.settings.reset(&name)?;
    config.save()?;

    println!("Reset {} to '{}'", name, config.settings.get(&name)?);
    Ok(())
}

/// Reset all settings to default values
///
/// # Arguments
/// * `force` - Skip confirmation prompt
pub fn reset_all_command(force: bool) -> Result<()> {
    info!("Resetting all settings to defaults");

    if !force && !confirm("Reset all settings to their default values?", false)? {
        println!("Operation cancelled.");
        return Ok(());
    }

    let mut config = Config::load()?;
    config.settings = Settings::default();
    config.save()?;

    println!("All settings have been reset to default values:");
    for name in SETTING_NAMES {
        println!("  {}: {}", name, config.settings.get(name)?);
    }

    Ok(())
}
