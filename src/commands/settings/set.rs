use anyhow::Result;
use log::info;
use promptforge::config::Config;

/// Set the value of a specific setting
///
/// # Arguments
/// * `name` - Setting name
/// * `value` - Setting value
///
/// # Returns
/// * `Ok(())` - Setting updated successfully
/// * `Err(anyhow::Error)` - Configuration error or invalid setting/value
pub fn set_command(name: String, value: String) -> Result<()> {
    info!("Setting {} to {}", name, value);

    let mut config = Config::load()?;
    config.settings.set(&name, &value)?;
    config.save()?;

    println!("Set {} to {}", name, config.settings.get(&name)?);
    Ok(())
}
