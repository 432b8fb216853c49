use anyhow::{Context, Result};
use dialoguer::Select;

use crate::store::Dropdown;

const CONFIRM_ITEMS: [&str; 2] = ["Yes", "No"];

fn confirm_default_index(default_yes: bool) -> usize {
    if default_yes { 0 } else { 1 }
}

/// Interactive confirmation prompt using arrow-key navigable selection
///
/// # Arguments
/// * `prompt` - The question to ask the user
/// * `default_yes` - Whether "Yes" should be the default selection (index 0)
///
/// # Returns
/// * `Ok(true)` if user selects "Yes"
/// * `Ok(false)` if user selects "No"
pub fn confirm(prompt: &str, default_yes: bool) -> Result<bool> {
    let selection = Select::new()
        .with_prompt(prompt)
        .items(&CONFIRM_ITEMS)
        .default(confirm_default_index(default_yes))
        .interact()
        .context("Failed to read confirmation")?;

    Ok(CONFIRM_ITEMS[selection] == "Yes")
}

/// Arrow-key selection among a dropdown's options, starting on the current one
///
/// # Returns
/// * `Ok(Some(id))` - Id of the chosen option
/// * `Ok(None)` - The dropdown has no options, or the user cancelled
pub fn select_option(dropdown: &Dropdown) -> Result<Option<String>> {
    if dropdown.options.is_empty() {
        return Ok(None);
    }

    let items: Vec<String> = dropdown
        .options
        .iter()
        .map(|option| {
            if option.locked {
                format!("{} (locked)", option.display_phrase())
            } else {
                option.display_phrase().to_string()
            }
        })
        .collect();
    let current = dropdown
        .selected_option_id
        .as_deref()
        .and_then(|id| dropdown.options.iter().position(|option| option.id == id))
        .unwrap_or(0);

    let selection = Select::new()
        .with_prompt("Active option")
        .items(&items)
        .default(current)
        .interact_opt()
        .context("Failed to read option selection")?;

    Ok(selection.map(|index| dropdown.options[index].id.clone()))
}
