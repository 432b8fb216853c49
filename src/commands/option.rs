use anyhow::Result;
use colored::*;
use is_terminal::IsTerminal;
use promptforge::random::RandomSource;
use promptforge::storage::KeyValueStorage;
use promptforge::store::{DropdownStore, OptionField};
use promptforge::ui::prompts;

use super::{AppContext, report_save_error, success, warn_not_found};
use crate::cli::commands::option::OptionSubcommands;

pub fn handle_option_command(ctx: &AppContext, cmd: OptionSubcommands) -> Result<()> {
    let mut store = ctx.open_store();

    let outcome = match cmd {
        OptionSubcommands::Add { dropdown, phrase, language } => {
            add_option(&mut store, &dropdown, phrase, language)
        }
        OptionSubcommands::Edit { dropdown, option, phrase, language } => {
            edit_option(&mut store, &dropdown, &option, phrase, language)
        }
        OptionSubcommands::Delete { dropdown, option } => delete_option(&mut store, &dropdown, &option),
        OptionSubcommands::Lock { dropdown, option } => toggle_lock(&mut store, &dropdown, &option),
        OptionSubcommands::Select { dropdown, option } => select_option(&mut store, &dropdown, option),
    };

    report_save_error(&mut store);
    outcome
}

/// Resolve dropdown and option references to ids, warning when either is unknown
fn resolve<S: KeyValueStorage, R: RandomSource>(
    store: &DropdownStore<S, R>,
    dropdown_ref: &str,
    option_ref: &str,
) -> Option<(String, String)> {
    let Some(dropdown) = store.find_dropdown(dropdown_ref) else {
        warn_not_found("dropdown", dropdown_ref);
        return None;
    };
    let Some(option) = dropdown.find_option(option_ref) else {
        warn_not_found("option", option_ref);
        return None;
    };
    Some((dropdown.id.clone(), option.id.clone()))
}

fn apply_fields<S: KeyValueStorage, R: RandomSource>(
    store: &mut DropdownStore<S, R>,
    dropdown_id: &str,
    option_id: &str,
    phrase: Option<String>,
    language: Option<String>,
) {
    if let Some(phrase) = phrase {
        store.update_option_field(dropdown_id, option_id, OptionField::Phrase, &phrase);
    }
    if let Some(language) = language {
        store.update_option_field(dropdown_id, option_id, OptionField::Language, &language);
    }
}

fn add_option<S: KeyValueStorage, R: RandomSource>(
    store: &mut DropdownStore<S, R>,
    dropdown_ref: &str,
    phrase: Option<String>,
    language: Option<String>,
) -> Result<()> {
    let Some(dropdown_id) = store.find_dropdown(dropdown_ref).map(|dropdown| dropdown.id.clone()) else {
        warn_not_found("dropdown", dropdown_ref);
        return Ok(());
    };

    let Some(option_id) = store.add_option(&dropdown_id) else {
        warn_not_found("dropdown", dropdown_ref);
        return Ok(());
    };
    apply_fields(store, &dropdown_id, &option_id, phrase, language);

    let position = store
        .dropdown(&dropdown_id)
        .map(|dropdown| dropdown.options.len())
        .unwrap_or_default();
    success(format!("Added option {} [{}]", position, option_id.bright_cyan()));
    Ok(())
}

fn edit_option<S: KeyValueStorage, R: RandomSource>(
    store: &mut DropdownStore<S, R>,
    dropdown_ref: &str,
    option_ref: &str,
    phrase: Option<String>,
    language: Option<String>,
) -> Result<()> {
    if phrase.is_none() && language.is_none() {
        anyhow::bail!("Nothing to edit: pass --phrase and/or --language");
    }
    let Some((dropdown_id, option_id)) = resolve(store, dropdown_ref, option_ref) else {
        return Ok(());
    };

    apply_fields(store, &dropdown_id, &option_id, phrase, language);
    success(format!("Updated option [{}]", option_id.bright_cyan()));
    Ok(())
}

fn delete_option<S: KeyValueStorage, R: RandomSource>(
    store: &mut DropdownStore<S, R>,
    dropdown_ref: &str,
    option_ref: &str,
) -> Result<()> {
    let Some((dropdown_id, option_id)) = resolve(store, dropdown_ref, option_ref) else {
        return Ok(());
    };

    store.delete_option(&dropdown_id, &option_id);
    success(format!("Deleted option [{}]", option_id.bright_cyan()));

    if store.dropdown(&dropdown_id).is_some_and(|dropdown| dropdown.options.is_empty()) {
        println!("  {}", "The dropdown has no options left. Add one to begin.".dimmed());
    }
    Ok(())
}

fn toggle_lock<S: KeyValueStorage, R: RandomSource>(
    store: &mut DropdownStore<S, R>,
    dropdown_ref: &str,
    option_ref: &str,
) -> Result<()> {
    let Some((dropdown_id, option_id)) = resolve(store, dropdown_ref, option_ref) else {
        return Ok(());
    };

    store.toggle_option_lock(&dropdown_id, &option_id);
    let locked = store
        .dropdown(&dropdown_id)
        .and_then(|dropdown| dropdown.option(&option_id))
        .is_some_and(|option| option.locked);
    let state = if locked { "Locked" } else { "Unlocked" };
    success(format!("{} option [{}]", state, option_id.bright_cyan()));
    Ok(())
}

fn select_option<S: KeyValueStorage, R: RandomSource>(
    store: &mut DropdownStore<S, R>,
    dropdown_ref: &str,
    option_ref: Option<String>,
) -> Result<()> {
    let option_id = match option_ref {
        Some(option_ref) => match resolve(store, dropdown_ref, &option_ref) {
            Some((_, option_id)) => option_id,
            None => return Ok(()),
        },
        None => {
            let Some(dropdown) = store.find_dropdown(dropdown_ref) else {
                warn_not_found("dropdown", dropdown_ref);
                return Ok(());
            };
            if dropdown.options.is_empty() {
                println!("{}", "The dropdown has no options to select.".bright_yellow());
                return Ok(());
            }
            if !std::io::stdin().is_terminal() {
                anyhow::bail!("No option given; pass an option position or id");
            }
            match prompts::select_option(dropdown)? {
                Some(option_id) => option_id,
                None => {
                    println!("Operation cancelled.");
                    return Ok(());
                }
            }
        }
    };
    let Some(dropdown_id) = store.find_dropdown(dropdown_ref).map(|dropdown| dropdown.id.clone()) else {
        return Ok(());
    };

    store.select_option(&dropdown_id, &option_id);
    let phrase = store
        .selected_option(&dropdown_id)
        .map(|option| option.display_phrase().to_string())
        .unwrap_or_default();
    success(format!("Selected '{}'", phrase.bright_green()));
    Ok(())
}
