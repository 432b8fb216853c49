use anyhow::Result;
use colored::*;
use is_terminal::IsTerminal;
use promptforge::ui::{prompts, render};

use super::{AppContext, report_save_error, success, warn_not_found};
use crate::cli::commands::dropdown::DropdownSubcommands;

pub fn handle_dropdown_command(ctx: &AppContext, cmd: DropdownSubcommands) -> Result<()> {
    match cmd {
        DropdownSubcommands::Add { name } => add_dropdown(ctx, name),
        DropdownSubcommands::List => list_dropdowns(ctx),
        DropdownSubcommands::Rename { dropdown, name } => rename_dropdown(ctx, &dropdown, &name),
        DropdownSubcommands::Delete { dropdown, force } => delete_dropdown(ctx, &dropdown, force),
    }
}

fn add_dropdown(ctx: &AppContext, name: Option<String>) -> Result<()> {
    let mut store = ctx.open_store();
    let id = store.add_dropdown();
    if let Some(name) = &name {
        store.rename_dropdown(&id, name);
    }
    report_save_error(&mut store);

    let position = store.dropdowns().len();
    success(format!("Added dropdown #{} [{}]", position, id.bright_cyan()));
    Ok(())
}

fn list_dropdowns(ctx: &AppContext) -> Result<()> {
    let store = ctx.open_store();

    println!();
    println!("  {}", "Dropdowns:".bright_white().bold());
    for (index, dropdown) in store.dropdowns().iter().enumerate() {
        let name = if dropdown.name.is_empty() {
            render::UNNAMED_DROPDOWN.dimmed()
        } else {
            dropdown.name.white()
        };
        let selected = dropdown
            .selected_option()
            .map(|option| option.display_phrase().to_string())
            .unwrap_or_else(|| "no selection".to_string());
        let lock = if dropdown.is_selection_unlocked() { "" } else { " (locked)" };
        println!(
            "  {}. {} {} → {}{}",
            index + 1,
            name,
            format!("[{}]", dropdown.id).dimmed(),
            selected.cyan(),
            lock.bright_yellow()
        );
    }
    println!();
    Ok(())
}

fn rename_dropdown(ctx: &AppContext, reference: &str, name: &str) -> Result<()> {
    let mut store = ctx.open_store();
    let Some(id) = store.find_dropdown(reference).map(|dropdown| dropdown.id.clone()) else {
        warn_not_found("dropdown", reference);
        return Ok(());
    };

    store.rename_dropdown(&id, name);
    report_save_error(&mut store);
    success(format!("Renamed dropdown [{}] to '{}'", id.bright_cyan(), name));
    Ok(())
}

fn delete_dropdown(ctx: &AppContext, reference: &str, force: bool) -> Result<()> {
    let mut store = ctx.open_store();
    let Some(dropdown) = store.find_dropdown(reference) else {
        warn_not_found("dropdown", reference);
        return Ok(());
    };
    let id = dropdown.id.clone();
    let label = if dropdown.name.is_empty() {
        render::UNNAMED_DROPDOWN.to_string()
    } else {
        dropdown.name.clone()
    };

    let interactive = std::io::stdin().is_terminal();
    if !force && ctx.config.settings.confirm_deletes && interactive {
        if !prompts::confirm(&format!("Delete dropdown '{}'?", label), false)? {
            println!("Operation cancelled.");
            return Ok(());
        }
    }

    let was_last = store.dropdowns().len() == 1;
    store.delete_dropdown(&id);
    report_save_error(&mut store);

    success(format!("Deleted dropdown '{}'", label));
    if was_last {
        println!("  {}", "A fresh empty dropdown was added in its place.".dimmed());
    }
    Ok(())
}
