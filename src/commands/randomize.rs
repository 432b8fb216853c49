use anyhow::Result;
use colored::*;
use log::info;
use promptforge::ui::render;

use super::{AppContext, report_save_error};

/// Randomize unlocked dropdowns and print the new preview
pub fn randomize_command(ctx: &AppContext) -> Result<()> {
    let mut store = ctx.open_store();

    if store.unlocked_count() == 0 {
        info!("Randomize requested with every selection locked");
        println!("{}", render::status_line(0).bright_yellow().bold());
        println!("{}", "Unlock an option to let the randomizer change it.".dimmed());
        return Ok(());
    }

    store.randomize_unlocked();
    report_save_error(&mut store);

    let preview = store.preview_text();
    println!("{} {}", "Prompt preview:".bright_white().bold(), render::preview_or_placeholder(&preview));
    Ok(())
}
