use anyhow::Result;
use colored::*;
use promptforge::ui::render;

use super::AppContext;

/// Print every dropdown card followed by the status line and preview
pub fn show_command(ctx: &AppContext) -> Result<()> {
    let store = ctx.open_store();
    println!();
    println!("{}", render::overview(store.dropdowns()));
    println!();
    Ok(())
}

/// Print the prompt preview
///
/// # Arguments
/// * `raw` - Print the bare text, even when empty
pub fn preview_command(ctx: &AppContext, raw: bool) -> Result<()> {
    let store = ctx.open_store();
    let preview = store.preview_text();

    if raw {
        println!("{}", preview);
    } else if preview.is_empty() {
        println!("{}", render::PREVIEW_PLACEHOLDER.dimmed());
    } else {
        println!("{}", preview.bright_white().bold());
    }
    Ok(())
}

pub fn status_command(ctx: &AppContext) -> Result<()> {
    let store = ctx.open_store();
    println!("{}", render::status_line(store.unlocked_count()));
    Ok(())
}
