//! Plain-text rendering of store state for the terminal.

use colored::*;

use crate::store::{Dropdown, ops};

pub const PREVIEW_PLACEHOLDER: &str = "Your prompt preview will appear here as you add selections.";
pub const UNNAMED_DROPDOWN: &str = "Unnamed dropdown";

/// Randomizer status line, e.g. "2 dropdowns ready"
pub fn status_line(unlocked: usize) -> String {
    match unlocked {
        0 => "All selections are locked".to_string(),
        1 => "1 dropdown ready".to_string(),
        n => format!("{} dropdowns ready", n),
    }
}

/// Preview text, or the placeholder when nothing would be shown
pub fn preview_or_placeholder(preview: &str) -> &str {
    if preview.is_empty() { PREVIEW_PLACEHOLDER } else { preview }
}

/// One dropdown as a block of lines: header, then one line per option
pub fn dropdown_card(position: usize, dropdown: &Dropdown) -> String {
    let name = if dropdown.name.is_empty() {
        UNNAMED_DROPDOWN.dimmed()
    } else {
        dropdown.name.bright_white().bold()
    };
    let mut lines = vec![format!(
        "{} {} {}",
        format!("#{}", position).bright_cyan().bold(),
        name,
        format!("[{}]", dropdown.id).dimmed()
    )];

    if dropdown.options.is_empty() {
        lines.push(format!("    {}", "Add an option to begin".bright_yellow()));
    }

    for (index, option) in dropdown.options.iter().enumerate() {
        let selected = dropdown.selected_option_id.as_deref() == Some(option.id.as_str());
        let marker = if selected { "●".bright_green() } else { "○".white() };
        let lock = if option.locked { "🔒".normal() } else { "  ".normal() };
        let phrase = if option.phrase.trim().is_empty() {
            option.display_phrase().dimmed()
        } else if selected {
            option.phrase.bright_green().bold()
        } else {
            option.phrase.normal()
        };
        let language = if option.language.is_empty() {
            String::new()
        } else {
            format!(" ({})", option.language.cyan())
        };
        lines.push(format!(
            "  {} {} {}. {}{} {}",
            marker,
            lock,
            index + 1,
            phrase,
            language,
            format!("[{}]", option.id).dimmed()
        ));
    }

    if let Some(selected) = dropdown.selected_option() {
        lines.push(format!("    Previewing: {}", selected.caption().italic()));
    }

    lines.join("\n")
}

/// Full view: every card, then the status line and preview
pub fn overview(dropdowns: &[Dropdown]) -> String {
    let mut blocks: Vec<String> = dropdowns
        .iter()
        .enumerate()
        .map(|(index, dropdown)| dropdown_card(index + 1, dropdown))
        .collect();

    let preview = ops::preview_text(dropdowns);
    blocks.push(format!(
        "{}\n{} {}",
        status_line(ops::unlocked_count(dropdowns)).bright_white().bold(),
        "Prompt preview:".bright_white().bold(),
        preview_or_placeholder(&preview)
    ));
    blocks.join("\n\n")
}
