//! Pure snapshot transforms.
//!
//! Every operation takes the current snapshot and returns the next one.
//! Only the targeted dropdown or option differs between the two; unknown
//! identifiers yield a snapshot equal to the input.

use super::model::{Dropdown, DropdownOption, OptionField};
use crate::random::{RandomSource, generate_id, pick_index};

pub fn create_option<R: RandomSource + ?Sized>(random: &mut R) -> DropdownOption {
    DropdownOption::new(generate_id(random))
}

/// A fresh dropdown with one fresh, selected option.
pub fn create_dropdown<R: RandomSource + ?Sized>(random: &mut R) -> Dropdown {
    let option = create_option(random);
    Dropdown::with_option(generate_id(random), option)
}

/// Replace an empty collection with a single default dropdown.
pub fn ensure_not_empty<R: RandomSource + ?Sized>(
    dropdowns: Vec<Dropdown>,
    random: &mut R,
) -> Vec<Dropdown> {
    if dropdowns.is_empty() {
        vec![create_dropdown(random)]
    } else {
        dropdowns
    }
}

pub fn add_dropdown<R: RandomSource + ?Sized>(current: &[Dropdown], random: &mut R) -> Vec<Dropdown> {
    let mut next = current.to_vec();
    next.push(create_dropdown(random));
    next
}

pub fn delete_dropdown<R: RandomSource + ?Sized>(
    current: &[Dropdown],
    dropdown_id: &str,
    random: &mut R,
) -> Vec<Dropdown> {
    if !current.iter().any(|dropdown| dropdown.id == dropdown_id) {
        return current.to_vec();
    }

    let remaining = current
        .iter()
        .filter(|dropdown| dropdown.id != dropdown_id)
        .cloned()
        .collect();
    ensure_not_empty(remaining, random)
}

pub fn rename_dropdown(current: &[Dropdown], dropdown_id: &str, name: &str) -> Vec<Dropdown> {
    map_dropdown(current, dropdown_id, |dropdown| Dropdown {
        name: name.to_string(),
        ..dropdown.clone()
    })
}

/// Append a new option; it becomes selected only if nothing was selected.
/// Returns the new option's id alongside the snapshot when the dropdown exists.
pub fn add_option<R: RandomSource + ?Sized>(
    current: &[Dropdown],
    dropdown_id: &str,
    random: &mut R,
) -> (Vec<Dropdown>, Option<String>) {
    if !current.iter().any(|dropdown| dropdown.id == dropdown_id) {
        return (current.to_vec(), None);
    }

    let option = create_option(random);
    let option_id = option.id.clone();
    let next = map_dropdown(current, dropdown_id, |dropdown| {
        let mut options = dropdown.options.clone();
        options.push(option.clone());
        Dropdown {
            options,
            selected_option_id: dropdown
                .selected_option_id
                .clone()
                .or_else(|| Some(option.id.clone())),
            ..dropdown.clone()
        }
    });
    (next, Some(option_id))
}

pub fn update_option_field(
    current: &[Dropdown],
    dropdown_id: &str,
    option_id: &str,
    field: OptionField,
    value: &str,
) -> Vec<Dropdown> {
    map_option(current, dropdown_id, option_id, |option| {
        let mut option = option.clone();
        match field {
            OptionField::Phrase => option.phrase = value.to_string(),
            OptionField::Language => option.language = value.to_string(),
        }
        option
    })
}

/// Remove an option. A removed selection falls back to the first remaining
/// option, or to none. An emptied dropdown is not refilled.
pub fn delete_option(current: &[Dropdown], dropdown_id: &str, option_id: &str) -> Vec<Dropdown> {
    map_dropdown(current, dropdown_id, |dropdown| {
        let options: Vec<DropdownOption> = dropdown
            .options
            .iter()
            .filter(|option| option.id != option_id)
            .cloned()
            .collect();
        let selected_option_id = if dropdown.selected_option_id.as_deref() == Some(option_id) {
            options.first().map(|option| option.id.clone())
        } else {
            dropdown.selected_option_id.clone()
        };

        Dropdown {
            options,
            selected_option_id,
            ..dropdown.clone()
        }
    })
}

pub fn toggle_option_lock(current: &[Dropdown], dropdown_id: &str, option_id: &str) -> Vec<Dropdown> {
    map_option(current, dropdown_id, option_id, |option| DropdownOption {
        locked: !option.locked,
        ..option.clone()
    })
}

/// Point the selection at `option_id` without checking it belongs to the dropdown.
pub fn select_option(current: &[Dropdown], dropdown_id: &str, option_id: &str) -> Vec<Dropdown> {
    map_dropdown(current, dropdown_id, |dropdown| Dropdown {
        selected_option_id: Some(option_id.to_string()),
        ..dropdown.clone()
    })
}

/// Reassign every dropdown whose selection is not locked to a uniformly
/// chosen unlocked option. One draw is consumed per reassigned dropdown.
pub fn randomize_unlocked<R: RandomSource + ?Sized>(current: &[Dropdown], random: &mut R) -> Vec<Dropdown> {
    current
        .iter()
        .map(|dropdown| {
            if dropdown.options.is_empty() || !dropdown.is_selection_unlocked() {
                return dropdown.clone();
            }

            let available: Vec<&DropdownOption> =
                dropdown.options.iter().filter(|option| !option.locked).collect();
            match pick_index(random, available.len()) {
                Some(index) => Dropdown {
                    selected_option_id: Some(available[index].id.clone()),
                    ..dropdown.clone()
                },
                None => dropdown.clone(),
            }
        })
        .collect()
}

/// Number of dropdowns whose selection the randomizer may replace.
pub fn unlocked_count(dropdowns: &[Dropdown]) -> usize {
    dropdowns
        .iter()
        .filter(|dropdown| dropdown.is_selection_unlocked())
        .count()
}

/// Selected phrases in dropdown order, blank ones skipped, joined by a space.
pub fn preview_text(dropdowns: &[Dropdown]) -> String {
    dropdowns
        .iter()
        .filter_map(|dropdown| dropdown.selected_option())
        .map(|option| option.phrase.as_str())
        .filter(|phrase| !phrase.trim().is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

fn map_dropdown<F>(current: &[Dropdown], dropdown_id: &str, update: F) -> Vec<Dropdown>
where
    F: Fn(&Dropdown) -> Dropdown,
{
    current
        .iter()
        .map(|dropdown| {
            if dropdown.id == dropdown_id {
                update(dropdown)
            } else {
                dropdown.clone()
            }
        })
        .collect()
}

fn map_option<F>(current: &[Dropdown], dropdown_id: &str, option_id: &str, update: F) -> Vec<Dropdown>
where
    F: Fn(&DropdownOption) -> DropdownOption,
{
    map_dropdown(current, dropdown_id, |dropdown| Dropdown {
        options: dropdown
            .options
            .iter()
            .map(|option| {
                if option.id == option_id {
                    update(option)
                } else {
                    option.clone()
                }
            })
            .collect(),
        ..dropdown.clone()
    })
}
