use serde::Serialize;

/// One candidate phrase within a dropdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DropdownOption {
    pub id: String,
    pub phrase: String,
    pub language: String,
    /// Locked options are never picked by the randomizer, and a locked
    /// selection is never replaced by it.
    pub locked: bool,
}

impl DropdownOption {
    pub fn new(id: String) -> Self {
        Self {
            id,
            phrase: String::new(),
            language: String::new(),
            locked: false,
        }
    }

    /// Phrase as shown in selectors, with a placeholder for blank phrases
    pub fn display_phrase(&self) -> &str {
        if self.phrase.trim().is_empty() {
            UNTITLED_OPTION
        } else {
            &self.phrase
        }
    }

    /// Phrase as shown in the preview caption; only an empty phrase gets the
    /// placeholder, whitespace is shown as typed.
    pub fn caption(&self) -> &str {
        if self.phrase.is_empty() {
            UNTITLED_OPTION
        } else {
            &self.phrase
        }
    }
}

pub const UNTITLED_OPTION: &str = "Untitled option";

/// One prompt segment: a named, ordered list of options and the active choice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dropdown {
    pub id: String,
    pub name: String,
    pub options: Vec<DropdownOption>,
    #[serde(rename = "selectedOptionId")]
    pub selected_option_id: Option<String>,
}

impl Dropdown {
    /// A dropdown holding a single option, which is selected.
    pub fn with_option(id: String, option: DropdownOption) -> Self {
        let selected = Some(option.id.clone());
        Self {
            id,
            name: String::new(),
            options: vec![option],
            selected_option_id: selected,
        }
    }

    pub fn option(&self, option_id: &str) -> Option<&DropdownOption> {
        self.options.iter().find(|option| option.id == option_id)
    }

    /// Resolve an option reference: an exact id, else a 1-based position.
    pub fn find_option(&self, reference: &str) -> Option<&DropdownOption> {
        find_by_reference(&self.options, reference, |option| &option.id)
    }

    /// The option the selection points at, if it resolves to one.
    pub fn selected_option(&self) -> Option<&DropdownOption> {
        self.selected_option_id
            .as_deref()
            .and_then(|id| self.option(id))
    }

    /// Whether the randomizer may replace this dropdown's selection.
    pub fn is_selection_unlocked(&self) -> bool {
        !self.selected_option().is_some_and(|option| option.locked)
    }
}

/// Editable text fields of an option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionField {
    Phrase,
    Language,
}

impl OptionField {
    pub fn as_str(&self) -> &'static str {
        match self {
            OptionField::Phrase => "phrase",
            OptionField::Language => "language",
        }
    }
}

pub(crate) fn find_by_reference<'a, T, F>(items: &'a [T], reference: &str, id_of: F) -> Option<&'a T>
where
    F: Fn(&T) -> &String,
{
    let reference = reference.trim();
    if let Some(item) = items.iter().find(|item| id_of(*item) == reference) {
        return Some(item);
    }
    match reference.parse::<usize>() {
        Ok(position) if (1..=items.len()).contains(&position) => items.get(position - 1),
        _ => None,
    }
}
