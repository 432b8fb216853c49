//! Persisted representation of the dropdown collection.
//!
//! The stored form is a JSON array of dropdown records using camelCase
//! `selectedOptionId`. Decoding is lenient field by field (missing fields take
//! named defaults, `locked` follows truthiness) but strict about shape: a
//! payload that is not an array of objects is discarded as a whole.

use anyhow::{Context, Result};
use log::{debug, warn};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use super::model::{Dropdown, DropdownOption};

#[derive(Debug, Deserialize)]
struct StoredOption {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    phrase: Option<String>,
    #[serde(default)]
    language: Option<String>,
    #[serde(default, deserialize_with = "truthy")]
    locked: bool,
}

#[derive(Debug, Deserialize)]
struct StoredDropdown {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    options: Option<Vec<StoredOption>>,
    #[serde(default, rename = "selectedOptionId")]
    selected_option_id: Option<String>,
}

impl From<StoredOption> for DropdownOption {
    fn from(stored: StoredOption) -> Self {
        Self {
            id: stored.id.unwrap_or_default(),
            phrase: stored.phrase.unwrap_or_default(),
            language: stored.language.unwrap_or_default(),
            locked: stored.locked,
        }
    }
}

impl From<StoredDropdown> for Dropdown {
    fn from(stored: StoredDropdown) -> Self {
        Self {
            id: stored.id.unwrap_or_default(),
            name: stored.name.unwrap_or_default(),
            options: stored
                .options
                .unwrap_or_default()
                .into_iter()
                .map(DropdownOption::from)
                .collect(),
            selected_option_id: stored.selected_option_id,
        }
    }
}

/// Coerce any JSON value to a boolean using JavaScript truthiness.
fn truthy<'de, D>(deserializer: D) -> std::result::Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(is_truthy(&value))
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number
            .as_f64()
            .map(|n| n != 0.0 && !n.is_nan())
            .unwrap_or(true),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Serialize the full collection.
pub fn encode(dropdowns: &[Dropdown]) -> Result<String> {
    serde_json::to_string(dropdowns).context("Failed to serialize dropdown state")
}

/// Decode a stored payload. Absent, empty or malformed input yields an empty
/// collection; malformed input is logged and otherwise ignored.
pub fn decode(raw: Option<&str>) -> Vec<Dropdown> {
    let Some(raw) = raw.filter(|raw| !raw.is_empty()) else {
        debug!("No stored dropdown state");
        return Vec::new();
    };

    match try_decode(raw) {
        Ok(dropdowns) => {
            debug!("Decoded {} stored dropdowns", dropdowns.len());
            dropdowns
        }
        Err(err) => {
            warn!("Discarding malformed dropdown state: {:#}", err);
            Vec::new()
        }
    }
}

fn try_decode(raw: &str) -> Result<Vec<Dropdown>> {
    let value: Value = serde_json::from_str(raw).context("Stored state is not valid JSON")?;
    if !value.is_array() {
        anyhow::bail!("Stored state is not an array");
    }

    let stored: Vec<StoredDropdown> =
        serde_json::from_value(value).context("Stored state has an unexpected shape")?;
    Ok(stored.into_iter().map(Dropdown::from).collect())
}
