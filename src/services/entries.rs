use crate::domain::models::ItemEntry;
use serde::Deserialize;
use std::path::Path;

pub const MAX_WEIGHT: f64 = 100.0;

#[derive(thiserror::Error, Debug)]
pub enum EntryError {
    #[error("invalid weight for '{name}': {raw}")]
    BadWeight { name: String, raw: String },
    #[error("weight for '{name}' must be between 0 and 100 (got {weight})")]
    WeightOutOfRange { name: String, weight: f64 },
    #[error("too many items: {count} (max {max})")]
    TooManyItems { count: usize, max: usize },
    #[error("unsupported item file: {0} (expected .json or .toml)")]
    UnsupportedFile(String),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum JsonItems {
    Bare(Vec<ItemEntry>),
    Wrapped { items: Vec<ItemEntry> },
}

#[derive(Deserialize)]
struct TomlItems {
    #[serde(default)]
    items: Vec<ItemEntry>,
}

/// Parses `NAME` or `NAME=WEIGHT`. The weight is taken after the last `=`.
pub fn parse_entry(raw: &str) -> Result<ItemEntry, EntryError> {
    let Some((name, weight)) = raw.rsplit_once('=') else {
        return Ok(ItemEntry::new(raw, None));
    };
    let trimmed = weight.trim();
    if trimmed.is_empty() {
        return Ok(ItemEntry::new(name, None));
    }
    let value: f64 = trimmed.parse().map_err(|_| EntryError::BadWeight {
        name: name.to_string(),
        raw: weight.to_string(),
    })?;
    let entry = ItemEntry::new(name, Some(value));
    check_weight(&entry)?;
    Ok(entry)
}

fn check_weight(entry: &ItemEntry) -> Result<(), EntryError> {
    match entry.weight {
        Some(w) if !w.is_finite() || !(0.0..=MAX_WEIGHT).contains(&w) => {
            Err(EntryError::WeightOutOfRange {
                name: entry.name.clone(),
                weight: w,
            })
        }
        _ => Ok(()),
    }
}

pub fn load_entries_file(path: &Path) -> anyhow::Result<Vec<ItemEntry>> {
    let raw = std::fs::read_to_string(path)?;
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();
    let entries = match ext.as_str() {
        "json" => match serde_json::from_str::<JsonItems>(&raw)? {
            JsonItems::Bare(items) => items,
            JsonItems::Wrapped { items } => items,
        },
        "toml" => toml::from_str::<TomlItems>(&raw)?.items,
        _ => {
            return Err(EntryError::UnsupportedFile(path.display().to_string()).into());
        }
    };
    for e in &entries {
        check_weight(e)?;
    }
    Ok(entries)
}

/// Gathers entries from an optional item file followed by CLI arguments.
pub fn collect_entries(
    args: &[String],
    file: Option<&Path>,
    max_items: usize,
) -> anyhow::Result<Vec<ItemEntry>> {
    let mut entries = match file {
        Some(p) => load_entries_file(p)?,
        None => Vec::new(),
    };
    for a in args {
        entries.push(parse_entry(a)?);
    }
    if entries.len() > max_items {
        return Err(EntryError::TooManyItems {
            count: entries.len(),
            max: max_items,
        }
        .into());
    }
    tracing::debug!(count = entries.len(), "collected entries");
    Ok(entries)
}
