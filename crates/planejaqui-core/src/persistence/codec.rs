//! Persisted collection format: a JSON array of item records.

use crate::domain::Item;

use super::PersistResult;

/// Encode the collection as pretty JSON (2-space indent)
pub fn encode_items(items: &[Item]) -> PersistResult<String> {
    Ok(serde_json::to_string_pretty(items)?)
}

/// Decode and validate a persisted collection
///
/// Blank input is an empty collection (nothing saved yet).
pub fn decode_items(raw: &str) -> PersistResult<Vec<Item>> {
    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }
    let items: Vec<Item> = serde_json::from_str(raw)?;
    for item in &items {
        item.validate()?;
    }
    Ok(items)
}
