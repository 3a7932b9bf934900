use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::Config;

/// The part of the config document this crate understands
#[derive(Debug, Deserialize)]
struct IgnoreSection {
    #[serde(default, deserialize_with = "string_entries")]
    ignore: Vec<String>,
}

/// Keeps the string elements of an array and drops everything else; any
/// value that is not an array yields no patterns.
fn string_entries<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    let patterns = match Value::deserialize(deserializer)? {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(pattern) => Some(pattern),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    };

    Ok(patterns)
}

/// Ignore globs listed under the top-level `ignore` key of `settings`.
///
/// Shape mismatches never fail: a non-object document, a missing key or a
/// non-array value give an empty list, and non-string elements are skipped.
pub fn ignore_patterns_from_value(settings: &Value) -> Vec<String> {
    if !settings.is_object() {
        return Vec::new();
    }

    IgnoreSection::deserialize(settings)
        .map(|section| section.ignore)
        .unwrap_or_default()
}

/// Ignore globs of an optional config, empty when there is none
pub fn get_ignore_patterns(config: Option<&Config>) -> Vec<String> {
    config.map(Config::ignore_patterns).unwrap_or_default()
}
