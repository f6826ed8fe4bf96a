use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

use crate::error::{DictError, Result};
use crate::model::WordRecord;

pub const KEY_WORD: &str = "word";
pub const KEY_READING: &str = "reading";
pub const KEY_JAPANESE_READING: &str = "japanese_reading";
pub const KEY_CLASS: &str = "class";
pub const KEY_EXPLANATION: &str = "explanation";

const STRING_OR_LIST: &str = "string or list of strings";
const STRING: &str = "string";

/// Read and validate one word info JSON file.
pub fn load_file(path: &Path) -> Result<WordRecord> {
    let data = fs::read(path).map_err(|source| DictError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let value: Value = serde_json::from_slice(&data).map_err(|source| DictError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    load_value(&value, path)
}

/// Validate an already parsed document. `path` only labels errors.
///
/// Keys are checked in the order `word`, `reading`, `japanese_reading`,
/// `class`, `explanation`; the first problem found is reported.
pub fn load_value(value: &Value, path: &Path) -> Result<WordRecord> {
    let Some(obj) = value.as_object() else {
        return Err(DictError::NotAnObject {
            path: path.to_path_buf(),
        });
    };
    let words = string_list(obj, KEY_WORD, path)?;
    let readings = string_list(obj, KEY_READING, path)?;
    let japanese_readings = string_list(obj, KEY_JAPANESE_READING, path)?;
    let word_class = match required(obj, KEY_CLASS, path)? {
        Value::String(s) if s.is_empty() => return Err(empty(KEY_CLASS, path)),
        Value::String(s) => s.clone(),
        _ => return Err(invalid(KEY_CLASS, STRING, path)),
    };
    let explanation = match obj.get(KEY_EXPLANATION) {
        None => None,
        Some(Value::String(s)) => Some(s.clone()),
        Some(_) => return Err(invalid(KEY_EXPLANATION, STRING, path)),
    };
    let record = WordRecord {
        words,
        readings,
        japanese_readings,
        word_class,
        explanation,
    };
    // written as-is; only flagged
    if let Some(field) = record.layout_breaking_field() {
        tracing::warn!(path = %path.display(), field = ?field, "tab or line break in value");
    }
    Ok(record)
}

fn required<'a>(obj: &'a Map<String, Value>, key: &'static str, path: &Path) -> Result<&'a Value> {
    obj.get(key).ok_or_else(|| DictError::MissingField {
        key,
        path: path.to_path_buf(),
    })
}

// A bare string becomes a one-element list.
fn string_list(obj: &Map<String, Value>, key: &'static str, path: &Path) -> Result<Vec<String>> {
    match required(obj, key, path)? {
        Value::String(s) => Ok(vec![s.clone()]),
        Value::Array(items) => {
            if items.is_empty() {
                return Err(empty(key, path));
            }
            items
                .iter()
                .map(|it| {
                    it.as_str()
                        .map(str::to_owned)
                        .ok_or_else(|| invalid(key, STRING_OR_LIST, path))
                })
                .collect()
        }
        _ => Err(invalid(key, STRING_OR_LIST, path)),
    }
}

fn invalid(key: &'static str, expected: &'static str, path: &Path) -> DictError {
    DictError::InvalidType {
        key,
        expected,
        path: path.to_path_buf(),
    }
}

fn empty(key: &'static str, path: &Path) -> DictError {
    DictError::EmptyField {
        key,
        path: path.to_path_buf(),
    }
}
