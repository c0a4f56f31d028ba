//! Shape predicates shared by every field check

use serde_json::{Map, Value};
use std::fmt;

/// Why a single entry was rejected. Only used for logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryDefect {
    /// The entry itself is not a JSON object
    NotAnObject,
    /// A required field is absent
    Missing(&'static str),
    /// A field is present with the wrong shape
    Malformed(&'static str),
}

impl fmt::Display for EntryDefect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryDefect::NotAnObject => write!(f, "entry is not an object"),
            EntryDefect::Missing(field) => write!(f, "missing '{}'", field),
            EntryDefect::Malformed(field) => write!(f, "malformed '{}'", field),
        }
    }
}

pub fn as_text(value: &Value) -> Option<&str> {
    value.as_str()
}

pub fn as_object(value: &Value) -> Option<&Map<String, Value>> {
    value.as_object()
}

/// An array whose every element is a string. `[]` qualifies; a bare string does not.
pub fn as_text_array(value: &Value) -> Option<Vec<String>> {
    value
        .as_array()?
        .iter()
        .map(|item| item.as_str().map(str::to_string))
        .collect()
}

/// Any value at all
pub fn as_any(value: &Value) -> Option<&Value> {
    Some(value)
}

/// Fetch `key` from `obj` and check it with `check`
pub fn required<'a, T>(
    obj: &'a Map<String, Value>,
    key: &'static str,
    check: impl FnOnce(&'a Value) -> Option<T>,
) -> Result<T, EntryDefect> {
    let value = obj.get(key).ok_or(EntryDefect::Missing(key))?;
    check(value).ok_or(EntryDefect::Malformed(key))
}

/// Like [`required`], but absence (or an explicit `null`) yields `Ok(None)`
pub fn optional<'a, T>(
    obj: &'a Map<String, Value>,
    key: &'static str,
    check: impl FnOnce(&'a Value) -> Option<T>,
) -> Result<Option<T>, EntryDefect> {
    match obj.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => check(value).map(Some).ok_or(EntryDefect::Malformed(key)),
    }
}
