//! Dot-path access to [`Settings`]
//!
//! `get-conf`/`set-conf` address settings as `section.key`. Lookups that miss
//! are a normal outcome (`None` / [`SetOutcome::NotFound`]); writing a value
//! whose type differs from the stored one is a [`ConfigError::TypeMismatch`].

use serde_json::Value;

use super::settings::{Settings, split_list};
use crate::error::{ConfigError, ConfigResult};

/// Result of [`Settings::set_path`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetOutcome {
    /// The value was replaced
    Updated {
        /// Rendered previous value
        previous: String,
        /// Rendered new value
        current: String,
    },
    /// No setting exists at the given path
    NotFound,
}

impl Settings {
    /// Returns the value stored at `key`, or `None` if the path does not exist.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::NotASetting`] if `key` names a section
    /// - [`ConfigError::Serialize`] if the settings cannot be rendered as JSON
    pub fn get_path(&self, key: &str) -> ConfigResult<Option<Value>> {
        let tree = self.to_tree()?;
        match lookup(&tree, key) {
            Some(Value::Object(_)) => Err(ConfigError::NotASetting(key.to_string())),
            found => Ok(found.cloned()),
        }
    }

    /// Assigns `raw` to the setting at `key`, converting it to the type of the
    /// value currently stored there.
    ///
    /// `self` is left untouched unless the whole tree still matches the schema
    /// after the assignment.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::TypeMismatch`] if `raw` cannot be read as the stored type
    /// - [`ConfigError::NotASetting`] if `key` names a section
    /// - [`ConfigError::InvalidValue`] if the schema rejects the new value
    pub fn set_path(&mut self, key: &str, raw: &str) -> ConfigResult<SetOutcome> {
        let mut tree = self.to_tree()?;
        let Some(slot) = lookup_mut(&mut tree, key) else {
            return Ok(SetOutcome::NotFound);
        };

        let new_value = coerce(key, slot, raw)?;
        let previous = std::mem::replace(slot, new_value);
        let current = render_value(slot);

        let updated: Self =
            serde_json::from_value(tree).map_err(|e| ConfigError::InvalidValue {
                key: key.to_string(),
                reason: e.to_string(),
            })?;
        *self = updated;

        Ok(SetOutcome::Updated {
            previous: render_value(&previous),
            current,
        })
    }

    fn to_tree(&self) -> ConfigResult<Value> {
        serde_json::to_value(self).map_err(|e| ConfigError::Serialize(e.to_string()))
    }
}

fn lookup<'a>(tree: &'a Value, key: &str) -> Option<&'a Value> {
    if key.is_empty() {
        return None;
    }
    key.split('.')
        .try_fold(tree, |node, segment| node.as_object()?.get(segment))
}

fn lookup_mut<'a>(tree: &'a mut Value, key: &str) -> Option<&'a mut Value> {
    if key.is_empty() {
        return None;
    }
    key.split('.')
        .try_fold(tree, |node, segment| node.as_object_mut()?.get_mut(segment))
}

/// Converts the raw CLI string into a value of the same JSON type as `current`
fn coerce(key: &str, current: &Value, raw: &str) -> ConfigResult<Value> {
    let mismatch = |expected: &'static str| ConfigError::TypeMismatch {
        key: key.to_string(),
        expected,
        value: raw.to_string(),
    };

    match current {
        Value::String(_) | Value::Null => Ok(Value::String(raw.to_string())),
        Value::Number(n) if n.is_u64() => raw
            .trim()
            .parse::<u64>()
            .map(Value::from)
            .map_err(|_| mismatch("integer")),
        Value::Number(n) if n.is_i64() => raw
            .trim()
            .parse::<i64>()
            .map(Value::from)
            .map_err(|_| mismatch("integer")),
        Value::Number(_) => raw
            .trim()
            .parse::<f64>()
            .ok()
            .and_then(serde_json::Number::from_f64)
            .map(Value::Number)
            .ok_or_else(|| mismatch("number")),
        Value::Bool(_) => match raw.trim().to_ascii_lowercase().as_str() {
            "true" => Ok(Value::Bool(true)),
            "false" => Ok(Value::Bool(false)),
            _ => Err(mismatch("boolean")),
        },
        Value::Array(_) => Ok(Value::Array(
            split_list(raw).into_iter().map(Value::String).collect(),
        )),
        Value::Object(_) => Err(ConfigError::NotASetting(key.to_string())),
    }
}

/// Renders a setting for `key=value` output
///
/// Strings are printed bare, lists comma-separated, anything else as JSON.
#[must_use]
pub fn render_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(render_value)
            .collect::<Vec<_>>()
            .join(","),
        other => other.to_string(),
    }
}
