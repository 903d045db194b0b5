//! Field extraction with case-variant key aliasing.
//!
//! Templates may spell each top-level section either capitalized
//! (`Parameters`) or lowercase (`parameters`). Candidates are tried in order
//! and the first non-empty value wins.

use serde_yaml::{Mapping, Value};
use tracing::debug;

/// Description used when the template carries none.
pub const DEFAULT_DESCRIPTION: &str = "No Template description set";

pub const DESCRIPTION_KEYS: [&str; 2] = ["Description", "description"];
pub const PARAMETERS_KEYS: [&str; 2] = ["Parameters", "parameters"];
pub const RESOURCES_KEYS: [&str; 2] = ["Resources", "resources"];
pub const OUTPUTS_KEYS: [&str; 2] = ["Outputs", "outputs"];

/// Whether a value counts as absent: null, an empty string or an empty collection.
///
/// `false` and `0` are real values and are not treated as empty.
pub fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        Value::Sequence(seq) => seq.is_empty(),
        Value::Mapping(map) => map.is_empty(),
        Value::Tagged(tagged) => is_empty(&tagged.value),
        Value::Bool(_) | Value::Number(_) => false,
    }
}

/// Return the first non-empty value found under any of `keys`.
pub fn first_non_empty<'a>(template: &'a Mapping, keys: &[&str]) -> Option<&'a Value> {
    keys.iter().find_map(|key| {
        template
            .get(*key)
            .filter(|value| !is_empty(value))
            .inspect(|_| debug!("Resolved template field {}", key))
    })
}

/// Render a scalar as the text a reader would expect to see.
pub fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// The template description, or [`DEFAULT_DESCRIPTION`].
pub fn get_description(template: &Mapping) -> String {
    match first_non_empty(template, &DESCRIPTION_KEYS) {
        Some(value) => scalar_text(value).unwrap_or_else(|| yaml_text(value)),
        None => DEFAULT_DESCRIPTION.to_string(),
    }
}

/// The parameters section, or an empty mapping.
pub fn get_parameters(template: &Mapping) -> Value {
    section(template, &PARAMETERS_KEYS)
}

/// The resources section, or an empty mapping.
pub fn get_resources(template: &Mapping) -> Value {
    section(template, &RESOURCES_KEYS)
}

/// The outputs section, or an empty mapping.
pub fn get_outputs(template: &Mapping) -> Value {
    section(template, &OUTPUTS_KEYS)
}

fn section(template: &Mapping, keys: &[&str]) -> Value {
    first_non_empty(template, keys)
        .cloned()
        .unwrap_or_else(|| Value::Mapping(Mapping::new()))
}

fn yaml_text(value: &Value) -> String {
    serde_yaml::to_string(value)
        .map(|s| s.trim_end().to_string())
        .unwrap_or_default()
}
