//! # Response Normalizer
//!
//! Turns the model's JSON-looking reply for one category into entries of the
//! request's [`CombinedResult`]. Failures here are never fatal: a reply that
//! cannot be used is logged and skipped, while its raw text is still recorded.

use crate::{
    catalog::{self, GridKind},
    errors::ExtractError,
    types::CombinedResult,
};
use serde_json::{Map, Value};
use tracing::{debug, warn};

/// Marker that identifies compound "I did / did not ..." checkbox fields.
const DID_DID_NOT: &str = "did did not";

/// Header used in the raw log for free-text requests.
pub const CUSTOM_PROMPT_HEADER: &str = "CUSTOM PROMPT";

/// Removes a leading ```` ```json ```` or ```` ``` ```` fence, a trailing fence, and
/// surrounding whitespace.
pub fn strip_code_fence(raw: &str) -> &str {
    let mut text = raw.trim();
    if let Some(rest) = text.strip_prefix("```json") {
        text = rest;
    } else if let Some(rest) = text.strip_prefix("```") {
        text = rest;
    }
    if let Some(rest) = text.strip_suffix("```") {
        text = rest;
    }
    text.trim()
}

/// Parses stripped model text into a JSON object.
pub fn parse_object(text: &str) -> Result<Map<String, Value>, ExtractError> {
    match serde_json::from_str::<Value>(text) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(other) => Err(ExtractError::MalformedModelOutput(format!(
            "expected a JSON object, got {}",
            json_kind(&other)
        ))),
        Err(e) => Err(ExtractError::MalformedModelOutput(e.to_string())),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Replaces every boolean in the tree with `"Yes"` or `"No"`.
pub fn coerce_booleans(value: &mut Value) {
    match value {
        Value::Bool(b) => *value = Value::String(if *b { "Yes" } else { "No" }.to_string()),
        Value::Array(items) => items.iter_mut().for_each(coerce_booleans),
        Value::Object(map) => map.values_mut().for_each(coerce_booleans),
        _ => {}
    }
}

fn part_as_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// Collapses `{choice, comment}` objects under "did did not" labels into
/// `"I {choice} . {comment}"`, at any depth.
pub fn collapse_choice_comments(map: &mut Map<String, Value>) {
    for (label, value) in map.iter_mut() {
        let collapsed = match value {
            Value::Object(inner)
                if inner.contains_key("choice")
                    && label.to_lowercase().contains(DID_DID_NOT) =>
            {
                let choice = part_as_text(inner.get("choice"));
                let comment = part_as_text(inner.get("comment"));
                Some(format!("I {choice} . {comment}").trim().to_string())
            }
            Value::Object(inner) => {
                collapse_choice_comments(inner);
                None
            }
            _ => None,
        };
        if let Some(text) = collapsed {
            *value = Value::String(text);
        }
    }
}

/// Applies the value transforms to a parsed category reply.
pub fn transform(map: &mut Map<String, Value>) {
    map.values_mut().for_each(coerce_booleans);
    collapse_choice_comments(map);
}

/// Merges the reply for a grid category. Only the `"Subject"` entry is merged
/// key by key; comparable entries replace any earlier entry of the same name.
fn merge_grid(
    fields: &mut Map<String, Value>,
    mut data: Map<String, Value>,
) -> Result<(), ExtractError> {
    if let Some(subject) = data.remove("Subject") {
        let subject = match subject {
            Value::Object(subject) => subject,
            other => {
                return Err(ExtractError::MalformedModelOutput(format!(
                    "grid \"Subject\" must be an object, got {}",
                    json_kind(&other)
                )))
            }
        };
        let entry = fields
            .entry("Subject")
            .or_insert_with(|| Value::Object(Map::new()));
        if !entry.is_object() {
            *entry = Value::Object(Map::new());
        }
        if let Value::Object(existing) = entry {
            existing.extend(subject);
        }
    }
    fields.extend(data);
    Ok(())
}

/// Merges the reply for an ordinary category at top level and under its own name.
fn merge_category(fields: &mut Map<String, Value>, category: &str, data: Map<String, Value>) {
    fields.extend(data.clone());
    let entry = fields
        .entry(category)
        .or_insert_with(|| Value::Object(Map::new()));
    if !entry.is_object() {
        *entry = Value::Object(Map::new());
    }
    if let Value::Object(existing) = entry {
        existing.extend(data);
    }
}

fn merge_reply(
    combined: &mut CombinedResult,
    category: &str,
    stripped: &str,
) -> Result<(), ExtractError> {
    let mut data = parse_object(stripped)?;
    transform(&mut data);
    match GridKind::from_category(category) {
        Some(_) => merge_grid(&mut combined.fields, data),
        None => {
            merge_category(&mut combined.fields, category, data);
            Ok(())
        }
    }
}

/// Folds one category's raw model reply into `combined`.
///
/// The raw text is always appended to the audit log. Unusable replies are
/// logged and contribute nothing else.
pub fn normalize_into(combined: &mut CombinedResult, category: &str, raw_text: &str) {
    combined.push_raw_section(catalog::section_header(category), raw_text);

    let stripped = strip_code_fence(raw_text);
    if stripped.is_empty() {
        debug!("Empty reply for {category}; nothing to merge.");
        return;
    }

    if let Err(e) = merge_reply(combined, category, stripped) {
        warn!("Skipping {category}: {e}. Raw text was: {raw_text}");
    }
}

/// Builds the result for a free-text request. The reply is taken as-is; an
/// unusable reply leaves `fields` empty.
pub fn normalize_custom(raw_text: &str) -> CombinedResult {
    let mut combined = CombinedResult::new();
    combined.push_raw_section(CUSTOM_PROMPT_HEADER, raw_text);

    let stripped = strip_code_fence(raw_text);
    if stripped.is_empty() {
        return combined;
    }
    match parse_object(stripped) {
        Ok(data) => combined.fields = data,
        Err(e) => warn!("Custom prompt reply could not be used: {e}"),
    }
    combined
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_json_and_plain_fences() {
        assert_eq!(strip_code_fence("```json\n{\"a\":1}\n```"), "{\"a\":1}");
        assert_eq!(strip_code_fence("  ```\n{}\n```  "), "{}");
        assert_eq!(strip_code_fence("{\"a\":1}"), "{\"a\":1}");
        assert_eq!(strip_code_fence("```json\n```"), "");
    }

    #[test]
    fn non_object_top_level_is_malformed() {
        assert!(matches!(
            parse_object("[1, 2]"),
            Err(ExtractError::MalformedModelOutput(_))
        ));
    }
}
