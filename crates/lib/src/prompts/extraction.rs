//! # Extraction Prompts
//!
//! Builders for the instructions that accompany the report on every model call.
//! Field labels are embedded verbatim; the model echoes them back as JSON keys.

use crate::catalog::GridKind;

/// Opening of every per-category prompt.
pub const BASE_PROMPT: &str = "Extract the following fields from the appraisal report. Return your answer strictly as a JSON object with this structure: { 'FieldName': 'Value', ... } If a field is missing, set its value to ''. Do not include any explanation or formatting outside the JSON object. ";

/// Rules for compound answers. The normalizer relies on the `choice`/`comment` shape.
pub const COMPLEX_FIELD_INSTRUCTIONS: &str = "For fields containing 'did did not', the value should be a JSON object like {'choice': 'did' or 'did not', 'comment': 'extracted text'}. For Yes/No questions, if the answer is 'Yes' and there is associated text, the value should be a JSON object like {'choice': 'Yes', 'comment': 'extracted text'}. If the answer is just 'Yes' or 'No' without other text, the value should be the string 'Yes' or 'No'. If a checkbox is marked, treat it as 'Yes'.";

const JSON_ONLY: &str = "If a field is missing, set its value to ''. Do not include any explanation or formatting outside the JSON object. ";

/// Renders field labels as a bracketed, quoted list.
fn format_field_list(fields: &[&str]) -> String {
    format!("{fields:?}")
}

/// Builds the prompt for an ordinary category.
pub fn build_prompt(category: &str, fields: &[&str]) -> String {
    format!(
        "{BASE_PROMPT}{COMPLEX_FIELD_INSTRUCTIONS} Fields for {category}: {}.",
        format_field_list(fields)
    )
}

/// Builds the prompt for a grid category.
///
/// The model decides how many comparable entries the report contains.
pub fn build_grid_prompt(kind: GridKind, fields: &[&str]) -> String {
    let prefix = kind.entry_prefix();
    format!(
        "Extract the following fields for the Subject and each {entry} from the {section} section of the appraisal report. \
         Return your answer strictly as a JSON object with this structure: {{ 'Subject': {{ 'FieldName': 'Value', ... }}, '{prefix} #1': {{ 'FieldName': 'Value', ... }}, '{prefix} #2': {{ ... }}, ... }} \
         {JSON_ONLY}Fields: {fields}. ",
        entry = kind.entry_label(),
        section = kind.report_section(),
        fields = format_field_list(fields),
    )
}

/// Wraps a free-text request in the strict-JSON preamble.
pub fn build_custom_prompt(user_text: &str) -> String {
    format!(
        "Extract information from the appraisal report based on the following request: '{}'. \
         Return your answer strictly as a JSON object. \
         If the information is not found, return an empty JSON object or indicate that in the JSON values. \
         Do not include any explanation or formatting outside the JSON object.",
        user_text.trim()
    )
}
