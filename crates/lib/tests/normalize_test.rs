//! # Response Normalizer Tests
//!
//! Exercises `appraisal::normalize` against model replies of the shapes seen in
//! practice: fenced JSON, booleans, compound "did did not" answers, grid replies
//! spread across several calls, and outright garbage.

use appraisal::normalize::{
    coerce_booleans, collapse_choice_comments, normalize_custom, normalize_into, strip_code_fence,
};
use appraisal::types::{blocked_payload, CombinedResult, ModelResponse};
use serde_json::{json, Map, Value};

fn object(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => panic!("expected object, got {other}"),
    }
}

// --- Value transforms ---

/// Booleans become "Yes"/"No" at any depth, and re-coercion changes nothing.
#[test]
fn test_coerce_booleans_is_recursive_and_idempotent() {
    let mut value = json!({
        "PUD": true,
        "Nested": {"Pool": false, "List": [true, "x"]},
        "Already": "Yes"
    });
    coerce_booleans(&mut value);
    let expected = json!({
        "PUD": "Yes",
        "Nested": {"Pool": "No", "List": ["Yes", "x"]},
        "Already": "Yes"
    });
    assert_eq!(value, expected);

    coerce_booleans(&mut value);
    assert_eq!(value, expected);
}

#[test]
fn test_collapse_did_did_not() {
    let mut map = object(json!({
        "My research did did not reveal any prior sales": {"choice": "did not", "comment": "no transfers found"},
        "I DID DID NOT analyze the contract": {"choice": "did"},
        "Is property seller owner of public record?": {"choice": "Yes", "comment": "per deed"},
        "Subject": {"Inner did did not label": {"choice": "did", "comment": null}}
    }));
    collapse_choice_comments(&mut map);

    assert_eq!(
        map["My research did did not reveal any prior sales"],
        json!("I did not . no transfers found")
    );
    assert_eq!(map["I DID DID NOT analyze the contract"], json!("I did ."));
    // Only "did did not" labels are collapsed.
    assert_eq!(
        map["Is property seller owner of public record?"],
        json!({"choice": "Yes", "comment": "per deed"})
    );
    assert_eq!(map["Subject"]["Inner did did not label"], json!("I did ."));
}

/// An object without a `choice` key is left alone.
#[test]
fn test_collapse_requires_choice_key() {
    let mut map = object(json!({"I did did not research": {"comment": "n/a"}}));
    collapse_choice_comments(&mut map);
    assert_eq!(map["I did did not research"], json!({"comment": "n/a"}));
}

#[test]
fn test_strip_code_fence_variants() {
    assert_eq!(strip_code_fence("\n```json\n{\"A\": \"1\"}\n```\n"), "{\"A\": \"1\"}");
    assert_eq!(strip_code_fence("```{}```"), "{}");
    assert_eq!(strip_code_fence("   "), "");
}

// --- Category merging ---

/// An ordinary category lands both at top level and under its own name.
#[test]
fn test_ordinary_category_merge() {
    let mut combined = CombinedResult::new();
    let raw = "```json\n{\"Name\": \"Jane Appraiser\", \"Signature\": true}\n```";
    normalize_into(&mut combined, "CERTIFICATION", raw);

    assert_eq!(combined.fields["Name"], json!("Jane Appraiser"));
    assert_eq!(combined.fields["Signature"], json!("Yes"));
    assert_eq!(
        combined.fields["CERTIFICATION"],
        json!({"Name": "Jane Appraiser", "Signature": "Yes"})
    );
    assert_eq!(
        combined.raw,
        format!("--- CERTIFICATION SECTION ---\n{raw}")
    );
}

/// Repeated calls for one category merge additively into its sub-map.
#[test]
fn test_ordinary_category_repeated_calls() {
    let mut combined = CombinedResult::new();
    normalize_into(&mut combined, "SITE", r#"{"Area": "0.25 ac", "View": "N;Res"}"#);
    normalize_into(&mut combined, "SITE", r#"{"View": "B;Park", "Shape": "Rect"}"#);

    assert_eq!(
        combined.fields["SITE"],
        json!({"Area": "0.25 ac", "View": "B;Park", "Shape": "Rect"})
    );
    assert_eq!(combined.fields["View"], json!("B;Park"));
}

/// Two categories sharing a label overwrite each other at top level.
#[test]
fn test_cross_category_collision_is_flattened() {
    let mut combined = CombinedResult::new();
    normalize_into(&mut combined, "SUBJECT", r#"{"State": "IL"}"#);
    normalize_into(&mut combined, "CERTIFICATION", r#"{"State": "WI"}"#);

    assert_eq!(combined.fields["State"], json!("WI"));
    assert_eq!(combined.fields["SUBJECT"]["State"], json!("IL"));
    assert_eq!(combined.fields["CERTIFICATION"]["State"], json!("WI"));
}

/// Grid "Subject" maps merge key by key; comparables go to the top level.
#[test]
fn test_grid_subject_merges_additively() {
    let mut combined = CombinedResult::new();
    normalize_into(
        &mut combined,
        "SALES_GRID",
        r#"{"Subject": {"Address": "123 Main", "Sale Price": "$300,000"},
            "COMPARABLE SALE #1": {"Address": "9 Oak", "Sale Price": "$295,000"}}"#,
    );
    normalize_into(
        &mut combined,
        "RENT_SCHEDULE_GRID",
        r#"{"Subject": {"Sale Price": "", "Monthly Rental": "$1,800"},
            "COMPARABLE RENT #1": {"Monthly Rental": "$1,750"}}"#,
    );

    assert_eq!(
        combined.fields["Subject"],
        json!({"Address": "123 Main", "Sale Price": "", "Monthly Rental": "$1,800"})
    );
    assert_eq!(combined.fields["COMPARABLE SALE #1"]["Address"], json!("9 Oak"));
    assert_eq!(
        combined.fields["COMPARABLE RENT #1"]["Monthly Rental"],
        json!("$1,750")
    );
    assert!(!combined.fields.contains_key("SALES_GRID"));
    assert!(combined.raw.contains("--- SALES GRID SECTION ---"));
    assert!(combined.raw.contains("\n\n--- RENT SCHEDULE GRID SECTION ---\n"));
}

/// A malformed reply is skipped but keeps its raw text; earlier data survives.
#[test]
fn test_malformed_reply_is_skipped() {
    let mut combined = CombinedResult::new();
    normalize_into(&mut combined, "SUBJECT", r#"{"City": "Springfield"}"#);
    normalize_into(&mut combined, "CONTRACT", "Sorry, I cannot read this document.");
    normalize_into(&mut combined, "SITE", "[\"not\", \"an object\"]");
    normalize_into(&mut combined, "SALES_GRID", r#"{"Subject": "n/a"}"#);

    assert_eq!(combined.fields["City"], json!("Springfield"));
    assert!(!combined.fields.contains_key("CONTRACT"));
    assert!(!combined.fields.contains_key("SITE"));
    assert!(!combined.fields.contains_key("Subject"));
    assert!(combined.raw.contains("Sorry, I cannot read this document."));
    assert!(combined.raw.contains("--- SALES GRID SECTION ---"));
}

/// An empty or fence-only reply records its raw text and nothing else.
#[test]
fn test_empty_reply_adds_nothing() {
    let mut combined = CombinedResult::new();
    normalize_into(&mut combined, "ADDENDUM", "```json\n```");
    assert!(combined.fields.is_empty());
    assert_eq!(combined.raw, "--- ADDENDUM SECTION ---\n```json\n```");
}

/// A blocked reply becomes the fixed error payload inside the category.
#[test]
fn test_blocked_reply_payload() {
    let mut combined = CombinedResult::new();
    let raw = ModelResponse::Blocked {
        reason: "SAFETY".to_string(),
    }
    .into_raw_text();
    normalize_into(&mut combined, "IMAGE_ANALYSIS", &raw);

    assert_eq!(blocked_payload("SAFETY"), json!({"error": "Response blocked", "reason": "SAFETY"}));
    assert_eq!(combined.fields["IMAGE_ANALYSIS"], blocked_payload("SAFETY"));
    assert_eq!(combined.fields["error"], json!("Response blocked"));
}

// --- Custom prompt ---

#[test]
fn test_normalize_custom() {
    let result = normalize_custom("```json\n{\"Bedrooms\": 3, \"Pool\": true}\n```");
    assert_eq!(result.fields["Bedrooms"], json!(3));
    // Free-text replies are returned as-is.
    assert_eq!(result.fields["Pool"], json!(true));
    assert!(result.raw.starts_with("--- CUSTOM PROMPT SECTION ---\n"));

    let result = normalize_custom("not json");
    assert!(result.fields.is_empty());
    assert_eq!(result.raw, "--- CUSTOM PROMPT SECTION ---\nnot json");
}
