// tests/matching_tests.rs

use cf_cell_methods::{Match, parse};
use serde_json::json;

// ============================================================================
// Atomic spec values
// ============================================================================

#[test]
fn test_literal_field_match() {
    let cms = parse("time: mean").unwrap();
    assert!(cms[0].matches(&json!({"name": "time"})));
    assert!(!cms[0].matches(&json!({"name": "lon"})));
    assert!(cms[0].matches(&json!({"name": "time", "method": {"name": "mean"}})));
    assert!(!cms[0].matches(&json!({"name": "time", "method": {"name": "median"}})));
}

#[test]
fn test_null_matches_only_absent_fields() {
    let cms = parse("time: mean where land").unwrap();
    assert!(cms[0].matches(&json!({"where": "land", "over": null})));
    assert!(!cms[0].matches(&json!({"where": null})));
    assert!(cms[0].matches(&json!({"within": null, "extra_info": null})));
}

#[test]
fn test_unknown_keys_match_nothing() {
    let cms = parse("time: mean").unwrap();
    assert!(!cms[0].matches(&json!({"axis": "time"})));
}

#[test]
fn test_non_object_spec_is_false() {
    let cms = parse("time: mean").unwrap();
    assert!(!cms[0].matches(&json!("time: mean")));
    assert!(!cms[0].matches(&json!(null)));
}

// ============================================================================
// Nested spec values
// ============================================================================

#[test]
fn test_nested_method_spec() {
    let cms = parse("time: percentile[5]").unwrap();
    assert!(cms[0].matches(&json!({"method": {"name": "percentile", "params": [5]}})));
    assert!(!cms[0].matches(&json!({"method": {"name": "percentile", "params": [95]}})));
    assert!(!cms[0].matches(&json!({"method": {"name": "percentile", "params": null}})));
    // A string literal compares against the canonical rendering.
    assert!(cms[0].matches(&json!({"method": "percentile[5]"})));
}

#[test]
fn test_nested_extra_info_spec() {
    let cms = parse("time: mean (interval: 1 day comment: frogs)").unwrap();
    assert!(cms[0].matches(&json!({
        "extra_info": {
            "standardized": {"value": 1, "unit": "day"},
            "non_standardized": "frogs",
        }
    })));
    assert!(!cms[0].matches(&json!({
        "extra_info": {"standardized": {"value": 2, "unit": "day"}}
    })));
    assert!(!cms[0].matches(&json!({"extra_info": null})));
}

#[test]
fn test_nested_spec_against_absent_subnode() {
    let cms = parse("time: mean").unwrap();
    assert!(!cms[0].matches(&json!({
        "extra_info": {"non_standardized": "frogs"}
    })));
    assert!(cms[0].matches(&json!({"extra_info": null})));
}
