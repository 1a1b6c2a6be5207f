//! Keyed structural matching of representation nodes against partial
//! specification maps.
//!
//! A specification is a JSON object: each key names a field of the node, and
//! the value is either a literal (compared by equality), `null` (matching
//! only an absent field), or a nested object (matched recursively against
//! that field's sub-node). Keys not named in the specification are ignored,
//! which is what makes this useful as a query helper.
//!
//! # Examples
//!
//! ```
//! use cf_cell_methods::{parse, Match};
//! use serde_json::json;
//!
//! let cms = parse("time: mean within days").unwrap();
//! assert!(cms[0].matches(&json!({"name": "time", "within": "days"})));
//! assert!(cms[0].matches(&json!({"method": {"name": "mean", "params": null}})));
//! assert!(!cms[0].matches(&json!({"over": "days"})));
//! ```

use serde_json::Value;

use super::nodes::{CellMethod, ExtraInfo, Method, SxiInterval};

/// Test a node against a partial specification map.
///
/// Total over any `spec` value: a specification that is not a JSON object,
/// or that names an unknown field, simply does not match.
pub trait Match {
    fn matches(&self, spec: &Value) -> bool;
}

/// An optional text field against a literal or `null` spec value.
fn text_matches(field: Option<&str>, want: &Value) -> bool {
    match want {
        Value::Null => field.is_none(),
        Value::String(s) => field == Some(s.as_str()),
        _ => false,
    }
}

/// An optional sub-node field: `null` matches absence, a nested object is
/// matched recursively.
fn node_matches<T: Match>(field: Option<&T>, want: &Value) -> bool {
    match (field, want) {
        (None, Value::Null) => true,
        (Some(node), Value::Object(_)) => node.matches(want),
        _ => false,
    }
}

impl Match for Method {
    fn matches(&self, spec: &Value) -> bool {
        let Value::Object(entries) = spec else {
            return false;
        };
        entries.iter().all(|(key, want)| match key.as_str() {
            "name" => matches!(want, Value::String(s) if *s == self.name),
            "params" => match (want, &self.params) {
                (Value::Null, None) => true,
                (Value::Array(xs), Some(ps)) => {
                    xs.len() == ps.len()
                        && xs.iter().zip(ps).all(|(x, p)| x.as_f64() == Some(*p))
                }
                _ => false,
            },
            _ => false,
        })
    }
}

impl Match for SxiInterval {
    fn matches(&self, spec: &Value) -> bool {
        let Value::Object(entries) = spec else {
            return false;
        };
        entries.iter().all(|(key, want)| match key.as_str() {
            "value" => want.as_f64() == Some(self.value),
            "unit" => matches!(want, Value::String(s) if *s == self.unit),
            _ => false,
        })
    }
}

impl Match for ExtraInfo {
    fn matches(&self, spec: &Value) -> bool {
        let Value::Object(entries) = spec else {
            return false;
        };
        entries.iter().all(|(key, want)| match key.as_str() {
            "standardized" => node_matches(self.standardized.as_ref(), want),
            "non_standardized" => text_matches(self.non_standardized.as_deref(), want),
            _ => false,
        })
    }
}

impl Match for CellMethod {
    fn matches(&self, spec: &Value) -> bool {
        let Value::Object(entries) = spec else {
            return false;
        };
        entries.iter().all(|(key, want)| match key.as_str() {
            "name" => matches!(want, Value::String(s) if *s == self.name),
            // A literal string spec compares against the canonical rendering.
            "method" => match want {
                Value::Object(_) => self.method.matches(want),
                Value::String(s) => *s == self.method.to_string(),
                _ => false,
            },
            "where" => text_matches(self.where_.as_deref(), want),
            "over" => text_matches(self.over.as_deref(), want),
            "within" => text_matches(self.within.as_deref(), want),
            "extra_info" => node_matches(self.extra_info.as_ref(), want),
            _ => false,
        })
    }
}
