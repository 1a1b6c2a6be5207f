//! Semantic checks on cell methods, which are necessarily syntactically
//! valid once represented as [`CellMethod`] values.
//!
//! Everything here is a pure, total boolean predicate: structurally valid
//! but pattern-mismatched input yields `false`, never an error. Only so
//! much can be checked from a `cell_methods` string alone - validating axis
//! names, for instance, needs the enclosing dataset - so these checks are
//! about the statistic vocabulary and the recognized climatological
//! patterns.

use std::borrow::Cow;
use std::sync::LazyLock;

use serde_json::json;

use crate::ast::{CellMethod, CellMethods, Match};
use crate::parser::parse;

/// The CF-standard statistic vocabulary.
pub static CONVENTIONAL_METHODS: &[&str] = &[
    "num",
    "name",
    "point",
    "sum",
    "maximum",
    "maximum_absolute_value",
    "median",
    "mid_range",
    "minimum",
    "minimum_absolute_value",
    "mean",
    "mean_absolute_value",
    "mean_of_upper_decile",
    "mode",
    "range",
    "root_mean_square",
    "standard_deviation",
    "sum_of_squares",
    "variance",
];

/// Additionally recognized parameterized statistics, as `(name, arity)`
/// signatures. Extending this table is a data change, not a parser change.
pub static EXTENDED_METHODS: &[(&str, usize)] = &[("percentile", 1)];

/// Does a single cell method conform to CF Conventions? True iff its
/// statistic is in the conventional vocabulary and takes no parameters.
///
/// Climatological structure and axis validity need the larger context of
/// the whole sequence (see [`is_conventional`]) or the enclosing dataset.
pub fn is_conventional_1(cell_method: &CellMethod) -> bool {
    cell_method.method.params.is_none()
        && CONVENTIONAL_METHODS.contains(&cell_method.method.name.as_str())
}

/// Conventional, or a whitelisted parameterized statistic (currently only
/// one-argument `percentile`).
pub fn is_extended_1(cell_method: &CellMethod) -> bool {
    is_conventional_1(cell_method) || EXTENDED_METHODS.contains(&cell_method.method.signature())
}

/// Does a sequence match one of the three recognized climatological
/// patterns?
///
/// Every entry must be conventional and apply to `time`, and the sequence
/// of `(within, over)` pairs must be exactly one of:
///
/// ```text
/// (years, -) (-, years)
/// (days,  -) (-, days)
/// (days,  -) (-, days) (-, years)
/// ```
///
/// Any other pairing, however well-formed entry by entry, is rejected.
pub fn is_conventional_climatology(cell_methods: &[CellMethod]) -> bool {
    if !cell_methods.iter().all(is_conventional_1) {
        return false;
    }
    if !cell_methods.iter().all(|cm| cm.name == "time") {
        return false;
    }

    let within_over: Vec<(Option<&str>, Option<&str>)> = cell_methods
        .iter()
        .map(|cm| (cm.within.as_deref(), cm.over.as_deref()))
        .collect();

    matches!(
        within_over.as_slice(),
        [(Some("years"), None), (None, Some("years"))]
            | [(Some("days"), None), (None, Some("days"))]
            | [
                (Some("days"), None),
                (None, Some("days")),
                (None, Some("years"))
            ]
    )
}

/// Is a whole sequence conventional? Every entry must be individually
/// conventional, and the sequence must either be a recognized climatology
/// or use `where`/`over` conventionally: any `over` accompanied by a
/// `where`, and no `within` anywhere.
pub fn is_conventional(cell_methods: &[CellMethod]) -> bool {
    if !cell_methods.iter().all(is_conventional_1) {
        return false;
    }

    if is_conventional_climatology(cell_methods) {
        return true;
    }

    cell_methods
        .iter()
        .all(|cm| cm.over.is_none() || cm.where_.is_some())
        && cell_methods.iter().all(|cm| cm.within.is_none())
}

/// Input to the named comparators: either an already-parsed sequence or a
/// raw string, parsed on demand (`None` when it does not parse).
pub trait AsCellMethods {
    fn as_cell_methods(&self) -> Option<Cow<'_, CellMethods>>;
}

impl AsCellMethods for CellMethods {
    fn as_cell_methods(&self) -> Option<Cow<'_, CellMethods>> {
        Some(Cow::Borrowed(self))
    }
}

impl AsCellMethods for str {
    fn as_cell_methods(&self) -> Option<Cow<'_, CellMethods>> {
        parse(self).ok().map(Cow::Owned)
    }
}

static STREAMFLOW_RAW: LazyLock<CellMethods> =
    LazyLock::new(|| parse("time: mean within days").expect("canonical example parses"));

static STREAMFLOW_CLIMATOLOGY: LazyLock<CellMethods> = LazyLock::new(|| {
    parse("time: mean within days time: mean over days").expect("canonical example parses")
});

/// Raw (non-climatological) streamflow reporting: exactly
/// `time: mean within days`.
pub fn is_streamflow_raw<T: AsCellMethods + ?Sized>(input: &T) -> bool {
    match input.as_cell_methods() {
        Some(cell_methods) => *cell_methods == *STREAMFLOW_RAW,
        None => false,
    }
}

/// Streamflow climatology reporting: exactly
/// `time: mean within days time: mean over days`.
pub fn is_streamflow_climatology<T: AsCellMethods + ?Sized>(input: &T) -> bool {
    match input.as_cell_methods() {
        Some(cell_methods) => *cell_methods == *STREAMFLOW_CLIMATOLOGY,
        None => false,
    }
}

/// Ensemble percentile reporting: a single `models: percentile[n]` entry,
/// for any percentile value.
pub fn is_ensemble_percentile<T: AsCellMethods + ?Sized>(input: &T) -> bool {
    match input.as_cell_methods() {
        Some(cell_methods) => {
            cell_methods.len() == 1
                && cell_methods[0].matches(&json!({
                    "name": "models",
                    "where": null,
                    "over": null,
                    "within": null,
                }))
                && cell_methods[0].method.signature() == ("percentile", 1)
        }
        None => false,
    }
}
