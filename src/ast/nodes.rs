use std::fmt;
use std::ops::{Add, Deref};

/// An ordered sequence of cell methods, as parsed from a whole
/// `cell_methods` attribute string.
///
/// Order is significant: later entries describe statistics computed over the
/// results of earlier ones. Sequences are produced by the parser and never
/// mutated afterward; `+` concatenates two sequences into a new one, which
/// is how multi-method canonical examples are assembled.
///
/// # Examples
///
/// ```
/// use cf_cell_methods::parse;
///
/// let cms = parse("time: mean within days time: mean over days").unwrap();
/// assert_eq!(cms.len(), 2);
/// assert_eq!(cms[0].within.as_deref(), Some("days"));
/// assert_eq!(cms.to_string(), "time: mean within days time: mean over days");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CellMethods(Vec<CellMethod>);

impl CellMethods {
    pub fn new(methods: Vec<CellMethod>) -> Self {
        CellMethods(methods)
    }
}

impl Deref for CellMethods {
    type Target = [CellMethod];

    fn deref(&self) -> &[CellMethod] {
        &self.0
    }
}

impl From<Vec<CellMethod>> for CellMethods {
    fn from(methods: Vec<CellMethod>) -> Self {
        CellMethods(methods)
    }
}

impl Add for CellMethods {
    type Output = CellMethods;

    fn add(self, rhs: CellMethods) -> CellMethods {
        let mut methods = self.0;
        methods.extend(rhs.0);
        CellMethods(methods)
    }
}

impl<'a> IntoIterator for &'a CellMethods {
    type Item = &'a CellMethod;
    type IntoIter = std::slice::Iter<'a, CellMethod>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for CellMethods {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        strict_join(f, self.0.iter().map(|cm| Some(cm.to_string())))
    }
}

/// A single statistical annotation: one `name: method ...` entry.
///
/// Exactly one of the two clause forms can be present: a `where`/`over` pair
/// (portion-of-cells statistics) or a `within` clause (climatological
/// statistics). The grammar has two irreconcilable productions for the tail
/// of a cell method, so a parsed value never carries both.
#[derive(Debug, Clone, PartialEq)]
pub struct CellMethod {
    /// Axis or dimension the statistic applies to (e.g. `time`)
    pub name: String,
    /// The statistic applied
    pub method: Method,
    /// `where <type>` clause, restricting the statistic to a cell portion
    pub where_: Option<String>,
    /// `over <dimension>` clause
    pub over: Option<String>,
    /// `within <period>` clause; never set together with `where_`/`over`
    pub within: Option<String>,
    /// Parenthesized extra information, if any
    pub extra_info: Option<ExtraInfo>,
}

impl CellMethod {
    /// A cell method with no clauses and no extra information. Clauses are
    /// filled in with struct update syntax:
    ///
    /// ```
    /// use cf_cell_methods::{CellMethod, Method};
    ///
    /// let cm = CellMethod {
    ///     within: Some("days".to_string()),
    ///     ..CellMethod::new("time", Method::new("mean"))
    /// };
    /// assert_eq!(cm.to_string(), "time: mean within days");
    /// ```
    pub fn new(name: impl Into<String>, method: Method) -> Self {
        CellMethod {
            name: name.into(),
            method,
            where_: None,
            over: None,
            within: None,
            extra_info: None,
        }
    }
}

impl fmt::Display for CellMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        strict_join(
            f,
            [
                Some(format!("{}: {}", self.name, self.method)),
                self.where_.as_ref().map(|w| format!("where {w}")),
                self.over.as_ref().map(|o| format!("over {o}")),
                self.within.as_ref().map(|w| format!("within {w}")),
                self.extra_info.as_ref().map(|e| e.to_string()),
            ],
        )
    }
}

/// A statistic: its name plus an optional bracketed parameter list.
///
/// `params` is `None` when no bracket list was written; the grammar requires
/// a written list to hold at least one number, so `Some(vec![])` never comes
/// out of the parser.
#[derive(Debug, Clone, PartialEq)]
pub struct Method {
    pub name: String,
    pub params: Option<Vec<f64>>,
}

impl Method {
    pub fn new(name: impl Into<String>) -> Self {
        Method {
            name: name.into(),
            params: None,
        }
    }

    pub fn with_params(name: impl Into<String>, params: Vec<f64>) -> Self {
        Method {
            name: name.into(),
            params: Some(params),
        }
    }

    /// `(name, arity)` pair used for the extended-method whitelist lookup.
    pub fn signature(&self) -> (&str, usize) {
        (
            self.name.as_str(),
            self.params.as_ref().map_or(0, |p| p.len()),
        )
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if let Some(params) = &self.params {
            let rendered: Vec<String> = params.iter().map(|p| p.to_string()).collect();
            write!(f, "[{}]", rendered.join(","))?;
        }
        Ok(())
    }
}

/// Extra information attached to a cell method.
///
/// Holds a standardized part, a free-text comment, or both. Both-absent
/// should never come out of the parser; it renders as the empty string.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtraInfo {
    pub standardized: Option<SxiInterval>,
    pub non_standardized: Option<String>,
}

impl fmt::Display for ExtraInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.standardized, &self.non_standardized) {
            (None, None) => Ok(()),
            (Some(sxi), None) => write!(f, "({sxi})"),
            (None, Some(comment)) => write!(f, "({comment})"),
            (Some(sxi), Some(comment)) => write!(f, "({sxi} comment: {comment})"),
        }
    }
}

/// Standardized extra information: an `interval: N unit` clause.
#[derive(Debug, Clone, PartialEq)]
pub struct SxiInterval {
    pub value: f64,
    pub unit: String,
}

impl SxiInterval {
    pub fn new(value: f64, unit: impl Into<String>) -> Self {
        SxiInterval {
            value,
            unit: unit.into(),
        }
    }
}

impl fmt::Display for SxiInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "interval: {} {}", self.value, self.unit)
    }
}

/// Write the present, non-empty pieces joined by single spaces. Absent
/// pieces vanish entirely, so no double spacing.
fn strict_join(
    f: &mut fmt::Formatter<'_>,
    pieces: impl IntoIterator<Item = Option<String>>,
) -> fmt::Result {
    let mut first = true;
    for piece in pieces.into_iter().flatten() {
        if piece.is_empty() {
            continue;
        }
        if !first {
            write!(f, " ")?;
        }
        write!(f, "{piece}")?;
        first = false;
    }
    Ok(())
}

#[test]
fn test_strict_join_skips_absent_pieces() {
    let cm = CellMethod {
        over: Some("years".to_string()),
        ..CellMethod::new("time", Method::new("mean"))
    };
    assert_eq!(cm.to_string(), "time: mean over years");
}

#[test]
fn test_concatenation_builds_a_new_sequence() {
    let a = CellMethods::new(vec![CellMethod::new("time", Method::new("mean"))]);
    let b = CellMethods::new(vec![CellMethod::new("lon", Method::new("median"))]);
    let joined = a.clone() + b;
    assert_eq!(joined.len(), 2);
    assert_eq!(a.len(), 1);
}
