#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    // Values
    /// Decimal number, optionally fractional
    ///
    /// Always decoded to a float; parameter lists and interval values do not
    /// distinguish integers.
    ///
    /// # Examples
    /// ```text
    /// 5
    /// 456.789
    /// ```
    Num(f64),

    /// Bare identifier: axis name, statistic name, area type, unit, ...
    ///
    /// Must start with a letter or underscore, followed by letters, digits,
    /// or underscores. The keyword spellings `where`, `over` and `within`
    /// are specialized into their own token kinds and never appear as names.
    ///
    /// # Examples
    /// ```text
    /// time
    /// standard_deviation
    /// sea_ice
    /// ```
    Name(String),

    /// Opaque extra-information span
    ///
    /// Everything between a `(` and the next `)`, captured verbatim without
    /// the parentheses. The span is deliberately not tokenized further: its
    /// content is free text relative to the outer grammar and is re-parsed
    /// by a dedicated second pass in the parser.
    ///
    /// # Examples
    /// ```text
    /// (interval: 1 day)
    /// (this is a comment)
    /// ```
    ExtraInfo(String),

    // Keywords
    /// `where` - restricts the statistic to a portion of each cell
    ///
    /// # Examples
    /// ```text
    /// area: mean where land
    /// ```
    Where,

    /// `over` - names the dimension the statistic ranges over
    ///
    /// # Examples
    /// ```text
    /// area: mean where sea_ice over sea
    /// time: median over years
    /// ```
    Over,

    /// `within` - climatological statistic within each period
    ///
    /// Mutually exclusive with `where`/`over` on a single cell method.
    ///
    /// # Examples
    /// ```text
    /// time: mean within days
    /// ```
    Within,

    // Punctuation
    /// Colon separating an axis name from its method
    Colon,

    /// Comma separating method parameters
    Comma,

    /// Left bracket opening a method parameter list
    LBracket,

    /// Right bracket closing a method parameter list
    RBracket,

    /// End of input
    Eof,
}
