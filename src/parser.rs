use std::fmt;
use std::mem;
use std::sync::LazyLock;

use regex::Regex;

use crate::ast::{CellMethod, CellMethods, ExtraInfo, Method, SxiInterval, Token};
use crate::lexer::Lexer;

/// Entries of recent context carried on a syntax error.
const ERROR_CONTEXT_LEN: usize = 3;

/// The token stream does not match any grammar production.
///
/// Fatal to the parse call: no partial result is returned. Carries the
/// offending token (`Token::Eof` when the input ended early) and the last
/// few successfully parsed entries for diagnostics.
#[derive(Debug, Clone, PartialEq)]
pub struct SyntaxError {
    pub expected: &'static str,
    pub found: Token,
    pub context: Vec<CellMethod>,
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.found {
            Token::Eof => write!(f, "Syntax error: expected {}, found end of input", self.expected)?,
            token => write!(f, "Syntax error: expected {}, found {:?}", self.expected, token)?,
        }
        if !self.context.is_empty() {
            let parsed: Vec<String> = self.context.iter().map(|cm| cm.to_string()).collect();
            write!(f, " (after \"{}\")", parsed.join(" "))?;
        }
        Ok(())
    }
}

impl std::error::Error for SyntaxError {}

/// Parse a `cell_methods` attribute string.
///
/// Builds a fresh lexer and parser per call, so repeated and concurrent
/// invocations share nothing.
///
/// # Examples
///
/// ```
/// use cf_cell_methods::parse;
///
/// let cms = parse("time: percentile[5] (interval: 1 day)").unwrap();
/// assert_eq!(cms[0].method.name, "percentile");
/// assert!(parse("explode my head").is_err());
/// ```
pub fn parse(input: &str) -> Result<CellMethods, SyntaxError> {
    Parser::new(Lexer::new(input)).parse()
}

pub struct Parser {
    lexer: Lexer,
    current_token: Token,
    // Successfully parsed entries of the current call, kept for error
    // context. Call-local: `parse` consumes the parser.
    history: Vec<CellMethod>,
}

impl Parser {
    pub fn new(mut lexer: Lexer) -> Self {
        let current_token = lexer.next_token();
        Parser {
            lexer,
            current_token,
            history: Vec::new(),
        }
    }

    /// Parse the whole input as one-or-more cell methods.
    ///
    /// Consuming `self` guarantees no parser state survives the call.
    pub fn parse(mut self) -> Result<CellMethods, SyntaxError> {
        loop {
            let cell_method = self.parse_cell_method()?;
            self.history.push(cell_method);
            if self.check(&Token::Eof) {
                return Ok(CellMethods::new(self.history));
            }
        }
    }

    fn advance(&mut self) {
        self.current_token = self.lexer.next_token();
    }

    fn check(&self, token: &Token) -> bool {
        mem::discriminant(&self.current_token) == mem::discriminant(token)
    }

    fn error(&self, expected: &'static str) -> SyntaxError {
        let start = self.history.len().saturating_sub(ERROR_CONTEXT_LEN);
        SyntaxError {
            expected,
            found: self.current_token.clone(),
            context: self.history[start..].to_vec(),
        }
    }

    fn expect(&mut self, expected: Token, what: &'static str) -> Result<(), SyntaxError> {
        if !self.check(&expected) {
            return Err(self.error(what));
        }
        self.advance();
        Ok(())
    }

    fn expect_name(&mut self, what: &'static str) -> Result<String, SyntaxError> {
        match mem::replace(&mut self.current_token, Token::Eof) {
            Token::Name(name) => {
                self.advance();
                Ok(name)
            }
            token => {
                self.current_token = token;
                Err(self.error(what))
            }
        }
    }

    fn expect_num(&mut self, what: &'static str) -> Result<f64, SyntaxError> {
        match self.current_token {
            Token::Num(value) => {
                self.advance();
                Ok(value)
            }
            _ => Err(self.error(what)),
        }
    }

    /// `NAME ':' method tail`, where `tail` is one of the two alternative
    /// productions: `[where] [over] [extra-info]` or `within [extra-info]`.
    /// The alternatives are what makes `within` and `where`/`over`
    /// irreconcilable on a single entry.
    fn parse_cell_method(&mut self) -> Result<CellMethod, SyntaxError> {
        let name = self.expect_name("an axis name")?;
        self.expect(Token::Colon, "`:` after the axis name")?;
        let method = self.parse_method()?;

        let mut cell_method = CellMethod::new(name, method);

        if self.check(&Token::Within) {
            self.advance();
            cell_method.within = Some(self.expect_name("a period after `within`")?);
        } else {
            if self.check(&Token::Where) {
                self.advance();
                cell_method.where_ = Some(self.expect_name("an area type after `where`")?);
            }
            if self.check(&Token::Over) {
                self.advance();
                cell_method.over = Some(self.expect_name("a dimension after `over`")?);
            }
        }

        if self.check(&Token::ExtraInfo(String::new())) {
            match mem::replace(&mut self.current_token, Token::Eof) {
                Token::ExtraInfo(text) => {
                    self.advance();
                    cell_method.extra_info = Some(parse_extra_info(&text));
                }
                _ => unreachable!(),
            }
        }

        Ok(cell_method)
    }

    /// `NAME [ '[' NUM (',' NUM)* ']' ]` - a statistic with an optional
    /// parameter list. An empty list `[]` is not in the grammar.
    fn parse_method(&mut self) -> Result<Method, SyntaxError> {
        let name = self.expect_name("a statistic name")?;

        if !self.check(&Token::LBracket) {
            return Ok(Method::new(name));
        }
        self.advance();

        let mut params = vec![self.expect_num("a numeric parameter")?];
        while self.check(&Token::Comma) {
            self.advance();
            params.push(self.expect_num("a numeric parameter after `,`")?);
        }
        self.expect(Token::RBracket, "`]` closing the parameter list")?;

        Ok(Method::with_params(name, params))
    }
}

static SXI_INTERVAL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^interval:\s*(\d+(?:\.\d+)?)\s+([A-Za-z_][A-Za-z0-9_]*)(?:\s+comment:\s*(.*))?$")
        .expect("interval template is a valid regex")
});

/// Second pass over a captured extra-info span.
///
/// The span's content is free text relative to the outer grammar, so it is
/// re-parsed here against the fixed template
/// `"interval:" number unit ["comment:" text]`; the sub-language has no
/// recursive structure, so a single template match suffices. Total: text
/// that does not match the standardized form, including a malformed
/// `interval:` clause, is the non-standardized comment verbatim.
fn parse_extra_info(text: &str) -> ExtraInfo {
    if let Some(caps) = SXI_INTERVAL_RE.captures(text) {
        if let Ok(value) = caps[1].parse::<f64>() {
            return ExtraInfo {
                standardized: Some(SxiInterval::new(value, &caps[2])),
                non_standardized: caps.get(3).map(|m| m.as_str().to_string()),
            };
        }
    }
    ExtraInfo {
        standardized: None,
        non_standardized: Some(text.to_string()),
    }
}

#[test]
fn test_extra_info_second_pass() {
    assert_eq!(
        parse_extra_info("interval: 1 day"),
        ExtraInfo {
            standardized: Some(SxiInterval::new(1.0, "day")),
            non_standardized: None,
        }
    );
    assert_eq!(
        parse_extra_info("interval: 0.5 degrees comment: nominal"),
        ExtraInfo {
            standardized: Some(SxiInterval::new(0.5, "degrees")),
            non_standardized: Some("nominal".to_string()),
        }
    );
    assert_eq!(
        parse_extra_info("frogs"),
        ExtraInfo {
            standardized: None,
            non_standardized: Some("frogs".to_string()),
        }
    );
    // Malformed standardized text degrades to a comment.
    assert_eq!(
        parse_extra_info("interval: 20minutes"),
        ExtraInfo {
            standardized: None,
            non_standardized: Some("interval: 20minutes".to_string()),
        }
    );
}
