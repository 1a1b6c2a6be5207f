use std::fmt;

use crate::ast::Token;

/// An unrecognized character in the input.
///
/// Lexically recoverable: the character is reported, skipped, and scanning
/// continues. If the character was structurally significant the parser will
/// fail on the resulting token stream instead.
#[derive(Debug, Clone, PartialEq)]
pub struct LexError {
    pub character: char,
    pub column: usize,
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unexpected character {:?} at column {}",
            self.character, self.column
        )
    }
}

impl std::error::Error for LexError {}

/// Keyword table consulted after generic identifier scanning.
fn keyword(ident: &str) -> Option<Token> {
    match ident {
        "where" => Some(Token::Where),
        "over" => Some(Token::Over),
        "within" => Some(Token::Within),
        _ => None,
    }
}

pub struct Lexer {
    input: Vec<char>,
    position: usize,
    errors: Vec<LexError>,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        Lexer {
            input: input.chars().collect(),
            position: 0,
            errors: Vec::new(),
        }
    }

    /// Unrecognized characters encountered so far.
    pub fn errors(&self) -> &[LexError] {
        &self.errors
    }

    fn current_char(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    fn peek_char(&self, offset: usize) -> Option<char> {
        self.input.get(self.position + offset).copied()
    }

    fn advance(&mut self) {
        self.position += 1;
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.current_char() {
            if ch.is_whitespace() {
                self.advance();
            } else {
                break;
            }
        }
    }

    fn read_identifier(&mut self) -> String {
        let mut result = String::new();
        while let Some(ch) = self.current_char() {
            if ch.is_alphanumeric() || ch == '_' {
                result.push(ch);
                self.advance();
            } else {
                break;
            }
        }
        result
    }

    fn read_number(&mut self) -> Token {
        let mut number = String::new();
        let mut is_fractional = false;

        while let Some(ch) = self.current_char() {
            if ch.is_ascii_digit() {
                number.push(ch);
                self.advance();
            } else if ch == '.'
                && !is_fractional
                && self.peek_char(1).is_some_and(|c| c.is_ascii_digit())
            {
                is_fractional = true;
                number.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        Token::Num(number.parse::<f64>().expect("Invalid number"))
    }

    /// Capture the span between `(` and the next `)` as one opaque token.
    ///
    /// The span is taken verbatim, parentheses excluded, and is re-parsed by
    /// the parser's second pass. Returns `None` (after reporting the `(` as
    /// unrecognized) when no closing `)` follows.
    fn read_extra_info(&mut self) -> Option<Token> {
        let close = (self.position + 1..self.input.len()).find(|&i| self.input[i] == ')')?;
        let text: String = self.input[self.position + 1..close].iter().collect();
        self.position = close + 1;
        Some(Token::ExtraInfo(text))
    }

    fn report(&mut self, ch: char) {
        log::warn!("unexpected character {:?} at column {}", ch, self.position);
        self.errors.push(LexError {
            character: ch,
            column: self.position,
        });
    }

    pub fn next_token(&mut self) -> Token {
        loop {
            self.skip_whitespace();

            match self.current_char() {
                None => return Token::Eof,
                Some(':') => {
                    self.advance();
                    return Token::Colon;
                }
                Some(',') => {
                    self.advance();
                    return Token::Comma;
                }
                Some('[') => {
                    self.advance();
                    return Token::LBracket;
                }
                Some(']') => {
                    self.advance();
                    return Token::RBracket;
                }
                Some('(') => {
                    if let Some(token) = self.read_extra_info() {
                        return token;
                    }
                    // Unterminated span: treat the `(` itself as junk.
                    self.report('(');
                    self.advance();
                }
                Some(ch) if ch.is_alphabetic() || ch == '_' => {
                    let ident = self.read_identifier();
                    return keyword(&ident).unwrap_or(Token::Name(ident));
                }
                Some(ch) if ch.is_ascii_digit() => return self.read_number(),
                Some(ch) => {
                    self.report(ch);
                    self.advance();
                }
            }
        }
    }
}

#[test]
fn test_names_and_numbers() {
    let mut lexer = Lexer::new("foo: bar 123 456.789 point sum");
    assert_eq!(lexer.next_token(), Token::Name("foo".to_string()));
    assert_eq!(lexer.next_token(), Token::Colon);
    assert_eq!(lexer.next_token(), Token::Name("bar".to_string()));
    assert_eq!(lexer.next_token(), Token::Num(123.0));
    assert_eq!(lexer.next_token(), Token::Num(456.789));
    assert_eq!(lexer.next_token(), Token::Name("point".to_string()));
    assert_eq!(lexer.next_token(), Token::Name("sum".to_string()));
    assert_eq!(lexer.next_token(), Token::Eof);
}

#[test]
fn test_keywords() {
    let mut lexer = Lexer::new("where over within whereabouts");
    assert_eq!(lexer.next_token(), Token::Where);
    assert_eq!(lexer.next_token(), Token::Over);
    assert_eq!(lexer.next_token(), Token::Within);
    assert_eq!(
        lexer.next_token(),
        Token::Name("whereabouts".to_string())
    );
}

#[test]
fn test_params() {
    let mut lexer = Lexer::new("percentile[5,95]");
    assert_eq!(lexer.next_token(), Token::Name("percentile".to_string()));
    assert_eq!(lexer.next_token(), Token::LBracket);
    assert_eq!(lexer.next_token(), Token::Num(5.0));
    assert_eq!(lexer.next_token(), Token::Comma);
    assert_eq!(lexer.next_token(), Token::Num(95.0));
    assert_eq!(lexer.next_token(), Token::RBracket);
}

#[test]
fn test_extra_info_span_is_opaque() {
    let mut lexer = Lexer::new("(interval: 1 day comment: frogs)");
    assert_eq!(
        lexer.next_token(),
        Token::ExtraInfo("interval: 1 day comment: frogs".to_string())
    );
    assert_eq!(lexer.next_token(), Token::Eof);
}

#[test]
fn test_unrecognized_character_is_skipped() {
    let mut lexer = Lexer::new("time < mean");
    assert_eq!(lexer.next_token(), Token::Name("time".to_string()));
    assert_eq!(lexer.next_token(), Token::Name("mean".to_string()));
    assert_eq!(
        lexer.errors(),
        &[LexError {
            character: '<',
            column: 5
        }]
    );
}

#[test]
fn test_unterminated_extra_info() {
    let mut lexer = Lexer::new("(no closing paren");
    assert_eq!(lexer.next_token(), Token::Name("no".to_string()));
    assert_eq!(lexer.errors().len(), 1);
    assert_eq!(lexer.errors()[0].character, '(');
}
