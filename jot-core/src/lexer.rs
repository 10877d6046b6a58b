//! Tokenizer over an in-memory JSON text buffer.
//!
//! The lexer holds the input and a cursor and materializes one token at a
//! time with single-token lookahead: [`Lexer::peek`] scans (at most once)
//! without advancing, [`Lexer::pop`] consumes. Malformed input surfaces as
//! a [`ParseError`] carrying the byte offset of the offending token.
//!
//! Supported number syntax is deliberately narrow: optional `-`, decimal
//! digits without a multi-digit leading zero, optional `.` + digits. No
//! exponents. Recognized string escapes are `\" \\ \/ \b \f \n \r \t`;
//! `\uXXXX` is rejected with [`ParseErrorCode::UnsupportedEscape`] rather
//! than mis-decoded.

use phf::phf_map;

/// Compact error codes for lexing and parsing failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ParseErrorCode {
    /// No token rule matches the input byte
    UnexpectedCharacter = 0,
    /// String literal without a closing quote
    UnterminatedString,
    /// `\u` escape (not implemented)
    UnsupportedEscape,
    /// Backslash followed by an unrecognized character
    InvalidEscape,
    /// Multi-digit integer starting with `0`
    LeadingZero,
    /// `-` or `.` without the digits the grammar requires
    BadNumber,
    /// Integer literal outside the 32-bit signed range
    NumberOverflow,
    /// Token valid on its own but not here
    UnexpectedToken,
    /// Input continues after the root element
    TrailingInput,
}

impl ParseErrorCode {
    /// Get a human-readable message for this error code.
    pub fn message(self) -> &'static str {
        match self {
            Self::UnexpectedCharacter => "unexpected character",
            Self::UnterminatedString => "unterminated string",
            Self::UnsupportedEscape => "\\u escapes are not supported",
            Self::InvalidEscape => "invalid escape",
            Self::LeadingZero => "leading zero in number",
            Self::BadNumber => "malformed number",
            Self::NumberOverflow => "integer out of range",
            Self::UnexpectedToken => "unexpected token",
            Self::TrailingInput => "trailing input after value",
        }
    }
}

/// Error returned when tokenizing or parsing fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseError {
    pub code: ParseErrorCode,
    /// Byte offset into the input where the offending token starts.
    pub offset: usize,
}

impl ParseError {
    pub fn new(code: ParseErrorCode, offset: usize) -> Self {
        ParseError { code, offset }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at byte {}", self.code.message(), self.offset)
    }
}

impl std::error::Error for ParseError {}

/// One lexical token. `Str` carries the raw span including both quotes;
/// [`unescape`] resolves it to owned text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token<'a> {
    Eof,
    LBrace,
    RBrace,
    LBrack,
    RBrack,
    Colon,
    Comma,
    True,
    False,
    Null,
    Integer(i32),
    Float(f64),
    Str(&'a str),
}

static KEYWORDS: phf::Map<&'static [u8], Token<'static>> = phf_map! {
    b"true" => Token::True,
    b"false" => Token::False,
    b"null" => Token::Null,
};

/// Tokenizer with one-token lookahead.
pub struct Lexer<'a> {
    input: &'a str,
    pos: usize,
    /// Start offset of the most recently scanned token.
    token_start: usize,
    lookahead: Option<Token<'a>>,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Lexer {
            input,
            pos: 0,
            token_start: 0,
            lookahead: None,
        }
    }

    /// Return the next token without consuming it. Scans at most once;
    /// repeated peeks return the cached token.
    pub fn peek(&mut self) -> Result<Token<'a>, ParseError> {
        match self.lookahead {
            Some(token) => Ok(token),
            None => {
                let token = self.read_token()?;
                self.lookahead = Some(token);
                Ok(token)
            }
        }
    }

    /// Return the next token and consume it.
    pub fn pop(&mut self) -> Result<Token<'a>, ParseError> {
        let token = self.peek()?;
        self.lookahead = None;
        Ok(token)
    }

    /// Byte offset where the most recently scanned token starts.
    pub fn token_offset(&self) -> usize {
        self.token_start
    }

    fn read_token(&mut self) -> Result<Token<'a>, ParseError> {
        let bytes = self.input.as_bytes();
        while self.pos < bytes.len() && bytes[self.pos].is_ascii_whitespace() {
            self.pos += 1;
        }
        self.token_start = self.pos;

        let Some(&b) = bytes.get(self.pos) else {
            return Ok(Token::Eof);
        };
        match b {
            b'{' => {
                self.pos += 1;
                Ok(Token::LBrace)
            }
            b'}' => {
                self.pos += 1;
                Ok(Token::RBrace)
            }
            b'[' => {
                self.pos += 1;
                Ok(Token::LBrack)
            }
            b']' => {
                self.pos += 1;
                Ok(Token::RBrack)
            }
            b':' => {
                self.pos += 1;
                Ok(Token::Colon)
            }
            b',' => {
                self.pos += 1;
                Ok(Token::Comma)
            }
            b'"' => self.read_string(),
            b'-' | b'0'..=b'9' => self.read_number(),
            b'a'..=b'z' => self.read_keyword(),
            _ => Err(ParseError::new(
                ParseErrorCode::UnexpectedCharacter,
                self.token_start,
            )),
        }
    }

    /// `true`, `false`, `null`: scan the letter run, look it up in the
    /// static keyword table.
    fn read_keyword(&mut self) -> Result<Token<'a>, ParseError> {
        let bytes = self.input.as_bytes();
        let start = self.pos;
        let mut end = start;
        while end < bytes.len() && bytes[end].is_ascii_lowercase() {
            end += 1;
        }
        match KEYWORDS.get(&bytes[start..end]) {
            Some(&token) => {
                self.pos = end;
                Ok(token)
            }
            None => Err(ParseError::new(ParseErrorCode::UnexpectedCharacter, start)),
        }
    }

    fn read_number(&mut self) -> Result<Token<'a>, ParseError> {
        let bytes = self.input.as_bytes();
        let start = self.pos;
        let mut pos = self.pos;
        if bytes[pos] == b'-' {
            pos += 1;
        }
        let digits_start = pos;
        while pos < bytes.len() && bytes[pos].is_ascii_digit() {
            pos += 1;
        }
        if pos == digits_start {
            return Err(ParseError::new(ParseErrorCode::BadNumber, start));
        }
        if bytes[digits_start] == b'0' && pos - digits_start > 1 {
            return Err(ParseError::new(ParseErrorCode::LeadingZero, start));
        }

        // A dot only extends the token into a float when a digit follows.
        let mut is_float = false;
        if pos < bytes.len()
            && bytes[pos] == b'.'
            && bytes.get(pos + 1).is_some_and(|d| d.is_ascii_digit())
        {
            is_float = true;
            pos += 1;
            while pos < bytes.len() && bytes[pos].is_ascii_digit() {
                pos += 1;
            }
        }

        let text = &self.input[start..pos];
        self.pos = pos;
        if is_float {
            text.parse::<f64>()
                .map(Token::Float)
                .map_err(|_| ParseError::new(ParseErrorCode::BadNumber, start))
        } else {
            text.parse::<i32>()
                .map(Token::Integer)
                .map_err(|_| ParseError::new(ParseErrorCode::NumberOverflow, start))
        }
    }

    /// Scan from the opening quote to the matching unescaped closing quote,
    /// validating every escape on the way. The returned span includes the
    /// quotes; content stays a borrow of the input.
    fn read_string(&mut self) -> Result<Token<'a>, ParseError> {
        let bytes = self.input.as_bytes();
        let start = self.pos;
        let mut pos = self.pos + 1;
        loop {
            match memchr::memchr2(b'"', b'\\', &bytes[pos..]) {
                None => return Err(ParseError::new(ParseErrorCode::UnterminatedString, start)),
                Some(i) if bytes[pos + i] == b'"' => {
                    self.pos = pos + i + 1;
                    return Ok(Token::Str(&self.input[start..self.pos]));
                }
                Some(i) => {
                    let esc = pos + i;
                    match bytes.get(esc + 1) {
                        None => {
                            return Err(ParseError::new(
                                ParseErrorCode::UnterminatedString,
                                start,
                            ))
                        }
                        Some(b'"' | b'\\' | b'/' | b'b' | b'f' | b'n' | b'r' | b't') => {
                            pos = esc + 2;
                        }
                        Some(b'u') => {
                            return Err(ParseError::new(ParseErrorCode::UnsupportedEscape, esc))
                        }
                        Some(_) => {
                            return Err(ParseError::new(ParseErrorCode::InvalidEscape, esc))
                        }
                    }
                }
            }
        }
    }
}

/// Resolve a raw string token (quotes included) into owned text.
///
/// The lexer has already validated every escape, so this never fails on
/// tokens it produced.
pub fn unescape(raw: &str) -> String {
    let inner = &raw[1..raw.len() - 1];
    let bytes = inner.as_bytes();
    let mut out = String::with_capacity(inner.len());
    let mut pos = 0;
    while pos < bytes.len() {
        match memchr::memchr(b'\\', &bytes[pos..]) {
            None => {
                out.push_str(&inner[pos..]);
                break;
            }
            Some(i) => {
                out.push_str(&inner[pos..pos + i]);
                let esc = bytes[pos + i + 1];
                out.push(match esc {
                    b'"' => '"',
                    b'\\' => '\\',
                    b'/' => '/',
                    b'b' => '\u{0008}',
                    b'f' => '\u{000C}',
                    b'n' => '\n',
                    b'r' => '\r',
                    b't' => '\t',
                    other => {
                        debug_assert!(false, "unvalidated escape \\{}", other as char);
                        other as char
                    }
                });
                pos += i + 2;
            }
        }
    }
    out
}
