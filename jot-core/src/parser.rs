//! Recursive-descent parser from JSON text to a [`Value`] tree.
//!
//! Grammar:
//!
//! ```text
//! element := ws value ws
//! value   := object | array | string | number | true | false | null
//! object  := '{' ws (member (',' member)*)? ws '}'
//! member  := string ':' element
//! array   := '[' ws (element (',' element)*)? ws ']'
//! ```
//!
//! Errors propagate through `Result`, so any partially built subtree is
//! dropped on the failure path and nothing leaks. The whole input must be
//! one element; bytes after it are rejected.

use crate::array::Array;
use crate::lexer::{unescape, Lexer, ParseError, ParseErrorCode, Token};
use crate::map::{ObjectMap, DEFAULT_CAPACITY};
use crate::value::Value;

/// Parse JSON text into a value tree.
///
/// Recursion depth equals the document's nesting depth; bound the depth
/// externally before parsing untrusted input.
pub fn parse(input: &str) -> Result<Value, ParseError> {
    let mut lexer = Lexer::new(input);
    let value = parse_element(&mut lexer)?;
    match lexer.pop()? {
        Token::Eof => Ok(value),
        _ => Err(ParseError::new(
            ParseErrorCode::TrailingInput,
            lexer.token_offset(),
        )),
    }
}

fn parse_element(lexer: &mut Lexer<'_>) -> Result<Value, ParseError> {
    // Surrounding whitespace is consumed by the lexer itself.
    parse_value(lexer)
}

fn parse_value(lexer: &mut Lexer<'_>) -> Result<Value, ParseError> {
    match lexer.peek()? {
        Token::LBrace => parse_object(lexer),
        Token::LBrack => parse_array(lexer),
        Token::Str(raw) => {
            lexer.pop()?;
            Ok(Value::String(unescape(raw)))
        }
        Token::Integer(value) => {
            lexer.pop()?;
            Ok(Value::Integer(value))
        }
        Token::Float(value) => {
            lexer.pop()?;
            Ok(Value::Float(value))
        }
        Token::True => {
            lexer.pop()?;
            Ok(Value::Bool(true))
        }
        Token::False => {
            lexer.pop()?;
            Ok(Value::Bool(false))
        }
        Token::Null => {
            lexer.pop()?;
            Ok(Value::Null)
        }
        Token::Eof | Token::RBrace | Token::RBrack | Token::Colon | Token::Comma => {
            Err(unexpected(lexer))
        }
    }
}

fn parse_object(lexer: &mut Lexer<'_>) -> Result<Value, ParseError> {
    lexer.pop()?; // '{'
    let mut map = ObjectMap::new(DEFAULT_CAPACITY);
    if lexer.peek()? != Token::RBrace {
        parse_member(lexer, &mut map)?;
        while lexer.peek()? == Token::Comma {
            lexer.pop()?;
            parse_member(lexer, &mut map)?;
        }
    }
    expect(lexer, Token::RBrace)?;
    Ok(Value::Object(map))
}

fn parse_member(lexer: &mut Lexer<'_>, map: &mut ObjectMap) -> Result<(), ParseError> {
    let raw = match lexer.pop()? {
        Token::Str(raw) => raw,
        _ => return Err(unexpected(lexer)),
    };
    let name = unescape(raw);
    expect(lexer, Token::Colon)?;
    let value = parse_element(lexer)?;
    // A duplicate name replaces the earlier value; the displaced value is
    // dropped here.
    map.insert(&name, value);
    Ok(())
}

fn parse_array(lexer: &mut Lexer<'_>) -> Result<Value, ParseError> {
    lexer.pop()?; // '['
    let mut array = Array::new();
    if lexer.peek()? != Token::RBrack {
        array.append(parse_element(lexer)?);
        while lexer.peek()? == Token::Comma {
            lexer.pop()?;
            array.append(parse_element(lexer)?);
        }
    }
    expect(lexer, Token::RBrack)?;
    Ok(Value::Array(array))
}

fn expect(lexer: &mut Lexer<'_>, want: Token<'static>) -> Result<(), ParseError> {
    if lexer.pop()? == want {
        Ok(())
    } else {
        Err(unexpected(lexer))
    }
}

fn unexpected(lexer: &Lexer<'_>) -> ParseError {
    ParseError::new(ParseErrorCode::UnexpectedToken, lexer.token_offset())
}
