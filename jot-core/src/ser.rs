//! Serialization of a value tree back to JSON text.
//!
//! One recursive walker drives both entry points: [`to_text`] collects into
//! an owned `String`, [`write`] streams into an `io::Write` sink. Nesting
//! depth is an explicit parameter of the recursion, never shared state, so
//! concurrent calls on independent trees are safe.
//!
//! Output contract:
//! - compact mode emits no whitespace at all; members render as
//!   `"name":value`;
//! - pretty mode emits a newline plus `2 * depth` spaces after every
//!   opening brace/bracket and comma and before every closing one, for
//!   empty containers too;
//! - integers in decimal, floats with six fractional digits;
//! - strings are quoted **verbatim**: quotes, backslashes, and control
//!   bytes in string payloads are not re-escaped, so such output is not
//!   re-parseable. Round-trip guarantees apply only to strings without
//!   those bytes;
//! - object members follow map iteration order, not insertion order.

use std::fmt::{self, Write as _};
use std::io;

use crate::value::Value;

/// Serialize a tree to an owned string.
pub fn to_text(value: &Value, pretty: bool) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_value(&mut out, value, pretty, 0);
    out
}

/// Serialize a tree directly into an output sink.
pub fn write<W: io::Write>(value: &Value, pretty: bool, sink: W) -> io::Result<()> {
    let mut sink = IoAdapter { sink, error: None };
    match write_value(&mut sink, value, pretty, 0) {
        Ok(()) => Ok(()),
        Err(fmt::Error) => Err(sink
            .error
            .unwrap_or_else(|| io::Error::other("formatter error"))),
    }
}

/// Routes `fmt::Write` output into an `io::Write` sink, keeping the first
/// io error so `write` can return it with its detail intact.
struct IoAdapter<W: io::Write> {
    sink: W,
    error: Option<io::Error>,
}

impl<W: io::Write> fmt::Write for IoAdapter<W> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.sink.write_all(s.as_bytes()).map_err(|err| {
            self.error = Some(err);
            fmt::Error
        })
    }
}

fn write_value<W: fmt::Write>(
    out: &mut W,
    value: &Value,
    pretty: bool,
    depth: usize,
) -> fmt::Result {
    match value {
        Value::Null => out.write_str("null"),
        Value::Bool(true) => out.write_str("true"),
        Value::Bool(false) => out.write_str("false"),
        Value::Integer(v) => write!(out, "{v}"),
        Value::Float(v) => write!(out, "{v:.6}"),
        Value::String(s) => {
            out.write_char('"')?;
            out.write_str(s)?;
            out.write_char('"')
        }
        Value::Array(array) => {
            out.write_char('[')?;
            break_line(out, pretty, depth + 1)?;
            let mut first = true;
            for item in array {
                if !first {
                    out.write_char(',')?;
                    break_line(out, pretty, depth + 1)?;
                }
                first = false;
                write_value(out, item, pretty, depth + 1)?;
            }
            break_line(out, pretty, depth)?;
            out.write_char(']')
        }
        Value::Object(map) => {
            out.write_char('{')?;
            break_line(out, pretty, depth + 1)?;
            let mut first = true;
            for (name, member) in map {
                if !first {
                    out.write_char(',')?;
                    break_line(out, pretty, depth + 1)?;
                }
                first = false;
                out.write_char('"')?;
                out.write_str(name)?;
                out.write_str("\":")?;
                write_value(out, member, pretty, depth + 1)?;
            }
            break_line(out, pretty, depth)?;
            out.write_char('}')
        }
    }
}

/// In pretty mode, a newline followed by two spaces per nesting level.
fn break_line<W: fmt::Write>(out: &mut W, pretty: bool, depth: usize) -> fmt::Result {
    if pretty {
        out.write_char('\n')?;
        for _ in 0..depth * 2 {
            out.write_char(' ')?;
        }
    }
    Ok(())
}
