//! Path-expression queries over a value tree.
//!
//! A path is a chain of steps with no separator: `.name` descends into an
//! object member (ASCII identifier: `[A-Za-z_][A-Za-z0-9_]*`), `[i]`
//! indexes an array. `.a.b[2].c` reads member `a`, member `b`, element 2,
//! member `c`.
//!
//! [`Value::get_path`] is the primary surface and reports failures as
//! [`PathError`] values, since path strings are often supplied from
//! outside. [`Value::path`] panics on the same failures, for paths the
//! caller knows are good.

use crate::value::Value;

/// Why a path lookup failed. Each variant carries the byte offset of the
/// step that failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// The path text itself is malformed.
    Syntax { offset: usize },
    /// A `.name` step hit a value that is not an object.
    NotAnObject { offset: usize },
    /// An `[i]` step hit a value that is not an array.
    NotAnArray { offset: usize },
    /// The object has no member with this name.
    MissingMember { name: String, offset: usize },
    /// The index is past the end of the array.
    IndexOutOfBounds { index: usize, len: usize, offset: usize },
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::Syntax { offset } => write!(f, "path syntax error at byte {offset}"),
            PathError::NotAnObject { offset } => {
                write!(f, "member access on a non-object at byte {offset}")
            }
            PathError::NotAnArray { offset } => {
                write!(f, "index access on a non-array at byte {offset}")
            }
            PathError::MissingMember { name, offset } => {
                write!(f, "no member {name:?} at byte {offset}")
            }
            PathError::IndexOutOfBounds { index, len, offset } => {
                write!(f, "index {index} out of range (len {len}) at byte {offset}")
            }
        }
    }
}

impl std::error::Error for PathError {}

impl Value {
    /// Evaluate a path expression against this tree, borrowing the
    /// selected element.
    ///
    /// The empty path is a syntax error; so is any path whose first byte
    /// is not `.` or `[`.
    pub fn get_path(&self, path: &str) -> Result<&Value, PathError> {
        let bytes = path.as_bytes();
        let mut current = self;
        let mut pos = 0;
        if bytes.is_empty() {
            return Err(PathError::Syntax { offset: 0 });
        }
        while pos < bytes.len() {
            match bytes[pos] {
                b'.' => {
                    let (name, end) = scan_identifier(path, pos + 1)?;
                    let map = current
                        .get_object()
                        .ok_or(PathError::NotAnObject { offset: pos })?;
                    current = map.get(name).ok_or_else(|| PathError::MissingMember {
                        name: name.to_owned(),
                        offset: pos,
                    })?;
                    pos = end;
                }
                b'[' => {
                    let (index, end) = scan_index(bytes, pos + 1)?;
                    let array = current
                        .get_array()
                        .ok_or(PathError::NotAnArray { offset: pos })?;
                    current = array.get(index).ok_or(PathError::IndexOutOfBounds {
                        index,
                        len: array.len(),
                        offset: pos,
                    })?;
                    pos = end;
                }
                _ => return Err(PathError::Syntax { offset: pos }),
            }
        }
        Ok(current)
    }

    /// Fail-fast variant of [`Value::get_path`].
    ///
    /// # Panics
    ///
    /// Panics with the [`PathError`] message if the lookup fails. Only use
    /// this with paths under the caller's control.
    pub fn path(&self, path: &str) -> &Value {
        match self.get_path(path) {
            Ok(value) => value,
            Err(err) => panic!("path {path:?}: {err}"),
        }
    }
}

/// Scan `[A-Za-z_][A-Za-z0-9_]*` starting at `start`; returns the
/// identifier and the offset just past it.
fn scan_identifier(path: &str, start: usize) -> Result<(&str, usize), PathError> {
    let bytes = path.as_bytes();
    match bytes.get(start) {
        Some(b) if b.is_ascii_alphabetic() || *b == b'_' => {}
        _ => return Err(PathError::Syntax { offset: start }),
    }
    let mut end = start + 1;
    while end < bytes.len() && (bytes[end].is_ascii_alphanumeric() || bytes[end] == b'_') {
        end += 1;
    }
    Ok((&path[start..end], end))
}

/// Scan `<digits>]` starting at `start`; returns the index and the offset
/// just past the closing bracket.
fn scan_index(bytes: &[u8], start: usize) -> Result<(usize, usize), PathError> {
    let mut end = start;
    let mut index: usize = 0;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        index = index
            .checked_mul(10)
            .and_then(|i| i.checked_add((bytes[end] - b'0') as usize))
            .ok_or(PathError::Syntax { offset: start })?;
        end += 1;
    }
    if end == start || bytes.get(end) != Some(&b']') {
        return Err(PathError::Syntax { offset: end });
    }
    Ok((index, end + 1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    fn sample() -> Value {
        parse(r#"{"test": {"test2": [1, 2, {"test3": 4, "test4": 5}]}, "x_1": true}"#).unwrap()
    }

    #[test]
    fn test_member_step() {
        let root = parse(r#"{"test": 1, "test2": 3}"#).unwrap();
        assert_eq!(root.get_path(".test"), Ok(&Value::Integer(1)));
        assert_eq!(root.get_path(".test2"), Ok(&Value::Integer(3)));
    }

    #[test]
    fn test_nested_path() {
        let root = sample();
        assert_eq!(root.get_path(".test.test2[2].test3"), Ok(&Value::Integer(4)));
        assert_eq!(root.get_path(".test.test2[0]"), Ok(&Value::Integer(1)));
        assert_eq!(root.get_path(".x_1"), Ok(&Value::Bool(true)));
    }

    #[test]
    fn test_path_borrows_subtrees() {
        let root = sample();
        let arr = root.get_path(".test.test2").unwrap();
        assert!(arr.is_array());
        assert_eq!(arr.as_array().len(), 3);
    }

    #[test]
    fn test_syntax_errors() {
        let root = sample();
        assert_eq!(root.get_path(""), Err(PathError::Syntax { offset: 0 }));
        assert_eq!(root.get_path("test"), Err(PathError::Syntax { offset: 0 }));
        assert_eq!(root.get_path(".9bad"), Err(PathError::Syntax { offset: 1 }));
        assert_eq!(
            root.get_path(".test.test2[x]"),
            Err(PathError::Syntax { offset: 12 })
        );
        assert_eq!(
            root.get_path(".test.test2[1"),
            Err(PathError::Syntax { offset: 13 })
        );
    }

    #[test]
    fn test_missing_member() {
        let root = sample();
        assert_eq!(
            root.get_path(".nope"),
            Err(PathError::MissingMember {
                name: "nope".to_owned(),
                offset: 0,
            })
        );
    }

    #[test]
    fn test_index_out_of_bounds() {
        let root = sample();
        assert_eq!(
            root.get_path(".test.test2[9]"),
            Err(PathError::IndexOutOfBounds {
                index: 9,
                len: 3,
                offset: 11,
            })
        );
    }

    #[test]
    fn test_kind_mismatch() {
        let root = sample();
        assert_eq!(
            root.get_path(".x_1.anything"),
            Err(PathError::NotAnObject { offset: 4 })
        );
        assert_eq!(
            root.get_path(".test[0]"),
            Err(PathError::NotAnArray { offset: 5 })
        );
    }

    #[test]
    fn test_path_panicking_variant() {
        let root = sample();
        assert_eq!(root.path(".test.test2[2].test4"), &Value::Integer(5));
    }

    #[test]
    #[should_panic(expected = "no member")]
    fn test_path_panics_on_missing_member() {
        sample().path(".absent");
    }
}
