//! The JSON value tree.
//!
//! A `Value` is one node of the tree: a scalar, an array, or an object.
//! Every node is owned by its parent container (or by the caller at the
//! root), so the tree is acyclic and alias-free by construction, releasing
//! happens exactly once when the root is dropped, and `clone` always
//! produces a disjoint tree.
//!
//! Each variant has an infallible `is_*` predicate, a panicking `as_*`
//! accessor for trusted trees, and an `Option`-returning `get_*` accessor
//! for everything else.

use crate::array::Array;
use crate::map::ObjectMap;

/// A JSON value.
///
/// Object member equality is order-insensitive (see [`ObjectMap`]); array
/// and scalar equality is exact.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Integer(i32),
    Float(f64),
    String(String),
    Array(Array),
    Object(ObjectMap),
}

impl Value {
    /// Create a string value, copying the input text.
    pub fn string(text: &str) -> Value {
        Value::String(text.to_owned())
    }

    /// Create an empty array value.
    pub fn array() -> Value {
        Value::Array(Array::new())
    }

    /// Create an empty object value with `capacity` hash buckets.
    pub fn object(capacity: usize) -> Value {
        Value::Object(ObjectMap::new(capacity))
    }

    fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Integer(_) => "integer",
            Value::Float(_) => "float",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
    }

    // ---- Predicates ----

    /// Check if this is the null value.
    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Check if this is a boolean.
    #[inline]
    pub fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    /// Check if this is an integer.
    #[inline]
    pub fn is_integer(&self) -> bool {
        matches!(self, Value::Integer(_))
    }

    /// Check if this is a float.
    #[inline]
    pub fn is_float(&self) -> bool {
        matches!(self, Value::Float(_))
    }

    /// Check if this is a string.
    #[inline]
    pub fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    /// Check if this is an array.
    #[inline]
    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    /// Check if this is an object.
    #[inline]
    pub fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    // ---- Non-panicking accessors ----

    /// Try to get as boolean.
    #[inline]
    pub fn get_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to get as integer.
    #[inline]
    pub fn get_integer(&self) -> Option<i32> {
        match self {
            Value::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Try to get as float.
    #[inline]
    pub fn get_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Try to get as string slice.
    #[inline]
    pub fn get_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Try to borrow as array.
    #[inline]
    pub fn get_array(&self) -> Option<&Array> {
        match self {
            Value::Array(a) => Some(a),
            _ => None,
        }
    }

    /// Try to borrow as array, mutably.
    #[inline]
    pub fn get_array_mut(&mut self) -> Option<&mut Array> {
        match self {
            Value::Array(a) => Some(a),
            _ => None,
        }
    }

    /// Try to borrow as object.
    #[inline]
    pub fn get_object(&self) -> Option<&ObjectMap> {
        match self {
            Value::Object(o) => Some(o),
            _ => None,
        }
    }

    /// Try to borrow as object, mutably.
    #[inline]
    pub fn get_object_mut(&mut self) -> Option<&mut ObjectMap> {
        match self {
            Value::Object(o) => Some(o),
            _ => None,
        }
    }

    // ---- Panicking accessors ----
    //
    // These preserve the fail-fast contract for trees whose shape the
    // caller controls. Use the `get_*` variants on anything untrusted.

    /// Get the boolean payload. Panics if this is not a boolean.
    #[inline]
    pub fn as_bool(&self) -> bool {
        match self {
            Value::Bool(b) => *b,
            other => panic!("expected bool, found {}", other.kind()),
        }
    }

    /// Get the integer payload. Panics if this is not an integer.
    #[inline]
    pub fn as_integer(&self) -> i32 {
        match self {
            Value::Integer(i) => *i,
            other => panic!("expected integer, found {}", other.kind()),
        }
    }

    /// Get the float payload. Panics if this is not a float.
    #[inline]
    pub fn as_float(&self) -> f64 {
        match self {
            Value::Float(f) => *f,
            other => panic!("expected float, found {}", other.kind()),
        }
    }

    /// Get the string payload. Panics if this is not a string.
    #[inline]
    pub fn as_str(&self) -> &str {
        match self {
            Value::String(s) => s,
            other => panic!("expected string, found {}", other.kind()),
        }
    }

    /// Borrow the array payload. Panics if this is not an array.
    #[inline]
    pub fn as_array(&self) -> &Array {
        match self {
            Value::Array(a) => a,
            other => panic!("expected array, found {}", other.kind()),
        }
    }

    /// Mutably borrow the array payload. Panics if this is not an array.
    #[inline]
    pub fn as_array_mut(&mut self) -> &mut Array {
        match self {
            Value::Array(a) => a,
            other => panic!("expected array, found {}", other.kind()),
        }
    }

    /// Borrow the object payload. Panics if this is not an object.
    #[inline]
    pub fn as_object(&self) -> &ObjectMap {
        match self {
            Value::Object(o) => o,
            other => panic!("expected object, found {}", other.kind()),
        }
    }

    /// Mutably borrow the object payload. Panics if this is not an object.
    #[inline]
    pub fn as_object_mut(&mut self) -> &mut ObjectMap {
        match self {
            Value::Object(o) => o,
            other => panic!("expected object, found {}", other.kind()),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Value {
        Value::Bool(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Value {
        Value::Integer(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Value {
        Value::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Value {
        Value::String(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Value {
        Value::String(value)
    }
}
