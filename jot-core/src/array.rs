//! Growable array container backing `Value::Array`.
//!
//! Storage management is explicit: an empty array owns no allocation, the
//! first insertion reserves room for 8 elements, and every overflow doubles
//! the capacity. Inserting at an interior index shifts the tail one slot
//! toward the end.

use crate::value::Value;

/// An owned, ordered sequence of values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Array {
    items: Vec<Value>,
}

impl Array {
    /// Create an empty array. No storage is allocated until the first
    /// insertion.
    pub fn new() -> Self {
        Array { items: Vec::new() }
    }

    /// Number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the array is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Allocated capacity in elements.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    /// Append a value at the end, taking ownership of it.
    pub fn append(&mut self, value: Value) {
        self.maybe_grow();
        self.items.push(value);
    }

    /// Insert a value at `index`, shifting later elements one slot toward
    /// the end. An index at or beyond the current length appends.
    pub fn insert(&mut self, value: Value, index: usize) {
        self.maybe_grow();
        let index = index.min(self.items.len());
        self.items.insert(index, value);
    }

    /// Borrow the element at `index`.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.items.get(index)
    }

    /// Mutably borrow the element at `index`.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Value> {
        self.items.get_mut(index)
    }

    /// Iterate over the elements in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.items.iter()
    }

    /// First allocation reserves 8 slots, overflow doubles.
    fn maybe_grow(&mut self) {
        let cap = self.items.capacity();
        if cap == 0 {
            self.items.reserve_exact(8);
        } else if self.items.len() == cap {
            self.items.reserve_exact(cap);
        }
    }
}

impl std::ops::Index<usize> for Array {
    type Output = Value;

    fn index(&self, index: usize) -> &Value {
        &self.items[index]
    }
}

impl<'a> IntoIterator for &'a Array {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<Value> for Array {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        let mut array = Array::new();
        for value in iter {
            array.append(value);
        }
        array
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_growth_policy() {
        let mut arr = Array::new();
        assert_eq!(arr.capacity(), 0);

        arr.append(Value::Integer(1));
        assert_eq!(arr.capacity(), 8);

        for i in 2..=8 {
            arr.append(Value::Integer(i));
        }
        assert_eq!(arr.capacity(), 8);

        arr.append(Value::Integer(9));
        assert_eq!(arr.capacity(), 16);
    }

    #[test]
    fn test_append_preserves_order() {
        let mut arr = Array::new();
        arr.append(Value::Integer(1));
        arr.append(Value::Integer(2));
        arr.append(Value::Integer(3));

        let got: Vec<_> = arr.iter().collect();
        assert_eq!(got, [&Value::Integer(1), &Value::Integer(2), &Value::Integer(3)]);
    }

    #[test]
    fn test_insert_shifts_and_clamps() {
        // append 1,2,3 then insert (-1 @ 0), (0 @ 1), (5 @ 5), (4 @ 5)
        // -> [-1, 0, 1, 2, 3, 4, 5]
        let mut arr = Array::new();
        arr.append(Value::Integer(1));
        arr.append(Value::Integer(2));
        arr.append(Value::Integer(3));
        arr.insert(Value::Integer(-1), 0);
        arr.insert(Value::Integer(0), 1);
        arr.insert(Value::Integer(5), 5);
        arr.insert(Value::Integer(4), 5);

        let got: Vec<i32> = arr.iter().map(|v| v.as_integer()).collect();
        assert_eq!(got, [-1, 0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_insert_beyond_len_appends() {
        let mut arr = Array::new();
        arr.insert(Value::Integer(1), 100);
        assert_eq!(arr.len(), 1);
        assert_eq!(arr[0], Value::Integer(1));
    }

    #[test]
    fn test_get_out_of_range() {
        let arr = Array::new();
        assert!(arr.get(0).is_none());
    }
}
