//! Chained hash table backing `Value::Object`.
//!
//! The bucket array has a fixed capacity chosen at creation and is never
//! resized; collisions go into singly linked per-bucket chains. New members
//! are pushed at the chain head, so iteration runs bucket by bucket and
//! newest-first within a bucket.
//!
//! **Iteration order is not insertion order.** This is a contract, not an
//! accident: serialization and round-trip comparisons must treat object
//! members as an unordered set.

use crate::value::Value;

/// Default bucket count for parser-built objects.
pub const DEFAULT_CAPACITY: usize = 64;

#[derive(Debug)]
struct Entry {
    name: String,
    value: Value,
    next: Option<Box<Entry>>,
}

/// A fixed-capacity map from member names to values.
///
/// Member names are unique; inserting a duplicate replaces the value and
/// hands the old one back. Values are owned by the map.
pub struct ObjectMap {
    buckets: Box<[Option<Box<Entry>>]>,
    len: usize,
}

impl ObjectMap {
    /// Create a map with `capacity` buckets. More buckets mean fewer
    /// collision chains; the count is fixed for the life of the map.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "ObjectMap capacity must be nonzero");
        let mut buckets = Vec::with_capacity(capacity);
        buckets.resize_with(capacity, || None);
        ObjectMap {
            buckets: buckets.into_boxed_slice(),
            len: 0,
        }
    }

    /// Number of buckets.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Number of members.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if the map has no members.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Insert a member, taking ownership of `value`.
    ///
    /// If `name` is already present the old value is replaced and returned
    /// (the stored name is kept); otherwise the new entry goes to the head
    /// of its bucket chain and `None` is returned.
    pub fn insert(&mut self, name: &str, value: Value) -> Option<Value> {
        let idx = self.bucket_index(name);
        let mut cursor = self.buckets[idx].as_deref_mut();
        while let Some(entry) = cursor {
            if entry.name == name {
                return Some(std::mem::replace(&mut entry.value, value));
            }
            cursor = entry.next.as_deref_mut();
        }
        let head = self.buckets[idx].take();
        self.buckets[idx] = Some(Box::new(Entry {
            name: name.to_owned(),
            value,
            next: head,
        }));
        self.len += 1;
        None
    }

    /// Borrow the value stored under `name`.
    pub fn get(&self, name: &str) -> Option<&Value> {
        let idx = self.bucket_index(name);
        let mut cursor = self.buckets[idx].as_deref();
        while let Some(entry) = cursor {
            if entry.name == name {
                return Some(&entry.value);
            }
            cursor = entry.next.as_deref();
        }
        None
    }

    /// Mutably borrow the value stored under `name`.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Value> {
        let idx = self.bucket_index(name);
        let mut cursor = self.buckets[idx].as_deref_mut();
        while let Some(entry) = cursor {
            if entry.name == name {
                return Some(&mut entry.value);
            }
            cursor = entry.next.as_deref_mut();
        }
        None
    }

    /// Check whether `name` is present.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Remove the member stored under `name`, returning its value.
    pub fn remove(&mut self, name: &str) -> Option<Value> {
        let idx = self.bucket_index(name);
        let mut link = &mut self.buckets[idx];
        loop {
            match link.take() {
                None => return None,
                Some(mut entry) => {
                    if entry.name == name {
                        *link = entry.next.take();
                        self.len -= 1;
                        return Some(entry.value);
                    }
                    *link = Some(entry);
                    match link {
                        Some(entry) => link = &mut entry.next,
                        None => unreachable!(),
                    }
                }
            }
        }
    }

    /// Iterate over `(name, value)` pairs in bucket order, newest-first
    /// within a bucket. The order is unrelated to insertion order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            buckets: self.buckets.iter(),
            chain: None,
        }
    }

    /// Polynomial hash: `h = h * 8 + byte`, wrapping, reduced mod the
    /// bucket count.
    fn bucket_index(&self, name: &str) -> usize {
        let mut h = 0usize;
        for &b in name.as_bytes() {
            h = (h << 3).wrapping_add(b as usize);
        }
        h % self.buckets.len()
    }
}

impl Clone for ObjectMap {
    /// Deep copy: a fresh map with the same bucket count, rebuilt by
    /// re-inserting every member. Chain layout may differ from the source.
    fn clone(&self) -> Self {
        let mut map = ObjectMap::new(self.capacity());
        for (name, value) in self.iter() {
            map.insert(name, value.clone());
        }
        map
    }
}

impl Drop for ObjectMap {
    /// Unlink each chain iteratively so a long collision chain cannot
    /// recurse through nested `Box` drops.
    fn drop(&mut self) {
        for slot in self.buckets.iter_mut() {
            let mut next = slot.take();
            while let Some(mut entry) = next {
                next = entry.next.take();
            }
        }
    }
}

/// Member equality as a set: same size and every member of `self` present
/// in `other` with an equal value. Order never participates.
impl PartialEq for ObjectMap {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().all(|(name, value)| other.get(name) == Some(value))
    }
}

impl std::fmt::Debug for ObjectMap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

/// Borrowing iterator over an object's members.
pub struct Iter<'a> {
    buckets: std::slice::Iter<'a, Option<Box<Entry>>>,
    chain: Option<&'a Entry>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a Value);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(entry) = self.chain {
                self.chain = entry.next.as_deref();
                return Some((entry.name.as_str(), &entry.value));
            }
            match self.buckets.next() {
                Some(slot) => self.chain = slot.as_deref(),
                None => return None,
            }
        }
    }
}

impl<'a> IntoIterator for &'a ObjectMap {
    type Item = (&'a str, &'a Value);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
