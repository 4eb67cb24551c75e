//! Path-addressed access to a nested map document.
//!
//! `NestedMap` owns a document whose root is a string-keyed map and
//! resolves slash-delimited paths against it: reads walk the tree,
//! writes replace or graft branches, deletes remove map entries. All
//! mutation happens in place; sequences are indexed but never resized.

use indexmap::map::Entry;

use crate::document::value::{Map, Value};
use crate::error::Error;
use crate::path::{split, Segment, SegmentIter};

/// A document accessor addressed by paths such as `/servers[0]/host`.
///
/// Construction fails unless the root value is a map, and nothing the
/// accessor does can change the root's shape afterwards.
///
/// # Example
///
/// ```
/// use nestmap::{NestedMap, Value};
///
/// let doc = nestmap::codec::from_json_str(r#"{"a": 1, "b": {"d": 4}}"#).unwrap();
/// let mut map = NestedMap::new(doc).unwrap();
///
/// assert_eq!(map.get("/b/d").unwrap(), &Value::from(4));
///
/// map.set("/b/e", "E").unwrap();
/// assert_eq!(map.get("/b/e").unwrap(), &Value::from("E"));
///
/// map.delete("/a");
/// assert!(map.get("/a").is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct NestedMap {
    root: Value,
}

impl NestedMap {
    /// Wraps a document in an accessor.
    ///
    /// Fails unless `root` is a map; every other shape would make the
    /// top-level keys unaddressable.
    pub fn new(root: Value) -> Result<Self, Error> {
        if root.is_map() {
            Ok(Self { root })
        } else {
            Err(Error::InvalidRoot {
                found: root.type_name().to_string(),
            })
        }
    }

    /// The whole document.
    pub fn root(&self) -> &Value {
        &self.root
    }

    /// Consumes the accessor and returns the document.
    pub fn into_value(self) -> Value {
        self.root
    }

    /// Resolves a path and returns the value it addresses.
    ///
    /// The root path `/` returns the whole document. Each segment looks
    /// up a map key and then, if the segment carries an index, descends
    /// into the addressed sequence element. Resolution never mutates
    /// the document.
    ///
    /// # Errors
    ///
    /// - [`Error::NotFound`] if a named key does not exist
    /// - [`Error::OutOfRange`] if an index is past the end of a sequence
    /// - [`Error::TypeMismatch`] if a segment needs a map or a sequence
    ///   and the node has some other shape
    /// - [`Error::Syntax`] if the path itself is malformed
    pub fn get(&self, path: &str) -> Result<&Value, Error> {
        let segments = split(path);
        if segments.is_empty() {
            return Ok(&self.root);
        }

        let mut iter = SegmentIter::new(&segments);
        let mut current = &self.root;
        loop {
            let segment = Segment::parse(iter.value()?)?;
            let map = match current {
                Value::Map(map) => map,
                other => {
                    return Err(Error::TypeMismatch {
                        expected: "map".to_string(),
                        found: other.type_name().to_string(),
                        key: segment.key.clone(),
                    })
                }
            };
            let slot = map.get(segment.key.as_str()).ok_or_else(|| Error::NotFound {
                key: segment.key.clone(),
            })?;
            current = match segment.index {
                None => slot,
                Some(index) => match slot {
                    Value::Sequence(seq) => seq.get(index).ok_or(Error::OutOfRange {
                        index,
                        len: seq.len(),
                    })?,
                    other => {
                        return Err(Error::TypeMismatch {
                            expected: "sequence".to_string(),
                            found: other.type_name().to_string(),
                            key: segment.key.clone(),
                        })
                    }
                },
            };
            if !iter.has_next() {
                return Ok(current);
            }
            iter.advance();
        }
    }

    /// Assigns a value at a path, replacing whatever was there.
    ///
    /// Intermediate map keys that are missing, or that hold something
    /// other than a map, are spliced over with a freshly built branch
    /// covering the rest of the path, so setting `/h/i/j/k` on an empty
    /// document creates `h = {i: {j: {k: value}}}` in one step. Only
    /// maps are fabricated this way; an index segment always requires
    /// the sequence and the addressed element to exist already.
    ///
    /// Setting the root path `/` replaces the whole document and
    /// requires the value to be a map.
    ///
    /// A failed set leaves the document untouched.
    ///
    /// # Example
    ///
    /// ```
    /// use nestmap::{NestedMap, Value};
    ///
    /// let mut map = NestedMap::default();
    /// map.set("/h/i/j", 7).unwrap();
    /// assert_eq!(map.get("/h/i/j").unwrap(), &Value::from(7));
    /// ```
    pub fn set(&mut self, path: &str, value: impl Into<Value>) -> Result<(), Error> {
        let value = value.into();
        let segments = split(path);
        if segments.is_empty() {
            if !value.is_map() {
                return Err(Error::TypeMismatch {
                    expected: "map".to_string(),
                    found: value.type_name().to_string(),
                    key: "/".to_string(),
                });
            }
            self.root = value;
            return Ok(());
        }

        let mut iter = SegmentIter::new(&segments);
        let mut current = &mut self.root;
        loop {
            let segment = Segment::parse(iter.value()?)?;
            let last = !iter.has_next();

            let map = match current {
                Value::Map(map) => map,
                other => {
                    return Err(Error::TypeMismatch {
                        expected: "map".to_string(),
                        found: other.type_name().to_string(),
                        key: segment.key.clone(),
                    })
                }
            };

            if last {
                return match segment.index {
                    None => {
                        // Insert or replace; an existing key keeps its
                        // position in the map.
                        map.insert(segment.key, value);
                        Ok(())
                    }
                    Some(index) => {
                        let element = indexed_element(map, &segment.key, index)?;
                        *element = value;
                        Ok(())
                    }
                };
            }

            match segment.index {
                None => match map.entry(segment.key) {
                    Entry::Occupied(slot) if slot.get().is_map() => {
                        current = slot.into_mut();
                    }
                    slot => {
                        // The path dead-ends here; graft a branch built
                        // from the remaining keys and stop descending.
                        let keys = branch_keys(&segments[iter.position() + 1..])?;
                        let branch = Value::Map(make_map(&keys, value));
                        match slot {
                            Entry::Occupied(mut slot) => {
                                slot.insert(branch);
                            }
                            Entry::Vacant(slot) => {
                                slot.insert(branch);
                            }
                        }
                        return Ok(());
                    }
                },
                Some(index) => {
                    current = indexed_element(map, &segment.key, index)?;
                }
            }
            iter.advance();
        }
    }

    /// Removes the map entry a path addresses.
    ///
    /// Deletion is best-effort and never fails: absent keys, malformed
    /// paths, and paths that dead-end in the wrong shape are all silent
    /// no-ops. Only map entries are removed; a final segment carrying
    /// an index is a no-op too, since dropping a sequence element would
    /// resize the sequence.
    ///
    /// # Example
    ///
    /// ```
    /// use nestmap::NestedMap;
    ///
    /// let doc = nestmap::codec::from_json_str(r#"{"a": 1, "b": 2}"#).unwrap();
    /// let mut map = NestedMap::new(doc).unwrap();
    ///
    /// map.delete("/a");
    /// map.delete("/missing");
    /// assert!(map.get("/a").is_err());
    /// assert!(map.get("/b").is_ok());
    /// ```
    pub fn delete(&mut self, path: &str) {
        let _ = self.try_delete(path);
    }

    fn try_delete(&mut self, path: &str) -> Result<(), Error> {
        let segments = split(path);
        if segments.is_empty() {
            return Ok(());
        }

        let mut iter = SegmentIter::new(&segments);
        let mut current = &mut self.root;
        loop {
            let segment = Segment::parse(iter.value()?)?;
            let map = match current {
                Value::Map(map) => map,
                other => {
                    return Err(Error::TypeMismatch {
                        expected: "map".to_string(),
                        found: other.type_name().to_string(),
                        key: segment.key.clone(),
                    })
                }
            };

            if !iter.has_next() {
                if segment.index.is_none() {
                    map.shift_remove(segment.key.as_str());
                }
                return Ok(());
            }

            let slot = map.get_mut(segment.key.as_str()).ok_or_else(|| Error::NotFound {
                key: segment.key.clone(),
            })?;
            current = match segment.index {
                None => slot,
                Some(index) => match slot {
                    Value::Sequence(seq) => {
                        let len = seq.len();
                        seq.get_mut(index)
                            .ok_or(Error::OutOfRange { index, len })?
                    }
                    other => {
                        return Err(Error::TypeMismatch {
                            expected: "sequence".to_string(),
                            found: other.type_name().to_string(),
                            key: segment.key.clone(),
                        })
                    }
                },
            };
            iter.advance();
        }
    }
}

impl Default for NestedMap {
    /// An accessor over an empty document.
    fn default() -> Self {
        Self {
            root: Value::Map(Map::new()),
        }
    }
}

/// Resolves `key[index]` to a mutable sequence element.
fn indexed_element<'a>(
    map: &'a mut Map,
    key: &str,
    index: usize,
) -> Result<&'a mut Value, Error> {
    let slot = map.get_mut(key).ok_or_else(|| Error::NotFound {
        key: key.to_string(),
    })?;
    match slot {
        Value::Sequence(seq) => {
            let len = seq.len();
            seq.get_mut(index).ok_or(Error::OutOfRange { index, len })
        }
        other => Err(Error::TypeMismatch {
            expected: "sequence".to_string(),
            found: other.type_name().to_string(),
            key: key.to_string(),
        }),
    }
}

/// Validates the keys a grafted branch will be built from.
///
/// Sequences are never fabricated, so a remaining segment that carries
/// an index makes the whole set fail before anything is mutated.
fn branch_keys(raw: &[String]) -> Result<Vec<String>, Error> {
    let mut keys = Vec::with_capacity(raw.len());
    for raw_segment in raw {
        let segment = Segment::parse(raw_segment)?;
        if segment.index.is_some() {
            return Err(Error::TypeMismatch {
                expected: "sequence".to_string(),
                found: "nothing".to_string(),
                key: segment.key,
            });
        }
        keys.push(segment.key);
    }
    Ok(keys)
}

/// Builds a nested map skeleton from a key chain.
///
/// The innermost map holds the value under the last key, wrapped by one
/// map per preceding key, so `["a", "b"]` with `"AB"` produces
/// `{"a": {"b": "AB"}}`.
fn make_map(keys: &[String], value: Value) -> Map {
    let mut map = Map::new();
    match keys {
        [] => {}
        [last] => {
            map.insert(last.clone(), value);
        }
        [first, rest @ ..] => {
            map.insert(first.clone(), Value::Map(make_map(rest, value)));
        }
    }
    map
}
