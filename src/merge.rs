//! Deep merge of string-keyed maps.
//!
//! Merging is how several partial documents become one before being
//! wrapped in an accessor, the usual pattern for layered configuration
//! (defaults first, then overrides).

use indexmap::map::Entry;

use crate::document::value::{Map, Value};

/// How a merge resolves a key present on both sides when the two values
/// cannot both be kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergePolicy {
    /// Keep the value already in the destination.
    Keep,
    /// Take the incoming value.
    Override,
}

/// Deeply merges `src` into `dst`.
///
/// Keys absent from `dst` are inserted. When a key exists on both sides
/// and both values are maps, the maps merge recursively; in every other
/// case the policy decides which side survives. Sequences count as whole
/// values and are never merged element-wise. Insertion order of `dst` is
/// preserved, with new keys appended in `src` order.
///
/// # Example
///
/// ```
/// use nestmap::{merge, Map, MergePolicy, Value};
///
/// let mut dst = Map::new();
/// dst.insert("a".to_string(), Value::from(1));
///
/// let mut src = Map::new();
/// src.insert("a".to_string(), Value::from("A"));
/// src.insert("h".to_string(), Value::from("H"));
///
/// merge(&mut dst, src, MergePolicy::Override);
/// assert_eq!(dst["a"], Value::from("A"));
/// assert_eq!(dst["h"], Value::from("H"));
/// ```
pub fn merge(dst: &mut Map, src: Map, policy: MergePolicy) {
    for (key, incoming) in src {
        match dst.entry(key) {
            Entry::Vacant(slot) => {
                slot.insert(incoming);
            }
            Entry::Occupied(mut slot) => match (slot.get_mut(), incoming) {
                (Value::Map(existing), Value::Map(incoming)) => {
                    merge(existing, incoming, policy);
                }
                (existing, incoming) => {
                    if policy == MergePolicy::Override {
                        *existing = incoming;
                    }
                }
            },
        }
    }
}
