//! Path segment decomposition.

use crate::error::Error;

/// A decomposed path segment: a map key plus an optional sequence index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    /// The map key named by the segment.
    pub key: String,
    /// The sequence index, if the segment carries one.
    pub index: Option<usize>,
}

impl Segment {
    /// Parses a raw segment of the form `key` or `key[idx]`.
    ///
    /// The index must be a non-negative integer and its closing bracket
    /// must end the segment; anything else is a syntax error.
    ///
    /// # Example
    ///
    /// ```
    /// use nestmap::path::Segment;
    ///
    /// let plain = Segment::parse("host").unwrap();
    /// assert_eq!(plain.key, "host");
    /// assert_eq!(plain.index, None);
    ///
    /// let indexed = Segment::parse("servers[2]").unwrap();
    /// assert_eq!(indexed.key, "servers");
    /// assert_eq!(indexed.index, Some(2));
    ///
    /// assert!(Segment::parse("servers[-1]").is_err());
    /// ```
    pub fn parse(raw: &str) -> Result<Segment, Error> {
        let open = match raw.find('[') {
            None => {
                return Ok(Segment {
                    key: raw.to_string(),
                    index: None,
                })
            }
            Some(open) => open,
        };

        let (key, bracket) = raw.split_at(open);
        let digits = bracket[1..].strip_suffix(']').ok_or_else(|| Error::Syntax {
            message: format!("expected ']' to end segment '{}'", raw),
        })?;

        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::Syntax {
                message: format!("index in segment '{}' must be a non-negative integer", raw),
            });
        }
        let index = digits.parse::<usize>().map_err(|_| Error::Syntax {
            message: format!("index in segment '{}' is too large", raw),
        })?;

        Ok(Segment {
            key: key.to_string(),
            index: Some(index),
        })
    }
}
