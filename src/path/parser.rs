//! Path string splitting.

/// Splits a path expression into its raw segments.
///
/// Segments are separated by `/` and empty segments are dropped, so
/// `/a/b`, `a/b`, and `/a/b/` all yield `["a", "b"]`. The root path `/`
/// (and the empty string) yield no segments at all, which addresses the
/// whole document.
///
/// # Example
///
/// ```
/// use nestmap::path::split;
///
/// assert_eq!(split("/a/b"), vec!["a", "b"]);
/// assert!(split("/").is_empty());
/// ```
pub fn split(path: &str) -> Vec<String> {
    path.split('/')
        .filter(|segment| !segment.is_empty())
        .map(|segment| segment.to_string())
        .collect()
}
