//! URI component splitting.
//!
//! ```text
//!    foo://example.com:8042/over/there?name=ferret#nose
//!    \_/   \______________/\_________/ \_________/ \__/
//!     |           |            |            |        |
//!   scheme     authority     path        query   fragment
//! ```
//!
//! This is a small subset of RFC 3986: no percent-decoding, no relative
//! reference resolution and no IPv6 literals. Parsing never fails; whatever
//! cannot be recognised is left in an empty component.

use alloc::string::{String, ToString};
use serde::Serialize;

const SCHEME_DELIMITER: char = ':';
const AUTHORITY_PREFIX: &str = "//";
const AUTHORITY_TERMINATORS: [char; 3] = ['/', '?', '#'];
const PATH_TERMINATORS: [char; 2] = ['?', '#'];
const QUERY_PREFIX: char = '?';
const FRAGMENT_PREFIX: char = '#';

/// The components of a parsed URI.
///
/// Every field is empty when the component is absent.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Parts {
    /// Scheme, lowercased. `"http"` in `http://example.com/`.
    pub scheme: String,
    /// Host and optional port, e.g. `"example.com:8042"`.
    pub authority: String,
    /// Everything after the scheme and authority: path, query and fragment
    /// together with their delimiters.
    pub full_path: String,
    /// Path, up to the first `?` or `#`.
    pub path: String,
    /// Path parameters. Never populated; kept so the set of components
    /// matches the classic `urlparse` layout.
    pub params: String,
    /// Query, without the leading `?`.
    pub query: String,
    /// Fragment, without the leading `#`.
    pub fragment: String,
}

/// Splits `uri` into its components.
///
/// The input is consumed left to right. A `:` followed by a digit is taken to
/// be a port separator rather than the end of a scheme, so `example.com:80`
/// has no scheme. A fragment is only recognised after a query: in
/// `/path#frag` the whole text is the path.
pub fn parse(uri: &str) -> Parts {
    let mut parts = Parts::default();
    let mut rest = uri;

    if let Some((scheme, tail)) = split_scheme(rest) {
        parts.scheme = scheme;
        rest = tail;
    }

    if let Some(tail) = rest.strip_prefix(AUTHORITY_PREFIX) {
        let (authority, tail) = split_authority(tail);
        parts.authority = authority.to_string();
        rest = tail;
    }

    parts.full_path = rest.to_string();

    let (path, tail) = split_path(rest);
    parts.path = path.to_string();
    rest = tail;

    if let Some(tail) = rest.strip_prefix(QUERY_PREFIX) {
        let (query, fragment) = split_query(tail);
        parts.query = query.to_string();
        parts.fragment = fragment.to_string();
    }

    parts
}

/// Returns the lowercased scheme and the remainder after its `:`, if `uri`
/// starts with one.
fn split_scheme(uri: &str) -> Option<(String, &str)> {
    let i = uri.find(SCHEME_DELIMITER)?;
    if i == 0 {
        return None;
    }
    let tail = &uri[i + SCHEME_DELIMITER.len_utf8()..];
    if tail.starts_with(|c: char| c.is_ascii_digit()) {
        // host:port
        return None;
    }
    Some((uri[..i].to_lowercase(), tail))
}

/// Splits the text following `//` into the authority and the remainder. The
/// remainder keeps its leading delimiter.
fn split_authority(rest: &str) -> (&str, &str) {
    // Only the first occurrence of each terminator counts, and not at offset 0.
    let end = AUTHORITY_TERMINATORS
        .iter()
        .filter_map(|&c| rest.find(c))
        .filter(|&i| i > 0)
        .min();
    match end {
        Some(i) => rest.split_at(i),
        None => (rest, ""),
    }
}

/// Splits off the path. The search starts after the first character so that
/// a leading delimiter is never mistaken for the end of the path.
fn split_path(rest: &str) -> (&str, &str) {
    match find_after_first(rest, &PATH_TERMINATORS) {
        Some(i) => rest.split_at(i),
        None => (rest, ""),
    }
}

/// Splits the text following `?` into query and fragment.
fn split_query(rest: &str) -> (&str, &str) {
    match find_after_first(rest, &[FRAGMENT_PREFIX]) {
        Some(i) => (&rest[..i], &rest[i + FRAGMENT_PREFIX.len_utf8()..]),
        None => (rest, ""),
    }
}

/// Byte offset of the earliest `needles` match, ignoring the first character.
fn find_after_first(haystack: &str, needles: &[char]) -> Option<usize> {
    let skip = haystack.chars().next().map_or(0, char::len_utf8);
    haystack[skip..].find(needles).map(|i| i + skip)
}
