//! URL query-string parsing
//!
//! Render targets may arrive as page URLs or bare query strings carrying a
//! `gistID` parameter. Parsing is deliberately forgiving: malformed input
//! degrades to an empty mapping, never an error.

use std::collections::HashMap;

/// Query parameter naming the gist to render.
pub const GIST_ID_PARAM: &str = "gistID";

/// Parse a URL or bare query string into a parameter map.
///
/// Any fragment identifier is discarded first. A leading `?` is optional as
/// long as the string contains `=`; input with neither yields an empty map.
/// Values are percent-decoded with `+` treated as space, and a repeated key
/// keeps its last value.
pub fn parse_query(url: &str) -> HashMap<String, String> {
    let without_fragment = url.split('#').next().unwrap_or("");

    let query = match without_fragment.split_once('?') {
        Some((_, query)) => query,
        None if without_fragment.contains('=') => without_fragment,
        None => return HashMap::new(),
    };

    let mut params = HashMap::new();
    for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
        params.insert(key.into_owned(), value.into_owned());
    }
    params
}

/// Extract a gist identifier from a URL or query string, if one is present.
pub fn gist_id(url: &str) -> Option<String> {
    parse_query(url).remove(GIST_ID_PARAM)
}
