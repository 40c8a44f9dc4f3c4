//! Default query parameter assembly.

use indexmap::IndexMap;

/// URL-encode a query key or value.
#[must_use]
pub fn encode_param(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

/// Append `params` to `url` in map order as `key=value` pairs.
///
/// Keys and values are percent-encoded. Uses `&` if `url` already holds a
/// query string, `?` otherwise, and leaves no trailing separator.
pub(crate) fn append_query(url: &mut String, params: &IndexMap<String, String>) {
    if params.is_empty() {
        return;
    }

    url.push(if url.contains('?') { '&' } else { '?' });
    let pairs: Vec<String> = params
        .iter()
        .map(|(k, v)| format!("{}={}", encode_param(k), encode_param(v)))
        .collect();
    url.push_str(&pairs.join("&"));
}
