//! Header parsing and merging.

use indexmap::IndexMap;

use crate::error::{Error, ErrorKind, Result};

/// Parse static `key:value` entries into a header map.
///
/// Splits on the first `:` and trims both sides. Later entries replace
/// earlier ones with the same key.
pub(crate) fn parse_static(entries: &[String]) -> Result<IndexMap<String, String>> {
    let mut headers = IndexMap::with_capacity(entries.len());
    for entry in entries {
        let (key, value) = entry
            .split_once(':')
            .ok_or_else(|| Error::new(ErrorKind::MalformedHeader(entry.clone())))?;
        let key = key.trim();
        if key.is_empty() {
            return Err(Error::new(ErrorKind::MalformedHeader(entry.clone())));
        }
        headers.insert(key.to_string(), value.trim().to_string());
    }
    Ok(headers)
}

/// Merge dynamic headers over static ones.
///
/// Keys collide case-insensitively; the dynamic spelling and value win and
/// take the position of the first colliding static entry.
pub(crate) fn merge(
    mut merged: IndexMap<String, String>,
    dynamic: IndexMap<String, String>,
) -> IndexMap<String, String> {
    for (key, value) in dynamic {
        let collision = merged
            .keys()
            .position(|existing| existing.eq_ignore_ascii_case(&key));
        match collision {
            Some(index) => {
                merged.retain(|existing, _| !existing.eq_ignore_ascii_case(&key));
                merged.shift_insert(index, key, value);
            }
            None => {
                merged.insert(key, value);
            }
        }
    }
    merged
}
