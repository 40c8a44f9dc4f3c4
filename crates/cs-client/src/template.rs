//! Endpoint template handling: URL seeding and path substitution.

use crate::error::{Error, ErrorKind, Result};

/// Join a base URL and an endpoint template with exactly one `/` between them
/// when both sides supply one.
pub(crate) fn seed_url(base_url: &str, endpoint: &str) -> String {
    if base_url.ends_with('/') && endpoint.starts_with('/') {
        format!("{}{}", base_url.trim_end_matches('/'), endpoint)
    } else {
        format!("{base_url}{endpoint}")
    }
}

/// Replace every `{name}` in `url` with `value`.
///
/// Scans left to right and resumes after each inserted value, so braces in
/// `value` are never rescanned. Returns the number of replacements.
pub(crate) fn substitute(url: &mut String, name: &str, value: &str) -> usize {
    let needle = format!("{{{name}}}");
    let mut start = 0;
    let mut replaced = 0;

    while let Some(offset) = url[start..].find(&needle) {
        let at = start + offset;
        url.replace_range(at..at + needle.len(), value);
        start = at + value.len();
        replaced += 1;
    }

    replaced
}

/// The first `{...}` pair left in `url`, if any.
pub(crate) fn leftover_placeholder(url: &str) -> Option<&str> {
    let open = url.find('{')?;
    let close = url[open..].find('}')?;
    Some(&url[open..=open + close])
}

/// Fail if any placeholder survived substitution.
///
/// `unsupplied` pairs a placeholder name with the path parameter that was
/// declared for it but given no argument.
pub(crate) fn ensure_resolved(
    url: &str,
    template: &str,
    unsupplied: &[(&str, &str)],
) -> Result<()> {
    let Some(placeholder) = leftover_placeholder(url) else {
        return Ok(());
    };
    let name = &placeholder[1..placeholder.len() - 1];
    let missing_argument = unsupplied
        .iter()
        .find(|(unsupplied_name, _)| *unsupplied_name == name)
        .map(|(_, parameter)| parameter.to_string());

    Err(Error::new(ErrorKind::UnresolvedPathVariable {
        template: template.to_string(),
        placeholder: placeholder.to_string(),
        missing_argument,
    }))
}
