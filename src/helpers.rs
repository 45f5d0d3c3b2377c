use crate::compat::{String, ToString, Vec};

/// Prune fragment (#hash) from a link
/// Returns (`link_without_fragment`, `fragment_without_hash`)
/// A bare trailing `#` yields `Some("")`
pub fn prune_fragment(input: &str) -> (&str, Option<&str>) {
    memchr::memchr(b'#', input.as_bytes()).map_or((input, None), |pos| {
        (&input[..pos], Some(&input[pos + 1..]))
    })
}

/// Split off the query (?search) the same way as `prune_fragment`
pub fn prune_query(input: &str) -> (&str, Option<&str>) {
    memchr::memchr(b'?', input.as_bytes()).map_or((input, None), |pos| {
        (&input[..pos], Some(&input[pos + 1..]))
    })
}

/// Replace ASCII control characters with `_`.
/// Every decomposed component is owned, so this always allocates.
pub fn replace_control_chars(input: &str) -> String {
    if !input.bytes().any(|b| b.is_ascii_control()) {
        return input.to_string();
    }
    input
        .chars()
        .map(|c| if c.is_ascii_control() { '_' } else { c })
        .collect()
}

/// Trim every leading and trailing `/` then split on `sep`.
/// An empty remainder still yields one empty element.
pub fn trim_slashes_and_split(input: &str, sep: char) -> Vec<String> {
    input
        .trim_matches('/')
        .split(sep)
        .map(ToString::to_string)
        .collect()
}
