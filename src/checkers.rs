/// Parse a port string to u16.
/// Returns None if empty, contains non-digit characters, or is out of range.
pub fn parse_port(port: &str) -> Option<u16> {
    if port.is_empty() || !port.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    port.parse::<u16>().ok()
}

/// Check if a string is a valid scheme: non-empty, ASCII letters, digits, `+`, `-` or `.`
pub fn is_scheme(input: &str) -> bool {
    !input.is_empty()
        && input
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'+' | b'-' | b'.'))
}

/// Check if a string counts as "empty" for optional request and link values.
/// `"0"` is empty too, so a zero port or a `"0"` query is dropped.
pub fn is_blank(input: &str) -> bool {
    input.is_empty() || input == "0"
}

/// Check if a key is a canonical non-negative integer (`"0"`, `"17"`, not `"017"`).
/// Returns the parsed value for keys that advance the append counter.
pub fn integer_key(key: &str) -> Option<u64> {
    let bytes = key.as_bytes();
    match bytes {
        [] => None,
        [b'0'] => Some(0),
        [b'0', ..] => None,
        _ if bytes.iter().all(u8::is_ascii_digit) => key.parse().ok(),
        _ => None,
    }
}
