mod state;

pub use state::State;

use crate::checkers::{is_scheme, parse_port};
use crate::error::{ParseError, Result};
use crate::helpers::{prune_fragment, prune_query, replace_control_chars};
use crate::uri_parts::UriParts;

/// Longest port accepted after a colon, in digits
const MAX_PORT_DIGITS: usize = 5;

fn starts_with_double_slash(input: &str) -> bool {
    input.as_bytes().starts_with(b"//")
}

/// Decompose a link into its generic components.
///
/// The grammar is `scheme://[user[:pass]@]host[:port][/path][?query][#fragment]`,
/// tolerant of partial input: `"/a/b"` yields only a path, `"example.com:80"`
/// yields host and port, `"mailto:a@b"` yields scheme and path.
/// Nothing is normalized or percent-decoded.
///
/// # Errors
///
/// Returns `ParseError::InvalidPort` for a port that is not 1-5 digits within
/// range, and `ParseError::InvalidHost` when an authority has an empty host.
pub fn decompose(input: &str) -> Result<UriParts> {
    let bytes = input.as_bytes();
    let end = bytes.len();
    let mut parts = UriParts::new();
    let mut pos = 0;
    let mut colon = 0;
    let mut state = State::SchemeStart;

    loop {
        match state {
            State::SchemeStart => match memchr::memchr(b':', bytes) {
                Some(c) if c > 0 => {
                    let scheme = &input[..c];
                    if !is_scheme(scheme) {
                        // "host:port" with characters no scheme may contain,
                        // as long as the colon sits before any query or fragment
                        let stop = bytes
                            .iter()
                            .position(|&b| matches!(b, b'?' | b'#'))
                            .unwrap_or(end);
                        if c + 1 < end && c < stop {
                            colon = c;
                            state = State::Port;
                        } else if starts_with_double_slash(input) {
                            pos = 2;
                            state = State::Authority;
                        } else {
                            state = State::Path;
                        }
                        continue;
                    }

                    if c + 1 == end {
                        parts.scheme = Some(replace_control_chars(scheme));
                        return Ok(parts);
                    }

                    if bytes[c + 1] == b'/' {
                        parts.scheme = Some(replace_control_chars(scheme));
                        if c + 2 < end && bytes[c + 2] == b'/' {
                            pos = c + 3;
                            state = State::Authority;
                            if scheme.eq_ignore_ascii_case("file") && c + 3 < end && bytes[c + 3] == b'/'
                            {
                                // file:///c:/dir keeps the drive letter as the path start
                                if c + 5 < end && bytes[c + 5] == b':' {
                                    pos = c + 4;
                                }
                                state = State::Path;
                            }
                        } else {
                            pos = c + 1;
                            state = State::Path;
                        }
                        continue;
                    }

                    // "example.com:8080" or "example.com:8080/path" is a port, not a scheme
                    let digits = bytes[c + 1..]
                        .iter()
                        .take_while(|b| b.is_ascii_digit())
                        .count();
                    let after = c + 1 + digits;
                    if (after == end || bytes[after] == b'/') && digits <= MAX_PORT_DIGITS {
                        colon = c;
                        state = State::Port;
                        continue;
                    }

                    parts.scheme = Some(replace_control_chars(scheme));
                    pos = c + 1;
                    state = State::Path;
                }
                Some(c) => {
                    colon = c;
                    state = State::Port;
                }
                None if starts_with_double_slash(input) => {
                    pos = 2;
                    state = State::Authority;
                }
                None => state = State::Path,
            },

            State::Port => {
                let digits = bytes[colon + 1..]
                    .iter()
                    .take(MAX_PORT_DIGITS + 1)
                    .take_while(|b| b.is_ascii_digit())
                    .count();
                let after = colon + 1 + digits;

                if digits > 0 && digits <= MAX_PORT_DIGITS && (after == end || bytes[after] == b'/')
                {
                    let port =
                        parse_port(&input[colon + 1..after]).ok_or(ParseError::InvalidPort)?;
                    parts.port = Some(port);
                    if starts_with_double_slash(&input[pos..]) {
                        pos += 2;
                    }
                    state = State::Authority;
                } else if digits == 0 && colon + 1 == end {
                    return Err(ParseError::InvalidPort);
                } else if starts_with_double_slash(&input[pos..]) {
                    pos += 2;
                    state = State::Authority;
                } else {
                    state = State::Path;
                }
            }

            State::Authority => {
                let auth_end = bytes[pos..]
                    .iter()
                    .position(|&b| matches!(b, b'/' | b'?' | b'#'))
                    .map_or(end, |i| pos + i);

                let mut host_start = pos;
                if let Some(at) = memchr::memrchr(b'@', &bytes[pos..auth_end]) {
                    let userinfo = &input[pos..pos + at];
                    match userinfo.split_once(':') {
                        Some((user, pass)) => {
                            parts.user = Some(replace_control_chars(user));
                            parts.pass = Some(replace_control_chars(pass));
                        }
                        None => parts.user = Some(replace_control_chars(userinfo)),
                    }
                    host_start = pos + at + 1;
                }

                let authority = &input[host_start..auth_end];
                let host_end = if authority.starts_with('[') && authority.ends_with(']') {
                    // IPv6 literal, colons belong to the address
                    auth_end
                } else if let Some(c) = memchr::memrchr(b':', authority.as_bytes()) {
                    let port = &authority[c + 1..];
                    if parts.port.is_none() {
                        if port.len() > MAX_PORT_DIGITS {
                            return Err(ParseError::InvalidPort);
                        }
                        if !port.is_empty() {
                            parts.port = Some(parse_port(port).ok_or(ParseError::InvalidPort)?);
                        }
                    }
                    host_start + c
                } else {
                    auth_end
                };

                if host_end <= host_start {
                    return Err(ParseError::InvalidHost);
                }
                parts.host = Some(replace_control_chars(&input[host_start..host_end]));

                if auth_end == end {
                    return Ok(parts);
                }
                pos = auth_end;
                state = State::Path;
            }

            State::Path => {
                let (rest, fragment) = prune_fragment(&input[pos..]);
                let (path, query) = prune_query(rest);

                parts.fragment = fragment.map(replace_control_chars);
                parts.query = query.map(replace_control_chars);
                if !path.is_empty() || pos == end {
                    parts.path = Some(replace_control_chars(path));
                }
                return Ok(parts);
            }
        }
    }
}
