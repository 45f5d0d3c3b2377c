use crate::checkers::is_blank;
use crate::compat::{String, format};

/// Compose a link from parts.
///
/// With both `scheme` and `host` the link is `scheme://host/path`; otherwise
/// it is `path` alone. A non-empty `query` is appended after `?`.
///
/// When a `port` is given alongside scheme and host, the origin becomes
/// `:port` by itself and the scheme and host are dropped. Callers that need
/// `scheme://host:port` should build the origin themselves.
///
/// # Examples
///
/// ```
/// use reqlink::congregate_link;
///
/// assert_eq!(congregate_link("a/b", "q=1", Some("https"), Some("host"), None), "https://host/a/b?q=1");
/// assert_eq!(congregate_link("a/b", "q=1", Some("https"), Some("host"), Some(8080)), ":8080/a/b?q=1");
/// assert_eq!(congregate_link("a/b", "", None, None, None), "a/b");
/// ```
pub fn congregate_link(
    path: &str,
    query: &str,
    scheme: Option<&str>,
    host: Option<&str>,
    port: Option<u16>,
) -> String {
    let mut link = match (scheme, host) {
        (Some(scheme), Some(host)) => {
            let origin = match port {
                Some(port) => format!(":{port}"),
                None => format!("{scheme}://{host}"),
            };
            format!("{origin}/{path}")
        }
        _ => String::from(path),
    };

    if !is_blank(query) {
        link.push('?');
        link.push_str(query);
    }
    link
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin_and_path() {
        assert_eq!(
            congregate_link("a/b", "q=1", Some("https"), Some("host"), None),
            "https://host/a/b?q=1"
        );
        assert_eq!(
            congregate_link("", "", Some("http"), Some("host"), None),
            "http://host/"
        );
    }

    #[test]
    fn test_port_replaces_origin() {
        assert_eq!(
            congregate_link("a/b", "q=1", Some("https"), Some("host"), Some(8080)),
            ":8080/a/b?q=1"
        );
    }

    #[test]
    fn test_port_without_origin_is_ignored() {
        assert_eq!(congregate_link("a/b", "", None, None, Some(8080)), "a/b");
        assert_eq!(congregate_link("a/b", "", Some("https"), None, Some(8080)), "a/b");
    }

    #[test]
    fn test_path_only() {
        assert_eq!(congregate_link("a/b", "x=1", None, None, None), "a/b?x=1");
        assert_eq!(congregate_link("/a", "", None, Some("host"), None), "/a");
    }

    #[test]
    fn test_blank_query_dropped() {
        assert_eq!(congregate_link("a", "0", None, None, None), "a");
    }
}
