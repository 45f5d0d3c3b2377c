use crate::checkers::{is_blank, parse_port};
use crate::compat::{String, ToString, format};

/// Port that marks a request as encrypted even without the `HTTPS` flag
const HTTPS_PORT: u16 = 443;

/// Values describing the request being served, as a CGI-style server
/// exposes them (`HTTPS`, `SERVER_NAME`, `HTTP_HOST`, `SERVER_ADDR`,
/// `SERVER_PORT`, `REQUEST_URI`).
///
/// Every field is optional; missing values degrade to empty strings in the
/// derived link rather than failing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestContext {
    /// Encryption flag, any non-empty value other than `"off"` means HTTPS
    pub https: Option<String>,
    /// Server-declared host name
    pub server_name: Option<String>,
    /// Client-declared `Host` header
    pub http_host: Option<String>,
    /// Server IP address
    pub server_addr: Option<String>,
    /// Server-declared port
    pub server_port: Option<String>,
    /// Raw request target (path and query) as received
    pub request_uri: Option<String>,
}

impl RequestContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a context from `(name, value)` pairs using the CGI variable names.
    /// Unknown names are ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use reqlink::RequestContext;
    ///
    /// let ctx = RequestContext::from_vars([("SERVER_NAME", "example.com"), ("REQUEST_URI", "/a")]);
    /// assert_eq!(ctx.host(), "example.com");
    /// assert_eq!(ctx.path(), "/a");
    /// ```
    pub fn from_vars<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut ctx = Self::new();
        for (name, value) in vars {
            let slot = match name.as_ref() {
                "HTTPS" => &mut ctx.https,
                "SERVER_NAME" => &mut ctx.server_name,
                "HTTP_HOST" => &mut ctx.http_host,
                "SERVER_ADDR" => &mut ctx.server_addr,
                "SERVER_PORT" => &mut ctx.server_port,
                "REQUEST_URI" => &mut ctx.request_uri,
                _ => continue,
            };
            *slot = Some(value.into());
        }
        ctx
    }

    /// Read the context from the process environment, as set by a CGI server
    #[cfg(feature = "std")]
    pub fn from_env() -> Self {
        Self::from_vars(std::env::vars())
    }

    /// Scheme prefix including `://`: `"https://"` when the encryption flag is
    /// set (and not `"off"`) or the server port is 443, else `"http://"`.
    pub fn scheme(&self) -> &'static str {
        let flagged = self
            .https
            .as_deref()
            .is_some_and(|flag| !is_blank(flag) && flag != "off");
        let on_https_port = self
            .server_port
            .as_deref()
            .and_then(|port| parse_port(port.trim()))
            == Some(HTTPS_PORT);

        if flagged || on_https_port {
            "https://"
        } else {
            "http://"
        }
    }

    /// Server name if declared (even empty), else the `Host` header.
    /// Falls back to the server address when the chosen value is empty.
    pub fn host(&self) -> String {
        let declared = self
            .server_name
            .as_deref()
            .or(self.http_host.as_deref())
            .unwrap_or_default();

        if is_blank(declared) {
            log::debug!("no server name or host header, falling back to server address");
            return self.server_addr.clone().unwrap_or_default();
        }
        declared.to_string()
    }

    pub fn port(&self) -> &str {
        self.server_port.as_deref().unwrap_or_default()
    }

    /// Raw request target, path plus query
    pub fn path(&self) -> &str {
        self.request_uri.as_deref().unwrap_or_default()
    }

    /// Scheme and host of the current request.
    /// The port is only kept for a literal `localhost` host that does not
    /// already mention it; every other host drops the port.
    pub fn origin(&self) -> String {
        let host = self.host();
        let port = self.port();

        if host == "localhost" && !host.contains(port) {
            format!("{}{host}:{port}", self.scheme())
        } else {
            format!("{}{host}", self.scheme())
        }
    }

    /// `origin()` followed by the raw request target
    pub fn link(&self) -> String {
        let mut link = self.origin();
        link.push_str(self.path());
        link
    }
}
