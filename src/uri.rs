use crate::checkers::is_blank;
use crate::compat::{String, Vec, format};
use crate::context::RequestContext;
use crate::error::Result;
use crate::helpers::trim_slashes_and_split;
use crate::params_map::ParamsMap;
use crate::parser;
use crate::snapshot::UriSnapshot;
use crate::uri_parts::UriParts;

/// A link and the views derived from it.
///
/// Only the link text is stored. Every component is decomposed again on
/// each access, so `set_link` and `remove_lang_segment` are reflected
/// immediately. Links that cannot be decomposed yield empty components.
///
/// # Examples
///
/// ```
/// use reqlink::Uri;
///
/// let uri = Uri::new("https://example.com:8080/a/b?x=1&y=2");
/// assert_eq!(uri.host(), "example.com");
/// assert_eq!(uri.origin(), "https://example.com:8080");
/// assert_eq!(uri.segments(), ["a", "b"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Uri {
    link: String,
}

impl Uri {
    /// Wrap a link verbatim, without validation
    pub fn new(link: impl Into<String>) -> Self {
        Self { link: link.into() }
    }

    /// Wrap `link` if it is non-empty, else derive the link from `ctx`
    pub fn with_fallback(link: &str, ctx: &RequestContext) -> Self {
        if link.is_empty() {
            Self::from_context(ctx)
        } else {
            Self::new(link)
        }
    }

    /// Derive the link of the request described by `ctx`: origin plus raw target.
    /// Missing values leave gaps rather than failing.
    pub fn from_context(ctx: &RequestContext) -> Self {
        let link = ctx.link();
        log::trace!("derived request link {link:?}");
        Self { link }
    }

    /// Derive the link of the current request from the process environment
    #[cfg(feature = "std")]
    pub fn current() -> Self {
        Self::from_context(&RequestContext::from_env())
    }

    pub fn link(&self) -> &str {
        &self.link
    }

    /// Replace the link, without validation
    pub fn set_link(&mut self, link: impl Into<String>) {
        self.link = link.into();
    }

    /// Decompose the link, reporting links that cannot be decomposed.
    ///
    /// # Errors
    ///
    /// Returns a `ParseError` for an invalid port or an empty host.
    pub fn try_decompose(&self) -> Result<UriParts> {
        parser::decompose(&self.link)
    }

    /// Decompose the link; a link that cannot be decomposed has no components
    pub fn decompose(&self) -> UriParts {
        self.try_decompose().unwrap_or_else(|err| {
            log::debug!("cannot decompose {:?}: {err}", self.link);
            UriParts::new()
        })
    }

    pub fn scheme(&self) -> String {
        self.decompose().scheme.unwrap_or_default()
    }

    pub fn host(&self) -> String {
        self.decompose().host.unwrap_or_default()
    }

    pub fn path(&self) -> String {
        self.decompose().path.unwrap_or_default()
    }

    pub fn query(&self) -> String {
        self.decompose().query.unwrap_or_default()
    }

    /// Port in decimal, empty if absent
    pub fn port(&self) -> String {
        self.decompose().port_str()
    }

    /// `scheme://host[:port]`.
    /// A zero or absent port is left out; an empty scheme still yields `://`.
    pub fn origin(&self) -> String {
        let parts = self.decompose();
        let scheme = parts.scheme.as_deref().unwrap_or_default();
        let host = parts.host.as_deref().unwrap_or_default();
        let port = parts.port_str();

        if is_blank(&port) {
            format!("{scheme}://{host}")
        } else {
            format!("{scheme}://{host}:{port}")
        }
    }

    /// Path split on `/` after trimming outer slashes.
    /// An empty path yields a single empty segment.
    pub fn segments(&self) -> Vec<String> {
        trim_slashes_and_split(&self.path(), '/')
    }

    /// Raw `key=value` tokens of the query, in order.
    /// Outer slashes are trimmed first; an empty query yields a single empty token.
    pub fn params(&self) -> Vec<String> {
        trim_slashes_and_split(&self.query(), '&')
    }

    /// Query decoded into a name to value map
    pub fn params_map(&self) -> ParamsMap {
        ParamsMap::parse(&self.query())
    }

    /// Capture every derived view at once
    pub fn snapshot(&self) -> UriSnapshot {
        UriSnapshot {
            link: self.link.clone(),
            scheme: self.scheme(),
            host: self.host(),
            path: self.path(),
            query: self.query(),
            segments: self.segments(),
            params: self.params(),
            params_map: self.params_map(),
            port: self.port(),
            origin: self.origin(),
        }
    }

    /// Strip a leading language segment.
    ///
    /// The first path segment is tested against `langs`. On a match the link
    /// becomes `scheme://host/<remaining segments>[?query]`; port and fragment
    /// are not carried over. Otherwise the link is left as is.
    ///
    /// # Examples
    ///
    /// ```
    /// use reqlink::Uri;
    ///
    /// let mut uri = Uri::new("https://h/en/page?q=1");
    /// uri.remove_lang_segment(&["en", "fr"]);
    /// assert_eq!(uri.link(), "https://h/page?q=1");
    /// ```
    pub fn remove_lang_segment<S: AsRef<str>>(&mut self, langs: &[S]) -> &mut Self {
        let segments = self.segments();
        let Some((first, rest)) = segments.split_first() else {
            return self;
        };
        if !langs.iter().any(|lang| lang.as_ref() == first.as_str()) {
            return self;
        }

        let query = self.query();
        let mut link = format!("{}://{}/{}", self.scheme(), self.host(), rest.join("/"));
        if !is_blank(&query) {
            link.push('?');
            link.push_str(&query);
        }
        log::trace!("removed lang segment {first:?}: {link:?}");
        self.link = link;
        self
    }

    /// Consuming form of `remove_lang_segment`
    #[must_use]
    pub fn without_lang_segment<S: AsRef<str>>(mut self, langs: &[S]) -> Self {
        self.remove_lang_segment(langs);
        self
    }
}

impl core::fmt::Display for Uri {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.link)
    }
}

impl AsRef<str> for Uri {
    fn as_ref(&self) -> &str {
        &self.link
    }
}

impl From<&str> for Uri {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Uri {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<Uri> for String {
    fn from(uri: Uri) -> Self {
        uri.link
    }
}

impl core::str::FromStr for Uri {
    type Err = core::convert::Infallible;

    fn from_str(s: &str) -> core::result::Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}
