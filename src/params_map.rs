use crate::checkers::integer_key;
use crate::compat::{String, ToString, Vec, format};

/// Deepest bracket nesting accepted in a parameter name
const MAX_NESTING: usize = 64;

/// A decoded query parameter: a plain value or a nested map built from
/// bracketed names such as `a[]=1` or `a[x][y]=2`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
    Str(String),
    Map(ParamsMap),
}

impl ParamValue {
    /// Get the plain value, `None` for nested maps
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            Self::Map(_) => None,
        }
    }

    /// Get the nested map, `None` for plain values
    pub fn as_map(&self) -> Option<&ParamsMap> {
        match self {
            Self::Str(_) => None,
            Self::Map(map) => Some(map),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

/// Ordered mapping from decoded parameter names to values.
///
/// Built with form-encoding rules: `+` is a space, `%XX` escapes are decoded,
/// a repeated name keeps its first position but takes the last value, and
/// `name[]` appends under the next integer key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParamsMap {
    entries: Vec<(String, ParamValue)>,
    next_index: u64,
}

impl ParamsMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a raw query string (without the leading `?`)
    pub fn parse(query: &str) -> Self {
        let mut map = Self::new();
        for pair in query.split('&').filter(|pair| !pair.is_empty()) {
            let (name, value) = pair.split_once('=').unwrap_or((pair, ""));
            map.register(&decode_component(name), decode_component(value));
        }
        map
    }

    /// Get the value for a key.
    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// Get the plain value for a key, `None` if absent or nested.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(ParamValue::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.position(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &ParamValue> {
        self.entries.iter().map(|(_, v)| v)
    }

    /// Check if the keys are exactly `0..len` in order, as produced by `name[]` appends
    pub fn is_list(&self) -> bool {
        self.entries
            .iter()
            .enumerate()
            .all(|(i, (k, _))| integer_key(k) == Some(i as u64))
    }

    /// Insert or overwrite a value in place
    pub fn insert(&mut self, key: String, value: ParamValue) {
        if let Some(index) = integer_key(&key) {
            self.next_index = self.next_index.max(index.saturating_add(1));
        }
        match self.position(&key) {
            Some(i) => self.entries[i].1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Append a value under the next integer key
    pub fn push(&mut self, value: ParamValue) {
        let key = self.next_key();
        self.insert(key, value);
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.entries.iter().position(|(k, _)| k == key)
    }

    fn next_key(&self) -> String {
        format!("{}", self.next_index)
    }

    /// Register one decoded `name=value` pair, expanding bracketed names
    fn register(&mut self, name: &str, value: String) {
        let name = name.trim_start_matches(' ');
        let name = name.find('\0').map_or(name, |nul| &name[..nul]);

        let open = name.find('[');
        let base = &name[..open.unwrap_or(name.len())];
        if base.is_empty() {
            return;
        }
        let mut key: String = base
            .chars()
            .map(|c| if c == ' ' || c == '.' { '_' } else { c })
            .collect();

        let mut indexes: Vec<Option<&str>> = Vec::new();
        if let Some(open) = open {
            let mut rest = &name[open..];
            loop {
                if indexes.len() >= MAX_NESTING {
                    log::debug!("dropping query parameter nested deeper than {MAX_NESTING}");
                    return;
                }
                let inner = &rest[1..];
                let Some(close) = inner.find(']') else {
                    // "a[b" is the plain name "a_b"; deeper, the tail is ignored
                    if indexes.is_empty() {
                        key.push('_');
                        key.push_str(inner);
                    }
                    break;
                };
                let index = &inner[..close];
                indexes.push((!index.is_empty()).then_some(index));
                rest = &inner[close + 1..];
                if !rest.starts_with('[') {
                    break;
                }
            }
        }

        self.assign(Some(key), &indexes, value);
    }

    /// Walk `indexes` below `key`, creating nested maps on the way
    fn assign(&mut self, key: Option<String>, indexes: &[Option<&str>], value: String) {
        let key = key.unwrap_or_else(|| self.next_key());
        let Some((next, deeper)) = indexes.split_first() else {
            self.insert(key, ParamValue::Str(value));
            return;
        };

        let i = match self.position(&key) {
            Some(i) => i,
            None => {
                self.insert(key, ParamValue::Map(Self::new()));
                self.entries.len() - 1
            }
        };
        let slot = &mut self.entries[i].1;
        if let ParamValue::Str(_) = slot {
            *slot = ParamValue::Map(Self::new());
        }
        if let ParamValue::Map(map) = slot {
            map.assign(next.map(ToString::to_string), deeper, value);
        }
    }
}

impl From<&str> for ParamsMap {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

/// Decode a component from a query string.
fn decode_component(s: &str) -> String {
    let spaced = s.replace('+', " ");
    percent_encoding::percent_decode_str(&spaced)
        .decode_utf8_lossy()
        .into_owned()
}

#[cfg(feature = "serde")]
impl serde::Serialize for ParamValue {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Str(s) => serializer.serialize_str(s),
            Self::Map(map) => serde::Serialize::serialize(map, serializer),
        }
    }
}

/// Lists (including the empty map) serialize as arrays, everything else as objects
#[cfg(feature = "serde")]
impl serde::Serialize for ParamsMap {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::{SerializeMap, SerializeSeq};

        if self.is_list() {
            let mut seq = serializer.serialize_seq(Some(self.len()))?;
            for value in self.values() {
                seq.serialize_element(value)?;
            }
            seq.end()
        } else {
            let mut map = serializer.serialize_map(Some(self.len()))?;
            for (key, value) in self.iter() {
                map.serialize_entry(key, value)?;
            }
            map.end()
        }
    }
}
