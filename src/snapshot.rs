use crate::compat::{String, Vec};
use crate::params_map::ParamsMap;

/// Every derived view of a `Uri` captured at once.
///
/// Serializes (with the `serde` feature) with the keys
/// `Link`, `Scheme`, `Host`, `Path`, `Query`, `Segments`, `Params`,
/// `ParamsMap`, `Port`, `Origin`. `Port` is a number when the link has one
/// and an empty string otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "PascalCase"))]
pub struct UriSnapshot {
    pub link: String,
    pub scheme: String,
    pub host: String,
    pub path: String,
    pub query: String,
    pub segments: Vec<String>,
    pub params: Vec<String>,
    pub params_map: ParamsMap,
    #[cfg_attr(feature = "serde", serde(serialize_with = "serialize_port"))]
    pub port: String,
    pub origin: String,
}

#[cfg(feature = "serde")]
#[allow(clippy::ptr_arg)]
fn serialize_port<S>(port: &String, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    match crate::checkers::parse_port(port) {
        Some(number) => serializer.serialize_u16(number),
        None => serializer.serialize_str(port),
    }
}
