#![allow(clippy::unwrap_used, clippy::panic, clippy::expect_used)]

/// Decomposition test data loader
///
/// The data file is a JSON array mixing comment strings and cases.
/// A case names its input and the components it expects; a component that
/// is not listed must be absent. `"failure": true` expects a rejection.
use reqlink::UriParts;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct DecomposeCase {
    pub input: String,
    #[serde(default)]
    pub scheme: Option<String>,
    #[serde(default)]
    pub host: Option<String>,
    #[serde(default)]
    pub port: Option<u16>,
    #[serde(default)]
    pub user: Option<String>,
    #[serde(default)]
    pub pass: Option<String>,
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default)]
    pub query: Option<String>,
    #[serde(default)]
    pub fragment: Option<String>,
    #[serde(default)]
    pub failure: bool,
}

impl DecomposeCase {
    pub fn expected(&self) -> UriParts {
        UriParts {
            scheme: self.scheme.clone(),
            host: self.host.clone(),
            port: self.port,
            user: self.user.clone(),
            pass: self.pass.clone(),
            path: self.path.clone(),
            query: self.query.clone(),
            fragment: self.fragment.clone(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(untagged)]
pub enum TestCase {
    Case(DecomposeCase),
    #[allow(dead_code)]
    Comment(String),
}

pub fn load_cases(path: &str) -> Vec<TestCase> {
    let content = std::fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("failed to read {path}: {e}"));
    serde_json::from_str(&content).unwrap_or_else(|e| panic!("failed to parse {path}: {e}"))
}
