#![allow(clippy::unwrap_used, clippy::panic, clippy::expect_used)]

/// Serialization tests (require the `serde` feature)
use reqlink::{ParamsMap, Uri};
use serde_json::json;

#[test]
fn test_snapshot_keys() {
    let snapshot = Uri::new("https://example.com:8080/a/b?x=1&y=2").snapshot();
    let value = serde_json::to_value(&snapshot).unwrap();
    assert_eq!(
        value,
        json!({
            "Link": "https://example.com:8080/a/b?x=1&y=2",
            "Scheme": "https",
            "Host": "example.com",
            "Path": "/a/b",
            "Query": "x=1&y=2",
            "Segments": ["a", "b"],
            "Params": ["x=1", "y=2"],
            "ParamsMap": { "x": "1", "y": "2" },
            "Port": 8080,
            "Origin": "https://example.com:8080"
        })
    );
}

#[test]
fn test_snapshot_port_absent_is_empty_string() {
    let snapshot = Uri::new("https://example.com/a").snapshot();
    let value = serde_json::to_value(&snapshot).unwrap();
    assert_eq!(value["Port"], json!(""));

    let value = serde_json::to_value(Uri::new("http://h:0/").snapshot()).unwrap();
    assert_eq!(value["Port"], json!(0));
}

#[test]
fn test_params_map_lists_become_arrays() {
    let params = ParamsMap::parse("a[]=1&a[]=2&b[k]=v&c=3");
    let value = serde_json::to_value(&params).unwrap();
    assert_eq!(value, json!({ "a": ["1", "2"], "b": { "k": "v" }, "c": "3" }));
}

#[test]
fn test_empty_params_map_is_empty_array() {
    let value = serde_json::to_value(ParamsMap::new()).unwrap();
    assert_eq!(value, json!([]));
}

#[test]
fn test_uri_parts_skip_absent() {
    let parts = Uri::new("/a?b").decompose();
    let value = serde_json::to_value(&parts).unwrap();
    assert_eq!(value, json!({ "path": "/a", "query": "b" }));
}
