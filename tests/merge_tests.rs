// tests/merge_tests.rs
use nestmap::{merge, MergePolicy, NestedMap, Value};
use serde_json::json;

fn map_from(raw: serde_json::Value) -> nestmap::Map {
    match Value::from(raw) {
        Value::Map(m) => m,
        other => panic!("fixture must be a map, got {}", other.type_name()),
    }
}

// ============================================================================
// Override policy
// ============================================================================

#[test]
fn test_override_replaces_conflicting_scalar() {
    let mut dst = map_from(json!({"a": 1, "b": {"d": 4}}));
    let src = map_from(json!({"a": "A"}));
    merge(&mut dst, src, MergePolicy::Override);
    assert_eq!(Value::Map(dst), Value::from(json!({"a": "A", "b": {"d": 4}})));
}

#[test]
fn test_override_adds_new_keys() {
    let mut dst = map_from(json!({"a": 1}));
    let src = map_from(json!({"h": "H"}));
    merge(&mut dst, src, MergePolicy::Override);
    assert_eq!(Value::Map(dst), Value::from(json!({"a": 1, "h": "H"})));
}

#[test]
fn test_override_adds_nested_map() {
    let mut dst = map_from(json!({"a": 1}));
    let src = map_from(json!({"i": {"j": "J"}}));
    merge(&mut dst, src, MergePolicy::Override);
    assert_eq!(
        Value::Map(dst),
        Value::from(json!({"a": 1, "i": {"j": "J"}}))
    );
}

#[test]
fn test_override_unions_nested_maps() {
    let mut dst = map_from(json!({"i": {"j": "J"}}));
    let src = map_from(json!({"i": {"k": "K"}}));
    merge(&mut dst, src, MergePolicy::Override);
    assert_eq!(
        Value::Map(dst),
        Value::from(json!({"i": {"j": "J", "k": "K"}}))
    );
}

#[test]
fn test_override_recurses_deeply() {
    let mut dst = map_from(json!({"l1": {"l2": {"keep": 1, "swap": "old"}}}));
    let src = map_from(json!({"l1": {"l2": {"swap": "new"}, "extra": true}}));
    merge(&mut dst, src, MergePolicy::Override);
    assert_eq!(
        Value::Map(dst),
        Value::from(json!({"l1": {"l2": {"keep": 1, "swap": "new"}, "extra": true}}))
    );
}

#[test]
fn test_override_replaces_sequences_whole() {
    let mut dst = map_from(json!({"c": ["A", "B"]}));
    let src = map_from(json!({"c": ["C"]}));
    merge(&mut dst, src, MergePolicy::Override);
    assert_eq!(Value::Map(dst), Value::from(json!({"c": ["C"]})));
}

#[test]
fn test_override_map_replaces_scalar_and_back() {
    let mut dst = map_from(json!({"x": 1, "y": {"k": 2}}));
    let src = map_from(json!({"x": {"k": 1}, "y": "flat"}));
    merge(&mut dst, src, MergePolicy::Override);
    assert_eq!(
        Value::Map(dst),
        Value::from(json!({"x": {"k": 1}, "y": "flat"}))
    );
}

// ============================================================================
// Keep policy
// ============================================================================

#[test]
fn test_keep_preserves_existing_values() {
    let mut dst = map_from(json!({"a": 1}));
    let src = map_from(json!({"a": "A", "b": 2}));
    merge(&mut dst, src, MergePolicy::Keep);
    assert_eq!(Value::Map(dst), Value::from(json!({"a": 1, "b": 2})));
}

#[test]
fn test_keep_still_unions_nested_maps() {
    let mut dst = map_from(json!({"i": {"j": "J", "both": "dst"}}));
    let src = map_from(json!({"i": {"k": "K", "both": "src"}}));
    merge(&mut dst, src, MergePolicy::Keep);
    assert_eq!(
        Value::Map(dst),
        Value::from(json!({"i": {"j": "J", "both": "dst", "k": "K"}}))
    );
}

// ============================================================================
// Layering into an accessor
// ============================================================================

#[test]
fn test_merged_layers_resolve_by_path() {
    let defaults = map_from(json!({
        "server": {"host": "localhost", "port": 5000},
        "paths": {"data": "/tmp/data"}
    }));
    let overrides = map_from(json!({
        "server": {"port": 8080}
    }));

    let mut doc = defaults;
    merge(&mut doc, overrides, MergePolicy::Override);

    let map = NestedMap::new(Value::Map(doc)).unwrap();
    assert_eq!(map.get("/server/host").unwrap(), &Value::from("localhost"));
    assert_eq!(map.get("/server/port").unwrap(), &Value::from(8080));
    assert_eq!(map.get("/paths/data").unwrap(), &Value::from("/tmp/data"));
}

#[test]
fn test_merge_key_order_appends_new_keys() {
    let mut dst = map_from(json!({"z": 1, "a": 2}));
    let src = map_from(json!({"a": 20, "m": 3}));
    merge(&mut dst, src, MergePolicy::Override);
    let keys: Vec<&String> = dst.keys().collect();
    assert_eq!(keys, ["z", "a", "m"]);
}
