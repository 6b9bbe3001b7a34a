//! Tests for path index construction

use super::*;
use serde_json::json;

fn index_of(value: Value) -> Vec<String> {
    build_index(&value)
}

fn without_root(value: Value) -> Vec<String> {
    PathIndexer::new(IndexOptions {
        include_root: false,
        ..IndexOptions::default()
    })
    .build(&value)
}

#[test]
fn test_root_sentinel_comes_first() {
    let paths = index_of(json!({"a": 1}));
    assert_eq!(paths, vec!["", "a"]);
}

#[test]
fn test_nested_objects_in_document_order() {
    let paths = without_root(json!({
        "user": {"name": "Alice", "address": {"city": "Seattle"}},
        "active": true
    }));
    assert_eq!(
        paths,
        vec![
            "user",
            "user.name",
            "user.address",
            "user.address.city",
            "active"
        ]
    );
}

#[test]
fn test_array_of_objects_uses_wildcard_paths() {
    let paths = without_root(json!({"items": [{"n": 1}, {"n": 2}, {"n": 3}]}));
    assert_eq!(paths, vec!["items", "items[].n"]);
}

#[test]
fn test_heterogeneous_array_indexes_every_element() {
    let paths = without_root(json!({"items": [{"a": 1}, {"b": 2}]}));
    assert!(paths.contains(&"items[].a".to_string()));
    assert!(paths.contains(&"items[].b".to_string()));
    assert_eq!(paths, vec!["items", "items[].a", "items[].b"]);
}

#[test]
fn test_bare_wildcards_are_filtered() {
    let paths = without_root(json!({"tags": [], "matrix": [[1], [2]]}));
    assert_eq!(paths, vec!["tags", "matrix"]);
    assert!(!paths.iter().any(|p| p.ends_with("[]")));
}

#[test]
fn test_nested_arrays_of_objects() {
    let paths = without_root(json!({
        "orders": [
            {"lines": [{"sku": "a"}]},
            {"lines": [{"sku": "b", "qty": 2}]}
        ]
    }));
    assert_eq!(
        paths,
        vec![
            "orders",
            "orders[].lines",
            "orders[].lines[].sku",
            "orders[].lines[].qty"
        ]
    );
}

#[test]
fn test_array_of_arrays_of_objects() {
    let paths = without_root(json!({"m": [[{"x": 1}], [{"y": 2}]]}));
    assert_eq!(paths, vec!["m", "m[][].x", "m[][].y"]);
}

#[test]
fn test_root_array_document() {
    let paths = without_root(json!([{"id": 1}, {"id": 2, "tag": "x"}]));
    assert_eq!(paths, vec!["[].id", "[].tag"]);
}

#[test]
fn test_empty_containers_contribute_their_own_path() {
    let paths = without_root(json!({"meta": {}, "list": []}));
    assert_eq!(paths, vec!["meta", "list"]);
}

#[test]
fn test_empty_documents_yield_at_most_root() {
    assert_eq!(index_of(json!({})), vec![""]);
    assert_eq!(index_of(json!([])), vec![""]);
    assert_eq!(index_of(json!(42)), vec![""]);
    assert!(without_root(json!({})).is_empty());
}

#[test]
fn test_no_duplicates() {
    let paths = index_of(json!({
        "a": [{"x": 1, "y": {"z": 1}}, {"x": 2, "y": {"z": 2}}, {"x": 3}]
    }));
    let unique: HashSet<&String> = paths.iter().collect();
    assert_eq!(unique.len(), paths.len());
}

#[test]
fn test_unaddressable_keys_are_skipped_with_their_subtree() {
    let paths = without_root(json!({
        "#": 1,
        "a.b": {"inner": 1},
        "": 2,
        "x[0]": 3,
        "ok": {"deep": true}
    }));
    assert_eq!(paths, vec!["ok", "ok.deep"]);
}

#[test]
fn test_array_counts_option() {
    let paths = PathIndexer::new(IndexOptions {
        include_root: false,
        array_counts: true,
        ..IndexOptions::default()
    })
    .build(&json!({"items": [{"tags": ["a"]}]}));
    assert_eq!(
        paths,
        vec!["items", "items.#", "items[].tags", "items[].tags.#"]
    );
}

#[test]
fn test_array_indices_option() {
    let paths = PathIndexer::new(IndexOptions {
        include_root: false,
        array_indices: true,
        ..IndexOptions::default()
    })
    .build(&json!({"items": [{"n": 1}, {"n": 2}]}));
    assert_eq!(
        paths,
        vec![
            "items",
            "items[].n",
            "items[0]",
            "items[0].n",
            "items[1]",
            "items[1].n"
        ]
    );
}

#[test]
fn test_max_depth_option() {
    let paths = PathIndexer::new(IndexOptions {
        include_root: false,
        max_depth: Some(2),
        ..IndexOptions::default()
    })
    .build(&json!({"a": {"b": {"c": {"d": 1}}}}));
    assert_eq!(paths, vec!["a", "a.b"]);
}

#[test]
fn test_build_is_deterministic() {
    let value = json!({"b": [{"x": 1}, {"y": 2}], "a": {"c": [1, 2]}});
    assert_eq!(build_index(&value), build_index(&value));
}

#[test]
fn test_options_accessor() {
    let options = IndexOptions {
        array_counts: true,
        ..IndexOptions::default()
    };
    assert_eq!(PathIndexer::new(options).options(), options);
}
