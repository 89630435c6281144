use super::*;
use serde_json::json;

#[test]
fn test_get_path_nested_object() {
    let root = json!({ "item": { "properties": { "location": "here" } } });
    assert_eq!(
        get_value(&root, "item.properties.location"),
        Some(json!("here"))
    );
}

#[test]
fn test_get_path_missing_intermediate_is_none() {
    let root = json!({ "item": {} });
    assert_eq!(get_value(&root, "item.properties.location"), None);
    assert_eq!(get_value(&root, "data.values.layout"), None);
}

#[test]
fn test_get_path_null_intermediate_is_none() {
    let root = json!({ "item": { "properties": null } });
    assert_eq!(get_value(&root, "item.properties.location"), None);
}

#[test]
fn test_get_path_null_root_is_none() {
    assert_eq!(get_value(&Value::Null, "anything"), None);
    assert_eq!(get_value(&Value::Null, ""), None);
}

#[test]
fn test_get_path_null_leaf_is_present() {
    let root = json!({ "summary": null });
    assert_eq!(get_value(&root, "summary"), Some(Value::Null));
}

#[test]
fn test_get_path_numeric_segment_indexes_array() {
    let root = json!({ "layers": [{ "name": "a" }, { "name": "b" }] });
    assert_eq!(get_value(&root, "layers.1.name"), Some(json!("b")));
    assert_eq!(get_value(&root, "layers.5.name"), None);
}

#[test]
fn test_get_path_numeric_segment_on_object_uses_key() {
    let root = json!({ "codes": { "0": "zero" } });
    assert_eq!(get_value(&root, "codes.0"), Some(json!("zero")));
}

#[test]
fn test_get_path_length_of_array_and_string() {
    let root = json!({ "server": { "layers": [1, 2, 3], "name": "abcd" } });
    assert_eq!(get_value(&root, "server.layers.length"), Some(json!(3)));
    assert_eq!(get_value(&root, "server.name.length"), Some(json!(4)));
    assert_eq!(get_value(&root, "server.layers.length.foo"), None);
}

#[test]
fn test_get_path_length_key_on_object_is_plain_lookup() {
    let root = json!({ "box": { "length": 12 } });
    assert_eq!(get_value(&root, "box.length"), Some(json!(12)));
}

#[test]
fn test_get_path_through_scalar_is_none() {
    let root = json!({ "title": "A" });
    assert_eq!(get_value(&root, "title.first"), None);
}

#[test]
fn test_get_path_borrows_when_possible() {
    let root = json!({ "a": { "b": 1 } });
    assert!(matches!(get_path(&root, "a"), Some(Cow::Borrowed(_))));
}

#[test]
fn test_set_path_creates_objects() {
    let mut root = json!({});
    set_path(&mut root, "data.values.layout", json!("grid"));
    assert_eq!(root, json!({ "data": { "values": { "layout": "grid" } } }));
}

#[test]
fn test_set_path_creates_arrays_for_numeric_segments() {
    let mut root = json!({});
    set_path(&mut root, "contacts.2.name", json!("Ada"));
    assert_eq!(
        root,
        json!({ "contacts": [null, null, { "name": "Ada" }] })
    );
}

#[test]
fn test_set_path_preserves_siblings() {
    let mut root = json!({ "item": { "title": "A", "owner": "casey" } });
    set_path(&mut root, "item.title", json!("B"));
    assert_eq!(root, json!({ "item": { "title": "B", "owner": "casey" } }));
}

#[test]
fn test_set_path_replaces_scalar_intermediate() {
    let mut root = json!({ "item": { "properties": "oops" } });
    set_path(&mut root, "item.properties.location", json!("x"));
    assert_eq!(get_value(&root, "item.properties.location"), Some(json!("x")));
}

#[test]
fn test_set_path_on_null_root() {
    let mut root = Value::Null;
    set_path(&mut root, "name", json!("A"));
    assert_eq!(root, json!({ "name": "A" }));
}

#[test]
fn test_with_path_chains() {
    let root = with_path(with_path(json!({}), "a.b", json!(1)), "a.c", json!(2));
    assert_eq!(root, json!({ "a": { "b": 1, "c": 2 } }));
}

#[test]
fn test_get_after_set_returns_value() {
    let paths = ["name", "item.title", "data.values.pages.0.id", "x.y.z.w"];
    for path in paths {
        let mut root = json!({ "item": { "id": "1" } });
        set_path(&mut root, path, json!("v"));
        assert_eq!(get_value(&root, path), Some(json!("v")), "path {path}");
    }
}
