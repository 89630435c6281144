use super::dates::{epoch_to_iso, iso_to_epoch};
use super::*;
use crate::item::Item;
use serde_json::json;

const BASIC: &[PropertyMapEntry] = &[
    PropertyMapEntry::new("name", "item.title"),
    PropertyMapEntry::new("description", "item.description"),
];

fn base_model() -> Value {
    json!({
        "item": { "id": "", "type": "Hub Project", "title": "Untitled" },
        "data": { "status": "notStarted", "view": {} }
    })
}

#[test]
fn test_round_trip_is_identity_on_mapped_fields() {
    let mapper = PropertyMapper::new(BASIC.to_vec());
    let entity = json!({ "name": "A", "description": "B" });

    let model = mapper.to_store(&entity, &base_model());
    let back = mapper.to_entity(&model, &json!({}));

    assert_eq!(back, json!({ "name": "A", "description": "B" }));
}

#[test]
fn test_empty_entity_preserves_base_model() {
    let mapper = PropertyMapper::new(BASIC.to_vec());
    assert_eq!(mapper.to_store(&json!({}), &base_model()), base_model());
}

#[test]
fn test_inputs_are_untouched() {
    let mapper = PropertyMapper::new(BASIC.to_vec());
    let entity = json!({ "name": "A" });
    let base = base_model();

    let model = mapper.to_store(&entity, &base);

    assert_eq!(base, base_model());
    assert_eq!(entity, json!({ "name": "A" }));
    assert_eq!(model["item"]["title"], json!("A"));
}

#[test]
fn test_null_and_missing_sources_are_skipped() {
    let mapper = PropertyMapper::new(BASIC.to_vec());
    let model = mapper.to_store(&json!({ "name": null }), &base_model());
    assert_eq!(model["item"]["title"], json!("Untitled"));
}

#[test]
fn test_later_entry_wins_on_overlap() {
    let mapper = PropertyMapper::new(vec![
        PropertyMapEntry::new("name", "item.title"),
        PropertyMapEntry::new("summary", "item.title"),
    ]);
    let model = mapper.to_store(&json!({ "name": "A", "summary": "S" }), &base_model());
    assert_eq!(model["item"]["title"], json!("S"));
}

#[test]
fn test_entity_side_base_supplies_defaults() {
    let mapper = PropertyMapper::new(BASIC.to_vec());
    let entity = mapper.to_entity(&base_model(), &json!({ "name": "fallback", "family": "project" }));
    assert_eq!(entity, json!({ "name": "Untitled", "family": "project" }));
}

#[test]
fn test_nested_paths_create_containers() {
    let mapper = PropertyMapper::new(vec![PropertyMapEntry::new(
        "featuredContentIds",
        "data.view.featuredContentIds",
    )]);
    let model = mapper.to_store(&json!({ "featuredContentIds": ["a", "b"] }), &json!({}));
    assert_eq!(model, json!({ "data": { "view": { "featuredContentIds": ["a", "b"] } } }));
}

#[test]
fn test_transforms_apply_per_direction() {
    let mapper = PropertyMapper::new(vec![
        PropertyMapEntry::new("createdDate", "item.created").transformed(iso_to_epoch, epoch_to_iso),
    ]);

    let entity = mapper.to_entity(&json!({ "item": { "created": 0 } }), &json!({}));
    assert_eq!(entity, json!({ "createdDate": "1970-01-01T00:00:00.000Z" }));

    let model = mapper.to_store(&json!({ "createdDate": "1970-01-01T00:00:01Z" }), &json!({}));
    assert_eq!(model, json!({ "item": { "created": 1000 } }));
}

#[test]
fn test_declined_transform_skips_field() {
    let mapper = PropertyMapper::new(vec![
        PropertyMapEntry::new("createdDate", "item.created").transformed(iso_to_epoch, epoch_to_iso),
    ]);
    let base = json!({ "item": { "created": 5 } });
    assert_eq!(mapper.to_store(&json!({ "createdDate": "not a date" }), &base), base);
}

#[test]
fn test_from_tables_concatenates_in_order() {
    const EXTRA: &[PropertyMapEntry] = &[PropertyMapEntry::new("status", "data.status")];
    let mapper = PropertyMapper::from_tables(&[BASIC, EXTRA]);
    let paths: Vec<&str> = mapper.entries().iter().map(|entry| entry.entity_path).collect();
    assert_eq!(paths, vec!["name", "description", "status"]);
}

#[test]
fn test_typed_projection_through_model() {
    let mapper = PropertyMapper::new(BASIC.to_vec());
    let base = Model::from_item(Item::new("", "Hub Project"));

    let model = mapper.to_model(&json!({ "name": "Parks plan" }), &base).unwrap();
    assert_eq!(model.item.title, "Parks plan");
    assert_eq!(model.item.item_type, "Hub Project");

    let entity: Value = mapper.model_to_entity(&model).unwrap();
    assert_eq!(entity, json!({ "name": "Parks plan" }));
}
