//! Integration tests for the property mapper's public contract.

use hub_entities::mapper::dates::{from_date_with_precision, to_date_with_precision};
use hub_entities::{PropertyMapEntry, PropertyMapper};
use serde_json::json;

fn mapper() -> PropertyMapper {
    PropertyMapper::new(vec![
        PropertyMapEntry::new("name", "item.title"),
        PropertyMapEntry::new("description", "item.description"),
        PropertyMapEntry::new("publishedDate", "item.properties.publishedDate")
            .transformed(from_date_with_precision, to_date_with_precision),
    ])
}

#[test]
fn test_to_entity_after_to_store_is_identity_on_mapped_fields() {
    let base_model = json!({ "item": { "type": "Hub Project" }, "data": {} });
    let entity = json!({ "name": "A", "description": "B" });

    let model = mapper().to_store(&entity, &base_model);
    let back = mapper().to_entity(&model, &json!({}));

    assert_eq!(back, entity);
}

#[test]
fn test_empty_entity_overrides_nothing() {
    let base_model = json!({ "item": { "type": "Hub Project", "title": "T" }, "data": { "x": 1 } });
    assert_eq!(mapper().to_store(&json!({}), &base_model), base_model);
}

#[test]
fn test_published_date_round_trips_through_precision() {
    let model = json!({ "item": { "properties": { "publishedDate": "2022-05" } } });

    let entity = mapper().to_entity(&model, &json!({}));
    assert_eq!(entity["publishedDate"]["precision"], json!("month"));

    let stored = mapper().to_store(&entity, &json!({}));
    assert_eq!(stored, model);
}

#[test]
fn test_renaming_leaves_stored_published_date_untouched() {
    for stored_date in ["2021-06-15T10:30:00.250Z", "2021-06-15 10:30", "June 15, 2021"] {
        let model = json!({
            "item": { "title": "Old", "properties": { "publishedDate": stored_date } },
            "data": {}
        });

        let mut entity = mapper().to_entity(&model, &json!({}));
        entity["name"] = json!("New");
        let stored = mapper().to_store(&entity, &model);

        assert_eq!(stored["item"]["title"], json!("New"));
        assert_eq!(stored["item"]["properties"]["publishedDate"], json!(stored_date));
    }
}
