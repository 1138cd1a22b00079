//! Property maps as the API serves them, one entry per discriminator.

use notion_typed::{decode_properties, AppError, Property, PropertyType};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

fn database_schema() -> Value {
    json!({
        "Name": {"id": "title", "type": "title", "title": {}},
        "Description": {"id": "J@cS", "type": "rich_text", "rich_text": {}},
        "Price": {"id": "evWq", "type": "number", "number": {"format": "dollar"}},
        "Food group": {"id": "TJmr", "type": "select", "select": {"options": [
            {"id": "96eb622f-4b88-4283-919d-ece2fbed3841", "name": "Vegetable", "color": "purple"}
        ]}},
        "Store availability": {"id": "flsb", "type": "multi_select", "multi_select": {"options": []}},
        "Last ordered": {"id": "Jsfb", "type": "date", "date": {}},
        "Buyer": {"id": "bAGe", "type": "people", "people": {}},
        "Photo": {"id": "yfiK", "type": "files", "files": {}},
        "In stock": {"id": "dqFr", "type": "checkbox", "checkbox": {}},
        "Recipe": {"id": "rUwO", "type": "url", "url": {}},
        "Supplier email": {"id": "tZvy", "type": "email", "email": {}},
        "Supplier phone": {"id": "tQhl", "type": "phone_number", "phone_number": {}},
        "Cost of next trip": {"id": "WOd%3B", "type": "formula", "formula": {"expression": "prop(\"Price\")"}},
        "Related stores": {"id": "Sz%3Ai", "type": "relation", "relation": {
            "database_id": "0c1f7cb2-8090-4f18-924e-d92965055e32",
            "synced_property_name": "Grocery items",
            "synced_property_id": "iYZO"
        }},
        "Total spent": {"id": "b%3DuA", "type": "rollup", "rollup": {
            "relation_property_name": "Related stores",
            "relation_property_id": "Sz%3Ai",
            "rollup_property_name": "Price",
            "rollup_property_id": "evWq",
            "function": "sum"
        }},
        "Added": {"id": "Ka9m", "type": "created_time", "created_time": {}},
        "Added by": {"id": "Rk2d", "type": "created_by", "created_by": {}},
        "Updated": {"id": "Pq7x", "type": "last_edited_time", "last_edited_time": {}},
        "Updated by": {"id": "Lm3v", "type": "last_edited_by", "last_edited_by": {}}
    })
}

#[test]
fn test_every_discriminator_decodes_to_its_variant() {
    let raw = database_schema();
    let properties = decode_properties(raw.as_object().unwrap()).unwrap();

    assert_eq!(properties.len(), PropertyType::ALL.len());
    for (name, entry) in raw.as_object().unwrap() {
        let expected: PropertyType = entry["type"].as_str().unwrap().parse().unwrap();
        let decoded = &properties[name];
        assert_eq!(decoded.property_type(), expected, "property '{}'", name);
        assert_eq!(decoded.id(), entry["id"].as_str().unwrap());
    }

    let mut seen: Vec<PropertyType> = properties.values().map(Property::property_type).collect();
    seen.sort_by_key(|kind| kind.as_str());
    let mut all = PropertyType::ALL.to_vec();
    all.sort_by_key(|kind| kind.as_str());
    assert_eq!(seen, all);
}

#[test]
fn test_schema_configs_survive_decoding() {
    let raw = database_schema();
    let properties = decode_properties(raw.as_object().unwrap()).unwrap();

    match &properties["Related stores"] {
        Property::Relation(relation) => {
            let config = relation.relation.as_ref().unwrap();
            assert_eq!(config.database_id, "0c1f7cb2-8090-4f18-924e-d92965055e32");
            assert_eq!(config.synced_property_name, "Grocery items");
        }
        other => panic!("expected relation, got {:?}", other),
    }
    match &properties["Total spent"] {
        Property::Rollup(rollup) => {
            assert_eq!(rollup.rollup.as_ref().map(|r| r.function.as_str()), Some("sum"));
        }
        other => panic!("expected rollup, got {:?}", other),
    }
    match &properties["Food group"] {
        Property::Select(select) => assert_eq!(select.options[0].name, "Vegetable"),
        other => panic!("expected select, got {:?}", other),
    }
}

#[test]
fn test_unknown_discriminator_aborts_the_map() {
    let raw = json!({
        "Name": {"id": "title", "type": "title", "title": []},
        "Status": {"id": "s", "type": "status", "status": {}}
    });

    match decode_properties(raw.as_object().unwrap()) {
        Err(AppError::UnsupportedPropertyType(kind)) => assert_eq!(kind, "status"),
        other => panic!("expected UnsupportedPropertyType, got {:?}", other),
    }
}

#[test]
fn test_entries_without_type_are_omitted() {
    let raw = json!({
        "Name": {"id": "title", "type": "title", "title": []},
        "Legacy": {"id": "x"}
    });
    let properties = decode_properties(raw.as_object().unwrap()).unwrap();

    assert_eq!(properties.len(), 1);
    assert!(properties.contains_key("Name"));
}
