//! Discriminator-driven decoding of property maps.
//!
//! Each property object names its variant in `type`. The variant payload is
//! read from the object nested under that same key (`"select": {"options":
//! [...]}`); when there is no nested object the fields are read from the
//! property object itself.

use super::property::*;
use super::rich_text::decode_rich_text_list;
use super::wire::{self, Object};
use crate::error::AppError;
use serde_json::Value;
use std::collections::HashMap;

/// Decodes a `properties` object into typed properties keyed by name.
///
/// Entries without a `type` are skipped. An unknown discriminator fails the
/// whole map with `UnsupportedPropertyType`; no partial result is returned.
pub fn decode_properties(raw: &Object) -> Result<HashMap<String, Property>, AppError> {
    let mut properties = HashMap::with_capacity(raw.len());

    for (name, value) in raw {
        let Some(obj) = value.as_object() else {
            log::debug!("Skipping property '{}': not an object", name);
            continue;
        };
        if !obj.contains_key("type") {
            log::debug!("Skipping property '{}': no type discriminator", name);
            continue;
        }

        properties.insert(name.clone(), decode_property(obj)?);
    }

    Ok(properties)
}

/// Decodes a single property object carrying a `type` discriminator.
pub fn decode_property(obj: &Object) -> Result<Property, AppError> {
    let kind: PropertyType = wire::required_str(obj, "type")?.parse()?;
    let id = wire::optional_str(obj, "id")?.unwrap_or_default();
    let payload = payload(obj, kind);

    let property = match kind {
        PropertyType::Title => match obj.get("title") {
            Some(Value::Object(_)) => Property::DatabaseTitle(DatabaseTitleProperty {
                id,
                title: wire::opaque(obj, "title"),
            }),
            title => Property::PageTitle(PageTitleProperty {
                id,
                title: decode_rich_text_list(title)?,
            }),
        },
        PropertyType::RichText => Property::RichText(RichTextProperty {
            id,
            // Database schemas describe a text column as `"rich_text": {}`.
            rich_text: match obj.get("rich_text") {
                Some(Value::Object(_)) => Vec::new(),
                spans => decode_rich_text_list(spans)?,
            },
        }),
        PropertyType::Number => Property::Number(NumberProperty {
            id,
            format: wire::optional_str(payload, "format")?,
        }),
        PropertyType::Select => Property::Select(SelectProperty {
            id,
            options: decode_options(payload)?,
        }),
        PropertyType::MultiSelect => Property::MultiSelect(MultiSelectProperty {
            id,
            options: decode_options(payload)?,
        }),
        PropertyType::Formula => Property::Formula(FormulaProperty {
            id,
            expression: wire::optional_str(payload, "expression")?,
        }),
        PropertyType::Relation => Property::Relation(RelationProperty {
            id,
            relation: decode_config(payload, &["database_id"])?,
        }),
        PropertyType::Rollup => Property::Rollup(RollupProperty {
            id,
            rollup: decode_config(
                payload,
                &[
                    "relation_property_name",
                    "relation_property_id",
                    "rollup_property_name",
                    "rollup_property_id",
                    "function",
                ],
            )?,
        }),
        PropertyType::Date => Property::Date(DateProperty {
            id,
            date: wire::opaque(obj, "date"),
        }),
        PropertyType::People => Property::People(PeopleProperty {
            id,
            people: wire::opaque(obj, "people"),
        }),
        PropertyType::Files => Property::Files(FilesProperty {
            id,
            files: wire::opaque(obj, "files"),
        }),
        PropertyType::Checkbox => Property::Checkbox(CheckboxProperty {
            id,
            checkbox: wire::opaque(obj, "checkbox"),
        }),
        PropertyType::Url => Property::Url(UrlProperty {
            id,
            url: wire::opaque(obj, "url"),
        }),
        PropertyType::Email => Property::Email(EmailProperty {
            id,
            email: wire::opaque(obj, "email"),
        }),
        PropertyType::PhoneNumber => Property::PhoneNumber(PhoneNumberProperty {
            id,
            phone_number: wire::opaque(obj, "phone_number"),
        }),
        PropertyType::CreatedTime => Property::CreatedTime(CreatedTimeProperty {
            id,
            created_time: wire::opaque(obj, "created_time"),
        }),
        PropertyType::CreatedBy => Property::CreatedBy(CreatedByProperty {
            id,
            created_by: wire::opaque(obj, "created_by"),
        }),
        PropertyType::LastEditedTime => Property::LastEditedTime(LastEditedTimeProperty {
            id,
            last_edited_time: wire::opaque(obj, "last_edited_time"),
        }),
        PropertyType::LastEditedBy => Property::LastEditedBy(LastEditedByProperty {
            id,
            last_edited_by: wire::opaque(obj, "last_edited_by"),
        }),
    };

    Ok(property)
}

/// The object holding the variant's fields.
fn payload(obj: &Object, kind: PropertyType) -> &Object {
    wire::nested(obj, kind.as_str()).unwrap_or(obj)
}

fn decode_options(payload: &Object) -> Result<Vec<SelectOption>, AppError> {
    match payload.get("options") {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(options) => Ok(serde_json::from_value(options.clone())?),
    }
}

/// Decodes a relation/rollup configuration, or `None` when the payload
/// carries none of its fields (page values, empty schema objects).
fn decode_config<T>(payload: &Object, keys: &[&str]) -> Result<Option<T>, AppError>
where
    T: serde::de::DeserializeOwned,
{
    if !keys.iter().any(|key| payload.contains_key(*key)) {
        return Ok(None);
    }
    let fields: Object = payload
        .iter()
        .filter(|(_, v)| !v.is_null())
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect();
    Ok(Some(serde_json::from_value(Value::Object(fields))?))
}
