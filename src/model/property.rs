use super::rich_text::{encode_rich_text_list, RichText};
use crate::error::AppError;
use crate::types::{Color, OpaqueValue};
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{json, Value};
use std::fmt;
use std::str::FromStr;

/// The `type` discriminators a property object may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyType {
    Title,
    RichText,
    Number,
    Select,
    MultiSelect,
    Date,
    People,
    Files,
    Checkbox,
    Url,
    Email,
    PhoneNumber,
    Formula,
    Relation,
    Rollup,
    CreatedTime,
    CreatedBy,
    LastEditedTime,
    LastEditedBy,
}

impl PropertyType {
    /// Every supported discriminator, in API documentation order.
    pub const ALL: [PropertyType; 19] = [
        PropertyType::Title,
        PropertyType::RichText,
        PropertyType::Number,
        PropertyType::Select,
        PropertyType::MultiSelect,
        PropertyType::Date,
        PropertyType::People,
        PropertyType::Files,
        PropertyType::Checkbox,
        PropertyType::Url,
        PropertyType::Email,
        PropertyType::PhoneNumber,
        PropertyType::Formula,
        PropertyType::Relation,
        PropertyType::Rollup,
        PropertyType::CreatedTime,
        PropertyType::CreatedBy,
        PropertyType::LastEditedTime,
        PropertyType::LastEditedBy,
    ];

    /// Wire name; also the key the variant payload is nested under.
    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyType::Title => "title",
            PropertyType::RichText => "rich_text",
            PropertyType::Number => "number",
            PropertyType::Select => "select",
            PropertyType::MultiSelect => "multi_select",
            PropertyType::Date => "date",
            PropertyType::People => "people",
            PropertyType::Files => "files",
            PropertyType::Checkbox => "checkbox",
            PropertyType::Url => "url",
            PropertyType::Email => "email",
            PropertyType::PhoneNumber => "phone_number",
            PropertyType::Formula => "formula",
            PropertyType::Relation => "relation",
            PropertyType::Rollup => "rollup",
            PropertyType::CreatedTime => "created_time",
            PropertyType::CreatedBy => "created_by",
            PropertyType::LastEditedTime => "last_edited_time",
            PropertyType::LastEditedBy => "last_edited_by",
        }
    }
}

impl FromStr for PropertyType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PropertyType::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| AppError::UnsupportedPropertyType(s.to_string()))
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Select and multi-select option
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub color: Color,
}

/// Relation configuration of a database property.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Relation {
    pub database_id: String,
    pub synced_property_name: String,
    pub synced_property_id: String,
}

/// Rollup configuration of a database property.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Rollup {
    pub relation_property_name: String,
    pub relation_property_id: String,
    pub rollup_property_name: String,
    pub rollup_property_id: String,
    pub function: String,
}

/// Title property whose `title` is a list of spans (page properties).
#[derive(Debug, Clone, PartialEq)]
pub struct PageTitleProperty {
    pub id: String,
    pub title: Vec<RichText>,
}

/// Title property whose `title` is a single nested object (database schemas).
#[derive(Debug, Clone, PartialEq)]
pub struct DatabaseTitleProperty {
    pub id: String,
    pub title: OpaqueValue,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RichTextProperty {
    pub id: String,
    pub rich_text: Vec<RichText>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NumberProperty {
    pub id: String,
    pub format: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SelectProperty {
    pub id: String,
    pub options: Vec<SelectOption>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MultiSelectProperty {
    pub id: String,
    pub options: Vec<SelectOption>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormulaProperty {
    pub id: String,
    pub expression: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RelationProperty {
    pub id: String,
    pub relation: Option<Relation>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RollupProperty {
    pub id: String,
    pub rollup: Option<Rollup>,
}

/// Declares a property whose payload is kept opaque under the given field.
macro_rules! opaque_property {
    ($(#[$doc:meta])* $name:ident, $field:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq)]
        pub struct $name {
            pub id: String,
            pub $field: OpaqueValue,
        }
    };
}

opaque_property!(DateProperty, date);
opaque_property!(PeopleProperty, people);
opaque_property!(FilesProperty, files);
opaque_property!(CheckboxProperty, checkbox);
opaque_property!(UrlProperty, url);
opaque_property!(EmailProperty, email);
opaque_property!(PhoneNumberProperty, phone_number);
opaque_property!(CreatedTimeProperty, created_time);
opaque_property!(CreatedByProperty, created_by);
opaque_property!(LastEditedTimeProperty, last_edited_time);
opaque_property!(LastEditedByProperty, last_edited_by);

/// A decoded property, one variant per discriminator.
///
/// `title` is the one discriminator with two variants: the API reuses it
/// for page values (a span list) and database schemas (a nested object).
#[derive(Debug, Clone, PartialEq)]
pub enum Property {
    PageTitle(PageTitleProperty),
    DatabaseTitle(DatabaseTitleProperty),
    RichText(RichTextProperty),
    Number(NumberProperty),
    Select(SelectProperty),
    MultiSelect(MultiSelectProperty),
    Date(DateProperty),
    People(PeopleProperty),
    Files(FilesProperty),
    Checkbox(CheckboxProperty),
    Url(UrlProperty),
    Email(EmailProperty),
    PhoneNumber(PhoneNumberProperty),
    Formula(FormulaProperty),
    Relation(RelationProperty),
    Rollup(RollupProperty),
    CreatedTime(CreatedTimeProperty),
    CreatedBy(CreatedByProperty),
    LastEditedTime(LastEditedTimeProperty),
    LastEditedBy(LastEditedByProperty),
}

macro_rules! match_all_properties {
    ($self:expr, $p:ident => $result:expr) => {
        match $self {
            Property::PageTitle($p) => $result,
            Property::DatabaseTitle($p) => $result,
            Property::RichText($p) => $result,
            Property::Number($p) => $result,
            Property::Select($p) => $result,
            Property::MultiSelect($p) => $result,
            Property::Date($p) => $result,
            Property::People($p) => $result,
            Property::Files($p) => $result,
            Property::Checkbox($p) => $result,
            Property::Url($p) => $result,
            Property::Email($p) => $result,
            Property::PhoneNumber($p) => $result,
            Property::Formula($p) => $result,
            Property::Relation($p) => $result,
            Property::Rollup($p) => $result,
            Property::CreatedTime($p) => $result,
            Property::CreatedBy($p) => $result,
            Property::LastEditedTime($p) => $result,
            Property::LastEditedBy($p) => $result,
        }
    };
}

impl Property {
    /// The discriminator that selected this variant.
    pub fn property_type(&self) -> PropertyType {
        match self {
            Property::PageTitle(_) | Property::DatabaseTitle(_) => PropertyType::Title,
            Property::RichText(_) => PropertyType::RichText,
            Property::Number(_) => PropertyType::Number,
            Property::Select(_) => PropertyType::Select,
            Property::MultiSelect(_) => PropertyType::MultiSelect,
            Property::Date(_) => PropertyType::Date,
            Property::People(_) => PropertyType::People,
            Property::Files(_) => PropertyType::Files,
            Property::Checkbox(_) => PropertyType::Checkbox,
            Property::Url(_) => PropertyType::Url,
            Property::Email(_) => PropertyType::Email,
            Property::PhoneNumber(_) => PropertyType::PhoneNumber,
            Property::Formula(_) => PropertyType::Formula,
            Property::Relation(_) => PropertyType::Relation,
            Property::Rollup(_) => PropertyType::Rollup,
            Property::CreatedTime(_) => PropertyType::CreatedTime,
            Property::CreatedBy(_) => PropertyType::CreatedBy,
            Property::LastEditedTime(_) => PropertyType::LastEditedTime,
            Property::LastEditedBy(_) => PropertyType::LastEditedBy,
        }
    }

    pub fn id(&self) -> &str {
        match_all_properties!(self, p => &p.id)
    }

    /// Encodes the property in the API's nested wire shape
    /// (`{"id", "type", "<type>": payload}`).
    pub fn to_json(&self) -> Value {
        let payload = match self {
            Property::PageTitle(p) => encode_rich_text_list(&p.title),
            Property::DatabaseTitle(p) => p.title.to_json(),
            Property::RichText(p) => encode_rich_text_list(&p.rich_text),
            Property::Number(p) => match &p.format {
                Some(format) => json!({ "format": format }),
                None => json!({}),
            },
            Property::Select(p) => json!({ "options": p.options }),
            Property::MultiSelect(p) => json!({ "options": p.options }),
            Property::Formula(p) => match &p.expression {
                Some(expression) => json!({ "expression": expression }),
                None => json!({}),
            },
            Property::Relation(p) => p
                .relation
                .as_ref()
                .map_or_else(|| json!({}), |r| json!(r)),
            Property::Rollup(p) => p.rollup.as_ref().map_or_else(|| json!({}), |r| json!(r)),
            Property::Date(p) => p.date.to_json(),
            Property::People(p) => p.people.to_json(),
            Property::Files(p) => p.files.to_json(),
            Property::Checkbox(p) => p.checkbox.to_json(),
            Property::Url(p) => p.url.to_json(),
            Property::Email(p) => p.email.to_json(),
            Property::PhoneNumber(p) => p.phone_number.to_json(),
            Property::CreatedTime(p) => p.created_time.to_json(),
            Property::CreatedBy(p) => p.created_by.to_json(),
            Property::LastEditedTime(p) => p.last_edited_time.to_json(),
            Property::LastEditedBy(p) => p.last_edited_by.to_json(),
        };

        let kind = self.property_type().as_str();
        let mut obj = json!({ "id": self.id(), "type": kind });
        obj[kind] = payload;
        obj
    }
}

impl Serialize for Property {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}
