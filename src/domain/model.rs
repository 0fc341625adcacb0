use crate::utils::error::{LinkdockError, Result};
use crate::utils::validation::{validate_max_chars, Validate};
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// Maximum length, in characters, the service accepts for free-text fields
/// on the write path.
pub const MAX_TEXT_CHARS: usize = 2048;

fn parse_model<T: DeserializeOwned>(kind: &str, value: &Value) -> Result<T> {
    serde_json::from_value(value.clone()).map_err(|e| LinkdockError::ValidationError {
        field: kind.to_string(),
        message: e.to_string(),
    })
}

// `pinnedBy` may be absent or null on the wire; both mean "no pins".
fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<Vec<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let pins = Option::<Vec<i64>>::deserialize(deserializer)?;
    Ok(pins.unwrap_or_default())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkType {
    Url,
    Pdf,
    Image,
}

impl LinkType {
    pub fn as_str(&self) -> &'static str {
        match self {
            LinkType::Url => "url",
            LinkType::Pdf => "pdf",
            LinkType::Image => "image",
        }
    }
}

impl fmt::Display for LinkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LinkType {
    type Err = LinkdockError;

    fn from_str(value: &str) -> Result<Self> {
        match value {
            "url" => Ok(LinkType::Url),
            "pdf" => Ok(LinkType::Pdf),
            "image" => Ok(LinkType::Image),
            other => Err(LinkdockError::ValidationError {
                field: "type".to_string(),
                message: format!("'{}' is not one of: url, pdf, image", other),
            }),
        }
    }
}

/// A label attached to links. Owned by the service, read-only here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    pub id: i64,
    pub name: String,
    pub owner_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Tag {
    pub fn parse(value: &Value) -> Result<Self> {
        parse_model("tag", value)
    }
}

/// A named grouping of links. `parent_id` is an id lookup, not a containment
/// pointer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Collection {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub icon: Option<String>,
    pub icon_weight: Option<String>,
    pub color: Option<String>,
    pub parent_id: Option<i64>,
    pub is_public: bool,
    pub owner_id: i64,
    pub created_by_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Collection {
    pub fn parse(value: &Value) -> Result<Self> {
        parse_model("collection", value)
    }
}

/// A saved bookmark as the service returns it: the full `Collection` and
/// `Tag` objects come embedded, not as bare ids.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Link {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub link_type: LinkType,
    pub description: String,
    pub created_by_id: i64,
    pub collection_id: i64,
    pub icon: Option<String>,
    pub icon_weight: Option<String>,
    pub color: Option<String>,
    pub url: String,
    pub text_content: Option<String>,
    pub preview: Option<String>,
    pub image: Option<String>,
    pub pdf: Option<String>,
    pub readable: Option<String>,
    pub monolith: Option<String>,
    pub last_preserved: Option<DateTime<Utc>>,
    pub import_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub tags: Vec<Tag>,
    pub collection: Collection,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub pinned_by: Vec<i64>,
    pub ai_tagged: Option<bool>,
}

impl Link {
    pub fn parse(value: &Value) -> Result<Self> {
        parse_model("link", value)
    }

    /// Render the link for terminal output. Tier 0 is the one-line summary,
    /// tier 1 adds the description, tier 2 and above dump every field.
    pub fn render(&self, verbosity: u8) -> String {
        let summary = format!(
            "ID: {} | Name: {} | URL: {} | Collection: {} | Created By: {}",
            self.id, self.name, self.url, self.collection_id, self.created_by_id
        );
        match verbosity {
            0 => summary,
            1 => format!("{} | Description: {}", summary, self.description),
            _ => serde_json::to_string_pretty(self).unwrap_or(summary),
        }
    }
}

/// The collection slot of a [`NewLink`]: either a full collection fetched
/// from the service, or a bare mapping such as `{"id": 3}`. Defaults to the
/// empty mapping, which the service treats as "no collection chosen".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CollectionRef {
    Full(Collection),
    Partial(serde_json::Map<String, Value>),
}

impl CollectionRef {
    pub fn by_id(id: i64) -> Self {
        let mut fields = serde_json::Map::new();
        fields.insert("id".to_string(), Value::from(id));
        CollectionRef::Partial(fields)
    }
}

impl Default for CollectionRef {
    fn default() -> Self {
        CollectionRef::Partial(serde_json::Map::new())
    }
}

/// Write model for creating a link. The service assigns ids and timestamps,
/// so this carries only the caller-supplied fields; unset ones are omitted
/// from the serialized body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewLink {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub link_type: Option<LinkType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
    #[serde(default)]
    pub collection: CollectionRef,
}

impl NewLink {
    pub fn new(
        name: Option<String>,
        url: Option<String>,
        link_type: Option<LinkType>,
        description: Option<String>,
    ) -> Result<Self> {
        let link = NewLink {
            name,
            url,
            link_type,
            description,
            tags: None,
            collection: CollectionRef::default(),
        };
        link.validate()?;
        Ok(link)
    }

    pub fn with_tags(mut self, tags: Vec<Tag>) -> Self {
        self.tags = Some(tags);
        self
    }

    pub fn with_collection(mut self, collection: CollectionRef) -> Self {
        self.collection = collection;
        self
    }
}

impl Validate for NewLink {
    fn validate(&self) -> Result<()> {
        if let Some(name) = &self.name {
            validate_max_chars("name", name, MAX_TEXT_CHARS)?;
        }
        if let Some(url) = &self.url {
            validate_max_chars("url", url, MAX_TEXT_CHARS)?;
        }
        if let Some(description) = &self.description {
            validate_max_chars("description", description, MAX_TEXT_CHARS)?;
        }
        Ok(())
    }
}
