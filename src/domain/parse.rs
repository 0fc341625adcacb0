use crate::domain::model::{Collection, Link, Tag};
use crate::utils::error::{LinkdockError, Result};
use serde_json::Value;

/// A service payload resolved to a concrete model.
#[derive(Debug, Clone, PartialEq)]
pub enum Entity {
    Tag(Tag),
    Collection(Collection),
    Link(Link),
}

type EntityParser = fn(&Value) -> Option<Entity>;

// Trial order is fixed; when shapes overlap the earlier entry wins. Call
// sites that know the expected shape should use the model's own `parse`.
const PARSERS: &[EntityParser] = &[parse_as_tag, parse_as_collection, parse_as_link];

fn parse_as_tag(value: &Value) -> Option<Entity> {
    Tag::parse(value).ok().map(Entity::Tag)
}

fn parse_as_collection(value: &Value) -> Option<Entity> {
    Collection::parse(value).ok().map(Entity::Collection)
}

fn parse_as_link(value: &Value) -> Option<Entity> {
    Link::parse(value).ok().map(Entity::Link)
}

/// Resolve a payload of unknown kind by structural fit. The service does not
/// tag payloads with a type discriminator, so each known model is tried in
/// declaration order and the first full match is returned.
pub fn parse_entity(value: &Value) -> Result<Entity> {
    for parser in PARSERS {
        if let Some(entity) = parser(value) {
            return Ok(entity);
        }
    }
    Err(LinkdockError::UnrecognizedPayload)
}
