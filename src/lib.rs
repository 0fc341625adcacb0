pub mod api;
pub mod config;
pub mod domain;
pub mod utils;

pub use api::ApiClient;
pub use config::{Cli, Settings};
pub use domain::{parse_entity, Collection, CollectionRef, Entity, Link, LinkType, NewLink, Tag};
pub use utils::error::{LinkdockError, Result};
