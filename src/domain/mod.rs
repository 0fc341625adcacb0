pub mod model;
pub mod parse;
pub mod ports;

pub use model::{Collection, CollectionRef, Link, LinkType, NewLink, Tag};
pub use parse::{parse_entity, Entity};
pub use ports::CredentialsProvider;
