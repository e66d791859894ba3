pub mod entity_kind;

pub use entity_kind::{DeletableEntity, EntityKind, MutationMode, StatusEntity, UnknownEntityKind};
