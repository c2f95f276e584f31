//! Query-fields containers: one per schema type, with one accessor per
//! schema field.
//!
//! Each container is created for a single [`QueryType`] and eagerly defines
//! every field of its schema type for that query type. Leaf accessors return
//! the field as-is; branch accessors validate the child fields (and
//! arguments) they are given before returning a new field with them
//! attached.
//!
//! [`QueryType`]: crate::QueryType

mod character_connection_query_fields;
mod character_edge_query_fields;
mod character_query_fields;
mod field_slot;
mod media_query_fields;
mod page_info_query_fields;
mod query_fields_trait;
mod staff_query_fields;
mod studio_connection_query_fields;
mod studio_edge_query_fields;
mod studio_query_fields;
mod user_query_fields;

pub use character_connection_query_fields::CharacterConnectionQueryFields;
pub use character_edge_query_fields::CharacterEdgeQueryFields;
pub use character_query_fields::CharacterQueryFields;
use field_slot::FieldSlot;
pub use media_query_fields::MediaQueryFields;
pub use page_info_query_fields::PageInfoQueryFields;
pub use query_fields_trait::QueryFieldsTrait;
pub use staff_query_fields::StaffQueryFields;
pub use studio_connection_query_fields::StudioConnectionQueryFields;
pub use studio_edge_query_fields::StudioEdgeQueryFields;
pub use studio_query_fields::StudioQueryFields;
pub use user_query_fields::UserQueryFields;

#[cfg(test)]
mod tests;
