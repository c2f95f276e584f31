use crate::QueryType;
use crate::field::FieldClass;

/// Common surface of every query-fields container.
pub trait QueryFieldsTrait: Sized {
    /// The [`FieldClass`] every field handed out by this container is owned
    /// by.
    fn field_class() -> FieldClass;

    /// Define every field of this container's schema type for use in
    /// queries of type `query_type`.
    fn new(query_type: QueryType) -> Self;

    /// The [`QueryType`] this container's fields are scoped to.
    fn query_type(&self) -> QueryType;
}
