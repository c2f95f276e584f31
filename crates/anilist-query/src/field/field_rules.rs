use crate::QueryType;
use indexmap::IndexSet;

/// Per-field policy: whether the field must be given arguments and which
/// [`QueryType`]s may contain it.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldRules {
    allowed_query_types: IndexSet<QueryType>,
    requires_arguments: bool,
}
impl FieldRules {
    pub fn new(
        requires_arguments: bool,
        allowed_query_types: impl IntoIterator<Item = QueryType>,
    ) -> Self {
        Self {
            allowed_query_types: allowed_query_types.into_iter().collect(),
            requires_arguments,
        }
    }

    pub fn allowed_query_types(&self) -> &IndexSet<QueryType> {
        &self.allowed_query_types
    }

    pub fn allows(&self, query_type: QueryType) -> bool {
        self.allowed_query_types.contains(&query_type)
    }

    pub fn requires_arguments(&self) -> bool {
        self.requires_arguments
    }
}
