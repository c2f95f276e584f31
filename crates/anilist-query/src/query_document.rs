use crate::QueryType;
use serde::Serialize;

/// A rendered AniList query, ready to be sent to the API.
///
/// Serializes to the body of a GraphQL-over-HTTP request:
///
/// ```json
/// { "operationName": "MediaQuery", "query": "query MediaQuery { ... }" }
/// ```
///
/// `operationName` is omitted when the query was not given a name.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct QueryDocument {
    #[serde(rename = "operationName", skip_serializing_if = "Option::is_none")]
    pub(crate) operation_name: Option<String>,
    pub(crate) query: String,
    #[serde(skip)]
    pub(crate) query_type: QueryType,
}
impl QueryDocument {
    /// Consume this [`QueryDocument`] to produce the query text.
    pub fn into_query(self) -> String {
        self.query
    }

    pub fn operation_name(&self) -> Option<&str> {
        self.operation_name.as_deref()
    }

    /// The rendered query text.
    pub fn query(&self) -> &str {
        self.query.as_str()
    }

    pub fn query_type(&self) -> QueryType {
        self.query_type
    }
}
impl std::fmt::Display for QueryDocument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.query)
    }
}
