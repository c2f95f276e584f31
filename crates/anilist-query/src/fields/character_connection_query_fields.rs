use crate::QueryType;
use crate::Result;
use crate::field::FieldClass;
use crate::field::FieldRules;
use crate::field::GraphQueryField;
use crate::fields::FieldSlot;
use crate::fields::QueryFieldsTrait;
use inherent::inherent;

const ALLOWED_QUERY_TYPES: [QueryType; 3] = [
    QueryType::Media,
    QueryType::Staff,
    QueryType::User,
];

/// All available character connection query fields.
#[derive(Clone, Debug, PartialEq)]
pub struct CharacterConnectionQueryFields {
    edges: FieldSlot,
    nodes: FieldSlot,
    page_info: FieldSlot,
    query_type: QueryType,
}

#[inherent]
impl QueryFieldsTrait for CharacterConnectionQueryFields {
    pub fn field_class() -> FieldClass {
        FieldClass::CharacterConnection
    }

    pub fn new(query_type: QueryType) -> Self {
        let field = |name| FieldSlot::new(
            name,
            FieldClass::CharacterConnection,
            query_type,
            FieldRules::new(false, ALLOWED_QUERY_TYPES),
        );

        Self {
            edges: field("edges").accepting(FieldClass::CharacterEdge),
            nodes: field("nodes").accepting(FieldClass::Character),
            page_info: field("pageInfo").accepting(FieldClass::PageInfo),
            query_type,
        }
    }

    pub fn query_type(&self) -> QueryType {
        self.query_type
    }
}

impl CharacterConnectionQueryFields {
    /// Requires at least one character edge query field (see
    /// [`CharacterEdgeQueryFields`](crate::fields::CharacterEdgeQueryFields)).
    pub fn edges(&self, fields: Vec<GraphQueryField>) -> Result<GraphQueryField> {
        self.edges.bind(fields, vec![])
    }

    /// Requires at least one character query field (see
    /// [`CharacterQueryFields`](crate::fields::CharacterQueryFields)).
    pub fn nodes(&self, fields: Vec<GraphQueryField>) -> Result<GraphQueryField> {
        self.nodes.bind(fields, vec![])
    }

    /// The pagination information.
    pub fn page_info(&self, fields: Vec<GraphQueryField>) -> Result<GraphQueryField> {
        self.page_info.bind(fields, vec![])
    }
}
