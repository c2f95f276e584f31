use crate::QueryType;
use crate::Result;
use crate::field::FieldClass;
use crate::field::FieldRules;
use crate::field::GraphQueryField;
use crate::fields::FieldSlot;
use crate::fields::QueryFieldsTrait;
use inherent::inherent;

const ALLOWED_QUERY_TYPES: [QueryType; 2] = [QueryType::Media, QueryType::Studio];

/// All available studio connection query fields.
#[derive(Clone, Debug, PartialEq)]
pub struct StudioConnectionQueryFields {
    edges: FieldSlot,
    nodes: FieldSlot,
    page_info: FieldSlot,
    query_type: QueryType,
}

#[inherent]
impl QueryFieldsTrait for StudioConnectionQueryFields {
    pub fn field_class() -> FieldClass {
        FieldClass::StudioConnection
    }

    pub fn new(query_type: QueryType) -> Self {
        let field = |name| FieldSlot::new(
            name,
            FieldClass::StudioConnection,
            query_type,
            FieldRules::new(false, ALLOWED_QUERY_TYPES),
        );

        Self {
            edges: field("edges").accepting(FieldClass::StudioEdge),
            nodes: field("nodes").accepting(FieldClass::Studio),
            page_info: field("pageInfo").accepting(FieldClass::PageInfo),
            query_type,
        }
    }

    pub fn query_type(&self) -> QueryType {
        self.query_type
    }
}

impl StudioConnectionQueryFields {
    /// Requires at least one studio edge query field (see
    /// [`StudioEdgeQueryFields`](crate::fields::StudioEdgeQueryFields)).
    pub fn edges(&self, fields: Vec<GraphQueryField>) -> Result<GraphQueryField> {
        self.edges.bind(fields, vec![])
    }

    /// Requires at least one studio query field (see
    /// [`StudioQueryFields`](crate::fields::StudioQueryFields)).
    pub fn nodes(&self, fields: Vec<GraphQueryField>) -> Result<GraphQueryField> {
        self.nodes.bind(fields, vec![])
    }

    /// The pagination information.
    pub fn page_info(&self, fields: Vec<GraphQueryField>) -> Result<GraphQueryField> {
        self.page_info.bind(fields, vec![])
    }
}
