use crate::QueryType;
use crate::Result;
use crate::field::FieldClass;
use crate::field::FieldRules;
use crate::field::GraphQueryField;
use crate::fields::FieldSlot;
use crate::fields::QueryFieldsTrait;
use inherent::inherent;

const ALLOWED_QUERY_TYPES: [QueryType; 2] = [QueryType::Media, QueryType::Studio];

/// All available studio edge query fields.
#[derive(Clone, Debug, PartialEq)]
pub struct StudioEdgeQueryFields {
    favourite_order: FieldSlot,
    id: FieldSlot,
    is_main: FieldSlot,
    node: FieldSlot,
    query_type: QueryType,
    role: FieldSlot,
}

#[inherent]
impl QueryFieldsTrait for StudioEdgeQueryFields {
    pub fn field_class() -> FieldClass {
        FieldClass::StudioEdge
    }

    pub fn new(query_type: QueryType) -> Self {
        let field = |name| FieldSlot::new(
            name,
            FieldClass::StudioEdge,
            query_type,
            FieldRules::new(false, ALLOWED_QUERY_TYPES),
        );

        Self {
            favourite_order: field("favouriteOrder"),
            id: field("id"),
            is_main: field("isMain"),
            node: field("node").accepting(FieldClass::Studio),
            query_type,
            role: field("role"),
        }
    }

    pub fn query_type(&self) -> QueryType {
        self.query_type
    }
}

impl StudioEdgeQueryFields {
    /// The order the studio should be displayed from the user's favourites.
    pub fn favourite_order(&self) -> Result<GraphQueryField> {
        self.favourite_order.leaf()
    }

    /// The id of the connection.
    pub fn id(&self) -> Result<GraphQueryField> {
        self.id.leaf()
    }

    /// If the studio is the main animation studio of the anime.
    pub fn is_main(&self) -> Result<GraphQueryField> {
        self.is_main.leaf()
    }

    /// Requires at least one studio query field (see
    /// [`StudioQueryFields`](crate::fields::StudioQueryFields)).
    pub fn node(&self, fields: Vec<GraphQueryField>) -> Result<GraphQueryField> {
        self.node.bind(fields, vec![])
    }

    /// The studio's role in the media.
    pub fn role(&self) -> Result<GraphQueryField> {
        self.role.leaf()
    }
}
