use crate::QueryType;
use crate::Result;
use crate::argument::ArgumentClass;
use crate::argument::GraphQueryArgument;
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

/// All available character edge query fields.
#[derive(Clone, Debug, PartialEq)]
pub struct CharacterEdgeQueryFields {
    favourite_order: FieldSlot,
    id: FieldSlot,
    media: FieldSlot,
    node: FieldSlot,
    query_type: QueryType,
    role: FieldSlot,
    voice_actors: FieldSlot,
}

#[inherent]
impl QueryFieldsTrait for CharacterEdgeQueryFields {
    pub fn field_class() -> FieldClass {
        FieldClass::CharacterEdge
    }

    pub fn new(query_type: QueryType) -> Self {
        let field = |name| FieldSlot::new(
            name,
            FieldClass::CharacterEdge,
            query_type,
            FieldRules::new(false, ALLOWED_QUERY_TYPES),
        );

        Self {
            favourite_order: field("favouriteOrder"),
            id: field("id"),
            media: field("media").accepting(FieldClass::Media),
            node: field("node").accepting(FieldClass::Character),
            query_type,
            role: field("role"),
            voice_actors: field("voiceActors")
                .accepting(FieldClass::Staff)
                .with_arguments(ArgumentClass::Staff),
        }
    }

    pub fn query_type(&self) -> QueryType {
        self.query_type
    }
}

impl CharacterEdgeQueryFields {
    /// The order the character should be displayed from the user's
    /// favourites.
    pub fn favourite_order(&self) -> Result<GraphQueryField> {
        self.favourite_order.leaf()
    }

    /// The id of the connection.
    pub fn id(&self) -> Result<GraphQueryField> {
        self.id.leaf()
    }

    /// The media the character is in.
    ///
    /// Requires at least one media query field (see
    /// [`MediaQueryFields`](crate::fields::MediaQueryFields)).
    pub fn media(&self, fields: Vec<GraphQueryField>) -> Result<GraphQueryField> {
        self.media.bind(fields, vec![])
    }

    /// The character itself.
    ///
    /// Requires at least one character query field (see
    /// [`CharacterQueryFields`](crate::fields::CharacterQueryFields)).
    pub fn node(&self, fields: Vec<GraphQueryField>) -> Result<GraphQueryField> {
        self.node.bind(fields, vec![])
    }

    /// The character's role in the media.
    pub fn role(&self) -> Result<GraphQueryField> {
        self.role.leaf()
    }

    /// The voice actors of the character.
    ///
    /// Requires at least one staff query field (see
    /// [`StaffQueryFields`](crate::fields::StaffQueryFields)) and accepts
    /// staff query arguments (see
    /// [`StaffQueryArguments`](crate::arguments::StaffQueryArguments)).
    pub fn voice_actors(
        &self,
        fields: Vec<GraphQueryField>,
        arguments: Vec<GraphQueryArgument>,
    ) -> Result<GraphQueryField> {
        self.voice_actors.bind(fields, arguments)
    }
}
