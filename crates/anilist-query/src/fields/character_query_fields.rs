use crate::QueryType;
use crate::Result;
use crate::field::FieldClass;
use crate::field::FieldRules;
use crate::field::GraphQueryField;
use crate::fields::FieldSlot;
use crate::fields::QueryFieldsTrait;
use inherent::inherent;

const ALLOWED_QUERY_TYPES: [QueryType; 4] = [
    QueryType::Character,
    QueryType::Media,
    QueryType::Staff,
    QueryType::User,
];

/// All available character query fields.
#[derive(Clone, Debug, PartialEq)]
pub struct CharacterQueryFields {
    age: FieldSlot,
    blood_type: FieldSlot,
    description: FieldSlot,
    favourites: FieldSlot,
    gender: FieldSlot,
    id: FieldSlot,
    is_favourite: FieldSlot,
    mod_notes: FieldSlot,
    query_type: QueryType,
    site_url: FieldSlot,
}

#[inherent]
impl QueryFieldsTrait for CharacterQueryFields {
    pub fn field_class() -> FieldClass {
        FieldClass::Character
    }

    pub fn new(query_type: QueryType) -> Self {
        let field = |name| FieldSlot::new(
            name,
            FieldClass::Character,
            query_type,
            FieldRules::new(false, ALLOWED_QUERY_TYPES),
        );

        Self {
            age: field("age"),
            blood_type: field("bloodType"),
            description: field("description"),
            favourites: field("favourites"),
            gender: field("gender"),
            id: field("id"),
            is_favourite: field("isFavourite"),
            mod_notes: field("modNotes"),
            query_type,
            site_url: field("siteUrl"),
        }
    }

    pub fn query_type(&self) -> QueryType {
        self.query_type
    }
}

impl CharacterQueryFields {
    /// The character's age. Note this is a string, not an int, it may contain
    /// further text and additional ages.
    pub fn age(&self) -> Result<GraphQueryField> {
        self.age.leaf()
    }

    /// The character's blood type.
    pub fn blood_type(&self) -> Result<GraphQueryField> {
        self.blood_type.leaf()
    }

    /// A general description of the character.
    pub fn description(&self) -> Result<GraphQueryField> {
        self.description.leaf()
    }

    /// The amount of user's who have favourited the character.
    pub fn favourites(&self) -> Result<GraphQueryField> {
        self.favourites.leaf()
    }

    /// The character's gender. Usually Male, Female, or Non-binary but can be
    /// any string.
    pub fn gender(&self) -> Result<GraphQueryField> {
        self.gender.leaf()
    }

    /// The id of the character.
    pub fn id(&self) -> Result<GraphQueryField> {
        self.id.leaf()
    }

    /// If the character is marked as favourite by the currently authenticated
    /// user.
    pub fn is_favourite(&self) -> Result<GraphQueryField> {
        self.is_favourite.leaf()
    }

    /// Notes for site moderators.
    pub fn mod_notes(&self) -> Result<GraphQueryField> {
        self.mod_notes.leaf()
    }

    /// The url for the character page on the AniList website.
    pub fn site_url(&self) -> Result<GraphQueryField> {
        self.site_url.leaf()
    }
}
