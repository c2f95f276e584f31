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

const ALLOWED_QUERY_TYPES: [QueryType; 4] = [
    QueryType::Character,
    QueryType::Media,
    QueryType::Staff,
    QueryType::User,
];

/// All available staff query fields.
#[derive(Clone, Debug, PartialEq)]
pub struct StaffQueryFields {
    age: FieldSlot,
    characters: FieldSlot,
    description: FieldSlot,
    favourites: FieldSlot,
    gender: FieldSlot,
    home_town: FieldSlot,
    id: FieldSlot,
    is_favourite: FieldSlot,
    language_v2: FieldSlot,
    query_type: QueryType,
    site_url: FieldSlot,
    years_active: FieldSlot,
}

#[inherent]
impl QueryFieldsTrait for StaffQueryFields {
    pub fn field_class() -> FieldClass {
        FieldClass::Staff
    }

    pub fn new(query_type: QueryType) -> Self {
        let field = |name| FieldSlot::new(
            name,
            FieldClass::Staff,
            query_type,
            FieldRules::new(false, ALLOWED_QUERY_TYPES),
        );

        Self {
            age: field("age"),
            characters: field("characters")
                .accepting(FieldClass::CharacterConnection)
                .with_arguments(ArgumentClass::Character),
            description: field("description"),
            favourites: field("favourites"),
            gender: field("gender"),
            home_town: field("homeTown"),
            id: field("id"),
            is_favourite: field("isFavourite"),
            language_v2: field("languageV2"),
            query_type,
            site_url: field("siteUrl"),
            years_active: field("yearsActive"),
        }
    }

    pub fn query_type(&self) -> QueryType {
        self.query_type
    }
}

impl StaffQueryFields {
    /// The person's age in years.
    pub fn age(&self) -> Result<GraphQueryField> {
        self.age.leaf()
    }

    /// Characters voiced by the actor.
    ///
    /// Requires at least one character connection query field (see
    /// [`CharacterConnectionQueryFields`](crate::fields::CharacterConnectionQueryFields))
    /// and accepts character query arguments (see
    /// [`CharacterQueryArguments`](crate::arguments::CharacterQueryArguments)).
    pub fn characters(
        &self,
        fields: Vec<GraphQueryField>,
        arguments: Vec<GraphQueryArgument>,
    ) -> Result<GraphQueryField> {
        self.characters.bind(fields, arguments)
    }

    /// A general description of the staff member.
    pub fn description(&self) -> Result<GraphQueryField> {
        self.description.leaf()
    }

    /// The amount of user's who have favourited the staff member.
    pub fn favourites(&self) -> Result<GraphQueryField> {
        self.favourites.leaf()
    }

    /// The staff's gender. Usually Male, Female, or Non-binary but can be any
    /// string.
    pub fn gender(&self) -> Result<GraphQueryField> {
        self.gender.leaf()
    }

    /// The persons birthplace or hometown.
    pub fn home_town(&self) -> Result<GraphQueryField> {
        self.home_town.leaf()
    }

    /// The id of the staff member.
    pub fn id(&self) -> Result<GraphQueryField> {
        self.id.leaf()
    }

    /// If the staff member is marked as favourite by the currently
    /// authenticated user.
    pub fn is_favourite(&self) -> Result<GraphQueryField> {
        self.is_favourite.leaf()
    }

    /// The primary language of the staff member.
    pub fn language_v2(&self) -> Result<GraphQueryField> {
        self.language_v2.leaf()
    }

    /// The url for the staff page on the AniList website.
    pub fn site_url(&self) -> Result<GraphQueryField> {
        self.site_url.leaf()
    }

    /// The persons start year and end year of activity.
    pub fn years_active(&self) -> Result<GraphQueryField> {
        self.years_active.leaf()
    }
}
