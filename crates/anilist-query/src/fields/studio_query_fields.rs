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
    QueryType::Studio,
    QueryType::User,
];

/// All available studio query fields.
#[derive(Clone, Debug, PartialEq)]
pub struct StudioQueryFields {
    favourites: FieldSlot,
    id: FieldSlot,
    is_animation_studio: FieldSlot,
    is_favourite: FieldSlot,
    name: FieldSlot,
    query_type: QueryType,
    site_url: FieldSlot,
}

#[inherent]
impl QueryFieldsTrait for StudioQueryFields {
    pub fn field_class() -> FieldClass {
        FieldClass::Studio
    }

    pub fn new(query_type: QueryType) -> Self {
        let field = |name| FieldSlot::new(
            name,
            FieldClass::Studio,
            query_type,
            FieldRules::new(false, ALLOWED_QUERY_TYPES),
        );

        Self {
            favourites: field("favourites"),
            id: field("id"),
            is_animation_studio: field("isAnimationStudio"),
            is_favourite: field("isFavourite"),
            name: field("name"),
            query_type,
            site_url: field("siteUrl"),
        }
    }

    pub fn query_type(&self) -> QueryType {
        self.query_type
    }
}

impl StudioQueryFields {
    /// The amount of user's who have favourited the studio.
    pub fn favourites(&self) -> Result<GraphQueryField> {
        self.favourites.leaf()
    }

    /// The id of the studio.
    pub fn id(&self) -> Result<GraphQueryField> {
        self.id.leaf()
    }

    /// If the studio is an animation studio or a different kind of company.
    pub fn is_animation_studio(&self) -> Result<GraphQueryField> {
        self.is_animation_studio.leaf()
    }

    /// If the studio is marked as favourite by the currently authenticated
    /// user.
    pub fn is_favourite(&self) -> Result<GraphQueryField> {
        self.is_favourite.leaf()
    }

    /// The name of the studio.
    pub fn name(&self) -> Result<GraphQueryField> {
        self.name.leaf()
    }

    /// The url for the studio page on the AniList website.
    pub fn site_url(&self) -> Result<GraphQueryField> {
        self.site_url.leaf()
    }
}
