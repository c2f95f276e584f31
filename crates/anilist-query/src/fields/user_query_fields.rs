use crate::QueryType;
use crate::Result;
use crate::field::FieldClass;
use crate::field::FieldRules;
use crate::field::GraphQueryField;
use crate::fields::FieldSlot;
use crate::fields::QueryFieldsTrait;
use inherent::inherent;

const ALLOWED_QUERY_TYPES: [QueryType; 1] = [QueryType::User];

/// All available user query fields.
#[derive(Clone, Debug, PartialEq)]
pub struct UserQueryFields {
    about: FieldSlot,
    created_at: FieldSlot,
    donator_tier: FieldSlot,
    id: FieldSlot,
    name: FieldSlot,
    query_type: QueryType,
    site_url: FieldSlot,
    updated_at: FieldSlot,
}

#[inherent]
impl QueryFieldsTrait for UserQueryFields {
    pub fn field_class() -> FieldClass {
        FieldClass::User
    }

    pub fn new(query_type: QueryType) -> Self {
        let field = |name| FieldSlot::new(
            name,
            FieldClass::User,
            query_type,
            FieldRules::new(false, ALLOWED_QUERY_TYPES),
        );

        Self {
            about: field("about"),
            created_at: field("createdAt"),
            donator_tier: field("donatorTier"),
            id: field("id"),
            name: field("name"),
            query_type,
            site_url: field("siteUrl"),
            updated_at: field("updatedAt"),
        }
    }

    pub fn query_type(&self) -> QueryType {
        self.query_type
    }
}

impl UserQueryFields {
    pub fn about(&self) -> Result<GraphQueryField> {
        self.about.leaf()
    }

    /// When the user's account was created. Does not exist for accounts
    /// created before 2020.
    pub fn created_at(&self) -> Result<GraphQueryField> {
        self.created_at.leaf()
    }

    pub fn donator_tier(&self) -> Result<GraphQueryField> {
        self.donator_tier.leaf()
    }

    pub fn id(&self) -> Result<GraphQueryField> {
        self.id.leaf()
    }

    pub fn name(&self) -> Result<GraphQueryField> {
        self.name.leaf()
    }

    pub fn site_url(&self) -> Result<GraphQueryField> {
        self.site_url.leaf()
    }

    pub fn updated_at(&self) -> Result<GraphQueryField> {
        self.updated_at.leaf()
    }
}
