use crate::argument::ArgumentClass;
use crate::field::FieldClass;
use serde::Serialize;

/// The root contexts an AniList query can target.
///
/// Each query type corresponds to one root field on the AniList `Query` type
/// (e.g. `Media(id: 1) { ... }`). Every [`GraphQueryField`] is scoped to
/// exactly one `QueryType` when its container is created.
///
/// [`GraphQueryField`]: crate::field::GraphQueryField
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize)]
pub enum QueryType {
    Character,
    Media,
    Staff,
    Studio,
    User,
}
impl QueryType {
    pub const ALL: [QueryType; 5] = [
        Self::Character,
        Self::Media,
        Self::Staff,
        Self::Studio,
        Self::User,
    ];

    /// The [`ArgumentClass`] accepted by the root field of this query type.
    pub fn argument_class(&self) -> ArgumentClass {
        match self {
            Self::Character => ArgumentClass::Character,
            Self::Media => ArgumentClass::Media,
            Self::Staff => ArgumentClass::Staff,
            Self::Studio => ArgumentClass::Studio,
            Self::User => ArgumentClass::User,
        }
    }

    /// The [`FieldClass`] whose fields may be selected directly under the
    /// root field of this query type.
    pub fn root_field_class(&self) -> FieldClass {
        match self {
            Self::Character => FieldClass::Character,
            Self::Media => FieldClass::Media,
            Self::Staff => FieldClass::Staff,
            Self::Studio => FieldClass::Studio,
            Self::User => FieldClass::User,
        }
    }

    /// The name of the root field in the AniList schema.
    pub fn root_field_name(&self) -> &'static str {
        match self {
            Self::Character => "Character",
            Self::Media => "Media",
            Self::Staff => "Staff",
            Self::Studio => "Studio",
            Self::User => "User",
        }
    }
}
impl std::fmt::Display for QueryType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.root_field_name())
    }
}
