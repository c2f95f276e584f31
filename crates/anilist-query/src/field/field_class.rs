use serde::Serialize;

/// The schema type a [`GraphQueryField`](crate::field::GraphQueryField)
/// belongs to.
///
/// Each variant corresponds to exactly one query-fields container in
/// [`crate::fields`]. A branch field names the `FieldClass` it accepts as
/// children, and attaching a field owned by any other class is rejected.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize)]
pub enum FieldClass {
    Character,
    CharacterConnection,
    CharacterEdge,
    Media,
    PageInfo,
    Staff,
    Studio,
    StudioConnection,
    StudioEdge,
    User,
}
impl FieldClass {
    /// Human-readable description used in validation messages
    /// (e.g. "The following fields are not valid *studio edge* query
    /// fields").
    pub fn description(&self) -> &'static str {
        match self {
            Self::Character => "character",
            Self::CharacterConnection => "character connection",
            Self::CharacterEdge => "character edge",
            Self::Media => "media",
            Self::PageInfo => "page info",
            Self::Staff => "staff",
            Self::Studio => "studio",
            Self::StudioConnection => "studio connection",
            Self::StudioEdge => "studio edge",
            Self::User => "user",
        }
    }
}
impl std::fmt::Display for FieldClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.description())
    }
}
