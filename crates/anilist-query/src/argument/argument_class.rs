use serde::Serialize;

/// The argument set a [`GraphQueryArgument`](crate::argument::GraphQueryArgument)
/// belongs to.
///
/// Each variant corresponds to one query-arguments container in
/// [`crate::arguments`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize)]
pub enum ArgumentClass {
    Character,
    Media,
    Staff,
    Studio,
    User,
}
impl ArgumentClass {
    pub fn description(&self) -> &'static str {
        match self {
            Self::Character => "character",
            Self::Media => "media",
            Self::Staff => "staff",
            Self::Studio => "studio",
            Self::User => "user",
        }
    }
}
impl std::fmt::Display for ArgumentClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.description())
    }
}
