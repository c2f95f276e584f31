use crate::enums::AniListEnum;

/// The type an argument expects its value to have, written the way the
/// AniList schema writes it (`Int`, `String`, `[StaffSort]`, ...).
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum ArgumentValueKind {
    Boolean,
    /// An AniList enum, identified by its schema type name.
    Enum(&'static str),
    Float,
    Int,
    List(Box<ArgumentValueKind>),
    String,
}
impl ArgumentValueKind {
    pub fn enum_of<E: AniListEnum>() -> Self {
        Self::Enum(E::type_name())
    }

    pub fn list_of(inner: ArgumentValueKind) -> Self {
        Self::List(Box::new(inner))
    }
}
impl std::fmt::Display for ArgumentValueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Boolean => f.write_str("Boolean"),
            Self::Enum(type_name) => f.write_str(type_name),
            Self::Float => f.write_str("Float"),
            Self::Int => f.write_str("Int"),
            Self::List(inner) => write!(f, "[{inner}]"),
            Self::String => f.write_str("String"),
        }
    }
}
