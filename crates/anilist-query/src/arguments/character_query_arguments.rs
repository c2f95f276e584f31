use crate::argument::ArgumentClass;
use crate::argument::ArgumentValue;
use crate::argument::ArgumentValueKind;
use crate::argument::GraphQueryArgument;
use crate::enums::CharacterRole;
use crate::enums::CharacterSort;

/// All available character query arguments.
///
/// Accepted by the root `Character` query and by the `characters`
/// connections on media and staff.
#[derive(Clone, Copy, Debug, Default)]
pub struct CharacterQueryArguments;
impl CharacterQueryArguments {
    pub fn new() -> Self {
        Self
    }

    /// Filter by character id.
    pub fn id(&self, id: i32) -> GraphQueryArgument {
        argument("id", ArgumentValueKind::Int, id)
    }

    /// The page of a connection to return.
    pub fn page(&self, page: i32) -> GraphQueryArgument {
        argument("page", ArgumentValueKind::Int, page)
    }

    /// The number of entries per page of a connection.
    pub fn per_page(&self, per_page: i32) -> GraphQueryArgument {
        argument("perPage", ArgumentValueKind::Int, per_page)
    }

    /// Filter a connection by the role the character plays.
    pub fn role(&self, role: CharacterRole) -> GraphQueryArgument {
        argument("role", ArgumentValueKind::enum_of::<CharacterRole>(), role)
    }

    /// Filter by search query.
    pub fn search(&self, search: &str) -> GraphQueryArgument {
        argument("search", ArgumentValueKind::String, search)
    }

    /// The order the results will be returned in.
    pub fn sort(&self, sort: Vec<CharacterSort>) -> GraphQueryArgument {
        argument(
            "sort",
            ArgumentValueKind::list_of(ArgumentValueKind::enum_of::<CharacterSort>()),
            sort,
        )
    }
}

fn argument(
    name: &str,
    expected: ArgumentValueKind,
    value: impl Into<ArgumentValue>,
) -> GraphQueryArgument {
    GraphQueryArgument::new(name, ArgumentClass::Character, expected, value)
}
