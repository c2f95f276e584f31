use crate::argument::ArgumentClass;
use crate::argument::ArgumentValue;
use crate::argument::ArgumentValueKind;
use crate::argument::GraphQueryArgument;
use crate::enums::StaffLanguage;
use crate::enums::StaffSort;

/// All available staff query arguments.
///
/// Accepted by the root `Staff` query and by `voiceActors` on character
/// edges.
#[derive(Clone, Copy, Debug, Default)]
pub struct StaffQueryArguments;
impl StaffQueryArguments {
    pub fn new() -> Self {
        Self
    }

    /// Filter by the staff id.
    pub fn id(&self, id: i32) -> GraphQueryArgument {
        argument("id", ArgumentValueKind::Int, id)
    }

    /// Filter voice actors by their language.
    pub fn language(&self, language: StaffLanguage) -> GraphQueryArgument {
        argument("language", ArgumentValueKind::enum_of::<StaffLanguage>(), language)
    }

    /// Filter by search query.
    pub fn search(&self, search: &str) -> GraphQueryArgument {
        argument("search", ArgumentValueKind::String, search)
    }

    /// The order the results will be returned in.
    pub fn sort(&self, sort: Vec<StaffSort>) -> GraphQueryArgument {
        argument(
            "sort",
            ArgumentValueKind::list_of(ArgumentValueKind::enum_of::<StaffSort>()),
            sort,
        )
    }
}

fn argument(
    name: &str,
    expected: ArgumentValueKind,
    value: impl Into<ArgumentValue>,
) -> GraphQueryArgument {
    GraphQueryArgument::new(name, ArgumentClass::Staff, expected, value)
}
