use crate::argument::ArgumentClass;
use crate::argument::ArgumentValue;
use crate::argument::ArgumentValueKind;
use crate::argument::GraphQueryArgument;
use crate::enums::StudioSort;

/// All available studio query arguments.
///
/// Accepted by the root `Studio` query and by `studios` on media.
#[derive(Clone, Copy, Debug, Default)]
pub struct StudioQueryArguments;
impl StudioQueryArguments {
    pub fn new() -> Self {
        Self
    }

    /// Filter by the studio id.
    pub fn id(&self, id: i32) -> GraphQueryArgument {
        argument("id", ArgumentValueKind::Int, id)
    }

    /// Filter a media's studios to the main studios only.
    pub fn is_main(&self, is_main: bool) -> GraphQueryArgument {
        argument("isMain", ArgumentValueKind::Boolean, is_main)
    }

    /// Filter by search query.
    pub fn search(&self, search: &str) -> GraphQueryArgument {
        argument("search", ArgumentValueKind::String, search)
    }

    /// The order the results will be returned in.
    pub fn sort(&self, sort: Vec<StudioSort>) -> GraphQueryArgument {
        argument(
            "sort",
            ArgumentValueKind::list_of(ArgumentValueKind::enum_of::<StudioSort>()),
            sort,
        )
    }
}

fn argument(
    name: &str,
    expected: ArgumentValueKind,
    value: impl Into<ArgumentValue>,
) -> GraphQueryArgument {
    GraphQueryArgument::new(name, ArgumentClass::Studio, expected, value)
}
