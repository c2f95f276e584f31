use crate::argument::ArgumentClass;
use crate::argument::ArgumentValue;
use crate::argument::ArgumentValueKind;
use crate::argument::GraphQueryArgument;

/// All available user query arguments.
#[derive(Clone, Copy, Debug, Default)]
pub struct UserQueryArguments;
impl UserQueryArguments {
    pub fn new() -> Self {
        Self
    }

    pub fn id(&self, id: i32) -> GraphQueryArgument {
        argument("id", ArgumentValueKind::Int, id)
    }

    pub fn name(&self, name: &str) -> GraphQueryArgument {
        argument("name", ArgumentValueKind::String, name)
    }

    pub fn search(&self, search: &str) -> GraphQueryArgument {
        argument("search", ArgumentValueKind::String, search)
    }
}

fn argument(
    name: &str,
    expected: ArgumentValueKind,
    value: impl Into<ArgumentValue>,
) -> GraphQueryArgument {
    GraphQueryArgument::new(name, ArgumentClass::User, expected, value)
}
