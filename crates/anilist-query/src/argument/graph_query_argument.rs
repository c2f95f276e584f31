use crate::QueryBuildError;
use crate::Result;
use crate::argument::ArgumentClass;
use crate::argument::ArgumentValue;
use crate::argument::ArgumentValueKind;

/// A named argument value, tagged with the [`ArgumentClass`] it belongs to
/// and the [`ArgumentValueKind`] its value must have.
///
/// Construction never fails; the value's type is checked on demand by
/// [`GraphQueryArgument::is_valid_argument_type()`] so a whole batch of
/// arguments can be constructed before any of them are checked. Two
/// arguments with the same name and value are still distinct arguments and
/// are never deduplicated.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphQueryArgument {
    expected: ArgumentValueKind,
    name: String,
    owner: ArgumentClass,
    value: ArgumentValue,
}
impl GraphQueryArgument {
    pub fn new(
        name: impl Into<String>,
        owner: ArgumentClass,
        expected: ArgumentValueKind,
        value: impl Into<ArgumentValue>,
    ) -> Self {
        Self {
            expected,
            name: name.into(),
            owner,
            value: value.into(),
        }
    }

    pub fn expected(&self) -> &ArgumentValueKind {
        &self.expected
    }

    /// Fails with [`QueryBuildError::ArgumentType`] if this argument's value
    /// cannot be passed where its expected type is required.
    pub fn is_valid_argument_type(&self) -> Result<()> {
        if self.value.is_assignable_to(&self.expected) {
            Ok(())
        } else {
            Err(QueryBuildError::ArgumentType {
                argument_name: self.name.to_string(),
                expected: self.expected.to_owned(),
                actual: self.value.type_description(),
            })
        }
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn owner(&self) -> ArgumentClass {
        self.owner
    }

    pub fn value(&self) -> &ArgumentValue {
        &self.value
    }
}
impl std::fmt::Display for GraphQueryArgument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.name, self.value)
    }
}
