use crate::QueryBuildError;
use crate::Result;
use crate::argument::ArgumentClass;
use crate::argument::GraphQueryArgument;
use crate::field::FieldClass;
use crate::field::GraphQueryField;

/// Checks the child fields and arguments handed to a single selection
/// (a branch field, or the root field of a query) against the classes that
/// selection accepts.
///
/// Mismatches are aggregated: every offending field (or argument) is named in
/// the returned error, in the order it was supplied.
pub(crate) struct SelectionValidator<'a> {
    field_name: &'a str,
}
impl<'a> SelectionValidator<'a> {
    pub fn new(field_name: &'a str) -> Self {
        Self { field_name }
    }

    /// `expected_class` is `None` for selections that take no arguments.
    pub fn validate_arguments(
        &self,
        expected_class: Option<ArgumentClass>,
        requires_arguments: bool,
        arguments: &[GraphQueryArgument],
    ) -> Result<()> {
        let expected_class = match expected_class {
            Some(expected_class) => expected_class,
            None if arguments.is_empty() => return Ok(()),
            None => return Err(QueryBuildError::UnexpectedArguments {
                argument_names: names_of(arguments, GraphQueryArgument::name),
                field_name: self.field_name.to_string(),
            }),
        };

        if arguments.is_empty() {
            return if requires_arguments {
                Err(QueryBuildError::MissingArguments {
                    expected_class,
                    field_name: self.field_name.to_string(),
                })
            } else {
                Ok(())
            };
        }

        let invalid_arguments: Vec<&GraphQueryArgument> =
            arguments.iter()
                .filter(|argument| argument.owner() != expected_class)
                .collect();
        if !invalid_arguments.is_empty() {
            return Err(QueryBuildError::InvalidArguments {
                expected_class,
                field_name: self.field_name.to_string(),
                invalid_argument_names: invalid_arguments.iter()
                    .map(|argument| argument.name().to_string())
                    .collect(),
            });
        }

        for argument in arguments {
            argument.is_valid_argument_type()?;
        }

        Ok(())
    }

    /// `expected_class` is `None` for scalar (leaf) selections.
    pub fn validate_child_fields(
        &self,
        expected_class: Option<FieldClass>,
        fields: &[GraphQueryField],
    ) -> Result<()> {
        let expected_class = match expected_class {
            Some(expected_class) => expected_class,
            None if fields.is_empty() => return Ok(()),
            None => return Err(QueryBuildError::UnexpectedChildFields {
                child_field_names: names_of(fields, GraphQueryField::name),
                field_name: self.field_name.to_string(),
            }),
        };

        if fields.is_empty() {
            return Err(QueryBuildError::EmptyChildFields {
                expected_class,
                field_name: self.field_name.to_string(),
            });
        }

        let invalid_field_names: Vec<String> =
            fields.iter()
                .filter(|field| field.owner() != expected_class)
                .map(|field| field.name().to_string())
                .collect();
        if !invalid_field_names.is_empty() {
            return Err(QueryBuildError::InvalidChildFields {
                expected_class,
                field_name: self.field_name.to_string(),
                invalid_field_names,
            });
        }

        Ok(())
    }
}

fn names_of<T>(items: &[T], name: impl Fn(&T) -> &str) -> Vec<String> {
    items.iter().map(|item| name(item).to_string()).collect()
}
