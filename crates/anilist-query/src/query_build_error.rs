use crate::QueryType;
use crate::argument::ArgumentClass;
use crate::argument::ArgumentValueKind;
use crate::field::FieldClass;
use thiserror::Error;

/// Errors raised while binding fields and arguments together or while
/// building a [`QueryDocument`](crate::QueryDocument).
///
/// None of these are recovered from internally: each one means the call site
/// assembled a query the AniList schema does not allow.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum QueryBuildError {
    #[error(
        "Query argument ({argument_name}) expects a value of type {expected} \
        but was given a value of type {actual}."
    )]
    ArgumentType {
        argument_name: String,
        expected: ArgumentValueKind,
        actual: String,
    },

    #[error("Query field ({field_name}) is not valid for the {query_type} query type.")]
    Configuration {
        field_name: String,
        query_type: QueryType,
    },

    #[error(
        "Query field ({field_name}) requires at least one {expected_class} \
        query field."
    )]
    EmptyChildFields {
        expected_class: FieldClass,
        field_name: String,
    },

    #[error(
        "The following arguments are not valid {expected_class} query \
        arguments {}.",
        .invalid_argument_names.join(", ")
    )]
    InvalidArguments {
        expected_class: ArgumentClass,
        field_name: String,
        invalid_argument_names: Vec<String>,
    },

    #[error("`{operation_name}` is not a valid GraphQL operation name.")]
    InvalidOperationName {
        operation_name: String,
    },

    #[error(
        "The following fields are not valid {expected_class} query fields {}.",
        .invalid_field_names.join(", ")
    )]
    InvalidChildFields {
        expected_class: FieldClass,
        field_name: String,
        invalid_field_names: Vec<String>,
    },

    #[error(
        "Query field ({field_name}) requires at least one {expected_class} \
        query argument."
    )]
    MissingArguments {
        expected_class: ArgumentClass,
        field_name: String,
    },

    #[error(
        "Query field ({field_name}) does not accept arguments (given: {}).",
        .argument_names.join(", ")
    )]
    UnexpectedArguments {
        argument_names: Vec<String>,
        field_name: String,
    },

    #[error(
        "Query field ({field_name}) does not accept child fields (given: {}).",
        .child_field_names.join(", ")
    )]
    UnexpectedChildFields {
        child_field_names: Vec<String>,
        field_name: String,
    },
}
impl QueryBuildError {
    pub fn kind(&self) -> QueryBuildErrorKind {
        QueryBuildErrorKind::from(self)
    }
}

/// Similar to [`QueryBuildError`] except without the corresponding error
/// details. Useful for matching on the category of a failure.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum QueryBuildErrorKind {
    /// An argument's value does not match the type the argument expects.
    ArgumentType,

    /// Arguments were missing, unexpected, or owned by the wrong argument
    /// class for the field they were attached to.
    ArgumentValidation,

    /// A field was used under a query type its rules do not allow (a schema
    /// definition bug rather than caller misuse), or the query itself was
    /// misconfigured (e.g. an invalid operation name).
    Configuration,

    /// Child fields were missing, unexpected, or owned by the wrong field
    /// class for the field they were attached to.
    FieldValidation,
}
impl std::convert::From<&QueryBuildError> for QueryBuildErrorKind {
    fn from(value: &QueryBuildError) -> Self {
        match value {
            QueryBuildError::ArgumentType { .. } =>
                QueryBuildErrorKind::ArgumentType,

            QueryBuildError::InvalidArguments { .. }
                | QueryBuildError::MissingArguments { .. }
                | QueryBuildError::UnexpectedArguments { .. } =>
                QueryBuildErrorKind::ArgumentValidation,

            QueryBuildError::Configuration { .. }
                | QueryBuildError::InvalidOperationName { .. } =>
                QueryBuildErrorKind::Configuration,

            QueryBuildError::EmptyChildFields { .. }
                | QueryBuildError::InvalidChildFields { .. }
                | QueryBuildError::UnexpectedChildFields { .. } =>
                QueryBuildErrorKind::FieldValidation,
        }
    }
}
