use crate::QueryBuildError;
use crate::QueryDocument;
use crate::QueryType;
use crate::Result;
use crate::argument::GraphQueryArgument;
use crate::field::GraphQueryField;
use crate::field::RenderedSelection;
use crate::field::SelectionValidator;

/// Composes the root arguments and root fields of one [`QueryType`] into a
/// [`QueryDocument`].
///
/// The root fields must come from the container matching the query type
/// (e.g. [`MediaQueryFields`](crate::fields::MediaQueryFields) for
/// [`QueryType::Media`]) and the root arguments from the matching arguments
/// container.
#[derive(Clone, Debug, PartialEq)]
pub struct QueryBuilder {
    arguments: Vec<GraphQueryArgument>,
    fields: Vec<GraphQueryField>,
    name: Option<String>,
    query_type: QueryType,
}
impl QueryBuilder {
    /// Add a root [`GraphQueryArgument`] after any previously added
    /// arguments.
    pub fn add_argument(mut self, argument: GraphQueryArgument) -> Result<Self> {
        self.arguments.push(argument);
        Ok(self)
    }

    /// Add a root [`GraphQueryField`] after any previously added fields.
    pub fn add_field(mut self, field: GraphQueryField) -> Result<Self> {
        self.fields.push(field);
        Ok(self)
    }

    /// Consume this [`QueryBuilder`] to produce a [`QueryDocument`].
    ///
    /// Validates the root selection the same way a branch field validates
    /// its children and arguments, then verifies that every field in the
    /// tree was defined for this builder's [`QueryType`].
    pub fn build(self) -> Result<QueryDocument> {
        let root_name = self.query_type.root_field_name();
        let validator = SelectionValidator::new(root_name);
        validator.validate_child_fields(
            Some(self.query_type.root_field_class()),
            &self.fields,
        )?;
        validator.validate_arguments(
            Some(self.query_type.argument_class()),
            false,
            &self.arguments,
        )?;
        for field in &self.fields {
            field.validate_query_type(self.query_type)?;
        }

        let selection = RenderedSelection {
            arguments: &self.arguments,
            children: &self.fields,
            name: root_name,
        };
        let query = match &self.name {
            Some(name) => format!("query {name} {{ {selection} }}"),
            None => format!("query {{ {selection} }}"),
        };

        log::debug!(
            "Built {} query document with {} root fields and {} root arguments.",
            self.query_type,
            self.fields.len(),
            self.arguments.len(),
        );

        Ok(QueryDocument {
            operation_name: self.name,
            query,
            query_type: self.query_type,
        })
    }

    pub fn new(query_type: QueryType) -> Self {
        Self {
            arguments: vec![],
            fields: vec![],
            name: None,
            query_type,
        }
    }

    pub fn query_type(&self) -> QueryType {
        self.query_type
    }

    /// Set the list of root [`GraphQueryArgument`]s.
    ///
    /// NOTE: If any arguments were previously added (either using this
    /// function or [`QueryBuilder::add_argument()`]), they will be fully
    /// replaced by the arguments passed here.
    pub fn set_arguments(mut self, arguments: Vec<GraphQueryArgument>) -> Result<Self> {
        self.arguments = arguments;
        Ok(self)
    }

    /// Set the list of root [`GraphQueryField`]s.
    ///
    /// NOTE: If any fields were previously added (either using this function
    /// or [`QueryBuilder::add_field()`]), they will be fully replaced by the
    /// fields passed here.
    pub fn set_fields(mut self, fields: Vec<GraphQueryField>) -> Result<Self> {
        self.fields = fields;
        Ok(self)
    }

    /// Set the operation name of the query.
    ///
    /// Fails with [`QueryBuildError::InvalidOperationName`] if `name` is not
    /// a valid GraphQL name.
    pub fn set_name(mut self, name: Option<String>) -> Result<Self> {
        if let Some(name) = &name
            && !is_valid_graphql_name(name) {
            return Err(QueryBuildError::InvalidOperationName {
                operation_name: name.to_string(),
            });
        }
        self.name = name;
        Ok(self)
    }
}

/// <https://spec.graphql.org/October2021/#Name>
fn is_valid_graphql_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first == '_' || first.is_ascii_alphabetic() =>
            chars.all(|ch| ch == '_' || ch.is_ascii_alphanumeric()),
        _ => false,
    }
}
