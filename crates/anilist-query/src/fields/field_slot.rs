use crate::QueryBuildError;
use crate::QueryType;
use crate::Result;
use crate::argument::ArgumentClass;
use crate::argument::GraphQueryArgument;
use crate::field::FieldClass;
use crate::field::FieldRules;
use crate::field::GraphQueryField;

/// A container's definition of one field.
///
/// Definitions are created eagerly when a container is constructed. A field
/// whose rules reject the container's query type keeps the resulting
/// [`QueryBuildError::Configuration`] and hands it back from every accessor
/// call instead of failing the whole container.
#[derive(Clone, Debug, PartialEq)]
pub(super) struct FieldSlot(std::result::Result<GraphQueryField, QueryBuildError>);
impl FieldSlot {
    pub fn new(
        name: &str,
        owner: FieldClass,
        query_type: QueryType,
        rules: FieldRules,
    ) -> Self {
        Self(GraphQueryField::new(name, owner, query_type, rules))
    }

    /// Make this field a branch whose children must be owned by
    /// `child_class`.
    pub fn accepting(self, child_class: FieldClass) -> Self {
        Self(self.0.map(|field| field.with_child_class(child_class)))
    }

    /// Allow this field to take arguments owned by `argument_class`.
    pub fn with_arguments(self, argument_class: ArgumentClass) -> Self {
        Self(self.0.map(|field| field.with_argument_class(argument_class)))
    }

    pub fn bind(
        &self,
        fields: Vec<GraphQueryField>,
        arguments: Vec<GraphQueryArgument>,
    ) -> Result<GraphQueryField> {
        self.definition()?.attach_children_and_arguments(fields, arguments)
    }

    pub fn leaf(&self) -> Result<GraphQueryField> {
        self.definition().cloned()
    }

    fn definition(&self) -> Result<&GraphQueryField> {
        self.0.as_ref().map_err(Clone::clone)
    }
}
