use crate::QueryBuildError;
use crate::QueryType;
use crate::Result;
use crate::argument::ArgumentClass;
use crate::argument::GraphQueryArgument;
use crate::field::FieldClass;
use crate::field::FieldRules;
use crate::field::SelectionValidator;

/// One selectable field in the AniList schema.
///
/// A `GraphQueryField` is either a scalar leaf (e.g. `id`) or a branch
/// (e.g. `voiceActors`) that must be given child fields of one particular
/// [`FieldClass`] and may accept arguments of one particular
/// [`ArgumentClass`].
///
/// Fields are normally obtained from the query-fields containers in
/// [`crate::fields`] rather than constructed directly.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphQueryField {
    pub(crate) argument_class: Option<ArgumentClass>,
    pub(crate) arguments: Vec<GraphQueryArgument>,
    pub(crate) child_class: Option<FieldClass>,
    pub(crate) children: Vec<GraphQueryField>,
    pub(crate) name: String,
    pub(crate) owner: FieldClass,
    pub(crate) query_type: QueryType,
    pub(crate) rules: FieldRules,
}
impl GraphQueryField {
    /// Define a field named `name`, owned by `owner`, for use in queries of
    /// type `query_type`.
    ///
    /// Fails with [`QueryBuildError::Configuration`] if `rules` do not allow
    /// `query_type`.
    pub fn new(
        name: impl Into<String>,
        owner: FieldClass,
        query_type: QueryType,
        rules: FieldRules,
    ) -> Result<Self> {
        let name = name.into();
        if !rules.allows(query_type) {
            return Err(QueryBuildError::Configuration {
                field_name: name,
                query_type,
            });
        }

        Ok(Self {
            argument_class: None,
            arguments: vec![],
            child_class: None,
            children: vec![],
            name,
            owner,
            query_type,
            rules,
        })
    }

    /// Mark this field as accepting arguments of `argument_class`.
    pub fn with_argument_class(mut self, argument_class: ArgumentClass) -> Self {
        self.argument_class = Some(argument_class);
        self
    }

    /// Mark this field as a branch whose children must be owned by
    /// `child_class`.
    pub fn with_child_class(mut self, child_class: FieldClass) -> Self {
        self.child_class = Some(child_class);
        self
    }

    /// Produce a copy of this field with `fields` and `arguments` attached.
    ///
    /// Checks run in this order and the first failing check is returned:
    ///
    /// 1. A branch field needs at least one child field; a leaf field accepts
    ///    none.
    /// 2. Every child field is owned by this field's child class.
    /// 3. Arguments are present if the field's rules require them, absent if
    ///    the field takes none, and otherwise owned by this field's argument
    ///    class.
    /// 4. Every argument's value matches its expected type.
    ///
    /// Children and arguments keep the order they were given in.
    pub fn attach_children_and_arguments(
        &self,
        fields: Vec<GraphQueryField>,
        arguments: Vec<GraphQueryArgument>,
    ) -> Result<Self> {
        let validator = SelectionValidator::new(self.name.as_str());
        validator.validate_child_fields(self.child_class, &fields)?;
        validator.validate_arguments(
            self.argument_class,
            self.rules.requires_arguments(),
            &arguments,
        )?;

        log::trace!(
            "Attached {} child fields and {} arguments to `{}` ({} query).",
            fields.len(),
            arguments.len(),
            self.name,
            self.query_type,
        );

        Ok(Self {
            arguments,
            children: fields,
            ..self.clone()
        })
    }

    pub fn argument_class(&self) -> Option<ArgumentClass> {
        self.argument_class
    }

    pub fn arguments(&self) -> &[GraphQueryArgument] {
        self.arguments.as_slice()
    }

    pub fn child_class(&self) -> Option<FieldClass> {
        self.child_class
    }

    pub fn children(&self) -> &[GraphQueryField] {
        self.children.as_slice()
    }

    /// Returns `true` for scalar fields that never take child fields.
    pub fn is_leaf(&self) -> bool {
        self.child_class.is_none()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The [`FieldClass`] (container) this field was defined by.
    pub fn owner(&self) -> FieldClass {
        self.owner
    }

    pub fn query_type(&self) -> QueryType {
        self.query_type
    }

    pub fn rules(&self) -> &FieldRules {
        &self.rules
    }

    /// Walk this field and all of its descendants, failing with
    /// [`QueryBuildError::Configuration`] on the first field that was not
    /// defined for `query_type`.
    pub(crate) fn validate_query_type(&self, query_type: QueryType) -> Result<()> {
        if self.query_type != query_type || !self.rules.allows(query_type) {
            return Err(QueryBuildError::Configuration {
                field_name: self.name.to_string(),
                query_type,
            });
        }

        self.children.iter()
            .try_for_each(|child| child.validate_query_type(query_type))
    }
}
impl std::fmt::Display for GraphQueryField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", RenderedSelection {
            arguments: &self.arguments,
            children: &self.children,
            name: &self.name,
        })
    }
}

/// Renders `name(arg: value, ...) { child child }` with the argument list
/// and child block omitted when empty.
pub(crate) struct RenderedSelection<'a> {
    pub arguments: &'a [GraphQueryArgument],
    pub children: &'a [GraphQueryField],
    pub name: &'a str,
}
impl std::fmt::Display for RenderedSelection<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name)?;

        if !self.arguments.is_empty() {
            f.write_str("(")?;
            for (idx, argument) in self.arguments.iter().enumerate() {
                if idx > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{argument}")?;
            }
            f.write_str(")")?;
        }

        if !self.children.is_empty() {
            f.write_str(" {")?;
            for child in self.children {
                write!(f, " {child}")?;
            }
            f.write_str(" }")?;
        }

        Ok(())
    }
}
