mod field_class;
mod field_rules;
mod graph_query_field;
mod selection_validator;

pub use field_class::FieldClass;
pub use field_rules::FieldRules;
pub use graph_query_field::GraphQueryField;
pub(crate) use graph_query_field::RenderedSelection;
pub(crate) use selection_validator::SelectionValidator;

#[cfg(test)]
mod tests;
