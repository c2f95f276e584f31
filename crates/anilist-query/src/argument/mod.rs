mod argument_class;
mod argument_value;
mod argument_value_kind;
mod graph_query_argument;

pub use argument_class::ArgumentClass;
pub use argument_value::ArgumentValue;
pub use argument_value_kind::ArgumentValueKind;
pub use graph_query_argument::GraphQueryArgument;

#[cfg(test)]
mod tests;
