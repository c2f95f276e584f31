use crate::argument::ArgumentValueKind;

/// A literal value passed to a field argument.
#[derive(Clone, Debug, PartialEq)]
pub enum ArgumentValue {
    Boolean(bool),
    Enum {
        type_name: &'static str,
        value: &'static str,
    },
    Float(f64),
    Int(i64),
    List(Vec<ArgumentValue>),
    String(String),
}
impl ArgumentValue {
    /// Whether this value can be passed where `kind` is expected.
    ///
    /// Follows GraphQL input coercion: an `Int` is accepted where a `Float`
    /// is expected, and a single value is accepted where a list of that value
    /// is expected. Enum values only match the enum type they came from.
    ///
    /// GraphQL `Int` is a signed 32-bit integer and `Float` has no literal
    /// for NaN or infinity, so values outside those ranges are rejected.
    pub fn is_assignable_to(&self, kind: &ArgumentValueKind) -> bool {
        match (self, kind) {
            (Self::Boolean(_), ArgumentValueKind::Boolean)
                | (Self::Int(_), ArgumentValueKind::Float)
                | (Self::String(_), ArgumentValueKind::String) => true,

            (Self::Float(value), ArgumentValueKind::Float) => value.is_finite(),

            (Self::Int(value), ArgumentValueKind::Int) =>
                i32::try_from(*value).is_ok(),

            (Self::Enum { type_name, .. }, ArgumentValueKind::Enum(expected)) =>
                type_name == expected,

            (Self::List(items), ArgumentValueKind::List(inner)) =>
                items.iter().all(|item| item.is_assignable_to(inner)),

            (Self::List(_), _) => false,

            (value, ArgumentValueKind::List(inner)) =>
                value.is_assignable_to(inner),

            _ => false,
        }
    }

    /// The schema type name of this value, used when reporting a mismatch.
    ///
    /// Lists are described by their first element; an empty list is `[]`.
    pub fn type_description(&self) -> String {
        match self {
            Self::Boolean(_) => "Boolean".to_string(),
            Self::Enum { type_name, .. } => type_name.to_string(),
            Self::Float(_) => "Float".to_string(),
            Self::Int(_) => "Int".to_string(),
            Self::List(items) => match items.first() {
                Some(first) => format!("[{}]", first.type_description()),
                None => "[]".to_string(),
            },
            Self::String(_) => "String".to_string(),
        }
    }
}
impl std::fmt::Display for ArgumentValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Boolean(value) => write!(f, "{value}"),
            Self::Enum { value, .. } => f.write_str(value),
            // GraphQL float literals need a fractional part or an exponent.
            Self::Float(value) if value.is_finite() && value.fract() == 0.0 =>
                write!(f, "{value:.1}"),
            Self::Float(value) => write!(f, "{value}"),
            Self::Int(value) => write!(f, "{value}"),
            Self::List(items) => {
                f.write_str("[")?;
                for (idx, item) in items.iter().enumerate() {
                    if idx > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            },
            Self::String(value) => write_string_literal(f, value),
        }
    }
}

fn write_string_literal(
    f: &mut std::fmt::Formatter<'_>,
    value: &str,
) -> std::fmt::Result {
    f.write_str("\"")?;
    for ch in value.chars() {
        match ch {
            '"' => f.write_str("\\\"")?,
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\r' => f.write_str("\\r")?,
            '\t' => f.write_str("\\t")?,
            '\u{8}' => f.write_str("\\b")?,
            '\u{c}' => f.write_str("\\f")?,
            ch if ch.is_control() => write!(f, "\\u{:04X}", ch as u32)?,
            ch => write!(f, "{ch}")?,
        }
    }
    f.write_str("\"")
}

impl std::convert::From<bool> for ArgumentValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}
impl std::convert::From<f64> for ArgumentValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}
impl std::convert::From<i32> for ArgumentValue {
    fn from(value: i32) -> Self {
        Self::Int(value.into())
    }
}
impl std::convert::From<i64> for ArgumentValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}
impl std::convert::From<&str> for ArgumentValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}
impl std::convert::From<String> for ArgumentValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}
impl<T: Into<ArgumentValue>> std::convert::From<Vec<T>> for ArgumentValue {
    fn from(value: Vec<T>) -> Self {
        Self::List(value.into_iter().map(Into::into).collect())
    }
}
