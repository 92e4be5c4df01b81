//! Default value literals.

use serde::Serialize;

/// A literal written after `=` on an argument or input field.
///
/// Values are kept as written. Nothing checks them against the declared type.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum DefaultValue {
    List(Vec<DefaultValue>),
    /// Fields in source order.
    Object(Vec<(String, DefaultValue)>),
    /// Textual form of an integer literal.
    Int(String),
    /// Textual form of a float literal.
    Float(String),
    Bool(bool),
    String(String),
    Null,
    /// `$name`
    Variable(String),
    /// Any literal kind the renderers have no target syntax for, e.g. an enum
    /// symbol. Carries the kind name for reporting.
    Unsupported(String),
}

impl DefaultValue {
    /// Short name of the literal kind, as used in log output.
    pub fn kind(&self) -> &str {
        match self {
            Self::List(_) => "list",
            Self::Object(_) => "object",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::Bool(_) => "bool",
            Self::String(_) => "string",
            Self::Null => "null",
            Self::Variable(_) => "variable",
            Self::Unsupported(kind) => kind,
        }
    }
}
