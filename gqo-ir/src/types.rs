//! Type references.

use serde::Serialize;

/// Scalars every GraphQL schema has without declaring them.
pub const BUILTIN_SCALARS: &[&str] = &["Int", "Float", "String", "Boolean", "ID"];

/// Returns true if `name` is one of the builtin GraphQL scalars.
pub fn is_builtin_scalar(name: &str) -> bool {
    BUILTIN_SCALARS.contains(&name)
}

/// A reference to a type, as written at a field or argument position.
///
/// Wrappers nest arbitrarily: `[[Int!]]!` is
/// `NonNull(List(List(NonNull(Named("Int")))))`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeRef {
    /// `[inner]`
    List(Box<TypeRef>),
    /// `inner!`
    NonNull(Box<TypeRef>),
    /// A bare type name.
    Named(String),
}

impl TypeRef {
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    pub fn list(inner: TypeRef) -> Self {
        Self::List(Box::new(inner))
    }

    pub fn non_null(inner: TypeRef) -> Self {
        Self::NonNull(Box::new(inner))
    }

    /// The name at the bottom of all wrappers.
    pub fn base_name(&self) -> &str {
        match self {
            Self::List(inner) | Self::NonNull(inner) => inner.base_name(),
            Self::Named(name) => name,
        }
    }
}

impl std::fmt::Display for TypeRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::List(inner) => write!(f, "[{}]", inner),
            Self::NonNull(inner) => write!(f, "{}!", inner),
            Self::Named(name) => f.write_str(name),
        }
    }
}
