//! Top-level schema definitions.

use serde::Serialize;

use crate::{DefaultValue, TypeRef};

/// A lowered SDL document, definitions in source order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SchemaDocument {
    /// File the document was read from, used in error messages.
    pub filename: String,
    pub definitions: Vec<Definition>,
}

impl SchemaDocument {
    pub fn new(filename: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            definitions: Vec::new(),
        }
    }
}

/// Position of a definition in the source file (1-based).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Location {
    pub line: usize,
    pub column: usize,
}

impl Location {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A top-level definition.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "definition", rename_all = "snake_case")]
pub enum Definition {
    Scalar(ScalarDef),
    Enum(EnumDef),
    Object(ObjectTypeDef),
    ObjectExtension(ObjectTypeExtension),
    Input(InputTypeDef),
    /// Interfaces, unions, directive and schema definitions, extensions of
    /// anything but objects, operations and fragments. Kept so the walk can
    /// observe them.
    Other {
        kind: String,
        name: Option<String>,
        location: Location,
    },
}

impl Definition {
    /// The defined or extended type name, if the definition has one.
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Scalar(def) => Some(&def.name),
            Self::Enum(def) => Some(&def.name),
            Self::Object(def) => Some(&def.name),
            Self::ObjectExtension(def) => Some(&def.name),
            Self::Input(def) => Some(&def.name),
            Self::Other { name, .. } => name.as_deref(),
        }
    }

    pub fn location(&self) -> Location {
        match self {
            Self::Scalar(def) => def.location,
            Self::Enum(def) => def.location,
            Self::Object(def) => def.location,
            Self::ObjectExtension(def) => def.location,
            Self::Input(def) => def.location,
            Self::Other { location, .. } => *location,
        }
    }

    /// True for definitions that introduce a new name into the type namespace.
    ///
    /// Extensions, directive definitions, operations and fragments do not.
    pub fn declares_type(&self) -> bool {
        match self {
            Self::ObjectExtension(_) => false,
            Self::Other { kind, name, .. } => {
                name.is_some()
                    && !matches!(kind.as_str(), "directive" | "operation" | "fragment")
                    && !kind.ends_with("extension")
            }
            _ => true,
        }
    }

    /// Short name of the definition kind.
    pub fn kind(&self) -> &str {
        match self {
            Self::Scalar(_) => "scalar",
            Self::Enum(_) => "enum",
            Self::Object(_) => "object",
            Self::ObjectExtension(_) => "object extension",
            Self::Input(_) => "input",
            Self::Other { kind, .. } => kind,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScalarDef {
    pub name: String,
    pub location: Location,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnumDef {
    pub name: String,
    /// Value names in declaration order.
    pub values: Vec<String>,
    pub location: Location,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ObjectTypeDef {
    pub name: String,
    pub description: Option<String>,
    pub fields: Vec<FieldDef>,
    pub location: Location,
}

/// `extend type Name { ... }`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ObjectTypeExtension {
    pub name: String,
    pub fields: Vec<FieldDef>,
    pub location: Location,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InputTypeDef {
    pub name: String,
    pub description: Option<String>,
    pub fields: Vec<ArgumentDef>,
    pub location: Location,
}

/// A field of an object type.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldDef {
    pub name: String,
    pub description: Option<String>,
    pub arguments: Vec<ArgumentDef>,
    pub ty: TypeRef,
}

impl FieldDef {
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            description: None,
            arguments: Vec::new(),
            ty,
        }
    }

    pub fn argument(mut self, argument: ArgumentDef) -> Self {
        self.arguments.push(argument);
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Fields with arguments render as callables rather than properties.
    pub fn has_arguments(&self) -> bool {
        !self.arguments.is_empty()
    }
}

/// A field argument or an input object field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArgumentDef {
    pub name: String,
    pub description: Option<String>,
    pub ty: TypeRef,
    pub default: Option<DefaultValue>,
}

impl ArgumentDef {
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            description: None,
            ty,
            default: None,
        }
    }

    pub fn with_default(mut self, value: DefaultValue) -> Self {
        self.default = Some(value);
        self
    }
}
