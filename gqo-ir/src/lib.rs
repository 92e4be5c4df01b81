//! Intermediate representation types for gqodegen.
//!
//! The schema crate lowers a parsed GraphQL SDL document into these types and
//! the code generators only ever see them, never the parser's AST.
//!
//! # Architecture
//!
//! ```text
//! schema.gql → gqo-schema (parsing, lowering) → gqo-ir → codegen
//! ```

mod definition;
mod types;
mod value;

pub use definition::{
    ArgumentDef, Definition, EnumDef, FieldDef, InputTypeDef, Location, ObjectTypeDef,
    ObjectTypeExtension, ScalarDef, SchemaDocument,
};
pub use types::{BUILTIN_SCALARS, TypeRef, is_builtin_scalar};
pub use value::DefaultValue;
