//! Lowering of type references into TypeScript type syntax.

use gqodegen_codegen::ScalarMapper;
use gqodegen_ir::TypeRef;

/// Flatten a type reference into TypeScript syntax.
///
/// Lists become `Array<...>` and named types go through the scalar mapper.
/// Non-null wrappers are dropped: the generated declarations do not
/// distinguish nullable from non-null types.
pub fn flatten_type(ty: &TypeRef, mapper: &dyn ScalarMapper) -> String {
    match ty {
        TypeRef::List(inner) => format!("Array<{}>", flatten_type(inner, mapper)),
        TypeRef::NonNull(inner) => flatten_type(inner, mapper),
        TypeRef::Named(name) => mapper.map_scalar(name).to_string(),
    }
}
