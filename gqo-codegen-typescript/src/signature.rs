//! Root field function signatures.

use gqodegen_codegen::ScalarMapper;
use gqodegen_ir::FieldDef;

use crate::{
    ast::{FnSignature, Param},
    flatten::flatten_type,
    literal::render_literal,
};

/// Object types whose fields are emitted as functions.
pub const ROOT_TYPES: &[&str] = &["Query", "Mutation"];

pub fn is_root_type(name: &str) -> bool {
    ROOT_TYPES.contains(&name)
}

/// Signature for one `Query` or `Mutation` field.
///
/// With `render_defaults`, arguments that have a default get an initializer.
pub fn function_signature(
    field: &FieldDef,
    render_defaults: bool,
    mapper: &dyn ScalarMapper,
) -> FnSignature {
    field.arguments.iter().fold(
        FnSignature::new(&field.name, flatten_type(&field.ty, mapper)),
        |sig, arg| {
            let mut param = Param::new(&arg.name, flatten_type(&arg.ty, mapper));
            if render_defaults {
                if let Some(default) = &arg.default {
                    param = param.default_value(render_literal(default));
                }
            }
            sig.param(param)
        },
    )
}

#[cfg(test)]
mod tests {
    use gqodegen_ir::{ArgumentDef, DefaultValue, TypeRef};

    use super::*;
    use crate::TypeScriptScalarMapper;

    fn ids_field() -> FieldDef {
        let ids = TypeRef::list(TypeRef::non_null(TypeRef::named("Int")));
        FieldDef::new("users", TypeRef::list(TypeRef::named("User")))
            .argument(ArgumentDef::new("ids", ids).with_default(DefaultValue::List(vec![])))
    }

    #[test]
    fn test_zero_argument_field() {
        let field = FieldDef::new("me", TypeRef::named("User"));
        let sig = function_signature(&field, true, &TypeScriptScalarMapper);
        assert_eq!(sig.to_line(), "export function me(): User;");
    }

    #[test]
    fn test_default_rendered_when_enabled() {
        let sig = function_signature(&ids_field(), true, &TypeScriptScalarMapper);
        assert_eq!(
            sig.to_line(),
            "export function users(ids: Array<Int> = []): Array<User>;"
        );
    }

    #[test]
    fn test_default_omitted_when_disabled() {
        let sig = function_signature(&ids_field(), false, &TypeScriptScalarMapper);
        assert_eq!(
            sig.to_line(),
            "export function users(ids: Array<Int>): Array<User>;"
        );
    }

    #[test]
    fn test_root_types() {
        assert!(is_root_type("Query"));
        assert!(is_root_type("Mutation"));
        assert!(!is_root_type("Subscription"));
        assert!(!is_root_type("query"));
    }
}
