//! Lint for output types used in input positions.

use std::collections::HashSet;

use gqodegen_ir::Definition;

use super::type_uses;
use crate::pipeline::{CompilationContext, Diagnostic, Lint};

/// Lint that reports arguments and input fields typed as object, interface
/// or union types.
pub struct InputFieldTypeLint;

impl Lint for InputFieldTypeLint {
    fn name(&self) -> &'static str {
        "input-field-type"
    }

    fn description(&self) -> &'static str {
        "Check that arguments and input fields only use input types"
    }

    fn check(&self, ctx: &CompilationContext, diagnostics: &mut Vec<Diagnostic>) {
        let output_types: HashSet<&str> = ctx
            .document
            .definitions
            .iter()
            .filter_map(|definition| match definition {
                Definition::Object(obj) => Some(obj.name.as_str()),
                Definition::Other {
                    kind,
                    name: Some(name),
                    ..
                } if kind == "interface" || kind == "union" => Some(name.as_str()),
                _ => None,
            })
            .collect();

        for type_use in type_uses(&ctx.document).into_iter().filter(|u| u.input) {
            let name = type_use.ty.base_name();
            if output_types.contains(name) {
                diagnostics.push(
                    Diagnostic::error(
                        self.name(),
                        format!(
                            "'{}' uses output type '{}' as an input",
                            type_use.path, name
                        ),
                    )
                    .at(ctx.location(type_use.location)),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(sdl: &str) -> Vec<Diagnostic> {
        let ctx = CompilationContext::new(gqodegen_schema::parse_str(sdl).unwrap());
        let mut diagnostics = Vec::new();
        InputFieldTypeLint.check(&ctx, &mut diagnostics);
        diagnostics
    }

    #[test]
    fn test_input_types_pass() {
        let diagnostics = check(
            r#"
            input Filter { q: String }
            type Query { search(filter: Filter): [String] }
            "#,
        );
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_object_as_input_field() {
        let diagnostics = check(
            r#"
            type User { name: String }
            input Filter { owner: User }
            "#,
        );
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(
            diagnostics[0].message,
            "'Filter.owner' uses output type 'User' as an input"
        );
    }

    #[test]
    fn test_union_as_argument() {
        let diagnostics = check(
            r#"
            type A { a: Int }
            union Thing = A
            type Query { take(thing: [Thing!]): Int }
            "#,
        );
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].message.contains("Query.take(thing)"));
    }
}
