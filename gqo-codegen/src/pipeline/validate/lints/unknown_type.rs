//! Lint for references to undeclared types.

use std::collections::HashSet;

use gqodegen_ir::is_builtin_scalar;

use super::type_uses;
use crate::pipeline::{CompilationContext, Diagnostic, Lint};

/// Lint that reports named types that are neither declared nor builtin.
pub struct UnknownTypeLint;

impl Lint for UnknownTypeLint {
    fn name(&self) -> &'static str {
        "unknown-type"
    }

    fn description(&self) -> &'static str {
        "Check that every referenced type is declared in the schema"
    }

    fn check(&self, ctx: &CompilationContext, diagnostics: &mut Vec<Diagnostic>) {
        let declared: HashSet<&str> = ctx
            .document
            .definitions
            .iter()
            .filter(|d| d.declares_type())
            .filter_map(|d| d.name())
            .collect();

        for type_use in type_uses(&ctx.document) {
            let name = type_use.ty.base_name();
            if !declared.contains(name) && !is_builtin_scalar(name) {
                diagnostics.push(
                    Diagnostic::error(
                        self.name(),
                        format!("unknown type '{}' in '{}'", name, type_use.path),
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
        UnknownTypeLint.check(&ctx, &mut diagnostics);
        diagnostics
    }

    #[test]
    fn test_builtins_and_declared_types_pass() {
        let diagnostics = check(
            r#"
            scalar Email
            enum Role { ADMIN }
            type User { email: Email, role: Role, id: ID!, tags: [String!] }
            type Query { user(id: ID!): User }
            "#,
        );
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_unknown_field_type() {
        let diagnostics = check("type Query { posts: [Post!]! }");
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].severity.is_error());
        assert_eq!(
            diagnostics[0].message,
            "unknown type 'Post' in 'Query.posts'"
        );
    }

    #[test]
    fn test_unknown_argument_type() {
        let diagnostics = check("type Query { find(filter: Filter): Int }");
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].message.contains("Query.find(filter)"));
    }

    #[test]
    fn test_extensions_do_not_declare() {
        let diagnostics = check(
            r#"
            type Query { a: Int }
            extend type Query { b: Extra }
            "#,
        );
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].message.contains("'Extra'"));
    }
}
