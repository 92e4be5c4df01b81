//! Lint for duplicate type definitions.

use std::collections::HashMap;

use crate::pipeline::{CompilationContext, Diagnostic, Lint};

/// Lint that warns when a type name is declared more than once.
///
/// Generation still emits every declaration; the later one wins in
/// TypeScript's eyes for enums and is a compile error for type aliases.
pub struct DuplicateDefinitionLint;

impl Lint for DuplicateDefinitionLint {
    fn name(&self) -> &'static str {
        "duplicate-definition"
    }

    fn description(&self) -> &'static str {
        "Detect type names declared more than once"
    }

    fn check(&self, ctx: &CompilationContext, diagnostics: &mut Vec<Diagnostic>) {
        let mut seen: HashMap<&str, String> = HashMap::new();

        for definition in ctx.document.definitions.iter().filter(|d| d.declares_type()) {
            let Some(name) = definition.name() else {
                continue;
            };
            let here = ctx.location(definition.location());
            if let Some(first) = seen.get(name) {
                diagnostics.push(
                    Diagnostic::warning(
                        self.name(),
                        format!("type '{}' is already defined at {}", name, first),
                    )
                    .at(here),
                );
            } else {
                seen.insert(name, here);
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
        DuplicateDefinitionLint.check(&ctx, &mut diagnostics);
        diagnostics
    }

    #[test]
    fn test_no_duplicates() {
        assert!(check("scalar A\nscalar B").is_empty());
    }

    #[test]
    fn test_duplicate_across_kinds() {
        let diagnostics = check("scalar Color\nenum Color { RED }");
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].severity.is_warning());
        assert_eq!(
            diagnostics[0].message,
            "type 'Color' is already defined at schema.gql:1:1"
        );
        assert_eq!(diagnostics[0].location.as_deref(), Some("schema.gql:2:1"));
    }

    #[test]
    fn test_operation_name_is_not_a_type() {
        assert!(check("scalar Me\ntype Query { me: Me }\nquery Me { me }").is_empty());
    }

    #[test]
    fn test_extension_is_not_a_duplicate() {
        assert!(check("type Query { a: Int }\nextend type Query { b: Int }").is_empty());
    }
}
