//! Lint for enums without values.

use gqodegen_ir::Definition;

use crate::pipeline::{CompilationContext, Diagnostic, Lint};

/// Lint that warns about enums declaring no values.
pub struct EmptyEnumLint;

impl Lint for EmptyEnumLint {
    fn name(&self) -> &'static str {
        "empty-enum"
    }

    fn description(&self) -> &'static str {
        "Warn about enums with no values"
    }

    fn check(&self, ctx: &CompilationContext, diagnostics: &mut Vec<Diagnostic>) {
        for definition in &ctx.document.definitions {
            if let Definition::Enum(def) = definition {
                if def.values.is_empty() {
                    diagnostics.push(
                        Diagnostic::warning(
                            self.name(),
                            format!("enum '{}' has no values", def.name),
                        )
                        .at(ctx.location(def.location)),
                    );
                }
            }
        }
    }
}
