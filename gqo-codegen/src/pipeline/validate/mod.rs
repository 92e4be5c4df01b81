//! Validate phase - runs lints on the lowered schema.

mod lint;
pub mod lints;

pub use lint::{Lint, LintInfo};
pub use lints::{DuplicateDefinitionLint, EmptyEnumLint, InputFieldTypeLint, UnknownTypeLint};

use crate::pipeline::CompilationContext;

/// Phase that validates the document using configurable lints.
pub struct ValidatePhase {
    lints: Vec<Box<dyn Lint>>,
}

impl ValidatePhase {
    /// Create a new validate phase with default lints.
    pub fn new() -> Self {
        Self {
            lints: vec![
                Box::new(UnknownTypeLint),
                Box::new(InputFieldTypeLint),
                Box::new(DuplicateDefinitionLint),
                Box::new(EmptyEnumLint),
            ],
        }
    }

    /// Create a validate phase with no lints.
    pub fn empty() -> Self {
        Self { lints: Vec::new() }
    }

    /// Add a custom lint to the validation phase.
    pub fn with_lint(mut self, lint: impl Lint + 'static) -> Self {
        self.lints.push(Box::new(lint));
        self
    }

    /// Information about all lints that will be run.
    pub fn lint_info(&self) -> Vec<LintInfo> {
        self.lints.iter().map(|l| l.info()).collect()
    }

    pub fn run(&self, ctx: &mut CompilationContext) {
        for lint in &self.lints {
            let mut found = Vec::new();
            lint.check(ctx, &mut found);
            tracing::debug!(lint = lint.name(), diagnostics = found.len(), "lint done");
            ctx.diagnostics.extend(found);
        }
    }
}

impl Default for ValidatePhase {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use gqodegen_ir::SchemaDocument;

    use super::*;
    use crate::pipeline::Diagnostic;

    #[test]
    fn test_custom_lint_runs_after_defaults() {
        struct AlwaysErrorLint;
        impl Lint for AlwaysErrorLint {
            fn name(&self) -> &'static str {
                "always-error"
            }
            fn description(&self) -> &'static str {
                "Always produces an error"
            }
            fn check(&self, _ctx: &CompilationContext, diagnostics: &mut Vec<Diagnostic>) {
                diagnostics.push(Diagnostic::error(self.name(), "forced error"));
            }
        }

        let mut ctx = CompilationContext::new(SchemaDocument::new("a.gql"));
        ValidatePhase::new().with_lint(AlwaysErrorLint).run(&mut ctx);

        assert_eq!(ctx.error_count(), 1);
        assert_eq!(ctx.diagnostics[0].lint, "always-error");
    }

    #[test]
    fn test_default_lint_names() {
        let names: Vec<_> = ValidatePhase::new()
            .lint_info()
            .into_iter()
            .map(|info| info.name)
            .collect();
        assert_eq!(
            names,
            vec![
                "unknown-type",
                "input-field-type",
                "duplicate-definition",
                "empty-enum"
            ]
        );
    }
}
