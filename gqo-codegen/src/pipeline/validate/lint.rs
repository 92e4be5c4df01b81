//! Lint trait for schema validation.

use crate::pipeline::{CompilationContext, Diagnostic};

/// Information about a lint.
#[derive(Debug, Clone)]
pub struct LintInfo {
    pub name: &'static str,
    pub description: &'static str,
}

/// A lint that checks the document for issues.
pub trait Lint: Send + Sync {
    /// The name of this lint (used in diagnostics).
    fn name(&self) -> &'static str;

    /// A human-readable description of what this lint checks.
    fn description(&self) -> &'static str;

    /// Check the document and add any diagnostics.
    fn check(&self, ctx: &CompilationContext, diagnostics: &mut Vec<Diagnostic>);

    fn info(&self) -> LintInfo {
        LintInfo {
            name: self.name(),
            description: self.description(),
        }
    }
}
