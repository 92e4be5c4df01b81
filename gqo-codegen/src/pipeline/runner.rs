//! Pipeline orchestrator.

use gqodegen_ir::SchemaDocument;

use super::{CompilationContext, ValidatePhase};

/// Runs validation over a document and returns the resulting context.
///
/// Diagnostics never abort the run. Only the first one is logged, the rest
/// stay in [`CompilationContext::diagnostics`].
pub struct Pipeline {
    validate: ValidatePhase,
}

impl Pipeline {
    /// Create a pipeline with the default lints.
    pub fn new() -> Self {
        Self {
            validate: ValidatePhase::new(),
        }
    }

    /// Replace the validation phase (e.g. with a custom lint set).
    pub fn with_validate_phase(mut self, validate: ValidatePhase) -> Self {
        self.validate = validate;
        self
    }

    pub fn run(&self, document: SchemaDocument) -> CompilationContext {
        let mut ctx = CompilationContext::new(document);
        self.validate.run(&mut ctx);

        if let Some(first) = ctx.diagnostics.first() {
            tracing::warn!(
                errors = ctx.error_count(),
                warnings = ctx.warning_count(),
                "schema validation: {}",
                first
            );
        }

        ctx
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pipeline_collects_all_diagnostics() {
        let document = gqodegen_schema::parse_str(
            r#"
            type User { posts: [Post] }
            type User { name: String }
            "#,
        )
        .unwrap();

        let ctx = Pipeline::new().run(document);

        assert_eq!(ctx.error_count(), 1);
        assert_eq!(ctx.warning_count(), 1);
    }

    #[test]
    fn test_pipeline_with_empty_phase_keeps_document() {
        let document = gqodegen_schema::parse_str("type Query { a: Missing }").unwrap();

        let ctx = Pipeline::new()
            .with_validate_phase(ValidatePhase::empty())
            .run(document);

        assert!(ctx.diagnostics.is_empty());
        assert_eq!(ctx.document.definitions.len(), 1);
    }
}
