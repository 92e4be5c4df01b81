//! Check operation - schema validation.

use std::path::Path;

use gqodegen_codegen::pipeline::{Pipeline, Severity};
use gqodegen_ir::SchemaDocument;

use crate::reports::CheckReport;

/// Execute the check operation.
///
/// Runs every lint over the document and collects all diagnostics.
pub fn check(document: &SchemaDocument, source_path: &Path) -> CheckReport {
    let ctx = Pipeline::new().run(document.clone());

    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    for diag in &ctx.diagnostics {
        let msg = match &diag.location {
            Some(loc) => format!("[{}] {}\n  --> {}", diag.lint, diag.message, loc),
            None => format!("[{}] {}", diag.lint, diag.message),
        };

        match diag.severity {
            Severity::Error => errors.push(msg),
            Severity::Warning => warnings.push(msg),
        }
    }

    CheckReport {
        source_path: source_path.to_path_buf(),
        errors,
        warnings,
    }
}
