//! Compilation context passed from validation to generation.

use gqodegen_ir::SchemaDocument;

use super::diagnostic::Diagnostic;

/// The document being compiled and everything learned about it so far.
#[derive(Debug)]
pub struct CompilationContext {
    pub document: SchemaDocument,
    pub diagnostics: Vec<Diagnostic>,
}

impl CompilationContext {
    pub fn new(document: SchemaDocument) -> Self {
        Self {
            document,
            diagnostics: Vec::new(),
        }
    }

    pub fn error_count(&self) -> usize {
        self.errors().count()
    }

    pub fn warning_count(&self) -> usize {
        self.warnings().count()
    }

    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| d.severity.is_error())
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| d.severity.is_warning())
    }

    /// Format a definition location as `file:line:column`.
    pub fn location(&self, at: gqodegen_ir::Location) -> String {
        format!("{}:{}", self.document.filename, at)
    }
}
