//! Check command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from schema validation.
#[derive(Debug)]
pub struct CheckReport {
    /// Path to the schema file.
    pub source_path: PathBuf,
    /// Error messages.
    pub errors: Vec<String>,
    /// Warning messages.
    pub warnings: Vec<String>,
}

impl CheckReport {
    /// Whether the check passed (no errors).
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for error in &self.errors {
            out.error(error);
        }

        for warning in &self.warnings {
            out.warning(warning);
        }

        if !self.warnings.is_empty() || !self.errors.is_empty() {
            out.newline();
        }

        if self.is_valid() {
            out.preformatted(&format!("✓ {} is valid", self.source_path.display()));
        } else {
            out.preformatted(&format!(
                "✗ {}: {} error{}, {} warning{}",
                self.source_path.display(),
                self.errors.len(),
                if self.errors.len() == 1 { "" } else { "s" },
                self.warnings.len(),
                if self.warnings.len() == 1 { "" } else { "s" },
            ));
        }
    }
}
