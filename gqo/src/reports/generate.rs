//! Generate command report data structures.

use std::path::PathBuf;

use gqodegen_codegen::generation::WriteResult;

use super::output::{Output, Report};

/// Report data from a generate run.
#[derive(Debug)]
pub struct GenerateReport {
    pub output_path: PathBuf,
    pub written: WriteResult,
    /// Number of validation diagnostics found (not fatal).
    pub diagnostics: usize,
    /// Command line of the compile hook, if one ran.
    pub compiled: Option<String>,
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        match self.written {
            WriteResult::Written => {
                out.preformatted(&format!("Generated: {}", self.output_path.display()))
            }
            WriteResult::Unchanged => {
                out.preformatted(&format!("Unchanged: {}", self.output_path.display()))
            }
        }

        if self.diagnostics > 0 {
            out.warning(&format!(
                "schema has {} validation issue{}, run `gqodegen check` for details",
                self.diagnostics,
                if self.diagnostics == 1 { "" } else { "s" }
            ));
        }

        if let Some(command) = &self.compiled {
            out.preformatted(&format!("Compiled: {}", command));
        }
    }
}
