use std::path::{Path, PathBuf};

use gqodegen_ir::SchemaDocument;

use crate::{Error, Result, SourceContext};

/// A schema file with both its raw content and the lowered document.
#[derive(Debug)]
pub struct SchemaFile {
    path: PathBuf,
    content: String,
    document: SchemaDocument,
}

impl SchemaFile {
    /// Read and parse a schema file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let filename = path.display().to_string();
        tracing::info!(path = %filename, "building AST");
        let document = crate::parse_str_with_filename(&content, &filename)?;

        Ok(Self {
            path,
            content,
            document,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn document(&self) -> &SchemaDocument {
        &self.document
    }

    /// Source context for reporting errors found after parsing.
    pub fn source_context(&self) -> SourceContext {
        SourceContext::new(self.content.clone(), self.path.display().to_string())
    }
}
