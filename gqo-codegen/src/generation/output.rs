use std::path::{Path, PathBuf};

use eyre::{Result, WrapErr};

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written
    Written,
    /// File already had the same content and was left untouched
    Unchanged,
}

/// A generated file to be written to disk.
#[derive(Debug, Clone)]
pub struct OutputFile {
    path: PathBuf,
    content: String,
}

impl OutputFile {
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Write the file, creating parent directories as needed.
    ///
    /// A file whose current content is identical is not rewritten, so its
    /// modification time only changes when the output does.
    pub fn write(&self) -> Result<WriteResult> {
        if let Ok(existing) = std::fs::read_to_string(&self.path) {
            if existing == self.content {
                return Ok(WriteResult::Unchanged);
            }
        }

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).wrap_err_with(|| {
                    format!("failed to create directory '{}'", parent.display())
                })?;
            }
        }
        std::fs::write(&self.path, &self.content)
            .wrap_err_with(|| format!("failed to write '{}'", self.path.display()))?;
        Ok(WriteResult::Written)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_write_creates_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("generated.ts");

        let result = OutputFile::new(&path, "export {};\n").write().unwrap();

        assert_eq!(result, WriteResult::Written);
        assert_eq!(fs::read_to_string(&path).unwrap(), "export {};\n");
    }

    #[test]
    fn test_write_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("a").join("b").join("generated.ts");

        OutputFile::new(&path, "nested").write().unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "nested");
    }

    #[test]
    fn test_write_overwrites_changed_content() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("generated.ts");
        fs::write(&path, "old").unwrap();

        let result = OutputFile::new(&path, "new").write().unwrap();

        assert_eq!(result, WriteResult::Written);
        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
    }

    #[test]
    fn test_write_skips_identical_content() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("generated.ts");
        fs::write(&path, "same").unwrap();

        let result = OutputFile::new(&path, "same").write().unwrap();

        assert_eq!(result, WriteResult::Unchanged);
    }
}
