use std::path::PathBuf;

use gqodegen_ir::Location;
use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for schema operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Schema source and filename, for building spanned errors.
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    /// Create a parse error from a parser error.
    pub fn parse_error(&self, source: &async_graphql_parser::Error) -> Box<Error> {
        let span = source
            .positions()
            .next()
            .map(|pos| self.span_at(Location::new(pos.line, pos.column)));
        Box::new(Error::Parse {
            src: self.named_source(),
            span,
            message: source.to_string(),
        })
    }

    /// Create an invalid extension error for `extend type <name>`.
    pub fn invalid_extension_error(&self, name: impl Into<String>, at: Location) -> Box<Error> {
        Box::new(Error::InvalidExtension {
            src: self.named_source(),
            span: self.span_at(at),
            name: name.into(),
            filename: self.filename.clone(),
            line: at.line,
        })
    }

    fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Single-character span at a 1-based line/column.
    fn span_at(&self, at: Location) -> SourceSpan {
        SourceSpan::from((byte_offset(&self.src, at), 1))
    }
}

/// Byte offset of a 1-based line/column (columns count characters).
pub(crate) fn byte_offset(src: &str, at: Location) -> usize {
    let mut offset = 0;
    for (index, line) in src.split_inclusive('\n').enumerate() {
        if index + 1 == at.line {
            let column = line
                .char_indices()
                .nth(at.column.saturating_sub(1))
                .map(|(i, _)| i)
                .unwrap_or(line.len());
            return offset + column;
        }
        offset += line.len();
    }
    src.len()
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(help("set SOURCE or pass --source to point at the schema file"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse schema: {message}")]
    #[diagnostic(code(gqodegen::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        message: String,
    },

    #[error("extended {name} at {filename}:{line}, only Query and Mutation may be extended")]
    #[diagnostic(
        code(gqodegen::invalid_extension),
        help("move the fields of '{name}' into its type definition")
    )]
    InvalidExtension {
        #[source_code]
        src: NamedSource<String>,
        #[label("extension of '{name}'")]
        span: SourceSpan,
        name: String,
        filename: String,
        line: usize,
    },
}
