//! Renderable trait and CodeFragment.
//!
//! AST nodes describe themselves as fragments; only [`CodeBuilder`] knows
//! about indentation and line endings.

use super::{CodeBuilder, Indent};

/// A piece of generated code.
#[derive(Debug, Clone, PartialEq)]
pub enum CodeFragment {
    /// A single line of code (newline appended).
    Line(String),
    /// A line comment. Multi-line text becomes one comment line per line.
    Comment(String),
    /// A header line, an indented body, and an optional closing line.
    Block {
        header: String,
        body: Vec<CodeFragment>,
        close: Option<String>,
    },
}

impl CodeFragment {
    pub fn line(s: impl Into<String>) -> Self {
        Self::Line(s.into())
    }

    pub fn comment(s: impl Into<String>) -> Self {
        Self::Comment(s.into())
    }

    pub fn block(
        header: impl Into<String>,
        body: Vec<CodeFragment>,
        close: impl Into<String>,
    ) -> Self {
        Self::Block {
            header: header.into(),
            body,
            close: Some(close.into()),
        }
    }
}

/// Types that can be rendered as code.
pub trait Renderable {
    /// Convert this node into code fragments.
    fn to_fragments(&self) -> Vec<CodeFragment>;

    /// Render this node on its own with the given indentation.
    fn render(&self, indent: Indent) -> String {
        let mut builder = CodeBuilder::new(indent);
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for CodeFragment {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![self.clone()]
    }
}
