//! TypeScript import builder.

use gqodegen_codegen::{CodeFragment, Renderable};

/// Builder for `import { A, B } from "./module";`.
#[derive(Debug, Clone)]
pub struct Import {
    from: String,
    named: Vec<String>,
}

impl Import {
    pub fn new(from: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            named: Vec::new(),
        }
    }

    /// Import a named export. Names already imported are skipped.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        if !self.named.contains(&name) {
            self.named.push(name);
        }
        self
    }

    pub fn named_all<I, S>(self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        names.into_iter().fold(self, |import, name| import.named(name))
    }
}

impl Renderable for Import {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let line = if self.named.is_empty() {
            format!("import \"{}\";", self.from)
        } else {
            format!(
                "import {{ {} }} from \"{}\";",
                self.named.join(", "),
                self.from
            )
        };
        vec![CodeFragment::Line(line)]
    }
}
